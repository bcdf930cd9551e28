#[derive(clap::Parser, Clone, Debug)]
pub struct AppConfig {
    #[clap(long, env)]
    pub stage: Stage,

    // App configs
    #[clap(long, env)]
    pub app_application_port: u16,

    #[clap(long, env)]
    pub app_application_host: String,

    // Avatar configs
    #[clap(long, env, default_value_t = 120)]
    pub app_avatar_default_size: u32,

    /// Seconds clients may cache a rendered avatar
    #[clap(long, env, default_value_t = 604_800)]
    pub app_avatar_cache_max_age: u64,
}

impl AppConfig {
    pub fn cache_control(&self) -> String {
        format!(
            "public, max-age={}, immutable",
            self.app_avatar_cache_max_age
        )
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab_case")]
pub enum Stage {
    Dev,
    Prod,
}

impl Stage {
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Stage::Dev => "debug",
            Stage::Prod => "info",
        }
    }
}

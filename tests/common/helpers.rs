use gradient_avatar::{
    app::Application,
    config::{AppConfig, Stage},
    telemetry::{build_telemetry, register_telemetry},
};
use std::sync::LazyLock;

static TELEMETRY: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::stdout);
        register_telemetry(telemetry);
    } else {
        let null_telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::sink);
        register_telemetry(null_telemetry);
    };
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_avatar(&self, name: &str, query: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/api/avatar/{}", &self.address, name))
            .query(query)
            .send()
            .await
            .expect("failed to execute request")
    }
}

pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TELEMETRY);

    let app_config = AppConfig {
        stage: Stage::Dev,
        // Use a random OS port
        app_application_port: 0,
        app_application_host: "127.0.0.1".to_string(),
        app_avatar_default_size: 120,
        app_avatar_cache_max_age: 604_800,
    };

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let app = Application::build(app_config).await.unwrap();

    let test_app = TestApp {
        address: format!("http://127.0.0.1:{}", &app.port),
        api_client,
    };

    _ = tokio::spawn(app.run_until_stopped());

    test_app
}

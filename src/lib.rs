pub mod app;
pub mod config;
pub mod routes;
pub mod telemetry;

pub use app::gradient::{generate_gradient, GradientSpec};

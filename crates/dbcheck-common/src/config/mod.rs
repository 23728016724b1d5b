//! Configuration structs

mod app_config;
mod dotenv;

pub use app_config::{AppSettings, ConfigError, ConnectionConfig, Environment, DB_ENV_VARS};
pub use dotenv::{load_dotenv, load_dotenv_from, DotenvStatus};

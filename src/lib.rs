pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use adapters::http::ReqwestTransport;
pub use adapters::log::{NullLog, TracingLog};
pub use config::{
    env_config::EnvConfig, layered::LayeredConfig, map_config::MapConfig,
    toml_config::TomlConfig, DataCiteSettings,
};
pub use crate::core::client::DoiClient;
pub use domain::model::{DoiRecord, Operation};
pub use utils::error::{DoiError, Result, TransportError};

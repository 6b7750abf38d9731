//! Configuration structs

mod app_config;

pub use app_config::{
    AppSettings, ClientConfig, CollabConfig, ConfigError, DirectoryConfig, Environment,
};

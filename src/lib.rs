pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{factory::MusicFactory, service::MusicService};
pub use crate::domain::model::{Album, Collection, Kind, MusicEntity, Single, Track};
pub use crate::domain::ports::{LogLevel, Logger};
pub use crate::utils::error::{CatalogError, Result};
pub use crate::utils::logger::{ConsoleLogger, FileLogger};

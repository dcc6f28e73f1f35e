pub mod factory;
pub mod service;

pub use crate::domain::model::{Kind, MusicEntity};
pub use crate::domain::ports::{LogLevel, Logger};
pub use crate::utils::error::Result;

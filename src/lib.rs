pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::ConsoleReporter, CliConfig};
pub use core::engine::RiftEngine;
pub use utils::error::{Result, RiftError};

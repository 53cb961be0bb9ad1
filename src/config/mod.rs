//! Configuration module for savey-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (site origin, user agent, timeouts)

pub mod paths;
pub mod settings;

pub use paths::SaveyPaths;
pub use settings::{OutputFormat, Settings};

//! Configuration system for the glint cursor-flash library.
//!
//! This crate provides configuration loading, saving, and default values
//! for the highlight engine, trigger policy, and navigation ring. It
//! includes:
//!
//! - The serializable [`Config`] settings surface with builder methods
//! - RGB [`Color`] and [`HighlightColor`] types used by the fade ramp
//! - Per-field serde defaults
//! - Typed [`ConfigError`] variants for I/O, parse, and validation failures

pub mod color;
pub mod config;
pub mod defaults;
mod error;

pub use color::{Color, HighlightColor};
pub use config::Config;
pub use error::ConfigError;

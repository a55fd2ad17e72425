//! Core utilities for the playprep publishing tools
//!
//! This crate provides functionality shared by every playprep component:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults and validation
//!
//! # Example
//!
//! ```rust,no_run
//! use playprep_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! for file in &config.schema.verify.files {
//!     println!("{}: {}", file.label, file.path.display());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};


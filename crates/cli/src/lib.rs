//! CLI utilities for the playprep tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Size and count formatting

#![warn(missing_docs)]

pub mod output;

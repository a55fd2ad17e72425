//! Publishing file verification
//!
//! Checks an ordered list of required files against the filesystem and
//! renders a per-file status report with an aggregate verdict:
//!
//! ```rust,no_run
//! use playprep_core::config::VerifyConfig;
//! use playprep_verify::{render_report, RenderOptions, Verifier};
//!
//! let config = VerifyConfig::default();
//! let report = Verifier::from_config(".", &config).run()?;
//!
//! let mut stdout = std::io::stdout().lock();
//! render_report(&report, &RenderOptions::from_config(&config), &mut stdout)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod check;
mod render;
mod report;

pub use check::{check_entry, Verifier};
pub use render::{render_error_json, render_json, render_report, RenderOptions, MISSING_MARKER, PRESENT_MARKER};
pub use report::{Aggregate, EntryStatus, PathKind, VerificationReport};

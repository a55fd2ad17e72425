//! Android screenshot tooling for Google Play listings
//!
//! This crate provides:
//! - Printed instructions for capturing emulator screenshots
//! - Google Play screenshot requirements
//! - An audit of collected screenshots against those requirements

#![warn(missing_docs)]

pub mod audit;
pub mod requirements;
pub mod screenshots;

pub use audit::{audit_screenshots, Finding, ScreenshotAudit, ScreenshotFile, Severity};
pub use requirements::{ScreenshotFormat, ScreenshotRequirements};
pub use screenshots::{GuideItem, GuideSection, ScreenshotGuide};

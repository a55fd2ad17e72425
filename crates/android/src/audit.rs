//! Screenshot set audit
//!
//! Applies [`ScreenshotRequirements`] to the files collected in the
//! screenshots directory. Only the top level of the directory is scanned;
//! non-image files such as `README.md` are ignored.

use crate::requirements::{ScreenshotFormat, ScreenshotRequirements, REJECTED_IMAGE_EXTENSIONS};
use playprep_core::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Google Play would reject the set
    Error,
    /// Accepted, but against recommendations
    Warning,
}

/// One problem with the screenshot set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// The screenshots directory does not exist
    MissingDirectory {
        /// Directory that was expected
        dir: PathBuf,
    },
    /// Fewer screenshots than required
    TooFew {
        /// Usable screenshots found
        found: usize,
        /// Required minimum
        min: usize,
    },
    /// Count outside the recommended range
    OutsideRecommended {
        /// Usable screenshots found
        found: usize,
        /// Lower end of the recommended range
        min: usize,
        /// Upper end of the recommended range
        max: usize,
    },
    /// Image in a format Google Play does not accept
    UnsupportedFormat {
        /// Offending file
        path: PathBuf,
    },
    /// File could not be decoded as an image
    Unreadable {
        /// Offending file
        path: PathBuf,
        /// Decoder error
        message: String,
    },
    /// A side is shorter than allowed
    TooSmall {
        /// Offending file
        path: PathBuf,
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
    /// A side is longer than allowed
    TooLarge {
        /// Offending file
        path: PathBuf,
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
    /// Landscape or square where portrait is expected
    NotPortrait {
        /// Offending file
        path: PathBuf,
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
}

impl Finding {
    /// Severity of the finding
    pub fn severity(&self) -> Severity {
        match self {
            Finding::OutsideRecommended { .. } | Finding::NotPortrait { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MissingDirectory { dir } => {
                write!(f, "Screenshots directory not found: {}", dir.display())
            }
            Finding::TooFew { found, min } => {
                write!(f, "Found {found} screenshot(s), at least {min} required")
            }
            Finding::OutsideRecommended { found, min, max } => {
                write!(f, "Found {found} screenshot(s), {min}-{max} recommended")
            }
            Finding::UnsupportedFormat { path } => {
                write!(f, "{}: unsupported format (use PNG or JPEG)", path.display())
            }
            Finding::Unreadable { path, message } => {
                write!(f, "{}: not a readable image ({message})", path.display())
            }
            Finding::TooSmall { path, width, height } => {
                write!(f, "{}: {width}x{height} has a side below the minimum", path.display())
            }
            Finding::TooLarge { path, width, height } => {
                write!(f, "{}: {width}x{height} has a side above the maximum", path.display())
            }
            Finding::NotPortrait { path, width, height } => {
                write!(f, "{}: {width}x{height} is not portrait", path.display())
            }
        }
    }
}

/// A screenshot that decoded successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenshotFile {
    /// File path
    pub path: PathBuf,
    /// Encoding implied by the extension
    pub format: ScreenshotFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Outcome of auditing a screenshots directory
#[derive(Debug, Clone, Serialize)]
pub struct ScreenshotAudit {
    /// Directory audited
    pub dir: PathBuf,
    /// Decoded screenshots, sorted by path
    pub screenshots: Vec<ScreenshotFile>,
    /// Problems found, in discovery order
    pub findings: Vec<Finding>,
}

impl ScreenshotAudit {
    /// True when no finding is an error
    pub fn passed(&self) -> bool {
        self.findings.iter().all(|f| f.severity() != Severity::Error)
    }

    /// Turn a failed audit into a validation error
    pub fn require_passed(&self) -> Result<()> {
        if self.passed() {
            return Ok(());
        }
        let errors = self.findings_with(Severity::Error).count();
        Err(Error::validation(format!(
            "{} in {}: {errors} requirement(s) not met",
            screenshot_count(self.screenshots.len()),
            self.dir.display()
        ))
        .with_suggestion("Capture screenshots as described above, then run the check again"))
    }

    /// Findings of the given severity
    pub fn findings_with(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity() == severity)
    }
}

fn screenshot_count(count: usize) -> String {
    if count == 1 {
        "1 screenshot".to_string()
    } else {
        format!("{count} screenshots")
    }
}

/// Audit the screenshots in `dir`
///
/// A missing directory is a finding, not an error. Failing to list an
/// existing directory is an error.
pub fn audit_screenshots(dir: &Path, requirements: &ScreenshotRequirements) -> Result<ScreenshotAudit> {
    let mut audit = ScreenshotAudit {
        dir: dir.to_path_buf(),
        screenshots: Vec::new(),
        findings: Vec::new(),
    };

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            audit.findings.push(Finding::MissingDirectory { dir: dir.to_path_buf() });
            audit.findings.push(Finding::TooFew {
                found: 0,
                min: requirements.min_count,
            });
            return Ok(audit);
        }
        Err(e) => return Err(Error::io_at(dir, e).with_context("While listing screenshots")),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io_at(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    for path in paths {
        inspect_file(&path, requirements, &mut audit);
    }

    let found = audit.screenshots.len();
    if found < requirements.min_count {
        audit.findings.push(Finding::TooFew {
            found,
            min: requirements.min_count,
        });
    } else if !requirements.recommended.contains(&found) {
        audit.findings.push(Finding::OutsideRecommended {
            found,
            min: *requirements.recommended.start(),
            max: *requirements.recommended.end(),
        });
    }

    tracing::info!(
        dir = %dir.display(),
        screenshots = found,
        findings = audit.findings.len(),
        "Screenshot audit complete"
    );

    Ok(audit)
}

fn inspect_file(path: &Path, requirements: &ScreenshotRequirements, audit: &mut ScreenshotAudit) {
    let Some(format) = ScreenshotFormat::from_path(path).filter(|f| requirements.formats.contains(f)) else {
        if is_image_extension(path) {
            audit.findings.push(Finding::UnsupportedFormat { path: path.to_path_buf() });
        } else {
            tracing::debug!(path = %path.display(), "Skipping non-image file");
        }
        return;
    };

    let (width, height) = match image::image_dimensions(path) {
        Ok(dims) => dims,
        Err(e) => {
            audit.findings.push(Finding::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
            return;
        }
    };

    let path_buf = path.to_path_buf();
    if width.min(height) < requirements.min_side {
        audit.findings.push(Finding::TooSmall { path: path_buf.clone(), width, height });
    }
    if width.max(height) > requirements.max_side {
        audit.findings.push(Finding::TooLarge { path: path_buf.clone(), width, height });
    }
    if requirements.portrait && height <= width {
        audit.findings.push(Finding::NotPortrait { path: path_buf.clone(), width, height });
    }

    audit.screenshots.push(ScreenshotFile {
        path: path_buf,
        format,
        width,
        height,
    });
}

fn is_image_extension(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    REJECTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        || matches!(ext.as_str(), "png" | "jpg" | "jpeg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, Rgb([10, 20, 30]))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let audit = audit_screenshots(&dir.path().join("screenshots"), &ScreenshotRequirements::default()).unwrap();

        assert!(!audit.passed());
        assert!(matches!(audit.findings[0], Finding::MissingDirectory { .. }));
    }

    #[test]
    fn test_require_passed() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "only.png", 360, 640);

        let audit = audit_screenshots(dir.path(), &ScreenshotRequirements::default()).unwrap();
        let err = audit.require_passed().unwrap_err();
        assert_eq!(err.code, playprep_core::ErrorCode::ValidationError);
        assert!(err.message.starts_with("1 screenshot in "));
        assert!(err.message.ends_with("1 requirement(s) not met"));

        write_png(dir.path(), "second.png", 360, 640);
        let audit = audit_screenshots(dir.path(), &ScreenshotRequirements::default()).unwrap();
        assert!(audit.require_passed().is_ok());
    }

    #[test]
    fn test_valid_set_passes() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..4 {
            write_png(dir.path(), &format!("shot-{i}.png"), 360, 640);
        }
        fs::write(dir.path().join("README.md"), "# Screenshots").unwrap();

        let audit = audit_screenshots(dir.path(), &ScreenshotRequirements::default()).unwrap();

        assert!(audit.passed());
        assert!(audit.findings.is_empty());
        assert_eq!(audit.screenshots.len(), 4);
        assert!(audit.screenshots[0].path.ends_with("shot-0.png"));
    }

    #[test]
    fn test_too_few_and_below_recommended() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "only.png", 360, 640);

        let audit = audit_screenshots(dir.path(), &ScreenshotRequirements::default()).unwrap();
        assert!(!audit.passed());
        assert_eq!(audit.findings, vec![Finding::TooFew { found: 1, min: 2 }]);

        write_png(dir.path(), "second.png", 360, 640);
        let audit = audit_screenshots(dir.path(), &ScreenshotRequirements::default()).unwrap();
        assert!(audit.passed());
        assert_eq!(
            audit.findings,
            vec![Finding::OutsideRecommended { found: 2, min: 4, max: 8 }]
        );
    }

    #[test]
    fn test_dimension_and_orientation_findings() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "a-small.png", 200, 400);
        write_png(dir.path(), "b-landscape.png", 640, 360);

        let audit = audit_screenshots(dir.path(), &ScreenshotRequirements::default()).unwrap();

        assert!(!audit.passed());
        assert!(audit.findings.contains(&Finding::TooSmall {
            path: dir.path().join("a-small.png"),
            width: 200,
            height: 400,
        }));
        let warnings: Vec<_> = audit.findings_with(Severity::Warning).collect();
        assert!(warnings.iter().any(|f| matches!(f, Finding::NotPortrait { width: 640, .. })));
    }

    #[test]
    fn test_unsupported_and_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("anim.gif"), b"GIF89a").unwrap();
        fs::write(dir.path().join("broken.png"), b"not really a png").unwrap();

        let audit = audit_screenshots(dir.path(), &ScreenshotRequirements::default()).unwrap();

        assert!(audit.findings.iter().any(|f| matches!(f, Finding::UnsupportedFormat { .. })));
        assert!(audit.findings.iter().any(|f| matches!(f, Finding::Unreadable { .. })));
        assert!(audit.screenshots.is_empty());
    }

    #[test]
    fn test_finding_display_and_json() {
        let finding = Finding::TooFew { found: 1, min: 2 };
        assert_eq!(finding.to_string(), "Found 1 screenshot(s), at least 2 required");

        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["kind"], "too_few");
        assert_eq!(json["found"], 1);
    }
}

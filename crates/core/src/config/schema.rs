//! Configuration schema definitions
//!
//! Every field carries a serde default so a partial file only overrides
//! what it names.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Project-wide settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Publishing file verifier
    #[serde(default)]
    pub verify: VerifyConfig,

    /// Feature graphic generator
    #[serde(default)]
    pub graphic: GraphicConfig,

    /// Screenshot guide and audit
    #[serde(default)]
    pub screenshots: ScreenshotsConfig,
}

impl ConfigSchema {
    /// Reject values no command can work with
    pub fn validate(&self) -> Result<()> {
        if self.verify.files.is_empty() {
            return Err(Error::config_invalid("verify.files must list at least one file")
                .with_suggestion("Remove the empty `files` key to use the default checklist"));
        }
        if let Some(entry) = self.verify.files.iter().find(|f| f.path.as_os_str().is_empty()) {
            return Err(Error::config_invalid(format!(
                "verify.files entry `{}` has an empty path",
                entry.label
            )));
        }
        self.graphic.validate()
    }
}

/// General project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// App name shown in banners and guides
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    "PocketPilot".to_string()
}

/// One artifact that must exist before submitting to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredFile {
    /// Human-readable label
    pub label: String,
    /// Path relative to the verification root
    pub path: PathBuf,
}

impl RequiredFile {
    /// Create a new entry
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Publishing file verification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Files to check, in report order
    #[serde(default = "default_required_files")]
    pub files: Vec<RequiredFile>,

    /// Steps printed when everything is present
    #[serde(default = "default_next_steps")]
    pub next_steps: Vec<String>,

    /// Document the report points to for details
    #[serde(default = "default_details_doc")]
    pub details_doc: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            files: default_required_files(),
            next_steps: default_next_steps(),
            details_doc: default_details_doc(),
        }
    }
}

fn default_required_files() -> Vec<RequiredFile> {
    [
        ("Privacy Policy", "PRIVACY_POLICY.md"),
        ("Terms of Service", "TERMS_OF_SERVICE.md"),
        ("Data Safety Disclosure", "DATA_SAFETY_DISCLOSURE.md"),
        ("Store Listing", "STORE_LISTING.md"),
        ("Release Notes", "RELEASE_NOTES.md"),
        ("Content Rating Questionnaire", "CONTENT_RATING_QUESTIONNAIRE.md"),
        ("Promotional Assets Guide", "PROMOTIONAL_ASSETS_GUIDE.md"),
        ("Google Play Publishing Checklist", "GOOGLE_PLAY_PUBLISHING_CHECKLIST.md"),
        ("Support Documentation", "SUPPORT_DOCUMENTATION.md"),
        ("Build Script", "build_release.bat"),
        ("Signing Guide", "SIGNING_GUIDE.md"),
        ("App Icon", "assets/logo.png"),
        ("Keystore File", "pocketpilot-key.jks"),
        ("Feature Graphic", "promotional-assets/feature-graphic.png"),
        ("Promotional Assets README", "promotional-assets/README.md"),
        ("Screenshots README", "promotional-assets/screenshots/README.md"),
        ("Video README", "promotional-assets/video/README.md"),
        ("Feature Graphic Generator", "generate_feature_graphic.py"),
        ("Screenshot Helper", "take_screenshots.py"),
        ("Screenshot Helper Batch", "take_screenshots.bat"),
        ("Complete File List", "GOOGLE_PLAY_PUBLISHING_FILE_LIST.md"),
        ("Final Checklist", "FINAL_PUBLISHING_CHECKLIST.md"),
        ("Publishing Summary", "GOOGLE_PLAY_PUBLISHING_SUMMARY.md"),
        ("Promotional Assets Checklist", "PROMOTIONAL_ASSETS_CHECKLIST.md"),
    ]
    .into_iter()
    .map(|(label, path)| RequiredFile::new(label, path))
    .collect()
}

fn default_next_steps() -> Vec<String> {
    vec![
        "Create screenshots of your app",
        "(Optional) Create a promo video",
        "Build your release version with build_release.bat",
        "Upload all assets to Google Play Console",
        "Submit your app for review",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_details_doc() -> String {
    "GOOGLE_PLAY_PUBLISHING_FILE_LIST.md".to_string()
}

/// Feature graphic configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicConfig {
    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background colour, `#RRGGBB`
    #[serde(default = "default_background")]
    pub background: String,

    /// Text and shape colour, `#RRGGBB`
    #[serde(default = "default_accent")]
    pub accent: String,

    /// Text shadow colour, `#RRGGBB`
    #[serde(default = "default_shadow")]
    pub shadow: String,

    /// Title text
    #[serde(default = "default_title")]
    pub title: String,

    /// Subtitle text
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Title size in pixels
    #[serde(default = "default_title_size")]
    pub title_size: f32,

    /// Subtitle size in pixels
    #[serde(default = "default_subtitle_size")]
    pub subtitle_size: f32,

    /// Preferred TrueType fonts, tried in order
    #[serde(default = "default_font_paths")]
    pub font_paths: Vec<PathBuf>,

    /// Output PNG path
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for GraphicConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            accent: default_accent(),
            shadow: default_shadow(),
            title: default_title(),
            subtitle: default_subtitle(),
            title_size: default_title_size(),
            subtitle_size: default_subtitle_size(),
            font_paths: default_font_paths(),
            output: default_output(),
        }
    }
}

/// Largest accepted graphic side, the Google Play image limit
pub const MAX_GRAPHIC_SIDE: u32 = 3840;

impl GraphicConfig {
    /// Reject sizes the renderer cannot draw
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 || width > MAX_GRAPHIC_SIDE || height > MAX_GRAPHIC_SIDE {
            return Err(Error::config_invalid(format!(
                "graphic size must be between 1x1 and {MAX_GRAPHIC_SIDE}x{MAX_GRAPHIC_SIDE}, got {width}x{height}"
            )));
        }
        for (key, size) in [("title_size", self.title_size), ("subtitle_size", self.subtitle_size)] {
            if !size.is_finite() || size <= 0.0 || size > height as f32 {
                return Err(Error::config_invalid(format!(
                    "graphic.{key} must be above 0 and at most the height ({height}), got {size}"
                )));
            }
        }
        if self.output.as_os_str().is_empty() {
            return Err(Error::config_invalid("graphic.output must not be empty"));
        }
        Ok(())
    }
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    500
}

fn default_background() -> String {
    "#009688".to_string()
}

fn default_accent() -> String {
    "#FFFFFF".to_string()
}

fn default_shadow() -> String {
    "#000000".to_string()
}

fn default_title() -> String {
    "PocketPilot".to_string()
}

fn default_subtitle() -> String {
    "Your Personal Financial Guide".to_string()
}

fn default_title_size() -> f32 {
    80.0
}

fn default_subtitle_size() -> f32 {
    40.0
}

fn default_font_paths() -> Vec<PathBuf> {
    [
        "arial.ttf",
        "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

fn default_output() -> PathBuf {
    PathBuf::from("promotional-assets/feature-graphic.png")
}

/// Screenshot guide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotsConfig {
    /// Where screenshots are collected
    #[serde(default = "default_screenshots_dir")]
    pub dir: PathBuf,

    /// App-specific screenshot suggestions
    #[serde(default = "default_suggested")]
    pub suggested: Vec<String>,
}

impl Default for ScreenshotsConfig {
    fn default() -> Self {
        Self {
            dir: default_screenshots_dir(),
            suggested: default_suggested(),
        }
    }
}

fn default_screenshots_dir() -> PathBuf {
    PathBuf::from("promotional-assets/screenshots")
}

fn default_suggested() -> Vec<String> {
    vec![
        "Home dashboard with budget overview",
        "Expense tracking interface",
        "Financial charts and insights",
        "Budget creation screen",
        "Calendar view of expenses",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

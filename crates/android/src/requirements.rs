//! Google Play screenshot requirements

use serde::Serialize;
use std::ops::RangeInclusive;
use std::path::Path;

/// Accepted screenshot encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenshotFormat {
    /// PNG
    Png,
    /// JPEG
    Jpeg,
}

impl ScreenshotFormat {
    /// Format implied by a file extension, if accepted
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ScreenshotFormat::Png),
            "jpg" | "jpeg" => Some(ScreenshotFormat::Jpeg),
            _ => None,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ScreenshotFormat::Png => "PNG",
            ScreenshotFormat::Jpeg => "JPEG",
        }
    }
}

/// Extensions of image files Google Play rejects for screenshots
pub(crate) const REJECTED_IMAGE_EXTENSIONS: &[&str] = &["gif", "webp", "bmp", "tif", "tiff", "heic"];

/// Limits a screenshot set must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotRequirements {
    /// Fewest screenshots accepted
    pub min_count: usize,
    /// Count range Google recommends
    pub recommended: RangeInclusive<usize>,
    /// Smallest allowed side in pixels
    pub min_side: u32,
    /// Largest allowed side in pixels
    pub max_side: u32,
    /// Accepted encodings
    pub formats: Vec<ScreenshotFormat>,
    /// Phone screenshots should be portrait
    pub portrait: bool,
}

impl Default for ScreenshotRequirements {
    fn default() -> Self {
        Self::google_play_phone()
    }
}

impl ScreenshotRequirements {
    /// Phone screenshot rules for a Google Play listing
    pub fn google_play_phone() -> Self {
        Self {
            min_count: 2,
            recommended: 4..=8,
            min_side: 320,
            max_side: 3840,
            formats: vec![ScreenshotFormat::Png, ScreenshotFormat::Jpeg],
            portrait: true,
        }
    }

    /// Requirement lines as printed in the screenshot guide
    pub fn describe(&self) -> Vec<String> {
        let formats: Vec<&str> = self.formats.iter().map(ScreenshotFormat::name).collect();
        let mut lines = vec![
            format!("Minimum {} screenshots required", self.min_count),
            format!(
                "Recommended {}-{} screenshots",
                self.recommended.start(),
                self.recommended.end()
            ),
        ];
        if self.portrait {
            lines.push("Phone screenshots in portrait orientation".to_string());
        }
        lines.push(format!(
            "Dimensions: Minimum {}px, Maximum {}px",
            self.min_side, self.max_side
        ));
        lines.push(format!("Format: {}", formats.join(" or ")));
        lines.push("High quality and representative of app features".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ScreenshotFormat::from_path(Path::new("a.PNG")), Some(ScreenshotFormat::Png));
        assert_eq!(ScreenshotFormat::from_path(Path::new("b.jpeg")), Some(ScreenshotFormat::Jpeg));
        assert_eq!(ScreenshotFormat::from_path(Path::new("c.webp")), None);
        assert_eq!(ScreenshotFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_describe_google_play() {
        let lines = ScreenshotRequirements::default().describe();
        assert_eq!(
            lines,
            vec![
                "Minimum 2 screenshots required",
                "Recommended 4-8 screenshots",
                "Phone screenshots in portrait orientation",
                "Dimensions: Minimum 320px, Maximum 3840px",
                "Format: PNG or JPEG",
                "High quality and representative of app features",
            ]
        );
    }
}

//! Screenshot capture instructions
//!
//! Static guidance for capturing Android emulator screenshots. Nothing here
//! talks to the emulator; the guide is only printed.

use crate::requirements::ScreenshotRequirements;
use playprep_core::config::ScreenshotsConfig;
use std::io::{self, Write};
use std::path::Path;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;

/// One line of a guide section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideItem {
    /// Numbered step; numbering restarts in every section
    Step(String),
    /// Shell command shown under the preceding step
    Command(String),
    /// Unnumbered bullet
    Bullet(String),
}

/// Titled group of guide items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideSection {
    /// Section heading
    pub heading: String,
    /// Items in print order
    pub items: Vec<GuideItem>,
}

impl GuideSection {
    fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            items: Vec::new(),
        }
    }

    fn step(mut self, text: impl Into<String>) -> Self {
        self.items.push(GuideItem::Step(text.into()));
        self
    }

    fn command(mut self, text: impl Into<String>) -> Self {
        self.items.push(GuideItem::Command(text.into()));
        self
    }

    fn bullet(mut self, text: impl Into<String>) -> Self {
        self.items.push(GuideItem::Bullet(text.into()));
        self
    }
}

/// Printable screenshot guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotGuide {
    /// Banner title
    pub title: String,
    /// Sections in print order
    pub sections: Vec<GuideSection>,
}

impl ScreenshotGuide {
    /// Guide for `app_name` using the configured directory and suggestions
    pub fn new(app_name: &str, config: &ScreenshotsConfig, requirements: &ScreenshotRequirements) -> Self {
        let dir = display_dir(&config.dir);
        let save_to = format!("Move the file to {dir}");

        let studio = GuideSection::new("METHOD 1: Using Android Studio Device Manager")
            .step("Open Android Studio")
            .step("Go to Device Manager (View > Tool Windows > Device Manager)")
            .step("Start your emulator")
            .step("Click the three dots (More Options) on the emulator panel")
            .step("Select 'Screenshot' from the menu")
            .step(format!("Save the screenshot to {dir}"));

        let adb = GuideSection::new("METHOD 2: Using ADB Command Line")
            .step("Make sure ADB is in your PATH")
            .step("Run this command to take a screenshot:")
            .command("adb shell screencap -p /sdcard/screenshot.png")
            .step("Pull the screenshot to your computer:")
            .command("adb pull /sdcard/screenshot.png")
            .step(save_to.clone());

        let controls = GuideSection::new("METHOD 3: Using Emulator Controls")
            .step("In the emulator, click the camera icon in the toolbar")
            .step("Click 'Save' to save the screenshot")
            .step(save_to);

        let rules = requirements
            .describe()
            .into_iter()
            .fold(GuideSection::new("SCREENSHOT REQUIREMENTS FOR GOOGLE PLAY"), GuideSection::bullet);

        let mut sections = vec![studio, adb, controls, rules];

        if !config.suggested.is_empty() {
            let suggested = config.suggested.iter().fold(
                GuideSection::new(format!("SUGGESTED SCREENSHOTS FOR {}", app_name.to_uppercase())),
                |section, idea| section.step(idea.as_str()),
            );
            sections.push(suggested);
        }

        Self {
            title: "SCREENSHOT CAPTURE INSTRUCTIONS FOR ANDROID EMULATOR".to_string(),
            sections,
        }
    }

    /// The stock PocketPilot guide
    pub fn pocketpilot_default() -> Self {
        Self::new("PocketPilot", &ScreenshotsConfig::default(), &ScreenshotRequirements::default())
    }

    /// Write the guide as plain text
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(out, "{banner}")?;
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{banner}")?;
        writeln!(out)?;

        for section in &self.sections {
            writeln!(out, "{}", section.heading)?;
            writeln!(out, "{rule}")?;
            let mut step = 0;
            for item in &section.items {
                match item {
                    GuideItem::Step(text) => {
                        step += 1;
                        writeln!(out, "{step}. {text}")?;
                    }
                    GuideItem::Command(text) => writeln!(out, "   {text}")?,
                    GuideItem::Bullet(text) => writeln!(out, "- {text}")?,
                }
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

/// Directory with exactly one trailing slash, as shown to the operator
fn display_dir(dir: &Path) -> String {
    let text = dir.display().to_string();
    format!("{}/", text.trim_end_matches(['/', '\\']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(guide: &ScreenshotGuide) -> String {
        let mut out = Vec::new();
        guide.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_guide_layout() {
        let text = render(&ScreenshotGuide::pocketpilot_default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "SCREENSHOT CAPTURE INSTRUCTIONS FOR ANDROID EMULATOR");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "METHOD 1: Using Android Studio Device Manager");
        assert_eq!(lines[5], "-".repeat(40));
        assert!(text.contains("6. Save the screenshot to promotional-assets/screenshots/\n"));
        assert!(text.contains("2. Run this command to take a screenshot:\n   adb shell screencap -p /sdcard/screenshot.png\n"));
        assert!(text.contains("4. Move the file to promotional-assets/screenshots/\n"));
        assert!(text.contains("- Format: PNG or JPEG\n"));
        assert!(text.contains("SUGGESTED SCREENSHOTS FOR POCKETPILOT\n"));
        assert!(text.contains("5. Calendar view of expenses\n"));
    }

    #[test]
    fn test_step_numbering_restarts_per_section() {
        let guide = ScreenshotGuide::pocketpilot_default();
        let text = render(&guide);
        let first_steps = text.lines().filter(|l| l.starts_with("1. ")).count();
        let numbered_sections = guide
            .sections
            .iter()
            .filter(|s| s.items.iter().any(|i| matches!(i, GuideItem::Step(_))))
            .count();
        assert_eq!(first_steps, numbered_sections);
    }

    #[test]
    fn test_custom_dir_and_no_suggestions() {
        let config = ScreenshotsConfig {
            dir: PathBuf::from("store/shots///"),
            suggested: Vec::new(),
        };
        let guide = ScreenshotGuide::new("Budgetly", &config, &ScreenshotRequirements::default());
        let text = render(&guide);

        assert!(text.contains("Save the screenshot to store/shots/\n"));
        assert!(!text.contains("SUGGESTED SCREENSHOTS"));
        assert_eq!(guide.sections.len(), 4);
    }

    #[test]
    fn test_render_is_static() {
        let guide = ScreenshotGuide::pocketpilot_default();
        assert_eq!(render(&guide), render(&guide));
    }
}

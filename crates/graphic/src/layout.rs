//! Fixed feature graphic layout.

/// Circle outline decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// Centre x
    pub cx: i32,
    /// Centre y
    pub cy: i32,
    /// Outer radius
    pub radius: u32,
    /// Ring thickness
    pub stroke: u32,
}

/// Straight line decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Start x
    pub x0: i32,
    /// Start y
    pub y0: i32,
    /// End x
    pub x1: i32,
    /// End y
    pub y1: i32,
    /// Brush width
    pub stroke: u32,
}

/// Positions of every element for a canvas size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Top of the title line box
    pub title_y: i32,
    /// Title shadow offset in both axes
    pub title_shadow: i32,
    /// Top of the subtitle line box
    pub subtitle_y: i32,
    /// Subtitle shadow offset in both axes
    pub subtitle_shadow: i32,
    /// Row of circles near the bottom edge
    pub circles: Vec<Circle>,
    /// Short rules in the top-left corner
    pub lines: Vec<Line>,
}

const CIRCLE_COUNT: i32 = 5;
const CIRCLE_RADIUS: u32 = 30;
const LINE_COUNT: i32 = 3;
const STROKE: u32 = 2;

impl Layout {
    /// Layout for a canvas `height` pixels tall
    ///
    /// Text is centred horizontally at draw time, so only the height matters.
    pub fn for_height(height: u32) -> Self {
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        let title_y = height / 4;

        let circles = (0..CIRCLE_COUNT)
            .map(|i| Circle {
                cx: 100 + i * 200,
                cy: height - 150,
                radius: CIRCLE_RADIUS,
                stroke: STROKE,
            })
            .collect();

        let lines = (0..LINE_COUNT)
            .map(|i| Line {
                x0: 50,
                y0: 100 + i * 50,
                x1: 200,
                y1: 100 + i * 50,
                stroke: STROKE,
            })
            .collect();

        Self {
            title_y,
            title_shadow: 2,
            subtitle_y: title_y + 100,
            subtitle_shadow: 1,
            circles,
            lines,
        }
    }
}

//! Perceptual (APCA-style) contrast between a text and a background
//! color.
//!
//! The score is polarity aware: dark text on a light background and
//! light text on a dark background use different exponents.  Scores
//! are reported as non-negative numbers, roughly 0 to 106.

use crate::space::relative_luminance;

/// Luminances below this are soft-clamped.
const BLACK_THRESHOLD: f64 = 0.022;
const BLACK_CLAMP: f64 = 1.414;

const SCALE: f64 = 1.14;
const CLIP: f64 = 0.1;

// Dark text on a light background.
const NORMAL_BG: f64 = 0.56;
const NORMAL_TXT: f64 = 0.57;
// Light text on a dark background.
const REVERSE_BG: f64 = 0.65;
const REVERSE_TXT: f64 = 0.62;

const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";

/// Minimum scores for text steps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastTargets {
    /// Step 11, body text.
    pub text: f64,
    /// Step 12, high-contrast text.
    pub high_contrast: f64,
}

impl Default for ContrastTargets {
    fn default() -> Self { ContrastTargets { text: 60., high_contrast: 90. } }
}

fn soft_clamp(y: f64) -> f64 {
    if y > BLACK_THRESHOLD { y }
    else { y + (BLACK_THRESHOLD - y).powf(BLACK_CLAMP) }
}

/// Contrast score of luminances `y_txt` on `y_bg`.
pub(crate) fn contrast_of_luminances(y_txt: f64, y_bg: f64) -> f64 {
    let y_txt = soft_clamp(y_txt);
    let y_bg = soft_clamp(y_bg);
    let result = if y_bg > y_txt {
        let s = (y_bg.powf(NORMAL_BG) - y_txt.powf(NORMAL_TXT)) * SCALE;
        if s > CLIP { s - CLIP } else { 0. }
    } else {
        let s = (y_bg.powf(REVERSE_BG) - y_txt.powf(REVERSE_TXT)) * SCALE;
        if s < -CLIP { -s - CLIP } else { 0. }
    };
    result.abs() * 100.
}

/// Perceptual contrast of `text` drawn on `bg`.
///
/// Unparseable colors count as black (luminance 0).
///
/// # Example
///
/// ```
/// use radiant_scales::contrast::perceptual_contrast;
/// let lc = perceptual_contrast("#000", "#fff");
/// assert!(lc > 98. && lc < 99.);
/// ```
pub fn perceptual_contrast(text: &str, bg: &str) -> f64 {
    contrast_of_luminances(relative_luminance(text), relative_luminance(bg))
}

/// Says whether `text` on `bg` scores at least `target`.
pub fn meets_contrast(text: &str, bg: &str, target: f64) -> bool {
    perceptual_contrast(text, bg) >= target
}

/// Says whether black text reads better than white text on `bg`.
pub fn should_use_dark_text(bg: &str) -> bool {
    perceptual_contrast(BLACK, bg) > perceptual_contrast(WHITE, bg)
}

/// The foreground (`#000000` or `#ffffff`) that reads best on `bg`.
pub fn foreground_for(bg: &str) -> &'static str {
    if should_use_dark_text(bg) { BLACK } else { WHITE }
}

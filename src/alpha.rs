//! Semi-transparent (alpha) scales, meant for overlays.

use rgb::RGBA;
use crate::{ColorScale, Mode, STEPS};
use crate::error::Result;
use crate::scale::MAX_CHROMA;
use crate::space::{clamp, parse_rgba, parse_to_perceptual,
                   perceptual_to_alpha_color_string, rgba_string};

const LIGHT_ALPHA: [f64; STEPS] =
    [0.02, 0.04, 0.08, 0.12, 0.16, 0.20, 0.26, 0.34, 0.50, 0.56, 0.68, 0.80];
const DARK_ALPHA: [f64; STEPS] =
    [0.05, 0.08, 0.12, 0.16, 0.20, 0.26, 0.32, 0.40, 0.55, 0.62, 0.75, 0.90];

/// Total lightness drift from step 1 to step 12.
const LIGHTNESS_SPREAD: f64 = 0.2;

/// The opacity of each step (non-decreasing from step 1 to step 12).
pub fn alpha_progression(mode: Mode) -> &'static [f64; STEPS] {
    match mode {
        Mode::Light => &LIGHT_ALPHA,
        Mode::Dark => &DARK_ALPHA,
    }
}

/// Lightness of step `i` (0-based): starts at 0.2 (light) or 0.8
/// (dark) and drifts by up to 0.2 away from the background.
fn lightness(mode: Mode, i: usize) -> f64 {
    let drift = i as f64 / (STEPS - 1) as f64 * LIGHTNESS_SPREAD;
    match mode {
        Mode::Light => clamp(0.2 - drift, 0., 1.),
        Mode::Dark => clamp(0.8 + drift, 0., 1.),
    }
}

/// Generate the alpha scale of `base_color`; every step is an
/// `rgba(…)` string.  Fails only if `base_color` cannot be parsed.
pub fn generate_alpha_scale(base_color: &str, mode: Mode) -> Result<ColorScale> {
    let base = parse_to_perceptual(base_color)?;
    let c = clamp(base.c, 0., MAX_CHROMA);
    let alpha = alpha_progression(mode);
    ColorScale::from_steps(
        (0 .. STEPS).map(|i| perceptual_to_alpha_color_string(
            lightness(mode, i), c, base.h, alpha[i])).collect())
}

/// The most transparent color that, composited over `background`,
/// reproduces `target`.  Components in \[0, 255\].
pub(crate) fn alpha_over_rgba(target: RGBA<f64>, background: RGBA<f64>)
                              -> String {
    let needed = |t: f64, b: f64| {
        if t > b { (t - b) / (255. - b) }
        else if t < b { (b - t) / b }
        else { 0. }
    };
    let alpha = needed(target.r, background.r)
        .max(needed(target.g, background.g))
        .max(needed(target.b, background.b));
    // Rounding up keeps the channels inside [0, 255].
    let alpha = clamp((alpha * 1000.).ceil() / 1000., 0., 1.);
    if alpha == 0. { return rgba_string(target, 0.) }
    let channel = |t: f64, b: f64| clamp(b + (t - b) / alpha, 0., 255.);
    let color = RGBA { r: channel(target.r, background.r),
                       g: channel(target.g, background.g),
                       b: channel(target.b, background.b),
                       a: 255. };
    rgba_string(color, alpha)
}

/// String version of [`alpha_over_rgba`].
///
/// # Example
///
/// ```
/// use radiant_scales::alpha::overlay_alpha;
/// assert_eq!(overlay_alpha("#000", "#fff").unwrap(), "rgba(0, 0, 0, 1)");
/// ```
pub fn overlay_alpha(target: &str, background: &str) -> Result<String> {
    Ok(alpha_over_rgba(parse_rgba(target)?, parse_rgba(background)?))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::Step;

    #[test]
    fn progressions() {
        assert_eq!(LIGHT_ALPHA[0], 0.02);
        assert_eq!(LIGHT_ALPHA[11], 0.80);
        assert_eq!(DARK_ALPHA[0], 0.05);
        assert_eq!(DARK_ALPHA[11], 0.90);
        assert_eq!(lightness(Mode::Light, 0), 0.2);
        assert!(lightness(Mode::Light, 11).abs() < 1e-12);
        assert!((lightness(Mode::Dark, 11) - 1.).abs() < 1e-12);
    }

    #[test]
    fn blue_alpha_scale() {
        let s = generate_alpha_scale("#3B82F6", Mode::Light).unwrap();
        assert!(s[Step::APP_BACKGROUND].ends_with(", 0.02)"));
        assert!(s[Step::HIGH_CONTRAST_TEXT].ends_with(", 0.8)"));
        assert!(s.iter().all(|(_, c)| c.starts_with("rgba(")));
        let d = generate_alpha_scale("#3B82F6", Mode::Dark).unwrap();
        assert!(d[Step::HIGH_CONTRAST_TEXT].ends_with(", 0.9)"));
    }

    #[test]
    fn invalid_base() {
        assert!(matches!(generate_alpha_scale("nope", Mode::Dark),
                         Err(Error::InvalidColor { .. })));
    }

    #[test]
    fn overlay_reproduces_target() {
        let white = parse_rgba("#ffffff").unwrap();
        let dark = parse_rgba("#111111").unwrap();
        for (target, bg) in [("#0090ff", white), ("#e6f4fe", white),
                             ("#0d2847", dark), ("#70b8ff", dark)] {
            let t = parse_rgba(target).unwrap();
            let over = parse_rgba(&alpha_over_rgba(t, bg)).unwrap();
            let a = over.a / 255.;
            for (c, b, t) in [(over.r, bg.r, t.r), (over.g, bg.g, t.g),
                              (over.b, bg.b, t.b)] {
                let composite = a * c + (1. - a) * b;
                assert!((composite - t).abs() <= 1.5,
                        "{target}: {composite} ≉ {t}");
            }
        }
    }

    #[test]
    fn overlay_of_background_is_transparent() {
        assert_eq!(overlay_alpha("#fff", "#fff").unwrap(),
                   "rgba(255, 255, 255, 0)");
        // A parsed color against an exact background.
        let dark = RGBA { r: 17., g: 17., b: 17., a: 255. };
        assert_eq!(alpha_over_rgba(parse_rgba("#111111").unwrap(), dark),
                   "rgba(17, 17, 17, 0)");
        let white = RGBA { r: 255., g: 255., b: 255., a: 255. };
        assert_eq!(alpha_over_rgba(parse_rgba("#202020").unwrap(), white),
                   "rgba(0, 0, 0, 0.875)");
    }
}

//! Generation of a 12-step scale from a single base color.
//!
//! Every step gets a fixed lightness target and a fraction of the base
//! chroma, keeping the base hue.  The two text steps (11 and 12) then
//! get one corrective lightness nudge if they do not contrast enough
//! with the step 2 background.

use tracing::debug;
use crate::{ColorScale, Mode, Step, STEPS};
use crate::contrast::{perceptual_contrast, ContrastTargets};
use crate::error::{Error, Result};
use crate::space::{clamp, parse_to_perceptual, perceptual_to_color_string,
                   perceptual_to_p3_string, Oklch};

/// Largest chroma a generated step may carry.
pub const MAX_CHROMA: f64 = 0.37;

const LIGHT_LIGHTNESS: [f64; STEPS] =
    [0.98, 0.97, 0.94, 0.91, 0.87, 0.82, 0.76, 0.68, 0.58, 0.53, 0.44, 0.14];
const DARK_LIGHTNESS: [f64; STEPS] =
    [0.10, 0.13, 0.18, 0.22, 0.26, 0.31, 0.37, 0.45, 0.58, 0.63, 0.78, 0.88];

const LIGHT_CHROMA: [f64; STEPS] =
    [0.1, 0.2, 0.35, 0.45, 0.55, 0.65, 0.75, 0.85, 1.0, 0.95, 0.8, 0.6];
const DARK_CHROMA: [f64; STEPS] =
    [0.1, 0.25, 0.4, 0.5, 0.58, 0.66, 0.75, 0.85, 1.0, 0.95, 0.75, 0.6];

/// Lightness factors applied to steps 11 and 12 when they fail their
/// contrast target.
fn correction(mode: Mode, step: Step) -> f64 {
    match (mode, step == Step::HIGH_CONTRAST_TEXT) {
        (Mode::Light, false) => 0.8,
        (Mode::Light, true) => 0.6,
        (Mode::Dark, false) => 1.1,
        (Mode::Dark, true) => 1.15,
    }
}

/// Notation of the colors of a generated solid scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorFormat {
    /// `#rrggbb`, clipped to sRGB.
    #[default]
    Hex,
    /// `color(display-p3 r g b)`.
    DisplayP3,
}

impl ColorFormat {
    fn format(self, c: Oklch) -> String {
        match self {
            ColorFormat::Hex => perceptual_to_color_string(c.l, c.c, c.h),
            ColorFormat::DisplayP3 => perceptual_to_p3_string(c.l, c.c, c.h),
        }
    }
}

/// Tweaks applied on top of the calibrated curves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustments {
    /// Multiplies every step's chroma (before clamping).  Finite, ≥ 0.
    pub chroma_boost: f64,
    /// Added to every step's lightness target.  In \[-0.5, 0.5\].
    pub lightness_shift: f64,
    /// Added to both text contrast targets of the corrective pass.
    /// Finite, ≥ 0.
    pub contrast_boost: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Adjustments { chroma_boost: 1., lightness_shift: 0., contrast_boost: 0. }
    }
}

impl Adjustments {
    /// Return an error naming the first out-of-range field.
    pub fn check(&self) -> Result<()> {
        let bad = |name, value| Err(Error::InvalidAdjustment { name, value });
        if !(self.chroma_boost.is_finite() && self.chroma_boost >= 0.) {
            return bad("chroma_boost", self.chroma_boost)
        }
        if !(-0.5 ..= 0.5).contains(&self.lightness_shift) {
            return bad("lightness_shift", self.lightness_shift)
        }
        if !(self.contrast_boost.is_finite() && self.contrast_boost >= 0.) {
            return bad("contrast_boost", self.contrast_boost)
        }
        Ok(())
    }

    fn targets(&self) -> ContrastTargets {
        let t = ContrastTargets::default();
        ContrastTargets { text: t.text + self.contrast_boost,
                          high_contrast: t.high_contrast + self.contrast_boost }
    }
}

/// Input of [`generate_color_scale`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleOptions {
    pub base_color: String,
    pub mode: Mode,
    pub adjustments: Adjustments,
    pub format: ColorFormat,
}

impl ScaleOptions {
    /// Options for `base_color` in `mode`, hex output, no adjustments.
    pub fn new(base_color: impl Into<String>, mode: Mode) -> Self {
        ScaleOptions { base_color: base_color.into(), mode,
                       adjustments: Adjustments::default(),
                       format: ColorFormat::default() }
    }

    pub fn adjustments(mut self, adjustments: Adjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    pub fn format(mut self, format: ColorFormat) -> Self {
        self.format = format;
        self
    }
}

/// The lightness/chroma/hue each step aims for before any contrast
/// correction.  Chroma always lies in \[0, [`MAX_CHROMA`]\] and
/// lightness in \[0, 1\].
pub fn target_coordinates(
    base: &Oklch, mode: Mode, adjustments: &Adjustments) -> [Oklch; STEPS] {
    let (lightness, chroma) = match mode {
        Mode::Light => (&LIGHT_LIGHTNESS, &LIGHT_CHROMA),
        Mode::Dark => (&DARK_LIGHTNESS, &DARK_CHROMA),
    };
    std::array::from_fn(|i| {
        let l = clamp(lightness[i] + adjustments.lightness_shift, 0., 1.);
        let c = clamp(base.c * chroma[i] * adjustments.chroma_boost,
                      0., MAX_CHROMA);
        Oklch::new(l, c, base.h)
    })
}

/// Generate the solid scale of `options.base_color`.
///
/// Fails only if the base color cannot be parsed or the adjustments
/// are out of range.  The contrast correction of steps 11 and 12 is a
/// single pass: a step still short of its target after the nudge is
/// kept as is (and reported by [`crate::validate::validate_scale`]).
///
/// # Example
///
/// ```
/// use radiant_scales::{Mode, Step};
/// use radiant_scales::scale::{generate_color_scale, ScaleOptions};
/// let blue = generate_color_scale(&ScaleOptions::new("#3B82F6", Mode::Light))
///     .unwrap();
/// assert_eq!(&blue[Step::SOLID], "#2d74e7");
/// ```
pub fn generate_color_scale(options: &ScaleOptions) -> Result<ColorScale> {
    options.adjustments.check()?;
    let base = parse_to_perceptual(&options.base_color)?;
    let mode = options.mode;
    let targets = options.adjustments.targets();
    let coordinates = target_coordinates(&base, mode, &options.adjustments);
    // Steps 11 and 12 read step 2, so steps are filled in order.
    let mut colors: Vec<String> = Vec::with_capacity(STEPS);
    for (step, c) in Step::all().zip(coordinates) {
        let mut color = options.format.format(c);
        let target = if step == Step::TEXT { Some(targets.text) }
                     else if step == Step::HIGH_CONTRAST_TEXT {
                         Some(targets.high_contrast) }
                     else { None };
        if let Some(target) = target {
            let bg = &colors[Step::SUBTLE_BACKGROUND.index()];
            let score = perceptual_contrast(&color, bg);
            if score < target {
                let l = clamp(c.l * correction(mode, step), 0., 1.);
                let corrected = options.format.format(Oklch { l, ..c });
                debug!(step = step.get(), ?mode, from = %color,
                       to = %corrected, score, target,
                       "contrast correction");
                color = corrected;
            }
        }
        colors.push(color);
    }
    ColorScale::from_steps(colors)
}

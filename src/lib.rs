//! Accessible 12-step color scales.
//!
//! - [`generate_color_scale`] turns one base color into a solid
//!   [`ColorScale`] for a light or dark [`Mode`],
//! - [`generate_alpha_scale`] produces its semi-transparent
//!   counterpart,
//! - [`validate_scale`] checks the text steps with a perceptual
//!   (APCA-style) [contrast](contrast::perceptual_contrast) model,
//! - [`create_custom_scale`] does all of the above for a brand color.
//!
//! Thirty-one hand-tuned [`ColorFamily`]s are also provided, see
//! [`builtin_scale`].
//!
//! # Steps
//!
//! By convention steps 1–2 are app backgrounds, 3–5 component
//! backgrounds, 6–8 borders, 9–10 solid fills and 11–12 text.
//!
//! ```
//! use radiant_scales::{generate_color_scale, validate_scale, Mode,
//!                      ScaleOptions, Step};
//! let s = generate_color_scale(&ScaleOptions::new("#3B82F6", Mode::Light))?;
//! assert_eq!(&s[Step::HIGH_CONTRAST_TEXT], "#000036");
//! assert!(validate_scale(&s, Mode::Light).valid);
//! # Ok::<(), radiant_scales::Error>(())
//! ```

use std::fmt;
use std::ops::Index;
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

pub mod alpha;
pub mod contrast;
pub mod custom;
mod error;
mod palettes;
pub mod scale;
pub mod space;
pub mod validate;

pub use alpha::generate_alpha_scale;
pub use custom::{create_custom_scale, CustomScale, CustomScaleOptions};
pub use error::{Error, Result};
pub use palettes::builtin_scale;
pub use palettes::ty::ColorFamily;
pub use scale::{generate_color_scale, Adjustments, ColorFormat, ScaleOptions};
pub use space::Oklch;
pub use validate::{validate_scale, ValidationResult};

/// Number of steps of every scale.
pub const STEPS: usize = 12;

/// Light or dark appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Light,
    Dark,
}

/// A position 1 to 12 in a [`ColorScale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Step(u8);

impl Step {
    pub const APP_BACKGROUND: Step = Step(1);
    pub const SUBTLE_BACKGROUND: Step = Step(2);
    pub const COMPONENT_BACKGROUND: Step = Step(3);
    pub const BORDER: Step = Step(6);
    pub const SOLID: Step = Step(9);
    pub const SOLID_HOVER: Step = Step(10);
    /// Low-contrast text.
    pub const TEXT: Step = Step(11);
    pub const HIGH_CONTRAST_TEXT: Step = Step(12);

    /// Return the step `n` if `n` ∈ 1..=12.
    pub fn new(n: u8) -> Option<Step> {
        if (1 ..= STEPS as u8).contains(&n) { Some(Step(n)) } else { None }
    }

    /// The step number, in 1..=12.
    pub fn get(self) -> u8 { self.0 }

    #[inline]
    pub(crate) fn index(self) -> usize { self.0 as usize - 1 }

    /// Steps 1 to 12, in order.
    pub fn all() -> impl DoubleEndedIterator<Item = Step> + ExactSizeIterator {
        (1 ..= STEPS as u8).map(Step)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.0)
    }
}

/// Twelve colors, one per [`Step`], as CSS strings (`#rrggbb`,
/// `rgba(…)` or `color(display-p3 …)`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorScale {
    steps: [String; STEPS], // steps[i] is step i + 1
}

impl ColorScale {
    pub(crate) fn new(steps: [String; STEPS]) -> Self { ColorScale { steps } }

    /// Build a scale from its 12 colors, step 1 first.  The colors are
    /// not checked.
    pub fn from_steps(steps: Vec<String>) -> Result<Self> {
        let len = steps.len();
        steps.try_into().map(ColorScale::new)
            .map_err(|_| Error::ScaleLength { len })
    }

    /// The color of `step`.
    #[inline]
    pub fn get(&self, step: Step) -> &str { &self.steps[step.index()] }

    /// Iterate over the steps and their colors, step 1 first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Step, &str)> + '_ {
        Step::all().zip(self.steps.iter().map(String::as_str))
    }

    /// Decode every step into the color type `C`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use radiant_scales::{builtin_scale, ColorFamily, Mode};
    /// let gray: Vec<RGB8> = builtin_scale(ColorFamily::Gray, Mode::Dark, false)
    ///     .colors().unwrap();
    /// assert_eq!(gray[0], RGB8::new(0x11, 0x11, 0x11));
    /// ```
    pub fn colors<C: RGBColor>(&self) -> Result<Vec<C>> {
        self.steps.iter().map(|c| parse_color(c)).collect()
    }
}

impl Index<Step> for ColorScale {
    type Output = str;

    #[inline]
    fn index(&self, step: Step) -> &str { self.get(step) }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// The color as perceptual coordinates.
    fn to_oklch(&self) -> Oklch { Oklch::from_rgb(self.to_rgba()) }

    /// The color as a `#rrggbb` string (alpha is dropped).
    fn to_hex(&self) -> String { space::hex_string(self.to_rgba()) }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

#[inline]
fn to_u8(x: f64) -> u8 { x.round().clamp(0., 255.) as u8 }

#[inline]
fn to_u16(x: f64) -> u16 { (257. * x).round().clamp(0., 65535.) as u16 }

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b), a: to_u8(c.a) }
    }
}

// 16 bit encodings scale [0, 255] to [0, 65535].
impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: to_u16(c.r),  g: to_u16(c.g),  b: to_u16(c.b) }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: self.a as f64 / 257. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: to_u16(c.r),  g: to_u16(c.g),  b: to_u16(c.b),
                 a: to_u16(c.a) }
    }
}

/// Parse a CSS color string into the color type `C`.
pub fn parse_color<C: RGBColor>(color: &str) -> Result<C> {
    space::parse_rgba(color).map(C::from_rgba)
}

/// Where a family of scales comes from: a built-in family or a
/// custom brand color.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleSource {
    Builtin(ColorFamily),
    Custom(Box<CustomScale>),
}

impl ScaleSource {
    /// Name of the family (`"blue"`, or the custom scale name).
    pub fn name(&self) -> &str {
        match self {
            ScaleSource::Builtin(f) => f.name(),
            ScaleSource::Custom(c) => &c.name,
        }
    }

    /// The scale for `mode`, its alpha variant if `alpha` is true.
    pub fn scale(&self, mode: Mode, alpha: bool) -> &ColorScale {
        match self {
            ScaleSource::Builtin(f) => builtin_scale(*f, mode, alpha),
            ScaleSource::Custom(c) => c.scale(mode, alpha),
        }
    }
}

impl From<ColorFamily> for ScaleSource {
    fn from(f: ColorFamily) -> Self { ScaleSource::Builtin(f) }
}

impl From<CustomScale> for ScaleSource {
    fn from(c: CustomScale) -> Self { ScaleSource::Custom(Box::new(c)) }
}

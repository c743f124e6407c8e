//! Scales for a brand color: light, dark and both alpha variants.

use tracing::{instrument, warn};
use crate::{ColorScale, Mode};
use crate::alpha::generate_alpha_scale;
use crate::error::Result;
use crate::scale::{generate_color_scale, Adjustments, ScaleOptions};
use crate::validate::validate_scale;

/// Input of [`create_custom_scale`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomScaleOptions {
    pub name: String,
    pub base_color: String,
    /// Applied to the solid scales only.
    pub adjustments: Option<Adjustments>,
}

impl CustomScaleOptions {
    pub fn new(name: impl Into<String>, base_color: impl Into<String>) -> Self {
        CustomScaleOptions { name: name.into(), base_color: base_color.into(),
                             adjustments: None }
    }

    pub fn adjustments(mut self, adjustments: Adjustments) -> Self {
        self.adjustments = Some(adjustments);
        self
    }
}

/// The four scales generated for one brand color.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomScale {
    pub name: String,
    pub light: ColorScale,
    pub dark: ColorScale,
    pub light_alpha: ColorScale,
    pub dark_alpha: ColorScale,
}

impl CustomScale {
    /// The scale for `mode`, its alpha variant if `alpha` is true.
    pub fn scale(&self, mode: Mode, alpha: bool) -> &ColorScale {
        match (mode, alpha) {
            (Mode::Light, false) => &self.light,
            (Mode::Dark, false) => &self.dark,
            (Mode::Light, true) => &self.light_alpha,
            (Mode::Dark, true) => &self.dark_alpha,
        }
    }

    /// The scales keyed by `name`, `nameDark`, `nameA` and `nameDarkA`.
    pub fn named(&self) -> [(String, &ColorScale); 4] {
        let n = &self.name;
        [(n.clone(), &self.light),
         (format!("{n}Dark"), &self.dark),
         (format!("{n}A"), &self.light_alpha),
         (format!("{n}DarkA"), &self.dark_alpha)]
    }
}

/// Generate the light, dark and alpha scales of a brand color.
///
/// Validation problems of the solid scales are logged as warnings and
/// do not prevent the scales from being returned.  An unparseable
/// base color or out-of-range adjustments are errors.
///
/// # Example
///
/// ```
/// use radiant_scales::{create_custom_scale, CustomScaleOptions};
/// let brand = create_custom_scale(&CustomScaleOptions::new("brand", "#7c3aed"))
///     .unwrap();
/// let names: Vec<String> = brand.named().into_iter().map(|(n, _)| n).collect();
/// assert_eq!(names, ["brand", "brandDark", "brandA", "brandDarkA"]);
/// ```
#[instrument(skip_all, fields(name = %options.name))]
pub fn create_custom_scale(options: &CustomScaleOptions) -> Result<CustomScale> {
    let adjustments = options.adjustments.unwrap_or_default();
    let solid = |mode| generate_color_scale(
        &ScaleOptions::new(options.base_color.as_str(), mode)
            .adjustments(adjustments));
    let scale = CustomScale {
        name: options.name.clone(),
        light: solid(Mode::Light)?,
        dark: solid(Mode::Dark)?,
        light_alpha: generate_alpha_scale(&options.base_color, Mode::Light)?,
        dark_alpha: generate_alpha_scale(&options.base_color, Mode::Dark)?,
    };
    let [light, dark, ..] = scale.named();
    for ((key, s), mode) in [(light, Mode::Light), (dark, Mode::Dark)] {
        for issue in validate_scale(s, mode).issues {
            warn!(scale = %key, %issue, "scale validation");
        }
    }
    Ok(scale)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::Step;

    #[test]
    fn matches_direct_generation() {
        let c = create_custom_scale(&CustomScaleOptions::new("brand", "#3B82F6"))
            .unwrap();
        assert_eq!(c.light, generate_color_scale(
            &ScaleOptions::new("#3B82F6", Mode::Light)).unwrap());
        assert_eq!(c.dark, generate_color_scale(
            &ScaleOptions::new("#3B82F6", Mode::Dark)).unwrap());
        assert_eq!(c.dark_alpha,
                   generate_alpha_scale("#3B82F6", Mode::Dark).unwrap());
        assert_eq!(c.scale(Mode::Light, true), &c.light_alpha);
    }

    #[test]
    fn failing_validation_still_returns() {
        // Red misses the step 12 target in light mode.
        let c = create_custom_scale(&CustomScaleOptions::new("danger", "#e5484d"));
        assert!(c.is_ok());
    }

    #[test]
    fn adjustments_reach_solid_scales() {
        let plain = create_custom_scale(&CustomScaleOptions::new("b", "#3B82F6"))
            .unwrap();
        let muted = create_custom_scale(
            &CustomScaleOptions::new("b", "#3B82F6").adjustments(
                Adjustments { chroma_boost: 0.3, ..Default::default() }))
            .unwrap();
        assert_ne!(plain.light[Step::SOLID], muted.light[Step::SOLID]);
        assert_eq!(plain.light_alpha, muted.light_alpha);
    }

    #[test]
    fn errors() {
        let bad = create_custom_scale(&CustomScaleOptions::new("x", "#zzzzzz"));
        assert!(matches!(bad, Err(Error::InvalidColor { .. })));
        let bad = create_custom_scale(
            &CustomScaleOptions::new("x", "#3B82F6").adjustments(
                Adjustments { lightness_shift: 2., ..Default::default() }));
        assert!(matches!(bad, Err(Error::InvalidAdjustment {
            name: "lightness_shift", .. })));
    }
}

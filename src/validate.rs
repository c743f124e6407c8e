//! Advisory accessibility checks of a finished scale.

use crate::{ColorScale, Mode, Step};
use crate::contrast::{foreground_for, perceptual_contrast, ContrastTargets};

/// Outcome of [`validate_scale`].  `valid` iff `issues` is empty.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<String>,
}

/// Check the text steps against step 2 and, in light mode, the
/// contrast of the solid step with its best foreground.
///
/// Never fails; every unmet threshold adds one message to `issues`.
pub fn validate_scale(scale: &ColorScale, mode: Mode) -> ValidationResult {
    let targets = ContrastTargets::default();
    let bg = &scale[Step::SUBTLE_BACKGROUND];
    let mut issues = Vec::new();

    let text = perceptual_contrast(&scale[Step::TEXT], bg);
    if text < targets.text {
        issues.push(format!("step 11 on step 2: contrast {text:.1} \
                             below {:.0}", targets.text));
    }
    let high = perceptual_contrast(&scale[Step::HIGH_CONTRAST_TEXT], bg);
    if high < targets.high_contrast {
        issues.push(format!("step 12 on step 2: contrast {high:.1} \
                             below {:.0}", targets.high_contrast));
    }
    if mode == Mode::Light {
        let solid = &scale[Step::SOLID];
        let fg = foreground_for(solid);
        let score = perceptual_contrast(fg, solid);
        if score < targets.text {
            issues.push(format!("{fg} on step 9: contrast {score:.1} \
                                 below {:.0}", targets.text));
        }
    }
    ValidationResult { valid: issues.is_empty(), issues }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn scale(colors: [&str; 12]) -> ColorScale {
        ColorScale::from_steps(colors.iter().map(|c| c.to_string()).collect())
            .unwrap()
    }

    // Generated from #3B82F6, light.
    const BLUE: [&str; 12] = [
        "#f1f9ff", "#e7f6ff", "#d2edff", "#c1e3ff", "#acd6ff", "#95c5ff",
        "#7bb1ff", "#5a96f9", "#2d74e7", "#2366d1", "#174da4", "#000036"];

    #[test]
    fn passing_scale() {
        let v = validate_scale(&scale(BLUE), Mode::Light);
        assert_eq!(v, ValidationResult { valid: true, issues: vec![] });
    }

    #[test]
    fn builtin_blue_falls_short() {
        let v = validate_scale(
            crate::palettes::builtin_scale(crate::ColorFamily::Blue,
                                           Mode::Light, false),
            Mode::Light);
        assert_eq!(v.issues.len(), 3, "{:?}", v.issues);
    }

    #[test]
    fn flat_scale_reports_every_check() {
        let v = validate_scale(&scale(["#a0a0a0"; 12]), Mode::Light);
        assert!(!v.valid);
        assert_eq!(v.issues.len(), 3);
        assert!(v.issues[0].starts_with("step 11 on step 2: contrast 0.0"));
        assert!(v.issues[1].starts_with("step 12 on step 2"));
        assert!(v.issues[2].contains("on step 9"));
    }

    #[test]
    fn solid_check_is_light_only() {
        let mut colors = BLUE;
        colors[8] = "#a0a0a0";
        assert!(validate_scale(&scale(colors), Mode::Dark).valid);
        let v = validate_scale(&scale(colors), Mode::Light);
        assert_eq!(v.issues.len(), 1);
    }
}

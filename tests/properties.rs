//! Properties every generated scale satisfies, whatever the base color.

use proptest::prelude::*;
use radiant_scales::alpha::{alpha_progression, generate_alpha_scale};
use radiant_scales::contrast::perceptual_contrast;
use radiant_scales::scale::{target_coordinates, MAX_CHROMA};
use radiant_scales::{generate_color_scale, parse_color, validate_scale,
                     Adjustments, Error, Mode, Oklch, ScaleOptions, Step, STEPS};
use rgb::RGBA;

fn arb_hex() -> impl Strategy<Value = String> {
    any::<[u8; 3]>().prop_map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}"))
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Light), Just(Mode::Dark)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The same input always gives the same scale.
    #[test]
    fn generation_is_deterministic(base in arb_hex(), mode in arb_mode()) {
        let options = ScaleOptions::new(base, mode);
        let a = generate_color_scale(&options).unwrap();
        let b = generate_color_scale(&options).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Steps 1 to 12 are all present, in order.
    #[test]
    fn scales_are_complete(base in arb_hex(), mode in arb_mode()) {
        let s = generate_color_scale(&ScaleOptions::new(base.clone(), mode))
            .unwrap();
        let steps: Vec<u8> = s.iter().map(|(step, _)| step.get()).collect();
        prop_assert_eq!(steps, (1 ..= 12).collect::<Vec<u8>>());
        let a = generate_alpha_scale(&base, mode).unwrap();
        prop_assert_eq!(a.iter().len(), STEPS);
    }

    /// Step chroma stays in [0, MAX_CHROMA] even with a chroma boost.
    #[test]
    fn chroma_is_clamped(l in 0.0..=1.0f64, c in 0.0..2.0f64,
                         h in 0.0..360.0f64, boost in 0.0..4.0f64,
                         mode in arb_mode()) {
        let a = Adjustments { chroma_boost: boost, ..Default::default() };
        for t in target_coordinates(&Oklch::new(l, c, Some(h)), mode, &a) {
            prop_assert!((0.0 ..= MAX_CHROMA).contains(&t.c), "{}", t.c);
            prop_assert!((0.0 ..= 1.0).contains(&t.l), "{}", t.l);
        }
    }

    /// Step 11 and 12 either meet their targets or are reported.
    #[test]
    fn contrast_is_met_or_reported(base in arb_hex(), mode in arb_mode()) {
        let s = generate_color_scale(&ScaleOptions::new(base, mode)).unwrap();
        let issues = validate_scale(&s, mode).issues;
        let bg = &s[Step::SUBTLE_BACKGROUND];
        for (step, target, prefix) in [(Step::TEXT, 60., "step 11 "),
                                       (Step::HIGH_CONTRAST_TEXT, 90., "step 12 ")] {
            let reported = issues.iter().filter(|i| i.starts_with(prefix)).count();
            let short = perceptual_contrast(&s[step], bg) < target;
            prop_assert_eq!(reported, usize::from(short));
        }
    }

    /// Alpha scale opacities follow the progression of their mode.
    #[test]
    fn alpha_steps_follow_progression(base in arb_hex(), mode in arb_mode()) {
        let s = generate_alpha_scale(&base, mode).unwrap();
        let expected = alpha_progression(mode);
        for ((_, c), a) in s.iter().zip(expected) {
            let parsed: RGBA<f64> = parse_color(c).unwrap();
            prop_assert!((parsed.a / 255. - a).abs() < 1e-4, "{} vs {}", c, a);
        }
    }

    /// Anything that is not a color is rejected outright.
    #[test]
    fn garbage_is_rejected(s in "[g-z]{3,10}[0-9]", mode in arb_mode()) {
        let r = generate_color_scale(&ScaleOptions::new(s, mode));
        prop_assert!(matches!(r, Err(Error::InvalidColor { .. })), "{:?}", r);
    }
}

#[test]
fn alpha_progressions_are_monotonic() {
    for mode in [Mode::Light, Mode::Dark] {
        let p = alpha_progression(mode);
        assert!(p.windows(2).all(|w| w[0] <= w[1]), "{mode:?}");
    }
    assert_eq!((alpha_progression(Mode::Light)[0],
                alpha_progression(Mode::Light)[11]), (0.02, 0.80));
    assert_eq!((alpha_progression(Mode::Dark)[0],
                alpha_progression(Mode::Dark)[11]), (0.05, 0.90));
}

#[test]
fn many_notations_same_scale() {
    let hex = generate_color_scale(&ScaleOptions::new("#ff6347", Mode::Light));
    for s in ["tomato", "rgb(255, 99, 71)", "  #FF6347 "] {
        assert_eq!(generate_color_scale(&ScaleOptions::new(s, Mode::Light)),
                   hex, "{s}");
    }
}

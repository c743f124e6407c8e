//! Conversions between color strings and the OKLCH perceptual space.
//!
//! Colors travel through the crate as [`RGBA<f64>`] values with
//! components in \[0, 255\] (the convention of [`crate::RGBColor`]) and
//! as [`Oklch`] coordinates while scales are being computed.

use rgb::RGBA;
use crate::error::{Error, Result};

/// The string produced when an alpha color cannot be computed.
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Chroma below which a color is considered achromatic.
const ACHROMATIC: f64 = 1e-6;

/// A color in the OKLCH color space (OKLab with polar coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// The perceptual lightness, in \[0, 1\].
    pub l: f64,
    /// The chroma, from 0 to about 0.37 for colors inside sRGB.
    pub c: f64,
    /// The hue in degrees in \[0, 360), `None` for achromatic colors.
    pub h: Option<f64>,
}

impl Oklch {
    pub fn new(l: f64, c: f64, h: Option<f64>) -> Self { Oklch { l, c, h } }

    /// Convert a color with components in \[0, 255\].  Alpha is ignored.
    pub fn from_rgb(c: RGBA<f64>) -> Oklch {
        // See https://bottosson.github.io/posts/oklab/
        let r = linearize(c.r / 255.);
        let g = linearize(c.g / 255.);
        let b = linearize(c.b / 255.);
        let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
        let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
        let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;
        let (l, m, s) = (l.cbrt(), m.cbrt(), s.cbrt());
        let lightness = 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s;
        let a = 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s;
        let b = 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s;
        let chroma = a.hypot(b);
        let h = if chroma < ACHROMATIC { None }
                else { Some(b.atan2(a).to_degrees().rem_euclid(360.)) };
        Oklch { l: lightness, c: chroma, h }
    }

    /// Linear sRGB components, possibly outside \[0, 1\].
    fn to_linear_srgb(self) -> [f64; 3] {
        let h = self.h.unwrap_or(0.).to_radians();
        let a = self.c * h.cos();
        let b = self.c * h.sin();
        let l = self.l + 0.3963377774 * a + 0.2158037573 * b;
        let m = self.l - 0.1055613458 * a - 0.0638541728 * b;
        let s = self.l - 0.0894841775 * a - 1.2914855480 * b;
        let (l, m, s) = (l * l * l, m * m * m, s * s * s);
        [ 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
         -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
         -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s]
    }

    /// Convert to sRGB with components clipped into \[0, 255\] and an
    /// opaque alpha.
    pub fn to_rgb(self) -> RGBA<f64> {
        let [r, g, b] = self.to_linear_srgb();
        RGBA { r: 255. * encode(clamp(r, 0., 1.)),
               g: 255. * encode(clamp(g, 0., 1.)),
               b: 255. * encode(clamp(b, 0., 1.)),
               a: 255. }
    }

    /// Display-P3 components in \[0, 1\], clipped to the P3 gamut.
    fn to_display_p3(self) -> [f64; 3] {
        let xyz = mul3(&SRGB_TO_XYZ, self.to_linear_srgb());
        mul3(&XYZ_TO_P3, xyz).map(|c| encode(clamp(c, 0., 1.)))
    }
}

// CSS Color 4 matrices (D65).
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
    [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
    [0.01933081871559182, 0.11919477979462598, 0.9505321522496606]];
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2409699419045226, -1.537383177570094, -0.4986107602930034],
    [-0.9692436362808796, 1.8759675015077202, 0.04155505740717559],
    [0.05563007969699366, -0.20397695888897652, 1.0569715142428786]];
const P3_TO_XYZ: [[f64; 3]; 3] = [
    [0.4865709486482162, 0.26566769316909306, 0.1982172852343625],
    [0.2289745640697488, 0.6917385218365064, 0.079286914093745],
    [0.0, 0.04511338185890264, 1.043944368900976]];
const XYZ_TO_P3: [[f64; 3]; 3] = [
    [2.493496911941425, -0.9313836179191239, -0.40271078445071684],
    [-0.8294889695615747, 1.7626640603183463, 0.023624685841943577],
    [0.03584583024378447, -0.07617238926804182, 0.9568845240076872]];

fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

/// sRGB (and Display-P3) transfer function, encoded → linear.
fn linearize(c: f64) -> f64 {
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// sRGB (and Display-P3) transfer function, linear → encoded.
fn encode(c: f64) -> f64 {
    if c <= 0.0031308 { 12.92 * c } else { 1.055 * c.powf(1. / 2.4) - 0.055 }
}

/// Restrict `value` to \[`min`, `max`\].  A NaN `value` yields `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Parse any supported color notation into RGBA components in
/// \[0, 255\].
///
/// Besides everything `csscolorparser` understands (hex, `rgb()`,
/// `hsl()`, named colors, …), `color(display-p3 r g b [/ a])` and
/// `color(srgb r g b [/ a])` are accepted.  Wide-gamut colors are
/// clipped to sRGB.
pub(crate) fn parse_rgba(input: &str) -> Result<RGBA<f64>> {
    let s = input.trim();
    if s.get(.. 6).is_some_and(|p| p.eq_ignore_ascii_case("color(")) {
        return parse_color_function(input, &s[6 ..]);
    }
    let c = csscolorparser::parse(s)
        .map_err(|e| Error::invalid_color(input, e))?;
    Ok(RGBA { r: snap(c.r), g: snap(c.g), b: snap(c.b), a: snap(c.a) })
}

/// Scale a `csscolorparser` channel to \[0, 255\], dropping its f32
/// noise so that 8 bit inputs come out as exact integers.
fn snap(x: f32) -> f64 {
    (255. * x as f64 * 1e4).round() / 1e4
}

/// Parse the arguments of `color(…)`, i.e. everything after the
/// opening parenthesis.
fn parse_color_function(input: &str, args: &str) -> Result<RGBA<f64>> {
    let args = args.trim_end().strip_suffix(')')
        .ok_or_else(|| Error::invalid_color(input, "missing “)”"))?;
    let (channels, alpha) = match args.split_once('/') {
        Some((c, a)) => (c, Some(a.trim())),
        None => (args, None) };
    let mut tokens = channels.split_whitespace();
    let space = tokens.next()
        .ok_or_else(|| Error::invalid_color(input, "missing color space"))?;
    let mut rgb = [0.; 3];
    for c in rgb.iter_mut() {
        let t = tokens.next()
            .ok_or_else(|| Error::invalid_color(input, "expected 3 channels"))?;
        *c = parse_component(input, t)?;
    }
    if tokens.next().is_some() {
        return Err(Error::invalid_color(input, "expected 3 channels"));
    }
    let a = match alpha {
        Some(a) => clamp(parse_component(input, a)?, 0., 1.),
        None => 1. };
    let [r, g, b] = if space.eq_ignore_ascii_case("display-p3") {
        let linear = mul3(&P3_TO_XYZ, rgb.map(linearize));
        mul3(&XYZ_TO_SRGB, linear).map(|c| encode(clamp(c, 0., 1.)))
    } else if space.eq_ignore_ascii_case("srgb") {
        rgb.map(|c| clamp(c, 0., 1.))
    } else {
        return Err(Error::invalid_color(
            input, format!("unsupported color space “{space}”")));
    };
    Ok(RGBA { r: 255. * r, g: 255. * g, b: 255. * b, a: 255. * a })
}

/// A number or a percentage, returned as a fraction.
fn parse_component(input: &str, t: &str) -> Result<f64> {
    let (t, scale) = match t.strip_suffix('%') {
        Some(t) => (t, 0.01),
        None => (t, 1.) };
    match t.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x * scale),
        _ => Err(Error::invalid_color(input, format!("bad component “{t}”"))),
    }
}

/// Parse a color string into perceptual coordinates.
///
/// # Example
///
/// ```
/// use radiant_scales::space::parse_to_perceptual;
/// let c = parse_to_perceptual("#ffffff").unwrap();
/// assert!((c.l - 1.).abs() < 1e-3);
/// assert_eq!(c.h, None);
/// ```
pub fn parse_to_perceptual(color: &str) -> Result<Oklch> {
    parse_rgba(color).map(Oklch::from_rgb)
}

pub(crate) fn hex_string(c: RGBA<f64>) -> String {
    format!("#{:02x}{:02x}{:02x}", to_u8(c.r), to_u8(c.g), to_u8(c.b))
}

fn to_u8(c: f64) -> u8 { clamp(c, 0., 255.).round() as u8 }

/// Format `alpha` ∈ \[0, 1\] with at most three decimals.
pub(crate) fn rgba_string(c: RGBA<f64>, alpha: f64) -> String {
    let alpha = (clamp(alpha, 0., 1.) * 1000.).round() / 1000.;
    format!("rgba({}, {}, {}, {})", to_u8(c.r), to_u8(c.g), to_u8(c.b), alpha)
}

/// Format OKLCH coordinates as a `#rrggbb` string.  Colors outside
/// the sRGB gamut are clipped channel-wise.  A `None` hue is 0.
pub fn perceptual_to_color_string(l: f64, c: f64, h: Option<f64>) -> String {
    hex_string(Oklch::new(l, c, h).to_rgb())
}

/// Format OKLCH coordinates as `color(display-p3 r g b)`.
pub fn perceptual_to_p3_string(l: f64, c: f64, h: Option<f64>) -> String {
    let [r, g, b] = Oklch::new(l, c, h).to_display_p3();
    format!("color(display-p3 {r:.4} {g:.4} {b:.4})")
}

/// Format OKLCH coordinates and an opacity as `rgba(r, g, b, a)`.
///
/// Never fails: if any input is not a finite number the result is
/// [`TRANSPARENT`].
pub fn perceptual_to_alpha_color_string(
    l: f64, c: f64, h: Option<f64>, alpha: f64) -> String {
    let finite = l.is_finite() && c.is_finite() && alpha.is_finite()
        && h.map_or(true, f64::is_finite);
    if !finite { return TRANSPARENT.to_string() }
    rgba_string(Oklch::new(l, c, h).to_rgb(), alpha)
}

/// WCAG relative luminance of `color` in \[0, 1\], or 0 if `color`
/// cannot be parsed.  Alpha is ignored.
pub fn relative_luminance(color: &str) -> f64 {
    match parse_rgba(color) {
        Ok(c) => luminance(c),
        Err(_) => 0.,
    }
}

pub(crate) fn luminance(c: RGBA<f64>) -> f64 {
    let channel = |c: f64| {
        let c = clamp(c / 255., 0., 1.);
        if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
    };
    0.2126 * channel(c.r) + 0.7152 * channel(c.g) + 0.0722 * channel(c.b)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(x: f64, y: f64, eps: f64) {
        assert!((x - y).abs() <= eps, "{} ≉ {}", x, y);
    }

    #[test]
    fn reference_colors() {
        let white = parse_to_perceptual("white").unwrap();
        close(white.l, 1., 1e-4);
        assert!(white.c < 1e-4);
        let black = parse_to_perceptual("#000").unwrap();
        close(black.l, 0., 1e-9);
        assert_eq!(black.h, None);
        // oklch(0.6280 0.2577 29.23)
        let red = parse_to_perceptual("#ff0000").unwrap();
        close(red.l, 0.6280, 1e-3);
        close(red.c, 0.2577, 1e-3);
        close(red.h.unwrap(), 29.23, 0.1);
    }

    #[test]
    fn hex_round_trip() {
        for hex in ["#3b82f6", "#0090ff", "#e5484d", "#202020", "#fefcfb"] {
            let c = parse_to_perceptual(hex).unwrap();
            assert_eq!(perceptual_to_color_string(c.l, c.c, c.h), hex);
        }
    }

    #[test]
    fn notations() {
        let hex = parse_rgba("#3B82F6").unwrap();
        let func = parse_rgba("rgb(59, 130, 246)").unwrap();
        let srgb = parse_rgba("color(srgb 0.2314 0.5098 0.9647)").unwrap();
        for c in [func, srgb] {
            close(c.r, hex.r, 0.01);
            close(c.g, hex.g, 0.01);
            close(c.b, hex.b, 0.01);
        }
        let half = parse_rgba("rgba(0, 0, 0, 0.5)").unwrap();
        close(half.a, 127.5, 1e-9);
        let p3 = parse_rgba("color(display-p3 1 1 1 / 50%)").unwrap();
        close(p3.r, 255., 1e-6);
        close(p3.a, 127.5, 1e-9);
    }

    #[test]
    fn parsed_channels_are_exact() {
        assert_eq!(parse_rgba("#111111").unwrap(),
                   RGBA { r: 17., g: 17., b: 17., a: 255. });
        assert_eq!(parse_rgba("#3b82f6").unwrap(),
                   RGBA { r: 59., g: 130., b: 246., a: 255. });
        for v in 0 ..= 255u8 {
            let c = parse_rgba(&format!("#{v:02x}{v:02x}{v:02x}")).unwrap();
            assert_eq!(c.r, v as f64);
        }
        assert_eq!(parse_rgba("rgba(0, 0, 0, 0.5)").unwrap().a, 127.5);
    }

    #[test]
    fn invalid_colors() {
        for s in ["not-a-color", "", "#12345", "color(display-p3 1 1)",
                  "color(rec2020 1 0 0)", "color(srgb 1 0 0"] {
            assert!(matches!(parse_to_perceptual(s),
                             Err(Error::InvalidColor { .. })), "{s}");
        }
    }

    #[test]
    fn p3_round_trip() {
        let red = parse_to_perceptual("#ff0000").unwrap();
        let p3 = perceptual_to_p3_string(red.l, red.c, red.h);
        assert!(p3.starts_with("color(display-p3 0.917"), "{p3}");
        let back = parse_rgba(&p3).unwrap();
        close(back.r, 255., 0.5);
        close(back.g, 0., 0.5);
        close(back.b, 0., 0.5);
    }

    #[test]
    fn alpha_strings() {
        assert_eq!(perceptual_to_alpha_color_string(1., 0., None, 0.5),
                   "rgba(255, 255, 255, 0.5)");
        assert_eq!(perceptual_to_alpha_color_string(f64::NAN, 0.1, None, 0.5),
                   TRANSPARENT);
        assert_eq!(perceptual_to_alpha_color_string(
            0.5, 0.1, Some(f64::INFINITY), 0.5), TRANSPARENT);
    }

    #[test]
    fn luminance_values() {
        close(relative_luminance("#fff"), 1., 1e-12);
        close(relative_luminance("#000"), 0., 1e-12);
        close(relative_luminance("#808080"), 0.2159, 1e-4);
        assert_eq!(relative_luminance("garbage"), 0.);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(0.5, 0., 0.37), 0.37);
        assert_eq!(clamp(-1., 0., 1.), 0.);
        assert_eq!(clamp(f64::NAN, 0., 1.), 0.);
    }
}

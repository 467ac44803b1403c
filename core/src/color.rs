//! Parsing and normalization of heterogeneous color inputs.
//!
//! Colors reach the renderer in many shapes: CSS names, hex strings of
//! various lengths, functional notations such as `rgb()`, `hsl()`, or
//! `oklch()`, packed integers, channel arrays, and records. All of them
//! normalize to a single canonical [`Color4`], which displays as an
//! upper-case `#RRGGBBAA` hex string.
//!
//! # Examples
//! ```
//! use lumibox_core::color::normalize_color;
//!
//! let c = normalize_color("rgba(255, 0, 0, 0.5)").unwrap();
//! assert_eq!(c.to_string(), "#FF000080");
//!
//! let c = normalize_color("SlateGray").unwrap();
//! assert_eq!(c.to_string(), "#708090FF");
//! ```

use alloc::string::{String, ToString};
use core::fmt::{self, Display, Formatter};

use log::warn;

use crate::math::clamp_unit;
use crate::math::color::{hsl, oklch, rgba, to_byte, Color4};
use crate::math::float::fp;

use Error::*;

mod names;

/// A color in any of the accepted input forms.
///
/// Strings convert with [`From`], which classifies them by their syntax:
/// anything with a parenthesis is a [`Function`][Self::Function], a known
/// name (or `transparent`) is [`Named`][Self::Named], and everything else
/// is treated as [`Hex`][Self::Hex].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorValue<'a> {
    /// A CSS color name, matched case-insensitively.
    Named(&'a str),
    /// Three, four, six, or eight hex digits, with or without a leading `#`.
    Hex(&'a str),
    /// A functional notation: `rgb()`, `rgba()`, `hsl()`, `hsla()`, or
    /// `oklch()`.
    Function(&'a str),
    /// Channels `[r, g, b]` or `[r, g, b, a]`, with r, g, b in [0, 255] and
    /// a in [0, 1].
    Array(&'a [f32]),
    /// Channels as named fields.
    Record(ColorRecord),
    /// A packed `0xRRGGBB` or `0xRRGGBBAA` integer.
    Packed(u32),
}

/// Color channels as a record, with r, g, b in [0, 255] and an optional
/// alpha in [0, 1].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ColorRecord {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: Option<f32>,
}

/// Error returned when a color input cannot be normalized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input was empty or all whitespace.
    Empty,
    /// The input uses a recognized but unsupported notation, such as `lch()`.
    Unsupported(String),
    /// Malformed hex digits.
    InvalidHex(String),
    /// Malformed arguments to a functional notation.
    InvalidFunction(String),
    /// A numeric channel was infinite or NaN.
    NonFinite,
    /// The input matched no known form.
    UnknownFormat(String),
}

/// Alias used where the error type appears next to other error types.
pub type ColorError = Error;

/// Result of normalizing a color.
pub type Result<T> = core::result::Result<T, Error>;

/// Maps a bounded reading onto a lightened variant of a base color.
///
/// Small readings produce pale colors and readings at the maximum
/// reproduce the base color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueRamp<'a> {
    /// The color reached at the maximum reading.
    pub base: ColorValue<'a>,
    /// How far towards white a zero reading is lightened, in [0, 1].
    pub minimum_lighten: f32,
    /// Easing exponent applied to the inverted, normalized reading.
    pub exponent: f32,
}

/// Returned by [`lighten_hex_color`] and [`darken_hex_color`] on bad input.
pub const INVALID_HEX_SENTINEL: &str = "#000000";

//
// Free fns
//

/// Normalizes any accepted color input to a canonical RGBA color.
///
/// Leading and trailing whitespace is ignored. `transparent` maps to
/// fully transparent white. `lch()` is recognized but unsupported, and
/// is reported as [`Error::Unsupported`] with a logged warning.
///
/// # Examples
/// ```
/// use lumibox_core::color::{normalize_color, ColorError};
/// use lumibox_core::math::color::rgba;
///
/// assert_eq!(normalize_color("#abc"), Ok(rgba(0xAA, 0xBB, 0xCC, 0xFF)));
/// assert_eq!(normalize_color("transparent"), Ok(rgba(0xFF, 0xFF, 0xFF, 0)));
/// assert_eq!(normalize_color(0x1F77B4_u32), Ok(rgba(0x1F, 0x77, 0xB4, 0xFF)));
/// assert!(matches!(
///     normalize_color("lch(50% 40 30)"),
///     Err(ColorError::Unsupported(_))
/// ));
/// ```
pub fn normalize_color<'a>(value: impl Into<ColorValue<'a>>) -> Result<Color4> {
    match value.into() {
        ColorValue::Named(s) => parse_named(s),
        ColorValue::Hex(s) => parse_hex(s),
        ColorValue::Function(s) => parse_function(s),
        ColorValue::Array(chs) => parse_array(chs),
        ColorValue::Record(rec) => from_channels(rec.r, rec.g, rec.b, rec.a),
        ColorValue::Packed(n) => Ok(from_packed(n)),
    }
}

/// Normalizes `value` and formats it as `#RRGGBBAA`.
///
/// # Examples
/// ```
/// use lumibox_core::color::normalize_hex;
///
/// assert_eq!(normalize_hex("#1f77b4").as_deref(), Ok("#1F77B4FF"));
/// ```
pub fn normalize_hex<'a>(value: impl Into<ColorValue<'a>>) -> Result<String> {
    normalize_color(value).map(|c| c.to_string())
}

/// Blends a hex color towards white (positive `amount`) or black
/// (negative `amount`).
///
/// `hex` must be `#` followed by 3, 4, 6, or 8 hex digits. The amount is
/// clamped to [-1, 1]. The result has eight digits if the input carried
/// an alpha channel, which passes through unchanged, and six otherwise.
/// Invalid input logs a warning and yields [`INVALID_HEX_SENTINEL`].
///
/// # Examples
/// ```
/// use lumibox_core::color::lighten_hex_color;
///
/// assert_eq!(lighten_hex_color("#FF0000", 0.5), "#FF8080");
/// assert_eq!(lighten_hex_color("#80808040", -0.5), "#40404040");
/// assert_eq!(lighten_hex_color("red", 0.5), "#000000");
/// ```
pub fn lighten_hex_color(hex: &str, amount: f32) -> String {
    blend_strict_hex(hex, |c| c.lighten(amount))
}

/// Scales each channel of a hex color towards black by `amount`.
///
/// Accepts the same input as [`lighten_hex_color`] and formats the result
/// the same way.
///
/// # Examples
/// ```
/// use lumibox_core::color::darken_hex_color;
///
/// assert_eq!(darken_hex_color("#FF8000", 0.5), "#804000");
/// assert_eq!(darken_hex_color("#FFF", 1.0), "#000000");
/// ```
pub fn darken_hex_color(hex: &str, amount: f32) -> String {
    blend_strict_hex(hex, |c| c.darken(amount))
}

fn blend_strict_hex(hex: &str, f: impl FnOnce(Color4) -> Color4) -> String {
    let Some((color, has_alpha)) = parse_strict_hex(hex) else {
        warn!("invalid hex color {hex:?}, using {INVALID_HEX_SENTINEL}");
        return INVALID_HEX_SENTINEL.into();
    };
    let out = f(color);
    if has_alpha {
        out.to_string()
    } else {
        out.to_rgb().to_string()
    }
}

/// Parses `#` followed by exactly 3, 4, 6, or 8 hex digits.
fn parse_strict_hex(hex: &str) -> Option<(Color4, bool)> {
    let digits = hex.strip_prefix('#')?;
    let color = expand_hex(digits)?;
    Some((color, matches!(digits.len(), 4 | 8)))
}

//
// Parsers
//

fn parse_named(s: &str) -> Result<Color4> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("transparent") {
        return Ok(rgba(0xFF, 0xFF, 0xFF, 0x00));
    }
    lookup_name(s)
        .map(opaque)
        .ok_or_else(|| UnknownFormat(s.into()))
}

fn lookup_name(s: &str) -> Option<u32> {
    let upper = s.to_ascii_uppercase();
    names::lookup(&upper).or_else(|| names::lookup(&upper.replace("GRAY", "GREY")))
}

fn parse_hex(s: &str) -> Result<Color4> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Empty);
    }
    let digits = s.strip_prefix('#').unwrap_or(s);
    expand_hex(digits).ok_or_else(|| InvalidHex(s.into()))
}

/// Expands 3, 4, 6, or 8 hex digits without a leading `#`.
fn expand_hex(digits: &str) -> Option<Color4> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);

    let chs: [u8; 4] = match digits.len() {
        3 | 4 => {
            let mut chs = [0xFF; 4];
            for (i, ch) in chs.iter_mut().take(digits.len()).enumerate() {
                *ch = nibble(i).ok()? * 0x11;
            }
            chs
        }
        6 | 8 => {
            let mut chs = [0xFF; 4];
            for (i, ch) in chs.iter_mut().take(digits.len() / 2).enumerate() {
                *ch = byte(2 * i).ok()?;
            }
            chs
        }
        _ => return None,
    };
    Some(chs.into())
}

/// Packed integers up to `0xFFFFFF` are opaque `0xRRGGBB`, larger ones are
/// `0xRRGGBBAA`.
fn from_packed(n: u32) -> Color4 {
    if n <= 0xFF_FFFF {
        opaque(n)
    } else {
        Color4::from(n.to_be_bytes())
    }
}

fn opaque(rgb: u32) -> Color4 {
    Color4::from(((rgb << 8) | 0xFF).to_be_bytes())
}

fn parse_array(chs: &[f32]) -> Result<Color4> {
    match *chs {
        [r, g, b] => from_channels(r, g, b, None),
        [r, g, b, a] => from_channels(r, g, b, Some(a)),
        _ => Err(InvalidFunction(alloc::format!("{chs:?}"))),
    }
}

fn from_channels(r: f32, g: f32, b: f32, a: Option<f32>) -> Result<Color4> {
    let a = a.unwrap_or(1.0);
    if ![r, g, b, a].iter().all(|c| c.is_finite()) {
        return Err(NonFinite);
    }
    Ok(rgba(to_byte(r), to_byte(g), to_byte(b), alpha_byte(a)))
}

fn alpha_byte(a: f32) -> u8 {
    to_byte(clamp_unit(a) * 255.0)
}

fn parse_function(s: &str) -> Result<Color4> {
    let s = s.trim();
    let invalid = || InvalidFunction(s.into());

    let (name, args) = s
        .split_once('(')
        .and_then(|(name, rest)| Some((name.trim(), rest.strip_suffix(')')?)))
        .ok_or_else(invalid)?;

    let name = name.to_ascii_lowercase();
    match name.as_str() {
        "rgb" | "rgba" => parse_rgb_args(args).ok_or_else(invalid)?,
        "hsl" | "hsla" => parse_hsl_args(args).ok_or_else(invalid)?,
        "oklch" => parse_oklch_args(args).ok_or_else(invalid)?,
        "lch" => {
            warn!("lch() colors are not supported: {s:?}");
            Err(Unsupported(s.into()))
        }
        _ => Err(UnknownFormat(s.into())),
    }
}

/// Parses `r, g, b[, a]` with integer channels and a decimal or percent
/// alpha. Returns `None` on a syntax error.
fn parse_rgb_args(args: &str) -> Option<Result<Color4>> {
    let mut it = args.split(',').map(str::trim);
    let mut channel = || -> Option<u8> {
        let c = it.next()?;
        if c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(c.parse::<u32>().map_or(255, |c| c.min(255) as u8))
    };
    let [r, g, b] = [channel()?, channel()?, channel()?];
    let a = match it.next() {
        Some(a) => match parse_alpha(a)? {
            Ok(a) => a,
            Err(e) => return Some(Err(e)),
        },
        None => 0xFF,
    };
    it.next().is_none().then_some(Ok(rgba(r, g, b, a)))
}

/// Parses `h, s%, l%[, a]`.
fn parse_hsl_args(args: &str) -> Option<Result<Color4>> {
    let parts: alloc::vec::Vec<_> = args.split(',').map(str::trim).collect();
    let (h, s, l, a) = match parts[..] {
        [h, s, l] => (h, s, l, None),
        [h, s, l, a] => (h, s, l, Some(a)),
        _ => return None,
    };
    let h = h.strip_suffix("deg").unwrap_or(h);
    let s = s.strip_suffix('%')?;
    let l = l.strip_suffix('%')?;

    let nums = [h, s, l].map(parse_number);
    let [h, s, l] = match nums {
        [Some(Ok(h)), Some(Ok(s)), Some(Ok(l))] => [h, s, l],
        _ if nums.iter().any(|n| matches!(n, Some(Err(_)))) => {
            return Some(Err(NonFinite));
        }
        _ => return None,
    };
    let a = match a.map(parse_alpha) {
        Some(Some(Ok(a))) => a,
        Some(Some(Err(e))) => return Some(Err(e)),
        Some(None) => return None,
        None => 0xFF,
    };
    let h = fp::rem_euclid(h, 360.0);
    let rgb = hsl(h, clamp_unit(s / 100.0), clamp_unit(l / 100.0)).to_rgb();
    Some(Ok(rgb.to_rgba(a)))
}

/// Parses `L C H[deg] [/ A]`, separated by spaces or commas.
///
/// Lightness and chroma accept an optional `%` sign; either value above 1
/// is read as a percentage and divided by 100. Lightness is then clamped
/// to [0, 1] and chroma to non-negative values.
fn parse_oklch_args(args: &str) -> Option<Result<Color4>> {
    let (lch, alpha) = match args.split_once('/') {
        Some((lch, a)) => (lch, Some(a.trim())),
        None => (args, None),
    };
    let parts: alloc::vec::Vec<_> = lch
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    let [l, c, h] = parts[..] else {
        return None;
    };
    let l = l.strip_suffix('%').unwrap_or(l);
    let c = c.strip_suffix('%').unwrap_or(c);
    let h = h.strip_suffix("deg").unwrap_or(h);

    let [l, c, h] = match [l, c, h].map(parse_number) {
        [Some(Ok(l)), Some(Ok(c)), Some(Ok(h))] => [l, c, h],
        nums if nums.iter().any(|n| matches!(n, Some(Err(_)))) => {
            return Some(Err(NonFinite));
        }
        _ => return None,
    };
    let a = match alpha.map(parse_alpha) {
        Some(Some(Ok(a))) => a,
        Some(Some(Err(e))) => return Some(Err(e)),
        Some(None) => return None,
        None => 0xFF,
    };
    let percent = |x: f32| if x > 1.0 { x / 100.0 } else { x };
    let l = percent(l).clamp(0.0, 1.0);
    let c = percent(c).max(0.0);

    Some(Ok(oklch(l, c, h).to_rgb().to_rgba(a)))
}

/// Parses an alpha value as a decimal or a percentage, returning its byte.
fn parse_alpha(s: &str) -> Option<Result<u8>> {
    let (num, scale) = match s.strip_suffix('%') {
        Some(num) => (num, 100.0),
        None => (s, 1.0),
    };
    Some(parse_number(num)?.map(|a| alpha_byte(a / scale)))
}

/// Parses a finite decimal number. `None` means a syntax error.
fn parse_number(s: &str) -> Option<Result<f32>> {
    let s = s.trim();
    let valid = !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    if !valid {
        return None;
    }
    let x: f32 = s.parse().ok()?;
    Some(if x.is_finite() { Ok(x) } else { Err(NonFinite) })
}

//
// Inherent impls
//

impl<'a> ValueRamp<'a> {
    /// Returns a ramp with a minimum lightening of 0.8 and exponent 1.1.
    pub fn new(base: impl Into<ColorValue<'a>>) -> Self {
        Self {
            base: base.into(),
            minimum_lighten: 0.8,
            exponent: 1.1,
        }
    }

    /// Returns the color for `value` on a scale from 0 to `max_value`.
    ///
    /// The reading is normalized to [0, 1], inverted, and raised to
    /// `exponent`; the base color is then lightened by `minimum_lighten`
    /// times the result. Lightened colors are opaque. If `max_value` is not
    /// positive or either argument is not finite, the normalized base color
    /// is returned as is.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::color::ValueRamp;
    /// use lumibox_core::math::color::rgba;
    ///
    /// let ramp = ValueRamp::new("#FF0000");
    /// assert_eq!(ramp.color_from_value_with_max(100.0, 100.0), Ok(rgba(255, 0, 0, 255)));
    /// assert_eq!(ramp.color_from_value_with_max(0.0, 100.0), Ok(rgba(255, 204, 204, 255)));
    /// ```
    pub fn color_from_value_with_max(&self, value: f32, max_value: f32) -> Result<Color4> {
        let base = normalize_color(self.base)?;
        if !value.is_finite() || !max_value.is_finite() || max_value <= 0.0 {
            return Ok(base);
        }
        let norm = clamp_unit(value / max_value);
        let eased = fp::powf(1.0 - norm, self.exponent);
        let amount = clamp_unit(self.minimum_lighten * eased);

        Ok(base.to_rgb().to_rgba(0xFF).lighten(amount))
    }
}

//
// Trait impls
//

impl<'a> From<&'a str> for ColorValue<'a> {
    fn from(s: &'a str) -> Self {
        let t = s.trim();
        if t.contains('(') {
            Self::Function(s)
        } else if t.starts_with('#') {
            Self::Hex(s)
        } else if t.eq_ignore_ascii_case("transparent") || lookup_name(t).is_some() {
            Self::Named(s)
        } else {
            Self::Hex(s)
        }
    }
}

impl<'a> From<&'a String> for ColorValue<'a> {
    fn from(s: &'a String) -> Self {
        s.as_str().into()
    }
}

impl From<u32> for ColorValue<'_> {
    fn from(n: u32) -> Self {
        Self::Packed(n)
    }
}

impl<'a> From<&'a [f32]> for ColorValue<'a> {
    fn from(chs: &'a [f32]) -> Self {
        Self::Array(chs)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for ColorValue<'a> {
    fn from(chs: &'a [f32; N]) -> Self {
        Self::Array(chs)
    }
}

impl From<ColorRecord> for ColorValue<'_> {
    fn from(rec: ColorRecord) -> Self {
        Self::Record(rec)
    }
}

impl core::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Empty => f.write_str("empty color"),
            Unsupported(s) => write!(f, "unsupported color notation: {s}"),
            InvalidHex(s) => write!(f, "invalid hex color: {s}"),
            InvalidFunction(s) => write!(f, "invalid color function: {s}"),
            NonFinite => f.write_str("non-finite color channel"),
            UnknownFormat(s) => write!(f, "unrecognized color: {s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::math::color::rgba;

    use super::*;

    fn hex(v: impl Into<ColorValue<'static>>) -> String {
        normalize_hex(v).unwrap()
    }

    #[test]
    fn classify_strings() {
        assert_eq!(ColorValue::from("red"), ColorValue::Named("red"));
        assert_eq!(ColorValue::from(" Transparent "), ColorValue::Named(" Transparent "));
        assert_eq!(ColorValue::from("#fff"), ColorValue::Hex("#fff"));
        assert_eq!(ColorValue::from("fade"), ColorValue::Hex("fade"));
        assert_eq!(ColorValue::from("rgb(1,2,3)"), ColorValue::Function("rgb(1,2,3)"));
    }

    #[test]
    fn hex_forms() {
        assert_eq!(hex("#1f77b4"), "#1F77B4FF");
        assert_eq!(hex("1f77b4"), "#1F77B4FF");
        assert_eq!(hex("#1f77b480"), "#1F77B480");
        assert_eq!(hex("#abc"), "#AABBCCFF");
        assert_eq!(hex("#abcd"), "#AABBCCDD");
        assert_eq!(hex("  #ABC  "), "#AABBCCFF");
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(normalize_color("#abcde"), Err(InvalidHex("#abcde".into())));
        assert_eq!(normalize_color("#ggg"), Err(InvalidHex("#ggg".into())));
        assert_eq!(normalize_color("nope"), Err(InvalidHex("nope".into())));
        assert_eq!(normalize_color("   "), Err(Empty));
    }

    #[test]
    fn named_colors() {
        assert_eq!(hex("red"), "#FF0000FF");
        assert_eq!(hex("black"), "#000000FF");
        assert_eq!(hex("RebeccaPurple"), "#663399FF");
        assert_eq!(hex("gray"), "#808080FF");
        assert_eq!(hex("grey"), "#808080FF");
        assert_eq!(hex("dimgray"), "#696969FF");
        assert_eq!(hex("LightSlateGrey"), "#778899FF");
        assert_eq!(hex("transparent"), "#FFFFFF00");
    }

    #[test]
    fn rgb_function() {
        assert_eq!(hex("rgb(31, 119, 180)"), "#1F77B4FF");
        assert_eq!(hex("rgba(255,0,0,0.5)"), "#FF000080");
        assert_eq!(hex("rgba(255, 0, 0, 50%)"), "#FF000080");
        assert_eq!(hex("RGB(300, 0, 0)"), "#FF0000FF");
        assert_eq!(hex("rgba(0, 0, 0, 2)"), "#000000FF");
    }

    #[test]
    fn invalid_rgb_function() {
        for s in ["rgb(1, 2)", "rgb(1, 2, 3, 4, 5)", "rgb(1.5, 2, 3)", "rgb(-1, 2, 3)", "rgb(1, 2, 3"] {
            assert_eq!(normalize_color(s), Err(InvalidFunction(s.into())), "{s}");
        }
        assert_eq!(normalize_color("rgba(1, 2, 3, inf)"), Err(InvalidFunction("rgba(1, 2, 3, inf)".into())));
        assert_eq!(normalize_color("rgba(1, 2, 3, 1e99)"), Err(NonFinite));
    }

    #[test]
    fn hsl_function() {
        assert_eq!(hex("hsl(0, 100%, 50%)"), "#FF0000FF");
        assert_eq!(hex("hsl(120, 100%, 25%)"), "#008000FF");
        assert_eq!(hex("hsla(240, 100%, 50%, 0.5)"), "#0000FF80");
        assert_eq!(hex("hsl(480, 100%, 50%)"), "#00FF00FF");
        assert!(normalize_color("hsl(0, 100, 50%)").is_err());
    }

    #[test]
    fn oklch_function() {
        assert_eq!(hex("oklch(1 0 0)"), "#FFFFFFFF");
        assert_eq!(hex("oklch(0% 0 0)"), "#000000FF");
        assert_eq!(hex("oklch(100% 0 0deg / 50%)"), "#FFFFFF80");
        assert_eq!(hex("oklch(1, 0, 0 / 0.5)"), "#FFFFFF80");
        assert_eq!(hex("oklch(62.8% 25.77% 29.23deg)"), "#FF0000FF");
        assert_eq!(hex("oklch(0.628 0.2577 29.23)"), "#FF0000FF");
        assert!(normalize_color("oklch(0.5 0.1)").is_err());
    }

    #[test]
    fn lch_is_unsupported() {
        let s = "lch(50% 40 30)";
        assert_eq!(normalize_color(s), Err(Unsupported(s.into())));
    }

    #[test]
    fn unknown_function() {
        let s = "hwb(0 0% 0%)";
        assert_eq!(normalize_color(s), Err(UnknownFormat(s.into())));
    }

    #[test]
    fn packed_ints() {
        assert_eq!(hex(0x1F77B4_u32), "#1F77B4FF");
        assert_eq!(hex(0x0000_00FF_u32), "#0000FFFF");
        assert_eq!(hex(0x1F77_B480_u32), "#1F77B480");
    }

    #[test]
    fn arrays_and_records() {
        assert_eq!(hex(&[255.0_f32, 0.0, 0.0]), "#FF0000FF");
        assert_eq!(hex(&[255.0_f32, 0.0, 0.0, 0.5]), "#FF000080");

        let chs = vec![1.0_f32, 2.0];
        assert!(matches!(normalize_color(chs.as_slice()), Err(InvalidFunction(_))));

        let rec = ColorRecord { r: 0.0, g: 128.0, b: 255.0, a: None };
        assert_eq!(hex(rec), "#0080FFFF");
        let rec = ColorRecord { a: Some(0.0), ..rec };
        assert_eq!(hex(rec), "#0080FF00");
        let rec = ColorRecord { r: f32::NAN, ..rec };
        assert_eq!(normalize_color(rec), Err(NonFinite));
    }

    #[test]
    fn lighten_and_darken() {
        assert_eq!(lighten_hex_color("#000", 0.5), "#808080");
        assert_eq!(lighten_hex_color("#0000", 1.0), "#FFFFFF00");
        assert_eq!(lighten_hex_color("#102030", 2.0), "#FFFFFF");
        assert_eq!(lighten_hex_color("#FF8000", -1.0), "#000000");
        assert_eq!(darken_hex_color("#FF800080", 0.25), "#BF600080");
        assert_eq!(darken_hex_color("#FFFFFF", 0.0), "#FFFFFF");
    }

    #[test]
    fn lighten_invalid_input_is_black() {
        for s in ["", "FFF", "#FFFFF", "#GGGGGG", "#FFFFFFFFF"] {
            assert_eq!(lighten_hex_color(s, 0.5), INVALID_HEX_SENTINEL, "{s}");
            assert_eq!(darken_hex_color(s, 0.5), INVALID_HEX_SENTINEL, "{s}");
        }
    }

    #[test]
    fn value_ramp() {
        let ramp = ValueRamp::new("#FF0000");
        assert_eq!(ramp.color_from_value_with_max(0.0, 100.0), Ok(rgba(255, 204, 204, 255)));
        assert_eq!(ramp.color_from_value_with_max(100.0, 100.0), Ok(rgba(255, 0, 0, 255)));
        assert_eq!(ramp.color_from_value_with_max(250.0, 100.0), Ok(rgba(255, 0, 0, 255)));

        let mid = ramp.color_from_value_with_max(50.0, 100.0).unwrap();
        assert!(mid.g() > 0 && mid.g() < 204, "{mid:?}");
    }

    #[test]
    fn value_ramp_degenerate_returns_base() {
        let ramp = ValueRamp::new("#FF000080");
        let base = rgba(255, 0, 0, 0x80);
        assert_eq!(ramp.color_from_value_with_max(10.0, 0.0), Ok(base));
        assert_eq!(ramp.color_from_value_with_max(10.0, -5.0), Ok(base));
        assert_eq!(ramp.color_from_value_with_max(f32::NAN, 100.0), Ok(base));
        assert_eq!(ramp.color_from_value_with_max(10.0, f32::INFINITY), Ok(base));
    }

    #[test]
    fn value_ramp_invalid_base() {
        let ramp = ValueRamp::new("lch(1 2 3)");
        assert!(ramp.color_from_value_with_max(1.0, 2.0).is_err());
    }

    #[test]
    fn error_display() {
        assert_eq!(InvalidHex("#zz".into()).to_string(), "invalid hex color: #zz");
        assert_eq!(Empty.to_string(), "empty color");
    }
}

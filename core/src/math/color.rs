//! Colors and color spaces.

use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::Index;

use super::angle::degs;
use super::clamp_unit;
use super::float::fp;

//
// Types
//

/// A generic color type, similar to [`Vector`][super::Vector].
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
///   Color components are also called *channels*.
/// * `Space`: the color space that `Self` is an element of.
#[repr(transparent)]
pub struct Color<Repr, Space>(pub Repr, PhantomData<Space>);

/// The sRGB color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb;

/// The sRGB color space with alpha (opacity).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgba;

/// The HSL color space (hue in degrees, saturation and lightness in [0, 1]).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Hsl;

/// The perceptually uniform OKLab color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Oklab;

/// The cylindrical form of OKLab (lightness, chroma, hue in degrees).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Oklch;

/// An RGB color with `u8` components.
pub type Color3<Space = Rgb> = Color<[u8; 3], Space>;

/// An RGBA color with `u8` components.
pub type Color4<Space = Rgba> = Color<[u8; 4], Space>;

/// A color with `f32` components.
pub type Color3f<Space = Rgb> = Color<[f32; 3], Space>;

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color<[Ch; 3], Rgb> {
    Color([r, g, b], PhantomData)
}
/// Returns a new RGBA color with `r`, `g`, `b`, and `a` components.
pub const fn rgba<Ch>(r: Ch, g: Ch, b: Ch, a: Ch) -> Color<[Ch; 4], Rgba> {
    Color([r, g, b, a], PhantomData)
}
/// Returns a new HSL color with hue `h` in degrees, and saturation `s`
/// and lightness `l` in [0, 1].
pub const fn hsl(h: f32, s: f32, l: f32) -> Color3f<Hsl> {
    Color([h, s, l], PhantomData)
}
/// Returns a new OKLab color.
pub const fn oklab(l: f32, a: f32, b: f32) -> Color3f<Oklab> {
    Color([l, a, b], PhantomData)
}
/// Returns a new OKLCH color with lightness `l` in [0, 1], chroma `c`,
/// and hue `h` in degrees.
pub const fn oklch(l: f32, c: f32, h: f32) -> Color3f<Oklch> {
    Color([l, c, h], PhantomData)
}

/// Converts an OKLCH color to gamma-encoded sRGB bytes.
///
/// The hue is reduced modulo 360° first, so negative hues work as expected.
/// Colors outside the sRGB gamut are clipped channel by channel in linear
/// space before gamma encoding, which may shift their hue slightly. This is
/// intended: no gamut mapping is attempted.
///
/// # Examples
/// ```
/// use lumibox_core::math::color::oklch_to_srgb;
///
/// assert_eq!(oklch_to_srgb(1.0, 0.0, 0.0), [255, 255, 255]);
/// assert_eq!(oklch_to_srgb(0.0, 0.0, 0.0), [0, 0, 0]);
/// ```
pub fn oklch_to_srgb(lightness: f32, chroma: f32, hue_degs: f32) -> [u8; 3] {
    oklch(lightness, chroma, hue_degs).to_rgb().0
}

/// Applies the sRGB transfer function to a linear channel value.
pub fn srgb_encode(c: f32) -> f32 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * fp::powf(c, 1.0 / 2.4) - 0.055
    }
}

/// Rounds `x` to the nearest integer and clamps it to [0, 255].
pub fn to_byte(x: f32) -> u8 {
    if x.is_finite() {
        fp::round(x).clamp(0.0, 255.0) as u8
    } else {
        0
    }
}

//
// Inherent impls
//

impl<Ch: Copy, Sp> Color<[Ch; 3], Sp> {
    /// Returns the components of `self` as an array.
    pub const fn channels(&self) -> [Ch; 3] {
        self.0
    }
}

impl<R, Sc> Color<R, Rgb>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the red component of `self`.
    pub fn r(&self) -> Sc {
        self.0[0]
    }
    /// Returns the green component of `self`.
    pub fn g(&self) -> Sc {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    pub fn b(&self) -> Sc {
        self.0[2]
    }
}

impl<R, Sc> Color<R, Rgba>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the red component of `self`.
    pub fn r(&self) -> Sc {
        self.0[0]
    }
    /// Returns the green component of `self`.
    pub fn g(&self) -> Sc {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    pub fn b(&self) -> Sc {
        self.0[2]
    }
    /// Returns the alpha component of `self`.
    pub fn a(&self) -> Sc {
        self.0[3]
    }
}

impl Color3 {
    /// Returns `self` with the given alpha.
    pub const fn to_rgba(self, a: u8) -> Color4 {
        let [r, g, b] = self.0;
        rgba(r, g, b, a)
    }

    /// Returns `self` with every channel multiplied by `factor`,
    /// truncated towards zero and clamped to [0, 255].
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::math::color::rgb;
    ///
    /// assert_eq!(rgb(200u8, 100, 3).scale(0.5), rgb(100, 50, 1));
    /// assert_eq!(rgb(200u8, 100, 3).scale(2.0), rgb(255, 200, 6));
    /// ```
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Color(
            self.0.map(|c| {
                let c = fp::floor(f32::from(c) * factor);
                if c.is_finite() { c.clamp(0.0, 255.0) as u8 } else { 0 }
            }),
            PhantomData,
        )
    }

    /// Returns `self` as a CSS `rgb(r, g, b)` function string.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::math::color::rgb;
    ///
    /// assert_eq!(rgb(31u8, 119, 180).to_css(), "rgb(31, 119, 180)");
    /// ```
    pub fn to_css(&self) -> alloc::string::String {
        let [r, g, b] = self.0;
        alloc::format!("rgb({r}, {g}, {b})")
    }

    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }
}

impl Color4 {
    /// Returns the RGB components of `self`, discarding alpha.
    pub const fn to_rgb(self) -> Color3 {
        let [r, g, b, _] = self.0;
        rgb(r, g, b)
    }

    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0xRR_GG_BB_AA`.
    pub const fn to_rgba_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Returns `self` blended towards white by `amount` in [-1, 1].
    ///
    /// A positive amount moves each RGB channel the given fraction of the
    /// way to 255; a negative amount scales the channels towards zero
    /// instead. Alpha is unchanged. The amount is clamped to [-1, 1] and a
    /// non-finite amount counts as zero.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::math::color::rgba;
    ///
    /// let c = rgba(0x80u8, 0x00, 0xFF, 0x40);
    /// assert_eq!(c.lighten(0.5), rgba(0xC0, 0x80, 0xFF, 0x40));
    /// assert_eq!(c.lighten(-0.5), rgba(0x40, 0x00, 0x80, 0x40));
    /// ```
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let p = if amount.is_finite() { amount.clamp(-1.0, 1.0) } else { 0.0 };
        self.map_rgb(|c| {
            if p >= 0.0 { c + (255.0 - c) * p } else { c * (1.0 + p) }
        })
    }

    /// Returns `self` scaled towards black by `amount`.
    ///
    /// Each RGB channel `c` becomes `c - c * amount`, rounded and clamped to
    /// [0, 255]. Alpha is unchanged.
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        self.map_rgb(|c| c - c * amount)
    }

    fn map_rgb(self, f: impl Fn(f32) -> f32) -> Self {
        let [r, g, b, a] = self.0;
        let [r, g, b] = [r, g, b].map(|c| to_byte(f(f32::from(c))));
        rgba(r, g, b, a)
    }
}

impl Color3f<Hsl> {
    /// Converts `self` to sRGB, rounding each channel to a byte.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::math::color::{hsl, rgb};
    ///
    /// assert_eq!(hsl(0.0, 1.0, 0.5).to_rgb(), rgb(255, 0, 0));
    /// assert_eq!(hsl(120.0, 1.0, 0.25).to_rgb(), rgb(0, 128, 0));
    /// assert_eq!(hsl(0.0, 0.0, 0.5).to_rgb(), rgb(128, 128, 128));
    /// ```
    pub fn to_rgb(&self) -> Color3 {
        let [h, s, l] = self.0;
        let h = h / 360.0;

        let [r, g, b] = if s == 0.0 {
            [l; 3]
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            [h + 1.0 / 3.0, h, h - 1.0 / 3.0].map(|t| hue_to_rgb(p, q, t))
        };
        rgb(to_byte(r * 255.0), to_byte(g * 255.0), to_byte(b * 255.0))
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Color3f<Oklab> {
    /// Converts `self` to gamma-encoded sRGB.
    ///
    /// Linear channel values are clipped to [0, 1] before encoding.
    pub fn to_rgb(&self) -> Color3 {
        // https://bottosson.github.io/posts/oklab/
        let [l, a, b] = self.0;

        let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
        let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
        let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

        let (l, m, s) = (l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_);

        let lin = [
            4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        ];
        let [r, g, b] = lin.map(|c| to_byte(srgb_encode(clamp_unit(c)) * 255.0));
        rgb(r, g, b)
    }
}

impl Color3f<Oklch> {
    /// Converts `self` to OKLab, reducing the hue modulo 360° first.
    pub fn to_oklab(&self) -> Color3f<Oklab> {
        let [l, c, h] = self.0;
        let (sin, cos) = degs(fp::rem_euclid(h, 360.0)).sin_cos();
        oklab(l, c * cos, c * sin)
    }

    /// Converts `self` to gamma-encoded sRGB.
    pub fn to_rgb(&self) -> Color3 {
        self.to_oklab().to_rgb()
    }
}

//
// Foreign trait impls
//

impl<R: Clone, Sp> Clone for Color<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}
impl<R: Copy, Sp> Copy for Color<R, Sp> {}

impl<R: PartialEq, Sp> PartialEq for Color<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<R: Eq, Sp> Eq for Color<R, Sp> {}

impl<R: Default, Sp> Default for Color<R, Sp> {
    fn default() -> Self {
        Self(R::default(), PhantomData)
    }
}

impl<R: Debug, Space: Debug + Default> Debug for Color<R, Space> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color<{:?}>{:?}", Space::default(), self.0)
    }
}

impl<R, Sp> From<R> for Color<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, PhantomData)
    }
}

impl Display for Color3 {
    /// Formats `self` as `#RRGGBB`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl Display for Color4 {
    /// Formats `self` as `#RRGGBBAA`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

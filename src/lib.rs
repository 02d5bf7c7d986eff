//! Small helpers for user interfaces.
//!
//! - [`animation_delay`] staggers the start of animations over a
//!   sequence of elements.
//! - [`RGBColor::is_light`] says whether a color is perceptually light
//!   (e.g. to choose a dark or light text color on top of it).
//!
//! Colors are the pixel types of the [`rgb`] crate.

use std::fmt;
use rgb::{RGB, RGBA, RGB8, RGBA8};

mod delay;
pub use delay::{animation_delay, animation_delay_with, base_delay,
                delay_range, MIN_DELAY, STAGGER_PERIOD};

/// Luminance above which a color is considered light.
pub const LIGHTNESS_THRESHOLD: f64 = 0.5;

/// A channel of an RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Errors returned by the checked operations of this crate.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// A color channel is `NaN` or infinite.
    #[error("invalid {channel} channel value: {value}")]
    InvalidArgument { channel: Channel, value: f64 },
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor {
    /// Return the red, green, blue and alpha components of the color
    /// (nominally in \[0, 255\], but not necessarily so for floats).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Return the luminance Y = (0.299 R + 0.587 G + 0.114 B) / 255
    /// of the color (ITU-R BT.601 weights).  It is in \[0, 1\] when
    /// the channels are in \[0, 255\].  No clamping is performed.
    fn luminance(&self) -> f64 {
        let RGBA { r, g, b, .. } = self.to_rgba();
        (0.299 * r + 0.587 * g + 0.114 * b) / 255.
    }

    /// Says whether the color is light, i.e., whether its
    /// [`luminance`][RGBColor::luminance] is strictly greater than
    /// [`LIGHTNESS_THRESHOLD`].  The alpha component is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use ui_color_delay::RGBColor;
    /// assert!(RGB8::new(0, 255, 0).is_light());
    /// assert!(! RGB8::new(255, 0, 0).is_light());
    /// ```
    #[inline]
    fn is_light(&self) -> bool { above_threshold(self.luminance()) }

    /// Says whether the color is dark.  This is the negation of
    /// [`is_light`][RGBColor::is_light], so a color of luminance
    /// exactly 0.5 is dark.
    #[inline]
    fn is_dark(&self) -> bool { ! self.is_light() }

    /// Same as [`is_light`][RGBColor::is_light] but fails if one of
    /// the channels is `NaN` or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB;
    /// use ui_color_delay::{RGBColor, Error, Channel};
    /// let c = RGB::new(0., f64::NAN, 0.);
    /// assert!(matches!(c.try_is_light(),
    ///                  Err(Error::InvalidArgument {
    ///                      channel: Channel::Green, .. })));
    /// ```
    fn try_is_light(&self) -> Result<bool, Error> {
        let RGBA { r, g, b, .. } = self.to_rgba();
        for (channel, value) in [(Channel::Red, r), (Channel::Green, g),
                                 (Channel::Blue, b)] {
            if ! value.is_finite() {
                return Err(Error::InvalidArgument { channel, value })
            }
        }
        Ok(self.is_light())
    }
}

/// Says whether `color` is light.  See [`RGBColor::is_light`].
#[inline]
pub fn is_light(color: &impl RGBColor) -> bool { color.is_light() }

fn above_threshold(y: f64) -> bool { y > LIGHTNESS_THRESHOLD }

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r, g: self.g, b: self.b, a: 255. }
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::white(RGB8::new(255, 255, 255), true)]
    #[case::black(RGB8::new(0, 0, 0), false)]
    #[case::gray(RGB8::new(128, 128, 128), true)]
    #[case::dark_gray(RGB8::new(127, 127, 127), false)]
    #[case::red(RGB8::new(255, 0, 0), false)]
    #[case::green(RGB8::new(0, 255, 0), true)]
    #[case::blue(RGB8::new(0, 0, 255), false)]
    #[case::yellow(RGB8::new(255, 255, 0), true)]
    fn classify_rgb8(#[case] c: RGB8, #[case] light: bool) {
        assert_eq!(c.is_light(), light, "{c:?}");
        assert_eq!(c.is_dark(), ! light, "{c:?}");
        assert_eq!(is_light(&c), light);
    }

    #[test]
    fn luminance_extremes() {
        assert!((RGB8::new(255, 255, 255).luminance() - 1.).abs() <= 1e-12);
        assert_eq!(RGB8::new(0, 0, 0).luminance(), 0.);
        let gray = RGB8::new(128, 128, 128).luminance();
        assert!((gray - 128. / 255.).abs() <= 1e-12, "{gray}");
    }

    #[test]
    fn channels_are_weighted() {
        let red = RGB8::new(255, 0, 0).luminance();
        let green = RGB8::new(0, 255, 0).luminance();
        let blue = RGB8::new(0, 0, 255).luminance();
        assert!((red - 0.299).abs() <= 1e-12, "{red}");
        assert!((green - 0.587).abs() <= 1e-12, "{green}");
        assert!((blue - 0.114).abs() <= 1e-12, "{blue}");
    }

    #[test]
    fn threshold_is_strict() {
        assert!(! above_threshold(0.5));
        assert!(above_threshold(0.5 + f64::EPSILON));
        for v in [0., 0.3, 127.5, 200., 255.] {
            let c = RGB::new(v, v, v);
            assert_eq!(c.is_light(), c.luminance() > 0.5);
        }
    }

    #[test]
    fn no_clamping() {
        // Clamped to 255, this red would be dark.
        assert!(RGB::new(510., 0., 0.).is_light());
        assert!(RGB::new(-255., -255., -255.).is_dark());
        let y = RGB::new(-255., -255., -255.).luminance();
        assert!((y + 1.).abs() <= 1e-12, "{y}");
    }

    #[test]
    fn alpha_is_ignored() {
        assert!(RGBA8::new(255, 255, 255, 0).is_light());
        assert!(RGBA::new(0., 0., 0., 255.).is_dark());
        assert_eq!(RGBA8::new(0, 255, 0, 10).luminance(),
                   RGB8::new(0, 255, 0).luminance());
    }

    #[test]
    fn checked_classification() {
        assert_eq!(RGB::new(255., 255., 255.).try_is_light(), Ok(true));
        assert_eq!(RGB8::new(0, 0, 0).try_is_light(), Ok(false));
        assert_eq!(RGB::new(510., 0., 0.).try_is_light(), Ok(true));
        let e = RGB::new(f64::INFINITY, 0., 0.).try_is_light();
        assert_eq!(e, Err(Error::InvalidArgument {
            channel: Channel::Red, value: f64::INFINITY }));
        match RGBA::new(0., 0., f64::NAN, 1.).try_is_light() {
            Err(Error::InvalidArgument { channel, value }) => {
                assert_eq!(channel, Channel::Blue);
                assert!(value.is_nan());
            }
            r => panic!("expected an error, got {r:?}"),
        }
    }

    #[test]
    fn error_message() {
        let e = Error::InvalidArgument { channel: Channel::Green,
                                         value: f64::NEG_INFINITY };
        assert_eq!(e.to_string(), "invalid green channel value: -inf");
    }
}

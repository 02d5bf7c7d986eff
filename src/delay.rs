//! Staggered animation delays.

use std::ops::Range;
use rand::Rng;

/// Number of consecutive indices after which the base delays repeat.
pub const STAGGER_PERIOD: i64 = 8;

/// Smallest delay returned by [`animation_delay`].
pub const MIN_DELAY: f64 = 0.4;

/// Returns the magnitude of the random part of the delay of the
/// element at position `index`.
///
/// The bucket `index % STAGGER_PERIOD` uses Rust's truncating
/// remainder, so a negative `index` that is not a multiple of 8 falls
/// outside the table and gets a base delay of `0.`.
///
/// # Example
///
/// ```
/// use ui_color_delay::base_delay;
/// assert_eq!(base_delay(0), 0.15);
/// assert_eq!(base_delay(10), 0.5);
/// assert_eq!(base_delay(-1), 0.);
/// ```
pub fn base_delay(index: i64) -> f64 {
    match index % STAGGER_PERIOD {
        0 => 0.15,
        1 | 7 => 0.3,
        2 => 0.5,
        3 | 6 => 0.6,
        4 => 0.4,
        5 => 0.2,
        _ => 0.,
    }
}

/// The range `MIN_DELAY .. MIN_DELAY + base_delay(index)` in which
/// the delay of `index` is drawn.  The range is empty when the base
/// delay is `0.` (in which case the delay is exactly [`MIN_DELAY`]).
pub fn delay_range(index: i64) -> Range<f64> {
    MIN_DELAY .. base_delay(index) + MIN_DELAY
}

/// Same as [`animation_delay`] but draws the random value from `rng`.
///
/// # Example
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use ui_color_delay::animation_delay_with;
/// let mut rng = StdRng::seed_from_u64(42);
/// let d = animation_delay_with(3, &mut rng);
/// assert!((0.4 .. 1.0).contains(&d));
/// ```
pub fn animation_delay_with<R>(index: i64, rng: &mut R) -> f64
where R: Rng + ?Sized {
    let u: f64 = rng.random(); // ∈ [0, 1)
    base_delay(index) * u + MIN_DELAY
}

/// Returns a pseudo-random delay (in seconds) for the animation of
/// the element at position `index` in a sequence, so that neighbouring
/// elements do not start at the same time.  The result is always at
/// least [`MIN_DELAY`] and lies in [`delay_range(index)`][delay_range].
///
/// The random value is drawn from the thread-local generator
/// [`rand::rng`], so this function can be called from any thread.
///
/// # Example
///
/// ```
/// use ui_color_delay::animation_delay;
/// let d = animation_delay(0);
/// assert!(0.4 <= d && d < 0.55);
/// ```
pub fn animation_delay(index: i64) -> f64 {
    animation_delay_with(index, &mut rand::rng())
}

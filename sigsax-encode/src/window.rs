use std::borrow::Cow;
use std::fmt::{self, Display};

use log::warn;

///
/// Smoothing window size. Zero disables smoothing; any other value is a power of two.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize(usize);

impl WindowSize {
    pub const NONE: WindowSize = WindowSize(0);

    ///
    /// Force a requested window to a usable size by rounding it down to the nearest
    /// power of two. `0` stays `0`.
    ///
    /// ```
    /// use sigsax_encode::WindowSize;
    ///
    /// assert_eq!(WindowSize::forced(100).get(), 64);
    /// assert_eq!(WindowSize::forced(32).get(), 32);
    /// assert_eq!(WindowSize::forced(0).get(), 0);
    /// ```
    pub fn forced(requested: usize) -> Self {
        if requested == 0 {
            return WindowSize::NONE;
        }

        let forced = 1usize << (usize::BITS - 1 - requested.leading_zeros());
        if forced != requested {
            warn!(
                "Window size {} is not a power of 2; using {} instead",
                requested, forced
            );
        }
        WindowSize(forced)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Replace every value with the mean of its window.
///
/// Positions are grouped by `index / window`: non-overlapping windows laid down from the
/// start of the series. The last window may be shorter and averages only what it holds.
/// The output has the same length as the input.
///
/// # Arguments
/// - values: the series to smooth
/// - window: window size; [WindowSize::NONE] returns the input untouched
pub fn smooth(values: &[f64], window: WindowSize) -> Cow<'_, [f64]> {
    if window.is_none() {
        return Cow::Borrowed(values);
    }

    let mut smoothed = Vec::with_capacity(values.len());
    for chunk in values.chunks(window.get()) {
        let mean = chunk.iter().sum::<f64>() / chunk.len() as f64;
        smoothed.extend(std::iter::repeat_n(mean, chunk.len()));
    }

    Cow::Owned(smoothed)
}

//! Breakpoint lookup for SAX quantization.
//!
//! For an alphabet of size `a` the breakpoints are the standard normal quantiles at
//! cumulative probabilities `k / a` for `k = 1 .. a - 1`. Cutting at these values gives
//! `a` buckets of equal probability for z-normalized, roughly Gaussian data.

use crate::alphabet::AlphabetSize;
use crate::errors::SaxError;

/// Index `i` holds the breakpoints for alphabet size `i + 2`.
const BREAKPOINTS: [&[f64]; AlphabetSize::MAX - AlphabetSize::MIN + 1] = [
    &[0.0],
    &[-0.4307, 0.4307],
    &[-0.6745, 0.0, 0.6745],
    &[-0.8416, -0.2533, 0.2533, 0.8416],
    &[-0.9674, -0.4307, 0.0, 0.4307, 0.9674],
    &[-1.0676, -0.5659, -0.1800, 0.1800, 0.5659, 1.0676],
    &[-1.1503, -0.6745, -0.3186, 0.0, 0.3186, 0.6745, 1.1503],
    &[-1.2206, -0.7647, -0.4307, -0.1397, 0.1397, 0.4307, 0.7647, 1.2206],
    &[-1.2816, -0.8416, -0.5244, -0.2533, 0.0, 0.2533, 0.5244, 0.8416, 1.2816],
    &[
        -1.3352, -0.9085, -0.6046, -0.3488, -0.1142, 0.1142, 0.3488, 0.6046, 0.9085, 1.3352,
    ],
    &[
        -1.3830, -0.9674, -0.6745, -0.4307, -0.2104, 0.0, 0.2104, 0.4307, 0.6745, 0.9674, 1.3830,
    ],
    &[
        -1.4261, -1.0201, -0.7363, -0.5024, -0.2934, -0.0966, 0.0966, 0.2934, 0.5024, 0.7363,
        1.0201, 1.4261,
    ],
    &[
        -1.4652, -1.0676, -0.7916, -0.5659, -0.3661, -0.1800, 0.0, 0.1800, 0.3661, 0.5659,
        0.7916, 1.0676, 1.4652,
    ],
    &[
        -1.5011, -1.1108, -0.8416, -0.6229, -0.4307, -0.2533, -0.0837, 0.0837, 0.2533, 0.4307,
        0.6229, 0.8416, 1.1108, 1.5011,
    ],
    &[
        -1.5341, -1.1503, -0.8871, -0.6745, -0.4888, -0.3186, -0.1573, 0.0, 0.1573, 0.3186,
        0.4888, 0.6745, 0.8871, 1.1503, 1.5341,
    ],
    &[
        -1.5647, -1.1868, -0.9289, -0.7215, -0.5414, -0.3774, -0.2230, -0.0738, 0.0738, 0.2230,
        0.3774, 0.5414, 0.7215, 0.9289, 1.1868, 1.5647,
    ],
    &[
        -1.5932, -1.2206, -0.9674, -0.7647, -0.5895, -0.4307, -0.2822, -0.1397, 0.0, 0.1397,
        0.2822, 0.4307, 0.5895, 0.7647, 0.9674, 1.2206, 1.5932,
    ],
    &[
        -1.6199, -1.2521, -1.0031, -0.8046, -0.6336, -0.4795, -0.3360, -0.1992, -0.0660, 0.0660,
        0.1992, 0.3360, 0.4795, 0.6336, 0.8046, 1.0031, 1.2521, 1.6199,
    ],
    &[
        -1.6449, -1.2816, -1.0364, -0.8416, -0.6745, -0.5244, -0.3853, -0.2533, -0.1257, 0.0,
        0.1257, 0.2533, 0.3853, 0.5244, 0.6745, 0.8416, 1.0364, 1.2816, 1.6449,
    ],
];

///
/// Ascending breakpoints for an alphabet: `alphabet - 1` thresholds.
///
pub fn breakpoints(alphabet: AlphabetSize) -> &'static [f64] {
    BREAKPOINTS[alphabet.get() - AlphabetSize::MIN]
}

///
/// Like [breakpoints], for an unchecked alphabet size.
///
pub fn breakpoints_for(size: usize) -> Result<&'static [f64], SaxError> {
    Ok(breakpoints(AlphabetSize::new(size)?))
}

///
/// Bucket of a normalized value: the number of breakpoints it strictly exceeds.
///
pub fn bucket(z: f64, cuts: &[f64]) -> usize {
    cuts.partition_point(|&cut| z > cut)
}

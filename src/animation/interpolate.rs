use smallvec::SmallVec;

use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::math::map_linear;

type Breakpoints = SmallVec<[f64; 4]>;

/// Piecewise-linear mapping from an input domain onto an output range.
///
/// Inputs outside the first/last breakpoint clamp to the first/last output value.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolate {
    input: Breakpoints,
    output: Breakpoints,
}

impl Interpolate {
    /// Build a mapping from matching `input`/`output` breakpoint lists.
    ///
    /// Inputs must be strictly increasing and all values finite.
    pub fn new(input: &[f64], output: &[f64]) -> FolioResult<Self> {
        if input.len() < 2 {
            return Err(FolioError::animation(
                "interpolation needs at least two breakpoints",
            ));
        }
        if input.len() != output.len() {
            return Err(FolioError::animation(format!(
                "interpolation input has {} breakpoints but output has {}",
                input.len(),
                output.len()
            )));
        }
        if !input.iter().chain(output).all(|v| v.is_finite()) {
            return Err(FolioError::animation(
                "interpolation breakpoints must be finite",
            ));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(FolioError::animation(
                "interpolation input must be strictly increasing",
            ));
        }
        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
        })
    }

    /// Two-point mapping `[in_lo, in_hi] -> [out_lo, out_hi]`.
    pub fn linear(domain: [f64; 2], range: [f64; 2]) -> FolioResult<Self> {
        Self::new(&domain, &range)
    }

    /// Input breakpoints.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Output breakpoints.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Map `x` through the piecewise-linear function.
    ///
    /// NaN maps to the first output value.
    pub fn map(&self, x: f64) -> f64 {
        let last = self.input.len() - 1;
        if x.is_nan() || x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[last] {
            return self.output[last];
        }

        // First breakpoint strictly greater than x; x is inside (input[0], input[last]).
        let hi = self.input.partition_point(|&b| b <= x);
        let lo = hi - 1;
        map_linear(
            x,
            self.input[lo],
            self.input[hi],
            self.output[lo],
            self.output[hi],
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;

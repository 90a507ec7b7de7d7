//! Measurement validation and classification thresholds

use std::fmt;

use num_traits::ToPrimitive;

use crate::error::{Result, SortError};

/// Volume at or above which a package is bulky (product of the three
/// linear dimensions).
pub const BULKY_VOLUME: f64 = 1_000_000.0;

/// Linear dimension at or above which a package is bulky regardless of
/// its volume.
pub const BULKY_DIM: f64 = 150.0;

/// Mass at or above which a package is heavy.
pub const HEAVY_MASS: f64 = 20.0;

/// Semantic name of a classification parameter.
///
/// Used in [`SortError`] so validation failures report `width`, `height`,
/// `length` or `mass` rather than an argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Param {
    /// First linear dimension.
    Width,
    /// Second linear dimension.
    Height,
    /// Third linear dimension.
    Length,
    /// Package mass.
    Mass,
}

impl Param {
    /// Returns the lowercase parameter name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Param::Width => "width",
            Param::Height => "height",
            Param::Length => "length",
            Param::Mass => "mass",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric measurement accepted by [`classify`](crate::classify).
///
/// Implemented for every primitive integer and float type through
/// [`num_traits::ToPrimitive`]. `bool` and non-numeric types do not
/// implement it, which keeps the input domain strictly numeric at
/// compile time:
///
/// ```compile_fail
/// // bool is not a measurement, even though it casts to an integer
/// packsort::classify(true, 1, 1, 1);
/// ```
pub trait Measurement: Copy + ToPrimitive {}

impl<T: Copy + ToPrimitive> Measurement for T {}

/// Validates a single named measurement and returns it as `f64`.
///
/// Checks run in order: numeric conversion, finiteness, sign. The
/// conversion step only fails for exotic [`ToPrimitive`] types whose
/// value has no `f64` representation; every primitive converts.
pub(crate) fn validate<T: Measurement>(param: Param, value: T) -> Result<f64> {
    let v = value.to_f64().ok_or(SortError::InvalidType {
        param,
        type_name: std::any::type_name::<T>(),
    })?;
    if !v.is_finite() {
        return Err(SortError::NotFinite { param, value: v });
    }
    if v < 0.0 {
        return Err(SortError::Negative { param, value: v });
    }
    Ok(v)
}

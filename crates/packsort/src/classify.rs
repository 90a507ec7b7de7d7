//! The classification entry point

use crate::error::Result;
use crate::measure::{validate, Measurement, Param, BULKY_DIM, BULKY_VOLUME, HEAVY_MASS};
use crate::stack::Stack;

/// Classifies a package into its dispatch [`Stack`].
///
/// A package is *bulky* when its volume (`width * height * length`)
/// reaches [`BULKY_VOLUME`] or any single dimension reaches
/// [`BULKY_DIM`], and *heavy* when its mass reaches [`HEAVY_MASS`].
/// Every threshold is inclusive: a value exactly at the boundary
/// triggers the condition.
///
/// | bulky | heavy | result   |
/// |-------|-------|----------|
/// | yes   | yes   | Rejected |
/// | yes   | no    | Special  |
/// | no    | yes   | Special  |
/// | no    | no    | Standard |
///
/// Arguments are validated before any classification work, in the fixed
/// order width, height, length, mass; the first invalid argument is
/// reported. Each argument must be a finite, non-negative number.
/// Integer and float arguments mix freely.
///
/// # Examples
///
/// ```
/// use packsort::{classify, Stack};
///
/// assert_eq!(classify(100, 100, 100, 0)?, Stack::Special);
/// assert_eq!(classify(10.5, 10.5, 10.5, 1.2)?, Stack::Standard);
/// assert_eq!(classify(200, 200, 1, 25)?, Stack::Rejected);
/// # Ok::<(), packsort::SortError>(())
/// ```
///
/// # Errors
///
/// Returns [`SortError`](crate::SortError) when an argument is NaN,
/// infinite, negative, or has no `f64` representation.
pub fn classify<W, H, L, M>(width: W, height: H, length: L, mass: M) -> Result<Stack>
where
    W: Measurement,
    H: Measurement,
    L: Measurement,
    M: Measurement,
{
    let width = validate(Param::Width, width)?;
    let height = validate(Param::Height, height)?;
    let length = validate(Param::Length, length)?;
    let mass = validate(Param::Mass, mass)?;

    let volume = width * height * length;
    let bulky = volume >= BULKY_VOLUME
        || width >= BULKY_DIM
        || height >= BULKY_DIM
        || length >= BULKY_DIM;
    let heavy = mass >= HEAVY_MASS;

    Ok(match (bulky, heavy) {
        (true, true) => Stack::Rejected,
        (true, false) | (false, true) => Stack::Special,
        (false, false) => Stack::Standard,
    })
}

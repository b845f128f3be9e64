// MIT/Apache2 License

use crate::{Error, Result};
use num_traits::{Bounded, NumCast, ToPrimitive};

/// Scale a value in `[0, 1]` onto the full range of an unsigned integer type.
#[inline]
pub(crate) fn clamp<N: Bounded + NumCast>(value: f64) -> N {
    let max = N::max_value().to_f64().unwrap_or(0.0);
    <N as NumCast>::from((value * max).round()).unwrap_or_else(N::max_value)
}

/// Round a coordinate to the nearest pixel, failing if it does not fit in an `i32`.
#[inline]
pub(crate) fn double_to_int(value: f64) -> Result<i32> {
    value
        .round()
        .to_i32()
        .ok_or(Error::IntegerOverflow(value))
}

/// Like `double_to_int`, but for extents that may not be negative.
#[inline]
pub(crate) fn double_to_extent(value: f64) -> Result<i32> {
    double_to_int(value.max(0.0))
}

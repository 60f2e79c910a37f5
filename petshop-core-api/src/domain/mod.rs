pub mod requests;
pub mod views;

pub use requests::*;
pub use views::*;

use heapless::String as HeaplessString;
use std::str::FromStr;

use crate::error::{ApiError, ApiResult};

/// Convert user input into a bounded model string, rejecting overlong
/// values as a validation error rather than truncating them.
pub(crate) fn bounded<const N: usize>(field: &str, value: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::from_str(value).map_err(|_| {
        ApiError::ValidationError(format!("{field} is too long (max {N} chars)"))
    })
}

pub(crate) fn bounded_opt<const N: usize>(
    field: &str,
    value: Option<&str>,
) -> ApiResult<Option<HeaplessString<N>>> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(Some(bounded::<N>(field, v)?)),
        _ => Ok(None),
    }
}

//! Helpers for paging and batching fixture collections.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Default page number for [`pagination_params`].
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size for [`pagination_params`].
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Query parameters for a single page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// One-based page number.
    pub page: u64,
    /// Maximum number of items on the page.
    pub limit: u64,
    /// Number of items skipped before the page starts.
    pub offset: u64,
}

/// Builds pagination parameters for a one-based `page` of `per_page` items.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] when `page` or `per_page` is
/// zero, or when the offset does not fit in a `u64`.
///
/// # Example
///
/// ```
/// use fixture_data::{PaginationParams, pagination_params};
///
/// let params = pagination_params(2, 25).expect("valid page");
/// assert_eq!(params, PaginationParams { page: 2, limit: 25, offset: 25 });
/// ```
pub fn pagination_params(page: u64, per_page: u64) -> Result<PaginationParams, GenerationError> {
    if page == 0 {
        return Err(GenerationError::invalid_argument("page", "pages start at 1"));
    }
    if per_page == 0 {
        return Err(GenerationError::invalid_argument(
            "per_page",
            "must be positive",
        ));
    }
    let offset = (page - 1).checked_mul(per_page).ok_or_else(|| {
        GenerationError::invalid_argument("page", format!("offset of page {page} overflows"))
    })?;
    Ok(PaginationParams {
        page,
        limit: per_page,
        offset,
    })
}

/// Splits `items` into consecutive chunks of `size`; the last may be shorter.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] when `size` is zero.
///
/// # Example
///
/// ```
/// use fixture_data::chunk_slice;
///
/// let chunks = chunk_slice(&[1, 2, 3, 4, 5], 2).expect("non-zero size");
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk_slice<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, GenerationError> {
    if size == 0 {
        return Err(GenerationError::invalid_argument("size", "must be positive"));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

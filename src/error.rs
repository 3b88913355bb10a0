use thiserror::Error;

use crate::RejectReason;
use crate::attr::AttrError;

/// Unified error type for callers that want to propagate style loading
/// problems with `?`.
///
/// Queries never fail; only ingestion produces these.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error(transparent)]
    Rejected(#[from] RejectReason),

    #[error(transparent)]
    Attr(#[from] AttrError),
}

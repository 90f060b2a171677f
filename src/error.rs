//! Error types shared by plane construction and the deck layer.

/// Failure conditions surfaced by construction, pairing and deck checks.
///
/// Verification of an arbitrary point list is not an error; see
/// [`crate::verify::verify_point_lines`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaneError {
    /// More points were requested than the largest supported order provides.
    #[error("unable to support {requested} points; the largest supported plane has {max} points")]
    InvalidRequest { requested: usize, max: usize },

    /// Fewer lines were supplied than the selected order consumes.
    #[error("unable to assign lines to points; at least {required} lines are needed, {supplied} supplied")]
    InsufficientLines { required: usize, supplied: usize },

    /// An argument was absent or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configured order is neither 1 nor prime.
    #[error("order {0} is not supported; plane orders must be 1 or prime")]
    UnsupportedOrder(usize),

    /// A built plane did not pass verification.
    #[error("unable to distribute symbols in cards")]
    VerificationFailed,

    /// Two cards of a deck share other than exactly one symbol.
    #[error("card {left} and card {right} have {shared} symbols in common")]
    CardMismatch { left: usize, right: usize, shared: usize },
}

use thiserror::Error;

/// Errors raised while building a grid from caller-supplied input.
///
/// An unreachable goal is not an error: searches report it as an empty
/// route and callers must branch on emptiness before using the result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("occupancy input has zero rows or zero columns")]
    EmptyGrid,
    #[error("occupancy input row {row} has {len} samples, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

use thiserror::Error;

/// Fatal conditions detected before a search starts.
///
/// An unreachable end is not an error; it yields a [`PathResult`] without a
/// path.
///
/// [`PathResult`]: crate::PathResult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("grid has no start cell; generate it first")]
    MissingStart,
    #[error("grid has no end cell; generate it first")]
    MissingEnd,
}

/// Returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected BFS, DFS, Dijkstra or A*)")]
pub struct ParseAlgorithmError(pub String);

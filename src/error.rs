//! Errors reported by a paginated run.
//!
//! Items emitted before an error stay emitted: the error is reported after whatever
//! partial output was produced.

/// An invalid combination of list command flags.
///
/// Detected before any page is fetched.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// The next marker was selected as output while auto-iterating.
    #[error("selecting the next marker requires manual paging, but auto-iteration is enabled")]
    NextMarkerWithAutoIteration,
}

/// The outcome of a failed paginated run.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// A page fetch failed. The run stopped and the fetch was not retried.
    #[error("failed to fetch the page at marker {marker:?} after {pages} page(s)")]
    Fetch {
        /// The error returned by the fetcher.
        #[source]
        source: E,
        /// The marker of the failed request, to resume from.
        marker: Option<String>,
        /// The number of pages fetched before the failure.
        pages: usize,
    },
    /// The run was cancelled by the caller.
    #[error("pagination cancelled after {pages} page(s)")]
    Cancelled {
        /// The marker of the page that was not fetched, to resume from.
        next_marker: Option<String>,
        /// The number of pages fetched before the cancellation.
        pages: usize,
    },
    /// The list command flags conflict.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl<E> Error<E> {
    /// The marker to resume from, if the run can be resumed.
    pub fn resume_marker(&self) -> Option<&str> {
        match self {
            Self::Fetch { marker, .. } => marker.as_deref(),
            Self::Cancelled { next_marker, .. } => next_marker.as_deref(),
            Self::Configuration(_) => None,
        }
    }

    /// The number of pages fetched before the run stopped.
    pub fn pages(&self) -> usize {
        match self {
            Self::Fetch { pages, .. } | Self::Cancelled { pages, .. } => *pages,
            Self::Configuration(_) => 0,
        }
    }
}

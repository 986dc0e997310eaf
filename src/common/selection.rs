use crate::common;

use serde::{Deserialize, Serialize};

/// What a list command writes to its output.
///
/// ```rust
/// use cloudfront_pager::common::selection;
///
/// let selection = selection::Selection::default();
/// assert_eq!(selection, selection::Selection::Items);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Every item of every page, one at a time.
    #[default]
    Items,
    /// Every page as a whole, including its `next_marker`.
    Pages,
    /// Only the marker to resume from, once the run is over.
    ///
    /// Requires [`common::mode::IterationMode::UserControlled`]: an auto-iterating run
    /// always ends without a marker.
    NextMarker,
}

/// One unit of output produced by a list command.
#[derive(Clone, Debug, PartialEq)]
pub enum Output<T> {
    /// A single item.
    Item(T),
    /// A whole page.
    Page(common::page::Page<T>),
    /// The marker to resume from.
    NextMarker(String),
}

impl Selection {
    /// Whether this selection can produce output under the given mode.
    pub fn supports(&self, mode: common::mode::IterationMode) -> bool {
        !matches!(
            (self, mode),
            (Self::NextMarker, common::mode::IterationMode::AutoIterate)
        )
    }

    /// Project a fetched page into outputs.
    pub(crate) fn project_page<T>(
        &self,
        page: common::page::Page<T>,
        emit: &mut impl FnMut(Output<T>),
    ) {
        match self {
            Self::Items => page.items.into_iter().map(Output::Item).for_each(emit),
            Self::Pages => emit(Output::Page(page)),
            Self::NextMarker => {}
        }
    }

    /// Project the end of a run into outputs.
    pub(crate) fn project_end<T>(
        &self,
        next_marker: Option<&str>,
        emit: &mut impl FnMut(Output<T>),
    ) {
        if let (Self::NextMarker, Some(next_marker)) = (self, next_marker) {
            emit(Output::NextMarker(next_marker.to_string()));
        }
    }
}

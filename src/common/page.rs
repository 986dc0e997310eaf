use serde::{Deserialize, Serialize};

/// Normalize a marker: an empty marker is no marker.
pub(crate) fn normalize_marker(marker: Option<String>) -> Option<String> {
    marker.filter(|marker| !marker.is_empty())
}

/// Pagination arguments shared by every list request.
///
/// ```rust
/// use cloudfront_pager::common::page;
///
/// let page_args = page::PageArgs {
///     max_items: Some(50),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
pub struct PageArgs {
    /// Where the listing starts.
    ///
    /// `None` (or an empty marker) starts from the beginning. Otherwise this is the
    /// `next_marker` of a previous page.
    pub marker: Option<String>,
    /// The maximum number of items the service should return per page.
    ///
    /// Passed through unchanged on every request.
    pub max_items: Option<i32>,
}

/// A list request that carries [`PageArgs`].
///
/// The executor rewrites the marker once per fetched page and never touches any
/// other field.
pub trait Paged {
    /// The pagination arguments of the request.
    fn page_args(&self) -> &PageArgs;

    /// Mutable access to the pagination arguments of the request.
    fn page_args_mut(&mut self) -> &mut PageArgs;
}

impl Paged for PageArgs {
    fn page_args(&self) -> &PageArgs {
        self
    }

    fn page_args_mut(&mut self) -> &mut PageArgs {
        self
    }
}

/// One batch of results returned by a single fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// The items of the page, in the order returned by the service.
    pub items: Vec<T>,
    /// Where the next page starts, `None` when the listing is exhausted.
    pub next_marker: Option<String>,
}

impl<T> Page<T> {
    /// Create a page. An empty `next_marker` is treated as no marker.
    pub fn new(items: Vec<T>, next_marker: Option<String>) -> Self {
        Self {
            items,
            next_marker: normalize_marker(next_marker),
        }
    }

    /// Whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.next_marker.is_some()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_marker: None,
        }
    }
}

/// implement [`Paged`](crate::common::page::Paged) for a request holding its arguments in a
/// `page_args` field
#[macro_export]
macro_rules! impl_paged {
    ($request_type:ty) => {
        impl $crate::common::page::Paged for $request_type {
            fn page_args(&self) -> &$crate::common::page::PageArgs {
                &self.page_args
            }

            fn page_args_mut(&mut self) -> &mut $crate::common::page::PageArgs {
                &mut self.page_args
            }
        }
    };
}

/// implement the conversion from an SDK list body into a page
#[macro_export]
macro_rules! impl_page_from_list {
    ($list_type:ty, $item_type:ty) => {
        impl From<Option<$list_type>> for $crate::common::page::Page<$item_type> {
            fn from(list: Option<$list_type>) -> Self {
                match list {
                    Some(list) => $crate::common::page::Page::new(
                        list.items.unwrap_or_default(),
                        list.next_marker,
                    ),
                    None => $crate::common::page::Page::default(),
                }
            }
        }
    };
}

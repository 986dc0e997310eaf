//! The paginated list executor.
//!
//! [`Paginator`] drives any [`PageFetcher`]: it fetches one page at a time, emits its
//! items in the order returned by the service and follows `next_marker` until the
//! listing is exhausted, the caller pages manually, a fetch fails or the run is
//! cancelled.

use crate::{common, error};

use tokio_util::sync::CancellationToken;

/// Fetches a single page of a list request.
///
/// The CloudFront SDK client implements this for every request in [`crate::list`].
/// Retries, signing and timeouts belong to the implementor, never to the executor.
pub trait PageFetcher<R> {
    /// The items listed by the request.
    type Item;
    /// The error returned by a failed fetch.
    type Error;

    /// Perform one round trip for `request`, starting at its current marker.
    fn fetch_page(
        &self,
        request: &R,
    ) -> impl Future<Output = Result<common::page::Page<Self::Item>, Self::Error>> + Send;
}

/// The outcome of a successful paginated run.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Completion {
    /// The marker to resume from, `None` once the listing is exhausted.
    pub next_marker: Option<String>,
    /// The number of pages fetched.
    pub pages: usize,
    /// The number of items emitted.
    pub items: usize,
}

/// Paginated list executor.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::{common, list, paginate};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_distributions = list::distributions::ListDistributions {
///     page_args: common::page::PageArgs {
///         max_items: Some(100),
///         ..Default::default()
///     },
/// };
/// let cancellation = CancellationToken::new();
/// paginate::Paginator::new(client, list_distributions)
///     .mode(common::mode::IterationMode::AutoIterate)
///     .cancellation(cancellation.clone())
///     .for_each(|distribution| println!("{}", distribution.domain_name))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Paginator<'a, F, R> {
    cancellation: CancellationToken,
    fetcher: &'a F,
    mode: common::mode::IterationMode,
    request: R,
}

impl<'a, F, R> Paginator<'a, F, R>
where
    F: PageFetcher<R>,
    R: common::page::Paged,
{
    /// Create an auto-iterating paginator that is never cancelled.
    pub fn new(fetcher: &'a F, request: R) -> Self {
        Self {
            cancellation: CancellationToken::new(),
            fetcher,
            mode: common::mode::IterationMode::default(),
            request,
        }
    }

    /// Set the iteration mode.
    pub fn mode(mut self, mode: common::mode::IterationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the token cancelling the run.
    ///
    /// The token is checked before every fetch and raced against the fetch in flight.
    pub fn cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Run the pagination, handing every fetched page to `on_page`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.paginate", skip_all)
    )]
    pub async fn for_each_page<P>(
        self,
        mut on_page: P,
    ) -> Result<Completion, error::Error<F::Error>>
    where
        P: FnMut(common::page::Page<F::Item>),
    {
        let Self {
            cancellation,
            fetcher,
            mode,
            mut request,
        } = self;
        let mut marker = common::page::normalize_marker(request.page_args_mut().marker.take());
        let mut completion = Completion::default();
        loop {
            if cancellation.is_cancelled() {
                return Err(error::Error::Cancelled {
                    next_marker: marker,
                    pages: completion.pages,
                });
            }
            request.page_args_mut().marker = marker.clone();
            let result = tokio::select! {
                biased;
                _ = cancellation.cancelled() => None,
                result = fetcher.fetch_page(&request) => Some(result),
            };
            let page = match result {
                Some(Ok(page)) => page,
                Some(Err(source)) => {
                    return Err(error::Error::Fetch {
                        source,
                        marker,
                        pages: completion.pages,
                    });
                }
                None => {
                    return Err(error::Error::Cancelled {
                        next_marker: marker,
                        pages: completion.pages,
                    });
                }
            };
            completion.pages += 1;
            completion.items += page.items.len();
            marker = common::page::normalize_marker(page.next_marker.clone());
            #[cfg(feature = "tracing")]
            tracing::debug!(
                page = completion.pages,
                items = page.items.len(),
                next_marker = ?marker,
                "fetched page"
            );
            on_page(page);
            // single page when paging manually, otherwise until the marker runs out
            if mode == common::mode::IterationMode::UserControlled || marker.is_none() {
                break;
            }
        }
        completion.next_marker = marker;
        Ok(completion)
    }

    /// Run the pagination, handing every item to `emit` in the order returned by the service.
    pub async fn for_each<E>(self, mut emit: E) -> Result<Completion, error::Error<F::Error>>
    where
        E: FnMut(F::Item),
    {
        self.for_each_page(|page| page.items.into_iter().for_each(&mut emit))
            .await
    }
}

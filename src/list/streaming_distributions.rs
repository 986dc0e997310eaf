use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_streaming_distributions::{
        ListStreamingDistributionsError, ListStreamingDistributionsInput,
    },
    types,
};

/// List streaming distributions operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_streaming_distributions =
///     list::streaming_distributions::ListStreamingDistributions::default();
/// list_streaming_distributions
///     .send(client, |distribution| println!("{}", distribution.id))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListStreamingDistributions {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
}

impl TryFrom<ListStreamingDistributions> for ListStreamingDistributionsInput {
    type Error = error::BuildError;

    fn try_from(
        list_streaming_distributions: ListStreamingDistributions,
    ) -> Result<Self, Self::Error> {
        Self::builder()
            .set_marker(list_streaming_distributions.page_args.marker)
            .set_max_items(list_streaming_distributions.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListStreamingDistributions);

crate::impl_page_from_list!(types::StreamingDistributionList, types::StreamingDistributionSummary);

impl paginate::PageFetcher<ListStreamingDistributions> for Client {
    type Item = types::StreamingDistributionSummary;
    type Error = error::SdkError<ListStreamingDistributionsError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_streaming_distributions", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListStreamingDistributions,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListStreamingDistributionsInput = request.clone().try_into()?;
        let output = self
            .list_streaming_distributions()
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.streaming_distribution_list.into())
    }
}

impl ListStreamingDistributions {
    /// Execute the list streaming distributions operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<
        paginate::Completion,
        crate::error::Error<error::SdkError<ListStreamingDistributionsError>>,
    >
    where
        E: FnMut(types::StreamingDistributionSummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

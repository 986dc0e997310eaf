use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_distributions::{ListDistributionsError, ListDistributionsInput},
    types,
};

/// List distributions operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_distributions = list::distributions::ListDistributions::default();
/// list_distributions
///     .send(client, |distribution| println!("{} {}", distribution.id, distribution.domain_name))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListDistributions {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
}

impl TryFrom<ListDistributions> for ListDistributionsInput {
    type Error = error::BuildError;

    fn try_from(list_distributions: ListDistributions) -> Result<Self, Self::Error> {
        Self::builder()
            .set_marker(list_distributions.page_args.marker)
            .set_max_items(list_distributions.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListDistributions);

crate::impl_page_from_list!(types::DistributionList, types::DistributionSummary);

impl paginate::PageFetcher<ListDistributions> for Client {
    type Item = types::DistributionSummary;
    type Error = error::SdkError<ListDistributionsError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_distributions", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListDistributions,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListDistributionsInput = request.clone().try_into()?;
        let output = self
            .list_distributions()
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.distribution_list.into())
    }
}

impl ListDistributions {
    /// Execute the list distributions operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<paginate::Completion, crate::error::Error<error::SdkError<ListDistributionsError>>>
    where
        E: FnMut(types::DistributionSummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

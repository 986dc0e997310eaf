use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_key_groups::{ListKeyGroupsError, ListKeyGroupsInput},
    types,
};

/// List key groups operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_key_groups = list::key_groups::ListKeyGroups::default();
/// list_key_groups
///     .send(client, |key_group| println!("{key_group:?}"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListKeyGroups {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
}

impl TryFrom<ListKeyGroups> for ListKeyGroupsInput {
    type Error = error::BuildError;

    fn try_from(list_key_groups: ListKeyGroups) -> Result<Self, Self::Error> {
        Self::builder()
            .set_marker(list_key_groups.page_args.marker)
            .set_max_items(list_key_groups.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListKeyGroups);

crate::impl_page_from_list!(types::KeyGroupList, types::KeyGroupSummary);

impl paginate::PageFetcher<ListKeyGroups> for Client {
    type Item = types::KeyGroupSummary;
    type Error = error::SdkError<ListKeyGroupsError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_key_groups", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListKeyGroups,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListKeyGroupsInput = request.clone().try_into()?;
        let output = self
            .list_key_groups()
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.key_group_list.into())
    }
}

impl ListKeyGroups {
    /// Execute the list key groups operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<paginate::Completion, crate::error::Error<error::SdkError<ListKeyGroupsError>>>
    where
        E: FnMut(types::KeyGroupSummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

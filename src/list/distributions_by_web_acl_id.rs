use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_distributions_by_web_acl_id::{
        ListDistributionsByWebACLIdError, ListDistributionsByWebAclIdInput,
    },
    types,
};

/// The web ACL ID CloudFront uses for distributions with no web ACL.
pub const NO_WEB_ACL_ID: &str = "null";

/// List distributions by web ACL ID operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_distributions_by_web_acl_id =
///     list::distributions_by_web_acl_id::ListDistributionsByWebAclId {
///         web_acl_id: "EXAMPLE".to_string(),
///         ..Default::default()
///     };
/// list_distributions_by_web_acl_id
///     .send(client, |distribution| println!("{}", distribution.id))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListDistributionsByWebAclId {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
    /// The ID of the web ACL. An empty ID is sent as [`NO_WEB_ACL_ID`] and lists the
    /// distributions with no web ACL.
    pub web_acl_id: String,
}

impl TryFrom<ListDistributionsByWebAclId> for ListDistributionsByWebAclIdInput {
    type Error = error::BuildError;

    fn try_from(
        list_distributions_by_web_acl_id: ListDistributionsByWebAclId,
    ) -> Result<Self, Self::Error> {
        let web_acl_id = if list_distributions_by_web_acl_id.web_acl_id.is_empty() {
            NO_WEB_ACL_ID.to_string()
        } else {
            list_distributions_by_web_acl_id.web_acl_id
        };
        Self::builder()
            .web_acl_id(web_acl_id)
            .set_marker(list_distributions_by_web_acl_id.page_args.marker)
            .set_max_items(list_distributions_by_web_acl_id.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListDistributionsByWebAclId);

impl paginate::PageFetcher<ListDistributionsByWebAclId> for Client {
    type Item = types::DistributionSummary;
    type Error = error::SdkError<ListDistributionsByWebACLIdError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_distributions_by_web_acl_id", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListDistributionsByWebAclId,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListDistributionsByWebAclIdInput = request.clone().try_into()?;
        let output = self
            .list_distributions_by_web_acl_id()
            .set_web_acl_id(input.web_acl_id)
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.distribution_list.into())
    }
}

impl ListDistributionsByWebAclId {
    /// Execute the list distributions by web ACL ID operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<
        paginate::Completion,
        crate::error::Error<error::SdkError<ListDistributionsByWebACLIdError>>,
    >
    where
        E: FnMut(types::DistributionSummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_cloud_front_origin_access_identities::{
        ListCloudFrontOriginAccessIdentitiesError, ListCloudFrontOriginAccessIdentitiesInput,
    },
    types,
};

/// List CloudFront origin access identities operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_origin_access_identities =
///     list::origin_access_identities::ListOriginAccessIdentities::default();
/// list_origin_access_identities
///     .send(client, |identity| println!("{} {}", identity.id, identity.comment))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListOriginAccessIdentities {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
}

impl TryFrom<ListOriginAccessIdentities> for ListCloudFrontOriginAccessIdentitiesInput {
    type Error = error::BuildError;

    fn try_from(
        list_origin_access_identities: ListOriginAccessIdentities,
    ) -> Result<Self, Self::Error> {
        Self::builder()
            .set_marker(list_origin_access_identities.page_args.marker)
            .set_max_items(list_origin_access_identities.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListOriginAccessIdentities);

crate::impl_page_from_list!(
    types::CloudFrontOriginAccessIdentityList,
    types::CloudFrontOriginAccessIdentitySummary
);

impl paginate::PageFetcher<ListOriginAccessIdentities> for Client {
    type Item = types::CloudFrontOriginAccessIdentitySummary;
    type Error = error::SdkError<ListCloudFrontOriginAccessIdentitiesError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cloudfront_pager.list_cloud_front_origin_access_identities",
            skip_all
        )
    )]
    async fn fetch_page(
        &self,
        request: &ListOriginAccessIdentities,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListCloudFrontOriginAccessIdentitiesInput = request.clone().try_into()?;
        let output = self
            .list_cloud_front_origin_access_identities()
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.cloud_front_origin_access_identity_list.into())
    }
}

impl ListOriginAccessIdentities {
    /// Execute the list origin access identities operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<
        paginate::Completion,
        crate::error::Error<error::SdkError<ListCloudFrontOriginAccessIdentitiesError>>,
    >
    where
        E: FnMut(types::CloudFrontOriginAccessIdentitySummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

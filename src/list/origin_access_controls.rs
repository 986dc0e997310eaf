use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_origin_access_controls::{
        ListOriginAccessControlsError, ListOriginAccessControlsInput,
    },
    types,
};

/// List origin access controls operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_origin_access_controls =
///     list::origin_access_controls::ListOriginAccessControls::default();
/// list_origin_access_controls
///     .send(client, |control| println!("{} {}", control.id, control.name))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListOriginAccessControls {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
}

impl TryFrom<ListOriginAccessControls> for ListOriginAccessControlsInput {
    type Error = error::BuildError;

    fn try_from(
        list_origin_access_controls: ListOriginAccessControls,
    ) -> Result<Self, Self::Error> {
        Self::builder()
            .set_marker(list_origin_access_controls.page_args.marker)
            .set_max_items(list_origin_access_controls.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListOriginAccessControls);

crate::impl_page_from_list!(types::OriginAccessControlList, types::OriginAccessControlSummary);

impl paginate::PageFetcher<ListOriginAccessControls> for Client {
    type Item = types::OriginAccessControlSummary;
    type Error = error::SdkError<ListOriginAccessControlsError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_origin_access_controls", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListOriginAccessControls,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListOriginAccessControlsInput = request.clone().try_into()?;
        let output = self
            .list_origin_access_controls()
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.origin_access_control_list.into())
    }
}

impl ListOriginAccessControls {
    /// Execute the list origin access controls operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<
        paginate::Completion,
        crate::error::Error<error::SdkError<ListOriginAccessControlsError>>,
    >
    where
        E: FnMut(types::OriginAccessControlSummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

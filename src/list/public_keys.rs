use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_public_keys::{ListPublicKeysError, ListPublicKeysInput},
    types,
};

/// List public keys operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_public_keys = list::public_keys::ListPublicKeys::default();
/// list_public_keys
///     .send(client, |public_key| println!("{} {}", public_key.id, public_key.name))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListPublicKeys {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
}

impl TryFrom<ListPublicKeys> for ListPublicKeysInput {
    type Error = error::BuildError;

    fn try_from(list_public_keys: ListPublicKeys) -> Result<Self, Self::Error> {
        Self::builder()
            .set_marker(list_public_keys.page_args.marker)
            .set_max_items(list_public_keys.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListPublicKeys);

crate::impl_page_from_list!(types::PublicKeyList, types::PublicKeySummary);

impl paginate::PageFetcher<ListPublicKeys> for Client {
    type Item = types::PublicKeySummary;
    type Error = error::SdkError<ListPublicKeysError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_public_keys", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListPublicKeys,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListPublicKeysInput = request.clone().try_into()?;
        let output = self
            .list_public_keys()
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.public_key_list.into())
    }
}

impl ListPublicKeys {
    /// Execute the list public keys operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<paginate::Completion, crate::error::Error<error::SdkError<ListPublicKeysError>>>
    where
        E: FnMut(types::PublicKeySummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

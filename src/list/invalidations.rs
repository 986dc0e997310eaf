use crate::{common, paginate};

use aws_sdk_cloudfront::{Client, error, operation, types};

/// List invalidations operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_invalidations = list::invalidations::ListInvalidations {
///     distribution_id: "EDFDVBD6EXAMPLE".to_string(),
///     ..Default::default()
/// };
/// list_invalidations
///     .send(client, |invalidation| println!("{} {}", invalidation.id, invalidation.status))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListInvalidations {
    /// The ID of the distribution whose invalidations are listed.
    pub distribution_id: String,
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
}

impl TryFrom<ListInvalidations> for operation::list_invalidations::ListInvalidationsInput {
    type Error = error::BuildError;

    fn try_from(list_invalidations: ListInvalidations) -> Result<Self, Self::Error> {
        Self::builder()
            .distribution_id(list_invalidations.distribution_id)
            .set_marker(list_invalidations.page_args.marker)
            .set_max_items(list_invalidations.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListInvalidations);

crate::impl_page_from_list!(types::InvalidationList, types::InvalidationSummary);

impl paginate::PageFetcher<ListInvalidations> for Client {
    type Item = types::InvalidationSummary;
    type Error = error::SdkError<operation::list_invalidations::ListInvalidationsError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_invalidations", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListInvalidations,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: operation::list_invalidations::ListInvalidationsInput =
            request.clone().try_into()?;
        let output = self
            .list_invalidations()
            .set_distribution_id(input.distribution_id)
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.invalidation_list.into())
    }
}

impl ListInvalidations {
    /// Execute the list invalidations operation, following markers until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<
        paginate::Completion,
        crate::error::Error<error::SdkError<operation::list_invalidations::ListInvalidationsError>>,
    >
    where
        E: FnMut(types::InvalidationSummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_cloudfront::primitives::DateTime;
    use rstest::rstest;

    fn invalidation_summary(id: &str) -> types::InvalidationSummary {
        types::InvalidationSummary::builder()
            .id(id)
            .create_time(DateTime::from_secs(0))
            .status("Completed")
            .build()
            .unwrap()
    }

    #[rstest]
    #[case::empty(
        ListInvalidations {
            distribution_id: "a".to_string(),
            ..Default::default()
        },
        operation::list_invalidations::ListInvalidationsInput::builder()
            .distribution_id("a")
            .build()
            .unwrap()
    )]
    #[case::full(
        ListInvalidations {
            distribution_id: "a".to_string(),
            page_args: common::page::PageArgs {
                marker: Some("b".to_string()),
                max_items: Some(10),
            },
        },
        operation::list_invalidations::ListInvalidationsInput::builder()
            .distribution_id("a")
            .marker("b")
            .max_items(10)
            .build()
            .unwrap()
    )]
    fn test_list_invalidations(
        #[case] args: ListInvalidations,
        #[case] expected: operation::list_invalidations::ListInvalidationsInput,
    ) {
        let actual: operation::list_invalidations::ListInvalidationsInput =
            args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::absent(None, common::page::Page::default())]
    #[case::more(
        Some(
            types::InvalidationList::builder()
                .marker("")
                .next_marker("b")
                .max_items(2)
                .is_truncated(true)
                .quantity(2)
                .items(invalidation_summary("a"))
                .items(invalidation_summary("c"))
                .build()
                .unwrap()
        ),
        common::page::Page::new(
            vec![invalidation_summary("a"), invalidation_summary("c")],
            Some("b".to_string())
        )
    )]
    #[case::last(
        Some(
            types::InvalidationList::builder()
                .marker("b")
                .max_items(2)
                .is_truncated(false)
                .quantity(0)
                .build()
                .unwrap()
        ),
        common::page::Page::default()
    )]
    fn test_invalidation_page(
        #[case] list: Option<types::InvalidationList>,
        #[case] expected: common::page::Page<types::InvalidationSummary>,
    ) {
        let actual: common::page::Page<types::InvalidationSummary> = list.into();
        assert_eq!(actual, expected);
    }
}

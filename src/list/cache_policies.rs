use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_cache_policies::{ListCachePoliciesError, ListCachePoliciesInput},
    types,
};

/// List cache policies operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_cache_policies = list::cache_policies::ListCachePolicies::default();
/// list_cache_policies
///     .send(client, |policy| println!("{:?}", policy.r#type))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListCachePolicies {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
    /// Only list managed or custom policies. `None` lists both.
    pub policy_type: Option<types::CachePolicyType>,
}

impl TryFrom<ListCachePolicies> for ListCachePoliciesInput {
    type Error = error::BuildError;

    fn try_from(list_cache_policies: ListCachePolicies) -> Result<Self, Self::Error> {
        Self::builder()
            .set_type(list_cache_policies.policy_type)
            .set_marker(list_cache_policies.page_args.marker)
            .set_max_items(list_cache_policies.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListCachePolicies);

crate::impl_page_from_list!(types::CachePolicyList, types::CachePolicySummary);

impl paginate::PageFetcher<ListCachePolicies> for Client {
    type Item = types::CachePolicySummary;
    type Error = error::SdkError<ListCachePoliciesError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_cache_policies", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListCachePolicies,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListCachePoliciesInput = request.clone().try_into()?;
        let output = self
            .list_cache_policies()
            .set_type(input.r#type)
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.cache_policy_list.into())
    }
}

impl ListCachePolicies {
    /// Execute the list cache policies operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<paginate::Completion, crate::error::Error<error::SdkError<ListCachePoliciesError>>>
    where
        E: FnMut(types::CachePolicySummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_cloudfront::primitives::DateTime;
    use rstest::rstest;

    #[rstest]
    #[case::empty(
        ListCachePolicies::default(),
        ListCachePoliciesInput::builder()
            .build()
            .unwrap()
    )]
    #[case::full(
        ListCachePolicies {
            page_args: common::page::PageArgs {
                marker: Some("b".to_string()),
                max_items: Some(10),
            },
            policy_type: Some(types::CachePolicyType::Managed),
        },
        ListCachePoliciesInput::builder()
            .set_type(Some(types::CachePolicyType::Managed))
            .marker("b")
            .max_items(10)
            .build()
            .unwrap()
    )]
    fn test_list_cache_policies(
        #[case] args: ListCachePolicies,
        #[case] expected: ListCachePoliciesInput,
    ) {
        let actual: ListCachePoliciesInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    fn cache_policy_summary(id: &str) -> types::CachePolicySummary {
        types::CachePolicySummary::builder()
            .r#type(types::CachePolicyType::Custom)
            .cache_policy(
                types::CachePolicy::builder()
                    .id(id)
                    .last_modified_time(DateTime::from_secs(0))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[rstest]
    #[case::absent(None, common::page::Page::default())]
    #[case::more(
        Some(
            types::CachePolicyList::builder()
                .next_marker("b")
                .max_items(2)
                .quantity(2)
                .items(cache_policy_summary("a"))
                .items(cache_policy_summary("c"))
                .build()
                .unwrap()
        ),
        common::page::Page::new(
            vec![cache_policy_summary("a"), cache_policy_summary("c")],
            Some("b".to_string())
        )
    )]
    #[case::empty_next_marker(
        Some(
            types::CachePolicyList::builder()
                .next_marker("")
                .max_items(2)
                .quantity(1)
                .items(cache_policy_summary("d"))
                .build()
                .unwrap()
        ),
        common::page::Page::new(vec![cache_policy_summary("d")], None)
    )]
    fn test_cache_policy_page(
        #[case] list: Option<types::CachePolicyList>,
        #[case] expected: common::page::Page<types::CachePolicySummary>,
    ) {
        let actual: common::page::Page<types::CachePolicySummary> = list.into();
        assert_eq!(actual, expected);
    }
}

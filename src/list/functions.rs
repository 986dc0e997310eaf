use crate::{common, paginate};

use aws_sdk_cloudfront::{
    Client, error,
    operation::list_functions::{ListFunctionsError, ListFunctionsInput},
    types,
};

/// List functions operation.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::list;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_functions = list::functions::ListFunctions::default();
/// list_functions
///     .send(client, |function| println!("{}", function.name))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListFunctions {
    /// Starting marker and page size.
    pub page_args: common::page::PageArgs,
    /// Only list functions in this stage. `None` lists every stage.
    pub stage: Option<types::FunctionStage>,
}

impl TryFrom<ListFunctions> for ListFunctionsInput {
    type Error = error::BuildError;

    fn try_from(list_functions: ListFunctions) -> Result<Self, Self::Error> {
        Self::builder()
            .set_stage(list_functions.stage)
            .set_marker(list_functions.page_args.marker)
            .set_max_items(list_functions.page_args.max_items)
            .build()
    }
}

crate::impl_paged!(ListFunctions);

crate::impl_page_from_list!(types::FunctionList, types::FunctionSummary);

impl paginate::PageFetcher<ListFunctions> for Client {
    type Item = types::FunctionSummary;
    type Error = error::SdkError<ListFunctionsError>;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_functions", skip_all)
    )]
    async fn fetch_page(
        &self,
        request: &ListFunctions,
    ) -> Result<common::page::Page<Self::Item>, Self::Error> {
        let input: ListFunctionsInput = request.clone().try_into()?;
        let output = self
            .list_functions()
            .set_stage(input.stage)
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(output.function_list.into())
    }
}

impl ListFunctions {
    /// Execute the list functions operation until the listing is exhausted.
    pub async fn send<E>(
        self,
        client: &Client,
        emit: E,
    ) -> Result<paginate::Completion, crate::error::Error<error::SdkError<ListFunctionsError>>>
    where
        E: FnMut(types::FunctionSummary),
    {
        paginate::Paginator::new(client, self).for_each(emit).await
    }
}

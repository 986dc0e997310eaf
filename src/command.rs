//! Command layer for list operations.
//!
//! A [`ListCommand`] carries what a user types: a request (with its starting marker and
//! page size), the "do not auto-paginate" flag and an output selection. It resolves the
//! iteration mode, rejects conflicting flags before anything is fetched, runs the
//! executor and projects its output.

use crate::{common, error, paginate};

use tokio_util::sync::CancellationToken;

/// List command.
///
/// ```rust,no_run
/// use aws_sdk_cloudfront::Client;
/// use cloudfront_pager::{command, common, list};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let list_key_groups = command::ListCommand {
///     request: list::key_groups::ListKeyGroups {
///         page_args: common::page::PageArgs {
///             marker: Some("EXAMPLE".to_string()),
///             ..Default::default()
///         },
///     },
///     select: common::selection::Selection::NextMarker,
///     ..Default::default()
/// };
/// list_key_groups
///     .run(client, CancellationToken::new(), |output| println!("{output:?}"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListCommand<R> {
    /// Whether to fetch a single page even when no marker was supplied.
    pub no_auto_iteration: bool,
    /// How the starting marker affects the iteration mode.
    pub policy: common::mode::IterationPolicy,
    /// The list request, including its starting marker and page size.
    pub request: R,
    /// What the command outputs.
    pub select: common::selection::Selection,
}

impl<R: common::page::Paged> ListCommand<R> {
    /// The iteration mode implied by the flags.
    pub fn iteration_mode(&self) -> common::mode::IterationMode {
        self.policy.resolve(
            self.request.page_args().marker.as_deref(),
            self.no_auto_iteration,
        )
    }

    /// Check the flags for conflicts and return the iteration mode.
    pub fn validate(&self) -> Result<common::mode::IterationMode, error::ConfigurationError> {
        let mode = self.iteration_mode();
        if !self.select.supports(mode) {
            return Err(error::ConfigurationError::NextMarkerWithAutoIteration);
        }
        Ok(mode)
    }

    /// Execute the list command, handing every output to `emit` as soon as it is produced.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cloudfront_pager.list_command", skip_all)
    )]
    pub async fn run<F, E>(
        self,
        fetcher: &F,
        cancellation: CancellationToken,
        mut emit: E,
    ) -> Result<paginate::Completion, error::Error<F::Error>>
    where
        F: paginate::PageFetcher<R>,
        E: FnMut(common::selection::Output<F::Item>),
    {
        let mode = self.validate()?;
        let select = self.select;
        let completion = paginate::Paginator::new(fetcher, self.request)
            .mode(mode)
            .cancellation(cancellation)
            .for_each_page(|page| select.project_page(page, &mut emit))
            .await?;
        select.project_end(completion.next_marker.as_deref(), &mut emit);
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::{
            mode::IterationMode,
            page::{Page, PageArgs},
            selection::{Output, Selection},
        },
        paginate::tests::{FakeFetcher, page},
    };

    use rstest::rstest;

    fn list_command(
        marker: Option<&str>,
        no_auto_iteration: bool,
        select: Selection,
    ) -> ListCommand<PageArgs> {
        ListCommand {
            no_auto_iteration,
            request: PageArgs {
                marker: marker.map(str::to_string),
                max_items: Some(2),
            },
            select,
            ..Default::default()
        }
    }

    #[rstest]
    #[case::defaults(list_command(None, false, Selection::Items), Ok(IterationMode::AutoIterate))]
    #[case::marker(
        list_command(Some("a"), false, Selection::Items),
        Ok(IterationMode::UserControlled)
    )]
    #[case::no_auto_iteration(
        list_command(None, true, Selection::Pages),
        Ok(IterationMode::UserControlled)
    )]
    #[case::next_marker_manual(
        list_command(Some("a"), false, Selection::NextMarker),
        Ok(IterationMode::UserControlled)
    )]
    #[case::next_marker_auto(
        list_command(None, false, Selection::NextMarker),
        Err(error::ConfigurationError::NextMarkerWithAutoIteration)
    )]
    #[case::next_marker_policy_disabled(
        ListCommand {
            policy: common::mode::IterationPolicy {
                marker_implies_user_controlled: false,
            },
            ..list_command(Some("a"), false, Selection::NextMarker)
        },
        Err(error::ConfigurationError::NextMarkerWithAutoIteration)
    )]
    fn test_validate(
        #[case] command: ListCommand<PageArgs>,
        #[case] expected: Result<IterationMode, error::ConfigurationError>,
    ) {
        assert_eq!(command.validate(), expected);
    }

    #[rstest]
    #[case::items_auto_iterate(
        list_command(None, false, Selection::Items),
        vec![Output::Item("a"), Output::Item("b"), Output::Item("c")],
        2
    )]
    #[case::items_marker(
        list_command(Some(""), false, Selection::Items),
        vec![Output::Item("a"), Output::Item("b")],
        1
    )]
    #[case::pages(
        list_command(None, false, Selection::Pages),
        vec![
            Output::Page(Page::new(vec!["a", "b"], Some("X".to_string()))),
            Output::Page(Page::new(vec!["c"], None)),
        ],
        2
    )]
    #[case::next_marker(
        list_command(None, true, Selection::NextMarker),
        vec![Output::NextMarker("X".to_string())],
        1
    )]
    #[tokio::test]
    async fn test_run(
        #[case] command: ListCommand<PageArgs>,
        #[case] expected_outputs: Vec<Output<&str>>,
        #[case] expected_fetches: usize,
    ) {
        let fetcher = FakeFetcher::new(vec![page(&["a", "b"], Some("X")), page(&["c"], None)]);
        let mut outputs = Vec::new();
        command
            .run(&fetcher, CancellationToken::new(), |output| outputs.push(output))
            .await
            .unwrap();
        assert_eq!(outputs, expected_outputs);
        assert_eq!(fetcher.requests().len(), expected_fetches);
        assert!(
            fetcher
                .requests()
                .iter()
                .all(|request| request.max_items == Some(2))
        );
    }

    #[tokio::test]
    async fn test_run_configuration_error() {
        let fetcher = FakeFetcher::new(vec![page(&["a"], None)]);
        let mut outputs = Vec::new();
        let error = list_command(None, false, Selection::NextMarker)
            .run(&fetcher, CancellationToken::new(), |output| outputs.push(output))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            error::Error::Configuration(error::ConfigurationError::NextMarkerWithAutoIteration)
        ));
        assert!(outputs.is_empty());
        assert!(fetcher.requests().is_empty());
    }
}

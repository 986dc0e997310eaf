use serde::{Deserialize, Serialize};

/// How many pages a single invocation fetches.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IterationMode {
    /// Follow `next_marker` until the listing is exhausted.
    #[default]
    AutoIterate,
    /// Fetch exactly one page and hand the marker back to the caller.
    UserControlled,
}

/// Decides the [`IterationMode`] of an invocation from its flags.
///
/// ```rust
/// use cloudfront_pager::common::mode;
///
/// let policy = mode::IterationPolicy::default();
/// assert_eq!(
///     policy.resolve(Some("EXAMPLE"), false),
///     mode::IterationMode::UserControlled,
/// );
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
pub struct IterationPolicy {
    /// Whether an explicitly supplied starting marker means the caller pages manually.
    ///
    /// Defaults to `true`.
    pub marker_implies_user_controlled: bool,
}

impl Default for IterationPolicy {
    fn default() -> Self {
        Self {
            marker_implies_user_controlled: true,
        }
    }
}

impl IterationPolicy {
    /// Resolve the iteration mode.
    ///
    /// `marker` is the starting marker as supplied by the caller: `Some` means the
    /// marker was given, even when it is empty.
    pub fn resolve(&self, marker: Option<&str>, no_auto_iteration: bool) -> IterationMode {
        if no_auto_iteration || (self.marker_implies_user_controlled && marker.is_some()) {
            IterationMode::UserControlled
        } else {
            IterationMode::AutoIterate
        }
    }
}

//! CloudFront list operations.
//!
//! Each module holds a typed request for one paginated CloudFront list API. The SDK
//! [`aws_sdk_cloudfront::Client`] implements [`crate::paginate::PageFetcher`] for every
//! request, so any of them can be driven by [`crate::paginate::Paginator`] or
//! [`crate::command::ListCommand`].

/// List cache policies, optionally filtered by type.
pub mod cache_policies;

/// List distributions.
pub mod distributions;

/// List the distributions associated with a web ACL.
pub mod distributions_by_web_acl_id;

/// List CloudFront functions, optionally filtered by stage.
pub mod functions;

/// List the invalidations of a distribution.
pub mod invalidations;

/// List key groups.
pub mod key_groups;

/// List origin access controls.
pub mod origin_access_controls;

/// List CloudFront origin access identities.
pub mod origin_access_identities;

/// List public keys.
pub mod public_keys;

/// List RTMP streaming distributions.
pub mod streaming_distributions;

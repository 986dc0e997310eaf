#![deny(missing_docs)]
#![deny(warnings)]

//! # CloudFront Pager
//!
//! Marker-based pagination for Amazon CloudFront list operations.
//!
//! ## Overview
//!
//! Every CloudFront list API returns one page of results plus an opaque `NextMarker`.
//! This library replaces the hand-written "fetch, emit, follow the marker" loop with:
//! - One generic executor ([`paginate::Paginator`]) parameterized over a [`paginate::PageFetcher`]
//! - Typed requests for the CloudFront list APIs, with the SDK client as their fetcher
//! - A command layer that turns user-facing flags into an iteration mode and output selection
//! - Cancellation between (and during) page fetches
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_cloudfront::Client;
//! use cloudfront_pager::{list, paginate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_conf(aws_sdk_cloudfront::config::Config::builder().build());
//! let list_invalidations = list::invalidations::ListInvalidations {
//!     distribution_id: "EDFDVBD6EXAMPLE".to_string(),
//!     ..Default::default()
//! };
//! // Follows `NextMarker` until the listing is exhausted
//! let completion = paginate::Paginator::new(&client, list_invalidations)
//!     .for_each(|invalidation| println!("{} {}", invalidation.id, invalidation.status))
//!     .await?;
//! println!("{} invalidations", completion.items);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Page arguments, iteration modes and output selection
//! - [`mod@command`] - Flag resolution and output projection for list commands
//! - [`mod@error`] - Pagination errors
//! - [`mod@list`] - CloudFront list operations
//! - [`mod@paginate`] - The paginated list executor

/// Command layer for list operations.
pub mod command;

/// Common types for pages, iteration modes and output selection.
pub mod common;

/// Errors reported by a paginated run.
pub mod error;

/// CloudFront list operations.
///
/// This module provides a typed request for each paginated CloudFront list API:
/// - Distributions, optionally filtered by web ACL
/// - Streaming distributions
/// - Origin access identities and origin access controls
/// - Invalidations of a distribution
/// - Cache policies, functions, key groups and public keys
pub mod list;

/// The paginated list executor.
pub mod paginate;

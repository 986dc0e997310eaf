//! Common types shared by the executor, the command layer and the list operations.
//!
//! This module provides:
//! - Page arguments and the page value returned by a single fetch
//! - The iteration mode and the policy that resolves it
//! - Output selection for list commands

/// Iteration mode and the policy deciding it.
pub mod mode;

/// Page arguments and fetched pages.
pub mod page;

/// Output selection and projection.
pub mod selection;

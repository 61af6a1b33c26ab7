//! The transformation engine: pure, synchronous functions from a validated
//! [`ConOpsInput`](crate::models::ConOpsInput) to the three output
//! documents (full merged spec, patch, summary). Nothing in here touches
//! the network, the database, or the file system.

mod merge;
mod patch;
mod reconcile;
mod summary;

pub use merge::{build_full_spec, deep_merge};
pub use patch::build_patch;
pub use reconcile::reconcile;
pub use summary::render_summary;

//! Activity Catalog
//!
//! The data model shared by the API layer and the view-state table.
//! The listing endpoint returns a JSON object mapping activity name to
//! details; [`Catalog`] decodes it while keeping the server's key order.

mod types;

pub use types::{spots_left, Activity, Catalog};

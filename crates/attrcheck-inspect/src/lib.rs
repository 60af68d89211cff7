//! Table inspection: the source seam, its Postgres adapter and the check
//! sequence that drives them.

pub mod adapter;
pub mod check;
pub mod postgres;

pub use adapter::AttributionSource;
pub use check::{CheckOutcome, run_check};
pub use postgres::PostgresSource;

pub use attrcheck_core::{POST_ATTRIBUTION, TableContract};

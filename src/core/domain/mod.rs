//! Domain types.

mod record;
mod transaction;

pub use record::Record;
pub use transaction::{Filter, Kind, Transaction};

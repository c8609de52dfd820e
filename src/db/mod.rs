pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;

pub use queries::{UpsertOutcome, delete_record_by_date, load_records, upsert_record};

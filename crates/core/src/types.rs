/// Listing identifiers as issued by the dashboard backend.
pub type DbId = i64;

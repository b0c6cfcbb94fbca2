pub mod idf;
pub mod query;
pub mod version;

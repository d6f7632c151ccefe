mod database;
mod query;

pub use database::build_database_config;
pub use query::{build_criteria, build_limit};

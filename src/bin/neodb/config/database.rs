use neo_db::{DatabaseConfig, DuplicatePolicy};

use crate::cli::DataOptions;

pub fn build_database_config(opts: &DataOptions) -> DatabaseConfig {
    let policy = if opts.allow_duplicates {
        DuplicatePolicy::KeepLast
    } else {
        DuplicatePolicy::Reject
    };

    DatabaseConfig::new().duplicates(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn data(args: &[&str]) -> DataOptions {
        Cli::try_parse_from(args).expect("parse").data
    }

    #[test]
    fn duplicates_rejected_by_default() {
        let config = build_database_config(&data(&["neodb", "query"]));
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn allow_duplicates_keeps_last() {
        let config = build_database_config(&data(&["neodb", "--allow-duplicates", "query"]));
        assert_eq!(config.duplicates, DuplicatePolicy::KeepLast);
    }
}

/// How the designation and name indices treat a key seen twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail construction with a data-integrity error.
    #[default]
    Reject,
    /// Overwrite the earlier entry; the last NEO with the key wins.
    KeepLast,
}

/// Settings for [`NeoDatabase`](super::NeoDatabase) construction.
///
/// # Examples
///
/// ```
/// use neo_db::{DatabaseConfig, DuplicatePolicy};
///
/// let strict = DatabaseConfig::default();
/// assert_eq!(strict.duplicates, DuplicatePolicy::Reject);
///
/// let lenient = DatabaseConfig::new().duplicates(DuplicatePolicy::KeepLast);
/// assert_eq!(lenient.duplicates, DuplicatePolicy::KeepLast);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Applied to both the designation and the name index.
    pub duplicates: DuplicatePolicy,
}

impl DatabaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

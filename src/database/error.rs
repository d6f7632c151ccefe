//! Error types for building a [`NeoDatabase`](super::NeoDatabase).
//!
//! Construction only fails on data-integrity violations in the NEO catalog.
//! An approach whose designation matches no NEO is not an error; it simply
//! stays unlinked.

use thiserror::Error;

/// Errors that can occur while indexing the NEO catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two NEOs share a primary designation.
    ///
    /// Only raised under [`DuplicatePolicy::Reject`](super::DuplicatePolicy::Reject).
    #[error("duplicate NEO designation '{0}' in catalog")]
    DuplicateDesignation(String),

    /// Two NEOs share a name.
    ///
    /// Only raised under [`DuplicatePolicy::Reject`](super::DuplicatePolicy::Reject).
    #[error("duplicate NEO name '{name}' (second occurrence on designation '{designation}')")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Designation of the NEO that repeated it.
        designation: String,
    },
}

impl Error {
    /// Creates a [`DuplicateName`](Error::DuplicateName) error.
    pub fn duplicate_name(name: &str, designation: &str) -> Self {
        Self::DuplicateName {
            name: name.to_string(),
            designation: designation.to_string(),
        }
    }
}

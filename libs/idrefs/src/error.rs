//! Error types for scope binding, id allocation, and id parsing.

use thiserror::Error;

/// Errors raised by registry and scope operations.
///
/// All of these are fatal to the calling operation and none are retried
/// automatically. Apart from [`RegistryError::SuffixSpaceExhausted`] they
/// indicate misuse (initialization order, unknown keys) rather than runtime
/// conditions expected in correct steady-state usage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A registry is already bound somewhere in the reachable scope chain.
    #[error("a registry is already bound in this scope chain")]
    DuplicateRegistry,

    /// No registry is bound anywhere in the reachable scope chain.
    #[error("no registry bound in this scope chain; was `create` skipped?")]
    RegistryNotFound,

    /// No identifier has been issued for the requested key.
    #[error("no identifier issued for key '{key}'")]
    KeyNotFound { key: String },

    /// The collision-retry loop reached the configured suffix-length ceiling.
    #[error("suffix space exhausted for key '{key}' at length {max_len}")]
    SuffixSpaceExhausted { key: String, max_len: usize },
}

impl RegistryError {
    /// Returns true if this error indicates a missing registry binding.
    pub fn is_registry_not_found(&self) -> bool {
        matches!(self, RegistryError::RegistryNotFound)
    }

    /// Returns true if this error indicates a key with no issued ids.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, RegistryError::KeyNotFound { .. })
    }
}

/// Errors that can occur when parsing a rendered identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdParseError {
    /// The identifier string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// The identifier is missing the `-` separator before the suffix.
    #[error("identifier missing '-' separator")]
    MissingSeparator,

    /// The suffix portion is empty or not lowercase base-36.
    #[error("invalid suffix: '{0}'")]
    InvalidSuffix(String),
}

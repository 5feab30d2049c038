//! Id allocation and per-key tracking.
//!
//! A registry hands out `{key}-{suffix}` identifiers with a random lowercase
//! base-36 suffix and remembers every id it has issued. Uniqueness within
//! the registry is enforced by checking each candidate against the issued
//! set and retrying on collision; when a suffix length saturates, the
//! generator escalates to the next length.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::id::ScopedId;

/// Default minimum length of the random suffix.
pub const DEFAULT_SUFFIX_LENGTH: usize = 3;

/// Default ceiling for collision-driven suffix-length escalation.
pub const DEFAULT_MAX_SUFFIX_LENGTH: usize = 64;

/// Lowercase base-36 alphabet the suffix is drawn from.
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Attempts at one suffix length before escalating to the next.
const ATTEMPTS_PER_LENGTH: usize = 10;

/// Registry configuration.
///
/// Deserializable so hosts can carry it in their own config files; every
/// field defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// Minimum length of the random suffix.
    pub suffix_length: usize,

    /// Ceiling for collision-driven length escalation. Allocation fails
    /// with [`RegistryError::SuffixSpaceExhausted`] past this length.
    pub max_suffix_length: usize,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            max_suffix_length: DEFAULT_MAX_SUFFIX_LENGTH,
        }
    }
}

impl RegistryOptions {
    /// Normalizes degenerate values: a zero suffix length becomes 1 (a
    /// zero-length suffix renders every candidate for a key identical), and
    /// the ceiling is raised to at least the starting length.
    fn normalized(self) -> Self {
        let suffix_length = self.suffix_length.max(1);
        Self {
            suffix_length,
            max_suffix_length: self.max_suffix_length.max(suffix_length),
        }
    }
}

/// Per-scope id registry.
///
/// Maps each key to the ids issued for it, in issue order, and keeps the
/// flat set of every issued id for collision checks. The collision domain
/// is the issued-id set only; keys never participate.
#[derive(Debug, Clone)]
pub struct IdRegistry {
    options: RegistryOptions,
    /// Issued ids per key, in issue order.
    ids_by_key: BTreeMap<String, Vec<ScopedId>>,
    /// Every issued id, for collision checks.
    issued: BTreeSet<String>,
}

impl IdRegistry {
    /// Creates an empty registry with the given options.
    #[must_use]
    pub fn new(options: RegistryOptions) -> Self {
        Self {
            options: options.normalized(),
            ids_by_key: BTreeMap::new(),
            issued: BTreeSet::new(),
        }
    }

    /// Creates an empty registry with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RegistryOptions::default())
    }

    /// Generates a fresh identifier for `key` and registers it.
    ///
    /// Candidates are drawn at the configured suffix length; after ten
    /// colliding candidates the length is increased by one, up to the
    /// configured ceiling.
    pub fn new_id(&mut self, key: &str) -> Result<ScopedId, RegistryError> {
        let mut length = self.options.suffix_length;

        loop {
            for _ in 0..ATTEMPTS_PER_LENGTH {
                let candidate = ScopedId::new(key, &random_suffix(length));
                if !self.issued.contains(candidate.as_str()) {
                    self.issued.insert(candidate.as_str().to_string());
                    self.ids_by_key
                        .entry(key.to_string())
                        .or_default()
                        .push(candidate.clone());
                    return Ok(candidate);
                }
            }

            if length >= self.options.max_suffix_length {
                return Err(RegistryError::SuffixSpaceExhausted {
                    key: key.to_string(),
                    max_len: length,
                });
            }

            length += 1;
            tracing::debug!(key, length, "suffix space saturated, escalating length");
        }
    }

    /// Returns the identifiers issued for `key`, in issue order.
    pub fn get_ids(&self, key: &str) -> Result<&[ScopedId], RegistryError> {
        match self.ids_by_key.get(key) {
            Some(ids) => Ok(ids),
            None => {
                tracing::error!(key, "no identifier issued for key");
                Err(RegistryError::KeyNotFound {
                    key: key.to_string(),
                })
            }
        }
    }

    /// Returns the ids issued for `key`, allocating one first if the key
    /// has none.
    ///
    /// This path silently reuses an existing set, so it cannot detect
    /// accidental duplicate registration by callers.
    pub fn get_or_create(&mut self, key: &str) -> Result<&[ScopedId], RegistryError> {
        if !self.ids_by_key.contains_key(key) {
            self.new_id(key)?;
        }
        self.get_ids(key)
    }

    /// Returns true if `id` has been issued by this registry.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    /// Returns the number of issued identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    /// Returns true if no identifier has been issued yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Iterates over the keys that have issued identifiers.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ids_by_key.keys().map(String::as_str)
    }

    /// Returns the registry's (normalized) options.
    #[must_use]
    pub fn options(&self) -> RegistryOptions {
        self.options
    }
}

/// Draws a random lowercase base-36 suffix of the given length from the
/// process CSPRNG.
fn random_suffix(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

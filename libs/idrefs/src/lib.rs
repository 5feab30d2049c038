//! # idrefs
//!
//! Context-scoped unique identifier generation and tracking for component
//! trees.
//!
//! ## Design Principles
//!
//! - Identifiers are session-scoped random tokens; nothing is persisted
//! - Uniqueness holds within one registry and is enforced by an explicit
//!   collision-retry loop, not by the size of the random space
//! - Scope binding is explicit: the registry travels through a
//!   [`ScopeStack`] the host passes by reference, never through ambient or
//!   global state
//! - Single-threaded by construction; no locks, no interior mutability
//!
//! ## Identifier Format
//!
//! Issued identifiers use the form `{key}-{suffix}`, where the suffix is
//! drawn from the lowercase base-36 alphabet and has a configurable minimum
//! length (default 3).
//!
//! Examples:
//! - `row-k3f`
//! - `dialog-title-x0q9`
//!
//! The suffix never contains `-`, so the rendered form splits unambiguously
//! even when the key itself is hyphenated.
//!
//! ## Usage
//!
//! ```
//! use idrefs::{RegistryOptions, ScopeStack};
//!
//! # fn main() -> Result<(), idrefs::RegistryError> {
//! let mut scope = ScopeStack::new();
//! scope.create(RegistryOptions::default())?;
//!
//! let registry = scope.lookup_mut()?;
//! let id = registry.new_id("row")?;
//! assert!(id.as_str().starts_with("row-"));
//! assert_eq!(registry.get_ids("row")?.len(), 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod id;
mod registry;
mod scope;

pub use error::{IdParseError, RegistryError};
pub use id::ScopedId;
pub use registry::{
    IdRegistry, RegistryOptions, DEFAULT_MAX_SUFFIX_LENGTH, DEFAULT_SUFFIX_LENGTH,
};
pub use scope::ScopeStack;

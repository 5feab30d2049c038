//! Explicit scope binding for registries.
//!
//! The host's component tree is modelled as a stack of frames: the path
//! from the tree root to the component currently doing work. A registry
//! binds to the innermost frame and is visible from every frame entered
//! below it; leaving the binding frame destroys it. The stack is an owned
//! value the host threads through its call graph, standing in for the
//! ambient context mechanism of a UI framework.

use crate::error::RegistryError;
use crate::registry::{IdRegistry, RegistryOptions};

/// One frame on the path from the scope-tree root to the current scope.
#[derive(Debug, Default)]
struct Frame {
    registry: Option<IdRegistry>,
}

/// Stack of scope frames with at most one bound registry per chain.
///
/// The root frame always exists and cannot be exited.
#[derive(Debug, Default)]
pub struct ScopeStack {
    root: Frame,
    nested: Vec<Frame>,
}

impl ScopeStack {
    /// Creates a stack holding only the root frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters a child scope.
    pub fn enter(&mut self) {
        self.nested.push(Frame::default());
    }

    /// Exits the innermost scope, destroying any registry bound there.
    ///
    /// Exiting at the root frame is a no-op.
    pub fn exit(&mut self) {
        self.nested.pop();
    }

    /// Returns the number of frames, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.nested.len()
    }

    /// Binds a new registry to the innermost scope.
    ///
    /// Fails with [`RegistryError::DuplicateRegistry`] if a registry is
    /// already bound anywhere in the reachable chain, this frame included.
    pub fn create(&mut self, options: RegistryOptions) -> Result<&mut IdRegistry, RegistryError> {
        if self.frames().any(|frame| frame.registry.is_some()) {
            return Err(RegistryError::DuplicateRegistry);
        }

        tracing::debug!(depth = self.depth(), "binding registry to innermost scope");
        let frame = self.nested.last_mut().unwrap_or(&mut self.root);
        Ok(frame.registry.insert(IdRegistry::new(options)))
    }

    /// Retrieves the registry bound to the nearest enclosing scope.
    pub fn lookup(&self) -> Result<&IdRegistry, RegistryError> {
        self.frames()
            .find_map(|frame| frame.registry.as_ref())
            .ok_or(RegistryError::RegistryNotFound)
    }

    /// Retrieves the registry bound to the nearest enclosing scope, for
    /// allocation.
    pub fn lookup_mut(&mut self) -> Result<&mut IdRegistry, RegistryError> {
        self.nested
            .iter_mut()
            .rev()
            .chain(std::iter::once(&mut self.root))
            .find_map(|frame| frame.registry.as_mut())
            .ok_or(RegistryError::RegistryNotFound)
    }

    /// Frames from innermost to root.
    fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.nested.iter().rev().chain(std::iter::once(&self.root))
    }
}

//! Window registry
//!
//! Tracks the set of live windows by id and which of them, if any, holds
//! input focus. The registry never owns native windows; it only knows their
//! ids and the per-window state the translator needs.
//!
//! # Invariants
//!
//! - At most one window is focused, and the focused id is always registered.
//! - Unregistering the focused window clears the focus slot.
//! - A focus-lost notification only clears the slot when it names the window
//!   currently holding focus ([`WindowRegistry::clear_focus_if`]).

use crate::event::WindowId;
use indexmap::IndexMap;

/// Per-window state kept by the registry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowRecord {
    /// Backend-assigned id
    pub id: WindowId,
    /// The window signalled a close request that has not been cancelled
    pub close_requested: bool,
    /// Text input events are delivered for this window
    pub text_input: bool,
}

impl WindowRecord {
    fn new(id: WindowId, text_input: bool) -> Self {
        Self {
            id,
            close_requested: false,
            text_input,
        }
    }
}

/// Live windows in registration order plus the focus slot
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: IndexMap<WindowId, WindowRecord>,
    focused: Option<WindowId>,
    ever_registered: bool,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a window to the live set
    ///
    /// Returns false (and leaves the existing record alone) if the id is
    /// already registered.
    pub fn register(&mut self, id: WindowId, text_input: bool) -> bool {
        if self.windows.contains_key(&id) {
            tracing::warn!("{} registered twice", id);
            return false;
        }
        self.windows.insert(id, WindowRecord::new(id, text_input));
        self.ever_registered = true;
        true
    }

    /// Remove a window, clearing the focus slot if it pointed at it
    pub fn unregister(&mut self, id: WindowId) -> Option<WindowRecord> {
        let record = self.windows.shift_remove(&id)?;
        if self.focused == Some(id) {
            self.focused = None;
        }
        Some(record)
    }

    /// Map a backend-delivered id to its record
    pub fn resolve(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    pub fn resolve_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.get_mut(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// The window currently holding input focus
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// Replace the focus holder
    ///
    /// Setting a new window unconditionally supersedes the previous holder.
    /// Unregistered ids are refused and leave the slot unchanged.
    pub fn set_focused(&mut self, id: Option<WindowId>) -> bool {
        match id {
            Some(id) if !self.windows.contains_key(&id) => false,
            _ => {
                self.focused = id;
                true
            }
        }
    }

    /// Clear the focus slot only if `id` currently holds it
    ///
    /// Returns whether the slot was cleared. Stale focus-lost notifications
    /// for an already superseded window are ignored.
    pub fn clear_focus_if(&mut self, id: WindowId) -> bool {
        if self.focused == Some(id) {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// True iff some window holds focus
    pub fn any_focused(&self) -> bool {
        self.focused.is_some()
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.keys().copied()
    }

    /// Registered records in registration order
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Whether any window was ever registered during this registry's lifetime
    pub fn ever_registered(&self) -> bool {
        self.ever_registered
    }

    /// True when at least one window is registered and all of them have an
    /// outstanding close request
    pub fn all_close_requested(&self) -> bool {
        !self.windows.is_empty() && self.windows.values().all(|w| w.close_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(ids: &[u32]) -> WindowRegistry {
        let mut registry = WindowRegistry::new();
        for &id in ids {
            assert!(registry.register(WindowId(id), true));
        }
        registry
    }

    #[test]
    fn test_register_resolve_unregister() {
        let mut registry = registry_with(&[1, 2]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(WindowId(1)).map(|w| w.id), Some(WindowId(1)));
        assert!(!registry.register(WindowId(1), false));

        let record = registry.unregister(WindowId(1));
        assert_eq!(record.map(|w| w.id), Some(WindowId(1)));
        assert!(registry.resolve(WindowId(1)).is_none());
        assert!(registry.unregister(WindowId(1)).is_none());
        assert!(registry.ever_registered());
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut registry = registry_with(&[1, 2]);
        assert!(!registry.any_focused());

        assert!(registry.set_focused(Some(WindowId(1))));
        assert!(registry.set_focused(Some(WindowId(2))));
        assert_eq!(registry.focused(), Some(WindowId(2)));

        // Stale focus-lost for the superseded window
        assert!(!registry.clear_focus_if(WindowId(1)));
        assert_eq!(registry.focused(), Some(WindowId(2)));

        assert!(registry.clear_focus_if(WindowId(2)));
        assert!(!registry.any_focused());
    }

    #[test]
    fn test_focus_refuses_unknown_window() {
        let mut registry = registry_with(&[1]);
        registry.set_focused(Some(WindowId(1)));
        assert!(!registry.set_focused(Some(WindowId(9))));
        assert_eq!(registry.focused(), Some(WindowId(1)));
        assert!(registry.set_focused(None));
        assert_eq!(registry.focused(), None);
    }

    #[test]
    fn test_unregister_clears_focus() {
        let mut registry = registry_with(&[1, 2]);
        registry.set_focused(Some(WindowId(2)));
        registry.unregister(WindowId(1));
        assert_eq!(registry.focused(), Some(WindowId(2)));
        registry.unregister(WindowId(2));
        assert_eq!(registry.focused(), None);
    }

    #[test]
    fn test_all_close_requested() {
        let mut registry = WindowRegistry::new();
        assert!(!registry.all_close_requested());

        registry.register(WindowId(1), true);
        registry.register(WindowId(2), true);
        assert!(!registry.all_close_requested());

        if let Some(w) = registry.resolve_mut(WindowId(1)) {
            w.close_requested = true;
        }
        assert!(!registry.all_close_requested());

        if let Some(w) = registry.resolve_mut(WindowId(2)) {
            w.close_requested = true;
        }
        assert!(registry.all_close_requested());
    }

    #[test]
    fn test_registration_order() {
        let mut registry = registry_with(&[5, 3, 9]);
        registry.unregister(WindowId(3));
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec![WindowId(5), WindowId(9)]);
    }
}

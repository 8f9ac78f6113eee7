//! Transient page state owned by the single app instance.

use std::collections::BTreeMap;

use crate::section::SectionId;
use crate::theme::ThemeContext;

/// In-memory state that drives page rendering.
///
/// Created on mount, dropped on unmount; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct PageState {
    /// Section highlighted in the navigation bar. Last writer wins.
    pub active: SectionId,
    /// Whether the narrow-layout navigation drawer is expanded.
    pub menu_open: bool,
    /// Presentation mode for the whole page.
    pub theme: ThemeContext,
    /// Sections seen at least once, with the egui time they were first seen.
    seen: BTreeMap<SectionId, f64>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
            menu_open: false,
            theme: ThemeContext::default(),
            seen: BTreeMap::new(),
        }
    }
}

impl PageState {
    /// Record a section as seen. Returns true only on the first sighting.
    ///
    /// The visibility set only ever grows; a repeat sighting keeps the original timestamp.
    pub fn mark_seen(&mut self, section: SectionId, now: f64) -> bool {
        if self.seen.contains_key(&section) {
            return false;
        }
        self.seen.insert(section, now);
        true
    }

    /// Time the section first entered the viewport.
    pub fn seen_at(&self, section: SectionId) -> Option<f64> {
        self.seen.get(&section).copied()
    }

    /// The visibility set, in page order.
    pub fn seen_sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.seen.keys().copied()
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

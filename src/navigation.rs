//! Menu-driven navigation between sections.

use crate::section::SectionId;
use crate::state::PageState;
use crate::visibility::SectionLayout;

/// Turns navigation requests into state updates plus a queued scroll.
///
/// The scroll itself is fire-and-forget: the renderer picks up the target on
/// the next frame and nothing waits for the animation to finish.
#[derive(Debug, Default)]
pub struct Navigator {
    pending_scroll: Option<SectionId>,
}

impl Navigator {
    /// Navigate to `target` if it is currently laid out.
    ///
    /// Sets the active section and closes the menu synchronously. A target
    /// without geometry is ignored and `false` is returned.
    pub fn navigate(
        &mut self,
        target: SectionId,
        layout: &SectionLayout,
        state: &mut PageState,
    ) -> bool {
        if layout.rect(target).is_none() {
            log::debug!("navigation to {} ignored: not laid out", target.anchor());
            return false;
        }
        state.active = target;
        state.menu_open = false;
        self.pending_scroll = Some(target);
        log::debug!("navigating to {}", target.anchor());
        true
    }

    /// Navigate by anchor string; unknown anchors are a no-op.
    pub fn navigate_anchor(
        &mut self,
        anchor: &str,
        layout: &SectionLayout,
        state: &mut PageState,
    ) -> bool {
        match SectionId::from_anchor(anchor) {
            Some(target) => self.navigate(target, layout, state),
            None => {
                log::debug!("navigation to unknown anchor {anchor:?} ignored");
                false
            }
        }
    }

    /// Hand the queued scroll target to the renderer.
    pub fn take_pending_scroll(&mut self) -> Option<SectionId> {
        self.pending_scroll.take()
    }
}

//! Viewport-driven section visibility.
//!
//! egui has no intersection primitive, so the notifier polls the geometry recorded
//! during the last layout pass and synthesizes threshold-crossing events from it.

use std::collections::BTreeMap;

use eframe::egui::{Rect, pos2};

use crate::section::SectionId;
use crate::state::PageState;

/// Screen rectangles of the sections rendered in the current frame.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    rects: BTreeMap<SectionId, Rect>,
}

impl SectionLayout {
    pub fn record(&mut self, section: SectionId, rect: Rect) {
        self.rects.insert(section, rect);
    }

    pub fn rect(&self, section: SectionId) -> Option<Rect> {
        self.rects.get(&section).copied()
    }
}

/// Intersection settings shared by every observed region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of a region's area that must be visible to count as entered.
    pub threshold: f32,
    /// Points trimmed off the bottom of the viewport before testing.
    pub bottom_margin: f32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

impl ObserverConfig {
    pub fn new(threshold: f32, bottom_margin: f32) -> Self {
        Self {
            threshold: if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) },
            bottom_margin: bottom_margin.max(0.0),
        }
    }

    fn is_intersecting(&self, ratio: f32) -> bool {
        if self.threshold > 0.0 {
            ratio >= self.threshold
        } else {
            ratio > 0.0
        }
    }
}

/// Viewport with the configured bottom margin removed.
fn effective_viewport(viewport: Rect, config: &ObserverConfig) -> Rect {
    let bottom = (viewport.max.y - config.bottom_margin).max(viewport.min.y);
    Rect::from_min_max(viewport.min, pos2(viewport.max.x, bottom))
}

/// Visible fraction of `region` inside the margin-adjusted viewport.
pub fn intersection_ratio(region: Rect, viewport: Rect, config: &ObserverConfig) -> f32 {
    let viewport = effective_viewport(viewport, config);
    let width = region.width().max(0.0);
    let height = region.height().max(0.0);
    let area = width * height;
    if area <= 0.0 {
        let inside = viewport.contains(region.min) && viewport.contains(region.max);
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap_w = (region.max.x.min(viewport.max.x) - region.min.x.max(viewport.min.x)).max(0.0);
    let overlap_h = (region.max.y.min(viewport.max.y) - region.min.y.max(viewport.min.y)).max(0.0);
    (overlap_w * overlap_h / area).clamp(0.0, 1.0)
}

/// A region's visible fraction crossed the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub section: SectionId,
    pub ratio: f32,
    /// True when the crossing was upward (at/above threshold).
    pub is_intersecting: bool,
}

/// Source of threshold-crossing notifications for registered regions.
pub trait RegionNotifier {
    fn register(&mut self, section: SectionId);

    fn unregister_all(&mut self);

    fn registered(&self) -> usize;

    /// Report regions whose crossing state changed since the previous poll.
    fn poll(&mut self, viewport: Rect, layout: &SectionLayout) -> Vec<IntersectionEvent>;
}

/// Notifier that compares geometry against the viewport on every poll.
#[derive(Debug, Clone, Default)]
pub struct PollingNotifier {
    config: ObserverConfig,
    /// Registered regions and whether each was at/above threshold at the last poll.
    regions: BTreeMap<SectionId, bool>,
}

impl PollingNotifier {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            regions: BTreeMap::new(),
        }
    }
}

impl RegionNotifier for PollingNotifier {
    fn register(&mut self, section: SectionId) {
        self.regions.entry(section).or_insert(false);
    }

    fn unregister_all(&mut self) {
        self.regions.clear();
    }

    fn registered(&self) -> usize {
        self.regions.len()
    }

    fn poll(&mut self, viewport: Rect, layout: &SectionLayout) -> Vec<IntersectionEvent> {
        let mut events = Vec::new();
        for (&section, was_intersecting) in self.regions.iter_mut() {
            // No geometry this frame: keep the previous state and stay quiet.
            let Some(region) = layout.rect(section) else {
                continue;
            };
            let ratio = intersection_ratio(region, viewport, &self.config);
            let is_intersecting = self.config.is_intersecting(ratio);
            if is_intersecting != *was_intersecting {
                *was_intersecting = is_intersecting;
                events.push(IntersectionEvent {
                    section,
                    ratio,
                    is_intersecting,
                });
            }
        }
        events
    }
}

/// Tracks which sections have ever entered the viewport and follows the latest one.
#[derive(Debug)]
pub struct VisibilityTracker<N = PollingNotifier> {
    notifier: N,
    mounted: bool,
    torn_down: bool,
}

impl VisibilityTracker<PollingNotifier> {
    pub fn new(config: ObserverConfig) -> Self {
        Self::with_notifier(PollingNotifier::new(config))
    }
}

impl<N: RegionNotifier> VisibilityTracker<N> {
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            notifier,
            mounted: false,
            torn_down: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn subscriptions(&self) -> usize {
        self.notifier.registered()
    }

    /// Subscribe every section whose geometry is known right now.
    ///
    /// Sections without a rectangle are skipped and never retried. Mounting
    /// twice, or after teardown, does nothing. Returns the subscription count.
    pub fn mount(&mut self, layout: &SectionLayout) -> usize {
        if self.mounted || self.torn_down {
            return self.notifier.registered();
        }
        for section in SectionId::ALL {
            if layout.rect(section).is_some() {
                self.notifier.register(section);
                log::debug!("observing section {}", section.anchor());
            } else {
                log::debug!("section {} has no geometry, not observed", section.anchor());
            }
        }
        self.mounted = true;
        self.notifier.registered()
    }

    /// Poll the notifier and apply its events in order. Returns true if state changed.
    pub fn poll(
        &mut self,
        viewport: Rect,
        layout: &SectionLayout,
        now: f64,
        state: &mut PageState,
    ) -> bool {
        if self.torn_down || !self.mounted {
            return false;
        }
        let mut changed = false;
        for event in self.notifier.poll(viewport, layout) {
            changed |= self.apply(event, now, state);
        }
        changed
    }

    /// Apply one intersection event. Only upward crossings touch state.
    pub fn apply(&self, event: IntersectionEvent, now: f64, state: &mut PageState) -> bool {
        if self.torn_down || !event.is_intersecting {
            return false;
        }
        let first_sighting = state.mark_seen(event.section, now);
        if first_sighting {
            log::debug!(
                "section {} entered viewport (ratio {:.2})",
                event.section.anchor(),
                event.ratio
            );
        }
        let moved = state.active != event.section;
        state.active = event.section;
        first_sighting || moved
    }

    /// Release every subscription. No state updates happen afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.notifier.unregister_all();
        self.torn_down = true;
        log::debug!("visibility tracker torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(100.0, bottom))
    }

    /// Five stacked sections, each 1000 points tall.
    fn stacked_layout() -> SectionLayout {
        let mut layout = SectionLayout::default();
        for (idx, section) in SectionId::ALL.into_iter().enumerate() {
            let top = idx as f32 * 1000.0;
            layout.record(section, rect(top, top + 1000.0));
        }
        layout
    }

    fn viewport_at(top: f32) -> Rect {
        rect(top, top + 800.0)
    }

    fn enter(section: SectionId, ratio: f32) -> IntersectionEvent {
        IntersectionEvent {
            section,
            ratio,
            is_intersecting: true,
        }
    }

    #[test]
    fn ratio_accounts_for_bottom_margin() {
        let config = ObserverConfig::default();
        // Region covers the last 100 points of the viewport; half is inside the margin.
        let region = rect(700.0, 800.0);
        let ratio = intersection_ratio(region, viewport_at(0.0), &config);
        assert!((ratio - 0.5).abs() < 1e-6);

        let no_margin = ObserverConfig::new(0.1, 0.0);
        assert!((intersection_ratio(region, viewport_at(0.0), &no_margin) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ratio_is_zero_when_disjoint() {
        let config = ObserverConfig::default();
        assert_eq!(intersection_ratio(rect(900.0, 1000.0), viewport_at(0.0), &config), 0.0);
    }

    #[test]
    fn zero_area_region_uses_containment() {
        let config = ObserverConfig::default();
        assert_eq!(intersection_ratio(rect(10.0, 10.0), viewport_at(0.0), &config), 1.0);
        assert_eq!(intersection_ratio(rect(790.0, 790.0), viewport_at(0.0), &config), 0.0);
    }

    #[test]
    fn zero_threshold_needs_some_overlap() {
        let config = ObserverConfig::new(0.0, 0.0);
        let viewport = rect(99.0, 899.0);

        let sliver = intersection_ratio(rect(0.0, 100.0), viewport, &config);
        assert!(sliver > 0.0);
        assert!(config.is_intersecting(sliver));

        let touching = intersection_ratio(rect(0.0, 99.0), viewport, &config);
        assert_eq!(touching, 0.0);
        assert!(!config.is_intersecting(touching));
    }

    #[test]
    fn config_clamps_inputs() {
        let config = ObserverConfig::new(2.0, -5.0);
        assert_eq!(config.threshold, 1.0);
        assert_eq!(config.bottom_margin, 0.0);
        assert_eq!(ObserverConfig::new(f32::NAN, 0.0).threshold, 0.0);
    }

    #[test]
    fn notifier_reports_crossings_only() {
        let layout = stacked_layout();
        let mut notifier = PollingNotifier::new(ObserverConfig::default());
        notifier.register(SectionId::Home);
        notifier.register(SectionId::About);

        let events = notifier.poll(viewport_at(0.0), &layout);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].section, SectionId::Home);
        assert!(events[0].is_intersecting);

        // Same geometry again: nothing crossed.
        assert!(notifier.poll(viewport_at(0.0), &layout).is_empty());

        // Scroll far enough that Home drops below threshold and About rises above it.
        let events = notifier.poll(viewport_at(1000.0), &layout);
        assert_eq!(
            events,
            vec![
                IntersectionEvent {
                    section: SectionId::Home,
                    ratio: 0.0,
                    is_intersecting: false
                },
                IntersectionEvent {
                    section: SectionId::About,
                    ratio: 0.75,
                    is_intersecting: true
                },
            ]
        );
    }

    #[test]
    fn notifier_skips_regions_missing_from_layout() {
        let mut notifier = PollingNotifier::new(ObserverConfig::default());
        notifier.register(SectionId::Skills);
        assert!(notifier.poll(viewport_at(0.0), &SectionLayout::default()).is_empty());

        let mut layout = SectionLayout::default();
        layout.record(SectionId::Skills, rect(0.0, 100.0));
        assert_eq!(notifier.poll(viewport_at(0.0), &layout).len(), 1);
    }

    #[test]
    fn skills_at_fifteen_percent_becomes_active() {
        let tracker = VisibilityTracker::new(ObserverConfig::default());
        let mut state = PageState::default();
        assert!(tracker.apply(enter(SectionId::Skills, 0.15), 1.0, &mut state));
        assert!(state.seen_at(SectionId::Skills).is_some());
        assert_eq!(state.active, SectionId::Skills);
    }

    #[test]
    fn fifteen_percent_overlap_crosses_ten_percent_threshold() {
        let mut layout = SectionLayout::default();
        layout.record(SectionId::Skills, rect(0.0, 1000.0));
        let mut tracker = VisibilityTracker::new(ObserverConfig::new(0.1, 0.0));
        tracker.mount(&layout);
        let mut state = PageState::default();

        // Viewport shows 150 of the 1000 points.
        let viewport = rect(-650.0, 150.0);
        assert!(tracker.poll(viewport, &layout, 0.0, &mut state));
        assert_eq!(state.seen_sections().collect::<Vec<_>>(), [SectionId::Skills]);
        assert_eq!(state.active, SectionId::Skills);
    }

    #[test]
    fn repeated_event_is_recorded_once() {
        let tracker = VisibilityTracker::new(ObserverConfig::default());
        let mut state = PageState::default();
        tracker.apply(enter(SectionId::Skills, 0.15), 1.0, &mut state);
        tracker.apply(enter(SectionId::Skills, 0.15), 2.0, &mut state);
        assert_eq!(state.seen_count(), 1);
        assert_eq!(state.seen_at(SectionId::Skills), Some(1.0));
    }

    #[test]
    fn downward_crossing_keeps_section_seen() {
        let tracker = VisibilityTracker::new(ObserverConfig::default());
        let mut state = PageState::default();
        tracker.apply(enter(SectionId::About, 0.5), 0.0, &mut state);
        let leave = IntersectionEvent {
            section: SectionId::About,
            ratio: 0.0,
            is_intersecting: false,
        };
        assert!(!tracker.apply(leave, 1.0, &mut state));
        assert!(state.seen_at(SectionId::About).is_some());
        assert_eq!(state.active, SectionId::About);
    }

    #[test]
    fn mount_skips_unresolved_regions() {
        let mut layout = SectionLayout::default();
        layout.record(SectionId::Home, rect(0.0, 500.0));
        layout.record(SectionId::Contact, rect(4000.0, 4500.0));
        let mut tracker = VisibilityTracker::new(ObserverConfig::default());
        assert_eq!(tracker.mount(&layout), 2);

        // Geometry appearing later does not add a subscription.
        let mut state = PageState::default();
        let full = stacked_layout();
        tracker.mount(&full);
        assert_eq!(tracker.subscriptions(), 2);
        tracker.poll(viewport_at(2000.0), &full, 0.0, &mut state);
        assert!(state.seen_at(SectionId::Skills).is_none());
    }

    #[test]
    fn poll_before_mount_does_nothing() {
        let layout = stacked_layout();
        let mut tracker = VisibilityTracker::new(ObserverConfig::default());
        let mut state = PageState::default();
        assert!(!tracker.poll(viewport_at(0.0), &layout, 0.0, &mut state));
        assert_eq!(state.seen_count(), 0);
    }

    #[test]
    fn teardown_releases_subscriptions_and_freezes_state() {
        let layout = stacked_layout();
        let mut tracker = VisibilityTracker::new(ObserverConfig::default());
        tracker.mount(&layout);
        let mut state = PageState::default();
        tracker.poll(viewport_at(0.0), &layout, 0.0, &mut state);
        assert_eq!(state.seen_count(), 1);

        tracker.teardown();
        tracker.teardown();
        assert_eq!(tracker.subscriptions(), 0);

        assert!(!tracker.poll(viewport_at(3000.0), &layout, 1.0, &mut state));
        assert!(!tracker.apply(enter(SectionId::Contact, 1.0), 1.0, &mut state));
        assert_eq!(state.seen_count(), 1);
        assert_eq!(state.active, SectionId::Home);
        assert_eq!(tracker.mount(&layout), 0);
    }

    #[test]
    fn scrolling_through_page_sees_every_section() {
        let layout = stacked_layout();
        let mut tracker = VisibilityTracker::new(ObserverConfig::default());
        assert_eq!(tracker.mount(&layout), 5);
        let mut state = PageState::default();
        for step in 0..=40 {
            tracker.poll(viewport_at(step as f32 * 100.0), &layout, step as f64, &mut state);
        }
        assert_eq!(state.seen_count(), 5);
        assert_eq!(state.active, SectionId::Contact);
    }

    proptest! {
        #[test]
        fn visibility_set_never_shrinks(tops in prop::collection::vec(-1000.0f32..5000.0, 1..60)) {
            let layout = stacked_layout();
            let mut tracker = VisibilityTracker::new(ObserverConfig::default());
            tracker.mount(&layout);
            let mut state = PageState::default();
            let mut previous: Vec<SectionId> = Vec::new();
            for (tick, top) in tops.into_iter().enumerate() {
                tracker.poll(viewport_at(top), &layout, tick as f64, &mut state);
                let current: Vec<SectionId> = state.seen_sections().collect();
                prop_assert!(current.len() >= previous.len());
                prop_assert!(previous.iter().all(|s| current.contains(s)));
                previous = current;
            }
        }
    }
}

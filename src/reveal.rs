//! Reveal animation timing, kept as data rather than control flow.

use std::collections::HashMap;

use crate::section::SectionId;

/// Elements that fade in when their section is first revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RevealKey {
    HeroPortrait,
    HeroTitle,
    HeroRole,
    HeroSummary,
    HeroActions,
    HeroSocials,
    /// Whole body of a non-hero section.
    Section(SectionId),
    /// Project card by position in the project list.
    ProjectCard(usize),
}

/// Delay table in seconds.
const DEFAULT_DELAYS: &[(RevealKey, f64)] = &[
    (RevealKey::HeroPortrait, 0.0),
    (RevealKey::HeroTitle, 0.1),
    (RevealKey::HeroRole, 0.2),
    (RevealKey::HeroSummary, 0.5),
    (RevealKey::HeroActions, 0.8),
    (RevealKey::HeroSocials, 1.0),
];

const PROJECT_CARD_STEP: f64 = 0.2;
const DEFAULT_FADE: f64 = 0.6;

/// Mapping from element to start delay, plus the shared fade length.
#[derive(Debug, Clone)]
pub struct RevealSchedule {
    delays: HashMap<RevealKey, f64>,
    fade: f64,
}

impl RevealSchedule {
    /// Build a schedule from explicit entries; unlisted keys start without delay.
    pub fn new(entries: impl IntoIterator<Item = (RevealKey, f64)>, fade: f64) -> Self {
        Self {
            delays: entries.into_iter().collect(),
            fade: fade.max(0.0),
        }
    }

    /// Default schedule with staggered delays for `project_cards` cards.
    pub fn with_project_cards(project_cards: usize) -> Self {
        let cards = (0..project_cards)
            .map(|idx| (RevealKey::ProjectCard(idx), idx as f64 * PROJECT_CARD_STEP));
        Self::new(DEFAULT_DELAYS.iter().copied().chain(cards), DEFAULT_FADE)
    }

    pub fn delay(&self, key: RevealKey) -> f64 {
        self.delays.get(&key).copied().unwrap_or(0.0)
    }

    /// Opacity of `key` at `now` when its section was revealed at `since`.
    ///
    /// `None` means the section has not been seen yet and the element stays hidden.
    pub fn opacity(&self, key: RevealKey, since: Option<f64>, now: f64) -> f32 {
        let Some(since) = since else {
            return 0.0;
        };
        let elapsed = now - since - self.delay(key);
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.fade <= 0.0 || elapsed >= self.fade {
            return 1.0;
        }
        (elapsed / self.fade) as f32
    }

    /// True once the element has fully faded in.
    pub fn is_settled(&self, key: RevealKey, since: Option<f64>, now: f64) -> bool {
        match since {
            Some(since) => now >= since + self.delay(key) + self.fade,
            None => false,
        }
    }
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self::with_project_cards(0)
    }
}

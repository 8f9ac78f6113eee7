//! Fixed set of page sections used as anchors and navigation targets.

/// One of the five scrollable regions composing the page, in page order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in the order they appear on the page.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Anchor key, as used by in-page links.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation bar label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Resolve an anchor such as `"skills"` or `"#Skills"`.
    ///
    /// Returns `None` for anything outside the fixed set so stale links can be ignored.
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        let anchor = anchor.trim();
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        SectionId::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(anchor))
    }
}

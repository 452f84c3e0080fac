//! Section representation for the scrollable page.
//!
//! A section is one visually distinct region of the page, addressable by its
//! index in visual order and by a stable identifier. The fixed four-section
//! page mirrors the nav bar: Home, Tech Stack, Projects, Contact.

/// Which kind of content a section renders and which interactions it offers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionKind {
    /// Hero card with the profile introduction.
    Home,
    /// Categorised gallery of technologies.
    TechStack,
    /// Project showcase; Enter opens the detail overlay.
    Projects,
    /// Contact invitation; Enter opens the popover form.
    Contact,
}

/// One addressable region of the page.
#[derive(Clone, Copy, Debug)]
pub struct Section {
    /// Stable identifier, the anchor the nav bar links to.
    pub id: &'static str,
    /// Title shown in the nav bar tab.
    pub title: &'static str,
    /// Content kind rendered inside this section.
    pub kind: SectionKind,
}

/// The page's sections in visual order; insertion order is nav order.
#[must_use]
pub fn page_sections() -> [Section; 4] {
    [
        Section {
            id: "home",
            title: "Home",
            kind: SectionKind::Home,
        },
        Section {
            id: "tech",
            title: "Tech Stack",
            kind: SectionKind::TechStack,
        },
        Section {
            id: "project",
            title: "Projects",
            kind: SectionKind::Projects,
        },
        Section {
            id: "contact",
            title: "Contact",
            kind: SectionKind::Contact,
        },
    ]
}

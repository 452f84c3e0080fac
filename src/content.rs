//! The portfolio content model: who you are and what you want shown.
//!
//! Content is declarative data, not markup. A portfolio is a profile (the
//! hero card), a categorised tech stack, and a set of project cards with
//! long-form detail for the overlay view. A built-in sample keeps the binary
//! runnable out of the box; a portfolio.toml alongside the binary replaces it
//! wholesale.

use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Facet, Clone)]
/// The hero card identity shown in the Home section.
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Short handle, shown @-prefixed under the name.
    pub handle: String,
    /// One-line introduction rendered as the hero message.
    pub tagline: String,
}

#[derive(Facet, Clone)]
/// One entry in the tech stack gallery.
pub struct TechItem {
    /// Technology name as displayed.
    pub name: String,
    /// Gallery grouping, e.g. "Languages" or "Cloud".
    pub category: String,
}

#[derive(Facet, Clone)]
/// A project card plus the long-form content behind its detail overlay.
pub struct Project {
    /// Card title.
    pub title: String,
    /// One-line description on the card.
    pub description: String,
    /// Longer write-up shown only in the detail overlay.
    pub content: String,
    #[facet(default = String::new())]
    /// Live demo URL; empty when the project has none.
    pub live_demo_url: String,
    #[facet(default = false)]
    /// Marks a project that is announced but not yet reachable.
    pub coming_soon: bool,
    /// Technology tags rendered as badges in the overlay.
    pub tech_stack: Vec<String>,
}

impl Project {
    #[must_use]
    /// The link status label for this project's card and overlay.
    ///
    /// A live URL wins; otherwise the project is either on its way or a
    /// commercial product with nothing public to link.
    pub fn link_status(&self) -> &'static str {
        if !self.live_demo_url.is_empty() {
            "Live Demo"
        } else if self.coming_soon {
            "Coming Soon"
        } else {
            "Commercial product"
        }
    }
}

#[derive(Facet, Clone)]
/// Everything the page renders, in display order.
pub struct Portfolio {
    /// Hero identity.
    pub profile: Profile,
    /// Tech stack entries; gallery order follows this list.
    pub tech: Vec<TechItem>,
    /// Project cards; showcase order follows this list.
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Parse a portfolio from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns the facet-toml parse error message for malformed input.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    /// Load a portfolio from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    #[must_use]
    /// Ordered list of gallery categories, first appearance wins.
    pub fn tech_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.tech {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    #[must_use]
    /// Names of the tech items in one gallery category, in list order.
    pub fn tech_in_category(&self, category: &str) -> Vec<&str> {
        self.tech
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.name.as_str())
            .collect()
    }

    #[must_use]
    /// The compiled-in sample portfolio used when no portfolio.toml exists.
    pub fn sample() -> Self {
        let tech = [
            ("Python", "Languages"),
            ("JavaScript", "Languages"),
            ("TypeScript", "Languages"),
            ("PHP", "Languages"),
            ("Node.js", "Frameworks"),
            ("React", "Frameworks"),
            ("Next.js", "Frameworks"),
            ("Vue", "Frameworks"),
            ("PostgreSQL", "Databases"),
            ("MySQL", "Databases"),
            ("AWS EC2", "Cloud"),
            ("Google Cloud", "Cloud"),
            ("Docker", "Tooling"),
            ("Git", "Tooling"),
        ]
        .into_iter()
        .map(|(name, category)| TechItem {
            name: name.to_string(),
            category: category.to_string(),
        })
        .collect();

        let projects = vec![
            Project {
                title: "IM Dashboard".to_string(),
                description: "Realtime inventory dashboard for a retail chain".to_string(),
                content: "Aggregates stock levels across 40 stores into one live view, \
                          with per-branch drill-down and reorder alerts."
                    .to_string(),
                live_demo_url: "https://example.com/im-dashboard".to_string(),
                coming_soon: false,
                tech_stack: vec![
                    "React".to_string(),
                    "TypeScript".to_string(),
                    "PostgreSQL".to_string(),
                ],
            },
            Project {
                title: "Payroll Suite".to_string(),
                description: "End-to-end payroll with statutory reporting".to_string(),
                content: "Monthly runs, leave accrual, and filing exports, built for a \
                          regional accounting firm."
                    .to_string(),
                live_demo_url: String::new(),
                coming_soon: false,
                tech_stack: vec!["PHP".to_string(), "MySQL".to_string(), "Docker".to_string()],
            },
            Project {
                title: "VendorSeek".to_string(),
                description: "Marketplace matching vendors to procurement teams".to_string(),
                content: "Search, shortlist, and tender workflows. Public beta opens soon."
                    .to_string(),
                live_demo_url: String::new(),
                coming_soon: true,
                tech_stack: vec![
                    "Next.js".to_string(),
                    "Node.js".to_string(),
                    "Google Cloud".to_string(),
                ],
            },
        ];

        Self {
            profile: Profile {
                name: "Peter Tam".to_string(),
                handle: "tamkc".to_string(),
                tagline: "Hi, I'm Peter Tam, a Full-Stack Developer.".to_string(),
            },
            tech,
            projects,
        }
    }
}

#[cfg(test)]
#[path = "tests/content.rs"]
mod tests;

use super::Portfolio;
use std::io::Write;
use tempfile::NamedTempFile;

const MINIMAL_TOML: &str = r#"
[profile]
name = "Grace Hopper"
handle = "grace"
tagline = "Compilers before it was cool."

[[tech]]
name = "COBOL"
category = "Languages"

[[tech]]
name = "FLOW-MATIC"
category = "Languages"

[[projects]]
title = "A-0 System"
description = "The first compiler"
content = "Translates symbolic mathematical code into machine code."
tech_stack = ["UNIVAC I"]
"#;

#[test]
fn test_portfolio_loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{MINIMAL_TOML}").unwrap();

    let portfolio = Portfolio::load(file.path()).unwrap();

    assert_eq!(portfolio.profile.name, "Grace Hopper");
    assert_eq!(portfolio.tech.len(), 2);
    assert_eq!(portfolio.projects.len(), 1);
    assert_eq!(portfolio.projects[0].tech_stack, vec!["UNIVAC I"]);
}

#[test]
fn test_optional_project_fields_default() {
    let portfolio = Portfolio::from_toml(MINIMAL_TOML).unwrap();
    let project = &portfolio.projects[0];

    assert!(project.live_demo_url.is_empty());
    assert!(!project.coming_soon);
    assert_eq!(project.link_status(), "Commercial product");
}

#[test]
fn test_malformed_toml_is_an_error() {
    assert!(Portfolio::from_toml("profile = 3").is_err());

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not toml at all [[[").unwrap();
    assert!(Portfolio::load(file.path()).is_err());
}

#[test]
fn test_link_status_precedence() {
    let mut portfolio = Portfolio::sample();
    let project = &mut portfolio.projects[0];

    project.live_demo_url = "https://example.com".to_string();
    project.coming_soon = true;
    assert_eq!(project.link_status(), "Live Demo");

    project.live_demo_url.clear();
    assert_eq!(project.link_status(), "Coming Soon");

    project.coming_soon = false;
    assert_eq!(project.link_status(), "Commercial product");
}

#[test]
fn test_tech_categories_keep_first_appearance_order() {
    let portfolio = Portfolio::sample();
    let categories = portfolio.tech_categories();

    assert_eq!(categories[0], "Languages");
    let mut deduped = categories.clone();
    deduped.dedup();
    assert_eq!(categories, deduped, "categories must be unique");

    let languages = portfolio.tech_in_category("Languages");
    assert!(languages.contains(&"Python"));
    assert!(portfolio.tech_in_category("No Such Category").is_empty());
}

#[test]
fn test_sample_portfolio_fills_every_section() {
    let portfolio = Portfolio::sample();

    assert!(!portfolio.profile.name.is_empty());
    assert!(!portfolio.tech.is_empty());
    assert!(!portfolio.projects.is_empty());
    assert!(
        portfolio.projects.iter().any(|p| !p.live_demo_url.is_empty()),
        "sample should show off a live-demo card"
    );
    assert!(
        portfolio.projects.iter().any(|p| p.coming_soon),
        "sample should show off a coming-soon card"
    );
}

//! vitrine: a personal portfolio that scrolls like a page, in your terminal.
//!
//! The page is four sections (hero, tech stack, projects, contact) navigated
//! by snapping wheel gestures, nav-bar jumps, or native line scrolling on
//! compact viewports. The [`navigator`] module holds the snap state machine;
//! [`app_state`] binds it to the page session; [`ui`] draws everything.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod content;
pub mod navigator;
pub mod outbox;
pub mod section;
pub mod ui;

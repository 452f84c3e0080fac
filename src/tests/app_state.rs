use super::{AppState, FormField, View, WHEEL_NOTCH};
use crate::config::Config;
use crate::content::Portfolio;
use crate::section::SectionKind;
use std::time::{Duration, Instant};

fn test_config() -> Config {
    Config::from_toml("").unwrap()
}

/// A mounted app with a laid-out page: 4 sections, 40 lines each, 40-row
/// viewport, desktop width.
fn laid_out_app() -> AppState {
    let mut app = AppState::new(Portfolio::sample(), &test_config());
    app.resize(120); // 960 logical units, Desktop
    app.register_layout(&[0, 40, 80, 120], 160, 40);
    app
}

#[test]
fn nav_bar_jump_targets_the_section_start() {
    let mut app = laid_out_app();

    app.jump_to(2);

    assert_eq!(app.navigator.current(), 2);
    assert_eq!(app.target_offset, 80);
}

#[test]
fn smooth_scroll_eases_toward_target_without_overshoot() {
    let mut app = laid_out_app();
    app.jump_to(2);
    let t0 = Instant::now();

    let mut previous = app.scroll_offset;
    let mut ticks = 0;
    while app.scroll_offset != app.target_offset {
        app.tick(t0 + Duration::from_millis(30 * ticks));
        assert!(app.scroll_offset > previous, "offset must move forward");
        assert!(app.scroll_offset <= app.target_offset, "must not overshoot");
        previous = app.scroll_offset;
        ticks += 1;
        assert!(ticks < 100, "must converge");
    }
    assert_eq!(app.scroll_offset, 80);
}

#[test]
fn wheel_snaps_sections_on_desktop() {
    let mut app = laid_out_app();
    let t0 = Instant::now();

    app.wheel(WHEEL_NOTCH, t0);

    assert_eq!(app.navigator.current(), 1);
    assert_eq!(app.target_offset, 40);
}

#[test]
fn wheel_scrolls_lines_on_compact() {
    let mut app = laid_out_app();
    app.resize(80); // 640 logical units, Compact
    let t0 = Instant::now();

    app.wheel(WHEEL_NOTCH, t0);
    assert_eq!(app.navigator.current(), 0, "index never moves on compact");
    assert_eq!(app.target_offset, 3);

    // Native scrolling is not throttled: gestures keep landing.
    app.wheel(WHEEL_NOTCH, t0 + Duration::from_millis(1));
    assert_eq!(app.target_offset, 6);

    app.wheel(-WHEEL_NOTCH, t0 + Duration::from_millis(2));
    assert_eq!(app.target_offset, 3);
}

#[test]
fn compact_native_scroll_clamps_to_page_extent() {
    let mut app = laid_out_app();
    app.resize(80);
    let t0 = Instant::now();

    app.target_offset = app.max_offset;
    app.scroll_offset = app.max_offset;
    app.wheel(WHEEL_NOTCH, t0);
    assert_eq!(app.target_offset, app.max_offset);

    app.target_offset = 0;
    app.wheel(-WHEEL_NOTCH, t0 + Duration::from_millis(1));
    assert_eq!(app.target_offset, 0);
}

#[test]
fn relayout_clamps_offsets_to_the_new_extent() {
    let mut app = laid_out_app();
    app.target_offset = 120;
    app.scroll_offset = 120;

    // The page reflowed shorter: 100 total lines in a 40-row viewport.
    app.register_layout(&[0, 25, 50, 75], 100, 40);

    assert_eq!(app.max_offset, 60);
    assert_eq!(app.target_offset, 60);
    assert_eq!(app.scroll_offset, 60);
}

#[test]
fn splash_expires_into_a_mounted_page() {
    let mut app = AppState::new(Portfolio::sample(), &test_config());
    let t0 = Instant::now();
    app.mount(t0);

    assert!(app.splash_active(t0 + Duration::from_millis(100)));

    let after = t0 + Duration::from_millis(1300);
    app.tick(after);
    assert!(!app.splash_active(after));
    assert_eq!(app.mounted_at, Some(after));
}

#[test]
fn keypress_skips_the_splash() {
    let mut app = AppState::new(Portfolio::sample(), &test_config());
    let t0 = Instant::now();
    app.mount(t0);

    let t1 = t0 + Duration::from_millis(50);
    app.skip_splash(t1);

    assert!(!app.splash_active(t1));
    assert_eq!(app.mounted_at, Some(t1));
}

#[test]
fn hint_shows_three_seconds_in_and_retires_at_eight() {
    let mut app = AppState::new(Portfolio::sample(), &test_config());
    let t0 = Instant::now();
    app.mount(t0);
    app.skip_splash(t0);

    assert!(!app.hint_visible(t0 + Duration::from_secs(1)));
    assert!(app.hint_visible(t0 + Duration::from_secs(4)));
    assert!(!app.hint_visible(t0 + Duration::from_secs(9)));
}

#[test]
fn activate_opens_the_matching_interaction() {
    let mut app = laid_out_app();

    app.jump_to(2);
    assert_eq!(app.active_kind(), SectionKind::Projects);
    app.activate();
    assert!(app.current_view == View::ProjectDetail);

    app.close_overlay();
    app.jump_to(3);
    app.activate();
    assert!(app.current_view == View::ContactForm);
    assert!(app.form.is_some());

    // Hero and tech stack have nothing to open.
    app.close_contact_form();
    app.jump_to(0);
    app.activate();
    assert!(app.current_view == View::Page);
}

#[test]
fn project_selection_clamps_at_both_ends() {
    let mut app = laid_out_app();
    let last = app.portfolio.projects.len() - 1;

    app.select_prev_project();
    assert_eq!(app.selected_project, 0);

    for _ in 0..10 {
        app.select_next_project();
    }
    assert_eq!(app.selected_project, last);
}

#[test]
fn send_command_records_a_valid_submission() {
    let mut app = laid_out_app();
    app.open_contact_form();

    if let Some(form) = app.form.as_mut() {
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.editor.lines = edtui::Lines::from("\nLet's build something.\n");
    }

    app.command_buffer = "send".to_string();
    app.execute_command();

    assert_eq!(app.outbox.submissions.len(), 1);
    assert_eq!(app.outbox.submissions[0].message, "Let's build something.");
    assert!(app.form.is_none(), "popover closes after a send");
    assert!(app.current_view == View::Page);
}

#[test]
fn invalid_email_keeps_the_form_open_with_the_rule_shown() {
    let mut app = laid_out_app();
    app.open_contact_form();

    if let Some(form) = app.form.as_mut() {
        form.name = "Ada".to_string();
        form.email = "not-an-email".to_string();
        form.editor.lines = edtui::Lines::from("\nhello\n");
    }

    app.command_buffer = "send".to_string();
    app.execute_command();

    assert!(app.outbox.is_empty());
    assert!(app.form.is_some());
    assert!(app.current_view == View::ContactForm);
    assert_eq!(app.message.as_deref(), Some("Invalid email format"));
}

#[test]
fn quit_command_discards_the_form() {
    let mut app = laid_out_app();
    app.open_contact_form();
    if let Some(form) = app.form.as_mut() {
        form.name = "half-typed".to_string();
    }

    app.command_buffer = "q".to_string();
    app.execute_command();

    assert!(app.form.is_none());
    assert!(app.outbox.is_empty());
    assert!(app.current_view == View::Page);
}

#[test]
fn unknown_command_reports_and_returns_to_the_form() {
    let mut app = laid_out_app();
    app.open_contact_form();

    app.command_buffer = "wq".to_string();
    app.execute_command();

    assert_eq!(app.message.as_deref(), Some("Unknown command: wq"));
    assert!(app.current_view == View::ContactForm);
}

#[test]
fn form_focus_cycles_in_tab_order() {
    assert_eq!(FormField::Name.next(), FormField::Email);
    assert_eq!(FormField::Email.next(), FormField::Message);
    assert_eq!(FormField::Message.next(), FormField::Name);
}

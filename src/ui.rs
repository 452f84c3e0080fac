//! The UI renders the application state into something visible and scrollable.
//!
//! The page is one virtual column of lines with every section padded to a
//! full screen, so snapping to a section start lands it flush at the top.
//! Layout doubles as registration: each pass reports the section start lines
//! back to the navigator, which is how sections announce where they mounted.
//! Overlays (project detail, contact popover) draw above the page.

use crate::app_state::{AppState, FormField, View};
use crate::content::Project;
use crate::navigator::ViewportClass;
use crate::section::SectionKind;
use edtui::{EditorTheme, EditorView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use std::time::Instant;

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &mut AppState, now: Instant) {
    if app.splash_active(now) {
        draw_splash(f, app, now);
        return;
    }

    draw_page(f, app, now);

    match app.current_view {
        View::Page => {}
        View::ProjectDetail => draw_project_detail(f, app),
        View::ContactForm | View::Command => draw_contact_form(f, app),
    }
}

/// Shrink `area` to a centered rectangle of the given percentages.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn draw_splash(f: &mut Frame, app: &AppState, now: Instant) {
    let area = centered_rect(60, 30, f.area());
    let dots = app.splash_until.map_or(0, |until| {
        (until.saturating_duration_since(now).as_millis() / 300) % 4
    });
    let dots = usize::try_from(dots).unwrap_or(0);

    let lines = vec![
        Line::from(Span::styled(
            app.portfolio.profile.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("warming up{}", ".".repeat(dots)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "press any key to skip",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let splash = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(splash, area);
}

fn draw_page(f: &mut Frame, app: &mut AppState, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav bar
            Constraint::Min(0),    // Page
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let nav_title = match app.navigator.viewport_class() {
        ViewportClass::Desktop => "vitrine".to_string(),
        ViewportClass::Compact => "vitrine [compact]".to_string(),
    };
    let titles: Vec<String> = app
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", i + 1, s.title))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.navigator.current())
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL).title(nav_title));
    f.render_widget(tabs, chunks[0]);

    let page_rows = chunks[1].height;
    if page_rows > 0 {
        // Lay the sections out as one virtual column, each padded to a full
        // screen, and report where every section start landed. This pass is
        // the registration mechanism: handles follow every reflow.
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut starts: Vec<u16> = Vec::new();
        for section in app.sections {
            starts.push(u16::try_from(lines.len()).unwrap_or(u16::MAX));
            let mut body = section_lines(app, section.kind);
            let padded = body.len().max(usize::from(page_rows));
            body.resize(padded, Line::default());
            lines.append(&mut body);
        }
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        app.register_layout(&starts, total, page_rows);

        let page = Paragraph::new(Text::from(lines)).scroll((app.scroll_offset, 0));
        f.render_widget(page, chunks[1]);
    }

    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.hint_visible(now) {
        "Hint: scroll with the wheel or press 1-4 to jump between sections".to_string()
    } else {
        "Wheel/↑/↓: Scroll | 1-4: Jump | ←/→: Select project | Enter: Open | q: Quit".to_string()
    };
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[2]);
}

/// Render one section's content as page lines, before padding.
fn section_lines(app: &AppState, kind: SectionKind) -> Vec<Line<'static>> {
    match kind {
        SectionKind::Home => hero_lines(app),
        SectionKind::TechStack => tech_lines(app),
        SectionKind::Projects => project_lines(app),
        SectionKind::Contact => contact_lines(app),
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn hero_lines(app: &AppState) -> Vec<Line<'static>> {
    let profile = &app.portfolio.profile;
    vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                profile.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  @{}", profile.handle),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::default(),
        Line::from(profile.tagline.clone()),
        Line::default(),
        Line::from(Span::styled(
            "(\\^o^)/  say hi!",
            Style::default().fg(Color::Yellow),
        )),
    ]
}

fn tech_lines(app: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Tech Stack"), Line::default()];
    for category in app.portfolio.tech_categories() {
        lines.push(Line::from(Span::styled(
            category.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let names = app.portfolio.tech_in_category(category).join(" · ");
        lines.push(Line::from(Span::raw(format!("  {names}"))));
        lines.push(Line::default());
    }
    lines
}

fn project_card(project: &Project, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▸ " } else { "  " };
    let title_style = if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let dot_color = if project.live_demo_url.is_empty() {
        Color::Red
    } else {
        Color::Green
    };

    vec![
        Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(project.title.clone(), title_style),
            Span::raw("  "),
            Span::styled("●", Style::default().fg(dot_color)),
            Span::styled(
                format!(" {}", project.link_status()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::raw(format!("    {}", project.description))),
        Line::default(),
    ]
}

fn project_lines(app: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Projects"), Line::default()];
    for (i, project) in app.portfolio.projects.iter().enumerate() {
        lines.extend(project_card(project, i == app.selected_project));
    }
    lines
}

fn contact_lines(app: &AppState) -> Vec<Line<'static>> {
    vec![
        heading("Get in touch"),
        Line::default(),
        Line::from("Have a project in mind, or just want to say hello?"),
        Line::from("Press Enter to open the contact form."),
        Line::default(),
        Line::from(Span::styled(
            format!("@{}", app.portfolio.profile.handle),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn draw_project_detail(f: &mut Frame, app: &AppState) {
    let Some(project) = app.portfolio.projects.get(app.selected_project) else {
        return;
    };

    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(project.title.clone());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Min(0),    // Long-form content
            Constraint::Length(1), // Tech badges
            Constraint::Length(1), // Link status
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let description = Paragraph::new(project.description.clone())
        .style(Style::default().add_modifier(Modifier::ITALIC));
    f.render_widget(description, chunks[0]);

    let content = Paragraph::new(project.content.clone()).wrap(Wrap { trim: true });
    f.render_widget(content, chunks[1]);

    let mut badge_spans: Vec<Span> = Vec::new();
    for tech in &project.tech_stack {
        badge_spans.push(Span::styled(
            format!("[{tech}]"),
            Style::default().fg(Color::Magenta),
        ));
        badge_spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(badge_spans)), chunks[2]);

    let dot_color = if project.live_demo_url.is_empty() {
        Color::Red
    } else {
        Color::Green
    };
    let status = Line::from(vec![
        Span::styled("●", Style::default().fg(dot_color)),
        Span::raw(format!(" {}", project.link_status())),
        if project.live_demo_url.is_empty() {
            Span::raw(String::new())
        } else {
            Span::styled(
                format!("  {}", project.live_demo_url),
                Style::default().fg(Color::Blue),
            )
        },
    ]);
    f.render_widget(Paragraph::new(status), chunks[3]);

    let help = Paragraph::new("←/→: Switch project | Esc: Close")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

fn field_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title.to_string())
}

fn draw_contact_form(f: &mut Frame, app: &mut AppState) {
    let in_command = app.current_view == View::Command;
    let footer = if in_command {
        format!(":{}", app.command_buffer)
    } else if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        "Tab: Next field | i: Edit message | :send Submit | :q Cancel".to_string()
    };

    let Some(form) = app.form.as_mut() else {
        return;
    };

    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title("Get in touch");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Min(3),    // Message
            Constraint::Length(1), // Help / command line
        ])
        .split(inner);

    let name = Paragraph::new(form.name.clone())
        .block(field_block("Name", form.focus == FormField::Name));
    f.render_widget(name, chunks[0]);

    let email = Paragraph::new(form.email.clone())
        .block(field_block("Email", form.focus == FormField::Email));
    f.render_widget(email, chunks[1]);

    let message_block = field_block("Message", form.focus == FormField::Message);
    let message_area = message_block.inner(chunks[2]);
    f.render_widget(message_block, chunks[2]);
    let editor = EditorView::new(&mut form.editor)
        .theme(EditorTheme::default())
        .wrap(true);
    f.render_widget(editor, message_area);

    let footer_widget = Paragraph::new(footer).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer_widget, chunks[3]);
}

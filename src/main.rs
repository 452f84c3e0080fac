//! vitrine: a personal portfolio that scrolls like a page, in your terminal.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use edtui::{EditorEventHandler, EditorMode};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use vitrine::app_state::{AppState, FormField, View, WHEEL_NOTCH};
use vitrine::section::SectionKind;
use vitrine::{config, content, ui};

/// How long the event loop waits for input before running a tick. Short
/// enough that the smooth scroll and splash countdown stay fluid.
const POLL_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "A personal portfolio that scrolls like a page, in your terminal", long_about = None)]
struct Args {
    /// Portfolio content file (defaults to portfolio.toml if present)
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Skip the warm-up splash
    #[arg(long)]
    no_splash: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if args.no_splash {
        cfg.splash_ms = 0;
    }

    let portfolio = if let Some(path) = &args.content {
        content::Portfolio::load(path)?
    } else if Path::new("portfolio.toml").exists() {
        content::Portfolio::load(Path::new("portfolio.toml"))?
    } else {
        content::Portfolio::sample()
    };

    let mut app = AppState::new(portfolio, &cfg);
    run_tui(&mut app)
}

fn run_tui(app: &mut AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut editor_handler = EditorEventHandler::default();

    let result = run_app(&mut terminal, app, &mut editor_handler);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else if !app.outbox.is_empty() {
        let json = serde_json::to_string_pretty(&app.outbox).map_err(io::Error::other)?;
        println!("{json}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    editor_handler: &mut EditorEventHandler,
) -> io::Result<()> {
    let size = terminal.size()?;
    app.resize(size.width);
    app.mount(Instant::now());

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| ui::draw(f, app, now))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let now = Instant::now();
        match event::read()? {
            Event::Key(key) => {
                if app.splash_active(now) {
                    app.skip_splash(now);
                    continue;
                }
                match app.current_view {
                    View::Page => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char(c @ '1'..='4') => {
                            if let Some(digit) = c.to_digit(10) {
                                app.jump_to(digit as usize - 1);
                            }
                        }
                        KeyCode::Down | KeyCode::Char('j') => app.wheel(WHEEL_NOTCH, now),
                        KeyCode::Up | KeyCode::Char('k') => app.wheel(-WHEEL_NOTCH, now),
                        KeyCode::Right | KeyCode::Char('l') => {
                            if app.active_kind() == SectionKind::Projects {
                                app.select_next_project();
                            }
                        }
                        KeyCode::Left | KeyCode::Char('h') => {
                            if app.active_kind() == SectionKind::Projects {
                                app.select_prev_project();
                            }
                        }
                        KeyCode::Enter => app.activate(),
                        _ => {}
                    },
                    View::ProjectDetail => match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => app.close_overlay(),
                        KeyCode::Right | KeyCode::Char('l') => app.select_next_project(),
                        KeyCode::Left | KeyCode::Char('h') => app.select_prev_project(),
                        _ => {}
                    },
                    View::ContactForm => handle_form_key(app, key, editor_handler),
                    View::Command => match key.code {
                        KeyCode::Char(c) => app.command_buffer.push(c),
                        KeyCode::Backspace => {
                            app.command_buffer.pop();
                        }
                        KeyCode::Enter => app.execute_command(),
                        KeyCode::Esc => {
                            app.command_buffer.clear();
                            app.current_view = View::ContactForm;
                        }
                        _ => {}
                    },
                }
            }
            Event::Mouse(mouse) => {
                if app.splash_active(now) || app.current_view != View::Page {
                    continue;
                }
                match mouse.kind {
                    MouseEventKind::ScrollDown => app.wheel(WHEEL_NOTCH, now),
                    MouseEventKind::ScrollUp => app.wheel(-WHEEL_NOTCH, now),
                    _ => {}
                }
            }
            Event::Resize(cols, _rows) => app.resize(cols),
            _ => {}
        }
    }
}

/// Route a keystroke to the open contact form.
///
/// Name and email are plain line buffers; the message field defers to the
/// vim-mode editor, so command mode and closing are only reachable from its
/// normal mode (typing a ':' into the message still works in insert mode).
fn handle_form_key(app: &mut AppState, key: KeyEvent, editor_handler: &mut EditorEventHandler) {
    let Some((focus, editor_normal)) = app
        .form
        .as_ref()
        .map(|form| (form.focus, form.editor.mode == EditorMode::Normal))
    else {
        app.current_view = View::Page;
        return;
    };

    match (focus, key.code) {
        (FormField::Name | FormField::Email, KeyCode::Esc) => app.close_contact_form(),
        (FormField::Message, KeyCode::Esc) if editor_normal => app.close_contact_form(),
        (FormField::Message, KeyCode::Char(':')) if editor_normal => {
            app.current_view = View::Command;
            app.command_buffer.clear();
            app.message = None;
        }
        _ => {
            if let Some(form) = app.form.as_mut() {
                match (form.focus, key.code) {
                    (FormField::Name, KeyCode::Char(c)) => form.name.push(c),
                    (FormField::Name, KeyCode::Backspace) => {
                        form.name.pop();
                    }
                    (FormField::Email, KeyCode::Char(c)) => form.email.push(c),
                    (FormField::Email, KeyCode::Backspace) => {
                        form.email.pop();
                    }
                    (FormField::Name | FormField::Email, KeyCode::Tab | KeyCode::Enter) => {
                        form.focus = form.focus.next();
                    }
                    (FormField::Message, KeyCode::Tab) if editor_normal => {
                        form.focus = form.focus.next();
                    }
                    (FormField::Message, _) => editor_handler.on_key_event(key, &mut form.editor),
                    _ => {}
                }
            }
        }
    }
}

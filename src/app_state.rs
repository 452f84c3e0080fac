//! The core state machine bridging page sections and the interactive views.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated
//! as the viewer scrolls and interacts. One owned `AppState` holds the
//! navigator, the scroll offsets, the overlay and form state, and the
//! session's timing anchors (splash, hint). All mutation goes through its
//! methods on the single event thread; dropping it releases every pending
//! deadline with it, so nothing can fire against a torn-down page.

use crate::config::Config;
use crate::content::Portfolio;
use crate::navigator::{Navigator, SectionHandle, Tuning, Viewport, WheelOutcome};
use crate::outbox::{Outbox, Submission};
use crate::section::{page_sections, Section, SectionKind};
use edtui::{EditorState, Lines};
use std::time::{Duration, Instant};

/// Wheel delta carried by one scroll notch, the browser convention.
pub const WHEEL_NOTCH: i32 = 120;

/// Logical width units per terminal column. At 8 units a 96-column terminal
/// sits exactly on the 768-unit default breakpoint.
pub const UNITS_PER_COL: u16 = 8;

/// Lines moved per gesture when the compact layout scrolls natively.
const COMPACT_SCROLL_LINES: u16 = 3;

/// Delay before the navigation hint appears.
const HINT_SHOW: Duration = Duration::from_secs(3);

/// Cutoff after which the navigation hint disappears again.
const HINT_HIDE: Duration = Duration::from_secs(8);

#[derive(PartialEq)]
/// Determines which UI layer renders and how input is interpreted.
pub enum View {
    /// The scrollable page itself.
    Page,
    /// Project detail overlay above the page.
    ProjectDetail,
    /// Contact popover form above the page.
    ContactForm,
    /// Captures vim-style command input after ':' in the form.
    Command,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Which contact-form field receives keystrokes.
pub enum FormField {
    /// Single-line name input.
    Name,
    /// Single-line email input.
    Email,
    /// Multi-line message editor.
    Message,
}

impl FormField {
    #[must_use]
    /// The next field in Tab order, wrapping after the message.
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }
}

/// Live state of the contact popover while it is open.
pub struct ContactForm {
    /// Name input buffer.
    pub name: String,
    /// Email input buffer.
    pub email: String,
    /// Field currently receiving keystrokes.
    pub focus: FormField,
    /// Vim-mode editor backing the message body.
    pub editor: EditorState,
}

impl ContactForm {
    #[must_use]
    /// An empty form focused on the name field.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            focus: FormField::Name,
            editor: EditorState::new(Lines::from("\n")),
        }
    }

    #[must_use]
    /// The message body with surrounding whitespace trimmed.
    pub fn message_text(&self) -> String {
        let lines: Vec<String> = self
            .editor
            .lines
            .iter_row()
            .map(|line| line.iter().collect::<String>())
            .collect();
        lines.join("\n").trim().to_string()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of the page the navigator scrolls, wrapping only the
/// fields it needs so the navigator and the offset can be borrowed together.
struct PageViewport<'a> {
    width: u16,
    target_offset: &'a mut u16,
}

impl Viewport for PageViewport<'_> {
    fn width(&self) -> u16 {
        self.width
    }

    fn scroll_to(&mut self, handle: SectionHandle) {
        // The tick loop eases the visible offset toward this target, which
        // is what makes the motion smooth rather than a jump.
        *self.target_offset = handle.line;
    }
}

/// Single source of truth for the page session.
pub struct AppState {
    /// Content the page renders.
    pub portfolio: Portfolio,
    /// The page's sections in visual order.
    pub sections: [Section; 4],
    /// Section registry and snap-navigation state machine.
    pub navigator: Navigator,
    /// Active UI layer determining input handling.
    pub current_view: View,
    /// Selected card in the project showcase.
    pub selected_project: usize,
    /// Popover state while the contact form is open.
    pub form: Option<ContactForm>,
    /// Accumulates vim-style command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Accepted contact submissions, printed as JSON on exit.
    pub outbox: Outbox,
    /// Line offset currently visible at the top of the page area.
    pub scroll_offset: u16,
    /// Line offset the smooth scroll is easing toward.
    pub target_offset: u16,
    /// Largest offset that still shows a full page area.
    pub max_offset: u16,
    /// Height of the page area in lines, from the last layout pass.
    pub page_rows: u16,
    /// Viewport width in logical units, from the last resize.
    pub logical_width: u16,
    /// Deadline for the warm-up splash, if it is still showing.
    pub splash_until: Option<Instant>,
    /// When the page itself first became visible; anchors the hint window.
    pub mounted_at: Option<Instant>,
    /// Configured splash duration.
    splash: Duration,
}

impl AppState {
    #[must_use]
    /// Initialises session state around the given content and tuning.
    pub fn new(portfolio: Portfolio, cfg: &Config) -> Self {
        let sections = page_sections();
        Self {
            navigator: Navigator::new(sections.len(), Tuning::from(cfg)),
            portfolio,
            sections,
            current_view: View::Page,
            selected_project: 0,
            form: None,
            command_buffer: String::new(),
            message: None,
            outbox: Outbox::default(),
            scroll_offset: 0,
            target_offset: 0,
            max_offset: 0,
            page_rows: 0,
            logical_width: 0,
            splash_until: None,
            mounted_at: None,
            splash: Duration::from_millis(cfg.splash_ms),
        }
    }

    /// Start the session clock: arm the splash, or mount the page straight
    /// away when the splash duration is zero.
    pub fn mount(&mut self, now: Instant) {
        if self.splash.is_zero() {
            self.mounted_at = Some(now);
        } else {
            self.splash_until = Some(now + self.splash);
        }
    }

    #[must_use]
    /// Whether the warm-up splash is still on screen at `now`.
    pub fn splash_active(&self, now: Instant) -> bool {
        self.splash_until.is_some_and(|until| now < until)
    }

    /// Dismiss the splash early, as any keypress does.
    pub fn skip_splash(&mut self, now: Instant) {
        self.splash_until = None;
        self.mounted_at.get_or_insert(now);
    }

    /// Advance time-driven state: splash expiry and the smooth scroll.
    ///
    /// Called once per poll cycle from the event loop; this is the only
    /// place the visible offset moves, which keeps the motion animated and
    /// non-blocking.
    pub fn tick(&mut self, now: Instant) {
        if self.splash_until.is_some_and(|until| now >= until) {
            self.splash_until = None;
            self.mounted_at.get_or_insert(now);
        }

        let current = i32::from(self.scroll_offset);
        let target = i32::from(self.target_offset);
        let diff = target - current;
        if diff != 0 {
            // Ease out: cover a quarter of the remaining distance per tick,
            // never overshooting and never stalling short of the target.
            let step = (diff.abs() / 4).max(1).min(diff.abs());
            let next = if diff > 0 {
                current + step
            } else {
                current - step
            };
            self.scroll_offset = u16::try_from(next).unwrap_or(0);
        }
    }

    #[must_use]
    /// Whether the scroll hint should show in the help bar at `now`.
    ///
    /// The hint appears a few seconds after the page mounts and retires
    /// itself a few seconds later; both edges hang off the one mount
    /// timestamp, so there are no timers to cancel.
    pub fn hint_visible(&self, now: Instant) -> bool {
        self.mounted_at.is_some_and(|mounted| {
            let shown_for = now.saturating_duration_since(mounted);
            shown_for >= HINT_SHOW && shown_for < HINT_HIDE
        })
    }

    /// Record a terminal resize: remember the logical width and re-derive
    /// the viewport class. This is the only caller of classification, so
    /// the class is never staler than one resize event.
    pub fn resize(&mut self, cols: u16) {
        self.logical_width = cols.saturating_mul(UNITS_PER_COL);
        self.navigator.classify(self.logical_width);
    }

    /// Accept a layout pass: attach each section's handle and clamp the
    /// offsets to the new page extent.
    ///
    /// Runs during render, which is when sections announce where they
    /// mounted; a section missing from `starts` keeps its previous handle.
    pub fn register_layout(&mut self, starts: &[u16], total_lines: u16, page_rows: u16) {
        for (index, start) in starts.iter().enumerate() {
            self.navigator.register(index, SectionHandle { line: *start });
        }
        self.page_rows = page_rows;
        self.max_offset = total_lines.saturating_sub(page_rows);
        self.target_offset = self.target_offset.min(self.max_offset);
        self.scroll_offset = self.scroll_offset.min(self.max_offset);
    }

    /// Jump straight to a section, the nav-bar link path. Direct jumps are
    /// not throttled; only wheel gestures are.
    pub fn jump_to(&mut self, index: usize) {
        let mut viewport = PageViewport {
            width: self.logical_width,
            target_offset: &mut self.target_offset,
        };
        self.navigator.scroll_to_section(index, &mut viewport);
    }

    /// Feed a wheel gesture to the navigator, falling back to native
    /// line scrolling when the compact layout declines to intercept it.
    pub fn wheel(&mut self, delta: i32, now: Instant) {
        let mut viewport = PageViewport {
            width: self.logical_width,
            target_offset: &mut self.target_offset,
        };
        match self.navigator.handle_wheel(delta, now, &mut viewport) {
            WheelOutcome::Ignored => self.scroll_native(delta),
            WheelOutcome::Throttled
            | WheelOutcome::BelowThreshold
            | WheelOutcome::Accepted => {}
        }
    }

    /// Move the page by whole lines, the compact layout's native scroll.
    fn scroll_native(&mut self, delta: i32) {
        if delta > 0 {
            self.target_offset = self
                .target_offset
                .saturating_add(COMPACT_SCROLL_LINES)
                .min(self.max_offset);
        } else {
            self.target_offset = self.target_offset.saturating_sub(COMPACT_SCROLL_LINES);
        }
    }

    #[must_use]
    /// Kind of the section the navigator currently points at.
    pub fn active_kind(&self) -> SectionKind {
        self.sections[self.navigator.current()].kind
    }

    /// Select the next project card, clamped at the last.
    pub fn select_next_project(&mut self) {
        let count = self.portfolio.projects.len();
        if count > 0 && self.selected_project < count - 1 {
            self.selected_project += 1;
        }
    }

    /// Select the previous project card, clamped at the first.
    pub fn select_prev_project(&mut self) {
        self.selected_project = self.selected_project.saturating_sub(1);
    }

    /// Enter the active section's interaction: the detail overlay on the
    /// showcase, the popover on the contact section. Elsewhere a no-op.
    pub fn activate(&mut self) {
        match self.active_kind() {
            SectionKind::Projects => {
                if !self.portfolio.projects.is_empty() {
                    self.current_view = View::ProjectDetail;
                }
            }
            SectionKind::Contact => self.open_contact_form(),
            SectionKind::Home | SectionKind::TechStack => {}
        }
    }

    /// Close the project detail overlay back to the page.
    pub fn close_overlay(&mut self) {
        self.current_view = View::Page;
    }

    /// Open the contact popover with a fresh form.
    pub fn open_contact_form(&mut self) {
        self.form = Some(ContactForm::new());
        self.message = None;
        self.current_view = View::ContactForm;
    }

    /// Discard the form and return to the page.
    pub fn close_contact_form(&mut self) {
        self.form = None;
        self.current_view = View::Page;
    }

    /// Validate the open form and queue it into the outbox.
    ///
    /// On success the popover closes and the help bar confirms; on a failed
    /// rule the form stays open with the rule's message shown, nothing
    /// recorded.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let submission = Submission {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message_text(),
        };
        match submission.validate() {
            Ok(()) => {
                self.outbox.record(submission);
                self.message = Some("Message queued. Thanks for reaching out!".to_string());
                self.form = None;
                self.current_view = View::Page;
            }
            Err(rule) => {
                self.message = Some(rule);
                self.current_view = View::ContactForm;
            }
        }
    }

    /// Execute the buffered ':' command and leave command mode.
    pub fn execute_command(&mut self) {
        let cmd = self.command_buffer.clone();
        self.command_buffer.clear();

        match cmd.as_str() {
            "send" | "s" => self.submit_form(),
            "q" | "q!" => self.close_contact_form(),
            _ => {
                self.message = Some(format!("Unknown command: {cmd}"));
                self.current_view = if self.form.is_some() {
                    View::ContactForm
                } else {
                    View::Page
                };
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;

//! Section-snap navigation: one authoritative index, moved by intents.
//!
//! The navigator owns an ordered registry of section handles and translates
//! discrete navigation intents (direct jumps from the nav bar, relative wheel
//! gestures) into a single `current` index, asking the viewport to bring the
//! matching section into view. Wheel input is gated three ways before it is
//! allowed to move the index: compact viewports keep native scrolling, a
//! cooldown window debounces trackpads that emit many deltas per flick, and
//! a minimum magnitude filters residual scroll noise.
//!
//! The cooldown is a two-state machine, `Idle` and `Cooldown`, represented
//! here as an optional deadline. An accepted input arms the deadline; input
//! arriving before it is dropped without extending the window; once `now`
//! passes the deadline the navigator is `Idle` again. Because the deadline is
//! plain owned data there is nothing to cancel on teardown: dropping the
//! navigator drops the window with it.

use crate::config::Config;
use std::time::{Duration, Instant};

/// Position of a mounted section inside the virtual page, in page lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SectionHandle {
    /// First line of the section in the virtual page.
    pub line: u16,
}

/// Width-derived layout class gating wheel-driven navigation.
///
/// Section snapping is a wide-viewport affordance: compact viewports keep
/// native line-by-line scrolling, matching what users expect on small
/// screens.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportClass {
    /// Wide viewport; wheel gestures snap between sections.
    Desktop,
    /// Narrow viewport; gestures are left to native scrolling.
    Compact,
}

/// What the navigator decided to do with a wheel gesture.
///
/// The caller uses this to decide whether to suppress the default scroll:
/// only `Ignored` should fall through to native scrolling.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WheelOutcome {
    /// Compact viewport: not intercepted, native scrolling proceeds.
    Ignored,
    /// Dropped inside the cooldown window; the window is not extended.
    Throttled,
    /// Dropped for insufficient magnitude; no cooldown started.
    BelowThreshold,
    /// Accepted: the index moved (or clamped at an edge) and the cooldown
    /// window started from this input.
    Accepted,
}

/// Tunable thresholds for gesture acceptance.
///
/// These are tuning knobs rather than contracts; the defaults are the most
/// refined values the page shipped with.
#[derive(Clone, Copy, Debug)]
pub struct Tuning {
    /// Minimum `abs(delta)` for a wheel gesture to count as intentional.
    pub min_wheel_delta: u16,
    /// Length of the cooldown window after an accepted gesture.
    pub cooldown: Duration,
    /// Widths at or below this (in logical units) classify as `Compact`.
    pub compact_breakpoint: u16,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_wheel_delta: 40,
            cooldown: Duration::from_millis(300),
            compact_breakpoint: 768,
        }
    }
}

impl From<&Config> for Tuning {
    fn from(cfg: &Config) -> Self {
        Self {
            min_wheel_delta: cfg.min_wheel_delta,
            cooldown: Duration::from_millis(cfg.scroll_cooldown_ms),
            compact_breakpoint: cfg.compact_breakpoint,
        }
    }
}

/// The viewport capability the navigator drives.
///
/// The page frontend implements this over its scroll offset; tests substitute
/// a recording mock. Scrolling is a request for smooth (animated,
/// non-blocking) motion, not an instantaneous reposition.
pub trait Viewport {
    /// Current viewport width in logical units.
    fn width(&self) -> u16;
    /// Bring the given section handle into view with smooth motion.
    fn scroll_to(&mut self, handle: SectionHandle);
}

/// Owns the section registry and the navigation state machine.
///
/// Created once when the page mounts and dropped with it; no state survives
/// a remount.
pub struct Navigator {
    /// Handle slots in visual order. `None` means the section has not been
    /// laid out yet (or detached); navigation must tolerate the gap.
    slots: Vec<Option<SectionHandle>>,
    current: usize,
    /// `Some(deadline)` while the cooldown window is armed.
    cooldown_until: Option<Instant>,
    viewport_class: ViewportClass,
    tuning: Tuning,
}

impl Navigator {
    #[must_use]
    /// Creates a navigator for `section_count` sections, all unmounted,
    /// starting at index 0 in the `Desktop` class.
    pub fn new(section_count: usize, tuning: Tuning) -> Self {
        Self {
            slots: vec![None; section_count],
            current: 0,
            cooldown_until: None,
            viewport_class: ViewportClass::Desktop,
            tuning,
        }
    }

    #[must_use]
    /// The authoritative active section index.
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    /// Number of registered section slots.
    pub fn section_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    /// The viewport class as of the last resize notification.
    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport_class
    }

    /// Attach a section's handle, announcing "I am section `index`".
    ///
    /// Called during every layout pass, so handles track the page as content
    /// reflows. Out-of-range indices are ignored.
    pub fn register(&mut self, index: usize, handle: SectionHandle) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(handle);
        }
    }

    /// Detach a section's handle, as when its content unmounts.
    pub fn deregister(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    /// Re-derive the viewport class from a width notification.
    ///
    /// This is the single source of truth consulted by [`handle_wheel`]; it
    /// is called once at mount and then only from resize notifications, so it
    /// is never staler than one resize cycle.
    ///
    /// [`handle_wheel`]: Navigator::handle_wheel
    pub fn classify(&mut self, width: u16) {
        self.viewport_class = if width <= self.tuning.compact_breakpoint {
            ViewportClass::Compact
        } else {
            ViewportClass::Desktop
        };
    }

    #[must_use]
    /// Whether the cooldown window is still armed at `now`.
    pub fn is_throttled(&self, now: Instant) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }

    /// Jump directly to a section, as a nav-bar link does.
    ///
    /// Out-of-range indices are a silent no-op. An in-range index always
    /// becomes current; the smooth-scroll request is skipped when the
    /// section's handle is not mounted.
    pub fn scroll_to_section(&mut self, index: usize, viewport: &mut dyn Viewport) {
        if index >= self.slots.len() {
            return;
        }
        self.current = index;
        if let Some(handle) = self.slots[index] {
            viewport.scroll_to(handle);
        }
    }

    /// Feed one wheel gesture through the acceptance rules.
    ///
    /// Positive `delta` is a forward (down-page) gesture, negative is
    /// backward. The rules apply in order: compact viewports are never
    /// intercepted; a gesture during the cooldown window is dropped without
    /// extending it; a gesture below the magnitude threshold is dropped
    /// without starting one. An accepted gesture moves the index one step
    /// (clamped at the ends, no wrap) and arms the cooldown from `now`.
    pub fn handle_wheel(
        &mut self,
        delta: i32,
        now: Instant,
        viewport: &mut dyn Viewport,
    ) -> WheelOutcome {
        if self.viewport_class == ViewportClass::Compact {
            return WheelOutcome::Ignored;
        }
        if self.is_throttled(now) {
            return WheelOutcome::Throttled;
        }
        if delta.unsigned_abs() < u32::from(self.tuning.min_wheel_delta) {
            return WheelOutcome::BelowThreshold;
        }

        if delta > 0 {
            self.scroll_to_section(self.current + 1, viewport);
        } else if let Some(prev) = self.current.checked_sub(1) {
            self.scroll_to_section(prev, viewport);
        }

        self.cooldown_until = Some(now + self.tuning.cooldown);
        WheelOutcome::Accepted
    }
}

#[cfg(test)]
#[path = "tests/navigator.rs"]
mod tests;

//! # Infinite-Loop Carousel
//!
//! A carousel over N cards that scrolls forever in both directions. The
//! strip holds 3N slots: a full set of clones, the N originals, and a second
//! full set of clones. Navigation animates the strip toward the new card;
//! whenever the index lands in a clone range, a deferred correction snaps it
//! back into the original range with no animation once the slide has
//! finished, so the loop appears continuous.
//!
//! ## Time handling
//!
//! The model never reads the clock. Every operation takes `now: Instant`,
//! and deferred work (wrap correction, resize debounce) is stored as a
//! deadline fired by [`Carousel::tick`]. This keeps the whole state machine
//! synchronous and lets tests advance time synthetically.
//!
//! ## Correction scheduling
//!
//! The correction slot is single-entry: each navigation call replaces any
//! pending deadline, and the correction target is computed at fire time by
//! normalizing the index modulo N. Rapid repeated navigation therefore can
//! never accumulate corrections or land on the wrong card.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long one animated slide takes, and how long after a navigation the
/// wrap correction fires. The two must match: the snap happens exactly when
/// the slide into the clone range has finished.
pub const SLIDE_DURATION: Duration = Duration::from_millis(650);

/// Quiet window after the last resize event before layout is recomputed.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Minimum horizontal drag distance, in cells, for a release to count as a
/// swipe.
pub const SWIPE_DISTANCE: f32 = 5.0;

/// Minimum drag velocity, in cells per millisecond, for a short drag to
/// still count as a swipe.
pub const SWIPE_VELOCITY: f32 = 0.03;

/// Viewport width thresholds selecting how many cards are shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// At or above this width, three cards are visible.
    pub wide: u16,
    /// At or above this width (but below `wide`), two cards are visible.
    pub medium: u16,
}

impl Breakpoints {
    /// Defaults tuned for terminal column counts.
    pub const TERMINAL: Breakpoints = Breakpoints {
        wide: 120,
        medium: 80,
    };

    /// Number of cards visible at the given viewport width.
    pub fn cards_per_view(&self, width: u16) -> usize {
        if width >= self.wide {
            3
        } else if width >= self.medium {
            2
        } else {
            1
        }
    }
}

/// Uniform card geometry of the strip at the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripGeometry {
    pub card_width: u16,
    pub gap: u16,
}

impl StripGeometry {
    const GAP: u16 = 2;
    const MIN_CARD_WIDTH: u16 = 14;

    /// Size cards so that `cards_per_view` of them fill the viewport.
    pub fn for_viewport(width: u16, cards_per_view: usize) -> Self {
        let cards = cards_per_view.max(1) as u16;
        let pitch = (width / cards).max(Self::MIN_CARD_WIDTH + Self::GAP);
        StripGeometry {
            card_width: pitch - Self::GAP,
            gap: Self::GAP,
        }
    }

    /// Left edge of the slot at `index`, in strip-local cells.
    pub fn item_left(&self, index: usize) -> f32 {
        index as f32 * (self.card_width + self.gap) as f32
    }

    /// Distance from one card's left edge to the next.
    pub fn pitch(&self) -> f32 {
        (self.card_width + self.gap) as f32
    }
}

/// Strip translation that centers the slot at `index` in the viewport.
pub fn compute_offset(index: usize, geometry: StripGeometry, viewport_width: u16) -> f32 {
    let card_center = geometry.item_left(index) + geometry.card_width as f32 / 2.0;
    viewport_width as f32 / 2.0 - card_center
}

/// One entry of the padded strip.
#[derive(Debug, Clone)]
pub struct CardSlot {
    /// Ordinal of the original card this slot shows.
    pub original: usize,
    /// Stable identity key shared with the original.
    pub key: String,
    /// Marker distinguishing clones from originals; clones render the same.
    pub is_clone: bool,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Tween {
    fn value(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        // ease-out cubic
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingResize {
    due: Instant,
    width: u16,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_column: u16,
    started: Instant,
}

/// The carousel state machine.
///
/// Constructed disabled when the card list is empty; every operation on a
/// disabled carousel is a no-op.
#[derive(Debug)]
pub struct Carousel {
    slots: Vec<CardSlot>,
    total: usize,
    current: usize,
    cards_per_view: usize,
    viewport_width: u16,
    breakpoints: Breakpoints,
    geometry: StripGeometry,
    key_to_index: HashMap<String, usize>,
    offset: f32,
    tween: Option<Tween>,
    pending_snap: Option<Instant>,
    pending_resize: Option<PendingResize>,
    drag: Option<Drag>,
}

impl Carousel {
    /// Build the padded strip from the original cards' identity keys.
    pub fn new(keys: Vec<String>, viewport_width: u16, breakpoints: Breakpoints) -> Self {
        let total = keys.len();

        let mut key_to_index = HashMap::with_capacity(total);
        for (i, key) in keys.iter().enumerate() {
            key_to_index.entry(key.clone()).or_insert(i);
        }

        // Clones ahead, originals in the middle, clones behind: 3N slots.
        let mut slots = Vec::with_capacity(total * 3);
        for set in 0..3 {
            for (i, key) in keys.iter().enumerate() {
                slots.push(CardSlot {
                    original: i,
                    key: key.clone(),
                    is_clone: set != 1,
                });
            }
        }

        let cards_per_view = breakpoints.cards_per_view(viewport_width);
        let geometry = StripGeometry::for_viewport(viewport_width, cards_per_view);
        let current = total;
        let offset = if total > 0 {
            compute_offset(current, geometry, viewport_width)
        } else {
            0.0
        };

        Self {
            slots,
            total,
            current,
            cards_per_view,
            viewport_width,
            breakpoints,
            geometry,
            key_to_index,
            offset,
            tween: None,
            pending_snap: None,
            pending_resize: None,
            drag: None,
        }
    }

    /// False when the carousel was built with no cards.
    pub fn is_enabled(&self) -> bool {
        self.total > 0
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Index into the padded strip of the active slot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    pub fn geometry(&self) -> StripGeometry {
        self.geometry
    }

    /// Current strip translation, updated by [`Carousel::tick`] while a
    /// slide is in flight.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    /// Whether the given strip slot is the active one.
    pub fn is_active(&self, slot: usize) -> bool {
        self.is_enabled() && slot == self.current
    }

    /// Ordinal of the active original card, i.e. the active dot indicator.
    pub fn active_dot(&self) -> Option<usize> {
        if !self.is_enabled() {
            return None;
        }
        let n = self.total as i64;
        Some((self.current as i64 - n).rem_euclid(n) as usize)
    }

    /// True while a slide, a pending correction, or a pending resize is
    /// outstanding; callers poll faster in that state.
    pub fn is_idle(&self) -> bool {
        self.tween.is_none() && self.pending_snap.is_none() && self.pending_resize.is_none()
    }

    /// Advance to the next card (animated). Landing in the trailing clone
    /// range schedules the deferred wrap correction.
    pub fn next(&mut self, now: Instant) {
        self.step(1, now);
    }

    /// Go back one card (animated). Landing in the leading clone range
    /// schedules the deferred wrap correction.
    pub fn prev(&mut self, now: Instant) {
        self.step(-1, now);
    }

    fn step(&mut self, delta: i64, now: Instant) {
        if !self.is_enabled() {
            return;
        }
        let span = (self.total * 3) as i64;
        let mut index = self.current as i64 + delta;
        // Hard bound: only reachable when a full cycle of navigation outran
        // the correction deadline. Shifting by N keeps the active original
        // unchanged.
        if index < 0 {
            index += self.total as i64;
        }
        if index >= span {
            index -= self.total as i64;
        }
        self.current = index as usize;
        self.recompute_layout(false, now);
        // Single-slot scheduler: replace whatever correction was pending.
        self.pending_snap = self.in_clone_range().then(|| now + SLIDE_DURATION);
    }

    fn in_clone_range(&self) -> bool {
        self.current < self.total || self.current >= self.total * 2
    }

    /// Index normalized into the original range, preserving the active dot.
    fn normalized(&self) -> usize {
        let n = self.total as i64;
        (self.total as i64 + (self.current as i64 - n).rem_euclid(n)) as usize
    }

    /// Jump straight to original card `index` (animated). Used by dot
    /// clicks and by card clicks resolved through the identity key.
    pub fn go_to_slide(&mut self, index: usize, now: Instant) {
        if !self.is_enabled() || index >= self.total {
            return;
        }
        self.current = self.total + index;
        self.pending_snap = None;
        self.recompute_layout(false, now);
    }

    /// Resolve a card click by identity key and center that card. Returns
    /// false when the key matches no original card (the click is ignored).
    pub fn click_card(&mut self, key: &str, now: Instant) -> bool {
        let Some(&index) = self.key_to_index.get(key) else {
            return false;
        };
        self.go_to_slide(index, now);
        true
    }

    /// Re-center the strip on the active slot. `instant` suppresses the
    /// slide animation entirely (wrap correction and resize).
    pub fn recompute_layout(&mut self, instant: bool, now: Instant) {
        if !self.is_enabled() {
            return;
        }
        if let Some(tween) = self.tween {
            self.offset = tween.value(now);
        }
        let target = compute_offset(self.current, self.geometry, self.viewport_width);
        if instant {
            self.tween = None;
            self.offset = target;
        } else {
            self.tween = Some(Tween {
                from: self.offset,
                to: target,
                started: now,
                duration: SLIDE_DURATION,
            });
        }
    }

    /// Record a viewport resize; the relayout fires after the debounce
    /// window, replacing any earlier pending resize.
    pub fn on_resize(&mut self, width: u16, now: Instant) {
        if !self.is_enabled() {
            return;
        }
        self.pending_resize = Some(PendingResize {
            due: now + RESIZE_DEBOUNCE,
            width,
        });
    }

    fn apply_resize(&mut self, width: u16, now: Instant) {
        self.viewport_width = width;
        let cards = self.breakpoints.cards_per_view(width);
        if cards != self.cards_per_view {
            self.cards_per_view = cards;
        }
        self.geometry = StripGeometry::for_viewport(width, self.cards_per_view);
        self.recompute_layout(true, now);
    }

    /// Begin a pointer drag on the strip.
    pub fn drag_start(&mut self, column: u16, now: Instant) {
        if !self.is_enabled() {
            return;
        }
        self.drag = Some(Drag {
            start_column: column,
            started: now,
        });
    }

    /// End a pointer drag. Returns true when the release classified as a
    /// swipe and navigation happened; a false return means the gesture
    /// should be treated as a plain click.
    pub fn drag_end(&mut self, column: u16, now: Instant) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if !self.is_enabled() {
            return false;
        }
        let delta = drag.start_column as f32 - column as f32;
        let elapsed_ms = now
            .saturating_duration_since(drag.started)
            .as_millis()
            .max(1) as f32;
        let velocity = delta.abs() / elapsed_ms;
        if delta.abs() > SWIPE_DISTANCE || velocity > SWIPE_VELOCITY {
            if delta > 0.0 {
                self.next(now);
            } else {
                self.prev(now);
            }
            true
        } else {
            false
        }
    }

    /// Resolve the slot under a strip-local column at the current offset.
    /// Returns the slot index and slot, or None in a gap or outside the
    /// strip.
    pub fn card_at(&self, column: u16) -> Option<(usize, &CardSlot)> {
        if !self.is_enabled() {
            return None;
        }
        let x = column as f32 - self.offset;
        if x < 0.0 {
            return None;
        }
        let pitch = self.geometry.pitch();
        let index = (x / pitch) as usize;
        let within = x - index as f32 * pitch;
        if index < self.slots.len() && within < self.geometry.card_width as f32 {
            Some((index, &self.slots[index]))
        } else {
            None
        }
    }

    /// Drive deferred work: slide animation, wrap correction, resize
    /// debounce. Returns true when state changed and a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let mut dirty = false;

        if let Some(tween) = self.tween {
            self.offset = tween.value(now);
            if tween.finished(now) {
                self.tween = None;
            }
            dirty = true;
        }

        if let Some(due) = self.pending_snap {
            if now >= due {
                self.pending_snap = None;
                self.current = self.normalized();
                self.recompute_layout(true, now);
                dirty = true;
            }
        }

        if let Some(pending) = self.pending_resize {
            if now >= pending.due {
                self.pending_resize = None;
                self.apply_resize(pending.width, now);
                dirty = true;
            }
        }

        dirty
    }
}

use std::time::Instant;

use ratatui::layout::Rect;

use crate::content::catalog::UiStrings;
use crate::content::model::Presentation;
use crate::content::{Lang, PortfolioContent};
use crate::ui::carousel::{Breakpoints, Carousel};
use crate::ui::theme::Theme;

/// Number of timeline entries shown while the timeline is collapsed.
pub const TIMELINE_COLLAPSED: usize = 3;

/// The navigable sections, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Timeline,
    Collaborations,
    Presentations,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Timeline,
        Section::Collaborations,
        Section::Presentations,
        Section::Contact,
    ];

    /// Localized navbar title for this section.
    pub fn title(self, strings: &UiStrings) -> &str {
        match self {
            Section::Home => &strings.section_titles.home,
            Section::About => &strings.section_titles.about,
            Section::Timeline => &strings.section_titles.timeline,
            Section::Collaborations => &strings.section_titles.collaborations,
            Section::Presentations => &strings.section_titles.presentations,
            Section::Contact => &strings.section_titles.contact,
        }
    }
}

/// The two carousel instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    Collaborations,
    Presentations,
}

/// Mouse-sensitive regions recorded by the renderer each frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Navbar labels, paired with the section index they activate.
    pub nav_items: Vec<(Rect, usize)>,
    pub lang_toggle: Option<Rect>,
    pub theme_toggle: Option<Rect>,
    pub timeline_toggle: Option<Rect>,
    pub collaborations: StripHits,
    pub presentations: StripHits,
    /// The modal body; clicks outside it close the overlay.
    pub modal: Option<Rect>,
    pub modal_close: Option<Rect>,
}

/// Mouse-sensitive regions of one carousel.
#[derive(Debug, Clone, Default)]
pub struct StripHits {
    pub strip: Option<Rect>,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    /// Dot indicators, paired with the original card ordinal they jump to.
    pub dots: Vec<(Rect, usize)>,
}

/// Application state: language, theme, section navigation, the two
/// carousels, and the presentation overlay.
pub struct App {
    pub content: PortfolioContent,
    pub lang: Lang,
    pub theme: &'static Theme,
    /// Index into [`Section::ALL`]; drives the navbar highlight.
    pub section: usize,
    pub timeline_expanded: bool,
    pub collaborations: Carousel,
    pub presentations: Carousel,
    /// Identity key of the presentation shown in the overlay, if open.
    /// Storing the key (not the text) keeps the overlay correct across a
    /// language switch.
    pub modal: Option<String>,
    pub should_quit: bool,
    pub hits: HitMap,
    pub drag_strip: Option<Strip>,
}

impl App {
    pub fn new(
        content: PortfolioContent,
        lang: Lang,
        theme: &'static Theme,
        terminal_width: u16,
    ) -> Self {
        let strip_width = Self::strip_viewport(terminal_width);
        let collaborations = Carousel::new(
            content.collaboration_keys(),
            strip_width,
            Breakpoints::TERMINAL,
        );
        let presentations = Carousel::new(
            content.presentation_keys(),
            strip_width,
            Breakpoints::TERMINAL,
        );
        Self {
            content,
            lang,
            theme,
            section: 0,
            timeline_expanded: false,
            collaborations,
            presentations,
            modal: None,
            should_quit: false,
            hits: HitMap::default(),
            drag_strip: None,
        }
    }

    /// Width of the carousel strip viewport for a given terminal width
    /// (block borders and margins subtracted). The renderer lays strips out
    /// with the same margins, so model math and drawing agree.
    pub fn strip_viewport(terminal_width: u16) -> u16 {
        terminal_width.saturating_sub(4)
    }

    pub fn active_section(&self) -> Section {
        Section::ALL[self.section]
    }

    /// Localized UI strings for the current language.
    pub fn strings(&self) -> &UiStrings {
        self.content.strings(self.lang)
    }

    pub fn next_section(&mut self) {
        self.section = (self.section + 1) % Section::ALL.len();
    }

    pub fn prev_section(&mut self) {
        self.section = self
            .section
            .checked_sub(1)
            .unwrap_or(Section::ALL.len() - 1);
    }

    pub fn go_to_section(&mut self, index: usize) {
        if index < Section::ALL.len() {
            self.section = index;
        }
    }

    /// Switch display language. Carousel identity keys are derived from
    /// language-independent fields, so no carousel state needs touching.
    pub fn toggle_language(&mut self) {
        self.lang = self.lang.toggle();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.counterpart();
    }

    /// Timeline show-more/show-less; only meaningful on the timeline
    /// section.
    pub fn toggle_timeline(&mut self) {
        if self.active_section() == Section::Timeline {
            self.timeline_expanded = !self.timeline_expanded;
        }
    }

    /// Number of timeline entries currently visible.
    pub fn visible_timeline_len(&self) -> usize {
        if self.timeline_expanded {
            self.content.timeline.len()
        } else {
            self.content.timeline.len().min(TIMELINE_COLLAPSED)
        }
    }

    fn carousel_mut(&mut self, strip: Strip) -> &mut Carousel {
        match strip {
            Strip::Collaborations => &mut self.collaborations,
            Strip::Presentations => &mut self.presentations,
        }
    }

    fn strip_hits(&self, strip: Strip) -> &StripHits {
        match strip {
            Strip::Collaborations => &self.hits.collaborations,
            Strip::Presentations => &self.hits.presentations,
        }
    }

    /// Arrow-key navigation. Both carousels respond regardless of which
    /// section is on screen; there is no focus scoping.
    pub fn nav_prev(&mut self, now: Instant) {
        self.collaborations.prev(now);
        self.presentations.prev(now);
    }

    pub fn nav_next(&mut self, now: Instant) {
        self.collaborations.next(now);
        self.presentations.next(now);
    }

    /// Open the overlay for the presentation carousel's active card.
    /// Only acts on the presentations section.
    pub fn open_modal_for_active(&mut self) {
        if self.active_section() != Section::Presentations {
            return;
        }
        if let Some(dot) = self.presentations.active_dot() {
            if let Some(pres) = self.content.presentations.get(dot) {
                self.modal = Some(pres.key().to_string());
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// The presentation behind the open overlay, if any.
    pub fn modal_presentation(&self) -> Option<&Presentation> {
        self.modal
            .as_deref()
            .and_then(|key| self.content.presentation_by_key(key))
    }

    /// Begin a pointer drag over one of the strips.
    pub fn begin_drag(&mut self, strip: Strip, column: u16, now: Instant) {
        self.drag_strip = Some(strip);
        self.carousel_mut(strip).drag_start(column, now);
    }

    /// Finish a pointer drag: a swipe navigates, anything else is resolved
    /// as a card click through the identity key. Clicking the name row of a
    /// collaboration card is left to its hyperlink and ignored here.
    pub fn end_drag(&mut self, column: u16, row: u16, now: Instant) {
        let Some(strip) = self.drag_strip.take() else {
            return;
        };
        if self.carousel_mut(strip).drag_end(column, now) {
            return;
        }

        let Some(rect) = self.strip_hits(strip).strip else {
            return;
        };
        // Cards occupy the top rows of the strip area only.
        if row >= rect.y + rect.height.min(7) {
            return;
        }
        if strip == Strip::Collaborations && row == rect.y + 1 {
            return;
        }
        let local = column.saturating_sub(rect.x);
        let key = self
            .carousel_mut(strip)
            .card_at(local)
            .map(|(_, slot)| slot.key.clone());
        let Some(key) = key else {
            return;
        };

        match strip {
            Strip::Collaborations => {
                self.collaborations.click_card(&key, now);
            }
            Strip::Presentations => {
                if self.presentations.click_card(&key, now) {
                    self.modal = Some(key);
                }
            }
        }
    }

    /// Record a terminal resize for both carousels (debounced internally).
    pub fn on_resize(&mut self, terminal_width: u16, now: Instant) {
        let width = Self::strip_viewport(terminal_width);
        self.collaborations.on_resize(width, now);
        self.presentations.on_resize(width, now);
    }

    /// Drive deferred carousel work. Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let a = self.collaborations.tick(now);
        let b = self.presentations.tick(now);
        a || b
    }

    /// True while either carousel is sliding or has deferred work pending;
    /// the event loop polls faster in that state.
    pub fn is_animating(&self) -> bool {
        !self.collaborations.is_idle() || !self.presentations.is_idle()
    }
}

//! Application state tests
//!
//! Tests for application state management: language and theme toggling,
//! section navigation, the presentation overlay, and the interaction
//! between the app shell and its carousels.

use std::time::Instant;

use folio::content::{Lang, PortfolioContent};
use folio::ui::app::{Section, Strip};
use folio::ui::theme::Theme;
use folio::ui::App;

/// Helper to create a test app from the embedded content at a wide viewport
fn create_test_app() -> App {
    let content = PortfolioContent::load_embedded().expect("embedded content is valid");
    App::new(content, Lang::En, Theme::default_theme(), 134)
}

#[test]
fn test_new_app_starts_on_home_in_english() {
    let app = create_test_app();
    assert_eq!(app.active_section(), Section::Home);
    assert_eq!(app.lang, Lang::En);
    assert_eq!(app.theme.name, "Dark");
    assert!(!app.should_quit);
}

#[test]
fn test_carousels_start_on_first_original_card() {
    let app = create_test_app();
    let n = app.content.collaborations.len();
    assert_eq!(app.collaborations.current_index(), n);
    assert_eq!(app.collaborations.active_dot(), Some(0));

    let n = app.content.presentations.len();
    assert_eq!(app.presentations.current_index(), n);
    assert_eq!(app.presentations.active_dot(), Some(0));
}

#[test]
fn test_section_navigation_wraps() {
    let mut app = create_test_app();

    for _ in 0..Section::ALL.len() {
        app.next_section();
    }
    assert_eq!(app.active_section(), Section::Home);

    app.prev_section();
    assert_eq!(app.active_section(), Section::Contact);
}

#[test]
fn test_language_toggle_changes_strings_but_not_keys() {
    let mut app = create_test_app();
    let title_en = app.strings().section_titles.about.clone();
    let keys_before = app.content.collaboration_keys();

    app.toggle_language();
    assert_eq!(app.lang, Lang::It);
    assert_ne!(app.strings().section_titles.about, title_en);
    assert_eq!(app.content.collaboration_keys(), keys_before);

    app.toggle_language();
    assert_eq!(app.lang, Lang::En);
    assert_eq!(app.strings().section_titles.about, title_en);
}

#[test]
fn test_carousel_click_still_resolves_after_language_switch() {
    let mut app = create_test_app();
    let now = Instant::now();
    let key = app.content.collaborations[4].key().to_string();

    app.toggle_language();
    assert!(app.collaborations.click_card(&key, now));
    assert_eq!(app.collaborations.active_dot(), Some(4));
}

#[test]
fn test_theme_toggle_flips_between_dark_and_light() {
    let mut app = create_test_app();
    assert_eq!(app.theme.name, "Dark");
    app.toggle_theme();
    assert_eq!(app.theme.name, "Light");
    app.toggle_theme();
    assert_eq!(app.theme.name, "Dark");
}

#[test]
fn test_arrow_navigation_drives_both_carousels() {
    let mut app = create_test_app();
    let now = Instant::now();

    app.nav_next(now);
    assert_eq!(app.collaborations.active_dot(), Some(1));
    assert_eq!(app.presentations.active_dot(), Some(1));

    app.nav_prev(now);
    assert_eq!(app.collaborations.active_dot(), Some(0));
    assert_eq!(app.presentations.active_dot(), Some(0));
}

#[test]
fn test_modal_opens_only_on_presentations_section() {
    let mut app = create_test_app();

    // On Home, Enter does nothing.
    app.open_modal_for_active();
    assert!(app.modal.is_none());

    while app.active_section() != Section::Presentations {
        app.next_section();
    }
    app.open_modal_for_active();
    let key = app.modal.clone().expect("overlay open");
    assert_eq!(key, app.content.presentations[0].key());

    let pres = app.modal_presentation().expect("resolves");
    assert_eq!(pres.key(), key);

    app.close_modal();
    assert!(app.modal.is_none());
}

#[test]
fn test_modal_survives_language_switch() {
    let mut app = create_test_app();
    let now = Instant::now();
    while app.active_section() != Section::Presentations {
        app.next_section();
    }
    app.nav_next(now);
    app.open_modal_for_active();
    let key = app.modal.clone().expect("overlay open");

    app.toggle_language();
    let pres = app.modal_presentation().expect("still resolves");
    assert_eq!(pres.key(), key);
}

#[test]
fn test_timeline_toggle_is_scoped_to_its_section() {
    let mut app = create_test_app();

    // Not on the timeline section: toggle is a no-op.
    app.toggle_timeline();
    assert!(!app.timeline_expanded);
    assert_eq!(app.visible_timeline_len(), 3);

    while app.active_section() != Section::Timeline {
        app.next_section();
    }
    app.toggle_timeline();
    assert!(app.timeline_expanded);
    assert_eq!(app.visible_timeline_len(), app.content.timeline.len());

    app.toggle_timeline();
    assert_eq!(app.visible_timeline_len(), 3);
}

#[test]
fn test_resize_reaches_both_carousels() {
    let mut app = create_test_app();
    let t0 = Instant::now();

    assert_eq!(app.collaborations.cards_per_view(), 3);
    app.on_resize(74, t0);
    app.tick(t0 + std::time::Duration::from_millis(250));

    assert_eq!(app.collaborations.cards_per_view(), 1);
    assert_eq!(app.presentations.cards_per_view(), 1);
}

#[test]
fn test_drag_on_presentations_strip_without_hits_is_safe() {
    let mut app = create_test_app();
    let t0 = Instant::now();

    // Before any render there are no recorded strip rects; a stray release
    // must not navigate or open the overlay.
    app.begin_drag(Strip::Presentations, 30, t0);
    app.end_drag(29, 5, t0 + std::time::Duration::from_millis(400));
    assert!(app.modal.is_none());
    assert_eq!(app.presentations.active_dot(), Some(0));
}

#[test]
fn test_is_animating_follows_carousel_activity() {
    let mut app = create_test_app();
    let t0 = Instant::now();
    assert!(!app.is_animating());

    app.nav_next(t0);
    assert!(app.is_animating());

    app.tick(t0 + std::time::Duration::from_millis(700));
    assert!(!app.is_animating());
}

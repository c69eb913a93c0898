//! CLI preference resolution and content loading tests

use folio::content::{Lang, PortfolioContent};
use folio::ui::config::Config;
use folio::ui::theme::Theme;
use tempfile::TempDir;

/// The embedded content must resolve for both carousels before the UI can
/// be constructed.
#[test]
fn test_content_loads_with_cards_for_both_carousels() {
    let content = PortfolioContent::load_embedded().expect("embedded content is valid");

    assert!(!content.collaboration_keys().is_empty());
    assert!(!content.presentation_keys().is_empty());
    assert_eq!(
        content.collaboration_keys().len(),
        content.collaborations.len()
    );
    assert_eq!(
        content.presentation_keys().len(),
        content.presentations.len()
    );
}

/// Saved preferences round-trip through the config file.
#[test]
fn test_preferences_roundtrip_through_config_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("config.json");

    let config = Config::snapshot(Lang::It, Theme::by_name("Light").expect("theme"));
    config.save_to(&path).expect("save");

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded.language, Lang::It);
    assert_eq!(loaded.resolved_theme().name, "Light");
}

/// A corrupt preferences file falls back to defaults instead of failing.
#[test]
fn test_corrupt_preferences_fall_back_to_defaults() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "not valid json").expect("write");

    let result = Config::load_from(&path);
    assert!(result.is_err(), "explicit load reports the parse error");

    // The application-level loader swallows the error and uses defaults,
    // the same path `Config::load` takes.
    let config = Config::load_from(&path).unwrap_or_default();
    assert_eq!(config.language, Lang::En);
    assert_eq!(config.resolved_theme().name, "Dark");
}

/// Unknown saved names resolve to the defaults at startup.
#[test]
fn test_unknown_saved_names_resolve_to_defaults() {
    let lang = Lang::from_code("zz").unwrap_or_default();
    assert_eq!(lang, Lang::En);

    let theme = Theme::by_name("Solarized").unwrap_or_else(Theme::default_theme);
    assert_eq!(theme.name, "Dark");
}

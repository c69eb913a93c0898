//! # Theme System
//!
//! Color themes for the Folio TUI, mirroring the light/dark pair of a
//! typical personal site. Rendering code never hardcodes a
//! `ratatui::style::Color`; it goes through the semantic fields of the
//! active [`Theme`], which the user can flip at runtime with the theme
//! toggle. The selected name is one of the two persisted preference flags.
//!
//! The palettes are Catppuccin: Mocha for [`Theme::DARK`], Latte for
//! [`Theme::LIGHT`].

use ratatui::style::Color;

/// Semantic color roles used by the renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name shown in the header and stored in the preferences file.
    pub name: &'static str,
    /// Main background.
    pub bg: Color,
    /// Primary text (card bodies, paragraphs).
    pub fg: Color,
    /// Muted text (hints, separators, inactive dots).
    pub fg_dim: Color,
    /// Active card border, navbar highlight, active dot.
    pub accent: Color,
    /// Section titles and card names.
    pub secondary: Color,
    /// Tag chips.
    pub tag: Color,
    /// The overlay close button.
    pub danger: Color,
    /// Background fill of the active card.
    pub card_bg: Color,
}

impl Theme {
    /// Dark theme, default. Catppuccin Mocha.
    pub const DARK: Theme = Theme {
        name: "Dark",
        bg: Color::Rgb(30, 30, 46),        // base
        fg: Color::Rgb(205, 214, 244),     // text
        fg_dim: Color::Rgb(108, 112, 134), // overlay0
        accent: Color::Rgb(137, 180, 250), // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        tag: Color::Rgb(166, 227, 161),    // green
        danger: Color::Rgb(243, 139, 168), // red
        card_bg: Color::Rgb(69, 71, 90),   // surface1
    };

    /// Light theme. Catppuccin Latte.
    pub const LIGHT: Theme = Theme {
        name: "Light",
        bg: Color::Rgb(239, 241, 245),      // base
        fg: Color::Rgb(76, 79, 105),        // text
        fg_dim: Color::Rgb(156, 160, 176),  // overlay0
        accent: Color::Rgb(30, 102, 245),   // blue
        secondary: Color::Rgb(223, 142, 29), // yellow
        tag: Color::Rgb(64, 160, 43),       // green
        danger: Color::Rgb(210, 15, 57),    // red
        card_bg: Color::Rgb(188, 192, 204), // surface1
    };

    /// Both built-in themes, default first.
    pub fn all() -> [&'static Theme; 2] {
        [&Theme::DARK, &Theme::LIGHT]
    }

    /// Look a theme up by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        Theme::all()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The default theme (Dark).
    pub fn default_theme() -> &'static Theme {
        &Theme::DARK
    }

    /// The other half of the light/dark pair.
    pub fn counterpart(&self) -> &'static Theme {
        if self.name == Theme::DARK.name {
            &Theme::LIGHT
        } else {
            &Theme::DARK
        }
    }
}

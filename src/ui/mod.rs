//! # UI Module
//!
//! This module provides the terminal user interface components for Folio.
//!
//! ## Components
//!
//! - [`App`] - Application state management (language, theme, sections, carousels)
//! - [`carousel`] - The infinite-loop carousel state machine
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`theme`] - Light/dark color themes
//! - [`config`] - Preference persistence (language + theme)
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  Name — Tagline                    [🇬🇧] [Dark]  │
//! │  Home  About  Experience  ...                   │
//! ├─────────────────────────────────────────────────┤
//! │                                                 │
//! │   Active section body                           │
//! │   (carousel sections show the sliding strip,    │
//! │    dot indicators, and ‹ › controls)            │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//!
//! - Section navigation with navbar highlighting
//! - Two independent infinite carousels with wrap correction
//! - Pointer-drag swipe, card/dot clicks, keyboard arrows
//! - Presentation detail overlay
//! - Runtime language and theme switching

pub mod app;
pub mod carousel;
pub mod config;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;

//! Colour themes for the summary screen.
//!
//! A [`Theme`] is built from a small palette of base colours, so the three
//! variants differ only in the palette they start from.

use ratatui::style::{Color, Modifier, Style};

/// Base colours a theme variant is derived from.
struct Palette {
    accent: Color,
    fg: Color,
    fg_dim: Color,
    fg_muted: Color,
    bold_text: bool,
}

/// Terminal background detected from the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Read the terminal background from `COLORFGBG` ("foreground;background").
///
/// Background indices 0–6 count as dark, 7–15 as light. Anything missing or
/// unparseable defaults to dark, the safer choice for colour contrast.
pub fn detect_background() -> BackgroundType {
    let Ok(val) = std::env::var("COLORFGBG") else {
        return BackgroundType::Dark;
    };
    match val.split(';').next_back().and_then(|bg| bg.parse::<u8>().ok()) {
        Some(bg) if bg <= 6 => BackgroundType::Dark,
        Some(_) => BackgroundType::Light,
        None => BackgroundType::Dark,
    }
}

/// All styles the summary view draws with.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub text: Style,
    pub dim: Style,
    pub label: Style,
    pub value: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self::from_palette(Palette {
            accent: Color::Cyan,
            fg: Color::White,
            fg_dim: Color::Gray,
            fg_muted: Color::DarkGray,
            bold_text: true,
        })
    }

    /// Light-background terminal theme. Dark text against a white or
    /// light-grey canvas.
    pub fn light() -> Self {
        Self::from_palette(Palette {
            accent: Color::Blue,
            fg: Color::Black,
            fg_dim: Color::DarkGray,
            fg_muted: Color::Gray,
            bold_text: true,
        })
    }

    /// Classic theme restricted to the plain 8-colour ANSI palette, without
    /// bold modifiers.
    pub fn classic() -> Self {
        Self::from_palette(Palette {
            accent: Color::Cyan,
            fg: Color::White,
            fg_dim: Color::Gray,
            fg_muted: Color::DarkGray,
            bold_text: false,
        })
    }

    /// Pick dark or light based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a theme by its configured name. Unknown names fall back to
    /// [`Self::auto_detect`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    fn from_palette(p: Palette) -> Self {
        let bold = |style: Style| {
            if p.bold_text {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            }
        };
        Self {
            header: bold(Style::default().fg(p.accent)),
            text: Style::default().fg(p.fg),
            dim: Style::default().fg(p.fg_muted),
            label: Style::default().fg(p.fg_dim),
            value: bold(Style::default().fg(p.fg)),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),
            table_row: Style::default().fg(p.fg),
            table_row_alt: Style::default().fg(p.fg_dim),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Style for the unrealized-profit figure: `success` when positive,
    /// `error` when negative, plain `value` at exactly zero.
    pub fn profit_style(&self, profit: f64) -> Style {
        if profit > 0.0 {
            self.success
        } else if profit < 0.0 {
            self.error
        } else {
            self.value
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

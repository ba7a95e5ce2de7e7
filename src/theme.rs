//! Light and dark palettes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const LIGHT: Color = Color::Rgb(0xf3, 0xf2, 0xe5);
const DARK: Color = Color::Rgb(0x24, 0x2c, 0x40);
const SEPARATOR: Color = Color::Rgb(0xaa, 0xaa, 0xaa);
const PLAY_AGAIN: Color = Color::Rgb(0x66, 0x77, 0xff);

/// Resolved color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
}

/// Theme as requested by the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeChoice {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the terminal's background.
    #[default]
    Auto,
}

impl ThemeChoice {
    /// Resolves `Auto` from a `COLORFGBG` value such as `"15;0"`.
    ///
    /// The last field is the background palette index; 7 and 15 are the
    /// light greys and whites. Anything else, or no hint, is dark.
    #[instrument]
    pub fn resolve(self, colorfgbg: Option<&str>) -> Theme {
        match self {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Auto => {
                let background = colorfgbg
                    .and_then(|v| v.rsplit(';').next())
                    .and_then(|bg| bg.trim().parse::<u8>().ok());
                debug!(?background, "Resolving theme from terminal background");
                match background {
                    Some(7) | Some(15) => Theme::Light,
                    _ => Theme::Dark,
                }
            }
        }
    }
}

/// Colors used to draw the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Status text and marks.
    pub text: Color,
    /// Grid lines.
    pub border: Color,
    /// Line between the two seats.
    pub separator: Color,
    /// Play Again button fill.
    pub play_again_bg: Color,
    /// Play Again button label.
    pub play_again_fg: Color,
}

/// Palette for `theme`.
pub fn palette(theme: Theme) -> Palette {
    let (background, text) = match theme {
        Theme::Light => (LIGHT, DARK),
        Theme::Dark => (DARK, LIGHT),
    };
    Palette {
        background,
        text,
        border: text,
        separator: SEPARATOR,
        play_again_bg: PLAY_AGAIN,
        play_again_fg: LIGHT,
    }
}

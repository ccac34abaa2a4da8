use crate::presentation::rating_color;
use crate::scoring::Rating;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Draw ratings with ★/☆ instead of ASCII
    pub unicode: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, unicode: bool) -> Self {
        Self { color, unicode }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Plain output: ASCII-only, no colors
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            unicode: false,
        }
    }
}

/// Applies the configured styling to report text.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    config: FormattingConfig,
    color: bool,
}

impl Styler {
    pub fn new(config: FormattingConfig) -> Self {
        Self {
            config,
            color: config.color.should_use_color(),
        }
    }

    pub fn config(&self) -> FormattingConfig {
        self.config
    }

    pub fn header(&self, text: &str) -> String {
        if self.color {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color `text` with the chart color of `rating`.
    pub fn rating(&self, rating: Rating, text: &str) -> String {
        if self.color {
            text.color(rating_terminal_color(rating)).to_string()
        } else {
            text.to_string()
        }
    }

    /// Five-slot bar for a rating, e.g. `★★★☆☆` or `[###--]`.
    pub fn stars(&self, rating: Rating) -> String {
        let filled = usize::from(rating.value());
        let empty = usize::from(Rating::MAX.value()) - filled;
        let bar = if self.config.unicode {
            format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
        } else {
            format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
        };
        self.rating(rating, &bar)
    }
}

/// Terminal counterpart of the chart palette (red for 5 down to blue for 1).
pub fn rating_terminal_color(rating: Rating) -> Color {
    let hex = rating_color(rating).trim_start_matches('#');
    let channel = |at: usize| {
        hex.get(at..at + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    Color::TrueColor {
        r: channel(0),
        g: channel(2),
        b: channel(4),
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

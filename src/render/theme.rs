//! Appearance maps for classified tokens.
//!
//! A [`Theme`] is the style half of the input contract: the caller supplies
//! (or picks) one and its sink applies the returned [`Style`] per token.
//! Colors are plain RGB values so no presentation toolkit leaks in here.

use crate::lexer::TokenKind;

use super::frame::FrameLine;

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used by most sinks.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Presentation attributes for one token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub italic: bool,
}

impl Style {
    const fn fg(r: u8, g: u8, b: u8) -> Self {
        Self {
            fg: Rgb::new(r, g, b),
            italic: false,
        }
    }

    const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// Maps token kinds to styles.
#[derive(Debug, Clone)]
pub struct Theme {
    name: &'static str,
    keyword: Style,
    builtin: Style,
    comment: Style,
    string: Style,
    number: Style,
    plain: Style,
}

impl Theme {
    /// The stock dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            keyword: Style::fg(0xc5, 0x86, 0xc0),
            builtin: Style::fg(0x56, 0x9c, 0xd6),
            comment: Style::fg(0x6a, 0x99, 0x55).italic(),
            string: Style::fg(0xce, 0x91, 0x78),
            number: Style::fg(0xb5, 0xce, 0xa8),
            plain: Style::fg(0xd4, 0xd4, 0xd4),
        }
    }

    /// The stock light theme.
    pub fn light() -> Self {
        Self {
            name: "light",
            keyword: Style::fg(0xaf, 0x00, 0xdb),
            builtin: Style::fg(0x00, 0x55, 0xaa),
            comment: Style::fg(0x00, 0x80, 0x00).italic(),
            string: Style::fg(0xa3, 0x15, 0x15),
            number: Style::fg(0x09, 0x86, 0x58),
            plain: Style::fg(0x1e, 0x1e, 0x1e),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn style_for(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Builtin => self.builtin,
            TokenKind::Comment => self.comment,
            TokenKind::String => self.string,
            TokenKind::Number => self.number,
            TokenKind::Plain => self.plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Zip a frame line's tokens with the theme's styles, ready for a sink.
pub fn styled_spans<'a>(line: &FrameLine<'a>, theme: &Theme) -> Vec<(Style, &'a str)> {
    line.tokens
        .iter()
        .map(|token| (theme.style_for(token.kind), token.text))
        .collect()
}

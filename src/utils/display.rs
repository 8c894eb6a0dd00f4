use colored::{Color, Colorize};
use std::collections::HashMap;
use std::io::{self, Write};

/// Named console styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Title,
    Prompt,
    Error,
    Original,
    Corrected,
    Explanation,
    Rule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub color: Color,
    pub bold: bool,
}

impl Paint {
    pub fn new(color: Color) -> Self {
        Self { color, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Mapping from style to terminal color. A theme without a palette
/// writes text untouched.
#[derive(Debug, Clone)]
pub struct Theme {
    palette: Option<HashMap<Style, Paint>>,
}

impl Theme {
    pub fn colored() -> Self {
        let palette = HashMap::from([
            (Style::Title, Paint::new(Color::Blue).bold()),
            (Style::Prompt, Paint::new(Color::Cyan)),
            (Style::Error, Paint::new(Color::Red)),
            (Style::Original, Paint::new(Color::Yellow)),
            (Style::Corrected, Paint::new(Color::Green)),
            (Style::Explanation, Paint::new(Color::White)),
            (Style::Rule, Paint::new(Color::Magenta)),
        ]);
        Self {
            palette: Some(palette),
        }
    }

    pub fn plain() -> Self {
        Self { palette: None }
    }

    pub fn from_settings(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn paint(&self, style: Style, text: &str) -> String {
        match self.palette.as_ref().and_then(|p| p.get(&style)) {
            Some(paint) => {
                let colored = text.color(paint.color);
                if paint.bold {
                    colored.bold().to_string()
                } else {
                    colored.to_string()
                }
            }
            None => text.to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

pub fn print_banner(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(out, "\n{}", theme.paint(Style::Title, "=== Grammar Checker ==="))?;
    writeln!(
        out,
        "{}",
        theme.paint(Style::Prompt, "Type your text (press Ctrl+C to exit):")
    )
}

pub fn print_prompt(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    write!(out, "\n{}", theme.paint(Style::Prompt, "> "))?;
    out.flush()
}

pub fn print_error(err: &mut impl Write, theme: &Theme, text: &str) -> io::Result<()> {
    writeln!(err, "{}", theme.paint(Style::Error, text))
}

//! Reply formatting
//!
//! Replies are classified line by line against the four section markers.
//! Body lines take the style of the most recent section: rule style under
//! `**Rules:**`, explanation style everywhere else.

use crate::utils::{Style, Theme};
use std::io::{self, Write};

pub const ORIGINAL_MARKER: &str = "**Original:**";
pub const CORRECTED_MARKER: &str = "**Corrected:**";
pub const EXPLANATION_MARKER: &str = "**Explanation:**";
pub const RULES_MARKER: &str = "**Rules:**";

const BODY_INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Ungrouped,
    Original,
    Corrected,
    Explanation,
    Rules,
}

impl Section {
    fn body_style(self) -> Style {
        match self {
            Section::Rules => Style::Rule,
            _ => Style::Explanation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Title label followed by the marker's remaining text
    Labeled {
        label: &'static str,
        body: String,
        style: Style,
    },
    /// Title label alone; the marker's remaining text is dropped
    Header(&'static str),
    Body { text: String, style: Style },
}

/// Classify every non-blank line of `text`.
pub fn format_reply(text: &str) -> Vec<Line> {
    let mut section = Section::Ungrouped;
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let line = raw.trim();

        let formatted = if let Some(rest) = line.strip_prefix(ORIGINAL_MARKER) {
            section = Section::Original;
            Line::Labeled {
                label: "Original: ",
                body: rest.to_string(),
                style: Style::Original,
            }
        } else if let Some(rest) = line.strip_prefix(CORRECTED_MARKER) {
            section = Section::Corrected;
            Line::Labeled {
                label: "Corrected: ",
                body: rest.to_string(),
                style: Style::Corrected,
            }
        } else if line.starts_with(EXPLANATION_MARKER) {
            section = Section::Explanation;
            Line::Header("Explanations:")
        } else if line.starts_with(RULES_MARKER) {
            section = Section::Rules;
            Line::Header("Rules:")
        } else if line.is_empty() {
            continue;
        } else {
            Line::Body {
                text: line.to_string(),
                style: section.body_style(),
            }
        };

        lines.push(formatted);
    }

    lines
}

pub fn write_lines(out: &mut impl Write, theme: &Theme, lines: &[Line]) -> io::Result<()> {
    for line in lines {
        match line {
            Line::Labeled { label, body, style } => writeln!(
                out,
                "\n{}{}",
                theme.paint(Style::Title, label),
                theme.paint(*style, body)
            )?,
            Line::Header(label) => writeln!(out, "\n{}", theme.paint(Style::Title, label))?,
            Line::Body { text, style } => {
                writeln!(out, "{}{}", BODY_INDENT, theme.paint(*style, text))?
            }
        }
    }
    Ok(())
}

/// Format `text` and write it to `out`.
pub fn render_reply(out: &mut impl Write, theme: &Theme, text: &str) -> io::Result<()> {
    write_lines(out, theme, &format_reply(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "**Original:** \"did u get the aws account\"\n\
                          **Corrected:** \"Did you get the AWS account?\"\n\
                          **Explanation:**\n\
                          - \"u\" should be \"you\"\n\
                          **Rules:**\n\
                          - Capitalization Rule: ...";

    fn body(text: &str, style: Style) -> Line {
        Line::Body {
            text: text.to_string(),
            style,
        }
    }

    fn render_plain(text: &str) -> String {
        let mut out = Vec::new();
        render_reply(&mut out, &Theme::plain(), text).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_reply_sections() {
        let lines = format_reply(SAMPLE);

        assert_eq!(
            lines,
            vec![
                Line::Labeled {
                    label: "Original: ",
                    body: " \"did u get the aws account\"".to_string(),
                    style: Style::Original,
                },
                Line::Labeled {
                    label: "Corrected: ",
                    body: " \"Did you get the AWS account?\"".to_string(),
                    style: Style::Corrected,
                },
                Line::Header("Explanations:"),
                body("- \"u\" should be \"you\"", Style::Explanation),
                Line::Header("Rules:"),
                body("- Capitalization Rule: ...", Style::Rule),
            ]
        );
    }

    #[test]
    fn test_full_reply_rendering() {
        assert_eq!(
            render_plain(SAMPLE),
            "\nOriginal:  \"did u get the aws account\"\n\
             \nCorrected:  \"Did you get the AWS account?\"\n\
             \nExplanations:\n\
             \x20 - \"u\" should be \"you\"\n\
             \nRules:\n\
             \x20 - Capitalization Rule: ...\n"
        );
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        assert!(format_reply("").is_empty());
        assert_eq!(render_plain(""), "");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let lines = format_reply("\n   \n\t\n**Rules:**\n\n  - a rule  \n\r\n");
        assert_eq!(
            lines,
            vec![Line::Header("Rules:"), body("- a rule", Style::Rule)]
        );
    }

    #[test]
    fn test_plain_lines_inherit_section_style() {
        let lines = format_reply("**Rules:**\nsome rule text\n**Explanation:**\nsome explanation");
        assert_eq!(
            lines,
            vec![
                Line::Header("Rules:"),
                body("some rule text", Style::Rule),
                Line::Header("Explanations:"),
                body("some explanation", Style::Explanation),
            ]
        );
    }

    #[test]
    fn test_continuation_lines_after_original_use_explanation_style() {
        let lines = format_reply("**Original:** first\ncontinued\n- bullet");
        assert_eq!(lines[1], body("continued", Style::Explanation));
        assert_eq!(lines[2], body("- bullet", Style::Explanation));
    }

    #[test]
    fn test_unmarked_text_defaults_to_explanation_style() {
        let lines = format_reply("Sure! Here is my answer.\n- with a bullet");
        assert_eq!(
            lines,
            vec![
                body("Sure! Here is my answer.", Style::Explanation),
                body("- with a bullet", Style::Explanation),
            ]
        );
        assert_eq!(
            render_plain("Sure! Here is my answer."),
            "  Sure! Here is my answer.\n"
        );
    }

    #[test]
    fn test_header_remainder_is_discarded() {
        let lines = format_reply("**Explanation:** trailing words\n**Rules:** more");
        assert_eq!(
            lines,
            vec![Line::Header("Explanations:"), Line::Header("Rules:")]
        );
    }

    #[test]
    fn test_markers_must_prefix_the_line() {
        let lines = format_reply("see **Rules:** below");
        assert_eq!(lines, vec![body("see **Rules:** below", Style::Explanation)]);
    }

    #[test]
    fn test_section_does_not_leak_between_calls() {
        let first = format_reply("**Rules:**\n- one");
        let second = format_reply("- one");

        assert_eq!(first[1], body("- one", Style::Rule));
        assert_eq!(second[0], body("- one", Style::Explanation));
        assert_eq!(format_reply(SAMPLE), format_reply(SAMPLE));
    }

    #[test]
    fn test_malformed_input_never_fails() {
        for text in ["**", "**Original:**", "-", "**Corrected", "\u{0}\u{7f}", "**Rules:**\n\n\n"] {
            let mut out = Vec::new();
            render_reply(&mut out, &Theme::colored(), text).unwrap();
        }
        assert_eq!(
            format_reply("**Original:**"),
            vec![Line::Labeled {
                label: "Original: ",
                body: String::new(),
                style: Style::Original,
            }]
        );
    }
}

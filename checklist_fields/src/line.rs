use std::fmt::Display;

/// Lines starting with this prefix are instructions to the reviewer.
pub const COMMENT_PREFIX: &str = "[//]:";
/// Everything after this character on a field line is a comment from the reviewer.
pub const TRAILING_COMMENT: char = '#';

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum LineClass {
    /// Blank line or instruction comment.
    Skip,
    /// A checkbox line or a `key: value` line.
    Field,
    /// Prose that is not part of any field.
    Irrelevant,
}

pub fn classify_line(raw: &str) -> LineClass {
    if raw.trim().is_empty() || raw.trim_start().starts_with(COMMENT_PREFIX) {
        LineClass::Skip
    } else if has_checkbox(raw) || raw.contains(':') {
        LineClass::Field
    } else {
        LineClass::Irrelevant
    }
}

// A hyphen followed, somewhere later on the line, by a closing bracket.
fn has_checkbox(raw: &str) -> bool {
    match raw.find('-') {
        Some(idx) => raw[idx..].contains(']'),
        None => false,
    }
}

/// The decoration in front of a field line.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Marker {
    /// `- [x]` or `- [X]`
    Checked,
    /// `- [ ]` or `- []`
    Unchecked,
    /// `- [O]`: an option of the template that the reviewer did not resolve.
    Unhandled,
    /// A plain `- ` list item.
    Bullet,
    /// No decoration.
    Plain,
}

/// A field line split into its decoration, its key and its optional value.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct FieldLine {
    pub marker: Marker,
    pub key: String,
    /// Present when the line had a colon, possibly empty.
    pub value: Option<String>,
    /// Number of colons after the decoration, comments excluded.
    pub colons: usize,
}

impl FieldLine {
    pub fn parse(text: &str) -> FieldLine {
        let (marker, rest) = split_marker(text.trim());
        let body = strip_comment(rest).trim();
        let colons = body.matches(':').count();
        let (key, value) = match body.split_once(':') {
            Some((k, v)) => (k.trim().to_string(), Some(v.trim().to_string())),
            None => (body.to_string(), None),
        };
        FieldLine {
            marker,
            key,
            value,
            colons,
        }
    }

    /// A `key: value` line without decoration.
    pub fn key_value(key: &str, value: &str) -> FieldLine {
        FieldLine {
            marker: Marker::Plain,
            key: key.to_string(),
            value: Some(value.to_string()),
            colons: 1,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.marker == Marker::Checked
    }

    pub fn has_checkbox(&self) -> bool {
        matches!(
            self.marker,
            Marker::Checked | Marker::Unchecked | Marker::Unhandled
        )
    }

    /// The content of the line once the checkbox decoration is removed.
    pub fn text(&self) -> String {
        match &self.value {
            Some(v) => format!("{}: {}", self.key, v),
            None => self.key.clone(),
        }
    }
}

impl Display for FieldLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.marker {
            Marker::Checked => "- [x] ",
            Marker::Unchecked => "- [ ] ",
            Marker::Unhandled => "- [O] ",
            Marker::Bullet => "- ",
            Marker::Plain => "",
        };
        write!(f, "{}{}", prefix, self.text())
    }
}

/// Drops a trailing reviewer comment.
fn strip_comment(s: &str) -> &str {
    match s.split_once(TRAILING_COMMENT) {
        Some((before, _)) => before,
        None => s,
    }
}

fn split_marker(text: &str) -> (Marker, &str) {
    let rest = match text.strip_prefix('-') {
        Some(rest) => rest.trim_start(),
        None => return (Marker::Plain, text),
    };
    if let Some(inside) = rest.strip_prefix('[') {
        if let Some(close) = inside.find(']') {
            let marker = match inside[..close].trim() {
                "x" | "X" => Some(Marker::Checked),
                "" => Some(Marker::Unchecked),
                "O" | "o" => Some(Marker::Unhandled),
                _ => None,
            };
            if let Some(m) = marker {
                return (m, &inside[close + 1..]);
            }
        }
    }
    (Marker::Bullet, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_skips_blank_and_comments() {
        assert_eq!(classify_line("   \n"), LineClass::Skip);
        assert_eq!(classify_line(""), LineClass::Skip);
        assert_eq!(
            classify_line("[//]: # (Tick all hypotheses that apply)"),
            LineClass::Skip
        );
    }

    #[test]
    fn classify_fields() {
        assert_eq!(classify_line("- [ ] Accuracy"), LineClass::Field);
        assert_eq!(classify_line("- [x] H3 Transfer learning helps"), LineClass::Field);
        assert_eq!(classify_line("paper title: Some Paper"), LineClass::Field);
        assert_eq!(classify_line("year:"), LineClass::Field);
        assert_eq!(classify_line("## Hypotheses"), LineClass::Irrelevant);
        assert_eq!(classify_line("Some prose [see below]"), LineClass::Irrelevant);
    }

    #[test]
    fn parse_checkboxes() {
        let l = FieldLine::parse("- [x] H7 Models generalize ");
        assert_eq!(l.marker, Marker::Checked);
        assert_eq!(l.key, "H7 Models generalize");
        assert_eq!(l.value, None);
        assert!(l.is_checked());

        let l = FieldLine::parse("- [X] A");
        assert!(l.is_checked());
        assert_eq!(FieldLine::parse("- [ ] A").marker, Marker::Unchecked);
        assert_eq!(FieldLine::parse("- [] A").marker, Marker::Unchecked);
        assert_eq!(FieldLine::parse("- [O] A").marker, Marker::Unhandled);
        assert_eq!(FieldLine::parse("- [ ] A").key, "A");
    }

    #[test]
    fn parse_key_values() {
        let l = FieldLine::parse("- paper title: Deep Learning: A Survey # check spelling");
        assert_eq!(l.marker, Marker::Bullet);
        assert_eq!(l.key, "paper title");
        assert_eq!(l.value, Some("Deep Learning: A Survey".to_string()));
        assert_eq!(l.colons, 2);

        let l = FieldLine::parse("year:");
        assert_eq!(l.marker, Marker::Plain);
        assert_eq!(l.key, "year");
        assert_eq!(l.value, Some("".to_string()));

        let l = FieldLine::parse("- [ ] OTHER: LSTM");
        assert_eq!(l.marker, Marker::Unchecked);
        assert_eq!(l.key, "OTHER");
        assert_eq!(l.value, Some("LSTM".to_string()));
        assert_eq!(l.to_string(), "- [ ] OTHER: LSTM");
    }

    #[test]
    fn parse_keeps_unknown_brackets() {
        let l = FieldLine::parse("- [link] somewhere");
        assert_eq!(l.marker, Marker::Bullet);
        assert_eq!(l.key, "[link] somewhere");
    }
}

use log::debug;

use crate::line::FieldLine;

/// Outcome of looking up one field in the content of a document.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum FieldMatch {
    /// The line defining the field. `ticked` is set when the field appeared several
    /// times and all occurrences agree on a ticked checkbox.
    Found { line: FieldLine, ticked: bool },
    NotFound,
    /// Several lines define the field and they disagree. Each variant is the text of
    /// the line without decoration and whether it was ticked.
    Conflict { variants: Vec<(String, bool)> },
}

/// Finds the line that defines `field` in the normalized content of a document.
///
/// Lines are selected on an exact match of their key, so that `OTHER_H1` never
/// collides with `OTHER_H12`.
pub fn find_field(field: &str, content: &[FieldLine]) -> FieldMatch {
    let candidates: Vec<&FieldLine> = content.iter().filter(|l| l.key == field).collect();
    match candidates.as_slice() {
        [] => FieldMatch::NotFound,
        [line] => FieldMatch::Found {
            line: (*line).clone(),
            ticked: false,
        },
        [first, ..] => {
            let mut variants: Vec<(String, bool)> = Vec::new();
            for l in candidates.iter() {
                let v = (l.text(), l.is_checked());
                if !variants.contains(&v) {
                    variants.push(v);
                }
            }
            debug!("find_field: {:?} has variants {:?}", field, variants);
            if variants.len() > 1 {
                FieldMatch::Conflict { variants }
            } else {
                FieldMatch::Found {
                    line: (*first).clone(),
                    ticked: variants[0].1,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(lines: &[&str]) -> Vec<FieldLine> {
        lines.iter().map(|l| FieldLine::parse(l)).collect()
    }

    #[test]
    fn not_found() {
        let c = content(&["- [x] A", "title: T"]);
        assert_eq!(find_field("B", &c), FieldMatch::NotFound);
    }

    #[test]
    fn single_match() {
        let c = content(&["- [x] A", "title: T"]);
        assert_eq!(
            find_field("title", &c),
            FieldMatch::Found {
                line: FieldLine::parse("title: T"),
                ticked: false
            }
        );
    }

    #[test]
    fn exact_keys_only() {
        let c = content(&["- [x] OTHER_H12: foo", "- [ ] OTHER_H1:"]);
        assert_eq!(
            find_field("OTHER_H1", &c),
            FieldMatch::Found {
                line: FieldLine::parse("- [ ] OTHER_H1:"),
                ticked: false
            }
        );
    }

    #[test]
    fn identical_duplicates_resolve() {
        let c = content(&["- [x] H2 Something", "- [x] H2 Something # again"]);
        assert_eq!(
            find_field("H2 Something", &c),
            FieldMatch::Found {
                line: FieldLine::parse("- [x] H2 Something"),
                ticked: true
            }
        );
    }

    #[test]
    fn differently_ticked_duplicates_conflict() {
        let c = content(&["- [x] X", "- [ ] X"]);
        assert_eq!(
            find_field("X", &c),
            FieldMatch::Conflict {
                variants: vec![("X".to_string(), true), ("X".to_string(), false)]
            }
        );
    }
}

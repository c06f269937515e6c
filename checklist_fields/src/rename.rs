use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{ExtractErrors, ExtractionRules};
use crate::line::FieldLine;

static HYPOTHESIS_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bH\d{1,2}\b").unwrap());

/// Which pass the renamer is serving.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
enum RenameMode {
    /// Reading the template to build the schema. Only the bare key is used, and
    /// running out of positional suffixes is an error.
    Template,
    /// Reading a review. The machine-learning categories are only considered on
    /// checkbox lines.
    Content,
}

/// The context accumulated while scanning one document from top to bottom.
///
/// A fresh state must be used for every document: nothing carries over.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RenameState {
    /// The last hypothesis marker seen, e.g. `H7`.
    pending_suffix: Option<String>,
    /// Number of generic fields already named from the positional table.
    positional_counter: usize,
    /// The last machine-learning category field seen.
    ml_category: Option<String>,
}

impl RenameState {
    pub fn new() -> RenameState {
        RenameState::default()
    }

    pub fn positional_counter(&self) -> usize {
        self.positional_counter
    }

    /// The column name defined by a template line.
    pub fn rename_template(
        &mut self,
        raw: &str,
        rules: &ExtractionRules,
    ) -> Result<String, ExtractErrors> {
        let (line, named) = self.rename(raw, RenameMode::Template, rules);
        if named {
            Ok(line.key)
        } else {
            Err(ExtractErrors::PositionalSuffixExhausted {
                position: self.positional_counter,
            })
        }
    }

    /// A review line with its key renamed. A generic field that cannot be named is
    /// kept as is and will not match any column.
    pub fn rename_content(&mut self, raw: &str, rules: &ExtractionRules) -> FieldLine {
        let (line, named) = self.rename(raw, RenameMode::Content, rules);
        if !named {
            warn!(
                "rename: more than {} generic fields before the first hypothesis, keeping {:?}",
                rules.positional_suffixes.len(),
                line.key
            );
        }
        line
    }

    // The flag is false when the line was a generic field left without a name.
    fn rename(&mut self, raw: &str, mode: RenameMode, rules: &ExtractionRules) -> (FieldLine, bool) {
        let mut line = FieldLine::parse(raw);

        // Free text in generic fields sometimes mentions a hypothesis: ignore it.
        if !raw.contains(rules.generic_field.as_str()) {
            if let Some(m) = HYPOTHESIS_MARKER.find(raw) {
                self.pending_suffix = Some(m.as_str().to_string());
            }
        }

        if line.key == rules.generic_field {
            match self.generic_name(rules) {
                Some(name) => {
                    debug!("rename: generic field renamed to {:?}", name);
                    line.key = name;
                }
                None => return (line, false),
            }
        }

        if mode == RenameMode::Template || line.has_checkbox() {
            if rules.ml_categories.contains(&line.key) {
                self.ml_category = Some(line.key.clone());
            } else if line.key == rules.neural_network_field {
                if let Some(category) = &self.ml_category {
                    line.key = format!("{} ({})", line.key, category);
                }
            }
        }
        (line, true)
    }

    fn generic_name(&mut self, rules: &ExtractionRules) -> Option<String> {
        let generic = &rules.generic_field;
        if let Some(h) = &self.pending_suffix {
            return Some(format!("{}_{}", generic, h));
        }
        let suffix = rules.positional_suffixes.get(self.positional_counter)?;
        self.positional_counter += 1;
        Some(format!("{}_{}", generic, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rename_all(lines: &[&str]) -> Vec<String> {
        let rules = ExtractionRules::default();
        let mut state = RenameState::new();
        lines
            .iter()
            .map(|l| state.rename_content(l, &rules).key)
            .collect()
    }

    #[test]
    fn positional_suffixes_in_order() {
        let keys = rename_all(&[
            "- [ ] OTHER",
            "- [ ] OTHER:",
            "- [ ] OTHER: Random forest",
            "- [x] OTHER: BERT",
        ]);
        assert_eq!(
            keys,
            vec![
                "OTHER_dataset",
                "OTHER_supervised",
                "OTHER_unsupervised",
                "OTHER_utilized_model"
            ]
        );
    }

    #[test]
    fn hypothesis_suffix_takes_precedence() {
        let rules = ExtractionRules::default();
        let mut state = RenameState::new();
        let first = state.rename_content("- [ ] OTHER", &rules);
        assert_eq!(first.key, "OTHER_dataset");
        state.rename_content("- [x] H7 Larger models perform better", &rules);
        let other = state.rename_content("- [ ] OTHER: noise", &rules);
        assert_eq!(other.key, "OTHER_H7");
        assert_eq!(other.value, Some("noise".to_string()));
        assert_eq!(state.positional_counter(), 1);
    }

    #[test]
    fn hypothesis_suffix_stays_active() {
        let keys = rename_all(&["- [ ] H1 x", "- [ ] OTHER", "- [ ] OTHER: y"]);
        assert_eq!(keys, vec!["H1 x", "OTHER_H1", "OTHER_H1"]);
    }

    #[test]
    fn hypothesis_in_generic_text_is_ignored() {
        let keys = rename_all(&["- [ ] OTHER: relates to H3 somehow", "- [ ] OTHER"]);
        assert_eq!(keys, vec!["OTHER_dataset", "OTHER_supervised"]);
    }

    #[test]
    fn neural_networks_take_category() {
        let keys = rename_all(&[
            "- [ ] Neural Networks",
            "- [ ] supervised",
            "- [ ] Neural Networks",
            "- [x] unsupervised",
            "- [x] Neural Networks",
        ]);
        assert_eq!(
            keys,
            vec![
                "Neural Networks",
                "supervised",
                "Neural Networks (supervised)",
                "unsupervised",
                "Neural Networks (unsupervised)"
            ]
        );
    }

    #[test]
    fn category_is_not_added_twice() {
        let keys = rename_all(&["- [x] supervised", "- [x] Neural Networks (supervised)"]);
        assert_eq!(keys, vec!["supervised", "Neural Networks (supervised)"]);
    }

    #[test]
    fn category_needs_checkbox_in_content() {
        let keys = rename_all(&["supervised: yes", "- [x] Neural Networks"]);
        assert_eq!(keys, vec!["supervised", "Neural Networks"]);

        let rules = ExtractionRules::default();
        let mut state = RenameState::new();
        state.rename_template("supervised", &rules).unwrap();
        assert_eq!(
            state.rename_template("- [ ] Neural Networks", &rules),
            Ok("Neural Networks (supervised)".to_string())
        );
    }

    #[test]
    fn template_runs_out_of_suffixes() {
        let rules = ExtractionRules::default();
        let mut state = RenameState::new();
        for _ in 0..4 {
            state.rename_template("- [ ] OTHER", &rules).unwrap();
        }
        assert_eq!(
            state.rename_template("- [ ] OTHER", &rules),
            Err(ExtractErrors::PositionalSuffixExhausted { position: 4 })
        );
        let line = state.rename_content("- [ ] OTHER", &rules);
        assert_eq!(line.key, "OTHER");
    }
}

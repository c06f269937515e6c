// ********* Output data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The value held by one field of a record.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum FieldValue {
    /// The field was not found in the document, or it was found but not ticked.
    Absent,
    /// A checkbox (typically a hypothesis) that was ticked. Written out as `1`.
    Ticked,
    /// The free text of a descriptive `key: value` field.
    Text(String),
}

impl FieldValue {
    /// The textual form of the value in the output table.
    pub fn render(&self, absent: &str) -> String {
        match self {
            FieldValue::Absent => absent.to_string(),
            FieldValue::Ticked => "1".to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// Errors that prevent a document (or the template) from being processed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ExtractErrors {
    /// The template does not define a single field.
    EmptyTemplate,
    /// The template contains more generic fields than the positional table can name.
    PositionalSuffixExhausted { position: usize },
    /// The same field appears several times in one document with different content
    /// or ticked state. The document must be fixed by hand.
    ConflictingTicks {
        document: String,
        field: String,
        variants: Vec<(String, bool)>,
    },
}

impl Error for ExtractErrors {}

impl Display for ExtractErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractErrors::EmptyTemplate => write!(f, "The template does not define any field"),
            ExtractErrors::PositionalSuffixExhausted { position } => write!(
                f,
                "No positional suffix for generic field number {} in the template",
                position + 1
            ),
            ExtractErrors::ConflictingTicks {
                document,
                field,
                variants,
            } => write!(
                f,
                "Duplicate field '{}' ticked differently in {}: {:?}",
                field, document, variants
            ),
        }
    }
}

// ********* Configuration **********

/// The names given, in order, to the generic fields of a document that are not
/// attached to a hypothesis. Downstream consumers depend on these column names:
/// changing the number of generic fields in the template requires updating this table.
pub const POSITIONAL_SUFFIXES: [&str; 4] = ["dataset", "supervised", "unsupervised", "utilized_model"];

/// The fixed names the extraction relies on.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ExtractionRules {
    /// The synthetic field holding the identifier derived from the file name.
    pub identifier_field: String,
    /// The reusable field literal that gets renamed according to its context.
    pub generic_field: String,
    pub positional_suffixes: Vec<String>,
    /// Fields naming a machine-learning category. The category is carried over to the
    /// neural network field that follows it.
    pub ml_categories: Vec<String>,
    pub neural_network_field: String,
    /// Descriptive fields for which an empty value is reported.
    pub mandatory_fields: Vec<String>,
    /// Fields whose value may legitimately contain colons.
    pub multi_colon_fields: Vec<String>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        let strings = |l: &[&str]| l.iter().map(|s| s.to_string()).collect::<Vec<String>>();
        ExtractionRules {
            identifier_field: "bib-acronym".to_string(),
            generic_field: "OTHER".to_string(),
            positional_suffixes: strings(&POSITIONAL_SUFFIXES),
            ml_categories: strings(&["supervised", "unsupervised"]),
            neural_network_field: "Neural Networks".to_string(),
            mandatory_fields: strings(&["paper title", "conference/journal", "year", "bib-acronym"]),
            multi_colon_fields: strings(&["paper title"]),
        }
    }
}

impl ExtractionRules {
    /// True for the generic literal and all the names derived from it.
    pub fn is_generic(&self, key: &str) -> bool {
        match key.strip_prefix(self.generic_field.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('_'),
            None => false,
        }
    }

    pub fn allows_extra_colons(&self, key: &str) -> bool {
        key == self.identifier_field
            || self.is_generic(key)
            || self.multi_colon_fields.iter().any(|f| f == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_names() {
        let rules = ExtractionRules::default();
        assert!(rules.is_generic("OTHER"));
        assert!(rules.is_generic("OTHER_H1"));
        assert!(rules.is_generic("OTHER_utilized_model"));
        assert!(!rules.is_generic("OTHERS used"));
        assert!(!rules.is_generic("OTHERWISE"));
        assert!(!rules.is_generic("H1 OTHER"));
    }

    #[test]
    fn extra_colons() {
        let rules = ExtractionRules::default();
        assert!(rules.allows_extra_colons("paper title"));
        assert!(rules.allows_extra_colons("OTHER_dataset"));
        assert!(!rules.allows_extra_colons("OTHERS used"));
        assert!(!rules.allows_extra_colons("year"));
    }
}

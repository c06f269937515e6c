use log::{error, info};

use crate::config::{ExtractionRules, FieldValue};
use crate::line::{FieldLine, Marker};

/// The ordered, de-duplicated list of output columns.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    /// Builds a schema from a list of names, dropping the duplicates and appending
    /// the identifier field last.
    pub fn new(names: &[String], identifier_field: &str) -> Schema {
        let mut fields: Vec<String> = Vec::new();
        for n in names.iter().filter(|n| *n != identifier_field) {
            if !fields.contains(n) {
                fields.push(n.clone());
            }
        }
        fields.push(identifier_field.to_string());
        Schema { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One row of the dataset: a value for each field of the schema, in schema order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Record {
    entries: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new(schema: &Schema) -> Record {
        Record {
            entries: schema
                .fields()
                .iter()
                .map(|f| (f.clone(), FieldValue::Absent))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|e| e.0 == field).map(|e| &e.1)
    }

    /// Sets the value of an existing field. Returns false if the record has no such field.
    pub fn set(&mut self, field: &str, value: FieldValue) -> bool {
        match self.entries.iter_mut().find(|e| e.0 == field) {
            Some(entry) => {
                entry.1 = value;
                true
            }
            None => false,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().map(|p| &p.0)
    }

    pub fn render(&self, absent: &str) -> Vec<String> {
        self.entries.iter().map(|(_, v)| v.render(absent)).collect()
    }
}

/// Writes the value carried by a matched line into the record.
///
/// All the problems found here are reported in the log and never stop the processing:
/// the affected field keeps its current value.
pub fn apply_match(
    record: &mut Record,
    line: &FieldLine,
    ticked: bool,
    document: &str,
    rules: &ExtractionRules,
) {
    if line.marker == Marker::Unhandled {
        error!("Field {} not handled in review {}", line.key, document);
    }
    if line.colons > 1 && !rules.allows_extra_colons(&line.key) {
        error!(
            "Other colon than separator after {:?} in {}",
            line.key, document
        );
    }

    match &line.value {
        Some(value) => {
            if record.get(&line.key).is_none() {
                error!("Key not in review {}: {:?} ({})", document, line.key, line);
            } else if !value.is_empty() {
                record.set(&line.key, FieldValue::Text(value.clone()));
                info!("{}: set {}: {}", document, line.key, value);
            } else if rules.mandatory_fields.contains(&line.key) {
                error!("No value for {} in {}", line.key, document);
            }
        }
        None => {
            if (line.is_checked() || ticked) && !rules.is_generic(&line.key) {
                if record.set(&line.key, FieldValue::Ticked) {
                    info!("{}: set {}: 1", document, line.key);
                } else {
                    error!(
                        "Did not find field for hypotheses: {}, {:?}",
                        document, line.key
                    );
                }
            }
        }
    }
}

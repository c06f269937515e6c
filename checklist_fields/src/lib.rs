mod config;
mod line;
pub mod manual;
mod matcher;
mod record;
mod rename;

use log::{debug, error, info, warn};

pub use crate::config::*;
pub use crate::line::{classify_line, FieldLine, LineClass, Marker};
pub use crate::matcher::{find_field, FieldMatch};
pub use crate::record::{apply_match, Record, Schema};
pub use crate::rename::RenameState;

/// Reads the template and returns the columns of the dataset.
///
/// The columns follow the order of the template. The identifier field is always the last one.
pub fn build_schema(template: &str, rules: &ExtractionRules) -> Result<Schema, ExtractErrors> {
    let mut state = RenameState::new();
    let mut names: Vec<String> = Vec::new();
    for raw in template.lines() {
        if classify_line(raw) != LineClass::Field {
            continue;
        }
        let key = state.rename_template(raw, rules)?;
        if key.is_empty() {
            debug!("build_schema: skipping line without name {:?}", raw);
            continue;
        }
        if rules.is_generic(&key) && names.contains(&key) {
            warn!(
                "Generic field {:?} appears twice in the template, both share one column",
                key
            );
        }
        names.push(key);
    }
    if names.is_empty() {
        return Err(ExtractErrors::EmptyTemplate);
    }
    let schema = Schema::new(&names, &rules.identifier_field);
    info!("Schema with {} fields", schema.len());
    debug!("build_schema: {:?}", schema.fields());
    Ok(schema)
}

/// The field lines of a review, with the generic fields renamed.
pub fn normalize_document(text: &str, rules: &ExtractionRules) -> Vec<FieldLine> {
    let mut state = RenameState::new();
    text.lines()
        .filter(|raw| classify_line(raw) == LineClass::Field)
        .map(|raw| state.rename_content(raw, rules))
        .collect()
}

/// The identifier encoded in the name of a review file: the tokens before the
/// second underscore, concatenated.
///
/// `smith_2020_deep_nets.md` gives `smith2020`.
pub fn identifier_from_file_name(file_name: &str) -> String {
    file_name.split('_').take(2).collect::<Vec<&str>>().concat()
}

/// Extracts the record of one review.
///
/// Arguments:
/// * `document` the file name of the review, which also provides its identifier
/// * `text` the content of the review
/// * `schema` the columns built from the template
///
/// Missing or malformed fields are logged and left absent. The only error is a field
/// defined several times with different content.
pub fn build_record(
    document: &str,
    text: &str,
    schema: &Schema,
    rules: &ExtractionRules,
) -> Result<Record, ExtractErrors> {
    info!("Begin review: {}", document);
    let content = normalize_document(text, rules);
    let mut record = Record::new(schema);
    for field in schema.fields() {
        debug!("build_record: field {:?}", field);
        let found = if *field == rules.identifier_field {
            FieldMatch::Found {
                line: FieldLine::key_value(field, &identifier_from_file_name(document)),
                ticked: false,
            }
        } else {
            find_field(field, &content)
        };
        match found {
            FieldMatch::Found { line, ticked } => {
                debug!("build_record: found {}", line);
                apply_match(&mut record, &line, ticked, document, rules);
            }
            FieldMatch::NotFound => {
                error!("Did not find field '{}' for {}", field, document);
            }
            FieldMatch::Conflict { variants } => {
                return Err(ExtractErrors::ConflictingTicks {
                    document: document.to_string(),
                    field: field.clone(),
                    variants,
                });
            }
        }
    }
    Ok(record)
}

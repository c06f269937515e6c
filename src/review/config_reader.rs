use crate::args::Args;
use crate::review::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_REVIEW_DIRECTORY: &str = "reviews/reviews";
pub const DEFAULT_TEMPLATE_NAME: &str = "hypotheses.md";
pub const DEFAULT_OUTPUT_PATH: &str = "dataset.csv";
// Free text often contains commas.
pub const DEFAULT_DELIMITER: &str = ";";

/// Files containing one of these markers are not finished reviews.
pub const DEFAULT_EXCLUSION_MARKERS: [&str; 5] = ["TBD.md", "TODO.md", "REJECT", ".sh", "pymupdf_high"];
pub const DEFAULT_EXCLUDED_NAMES: [&str; 1] = ["rejected"];

/// Overrides of the extraction rules. Missing entries keep their default value.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(rename = "identifierField")]
    pub identifier_field: Option<String>,
    #[serde(rename = "genericField")]
    pub generic_field: Option<String>,
    #[serde(rename = "positionalSuffixes")]
    pub positional_suffixes: Option<Vec<String>>,
    #[serde(rename = "mlCategories")]
    pub ml_categories: Option<Vec<String>>,
    #[serde(rename = "neuralNetworkField")]
    pub neural_network_field: Option<String>,
    #[serde(rename = "mandatoryFields")]
    pub mandatory_fields: Option<Vec<String>>,
    #[serde(rename = "multiColonFields")]
    pub multi_colon_fields: Option<Vec<String>>,
}

impl ExtractionConfig {
    pub fn rules(&self) -> ExtractionRules {
        let d = ExtractionRules::default();
        ExtractionRules {
            identifier_field: self.identifier_field.clone().unwrap_or(d.identifier_field),
            generic_field: self.generic_field.clone().unwrap_or(d.generic_field),
            positional_suffixes: self
                .positional_suffixes
                .clone()
                .unwrap_or(d.positional_suffixes),
            ml_categories: self.ml_categories.clone().unwrap_or(d.ml_categories),
            neural_network_field: self
                .neural_network_field
                .clone()
                .unwrap_or(d.neural_network_field),
            mandatory_fields: self.mandatory_fields.clone().unwrap_or(d.mandatory_fields),
            multi_colon_fields: self
                .multi_colon_fields
                .clone()
                .unwrap_or(d.multi_colon_fields),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(rename = "reviewDirectory")]
    pub review_directory: Option<String>,
    #[serde(rename = "templateName")]
    pub template_name: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    pub delimiter: Option<String>,
    #[serde(rename = "absentValue")]
    pub absent_value: Option<String>,
    #[serde(rename = "exclusionMarkers")]
    pub exclusion_markers: Option<Vec<String>>,
    #[serde(rename = "excludedNames")]
    pub excluded_names: Option<Vec<String>>,
    pub extraction: Option<ExtractionConfig>,
}

impl DatasetConfig {
    /// The command line takes precedence over the configuration file.
    pub fn with_args(self, args: &Args) -> DatasetConfig {
        DatasetConfig {
            review_directory: args.input.clone().or(self.review_directory),
            template_name: args.template.clone().or(self.template_name),
            output_path: args.out.clone().or(self.output_path),
            ..self
        }
    }

    /// Fills in the defaults and checks the values.
    pub fn settings(&self) -> RvResult<DatasetSettings> {
        let delimiter_s = self
            .delimiter
            .clone()
            .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());
        let delimiter = match delimiter_s.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => {
                return Err(RvError::InvalidDelimiter {
                    delimiter: delimiter_s,
                })
            }
        };
        let strings = |l: &[&str]| l.iter().map(|s| s.to_string()).collect::<Vec<String>>();
        Ok(DatasetSettings {
            review_directory: self
                .review_directory
                .clone()
                .unwrap_or_else(|| DEFAULT_REVIEW_DIRECTORY.to_string()),
            template_name: self
                .template_name
                .clone()
                .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string()),
            output_path: self
                .output_path
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            delimiter,
            absent_value: self.absent_value.clone().unwrap_or_default(),
            exclusion_markers: self
                .exclusion_markers
                .clone()
                .unwrap_or_else(|| strings(&DEFAULT_EXCLUSION_MARKERS)),
            excluded_names: self
                .excluded_names
                .clone()
                .unwrap_or_else(|| strings(&DEFAULT_EXCLUDED_NAMES)),
            rules: self.extraction.clone().unwrap_or_default().rules(),
        })
    }
}

/// The validated settings of a run.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DatasetSettings {
    pub review_directory: String,
    pub template_name: String,
    pub output_path: String,
    pub delimiter: u8,
    pub absent_value: String,
    pub exclusion_markers: Vec<String>,
    pub excluded_names: Vec<String>,
    pub rules: ExtractionRules,
}

pub fn read_config(path: &str) -> RvResult<DatasetConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read_config: {:?}", contents);
    let config: DatasetConfig = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    info!("config: {:?}", config);
    Ok(config)
}

pub mod config_reader;
pub mod io_corpus;
pub mod io_csv;

use log::{debug, info, warn};

use checklist_fields::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use text_diff::print_diff;

use crate::args::Args;
use crate::review::config_reader::*;

#[derive(Debug, Snafu)]
pub enum RvError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the configuration: {source}"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("The delimiter must be a single ASCII character, got {delimiter:?}"))]
    InvalidDelimiter { delimiter: String },

    #[snafu(display("Error opening the template {path}"))]
    OpeningTemplate {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Invalid template {path}: {source}"))]
    InvalidTemplate { source: ExtractErrors, path: String },
    #[snafu(display("Error listing the reviews in {path}"))]
    ListingReviews {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening the review {path}"))]
    OpeningReview {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Review {document} must be fixed by hand: {source}"))]
    ExtractingReview {
        source: ExtractErrors,
        document: String,
    },

    #[snafu(display("Error formatting the dataset"))]
    WritingCsv { source: csv::Error },
    #[snafu(display("Error formatting the dataset"))]
    FlushingCsv { source: std::io::Error },
    #[snafu(display("The dataset is not valid UTF-8"))]
    EncodingCsv { source: std::string::FromUtf8Error },
    #[snafu(display("Error writing the dataset to {path}"))]
    WritingDataset {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening the reference dataset {path}"))]
    OpeningReference {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type RvResult<T> = Result<T, RvError>;

/// Builds the dataset in memory: the header from the template, then one row per review.
pub fn build_dataset(settings: &DatasetSettings) -> RvResult<String> {
    let rules = &settings.rules;

    let template_path = io_corpus::review_path(settings, &settings.template_name);
    let template = fs::read_to_string(&template_path).context(OpeningTemplateSnafu {
        path: template_path.display().to_string(),
    })?;
    let schema = build_schema(&template, rules).context(InvalidTemplateSnafu {
        path: template_path.display().to_string(),
    })?;

    let reviews = io_corpus::list_reviews(settings)?;
    info!("Parsed {} reviews", reviews.len());

    let mut records: Vec<Record> = Vec::new();
    for review_name in reviews.iter() {
        let text = io_corpus::read_text(&io_corpus::review_path(settings, review_name))?;
        let record = build_record(review_name, &text, &schema, rules).context(
            ExtractingReviewSnafu {
                document: review_name,
            },
        )?;
        debug!("record for {}: {:?}", review_name, record);
        records.push(record);
    }

    io_csv::render_dataset(&schema, &records, settings)
}

/// Builds the dataset, writes it out and optionally compares it with a reference dataset.
pub fn run_dataset(settings: &DatasetSettings, check_reference_path: Option<String>) -> RvResult<()> {
    let table = build_dataset(settings)?;
    io_csv::write_dataset(&settings.output_path, &table)?;

    if let Some(reference_p) = check_reference_path {
        let reference = fs::read_to_string(&reference_p).context(OpeningReferenceSnafu {
            path: reference_p.clone(),
        })?;
        if reference != table {
            warn!("Found differences with the reference dataset");
            print_diff(reference.as_str(), table.as_str(), "\n");
            whatever!(
                "Difference detected between the dataset and the reference dataset {}",
                reference_p
            )
        }
        info!("The dataset matches the reference {:?}", reference_p);
    }
    Ok(())
}

pub fn run(args: &Args) -> RvResult<()> {
    let config = match &args.config {
        Some(config_path) => read_config(config_path)?,
        None => DatasetConfig::default(),
    };
    let settings = config.with_args(args).settings()?;
    debug!("settings: {:?}", settings);
    run_dataset(&settings, args.reference.clone())
}

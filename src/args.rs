use clap::Parser;

/// This program turns a directory of filled-in review checklists into a single dataset.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the review corpus and the output.
    /// All the options below override the values found in this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (directory path, default reviews/reviews) The directory containing the reviews and the template.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file name, default hypotheses.md) The name of the template inside the review directory.
    #[clap(short, long, value_parser)]
    pub template: Option<String>,

    /// (file path, default dataset.csv) Where the dataset is written.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A previously generated dataset. If provided, reviewset will check that the
    /// new dataset is identical to it and report the differences otherwise.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path) If specified, the diagnostics are written to this file instead of the standard error.
    #[clap(long, value_parser)]
    pub log_file: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

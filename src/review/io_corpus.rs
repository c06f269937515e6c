// Reading the review directory.

use std::path::{Path, PathBuf};

use crate::review::*;

/// The names of the finished reviews in the review directory.
///
/// The template, the reviews in progress, the rejected papers and the helper scripts are
/// left out. The names are sorted so that the rows of the dataset come in a stable order.
pub fn list_reviews(settings: &DatasetSettings) -> RvResult<Vec<String>> {
    let path = settings.review_directory.as_str();
    let entries = fs::read_dir(path).context(ListingReviewsSnafu { path })?;
    let mut names: Vec<String> = Vec::new();
    for entry_r in entries {
        let entry = entry_r.context(ListingReviewsSnafu { path })?;
        let name = entry.file_name().to_string_lossy().to_string();
        if is_excluded(&name, settings) {
            debug!("list_reviews: excluding {:?}", name);
            continue;
        }
        let file_type = entry.file_type().context(ListingReviewsSnafu { path })?;
        if !file_type.is_file() {
            debug!("list_reviews: skipping {:?} (not a file)", name);
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

pub fn is_excluded(name: &str, settings: &DatasetSettings) -> bool {
    name.contains(settings.template_name.as_str())
        || settings
            .exclusion_markers
            .iter()
            .any(|m| name.contains(m.as_str()))
        || settings.excluded_names.iter().any(|n| n == name)
}

pub fn review_path(settings: &DatasetSettings, name: &str) -> PathBuf {
    Path::new(settings.review_directory.as_str()).join(name)
}

pub fn read_text(path: &Path) -> RvResult<String> {
    let p = path.display().to_string();
    info!("Attempting to read {:?}", p);
    fs::read_to_string(path).context(OpeningReviewSnafu { path: p })
}

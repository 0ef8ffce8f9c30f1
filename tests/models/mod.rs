//! # Model files
//!
//! Small models in the line oriented model file format, each with a known optimum.
use std::path::{Path, PathBuf};

use rhs_lp::io::import;
use rhs_lp::LinearModel;

/// # Importing and solving
mod test;

/// Folder where the model files are stored.
fn problem_file_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("models")
}

/// Compute the path of the problem file, based on the file name.
///
/// # Arguments
///
/// * `file_name`: Name of the file, including its extension.
fn get_test_file_path(file_name: &str) -> PathBuf {
    problem_file_directory().join(file_name)
}

/// Read a model that is known to be well formed.
pub fn import_model(file_name: &str) -> LinearModel {
    crate::init_logging();

    let path = get_test_file_path(file_name);
    match import(&path) {
        Ok(model) => model,
        Err(error) => panic!("Could not import {:?}: {}", path, error),
    }
}

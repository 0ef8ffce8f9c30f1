//! # Reading of linear programs
//!
//! This module provides read functionality for linear program files.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::data::linear_program::general_form::LinearModel;
use crate::io::error::ImportError;

pub mod error;
pub mod lp;

/// Import a problem from a file.
///
/// Supports the line oriented format described in the `lp` module, with the `.lp` or `.txt`
/// extension.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import(file_path: &Path) -> Result<LinearModel, ImportError> {
    // Choose the right parser before reading
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("lp" | "txt") => {},
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }

    // Open and read the file
    let mut program = String::new();
    File::open(file_path)?.read_to_string(&mut program)?;
    debug!("Read {} bytes from {:?}", program.len(), file_path);

    lp::import(&program)
}

/// Parse a model from text in the format described in the `lp` module.
///
/// # Errors
///
/// If the text is syntactically incorrect or describes an inconsistent model.
pub fn parse(program: &str) -> Result<LinearModel, ImportError> {
    lp::import(program)
}

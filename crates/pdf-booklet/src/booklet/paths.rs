//! File naming for the intermediate and output artifacts

use crate::constants::PDF_EXTENSION;
use crate::options::BookletOptions;
use crate::types::*;
use std::path::{Path, PathBuf};

/// Every file the pipeline reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletPaths {
    /// Source document
    pub input: PathBuf,
    /// Padded copy of the source, removed once the booklet is written
    pub intermediate: PathBuf,
    /// Booklet document
    pub output: PathBuf,
}

impl BookletPaths {
    /// Derive the intermediate and output paths next to `input`:
    /// `<stem>_tmp.pdf` and `<stem>_booklet.pdf` with the default suffixes.
    pub fn for_input(input: impl AsRef<Path>, options: &BookletOptions) -> Result<Self> {
        let input = input.as_ref();
        let stem = input.file_stem().ok_or_else(|| {
            BookletError::Config(format!("Input path has no file name: {}", input.display()))
        })?;

        let mut name = stem.to_os_string();
        name.push(&options.intermediate_suffix);
        name.push(".");
        name.push(PDF_EXTENSION);
        let intermediate = input.with_file_name(name);
        let output = Self::output_for_intermediate(&intermediate, options)?;

        Ok(Self {
            input: input.to_owned(),
            intermediate,
            output,
        })
    }

    /// Swap the intermediate suffix of `intermediate` for the output suffix
    pub fn output_for_intermediate(
        intermediate: impl AsRef<Path>,
        options: &BookletOptions,
    ) -> Result<PathBuf> {
        let intermediate = intermediate.as_ref();
        let tail = format!("{}.{}", options.intermediate_suffix, PDF_EXTENSION);

        let file_name = intermediate
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| name.len() > tail.len())
            .and_then(|name| name.strip_suffix(&tail))
            .ok_or_else(|| {
                BookletError::Config(format!(
                    "Intermediate file {} does not end with {}",
                    intermediate.display(),
                    tail
                ))
            })?;

        Ok(intermediate.with_file_name(format!(
            "{}{}.{}",
            file_name, options.output_suffix, PDF_EXTENSION
        )))
    }

    /// All three paths must name different files
    pub fn validate(&self) -> Result<()> {
        if self.input == self.intermediate
            || self.input == self.output
            || self.intermediate == self.output
        {
            return Err(BookletError::Config(format!(
                "Input, intermediate and output paths must differ: {}, {}, {}",
                self.input.display(),
                self.intermediate.display(),
                self.output.display()
            )));
        }
        Ok(())
    }
}

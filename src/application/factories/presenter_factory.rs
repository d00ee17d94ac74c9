use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Where a finished report is delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Resolves the destination of a report
    ///
    /// An explicit output path always wins. Otherwise Markdown goes to stdout and
    /// binary formats are written as `{output_dir or .}/{suggested_name}`.
    pub fn resolve(
        output: Option<&Path>,
        output_dir: Option<&Path>,
        format: OutputFormat,
        suggested_name: &str,
    ) -> Self {
        if let Some(path) = output {
            return PresenterType::File(path.to_path_buf());
        }
        match format {
            OutputFormat::Markdown => PresenterType::Stdout,
            OutputFormat::Docx => {
                let dir = output_dir.unwrap_or_else(|| Path::new("."));
                PresenterType::File(dir.join(suggested_name))
            }
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use site_inspector::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

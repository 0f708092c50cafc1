use crate::render::renderer::DEFAULT_TEMPLATE;
use std::path::{Path, PathBuf};

/// Appended to the entity name in output file names
pub const DEFAULT_FILE_SUFFIX: &str = "+CoreDataProperties";
pub const DEFAULT_FILE_EXTENSION: &str = "swift";

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Schema file or `.xcdatamodel` directory
    pub input: PathBuf,

    /// Directory the generated files are written to
    pub output_dir: PathBuf,

    /// Replaces the built-in templates when set
    pub template_dir: Option<PathBuf>,

    pub template_name: String,

    pub file_suffix: String,

    pub file_extension: String,
}

impl GeneratorConfig {
    /// Defaults: output next to the input, built-in template,
    /// `<Entity>+CoreDataProperties.swift` file names.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output_dir = default_output_dir(&input);

        Self {
            input,
            output_dir,
            template_dir: None,
            template_name: DEFAULT_TEMPLATE.to_string(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Load templates from a directory instead of the built-in set
    pub fn template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn template_name(mut self, name: &str) -> Self {
        self.template_name = name.to_string();
        self
    }

    pub fn file_suffix(mut self, suffix: &str) -> Self {
        self.file_suffix = suffix.to_string();
        self
    }

    /// Set the file extension, with or without the leading dot
    pub fn file_extension(mut self, extension: &str) -> Self {
        self.file_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// `<output_dir>/<entity><suffix>.<extension>`
    pub fn output_path(&self, entity: &str) -> PathBuf {
        self.output_dir.join(format!(
            "{}{}.{}",
            entity, self.file_suffix, self.file_extension
        ))
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

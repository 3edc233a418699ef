//! Configuration loading and management.
//!
//! [`SplitConfig`] can be created programmatically, loaded from a TOML file,
//! or discovered as `pdfsplit.toml` in the current directory or one of its
//! ancestors. Every field has a default, so a config file only needs the
//! values it changes.

use crate::{PdfSplitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name used for each page's text layer.
pub const DEFAULT_TEXT_FILE_NAME: &str = "text_layer.txt";

/// Name of the file searched for by [`SplitConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "pdfsplit.toml";

/// Settings for one pdfsplit run.
///
/// # Example
///
/// ```rust
/// use pdfsplit::SplitConfig;
///
/// let config = SplitConfig {
///     thread_count: 4,
///     ..Default::default()
/// };
/// assert_eq!(config.text_file_name, "text_layer.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Worker threads per document. `0` spawns no workers, so nothing is extracted.
    #[serde(default = "default_thread_count")]
    pub thread_count: usize,

    /// Name of the text file written inside each page directory.
    #[serde(default = "default_text_file_name")]
    pub text_file_name: String,

    /// Run the image extension point and write whatever it returns.
    #[serde(default)]
    pub extract_images: bool,

    /// Extension for image files (`image_<index>.<image_format>`).
    #[serde(default = "default_image_format")]
    pub image_format: String,

    /// Extension identifying input documents, without the dot. Case-sensitive.
    #[serde(default = "default_pdf_extension")]
    pub pdf_extension: String,

    /// Passwords tried, in order, on encrypted documents.
    #[serde(default)]
    pub passwords: Vec<String>,
}

fn default_thread_count() -> usize {
    num_cpus::get()
}

fn default_text_file_name() -> String {
    DEFAULT_TEXT_FILE_NAME.to_string()
}

fn default_image_format() -> String {
    "png".to_string()
}

fn default_pdf_extension() -> String {
    "pdf".to_string()
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            thread_count: default_thread_count(),
            text_file_name: default_text_file_name(),
            extract_images: false,
            image_format: default_image_format(),
            pdf_extension: default_pdf_extension(),
            passwords: Vec::new(),
        }
    }
}

impl SplitConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `PdfSplitError::Validation` if the file can't be read, is invalid
    /// TOML, or fails [`SplitConfig::validate`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PdfSplitError::validation_with_source(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| PdfSplitError::validation_with_source(format!("Invalid TOML in {}", path.display()), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Discover `pdfsplit.toml` in the current directory or its parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(PdfSplitError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!("Using config file {}", candidate.display());
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Check that every output name is a plain, non-empty file name component.
    ///
    /// # Errors
    ///
    /// Returns `PdfSplitError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        validate_component("text_file_name", &self.text_file_name)?;
        validate_component("image_format", &self.image_format)?;
        validate_component("pdf_extension", &self.pdf_extension)?;

        if self.pdf_extension.starts_with('.') {
            return Err(PdfSplitError::validation(format!(
                "pdf_extension must not start with a dot, got '{}'",
                self.pdf_extension
            )));
        }

        Ok(())
    }
}

fn validate_component(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PdfSplitError::validation(format!("{} must not be empty", field)));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(PdfSplitError::validation(format!(
            "{} must be a plain file name, got '{}'",
            field, value
        )));
    }
    Ok(())
}

//! Widget configuration and required-field validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::error::{Error, Result};

/// One slide: a title bar plus the source of its expanded body.
///
/// At most one of `html` / `template` supplies the body; `html` wins when
/// both are present. Neither present leaves the panel body empty.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    pub background_image: PathBuf,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
}

/// Validated accordion options.
#[derive(Debug, Clone)]
pub struct AccordionConfig {
    pub background_image: PathBuf,
    pub slide_data: Vec<SlideConfig>,
    pub element: String,
}

/// Options as they arrive from the caller (or a JSON file), before the
/// required-field check. Every top-level field is optional here so that
/// validation can report all of the missing ones, not just the first.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AccordionOptions {
    #[serde(default)]
    pub background_image: Option<PathBuf>,
    #[serde(default)]
    pub slide_data: Option<Vec<SlideConfig>>,
    #[serde(default)]
    pub element: Option<String>,
}

impl AccordionOptions {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Check that the required options have been provided.
    ///
    /// Each missing field gets its own diagnostic; any missing field
    /// halts initialization with `Error::MissingFields`.
    pub fn validate(self) -> Result<AccordionConfig> {
        let mut missing = Vec::new();
        if self.background_image.is_none() {
            missing.push("background_image");
        }
        if self.slide_data.is_none() {
            missing.push("slide_data");
        }
        if self.element.is_none() {
            missing.push("element");
        }

        if !missing.is_empty() {
            for field in &missing {
                error!(
                    "{field} is a required field. Please add the field to your \
                     options and reload."
                );
            }
            return Err(Error::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        Ok(AccordionConfig {
            background_image: self.background_image.unwrap(),
            slide_data: self.slide_data.unwrap(),
            element: self.element.unwrap(),
        })
    }
}

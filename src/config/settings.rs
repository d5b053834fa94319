// src/config/settings.rs
//! Optional `pickem.toml` with user defaults. Every key is optional:
//!
//! ```toml
//! max_confidence = 16
//! layout = "standings"
//! sort = "ceiling"
//! count_unmarked = false
//!
//! [export]
//! format = "tsv"
//! include_headers = false
//! out = "out/week3.tsv"
//! ```

use std::fs;
use std::path::{ Path, PathBuf };

use serde::Deserialize;

use super::consts::{ CLI_MAX_CONFIDENCE_LIMIT, SETTINGS_FILE };
use super::options::{ AppOptions, ExportFormat, Layout, SortOrder };
use crate::error::SettingsError;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub max_confidence: Option<u32>,
    pub layout: Option<Layout>,
    pub sort: Option<SortOrder>,
    pub count_unmarked: Option<bool>,
    pub export: ExportSettings,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    pub format: Option<ExportFormat>,
    pub include_headers: Option<bool>,
    pub out: Option<String>,
}

impl Settings {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&text, path)?;
        logf!("Settings: loaded {}", path.display());
        Ok(settings)
    }

    /// `pickem.toml` in the working directory, if present.
    pub fn load_default() -> Result<Option<Self>, SettingsError> {
        let path = PathBuf::from(SETTINGS_FILE);
        if !path.is_file() {
            logd!("Settings: no {} in working directory", SETTINGS_FILE);
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max) = self.max_confidence {
            if max == 0 || max > CLI_MAX_CONFIDENCE_LIMIT {
                return Err(SettingsError::Invalid(format!(
                    "max_confidence must be 1..={}, got {}",
                    CLI_MAX_CONFIDENCE_LIMIT, max
                )));
            }
        }
        if matches!(&self.export.out, Some(out) if out.trim().is_empty()) {
            return Err(SettingsError::Invalid(s!("export.out must not be empty")));
        }
        Ok(())
    }

    /// Layer these settings over `opts`; unset keys leave `opts` untouched.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(max) = self.max_confidence {
            opts.analyze.max_confidence = Some(max);
        }
        if let Some(layout) = self.layout {
            opts.analyze.layout = layout;
        }
        if let Some(sort) = self.sort {
            opts.analyze.sort = sort;
        }
        if let Some(c) = self.count_unmarked {
            opts.analyze.count_unmarked = c;
        }
        if let Some(fmt) = self.export.format {
            opts.export.set_format(fmt);
        }
        if let Some(h) = self.export.include_headers {
            opts.export.include_headers = h;
        }
        if let Some(out) = &self.export.out {
            opts.export.set_path(out);
        }
    }
}

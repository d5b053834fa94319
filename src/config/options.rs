// src/config/options.rs
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub analyze: AnalyzeOptions,
    pub export: ExportOptions,
}

/// How the pasted text is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Standings if any rank marker ("1st", "2nd", …) is present, otherwise inline.
    #[default]
    Auto,
    /// One player per line: `Alice 1 2 - (3) - (4)`.
    Inline,
    /// CBS Weekly Standings block: rank, name, points, then picks.
    Standings,
}

impl Layout {
    pub fn label(&self) -> &'static str {
        match self {
            Layout::Auto => "Auto",
            Layout::Inline => "One line per player",
            Layout::Standings => "Weekly standings",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order players appeared in the paste.
    #[default]
    Input,
    /// Ceiling (current + remaining) descending, then current points descending.
    Ceiling,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Input => "Paste order",
            SortOrder::Ceiling => "Highest ceiling",
        }
    }
}

/// "My entry" override: remaining points from the games still to be played.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusOptions {
    pub name: String,
    /// Manual remaining teams. Empty means "use the detected pre-game teams".
    pub remaining_teams: BTreeSet<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyzeOptions {
    /// `None` auto-detects from the largest confidence value in the paste.
    pub max_confidence: Option<u32>,
    pub layout: Layout,
    pub sort: SortOrder,
    /// Also count values never mentioned on a row (neither `N` nor `- (N)`) as remaining.
    pub count_unmarked: bool,
    pub focus: Option<FocusOptions>,
}

impl AnalyzeOptions {
    /// GUI convention: 0 means auto-detect.
    pub fn set_max_override(&mut self, value: u32) {
        self.max_confidence = if value == 0 { None } else { Some(value) };
    }

    pub fn max_override(&self) -> u32 {
        self.max_confidence.unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for delimited formats.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension follows the format unless the user typed one.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.user_ext {
            Some(ext) => ext.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        path.push(join!(&*stem, ".", &ext));
        path
    }

    /// Parse GUI/CLI text into dir + stem (+ extension if one was given).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = match p.parent() {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::new(),
        };
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn set_format(&mut self, fmt: ExportFormat) {
        self.format = fmt;
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

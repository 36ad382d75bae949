// src/config/options.rs
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// Where a run comes from: a live form submission or a cached record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunSource {
    Remote,
    Cached(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub source: RunSource,
    pub overrides: Vec<(String, String)>, // --set KEY=VALUE, in given order
    pub case_name: Option<String>,        // cache the run under this name
    pub out: Option<PathBuf>,             // export target; stdout when absent
    pub format: ExportFormat,
    pub print_echo: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            source: RunSource::Remote,
            overrides: Vec::new(),
            case_name: None,
            out: None,
            format: ExportFormat::Csv,
            print_echo: false,
        }
    }
}

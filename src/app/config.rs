use std::path::PathBuf;

use clap::Parser;

pub const CSV_FILE: &str = "interest_results.csv";
pub const CHART_FILE: &str = "interest_chart.svg";

/// Compound interest calculator with table, chart and export.
#[derive(Parser, Debug, Clone)]
#[command(name = "interest-me", version, about)]
pub struct Config {
    /// Directory offered as the save destination.
    #[arg(long, env = "INTEREST_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Prefix of the numbered folder created by each save.
    #[arg(long, env = "INTEREST_FOLDER_PREFIX", default_value = "Saved")]
    pub folder_prefix: String,

    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Size of the exported chart image in pixels.
    #[arg(long, default_value_t = 800)]
    pub chart_width: u32,

    #[arg(long, default_value_t = 600)]
    pub chart_height: u32,
}

impl Config {
    pub fn export(&self) -> ExportConfig {
        ExportConfig {
            folder_prefix: self.folder_prefix.clone(),
            chart_size: (self.chart_width, self.chart_height),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            folder_prefix: "Saved".to_owned(),
            width: 800.0,
            height: 600.0,
            chart_width: 800,
            chart_height: 600,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    pub folder_prefix: String,
    pub chart_size: (u32, u32),
}

impl Default for ExportConfig {
    fn default() -> Self {
        Config::default().export()
    }
}

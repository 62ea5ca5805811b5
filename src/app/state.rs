use log::{error, info, warn};
use rust_decimal::Decimal;

use crate::app::calculator::{project, Series};
use crate::app::config::ExportConfig;
use crate::app::error::{AppError, Result};
use crate::app::export::{self, Artifact};
use crate::app::input::Inputs;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_owned(),
            message: message.into(),
        }
    }
}

impl From<&AppError> for Notice {
    fn from(e: &AppError) -> Self {
        let message = match e {
            AppError::InvalidInput { .. } => "Invalid input, enter a number!".to_owned(),
            e => e.to_string(),
        };
        Self {
            kind: NoticeKind::Error,
            title: e.title().to_owned(),
            message,
        }
    }
}

/// Things the window can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Calculate,
    Clear,
    Save,
    DismissNotice,
}

/// Everything the window shows. Owned by the controller; the UI only reads it
/// and edits the text fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    pub inputs: Inputs,
    pub series: Option<Series>,
    pub export_dir: String,
    pub save_counter: u32,
    pub notice: Option<Notice>,
    /// Bumped whenever `series` is replaced or cleared.
    pub revision: u64,
}

impl State {
    pub fn new(export_dir: String) -> Self {
        Self {
            export_dir,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: Action, cfg: &ExportConfig) {
        match action {
            Action::Calculate => {
                if let Err(e) = self.calculate() {
                    warn!("calculation rejected: {e}");
                    self.notice = Some(Notice::from(&e));
                }
            }
            Action::Clear => self.reset(),
            Action::Save => match self.save(cfg) {
                Ok(artifact) => {
                    self.notice = Some(Notice::info(
                        "Save",
                        format!("Results saved to {}", artifact.dir.display()),
                    ))
                }
                Err(e) => {
                    error!("save failed: {e}");
                    self.notice = Some(Notice::from(&e));
                }
            },
            Action::DismissNotice => self.notice = None,
        }
    }

    /// Replaces the series only when every field parses and the projection fits.
    pub fn calculate(&mut self) -> Result<()> {
        let params = self.inputs.parse()?;
        let series = project(&params)?;
        info!(
            "projected {} years at {}% from {}",
            series.len(),
            params.rate * Decimal::ONE_HUNDRED,
            params.principal
        );
        self.series = Some(series);
        self.revision += 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.inputs.clear();
        if self.series.take().is_some() {
            self.revision += 1;
        }
    }

    pub fn save(&mut self, cfg: &ExportConfig) -> Result<Artifact> {
        export::save(
            self.series.as_ref(),
            &self.export_dir,
            &mut self.save_counter,
            cfg,
        )
    }
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::app::calculator::Series;
use crate::app::chart;
use crate::app::config::{ExportConfig, CHART_FILE, CSV_FILE};
use crate::app::error::{AppError, Result};

/// Files written by one save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub dir: PathBuf,
    pub csv: PathBuf,
    pub chart: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct Record {
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "Total")]
    total: String,
}

/// Writes the series and its chart into a fresh numbered folder under `dest`.
///
/// `counter` is the next folder number to try. Numbers already taken on disk
/// are skipped, and on success the counter moves past the folder used.
pub fn save(
    series: Option<&Series>,
    dest: &str,
    counter: &mut u32,
    cfg: &ExportConfig,
) -> Result<Artifact> {
    let series = series.ok_or(AppError::NoSeriesAvailable)?;

    let dest = dest.trim();
    if dest.is_empty() {
        return Err(AppError::dir(
            dest,
            io::Error::new(io::ErrorKind::NotFound, "no directory selected"),
        ));
    }
    let dest = Path::new(dest);
    let meta = fs::metadata(dest).map_err(|e| AppError::dir(dest, e))?;
    if !meta.is_dir() {
        return Err(AppError::dir(dest, io::Error::other("not a directory")));
    }

    let mut n = *counter;
    while dest.join(folder_name(&cfg.folder_prefix, n)).exists() {
        n += 1;
    }
    let name = folder_name(&cfg.folder_prefix, n);
    let target = dest.join(&name);
    let staging = dest.join(format!(".{name}.partial"));
    debug!("staging export in {}", staging.display());

    if let Err(e) = write_all(series, &staging, cfg).and_then(|()| {
        fs::rename(&staging, &target).map_err(|e| AppError::dir(&target, e))
    }) {
        if staging.exists() {
            if let Err(cleanup) = fs::remove_dir_all(&staging) {
                warn!("could not remove {}: {cleanup}", staging.display());
            }
        }
        return Err(e);
    }

    *counter = n + 1;
    info!("saved {} rows to {}", series.len(), target.display());
    Ok(Artifact {
        csv: target.join(CSV_FILE),
        chart: target.join(CHART_FILE),
        dir: target,
    })
}

fn folder_name(prefix: &str, n: u32) -> String {
    format!("{prefix}{n}")
}

fn write_all(series: &Series, dir: &Path, cfg: &ExportConfig) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| AppError::dir(dir, e))?;
    }
    fs::create_dir(dir).map_err(|e| AppError::dir(dir, e))?;

    let csv_path = dir.join(CSV_FILE);
    let file = fs::File::create(&csv_path).map_err(|e| AppError::dir(&csv_path, e))?;
    write_csv(series, file)?;

    let svg = chart::render_svg(series, cfg.chart_size)?;
    let chart_path = dir.join(CHART_FILE);
    fs::write(&chart_path, svg).map_err(|e| AppError::dir(&chart_path, e))?;

    Ok(())
}

/// `Year,Total` rows, totals with two decimals.
pub fn write_csv<W: io::Write>(series: &Series, w: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(w);
    if series.is_empty() {
        writer.write_record(["Year", "Total"])?;
    }
    for entry in series {
        writer.serialize(Record {
            year: entry.year,
            total: entry.total().to_string(),
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn read_csv(path: &Path) -> Result<Vec<(i64, Decimal)>> {
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize::<Record>()
        .map(|row| {
            let row = row?;
            let total = Decimal::from_str(&row.total).map_err(|_| AppError::InvalidInput {
                field: "Total",
                value: row.total.clone(),
            })?;
            Ok((row.year, total))
        })
        .collect()
}

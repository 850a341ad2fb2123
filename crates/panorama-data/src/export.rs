use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use panorama_core::{DatasetSizes, SampleOptions};

use crate::errors::ExportError;
use crate::{
    cluster_points, device_share, monthly_sales, price_history, regional_summary, team_performance,
};

/// Summary of one exported table.
#[derive(Debug, Clone)]
pub struct ExportedTable {
    pub name: &'static str,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Write all six datasets as CSV files under `out_dir`.
///
/// The directory is created if missing. Repeated runs with equal options
/// reproduce the files byte for byte.
pub fn export_all(
    out_dir: &Path,
    opts: &SampleOptions,
    sizes: &DatasetSizes,
) -> Result<Vec<ExportedTable>, ExportError> {
    fs::create_dir_all(out_dir)?;

    let tables = vec![
        write_table(out_dir, "sales", &monthly_sales(opts, sizes.months))?,
        write_table(out_dir, "regional", &regional_summary(opts))?,
        write_table(out_dir, "performance", &team_performance(opts))?,
        write_table(out_dir, "timeseries", &price_history(opts, sizes.days))?,
        write_table(out_dir, "scatter", &cluster_points(opts, sizes.points))?,
        write_table(out_dir, "share", &device_share(opts))?,
    ];

    Ok(tables)
}

fn write_table<T: Serialize>(
    out_dir: &Path,
    name: &'static str,
    rows: &[T],
) -> Result<ExportedTable, ExportError> {
    let path = out_dir.join(format!("{name}.csv"));
    let bytes = write_records_csv(&path, rows)?;
    info!(table = name, rows = rows.len(), bytes, "table exported");
    Ok(ExportedTable {
        name,
        path,
        rows: rows.len() as u64,
        bytes,
    })
}

/// Write records as CSV with a header row, returning bytes written.
pub fn write_records_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<u64, ExportError> {
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::Writer::from_writer(counting);

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

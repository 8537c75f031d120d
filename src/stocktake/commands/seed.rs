use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InventoryError, Result};
use crate::normalize::RawRecord;
use crate::store::{DataStore, UpsertOutcome};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Tally of a seed load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub rows: usize,
    pub inserted: usize,
    pub updated: usize,
    pub kept: usize,
}

pub fn run<S: DataStore>(store: &mut S, path: &Path, today: NaiveDate) -> Result<CmdResult> {
    let file = File::open(path)?;
    let report = load(store, BufReader::new(file), today)?;

    info!(
        path = %path.display(),
        rows = report.rows,
        inserted = report.inserted,
        updated = report.updated,
        kept = report.kept,
        "seed file loaded"
    );

    let mut result = CmdResult::default().with_seed_report(report);
    result.add_message(CmdMessage::success(format!(
        "Loaded {} rows from {} ({} new, {} updated, {} unchanged)",
        report.rows,
        path.display(),
        report.inserted,
        report.updated,
        report.kept
    )));
    Ok(result)
}

/// Normalize and upsert every row in file order. The first bad row aborts the load.
pub fn load<S: DataStore, R: Read>(store: &mut S, reader: R, today: NaiveDate) -> Result<SeedReport> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut report = SeedReport::default();

    for (row_idx, row) in rdr.deserialize::<RawRecord>().enumerate() {
        // +2 for 1-indexed and header row
        let line = row_idx as u64 + 2;
        let at_line = |source: InventoryError| InventoryError::Seed {
            line,
            source: Box::new(source),
        };

        let raw = row.map_err(|e| at_line(e.into()))?;
        let record = raw.normalize(today).map_err(at_line)?;

        match store.upsert(&record).map_err(at_line)? {
            UpsertOutcome::Inserted(_) => report.inserted += 1,
            UpsertOutcome::Updated(_) => report.updated += 1,
            UpsertOutcome::Kept(_) => report.kept += 1,
        }
        report.rows += 1;
    }

    Ok(report)
}

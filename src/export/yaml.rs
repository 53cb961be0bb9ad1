//! YAML Export functionality

use std::io::Write;

use crate::error::{SaveyError, SaveyResult};
use crate::export::json::SnapshotExport;
use crate::services::Snapshot;

/// Export a snapshot to YAML
pub fn export_snapshot_yaml<W: Write>(snapshot: &Snapshot, writer: &mut W) -> SaveyResult<()> {
    let export = SnapshotExport::from_snapshot(snapshot);
    let io_err = |e: std::io::Error| SaveyError::Export(e.to_string());

    writeln!(writer, "# savey-cli snapshot export").map_err(io_err)?;
    writeln!(writer, "# Captured: {}", export.captured_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SaveyError::Export(e.to_string()))?;

    Ok(())
}

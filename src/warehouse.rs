//! Warehouse load sink.
//!
//! After a schedule is produced, an orchestration layer moves staged
//! round data into the analytical warehouse. Each step is a named,
//! parameterless bulk statement executed by a [`WarehouseSink`]; this
//! crate only defines the steps and their order; the SQL and the
//! connection live with the sink implementation.
//!
//! Staged rows move through [`StagingStatus`]:
//! `Unprocessed (0) -> Ready (1) -> Processed (2)`. Dimension and fact
//! loads read only `Ready` rows, so re-running a pipeline after a
//! failure does not load a row twice once it has been flagged processed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SinkError;

/// Load status of a staged row (`dw_status` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StagingStatus {
    Unprocessed = 0,
    Ready = 1,
    Processed = 2,
}

impl StagingStatus {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unprocessed),
            1 => Some(Self::Ready),
            2 => Some(Self::Processed),
            _ => None,
        }
    }
}

/// A bulk warehouse operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarehouseOp {
    /// Unprocessed -> Ready.
    FlagStagingForProcess,
    UpdateGameDimension,
    UpdateUserDimension,
    UpdateTimeDimension,
    UpdateFactTable,
    /// Ready -> Processed.
    FlagStagingProcessed,
    /// Empties every warehouse table. Not part of the standard pipeline.
    TruncateAll,
}

impl WarehouseOp {
    pub fn name(self) -> &'static str {
        match self {
            Self::FlagStagingForProcess => "FLAG_STAGING_FOR_PROCESS",
            Self::UpdateGameDimension => "UPDATE_GAME_DIMENSION",
            Self::UpdateUserDimension => "UPDATE_USER_DIMENSION",
            Self::UpdateTimeDimension => "UPDATE_TIME_DIMENSION",
            Self::UpdateFactTable => "UPDATE_FACT_TABLE",
            Self::FlagStagingProcessed => "FLAG_STAGING_PROCESSED",
            Self::TruncateAll => "TRUNCATE_ALL",
        }
    }

    /// Status change applied to staged rows, as `(from, to)`.
    pub fn transition(self) -> Option<(StagingStatus, StagingStatus)> {
        match self {
            Self::FlagStagingForProcess => {
                Some((StagingStatus::Unprocessed, StagingStatus::Ready))
            }
            Self::FlagStagingProcessed => Some((StagingStatus::Ready, StagingStatus::Processed)),
            _ => None,
        }
    }

    /// Table loaded from `Ready` rows and compacted afterwards.
    pub fn target_table(self) -> Option<&'static str> {
        match self {
            Self::UpdateGameDimension => Some("DW_GameDimension"),
            Self::UpdateUserDimension => Some("DW_UserDimension"),
            Self::UpdateTimeDimension => Some("DW_TimeDimension"),
            Self::UpdateFactTable => Some("DW_FactTable"),
            _ => None,
        }
    }

    /// Whether the operation deletes data rather than moving it forward.
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::TruncateAll)
    }
}

/// Executes warehouse operations against a backing store.
pub trait WarehouseSink {
    fn execute(&mut self, op: WarehouseOp) -> Result<(), SinkError>;
}

/// Ordered list of warehouse operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPipeline {
    ops: Vec<WarehouseOp>,
}

/// Outcome of a pipeline run.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Operations that completed, in order.
    pub completed: Vec<WarehouseOp>,
    /// First failure; later operations were not attempted.
    pub failure: Option<SinkError>,
}

impl LoadReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

impl LoadPipeline {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Flag, load the game, user and time dimensions, load facts, flag done.
    ///
    /// The time dimension precedes the fact table, whose rows reference it.
    pub fn standard() -> Self {
        Self::new()
            .then(WarehouseOp::FlagStagingForProcess)
            .then(WarehouseOp::UpdateGameDimension)
            .then(WarehouseOp::UpdateUserDimension)
            .then(WarehouseOp::UpdateTimeDimension)
            .then(WarehouseOp::UpdateFactTable)
            .then(WarehouseOp::FlagStagingProcessed)
    }

    pub fn then(mut self, op: WarehouseOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn ops(&self) -> &[WarehouseOp] {
        &self.ops
    }

    /// Runs every operation in order, stopping at the first failure.
    pub fn run<S: WarehouseSink + ?Sized>(&self, sink: &mut S) -> LoadReport {
        let mut report = LoadReport::default();

        for &op in &self.ops {
            if op.is_destructive() {
                warn!(op = op.name(), "running destructive warehouse operation");
            } else {
                debug!(op = op.name(), "running warehouse operation");
            }

            if let Err(err) = sink.execute(op) {
                warn!(op = op.name(), error = %err, "warehouse load stopped");
                report.failure = Some(err);
                return report;
            }
            report.completed.push(op);
        }

        info!(ops = report.completed.len(), "warehouse load complete");
        report
    }
}

impl Default for LoadPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    /// In-memory stand-in for the warehouse: staged rows carry a game id
    /// and a status; dimension loads collect distinct values.
    #[derive(Default)]
    struct MemorySink {
        staging: Vec<(String, StagingStatus)>,
        tables: HashMap<&'static str, HashSet<String>>,
        executed: Vec<WarehouseOp>,
        fail_on: Option<WarehouseOp>,
    }

    impl MemorySink {
        fn with_rows(games: &[&str]) -> Self {
            Self {
                staging: games
                    .iter()
                    .map(|g| (g.to_string(), StagingStatus::Unprocessed))
                    .collect(),
                ..Self::default()
            }
        }

        fn count(&self, status: StagingStatus) -> usize {
            self.staging.iter().filter(|(_, s)| *s == status).count()
        }
    }

    impl WarehouseSink for MemorySink {
        fn execute(&mut self, op: WarehouseOp) -> Result<(), SinkError> {
            if self.fail_on == Some(op) {
                return Err(SinkError::new(op.name(), "simulated failure"));
            }
            self.executed.push(op);

            if let Some((from, to)) = op.transition() {
                for (_, status) in &mut self.staging {
                    if *status == from {
                        *status = to;
                    }
                }
            } else if let Some(table) = op.target_table() {
                let ready = self
                    .staging
                    .iter()
                    .filter(|(_, s)| *s == StagingStatus::Ready)
                    .map(|(g, _)| g.clone());
                self.tables.entry(table).or_default().extend(ready);
            } else if op.is_destructive() {
                self.tables.clear();
            }
            Ok(())
        }
    }

    #[test]
    fn test_status_codes() {
        for status in [
            StagingStatus::Unprocessed,
            StagingStatus::Ready,
            StagingStatus::Processed,
        ] {
            assert_eq!(StagingStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(StagingStatus::Processed.code(), 2);
        assert_eq!(StagingStatus::from_code(3), None);
    }

    #[test]
    fn test_transitions_move_forward() {
        assert_eq!(
            WarehouseOp::FlagStagingForProcess.transition(),
            Some((StagingStatus::Unprocessed, StagingStatus::Ready))
        );
        assert_eq!(
            WarehouseOp::FlagStagingProcessed.transition(),
            Some((StagingStatus::Ready, StagingStatus::Processed))
        );
        assert_eq!(WarehouseOp::UpdateFactTable.transition(), None);
    }

    #[test]
    fn test_standard_pipeline_order() {
        let ops = LoadPipeline::standard().ops().to_vec();
        assert_eq!(ops.first(), Some(&WarehouseOp::FlagStagingForProcess));
        assert_eq!(ops.last(), Some(&WarehouseOp::FlagStagingProcessed));
        let time = ops.iter().position(|&o| o == WarehouseOp::UpdateTimeDimension);
        let fact = ops.iter().position(|&o| o == WarehouseOp::UpdateFactTable);
        assert!(time < fact);
        assert!(!ops.contains(&WarehouseOp::TruncateAll));
    }

    #[test]
    fn test_run_loads_and_flags_rows() {
        let mut sink = MemorySink::with_rows(&["G1", "G2", "G1"]);
        let report = LoadPipeline::standard().run(&mut sink);

        assert!(report.is_success());
        assert_eq!(report.completed.len(), 6);
        assert_eq!(sink.count(StagingStatus::Processed), 3);
        assert_eq!(sink.tables["DW_GameDimension"].len(), 2);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let mut sink = MemorySink::with_rows(&["G1"]);
        LoadPipeline::standard().run(&mut sink);
        sink.staging.push(("G2".into(), StagingStatus::Unprocessed));
        LoadPipeline::standard().run(&mut sink);

        assert_eq!(sink.count(StagingStatus::Processed), 2);
        assert_eq!(sink.tables["DW_FactTable"].len(), 2);
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let mut sink = MemorySink::with_rows(&["G1"]);
        sink.fail_on = Some(WarehouseOp::UpdateTimeDimension);

        let report = LoadPipeline::standard().run(&mut sink);
        assert!(!report.is_success());
        assert_eq!(report.completed.len(), 3);
        assert_eq!(report.failure.as_ref().map(|e| e.op), Some("UPDATE_TIME_DIMENSION"));
        assert!(!sink.executed.contains(&WarehouseOp::UpdateFactTable));
        // Rows stay Ready so a rerun picks them up
        assert_eq!(sink.count(StagingStatus::Ready), 1);
    }

    #[test]
    fn test_truncate_clears_tables() {
        let mut sink = MemorySink::with_rows(&["G1"]);
        LoadPipeline::standard().run(&mut sink);
        let report = LoadPipeline::new().then(WarehouseOp::TruncateAll).run(&mut sink);

        assert!(report.is_success());
        assert!(sink.tables.is_empty());
        assert!(WarehouseOp::TruncateAll.is_destructive());
    }

    #[test]
    fn test_dyn_sink() {
        let mut sink = MemorySink::with_rows(&["G1"]);
        let dyn_sink: &mut dyn WarehouseSink = &mut sink;
        let report = LoadPipeline::default().run(dyn_sink);
        assert!(report.is_success());
    }
}

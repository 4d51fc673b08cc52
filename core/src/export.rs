//! # Export Service
//!
//! Flushes a [`Registry`] to a [`RecordStore`]. Reads only; the registry is
//! never modified, so the same export can be repeated at will.

use tracing::{debug, info};

use carebook_common::error::StoreError;
use carebook_common::store::{ExportPolicy, ExportReport, RecordStore, TableCounts};

use crate::registry::Registry;

pub struct ExportService {
    store: Box<dyn RecordStore>,
    policy: ExportPolicy,
}

impl ExportService {
    pub fn new(store: Box<dyn RecordStore>, policy: ExportPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> ExportPolicy {
        self.policy
    }

    /// Writes every doctor, patient and appointment in one batch.
    ///
    /// Store failures are returned unchanged.
    pub fn export_all(&mut self, registry: &Registry) -> Result<ExportReport, StoreError> {
        let counts: TableCounts = registry.counts();
        debug!(
            "Exporting {} doctors, {} patients, {} appointments ({})",
            counts.doctors, counts.patients, counts.appointments, self.policy
        );

        let report: ExportReport = self.store.export(registry.export_batch(), self.policy)?;

        info!(
            "Export committed: {} rows written, {} already present",
            report.written(),
            report.skipped()
        );
        Ok(report)
    }

    pub fn stored_counts(&self) -> Result<TableCounts, StoreError> {
        self.store.row_counts()
    }
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use collector_common::Result;
use serde::{Deserialize, Serialize};

use crate::collector::PointCollector;
use crate::tour::Connection;

/// Machine-readable summary of one run, written as pretty JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourReport {
    pub seed: u64,
    pub point_count: usize,
    pub operation_count: u64,
    pub total_distance: f64,
    /// `[x, y]` pairs, base first.
    pub positions: Vec<[f64; 2]>,
    pub connections: Vec<Connection>,
}

impl TourReport {
    pub fn from_collector(collector: &PointCollector) -> Self {
        Self {
            seed: collector.random_seed(),
            point_count: collector.point_count(),
            operation_count: collector.operation_count(),
            total_distance: collector.total_distance(),
            positions: collector
                .positions()
                .iter()
                .map(|p| [p.x, p.y])
                .collect(),
            connections: collector.connections().to_vec(),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut out, self)?;
        out.flush()?;

        tracing::info!("📄 Report written to {}", path.display());
        Ok(())
    }
}

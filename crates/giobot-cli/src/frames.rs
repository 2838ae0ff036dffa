//! Frames as JSON lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use giobot_client::{BackendError, FrameInfo, RenderBackend};
use giobot_view::{DrawOp, DrawPlan};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FrameLine<'a> {
    timestamp: DateTime<Utc>,
    tick: u64,
    turn: u32,
    ops: &'a [DrawOp],
}

/// Headless backend: every presented frame becomes one JSON object per line.
pub struct JsonlFrameWriter<W: Write> {
    out: W,
    staged: Option<String>,
}

impl JsonlFrameWriter<BufWriter<File>> {
    /// Create (or truncate) `path`.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create frame log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlFrameWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            staged: None,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderBackend for JsonlFrameWriter<W> {
    fn draw(&mut self, plan: &DrawPlan, info: FrameInfo) -> Result<(), BackendError> {
        let line = FrameLine {
            timestamp: Utc::now(),
            tick: info.tick,
            turn: info.turn,
            ops: &plan.ops,
        };
        let json = serde_json::to_string(&line).map_err(|e| BackendError::Encode(e.to_string()))?;
        self.staged = Some(json);
        Ok(())
    }

    fn present(&mut self) -> Result<(), BackendError> {
        let Some(line) = self.staged.take() else {
            return Ok(());
        };
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giobot_core::{Cell, FactionId, GameSnapshot, Grid, TerrainKind};
    use giobot_view::{render, Theme, Viewport};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct FrameRecord {
        timestamp: DateTime<Utc>,
        tick: u64,
        turn: u32,
        ops: Vec<DrawOp>,
    }

    fn plan() -> DrawPlan {
        let mut grid = Grid::filled(3, 2, Cell::default()).unwrap();
        grid.set(4, Cell::new(FactionId::Player(1), TerrainKind::General, 7));
        let snapshot = GameSnapshot::new(grid).with_turn(2);
        render(&snapshot, &Viewport::default(), &Theme::default())
    }

    #[test]
    fn presented_frames_become_lines() {
        let plan = plan();
        let mut writer = JsonlFrameWriter::new(Vec::new());

        writer.draw(&plan, FrameInfo { tick: 0, turn: 2 }).unwrap();
        writer.present().unwrap();
        writer.draw(&plan, FrameInfo { tick: 5, turn: 3 }).unwrap();
        writer.present().unwrap();
        // Nothing staged, nothing written.
        writer.present().unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let records: Vec<FrameRecord> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!((records[1].tick, records[1].turn), (5, 3));
        assert_eq!(records[0].ops, plan.ops);
        assert!(records[0].timestamp <= records[1].timestamp);
    }

    #[test]
    fn create_makes_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/frames.jsonl");

        let mut writer = JsonlFrameWriter::create(&path).unwrap();
        writer.draw(&plan(), FrameInfo { tick: 1, turn: 2 }).unwrap();
        writer.present().unwrap();
        drop(writer);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"op\":\"fill_rect\""));
    }
}

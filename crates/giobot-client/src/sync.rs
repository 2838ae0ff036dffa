//! Snapshot hand-off between the provider task and the tick loop.
//!
//! The provider swaps in a whole new `Arc<GameSnapshot>` and raises the dirty flag;
//! the tick loop lowers the flag and loads whatever is latest. Snapshots are never
//! mutated after publication, so readers need no lock. If several snapshots land
//! between two ticks only the newest one is rendered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use giobot_core::GameSnapshot;

pub struct SnapshotSlot {
    latest: ArcSwapOption<GameSnapshot>,
    dirty: AtomicBool,
}

impl SnapshotSlot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            latest: ArcSwapOption::empty(),
            dirty: AtomicBool::new(false),
        })
    }
}

/// Create a connected publisher/reader pair over a fresh slot.
pub fn snapshot_slot() -> (SnapshotPublisher, SnapshotReader) {
    let slot = SnapshotSlot::new();
    (
        SnapshotPublisher { slot: slot.clone() },
        SnapshotReader { slot },
    )
}

/// Provider side of the slot.
#[derive(Clone)]
pub struct SnapshotPublisher {
    slot: Arc<SnapshotSlot>,
}

impl SnapshotPublisher {
    pub fn publish(&self, snapshot: impl Into<Arc<GameSnapshot>>) {
        self.slot.latest.store(Some(snapshot.into()));
        self.slot.dirty.store(true, Ordering::Release);
    }
}

/// Tick-loop side of the slot.
pub struct SnapshotReader {
    slot: Arc<SnapshotSlot>,
}

impl SnapshotReader {
    pub fn is_dirty(&self) -> bool {
        self.slot.dirty.load(Ordering::Acquire)
    }

    /// Clear the dirty flag and return the latest snapshot if it was set.
    pub fn take_if_dirty(&self) -> Option<Arc<GameSnapshot>> {
        if self.slot.dirty.swap(false, Ordering::AcqRel) {
            self.slot.latest.load_full()
        } else {
            None
        }
    }

    pub fn latest(&self) -> Option<Arc<GameSnapshot>> {
        self.slot.latest.load_full()
    }
}

/// Cooperative stop request, observed by the tick loop at the top of each tick.
#[derive(Debug, Clone, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_signalled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

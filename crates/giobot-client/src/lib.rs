//! Tick loop, snapshot synchronization, and backend seams for the giobot client.
//!
//! A game-state provider publishes snapshots from its own task through a
//! [`SnapshotPublisher`]. The [`TickLoop`] runs on the foreground at a fixed cadence:
//! it drains input into the move-intent machine, renders whenever a fresher snapshot
//! is available, consults the decision hook, and submits every move through one
//! [`CommandSink`].

#![forbid(unsafe_code)]

pub mod config;
pub mod io;
pub mod sync;
pub mod tick;
pub mod validate;

pub use config::{ClientConfig, ConfigError};
pub use io::{
    BackendError, ChannelInput, ChannelSink, CommandSink, FrameInfo, InputSource, QueuedInput,
    RecordingBackend, RenderBackend, ScriptedEvent, ScriptedInput, SinkError,
};
pub use sync::{snapshot_slot, Shutdown, SnapshotPublisher, SnapshotReader, SnapshotSlot};
pub use tick::{CommandSource, RunSummary, TickLoop, TickReport};
pub use validate::{validate_command, CommandRejection};

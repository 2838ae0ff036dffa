//! Seams to the outside world: where input comes from, where frames go, and where
//! moves are sent.

use std::collections::VecDeque;

use giobot_core::MoveCommand;
use giobot_input::InputEvent;
use giobot_view::DrawPlan;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Non-blocking source of input events.
pub trait InputSource {
    /// Everything that arrived since the last poll, oldest first.
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// In-memory FIFO, filled by whoever owns the window.
#[derive(Debug, Default)]
pub struct QueuedInput {
    queue: VecDeque<InputEvent>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Extend<InputEvent> for QueuedInput {
    fn extend<T: IntoIterator<Item = InputEvent>>(&mut self, iter: T) {
        self.queue.extend(iter);
    }
}

impl InputSource for QueuedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.queue.drain(..).collect()
    }
}

/// Input forwarded from another task (a window thread, a terminal reader).
#[derive(Debug)]
pub struct ChannelInput {
    rx: UnboundedReceiver<InputEvent>,
    closed: bool,
}

impl ChannelInput {
    pub fn new(rx: UnboundedReceiver<InputEvent>) -> Self {
        Self { rx, closed: false }
    }

    /// True once every sender has been dropped and the queue is drained.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl InputSource for ChannelInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    break;
                }
            }
        }
        events
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// Zero-based poll (tick) at which the event is delivered.
    pub tick: u64,
    pub event: InputEvent,
}

/// Replays a fixed script, one poll per tick.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<ScriptedEvent>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new(mut script: Vec<ScriptedEvent>) -> Self {
        script.sort_by_key(|e| e.tick);
        Self {
            script: script.into(),
            polls: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut due = Vec::new();
        while self.script.front().is_some_and(|e| e.tick <= self.polls) {
            if let Some(scripted) = self.script.pop_front() {
                due.push(scripted.event);
            }
        }
        self.polls += 1;
        due
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("render backend unavailable: {0}")]
    Unavailable(String),
    #[error("failed to encode frame: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Per-frame context handed to the backend alongside the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub tick: u64,
    pub turn: u32,
}

/// Owner of the actual pixels. Draw calls stage a frame; `present` shows it.
pub trait RenderBackend {
    fn draw(&mut self, plan: &DrawPlan, info: FrameInfo) -> Result<(), BackendError>;

    fn present(&mut self) -> Result<(), BackendError>;
}

/// Keeps every presented frame in memory.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    staged: Option<(FrameInfo, DrawPlan)>,
    pub frames: Vec<(FrameInfo, DrawPlan)>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&DrawPlan> {
        self.frames.last().map(|(_, plan)| plan)
    }
}

impl RenderBackend for RecordingBackend {
    fn draw(&mut self, plan: &DrawPlan, info: FrameInfo) -> Result<(), BackendError> {
        self.staged = Some((info, plan.clone()));
        Ok(())
    }

    fn present(&mut self) -> Result<(), BackendError> {
        if let Some(frame) = self.staged.take() {
            self.frames.push(frame);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("command channel closed")]
    Closed,
}

/// Where completed moves go. Input and the decision hook share one sink.
pub trait CommandSink {
    fn submit(&mut self, command: MoveCommand) -> Result<(), SinkError>;
}

impl CommandSink for Vec<MoveCommand> {
    fn submit(&mut self, command: MoveCommand) -> Result<(), SinkError> {
        self.push(command);
        Ok(())
    }
}

/// Forwards moves to the provider task that talks to the game service.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<MoveCommand>,
}

impl ChannelSink {
    pub fn new(tx: UnboundedSender<MoveCommand>) -> Self {
        Self { tx }
    }
}

impl CommandSink for ChannelSink {
    fn submit(&mut self, command: MoveCommand) -> Result<(), SinkError> {
        self.tx.send(command).map_err(|_| SinkError::Closed)
    }
}

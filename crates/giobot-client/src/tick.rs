//! The foreground tick loop.
//!
//! Every piece of client state that the window callbacks used to share lives in
//! [`TickLoop`]. Only the snapshot slot and the shutdown flag cross task boundaries.

use std::sync::Arc;
use std::time::Duration;

use giobot_ai::DecisionHook;
use giobot_core::{GameSnapshot, MoveCommand};
use giobot_input::{InputEvent, KeyAction, KeyBindings, MoveIntent};
use giobot_view::{render, Theme, Viewport};
use serde::{Deserialize, Serialize};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace_span, warn};

use crate::config::{ClientConfig, ConfigError};
use crate::io::{CommandSink, FrameInfo, InputSource, RenderBackend};
use crate::sync::{Shutdown, SnapshotReader};
use crate::validate::validate_command;

/// Where a submitted move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    Input,
    Hook,
}

impl CommandSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandSource::Input => "input",
            CommandSource::Hook => "hook",
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Input events drained this tick.
    pub events: usize,
    /// A frame was drawn and presented.
    pub rendered: bool,
    pub submitted: usize,
    pub rejected: usize,
    /// Shutdown was already signalled; the tick did nothing.
    pub shutdown: bool,
}

/// Totals over the lifetime of a loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub frames: u64,
    pub submitted: u64,
    pub rejected: u64,
    pub render_failures: u64,
    /// Moves the sink refused.
    pub dropped: u64,
}

pub struct TickLoop<H: DecisionHook> {
    viewport: Viewport,
    theme: Theme,
    keys: KeyBindings,
    intent: MoveIntent,
    hook: H,
    hook_state: Option<H::State>,
    reader: SnapshotReader,
    shutdown: Shutdown,
    current: Option<Arc<GameSnapshot>>,
    tick: u64,
    interval: Duration,
    summary: RunSummary,
}

impl<H: DecisionHook> TickLoop<H> {
    pub fn new(reader: SnapshotReader, shutdown: Shutdown, hook: H) -> Self {
        let viewport = Viewport::default();
        Self {
            viewport,
            theme: Theme::default(),
            keys: KeyBindings::default(),
            intent: MoveIntent::new(viewport.cols),
            hook,
            hook_state: None,
            reader,
            shutdown,
            current: None,
            tick: 0,
            interval: Duration::from_millis(100),
            summary: RunSummary::default(),
        }
    }

    pub fn from_config(
        config: &ClientConfig,
        reader: SnapshotReader,
        shutdown: Shutdown,
        hook: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(reader, shutdown, hook)
            .with_viewport(config.viewport())
            .with_theme(config.theme()?)
            .with_keys(config.keys.clone())
            .with_interval(config.tick_interval()))
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self.intent.set_row_width(viewport.cols);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_keys(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn intent(&self) -> &MoveIntent {
        &self.intent
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// `None` until the first snapshot of a started game has been seen.
    pub fn hook_state(&self) -> Option<&H::State> {
        self.hook_state.as_ref()
    }

    /// The most recently rendered snapshot.
    pub fn current(&self) -> Option<&Arc<GameSnapshot>> {
        self.current.as_ref()
    }

    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn tick<I, B, S>(&mut self, input: &mut I, backend: &mut B, sink: &mut S) -> TickReport
    where
        I: InputSource + ?Sized,
        B: RenderBackend + ?Sized,
        S: CommandSink + ?Sized,
    {
        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };
        if self.shutdown.is_signalled() {
            report.shutdown = true;
            return report;
        }

        let span = trace_span!("tick", n = self.tick);
        let _enter = span.enter();

        let events = input.poll();
        report.events = events.len();
        for event in events {
            if let Some(command) = self.route(event) {
                self.submit(CommandSource::Input, command, sink, &mut report);
            }
        }

        if let Some(snapshot) = self.reader.take_if_dirty() {
            self.show(snapshot, backend, sink, &mut report);
        }

        self.tick += 1;
        self.summary.ticks += 1;
        report
    }

    /// Run ticks at the configured cadence until shutdown.
    pub async fn run<I, B, S>(&mut self, input: &mut I, backend: &mut B, sink: &mut S) -> RunSummary
    where
        I: InputSource + ?Sized,
        B: RenderBackend + ?Sized,
        S: CommandSink + ?Sized,
    {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            hook = self.hook.name(),
            "tick loop started"
        );
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if self.tick(input, backend, sink).shutdown {
                break;
            }
        }
        info!(
            ticks = self.summary.ticks,
            frames = self.summary.frames,
            submitted = self.summary.submitted,
            rejected = self.summary.rejected,
            "tick loop stopped"
        );
        self.summary
    }

    fn route(&mut self, event: InputEvent) -> Option<MoveCommand> {
        match event {
            InputEvent::PointerDown { x, y } => match self.viewport.cell_from_point(x, y) {
                Some(idx) => {
                    debug!(idx, "selected cell");
                    self.intent.select_cell(idx)
                }
                None => {
                    debug!(x, y, "click outside the map");
                    None
                }
            },
            InputEvent::KeyPress { key } => match self.keys.action_for(&key) {
                Some(action) => self.act(action),
                None => {
                    debug!(key = %key, "unbound key");
                    None
                }
            },
            InputEvent::Key { action } => self.act(action),
            InputEvent::Resized { width, height } => {
                let resized = self.viewport.resized(width, height);
                if resized.has_area() {
                    debug!(width, height, "viewport resized");
                    self.viewport = resized;
                } else {
                    debug!(width, height, "window too small for the map, resize ignored");
                }
                None
            }
        }
    }

    fn act(&mut self, action: KeyAction) -> Option<MoveCommand> {
        match action {
            KeyAction::Nudge(direction) => self.intent.nudge(direction),
            KeyAction::Cancel => {
                debug!("selection cleared");
                self.intent.cancel();
                None
            }
            KeyAction::ToggleSplit => {
                let split = self.intent.toggle_split();
                debug!(split, "split toggled");
                None
            }
            KeyAction::Quit => {
                info!("quit requested");
                self.shutdown.signal();
                None
            }
        }
    }

    fn show<B, S>(
        &mut self,
        snapshot: Arc<GameSnapshot>,
        backend: &mut B,
        sink: &mut S,
        report: &mut TickReport,
    ) where
        B: RenderBackend + ?Sized,
        S: CommandSink + ?Sized,
    {
        let (cols, rows) = (snapshot.width(), snapshot.height());
        if cols != self.intent.row_width() {
            debug!(cols, rows, "map size changed");
            self.intent.set_row_width(cols);
        }
        self.viewport = self.viewport.with_grid(cols, rows);
        self.current = Some(snapshot.clone());

        let plan = render(&snapshot, &self.viewport, &self.theme);
        let info = FrameInfo {
            tick: self.tick,
            turn: snapshot.turn,
        };
        match backend.draw(&plan, info).and_then(|()| backend.present()) {
            Ok(()) => {
                report.rendered = true;
                self.summary.frames += 1;
            }
            Err(err) => {
                warn!(error = %err, turn = snapshot.turn, "frame dropped");
                self.summary.render_failures += 1;
            }
        }

        if let Some(outcome) = snapshot.outcome {
            info!(?outcome, turn = snapshot.turn, "game over");
            self.shutdown.signal();
            return;
        }
        if !snapshot.started {
            return;
        }

        let state = match self.hook_state.take() {
            Some(state) => state,
            None => {
                info!(hook = self.hook.name(), turn = snapshot.turn, "game started");
                self.hook.init(&snapshot)
            }
        };
        let (state, commands) = self.hook.on_snapshot(state, &snapshot);
        self.hook_state = Some(state);
        for command in commands {
            self.submit(CommandSource::Hook, command, sink, report);
        }
    }

    fn submit<S>(
        &mut self,
        source: CommandSource,
        command: MoveCommand,
        sink: &mut S,
        report: &mut TickReport,
    ) where
        S: CommandSink + ?Sized,
    {
        let grid = self.current.as_deref().map(|s| &s.grid);
        if let Err(reason) = validate_command(grid, &command) {
            warn!(source = source.as_str(), %command, %reason, "move rejected");
            report.rejected += 1;
            self.summary.rejected += 1;
            if source == CommandSource::Input {
                // The intent already advanced to the rejected destination.
                self.intent.select_cell(command.from);
            }
            return;
        }
        info!(
            source = source.as_str(),
            split = command.split,
            "Attacking from {} to {}",
            command.from,
            command.to
        );
        match sink.submit(command) {
            Ok(()) => {
                report.submitted += 1;
                self.summary.submitted += 1;
            }
            Err(err) => {
                warn!(error = %err, %command, "move dropped");
                self.summary.dropped += 1;
            }
        }
    }
}

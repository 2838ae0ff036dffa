use giobot_core::{GameSnapshot, MoveCommand};

/// Automated decision logic driven by the tick loop.
///
/// Calls run synchronously inside a tick, so implementations must return promptly;
/// a slow hook stalls input handling and rendering.
pub trait DecisionHook {
    type State;

    fn name(&self) -> &'static str;

    /// Build the initial state from the first snapshot of a started game.
    fn init(&self, snapshot: &GameSnapshot) -> Self::State;

    /// Observe a new snapshot. Returns the next state and any moves to submit.
    fn on_snapshot(
        &self,
        state: Self::State,
        snapshot: &GameSnapshot,
    ) -> (Self::State, Vec<MoveCommand>);
}

/// A hook that never moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl DecisionHook for NoopHook {
    type State = ();

    fn name(&self) -> &'static str {
        "noop"
    }

    fn init(&self, _snapshot: &GameSnapshot) {}

    fn on_snapshot(&self, state: (), _snapshot: &GameSnapshot) -> ((), Vec<MoveCommand>) {
        (state, Vec::new())
    }
}

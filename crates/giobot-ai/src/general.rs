use giobot_core::{CellIndex, GameSnapshot, MoveCommand};
use tracing::info;

use crate::DecisionHook;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralContext {
    /// Where the viewer's general was last seen.
    pub general: Option<CellIndex>,
    pub snapshots_seen: u64,
}

/// Tracks the viewer's own general and issues no moves.
///
/// Starting point for strategies that need to know what they are defending.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralLocator;

impl DecisionHook for GeneralLocator {
    type State = GeneralContext;

    fn name(&self) -> &'static str {
        "general"
    }

    fn init(&self, snapshot: &GameSnapshot) -> GeneralContext {
        let general = snapshot.own_general();
        info!(?general, player = ?snapshot.player, "located general");
        GeneralContext {
            general,
            snapshots_seen: 0,
        }
    }

    fn on_snapshot(
        &self,
        mut state: GeneralContext,
        snapshot: &GameSnapshot,
    ) -> (GeneralContext, Vec<MoveCommand>) {
        state.snapshots_seen += 1;
        if let Some(general) = snapshot.own_general() {
            if state.general != Some(general) {
                info!(general, "general moved into view");
            }
            state.general = Some(general);
        }
        (state, Vec::new())
    }
}

use giobot_core::{CellIndex, Grid, MoveCommand};

/// Why a move was not forwarded to the game service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandRejection {
    #[error("no snapshot received yet")]
    NoSnapshot,
    #[error("cell {index} is outside the {cells}-cell map")]
    OutOfRange { index: CellIndex, cells: usize },
    #[error("{from} and {to} are not orthogonal neighbours")]
    NotAdjacent { from: CellIndex, to: CellIndex },
}

/// Check a move against the current map before it leaves the client.
///
/// Catches nudges that wrapped past a row edge; ownership and unit counts are left
/// to the game service.
pub fn validate_command(grid: Option<&Grid>, command: &MoveCommand) -> Result<(), CommandRejection> {
    let grid = grid.ok_or(CommandRejection::NoSnapshot)?;
    for index in [command.from, command.to] {
        if index >= grid.len() {
            return Err(CommandRejection::OutOfRange {
                index,
                cells: grid.len(),
            });
        }
    }
    if !grid.is_orthogonal_step(command.from, command.to) {
        return Err(CommandRejection::NotAdjacent {
            from: command.from,
            to: command.to,
        });
    }
    Ok(())
}

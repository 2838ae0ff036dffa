#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Who holds a cell, as far as the viewing player can tell.
///
/// `Unowned` and `ObservedNeutral` are distinct so that a renderer can shade
/// "never claimed" differently from "seen, and nobody is there".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FactionId {
    Player(u8),
    #[default]
    Unowned,
    Fog,
    ObservedNeutral,
}

impl FactionId {
    pub fn player(self) -> Option<u8> {
        match self {
            FactionId::Player(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, FactionId::Player(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TerrainKind {
    #[default]
    Plain,
    City,
    General,
    Mountain,
    FogObstacle,
}

impl TerrainKind {
    /// Mountains and fog obstacles never carry a visible unit count.
    pub fn shows_units(self) -> bool {
        !matches!(self, TerrainKind::Mountain | TerrainKind::FogObstacle)
    }

    /// Whether a faction can hold this terrain at all.
    pub fn is_ownable(self) -> bool {
        self.shows_units()
    }

    /// Short marker drawn in the corner of a cell, if the terrain has one.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            TerrainKind::Plain => None,
            TerrainKind::City => Some("C"),
            TerrainKind::General => Some("G"),
            TerrainKind::Mountain => Some("M"),
            TerrainKind::FogObstacle => Some("FO"),
        }
    }
}

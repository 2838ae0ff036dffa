#![cfg(feature = "serde")]

use giobot_core::{FactionId, GameOutcome, GameSnapshot, TerrainKind};

#[test]
fn snapshot_json_uses_snake_case_variants() {
    let json = r#"{
        "grid": {
            "width": 2,
            "height": 1,
            "cells": [
                { "owner": { "player": 1 }, "terrain": "general", "units": 5 },
                { "owner": "fog", "terrain": "fog_obstacle" }
            ]
        },
        "turn": 12,
        "player": 1,
        "started": true,
        "outcome": "won"
    }"#;

    let snapshot: GameSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.turn, 12);
    assert_eq!(snapshot.outcome, Some(GameOutcome::Won));

    let cells = snapshot.grid.cells();
    assert_eq!(cells[0].owner, FactionId::Player(1));
    assert_eq!(cells[0].terrain, TerrainKind::General);
    assert_eq!(cells[1].owner, FactionId::Fog);
    assert_eq!(cells[1].units, 0);
}

#[test]
fn snapshot_json_with_wrong_cell_count_is_rejected() {
    let json = r#"{ "grid": { "width": 3, "height": 3, "cells": [] } }"#;
    let err = serde_json::from_str::<GameSnapshot>(json).unwrap_err();
    assert!(err.to_string().contains("needs 9 cells"), "{err}");
}

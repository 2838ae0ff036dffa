use giobot_view::Viewport;
use proptest::prelude::*;

#[test]
fn default_viewport_matches_classic_layout() {
    let vp = Viewport::default();
    // 750px of drawable area split across 18 cells.
    assert!((vp.col_step() - 750.0 / 18.0).abs() < 1e-9);
    assert_eq!(vp.cell_from_point(25.0, 25.0), Some(0));
    assert_eq!(vp.cell_from_point(774.9, 774.9), Some(18 * 18 - 1));
}

#[test]
fn cell_rect_is_inverse_of_cell_from_point() {
    let vp = Viewport::new(640.0, 480.0, 20.0, 12, 8);
    let rect = vp.cell_rect(3, 7);
    assert_eq!(vp.cell_from_point(rect.x1, rect.y1), Some(3 * 12 + 7));
    assert_eq!(vp.cell_from_point(rect.x2 - 0.01, rect.y2 - 0.01), Some(3 * 12 + 7));
    assert_eq!(vp.cell_from_point(rect.x2, rect.y1), Some(3 * 12 + 8));
}

#[test]
fn points_past_the_right_edge_do_not_alias_the_next_row() {
    let vp = Viewport::default();
    // Row 0, one column past the end: raw index arithmetic would give 18.
    assert_eq!(vp.grid_coords(780.0, 30.0), (0, 18));
    assert_eq!(vp.cell_from_point(780.0, 30.0), None);
}

#[test]
fn grid_coords_floor_negative_offsets() {
    let vp = Viewport::default();
    let (row, col) = vp.grid_coords(10.0, 24.0);
    assert_eq!((row, col), (-1, -1));
    assert_eq!(vp.cell_from_point(10.0, 24.0), None);
}

#[test]
fn empty_grid_has_no_cells() {
    let vp = Viewport::default().with_grid(0, 0);
    assert_eq!(vp.cell_from_point(100.0, 100.0), None);
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (
        200.0f64..2000.0,
        200.0f64..2000.0,
        0.0f64..60.0,
        1usize..40,
        1usize..40,
    )
        .prop_map(|(w, h, border, cols, rows)| Viewport::new(w, h, border, cols, rows))
}

proptest! {
    #[test]
    fn cell_center_round_trips(vp in viewport_strategy(), r in 0usize..40, c in 0usize..40) {
        let row = r % vp.rows;
        let col = c % vp.cols;
        let (x, y) = vp.cell_center(row, col);
        prop_assert_eq!(vp.cell_from_point(x, y), Some(row * vp.cols + col));
    }

    #[test]
    fn points_outside_the_border_are_out_of_range(
        vp in viewport_strategy(),
        t in 0.0f64..1.0,
        outside in 0.01f64..100.0,
        side in 0u8..4,
    ) {
        let bounds = vp.grid_bounds();
        let along_x = bounds.x1 + t * (bounds.x2 - bounds.x1 - 0.001);
        let along_y = bounds.y1 + t * (bounds.y2 - bounds.y1 - 0.001);
        let (x, y) = match side {
            0 => (bounds.x1 - outside, along_y),
            1 => (bounds.x2 + outside, along_y),
            2 => (along_x, bounds.y1 - outside),
            _ => (along_x, bounds.y2 + outside),
        };
        prop_assert_eq!(vp.cell_from_point(x, y), None);
    }
}

#[test]
fn collapsed_window_has_no_cells() {
    let minimized = Viewport::default().resized(0.0, 0.0);
    assert!(!minimized.has_area());
    assert_eq!(minimized.cell_from_point(-10.0, -10.0), None);

    // Exactly the border on both sides: zero-width cells.
    let flat = Viewport::default().resized(50.0, 50.0);
    assert!(!flat.has_area());
    assert_eq!(flat.cell_from_point(25.0, 25.0), None);
    assert!(Viewport::default().has_area());
}

use microchart::ChartError;
use microchart::core::{PixelPoint, Viewport, project_sparkline_points, spline_segments};

#[test]
fn projection_returns_empty_for_no_values() {
    let points = project_sparkline_points(&[], Viewport::new(100, 50)).expect("project");
    assert!(points.is_empty());
}

#[test]
fn projection_spaces_points_evenly_and_scales_values() {
    let points = project_sparkline_points(&[1.0, 2.0], Viewport::new(100, 50)).expect("project");
    assert_eq!(points.len(), 2);

    assert!((points[0].x - 0.0).abs() <= 1e-9);
    assert!((points[0].y - 50.0).abs() <= 1e-9);
    assert!((points[1].x - 100.0).abs() <= 1e-9);
    assert!((points[1].y - 0.0).abs() <= 1e-9);
}

#[test]
fn flat_series_sits_on_vertical_midline() {
    let points =
        project_sparkline_points(&[5.0, 5.0, 5.0], Viewport::new(300, 100)).expect("project");
    assert_eq!(points.len(), 3);

    for (index, point) in points.iter().enumerate() {
        assert!((point.x - index as f64 * 150.0).abs() <= 1e-9);
        assert!((point.y - 50.0).abs() <= 1e-9);
    }
}

#[test]
fn single_value_centers_in_viewport() {
    let points = project_sparkline_points(&[42.0], Viewport::new(200, 80)).expect("project");
    assert_eq!(points.len(), 1);
    assert!((points[0].x - 100.0).abs() <= 1e-9);
    assert!((points[0].y - 40.0).abs() <= 1e-9);
}

#[test]
fn projection_rejects_non_finite_values() {
    let err = project_sparkline_points(&[1.0, f64::NAN], Viewport::new(100, 50))
        .expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn projection_rejects_invalid_viewport() {
    let err =
        project_sparkline_points(&[1.0, 2.0], Viewport::new(0, 50)).expect_err("zero width fails");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn spline_returns_empty_below_two_points() {
    assert!(spline_segments(&[], 0.3).is_empty());
    assert!(spline_segments(&[PixelPoint { x: 10.0, y: 10.0 }], 0.3).is_empty());
}

#[test]
fn spline_zero_tension_degenerates_to_straight_segments() {
    let points = [
        PixelPoint { x: 0.0, y: 0.0 },
        PixelPoint { x: 100.0, y: 40.0 },
        PixelPoint { x: 200.0, y: 10.0 },
    ];
    let segments = spline_segments(&points, 0.0);
    assert_eq!(segments.len(), 2);

    for segment in &segments {
        assert!((segment.cx1 - segment.x0).abs() <= 1e-9);
        assert!((segment.cy1 - segment.y0).abs() <= 1e-9);
        assert!((segment.cx2 - segment.x1).abs() <= 1e-9);
        assert!((segment.cy2 - segment.y1).abs() <= 1e-9);
    }
}

#[test]
fn spline_two_points_pull_control_points_along_the_chord() {
    let points = [
        PixelPoint { x: 0.0, y: 0.0 },
        PixelPoint { x: 100.0, y: 100.0 },
    ];
    let segments = spline_segments(&points, 0.3);
    assert_eq!(segments.len(), 1);

    let segment = segments[0];
    assert!((segment.cx1 - 30.0).abs() <= 1e-9);
    assert!((segment.cy1 - 30.0).abs() <= 1e-9);
    assert!((segment.cx2 - 70.0).abs() <= 1e-9);
    assert!((segment.cy2 - 70.0).abs() <= 1e-9);
}

#[test]
fn spline_interior_control_points_split_by_chord_ratio() {
    // Collinear, evenly spaced points: the middle point sees equal chords,
    // so its control points sit at tension/2 of the neighbor span.
    let points = [
        PixelPoint { x: 0.0, y: 0.0 },
        PixelPoint { x: 100.0, y: 0.0 },
        PixelPoint { x: 200.0, y: 0.0 },
    ];
    let segments = spline_segments(&points, 0.3);
    assert_eq!(segments.len(), 2);

    assert!((segments[0].cx1 - 30.0).abs() <= 1e-9);
    assert!((segments[0].cx2 - 70.0).abs() <= 1e-9);
    assert!((segments[1].cx1 - 130.0).abs() <= 1e-9);
    assert!((segments[1].cx2 - 170.0).abs() <= 1e-9);

    for segment in &segments {
        assert!(segment.cy1.abs() <= 1e-9);
        assert!(segment.cy2.abs() <= 1e-9);
    }
}

#[test]
fn spline_handles_coincident_points() {
    let points = [
        PixelPoint { x: 50.0, y: 50.0 },
        PixelPoint { x: 50.0, y: 50.0 },
    ];
    let segments = spline_segments(&points, 0.3);
    assert_eq!(segments.len(), 1);
    assert!((segments[0].cx1 - 50.0).abs() <= 1e-9);
    assert!((segments[0].cy2 - 50.0).abs() <= 1e-9);
}

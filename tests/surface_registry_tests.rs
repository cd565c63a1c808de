use microchart::ChartError;
use microchart::api::ChartRenderer;
use microchart::core::Viewport;
use microchart::surface::SurfaceRegistry;

#[test]
fn register_rejects_invalid_viewports() {
    let mut registry = SurfaceRegistry::new();
    let err = registry
        .register("chart", Viewport::new(0, 100))
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert!(registry.is_empty());
}

#[test]
fn registry_tracks_surfaces_in_insertion_order() {
    let mut registry = SurfaceRegistry::new();
    registry.register("first", Viewport::new(10, 10)).expect("register");
    registry.register("second", Viewport::new(20, 20)).expect("register");
    registry.register("third", Viewport::new(30, 30)).expect("register");

    let ids: Vec<&str> = registry.ids().collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
    assert_eq!(registry.len(), 3);
    assert!(registry.contains("second"));
    assert_eq!(registry.viewport("second"), Some(Viewport::new(20, 20)));
}

#[test]
fn remove_forgets_the_surface() {
    let mut registry = SurfaceRegistry::new();
    registry.register("chart", Viewport::new(10, 10)).expect("register");

    assert!(registry.remove("chart"));
    assert!(!registry.remove("chart"));
    assert!(!registry.contains("chart"));
}

#[test]
fn reregistering_replaces_viewport_and_clears_binding() {
    let mut renderer = ChartRenderer::default();
    renderer
        .register_surface("chart", Viewport::new(100, 100))
        .expect("register");
    assert!(
        renderer
            .render_donut("chart", &["a", "b"], &[1.0, 1.0], None)
            .is_rendered()
    );
    assert!(renderer.registry().binding("chart").is_some());

    renderer
        .register_surface("chart", Viewport::new(50, 50))
        .expect("re-register");
    assert_eq!(
        renderer.registry().viewport("chart"),
        Some(Viewport::new(50, 50))
    );
    assert!(renderer.registry().binding("chart").is_none());
    assert_eq!(renderer.registry().len(), 1);
}

#[test]
fn clear_binding_reports_whether_a_chart_was_bound() {
    let mut renderer = ChartRenderer::default();
    renderer
        .register_surface("chart", Viewport::new(100, 100))
        .expect("register");

    assert!(!renderer.registry_mut().clear_binding("chart"));
    assert!(
        renderer
            .render_sparkline("chart", &["a", "b"], &[1.0, 2.0])
            .is_rendered()
    );
    assert!(renderer.registry_mut().clear_binding("chart"));
    assert!(renderer.registry().binding("chart").is_none());
    assert!(!renderer.registry_mut().clear_binding("missing"));
}

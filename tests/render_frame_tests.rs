use morph_chart::ChartError;
use morph_chart::ChartConfig;
use morph_chart::core::{Point, Viewport};
use morph_chart::render::{RecordingSurface, RenderFrame, SurfaceCommand};

fn frame(points: Vec<Point>) -> RenderFrame {
    let config = ChartConfig::default();
    RenderFrame::new(
        Viewport::new(200, 100),
        points,
        config.polyline_style(),
        config.marker_style(),
    )
}

#[test]
fn paint_clears_once_then_draws_line_and_markers() {
    let mut surface = RecordingSurface::new(200, 100);
    let points = vec![Point::new(0.0, 100.0), Point::new(200.0, 0.0)];
    frame(points.clone()).paint(&mut surface).expect("paint");

    let commands = surface.commands();
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], SurfaceCommand::Clear);
    match &commands[1] {
        SurfaceCommand::StrokePolyline {
            points: drawn,
            width,
            ..
        } => {
            assert_eq!(drawn, &points);
            assert_eq!(*width, 1.0);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    match &commands[2] {
        SurfaceCommand::FillAndStrokeMarkers {
            points: drawn,
            radius,
            stroke_width,
            ..
        } => {
            assert_eq!(drawn, &points);
            assert_eq!(*radius, 4.0);
            assert_eq!(*stroke_width, 3.0);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(surface.clear_count(), 1);
}

#[test]
fn non_finite_points_are_rejected_before_clearing() {
    let mut surface = RecordingSurface::new(200, 100);
    let err = frame(vec![Point::new(f64::NAN, 0.0)])
        .paint(&mut surface)
        .expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
    assert!(surface.commands().is_empty());
}

#[test]
fn take_commands_drains_recording() {
    let mut surface = RecordingSurface::new(200, 100);
    frame(vec![Point::new(1.0, 1.0)])
        .paint(&mut surface)
        .expect("paint");
    assert_eq!(surface.take_commands().len(), 2);
    assert!(surface.commands().is_empty());
    assert_eq!(surface.clear_count(), 1);
}

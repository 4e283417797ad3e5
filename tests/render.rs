use cairo::{Context, ImageSurface};
use chartmark::draw::{AnnotationStyle, CairoSurface, Point, Shape, ShapeKind, render_shape};
use chartmark::input::{OverlayEvent, ToolKind, ToolManager};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Alpha of the pixel at `(x, y)` in an ARGB32 surface.
fn alpha_at(surface: &mut ImageSurface, x: usize, y: usize) -> u8 {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    // ARGB32 is native-endian; alpha is the most significant byte.
    let offset = y * stride + x * 4;
    let pixel = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (pixel >> 24) as u8
}

#[test]
fn every_complete_shape_draws_pixels() {
    let anchors = [
        Point::new(20.0, 80.0),
        Point::new(60.0, 50.0),
        Point::new(160.0, 40.0),
    ];
    let kinds = [
        ShapeKind::Trendline,
        ShapeKind::Horizontal,
        ShapeKind::Vertical,
        ShapeKind::Ray,
        ShapeKind::FibRetracement,
        ShapeKind::FibExtension,
        ShapeKind::FibProjection,
    ];

    for kind in kinds {
        let (mut image, ctx) = surface_with_context(200, 100);
        let mut surface = CairoSurface::new(ctx, 200.0, 100.0);
        let shape = Shape::with_anchors(kind, anchors);
        render_shape(&mut surface, &shape, &AnnotationStyle::default());
        drop(surface);
        assert!(surface_has_pixels(&mut image), "{kind:?} should draw");
    }
}

#[test]
fn incomplete_fibonacci_draws_nothing() {
    let (mut image, ctx) = surface_with_context(100, 100);
    let mut surface = CairoSurface::new(ctx, 100.0, 100.0);
    let shape = Shape::with_anchors(ShapeKind::FibProjection, [Point::new(10.0, 10.0)]);
    render_shape(&mut surface, &shape, &AnnotationStyle::default());
    drop(surface);
    assert!(!surface_has_pixels(&mut image));
}

#[test]
fn horizontal_line_covers_full_width() {
    let (mut image, ctx) = surface_with_context(120, 60);
    let mut manager = ToolManager::default();
    manager.select_tool(ToolKind::Horizontal);
    manager.handle_event(&OverlayEvent::press(40.0, 30.5));
    manager.handle_event(&OverlayEvent::release(40.0, 30.5));

    let mut surface = CairoSurface::new(ctx, 120.0, 60.0);
    manager.render_all(&mut surface);
    drop(surface);

    assert!(alpha_at(&mut image, 1, 30) > 0);
    assert!(alpha_at(&mut image, 118, 30) > 0);
    assert_eq!(alpha_at(&mut image, 60, 5), 0);
}

#[test]
fn render_all_clears_previous_frame() {
    let (mut image, ctx) = surface_with_context(80, 80);
    let mut surface = CairoSurface::new(ctx, 80.0, 80.0);
    let mut manager = ToolManager::default();
    manager.select_tool(ToolKind::Vertical);
    manager.handle_event(&OverlayEvent::press(40.5, 10.0));
    manager.handle_event(&OverlayEvent::release(40.5, 10.0));
    manager.render_all(&mut surface);

    manager.clear_all();
    manager.render_all(&mut surface);
    drop(surface);
    assert!(!surface_has_pixels(&mut image));
}

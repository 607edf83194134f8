use cairo::{Context, ImageSurface};
use coffeenote_mockup::draw::color::{ACCENT, BG_BOTTOM, BG_TOP};
use coffeenote_mockup::draw::render::{glow_layer, rounded_rect_layer};
use coffeenote_mockup::draw::{
    Anchor, Canvas, FontCandidate, FontResolver, TextStyle, draw_text, gradient_row_color,
    paint_vertical_gradient,
};
use coffeenote_mockup::mockup::{self, HEIGHT, WIDTH};
use coffeenote_mockup::util::Rect;

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

fn fallback_fonts() -> FontResolver {
    FontResolver::new(vec![FontCandidate::new(
        "/nonexistent/PingFang.ttc",
        "PingFang SC",
    )])
}

#[test]
fn gradient_never_divides_by_zero() {
    for height in 1..=64 {
        let (_, ctx) = surface_with_context(4, height);
        paint_vertical_gradient(&ctx, 4, height, BG_TOP, BG_BOTTOM).unwrap();
        assert_eq!(gradient_row_color(BG_TOP, BG_BOTTOM, 0, height), BG_TOP);
        if height > 1 {
            assert_eq!(
                gradient_row_color(BG_TOP, BG_BOTTOM, height - 1, height),
                BG_BOTTOM
            );
        }
    }
}

#[test]
fn resolver_with_only_missing_fonts_still_renders_text() {
    let fonts = fallback_fonts();
    assert!(fonts.resolve(26.0, true).is_fallback());

    let (mut surface, ctx) = surface_with_context(300, 80);
    draw_text(
        &ctx,
        &fonts,
        "常用冲煮设备",
        150.0,
        40.0,
        TextStyle::bold(26.0, ACCENT),
        Anchor::MiddleMiddle,
    )
    .unwrap();
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn rounded_layers_match_requested_boxes() {
    for (w, h) in [(1, 1), (116, 36), (312, 140), (360, 780)] {
        let layer = rounded_rect_layer(w, h, 24.0, ACCENT, None).unwrap();
        assert_eq!((layer.width(), layer.height()), (w, h));
    }
}

#[test]
fn glow_layer_is_canvas_sized_even_off_canvas() {
    let bbox = Rect::new(-300.0, 700.0, 2000.0, 1600.0);
    let layer = glow_layer(WIDTH, HEIGHT, &bbox, ACCENT, 40.0, 80).unwrap();
    assert_eq!((layer.width(), layer.height()), (WIDTH, HEIGHT));
}

#[test]
fn composed_mockup_flattens_to_full_size_rgb() {
    let canvas = mockup::compose(fallback_fonts()).unwrap();
    let flat = canvas.flatten().unwrap();
    assert_eq!(flat.format(), cairo::Format::Rgb24);
    assert_eq!((flat.width(), flat.height()), (1500, 900));
}

#[test]
fn composing_twice_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    mockup::compose(fallback_fonts())
        .unwrap()
        .write_png(&mut first)
        .unwrap();
    mockup::compose(fallback_fonts())
        .unwrap()
        .write_png(&mut second)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn canvas_starts_transparent() {
    let mut canvas = Canvas::new(10, 10, fallback_fonts()).unwrap();
    assert_eq!(canvas.pixel(5, 5).unwrap().a, 0);
}

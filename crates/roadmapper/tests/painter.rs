//! Integration tests for the painter and its output files

use std::fs;
use std::path::Path;

use roadmapper::{OutputKind, Painter, PainterOptions, RoadmapError, Rgb, TextAlignment};
use tempfile::tempdir;

fn decode_png(path: &Path) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(fs::File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).unwrap();
    assert_eq!(frame.color_type, png::ColorType::Rgba);
    buf.truncate(frame.buffer_size());
    (frame.width, frame.height, buf)
}

fn path_str(dir: &Path, name: &str) -> String {
    dir.join(name).to_str().unwrap().to_string()
}

#[test]
fn test_box_round_trip() {
    let mut painter = Painter::new(100, 100, "unused.png").unwrap();
    painter.set_colour("#9FC5E8").unwrap();
    painter.draw_box(10.0, 10.0, 50.0, 20.0).unwrap();
    assert_eq!(painter.pixel(11, 11), Some([0x9F, 0xC5, 0xE8, 255]));
    assert_eq!(painter.pixel(59, 29), Some([0x9F, 0xC5, 0xE8, 255]));
    assert_eq!(painter.pixel(61, 31), Some([0, 0, 0, 0]));
}

#[test]
fn test_empty_text_has_zero_width() {
    let mut painter = Painter::new(100, 100, "unused.png").unwrap();
    painter.set_font("arial.ttf", 12.0, "#000000").unwrap();
    let (width, _height) = painter.text_dimension("");
    assert_eq!(width, 0.0);
}

#[test]
fn test_text_dimension_grows_with_font_size() {
    let mut painter = Painter::new(100, 100, "unused.png").unwrap();
    painter.set_font("sans-serif", 10.0, "black").unwrap();
    let (small_w, small_h) = painter.text_dimension("Milestone");
    painter.set_font("sans-serif", 20.0, "black").unwrap();
    let (large_w, large_h) = painter.text_dimension("Milestone");
    assert!(small_w > 0.0 && small_h > 0.0);
    assert!(large_w > small_w);
    assert!(large_h > small_h);
}

#[test]
fn test_output_kind_selection() {
    assert_eq!(Painter::new(100, 100, "x.PDF").unwrap().output().kind(), OutputKind::Vector);
    assert_eq!(Painter::new(100, 100, "x.png").unwrap().output().kind(), OutputKind::Raster);
    assert_eq!(Painter::new(100, 100, "x").unwrap().output().kind(), OutputKind::Raster);
    assert_eq!(Painter::new(100, 100, "").unwrap().output().kind(), OutputKind::Raster);
}

#[test]
fn test_save_png() {
    let dir = tempdir().unwrap();
    let mut painter = Painter::new(64, 32, &path_str(dir.path(), "roadmap.png")).unwrap();
    painter.set_background_colour("#FFFFFF").unwrap();
    painter.set_colour("#0B5394").unwrap();
    painter.draw_box(0.0, 0.0, 16.0, 16.0).unwrap();
    let saved = painter.save_surface().unwrap();

    assert_eq!(saved, dir.path().join("roadmap.png"));
    let (width, height, pixels) = decode_png(&saved);
    assert_eq!((width, height), (64, 32));
    assert_eq!(&pixels[0..4], &[0x0B, 0x53, 0x94, 255]);
    let last = pixels.len() - 4;
    assert_eq!(&pixels[last..], &[255, 255, 255, 255]);
}

#[test]
fn test_save_without_extension_appends_png() {
    let dir = tempdir().unwrap();
    let painter = Painter::new(8, 8, &path_str(dir.path(), "plan")).unwrap();
    let saved = painter.save_surface().unwrap();
    assert_eq!(saved, dir.path().join("plan.png"));
    assert!(saved.exists());
    assert!(!dir.path().join("plan").exists());
}

#[test]
fn test_save_pdf() {
    let dir = tempdir().unwrap();
    let mut painter = Painter::new(300, 120, &path_str(dir.path(), "roadmap.pdf")).unwrap();
    painter.set_background_colour("#FFFFFF").unwrap();
    painter.set_font("arial.ttf", 12.0, "#000000").unwrap();
    painter
        .draw_box_with_text(10.0, 10.0, 200.0, 30.0, "Beta", TextAlignment::Centre, "#000000", "#D9D9D9")
        .unwrap();
    painter.draw_diamond(220.0, 10.0, 20.0, 20.0).unwrap();
    let saved = painter.save_surface().unwrap();

    let bytes = fs::read(saved).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let target = path_str(dir.path(), "missing/roadmap.png");
    let painter = Painter::new(8, 8, &target).unwrap();
    assert!(painter.save_surface().is_err());
}

#[test]
fn test_background_fills_every_pixel() {
    let mut painter = Painter::new(20, 10, "unused.png").unwrap();
    painter.set_background_colour("#B7B7B7").unwrap();
    for y in 0..10 {
        for x in 0..20 {
            assert_eq!(painter.pixel(x, y), Some([0xB7, 0xB7, 0xB7, 255]));
        }
    }
    assert_eq!(painter.current_colour().to_string(), "#B7B7B7");
}

#[test]
fn test_diamond_is_red_and_inscribed() {
    let mut painter = Painter::new(100, 100, "unused.png").unwrap();
    painter.set_background_colour("#FFFFFF").unwrap();
    painter.set_colour("#38761D").unwrap();
    painter.draw_diamond(10.0, 10.0, 40.0, 40.0).unwrap();

    assert_eq!(painter.pixel(30, 30), Some([255, 0, 0, 255]));
    // Corners of the bounding box stay untouched.
    assert_eq!(painter.pixel(11, 11), Some([255, 255, 255, 255]));
    assert_eq!(painter.pixel(48, 48), Some([255, 255, 255, 255]));
    assert_eq!(painter.current_colour().to_string(), "#38761D");
}

#[test]
fn test_diamond_colour_is_configurable() {
    let options = PainterOptions {
        diamond_colour: Rgb::parse("#3D85C6").unwrap(),
        ..PainterOptions::default()
    };
    let mut painter = Painter::with_options(50, 50, "unused.png", options).unwrap();
    painter.draw_diamond(0.0, 0.0, 50.0, 50.0).unwrap();
    assert_eq!(painter.pixel(25, 25), Some([0x3D, 0x85, 0xC6, 255]));
}

#[test]
fn test_box_with_text_fills_box_and_keeps_font_colour() {
    let mut painter = Painter::new(300, 100, "unused.png").unwrap();
    painter.set_font("arial.ttf", 12.0, "#000000").unwrap();
    painter
        .draw_box_with_text(20.0, 20.0, 200.0, 40.0, "Group A", TextAlignment::Right, "#FFFFFF", "#666666")
        .unwrap();
    assert_eq!(painter.pixel(21, 21), Some([0x66, 0x66, 0x66, 255]));
    assert_eq!(painter.pixel(21, 58), Some([0x66, 0x66, 0x66, 255]));
    assert_eq!(painter.current_colour(), Rgb::WHITE);
}

#[test]
fn test_box_with_text_rejects_bad_fill() {
    let mut painter = Painter::new(100, 100, "unused.png").unwrap();
    let err = painter
        .draw_box_with_text(0.0, 0.0, 10.0, 10.0, "x", TextAlignment::Left, "#000000", "nope")
        .unwrap_err();
    assert!(matches!(err, RoadmapError::InvalidColour { .. }));
}

#[test]
fn test_alignment_positions() {
    let mut painter = Painter::new(400, 100, "unused.png").unwrap();
    painter.set_font("sans-serif", 14.0, "#000000").unwrap();
    let text = "Launch";
    let (tw, th) = painter.text_dimension(text);

    let (cx, cy) = painter.display_text_position(100.0, 10.0, 200.0, 30.0, text, TextAlignment::Centre);
    assert!((cx - (200.0 - tw / 2.0)).abs() < 1e-3);
    assert!((cy - (25.0 + th / 2.0)).abs() < 1e-3);

    let (rx, _) = painter.display_text_position(100.0, 10.0, 200.0, 30.0, text, TextAlignment::Right);
    assert!((rx - (300.0 - tw)).abs() < 1e-3);

    let (lx, _) = painter.display_text_position(100.0, 10.0, 200.0, 30.0, text, TextAlignment::Left);
    assert_eq!(lx, 110.0);
}

#[test]
fn test_draw_text_stays_inside_surface() {
    let mut painter = Painter::new(200, 50, "unused.png").unwrap();
    painter.set_background_colour("#FFFFFF").unwrap();
    painter.set_font("sans-serif", 16.0, "#000000").unwrap();
    painter.draw_text(10.0, 30.0, "Roadmap").unwrap();
    painter.draw_text(-500.0, 30.0, "offscreen").unwrap();
    painter.draw_text(10.0, 30.0, "").unwrap();
    // The far corner is never reached by the text.
    assert_eq!(painter.pixel(199, 0), Some([255, 255, 255, 255]));
}

#[test]
fn test_pixel_outside_surface_is_none() {
    let mut painter = Painter::new(100, 100, "unused.png").unwrap();
    painter.set_colour("#FF0000").unwrap();
    painter.draw_box(0.0, 1.0, 1.0, 1.0).unwrap();
    assert_eq!(painter.pixel(0, 1), Some([255, 0, 0, 255]));
    assert_eq!(painter.pixel(100, 0), None);
    assert_eq!(painter.pixel(0, 100), None);
}

#[test]
fn test_pdf_rejects_non_finite_geometry() {
    let dir = tempdir().unwrap();
    let mut painter = Painter::new(200, 100, &path_str(dir.path(), "plan.pdf")).unwrap();
    painter.set_colour("#0B5394").unwrap();

    let err = painter.draw_box(f32::NAN, 0.0, 10.0, 10.0).unwrap_err();
    assert!(matches!(err, RoadmapError::Backend { .. }));
    assert!(painter.draw_diamond(f32::INFINITY, 0.0, 10.0, 10.0).is_err());
    assert!(painter.draw_text(10.0, f32::NAN, "Plan").is_err());
    assert!(painter
        .draw_box_with_text(0.0, 0.0, f32::NAN, 20.0, "Plan", TextAlignment::Centre, "#000000", "#FFFFFF")
        .is_err());

    painter.draw_box(10.0, 10.0, 50.0, 20.0).unwrap();
    let saved = painter.save_surface().unwrap();
    assert!(fs::read(saved).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_box_text_baseline_below_middle() {
    let mut painter = Painter::new(200, 100, "unused.png").unwrap();
    painter.set_font("arial.ttf", 12.0, "#000000").unwrap();
    let (_, height) = painter.text_dimension("Plan");
    assert!(height > 0.0);
    let (_, baseline) =
        painter.display_text_position(0.0, 20.0, 100.0, 40.0, "Plan", TextAlignment::Centre);
    assert!(baseline > 40.0);
    assert!(baseline <= 60.0);
}

//! PNG-Ausgabe: Szene → SVG → resvg-Rasterung → `image`.

use std::fmt::{self, Write};

use resvg::{tiny_skia, usvg};

use super::ExportError;
use crate::shared::RenderScene;

fn svg_color([r, g, b]: [f32; 3]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Beschreibt die Szene als SVG-Dokument (Bildkoordinaten, y nach unten).
pub fn render_svg(scene: &RenderScene) -> String {
    let mut out = String::new();
    // fmt::Write auf String schlägt nie fehl
    let _ = write_svg(&mut out, scene);
    out
}

fn write_svg(out: &mut impl Write, scene: &RenderScene) -> fmt::Result {
    let [width, height] = scene.canvas_size;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        svg_color(scene.background)
    )?;

    for polyline in scene.polylines.iter().filter(|p| p.points.len() >= 2) {
        let points = polyline
            .points
            .iter()
            .map(|p| {
                let q = scene.to_image_coords(*p);
                format!("{:.2},{:.2}", q.x, q.y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            r#"<polyline points="{points}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round"/>"#,
            svg_color(polyline.color),
            scene.pen_width
        )?;
    }

    writeln!(out, "</svg>")
}

/// Rastert die Szene in ein RGBA-Bild in Canvas-Größe.
pub fn rasterize(scene: &RenderScene) -> Result<image::RgbaImage, ExportError> {
    let width = scene.canvas_size[0].round().max(0.0) as u32;
    let height = scene.canvas_size[1].round().max(0.0) as u32;

    let tree = usvg::Tree::from_str(&render_svg(scene), &usvg::Options::default())?;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::InvalidSize { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // Hintergrund ist deckend, premultiplied == straight alpha
    image::RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or(ExportError::InvalidSize { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Canvas, PenState, VectorCanvas};
    use crate::shared::SpiroOptions;
    use glam::DVec2;

    fn scene_with_line() -> RenderScene {
        let mut canvas = VectorCanvas::new();
        let pen = canvas.create_pen([1.0, 0.0, 0.0]);
        canvas.move_pen(pen, DVec2::new(-20.0, 0.0), PenState::Up);
        canvas.move_pen(pen, DVec2::new(20.0, 0.0), PenState::Down);
        let mut scene = RenderScene::build(&canvas, [64.0, 32.0], &SpiroOptions::default());
        scene.pen_width = 4.0;
        scene
    }

    #[test]
    fn svg_uses_hex_colors_and_image_coords() {
        let svg = render_svg(&scene_with_line());

        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r#"points="12.00,16.00 52.00,16.00""#));
        assert!(svg.contains(r#"stroke-width="4""#));
    }

    #[test]
    fn rasterize_produces_canvas_sized_image() {
        let image = rasterize(&scene_with_line()).expect("Rasterung sollte gelingen");

        assert_eq!(image.dimensions(), (64, 32));
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        let on_line = image.get_pixel(32, 16).0;
        assert!(on_line[0] > 200 && on_line[1] < 128);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let scene = RenderScene::build(&VectorCanvas::new(), [0.0, 0.0], &SpiroOptions::default());

        assert!(matches!(
            rasterize(&scene),
            Err(ExportError::InvalidSize { .. }) | Err(ExportError::Svg(_))
        ));
    }
}

//! Encapsulated-PostScript-Ausgabe.

use std::fmt::{self, Write};

use crate::shared::RenderScene;

/// Erzeugt eine EPS-Datei aus der Szene.
pub fn render_eps(scene: &RenderScene) -> String {
    let mut out = String::new();
    // fmt::Write auf String schlägt nie fehl
    let _ = write_eps(&mut out, scene);
    out
}

/// Schreibt die Szene als EPS in `out`.
///
/// PostScript hat wie der Canvas y nach oben; nur der Ursprung wird
/// von der Mitte in die linke untere Ecke verschoben.
pub fn write_eps(out: &mut impl Write, scene: &RenderScene) -> fmt::Result {
    let width = scene.canvas_size[0].max(1.0).ceil() as u32;
    let height = scene.canvas_size[1].max(1.0).ceil() as u32;
    let offset_x = f64::from(scene.canvas_size[0]) / 2.0;
    let offset_y = f64::from(scene.canvas_size[1]) / 2.0;

    writeln!(out, "%!PS-Adobe-3.0 EPSF-3.0")?;
    writeln!(out, "%%BoundingBox: 0 0 {width} {height}")?;
    writeln!(out, "%%Creator: spirograph {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "%%Title: Spirographs!")?;
    writeln!(out, "%%EndComments")?;

    let [br, bg, bb] = scene.background;
    writeln!(out, "{br:.4} {bg:.4} {bb:.4} setrgbcolor")?;
    writeln!(out, "0 0 {width} {height} rectfill")?;
    writeln!(out, "1 setlinejoin 1 setlinecap")?;
    writeln!(out, "{:.2} setlinewidth", scene.pen_width)?;

    for polyline in scene.polylines.iter().filter(|p| p.points.len() >= 2) {
        let [r, g, b] = polyline.color;
        writeln!(out, "{r:.4} {g:.4} {b:.4} setrgbcolor")?;
        writeln!(out, "newpath")?;
        for (i, p) in polyline.points.iter().enumerate() {
            let op = if i == 0 { "moveto" } else { "lineto" };
            writeln!(out, "{:.2} {:.2} {op}", p.x + offset_x, p.y + offset_y)?;
        }
        writeln!(out, "stroke")?;
    }

    writeln!(out, "showpage")?;
    writeln!(out, "%%EOF")
}

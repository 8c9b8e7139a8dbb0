//! Render-Szene als expliziter Übergabevertrag zwischen App, Renderer und Export.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sowie `export`
//! sie konsumieren.

use glam::DVec2;

use super::options::SpiroOptions;
use crate::core::{PenColor, VectorCanvas};

/// Linienzug in Canvas-Koordinaten (Ursprung Mitte, y nach oben).
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePolyline {
    /// Linienfarbe
    pub color: PenColor,
    /// Punkte
    pub points: Vec<DVec2>,
}

/// Sichtbarer Stiftkopf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenHead {
    /// Position in Canvas-Koordinaten
    pub position: DVec2,
    /// Blickrichtung (Radiant, mathematisch positiv)
    pub heading: f64,
    /// Stiftfarbe
    pub color: PenColor,
}

/// Read-only Daten für einen Frame bzw. einen Export.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Hintergrundfarbe
    pub background: PenColor,
    /// Linienbreite
    pub pen_width: f32,
    /// Größe der Stiftköpfe
    pub pen_head_size: f32,
    /// Alle Linienzüge in Zeichenreihenfolge
    pub polylines: Vec<ScenePolyline>,
    /// Sichtbare Stiftköpfe
    pub pen_heads: Vec<PenHead>,
}

impl RenderScene {
    /// Baut die Szene aus der Zeichenfläche.
    pub fn build(canvas: &VectorCanvas, canvas_size: [f32; 2], options: &SpiroOptions) -> Self {
        let polylines = canvas
            .pens()
            .iter()
            .flat_map(|pen| pen.strokes.iter())
            .map(|stroke| ScenePolyline {
                color: stroke.color,
                points: stroke.points.clone(),
            })
            .collect();

        let pen_heads = canvas
            .pens()
            .iter()
            .filter(|pen| pen.visible)
            .map(|pen| PenHead {
                position: pen.position,
                heading: pen.heading,
                color: pen.color,
            })
            .collect();

        Self {
            canvas_size,
            background: options.background_color,
            pen_width: options.pen_width,
            pen_head_size: options.pen_head_size,
            polylines,
            pen_heads,
        }
    }

    /// Gibt zurück, ob überhaupt etwas gezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Rechnet Canvas-Koordinaten in Bildkoordinaten (Ursprung oben links, y nach unten).
    pub fn to_image_coords(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            p.x + f64::from(self.canvas_size[0]) / 2.0,
            f64::from(self.canvas_size[1]) / 2.0 - p.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Canvas, PenState};

    #[test]
    fn build_collects_strokes_and_visible_heads() {
        let mut canvas = VectorCanvas::new();
        let a = canvas.create_pen([1.0, 0.0, 0.0]);
        let b = canvas.create_pen([0.0, 1.0, 0.0]);
        canvas.move_pen(a, DVec2::new(10.0, 0.0), PenState::Down);
        canvas.move_pen(b, DVec2::new(0.0, 10.0), PenState::Down);
        canvas.set_pen_visible(b, false);

        let scene = RenderScene::build(&canvas, [200.0, 100.0], &SpiroOptions::default());

        assert_eq!(scene.polylines.len(), 2);
        assert_eq!(scene.pen_heads.len(), 1);
        assert_eq!(scene.pen_heads[0].position, DVec2::new(10.0, 0.0));
    }

    #[test]
    fn image_coords_flip_y_around_center() {
        let scene = RenderScene::build(&VectorCanvas::new(), [200.0, 100.0], &SpiroOptions::default());

        assert_eq!(scene.to_image_coords(DVec2::ZERO), DVec2::new(100.0, 50.0));
        assert_eq!(scene.to_image_coords(DVec2::new(10.0, 20.0)), DVec2::new(110.0, 30.0));
        assert!(scene.is_empty());
    }
}

//! Painter-Overlay: Linienzüge und Turtle-Stiftköpfe.

use eframe::egui;
use glam::DVec2;

use crate::shared::{PenHead, RenderScene};

/// Rechnet eine RGB-Farbe [0, 1] in `Color32` um.
pub fn to_color32([r, g, b]: [f32; 3]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(r), channel(g), channel(b))
}

/// Canvas-Koordinaten (Ursprung Mitte, y nach oben) → Bildschirm.
pub fn canvas_to_screen(rect: egui::Rect, p: DVec2) -> egui::Pos2 {
    let center = rect.center();
    egui::pos2(center.x + p.x as f32, center.y - p.y as f32)
}

/// Dreieck eines Stiftkopfs in Bildschirmkoordinaten (Spitze zuerst).
pub fn pen_head_triangle(rect: egui::Rect, head: &PenHead, size: f32) -> [egui::Pos2; 3] {
    let tip = canvas_to_screen(rect, head.position);
    // Bildschirm-y zeigt nach unten
    let dir = egui::vec2(head.heading.cos() as f32, -(head.heading.sin() as f32));
    let normal = egui::vec2(-dir.y, dir.x);
    let base = tip - dir * size;

    [tip, base + normal * (size * 0.5), base - normal * (size * 0.5)]
}

/// Zeichnet Hintergrund, alle Linienzüge und die sichtbaren Stiftköpfe.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, to_color32(scene.background));

    for polyline in &scene.polylines {
        if polyline.points.len() < 2 {
            continue;
        }
        let points = polyline
            .points
            .iter()
            .map(|p| canvas_to_screen(rect, *p))
            .collect::<Vec<_>>();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(scene.pen_width, to_color32(polyline.color)),
        ));
    }

    let outline = egui::Stroke::new(1.0, egui::Color32::BLACK);
    for head in &scene.pen_heads {
        let triangle = pen_head_triangle(rect, head, scene.pen_head_size);
        painter.add(egui::Shape::convex_polygon(
            triangle.to_vec(),
            to_color32(head.color),
            outline,
        ));
    }
}

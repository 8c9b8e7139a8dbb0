//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, Drawing};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let (completed, total) = state.curve_progress();
            match &state.drawing {
                Drawing::Pending => {
                    ui.label("Starte...");
                }
                Drawing::Static(drawing) => {
                    let p = drawing.session.params();
                    ui.label(format!(
                        "R={} r={} l={:.2} | Schließwinkel: {}°",
                        p.outer_radius,
                        p.inner_radius,
                        p.hole_ratio,
                        drawing.session.closing_angle()
                    ));
                }
                Drawing::Animated(animator) => {
                    ui.label(format!(
                        "Kurven fertig: {}/{} | Neustarts: {}",
                        completed,
                        total,
                        animator.restart_count()
                    ));
                }
            }

            ui.separator();

            if state.is_animating() {
                ui.label("s: Speichern | t: Turtles | Leertaste: Neustart");
            } else {
                ui.label("s: Speichern");
            }

            if let Some(msg) = &state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}

//! Viewport-Input: Canvas-Größe, Timer und Tastatur → AppIntent.

use std::time::Instant;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::OneShotTimer;

/// Verwaltet den Input-Zustand des Zeichenbereichs.
#[derive(Debug, Default)]
pub struct InputState {
    canvas_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { canvas_size: None }
    }

    /// Meldet die Canvas-Größe: beim ersten Aufruf `CanvasReady`, danach
    /// `CanvasResized` nur bei Änderung.
    pub fn collect_canvas_intents(&mut self, size: [f32; 2]) -> Vec<AppIntent> {
        match self.canvas_size {
            None => {
                self.canvas_size = Some(size);
                vec![AppIntent::CanvasReady { size }]
            }
            Some(previous) if previous != size => {
                self.canvas_size = Some(size);
                vec![AppIntent::CanvasResized { size }]
            }
            Some(_) => Vec::new(),
        }
    }

    /// Sammelt alle Intents eines Frames in Verarbeitungsreihenfolge:
    /// Canvas-Größe, abgelaufener Tick, Tastatur.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        canvas_size: [f32; 2],
        timer: &mut OneShotTimer,
        animation_active: bool,
    ) -> Vec<AppIntent> {
        let mut events = self.collect_canvas_intents(canvas_size);

        if timer.take_due(Instant::now()) {
            events.push(AppIntent::TickElapsed);
        }

        events.extend(keyboard::collect_keyboard_intents(ui, animation_active));
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_size_emits_ready_then_only_changes() {
        let mut input = InputState::new();

        assert_eq!(
            input.collect_canvas_intents([800.0, 600.0]),
            vec![AppIntent::CanvasReady { size: [800.0, 600.0] }]
        );
        assert!(input.collect_canvas_intents([800.0, 600.0]).is_empty());
        assert_eq!(
            input.collect_canvas_intents([640.0, 480.0]),
            vec![AppIntent::CanvasResized { size: [640.0, 480.0] }]
        );
    }
}

//! Keyboard-Shortcuts für das Zeichenfenster.
//!
//! Verarbeitet die Tasten `s`, `t` und Leertaste und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `t` und Leertaste sind nur im Animationsmodus belegt.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, animation_active: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_s_pressed, key_t_pressed, key_space_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::T),
            i.key_pressed(egui::Key::Space),
        )
    });

    if modifiers.command || modifiers.alt {
        return events;
    }

    // S = Zeichnung speichern (EPS/PNG)
    if key_s_pressed {
        events.push(AppIntent::SaveDrawingRequested);
    }

    if animation_active {
        // T = Stiftköpfe ein-/ausblenden
        if key_t_pressed {
            events.push(AppIntent::TogglePensRequested);
        }
        // Leertaste = sofortiger Neustart aller Kurven
        if key_space_pressed {
            events.push(AppIntent::RestartRequested);
        }
    }

    events
}

#[cfg(test)]
mod tests;

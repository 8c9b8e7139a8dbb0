//! Handler für statische Zeichnung und Animation.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SpiroParams;

/// Zeichnet die Einzelkurve des statischen Modus.
pub fn draw_static(state: &mut AppState, params: SpiroParams) {
    use_cases::drawing::draw_static(state, params);
}

/// Startet die Animation mit `count` Zufallskurven.
pub fn start_animation(state: &mut AppState, count: usize, seed: Option<u64>) {
    use_cases::drawing::start_animation(state, count, seed);
}

/// Verarbeitet einen abgelaufenen Tick.
pub fn advance(state: &mut AppState) {
    use_cases::drawing::advance_animation(state);
}

/// Startet alle Kurven sofort neu.
pub fn restart(state: &mut AppState) {
    use_cases::drawing::restart_animation(state);
}

/// Schaltet die Stiftköpfe um.
pub fn toggle_pens(state: &mut AppState) {
    use_cases::drawing::toggle_pen_visibility(state);
}

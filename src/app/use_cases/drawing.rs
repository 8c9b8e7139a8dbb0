//! Use-Case-Funktionen für statische Kurve und Animation.

use crate::app::animator::{SpiroAnimator, TickOutcome};
use crate::app::state::{Drawing, StaticDrawing};
use crate::app::AppState;
use crate::core::{curve, Canvas, CurveSession, ParamRandomizer, PenId, PenState, SpiroParams};

/// Winkelschritt des Hilfskreises in Grad.
const GUIDE_CIRCLE_STEP: usize = 5;

/// Zeichnet eine einzelne Kurve vollständig; es wird kein Tick eingeplant.
pub fn draw_static(state: &mut AppState, params: SpiroParams) {
    state.canvas.reset();
    state.timer.cancel();

    let guide_pen = state
        .options
        .show_guide_circle
        .then(|| draw_guide_circle(&mut state.canvas, &params, state.options.guide_circle_color));

    let mut session = CurveSession::new(&mut state.canvas, params, state.options.step_degrees);
    session.draw_full(&mut state.canvas);

    log::info!(
        "Statische Kurve gezeichnet: R={}, r={}, l={}, Schließwinkel {}°",
        params.outer_radius,
        params.inner_radius,
        params.hole_ratio,
        session.closing_angle()
    );

    state.drawing = Drawing::Static(StaticDrawing { session, guide_pen });
}

/// Zeichnet den Kreis mit Radius R um den Kurvenmittelpunkt und blendet den Stift aus.
fn draw_guide_circle(
    canvas: &mut dyn Canvas,
    params: &SpiroParams,
    color: [f32; 3],
) -> PenId {
    let radius = f64::from(params.outer_radius);
    let pen = canvas.create_pen(color);

    canvas.move_pen(pen, params.center + curve::circle_point(radius, 0.0), PenState::Up);
    for angle in (0..=360).step_by(GUIDE_CIRCLE_STEP) {
        let target = params.center + curve::circle_point(radius, f64::from(angle));
        canvas.move_pen(pen, target, PenState::Down);
    }
    canvas.set_pen_visible(pen, false);
    pen
}

/// Startet die Animation mit Zufallskurven in der aktuellen Canvas-Größe.
pub fn start_animation(state: &mut AppState, count: usize, seed: Option<u64>) {
    state.canvas.reset();
    state.timer.cancel();

    let [width, height] = state.view.canvas_size;
    let (width, height) = (width.round() as u32, height.round() as u32);
    let randomizer = match seed {
        Some(seed) => ParamRandomizer::seeded(seed, width, height),
        None => ParamRandomizer::new(width, height),
    };

    let animator = SpiroAnimator::new(
        count,
        state.options.step_degrees,
        state.options.tick_interval(),
        randomizer,
        &mut state.canvas,
        &mut state.timer,
    );
    state.drawing = Drawing::Animated(animator);
}

/// Führt einen Animations-Tick aus und plant den nächsten ein.
pub fn advance_animation(state: &mut AppState) -> Option<TickOutcome> {
    let Drawing::Animated(animator) = &mut state.drawing else {
        return None;
    };

    let outcome = animator.tick(&mut state.canvas, &mut state.timer);
    if outcome == TickOutcome::Restarted {
        log::info!("Alle Kurven fertig, Neustart #{}", animator.restart_count());
    }
    Some(outcome)
}

/// Startet alle Kurven sofort mit neuen Zufallsparametern neu.
pub fn restart_animation(state: &mut AppState) {
    if let Drawing::Animated(animator) = &mut state.drawing {
        animator.restart_all(&mut state.canvas);
        log::info!("Neustart angefordert (#{})", animator.restart_count());
    }
}

/// Blendet alle Stiftköpfe ein bzw. aus.
pub fn toggle_pen_visibility(state: &mut AppState) {
    if let Drawing::Animated(animator) = &state.drawing {
        animator.toggle_visibility(&mut state.canvas);
    }
}

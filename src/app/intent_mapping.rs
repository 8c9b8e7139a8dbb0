//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, LaunchMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// `t` und Leertaste wirken nur im Animationsmodus; im statischen Modus
/// liefern sie keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasReady { size } => {
            let mut commands = vec![AppCommand::SetCanvasSize { size }];
            if state.drawing.is_pending() {
                commands.push(match &state.launch {
                    LaunchMode::Static { params } => AppCommand::DrawStatic { params: *params },
                    LaunchMode::Animated { seed } => AppCommand::StartAnimation {
                        count: state.options.curve_count,
                        seed: *seed,
                    },
                });
            }
            commands
        }
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],
        AppIntent::TickElapsed if state.is_animating() => vec![AppCommand::AdvanceAnimation],
        AppIntent::TickElapsed => Vec::new(),
        AppIntent::SaveDrawingRequested => vec![AppCommand::ExportDrawing {
            basename: state.options.export_basename.clone(),
            with_png: state.options.export_png,
        }],
        AppIntent::TogglePensRequested if state.is_animating() => {
            vec![AppCommand::TogglePenVisibility]
        }
        AppIntent::RestartRequested if state.is_animating() => vec![AppCommand::RestartAnimation],
        AppIntent::TogglePensRequested | AppIntent::RestartRequested => Vec::new(),
    }
}

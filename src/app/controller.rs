//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Alle Intents eines Frames werden strikt nacheinander verarbeitet; ein Tick
/// ist immer vollständig abgeschlossen, bevor der nächste Intent beginnt.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Canvas ===
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),

            // === Zeichnen & Animation ===
            AppCommand::DrawStatic { params } => handlers::drawing::draw_static(state, params),
            AppCommand::StartAnimation { count, seed } => {
                handlers::drawing::start_animation(state, count, seed)
            }
            AppCommand::AdvanceAnimation => handlers::drawing::advance(state),
            AppCommand::RestartAnimation => handlers::drawing::restart(state),
            AppCommand::TogglePenVisibility => handlers::drawing::toggle_pens(state),

            // === Export ===
            AppCommand::ExportDrawing { basename, with_png } => {
                handlers::export::save_drawing(state, &basename, with_png)?
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        RenderScene::build(&state.canvas, state.view.canvas_size, &state.options)
    }
}

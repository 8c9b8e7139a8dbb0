//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod animator;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Zeichenfläche, Modus, Timer).
pub mod state;
pub mod use_cases;

pub use animator::{SpiroAnimator, TickOutcome};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, Drawing, LaunchMode, StaticDrawing, UiState, ViewState};

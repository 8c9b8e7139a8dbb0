//! Spirograph Library.
//! Kurvengenerator, Animation und Export als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod cli;
pub mod core;
pub mod export;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, Drawing, LaunchMode, SpiroAnimator,
    TickOutcome,
};
pub use cli::Cli;
pub use core::{
    Canvas, CurveSession, OneShotTimer, ParamRandomizer, ParamsError, PenId, PenState,
    SessionPhase, SpiroParams, TickScheduler, VectorCanvas,
};
pub use export::{export_drawing, ExportError};
pub use shared::{RenderScene, SpiroOptions};

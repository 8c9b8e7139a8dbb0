//! Core-Domänentypen: Kurvengenerator, Parameter, Zeichenfläche, Sessions.

pub mod canvas;
/// Reine Kurvenmathematik (Hypotrochoide, Schließwinkel)
pub mod curve;
pub mod params;
pub mod random;
pub mod session;
pub mod timer;

pub use canvas::{Canvas, Pen, PenId, PenState, Stroke, VectorCanvas};
pub use curve::{checked_closing_angle, closing_angle_degrees, curve_point, gcd, rotation_count};
pub use params::{ParamsError, PenColor, SpiroParams, MAX_ROTATIONS};
pub use random::ParamRandomizer;
pub use session::{CurveSession, SessionPhase, DEFAULT_STEP_DEGREES};
pub use timer::{OneShotTimer, TickScheduler};

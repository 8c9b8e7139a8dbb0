//! Zeichen-Session einer einzelnen Kurve.
//!
//! Zustandsmaschine: `Initialized` → `Advancing` → `Completed`.
//! `Completed` wird nur über [`CurveSession::restart`] oder
//! [`CurveSession::set_params`] wieder verlassen.

use super::canvas::{Canvas, PenId, PenState};
use super::params::SpiroParams;

/// Standard-Winkelschritt in Grad.
pub const DEFAULT_STEP_DEGREES: u32 = 5;

/// Phase einer Kurven-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Parameter gesetzt, Winkel 0
    Initialized,
    /// Mindestens ein Schritt gezeichnet, Kurve noch offen
    Advancing,
    /// Schließwinkel erreicht
    Completed,
}

/// Besitzt Parameter, aktuellen Winkel und Abschluss-Flag einer Kurve.
#[derive(Debug, Clone)]
pub struct CurveSession {
    params: SpiroParams,
    pen: PenId,
    step_degrees: u32,
    angle: u32,
    closing_angle: u32,
    completed: bool,
}

impl CurveSession {
    /// Legt einen Stift an, setzt die Parameter und positioniert den Stift.
    pub fn new(canvas: &mut dyn Canvas, params: SpiroParams, step_degrees: u32) -> Self {
        let pen = canvas.create_pen(params.color);
        let mut session = Self {
            params,
            pen,
            step_degrees: step_degrees.max(1),
            angle: 0,
            closing_angle: params.closing_angle(),
            completed: false,
        };
        session.set_params(canvas, params);
        session.restart(canvas);
        session
    }

    /// Übernimmt neue Parameter und setzt den Winkel auf 0 zurück.
    pub fn set_params(&mut self, canvas: &mut dyn Canvas, params: SpiroParams) {
        self.params = params;
        self.closing_angle = params.closing_angle();
        self.angle = 0;
        self.completed = false;
        canvas.set_pen_color(self.pen, params.color);
    }

    /// Zurück auf Winkel 0: Stift einblenden und ohne Linie zum Startpunkt bewegen.
    pub fn restart(&mut self, canvas: &mut dyn Canvas) {
        self.angle = 0;
        self.completed = false;
        canvas.set_pen_visible(self.pen, true);
        canvas.move_pen(self.pen, self.params.point_at(0), PenState::Up);
    }

    /// Zeichnet einen Schritt. Keine Operation, wenn die Kurve bereits geschlossen ist.
    pub fn step_advance(&mut self, canvas: &mut dyn Canvas) {
        if self.completed {
            return;
        }

        self.angle = self.angle.saturating_add(self.step_degrees);
        canvas.move_pen(self.pen, self.params.point_at(self.angle), PenState::Down);

        if self.angle >= self.closing_angle {
            canvas.set_pen_visible(self.pen, false);
            self.completed = true;
        }
    }

    /// Zeichnet die komplette Kurve in einem Aufruf.
    ///
    /// Erzeugt dieselbe Polylinie wie wiederholtes [`Self::step_advance`] ab Winkel 0.
    pub fn draw_full(&mut self, canvas: &mut dyn Canvas) {
        self.restart(canvas);
        while !self.completed {
            self.step_advance(canvas);
        }
    }

    /// Löscht die gezeichnete Kurve; Winkel und Flag bleiben unverändert.
    pub fn clear(&self, canvas: &mut dyn Canvas) {
        canvas.clear_pen(self.pen);
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> SessionPhase {
        if self.completed {
            SessionPhase::Completed
        } else if self.angle == 0 {
            SessionPhase::Initialized
        } else {
            SessionPhase::Advancing
        }
    }

    /// Ob der Schließwinkel erreicht wurde.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Aktueller Winkel in Grad.
    pub fn angle(&self) -> u32 {
        self.angle
    }

    /// Schließwinkel in Grad.
    pub fn closing_angle(&self) -> u32 {
        self.closing_angle
    }

    /// Winkelschritt in Grad.
    pub fn step_degrees(&self) -> u32 {
        self.step_degrees
    }

    /// Aktuelle Parameter.
    pub fn params(&self) -> &SpiroParams {
        &self.params
    }

    /// Stift-Handle auf der Zeichenfläche.
    pub fn pen(&self) -> PenId {
        self.pen
    }

    /// Anzahl Schritte bis zum Abschluss ab Winkel 0.
    pub fn steps_to_close(&self) -> u32 {
        self.closing_angle.div_ceil(self.step_degrees)
    }
}

//! Animations-Controller: treibt mehrere Kurven-Sessions im Takt.

use std::time::Duration;

use crate::core::{Canvas, CurveSession, ParamRandomizer, TickScheduler};

/// Standardanzahl gleichzeitig animierter Kurven.
pub const DEFAULT_CURVE_COUNT: usize = 4;
/// Standard-Tick-Intervall.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Ergebnis eines Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Alle Sessions wurden einen Schritt weiterbewegt
    Advanced {
        /// Anzahl abgeschlossener Kurven nach dem Schritt
        completed: usize,
    },
    /// Alle Kurven waren fertig, das Set wurde neu gestartet
    Restarted,
}

/// Besitzt alle Sessions exklusiv und entscheidet über Neustarts.
#[derive(Debug)]
pub struct SpiroAnimator {
    sessions: Vec<CurveSession>,
    randomizer: ParamRandomizer,
    tick_interval: Duration,
    restart_count: u64,
    tick_count: u64,
}

impl SpiroAnimator {
    /// Erzeugt `count` Sessions mit Zufallsparametern und plant den ersten Tick.
    pub fn new(
        count: usize,
        step_degrees: u32,
        tick_interval: Duration,
        mut randomizer: ParamRandomizer,
        canvas: &mut dyn Canvas,
        scheduler: &mut dyn TickScheduler,
    ) -> Self {
        let sessions = (0..count.max(1))
            .map(|_| {
                let params = randomizer.next_params();
                CurveSession::new(canvas, params, step_degrees)
            })
            .collect();

        let (width, height) = randomizer.canvas_size();
        log::info!(
            "Animation gestartet: {} Kurven auf {}x{}, Takt {:?}",
            count.max(1),
            width,
            height,
            tick_interval
        );

        scheduler.schedule_tick(tick_interval);

        Self {
            sessions,
            randomizer,
            tick_interval,
            restart_count: 0,
            tick_count: 0,
        }
    }

    /// Ein Animationsschritt: alle Sessions weiterbewegen, bei Gesamtabschluss
    /// neu starten und den nächsten Tick einplanen.
    pub fn tick(
        &mut self,
        canvas: &mut dyn Canvas,
        scheduler: &mut dyn TickScheduler,
    ) -> TickOutcome {
        self.tick_count += 1;

        for session in &mut self.sessions {
            session.step_advance(canvas);
        }
        let completed = self.completed_count();

        let outcome = if completed == self.sessions.len() {
            self.restart_all(canvas);
            TickOutcome::Restarted
        } else {
            TickOutcome::Advanced { completed }
        };

        scheduler.schedule_tick(self.tick_interval);
        outcome
    }

    /// Löscht alle Kurven und startet sie mit frischen Zufallsparametern neu.
    pub fn restart_all(&mut self, canvas: &mut dyn Canvas) {
        for session in &mut self.sessions {
            session.clear(canvas);
            let params = self.randomizer.next_params();
            session.set_params(canvas, params);
            session.restart(canvas);
        }
        self.restart_count += 1;
        log::debug!("Kurven neu gestartet (#{})", self.restart_count);
    }

    /// Schaltet die Sichtbarkeit aller Stiftköpfe um.
    pub fn toggle_visibility(&self, canvas: &mut dyn Canvas) {
        for session in &self.sessions {
            let visible = canvas.is_pen_visible(session.pen());
            canvas.set_pen_visible(session.pen(), !visible);
        }
    }

    /// Anzahl aktuell abgeschlossener Kurven.
    pub fn completed_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_completed()).count()
    }

    /// Alle Sessions in Erstellungsreihenfolge.
    pub fn sessions(&self) -> &[CurveSession] {
        &self.sessions
    }

    /// Anzahl bisheriger Neustarts (automatisch und manuell).
    pub fn restart_count(&self) -> u64 {
        self.restart_count
    }

    /// Anzahl verarbeiteter Ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Tick-Intervall.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

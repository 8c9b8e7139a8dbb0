//! Application State: zentrale Datenhaltung.

use std::path::PathBuf;

use super::animator::SpiroAnimator;
use crate::core::{CurveSession, OneShotTimer, PenId, SpiroParams, VectorCanvas};
use crate::shared::SpiroOptions;

/// Startmodus aus der Kommandozeile.
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchMode {
    /// Eine einzelne Kurve mit festen Parametern, einmal gezeichnet
    Static {
        /// Kurvenparameter (Mittelpunkt im Ursprung)
        params: SpiroParams,
    },
    /// Zufällige, endlos neu startende Kurven
    Animated {
        /// Optionaler Seed für reproduzierbare Zufallsparameter
        seed: Option<u64>,
    },
}

impl Default for LaunchMode {
    fn default() -> Self {
        Self::Animated { seed: None }
    }
}

/// Einmal gezeichnete Kurve des statischen Modus.
#[derive(Debug)]
pub struct StaticDrawing {
    /// Session der Kurve (abgeschlossen)
    pub session: CurveSession,
    /// Stift des optionalen Hilfskreises
    pub guide_pen: Option<PenId>,
}

/// Was aktuell auf der Zeichenfläche läuft.
#[derive(Debug, Default)]
pub enum Drawing {
    /// Canvas-Größe noch unbekannt, noch nichts gezeichnet
    #[default]
    Pending,
    /// Statische Einzelkurve
    Static(StaticDrawing),
    /// Animierte Kurven
    Animated(SpiroAnimator),
}

impl Drawing {
    /// Gibt `true` zurück, solange noch nicht gestartet wurde.
    pub fn is_pending(&self) -> bool {
        matches!(self, Drawing::Pending)
    }

    /// Animator, falls der Animationsmodus läuft.
    pub fn animator(&self) -> Option<&SpiroAnimator> {
        match self {
            Drawing::Animated(animator) => Some(animator),
            _ => None,
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixeln
    pub canvas_size: [f32; 2],
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. Export-Ergebnis)
    pub status_message: Option<String>,
    /// Zielverzeichnis für Exporte
    pub export_directory: PathBuf,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Export ins Arbeitsverzeichnis).
    pub fn new() -> Self {
        Self {
            status_message: None,
            export_directory: PathBuf::from("."),
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Startmodus (statisch oder animiert)
    pub launch: LaunchMode,
    /// Laufzeit-Optionen
    pub options: SpiroOptions,
    /// Zeichenfläche mit allen Stiften
    pub canvas: VectorCanvas,
    /// Einmal-Timer für den nächsten Animations-Tick
    pub timer: OneShotTimer,
    /// Laufende Zeichnung
    pub drawing: Drawing,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
}

impl AppState {
    /// Erstellt einen neuen App-State ohne gezeichnete Kurven.
    pub fn new(launch: LaunchMode, options: SpiroOptions) -> Self {
        Self {
            launch,
            options,
            canvas: VectorCanvas::new(),
            timer: OneShotTimer::new(),
            drawing: Drawing::Pending,
            view: ViewState::default(),
            ui: UiState::new(),
        }
    }

    /// Gibt zurück, ob der Animationsmodus läuft.
    pub fn is_animating(&self) -> bool {
        matches!(self.drawing, Drawing::Animated(_))
    }

    /// (abgeschlossen, gesamt) über alle Kurven.
    pub fn curve_progress(&self) -> (usize, usize) {
        match &self.drawing {
            Drawing::Pending => (0, 0),
            Drawing::Static(drawing) => (usize::from(drawing.session.is_completed()), 1),
            Drawing::Animated(animator) => (animator.completed_count(), animator.sessions().len()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LaunchMode::default(), SpiroOptions::default())
    }
}

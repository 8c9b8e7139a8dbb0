//! Zentrale Konfiguration für den Spirograph.
//!
//! `SpiroOptions` enthält alle über die TOML-Datei änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Animation ───────────────────────────────────────────────────────

/// Tick-Intervall der Animation in Millisekunden.
pub const TICK_INTERVAL_MS: u64 = 10;
/// Winkelschritt pro Tick in Grad.
pub const STEP_DEGREES: u32 = 5;
/// Anzahl gleichzeitig animierter Kurven.
pub const CURVE_COUNT: usize = 4;

// ── Fenster ─────────────────────────────────────────────────────────

/// Fensterbreite relativ zur Bildschirmbreite.
pub const WINDOW_WIDTH_FRACTION: f32 = 0.8;
/// Fensterhöhe relativ zur Bildschirmhöhe.
pub const WINDOW_HEIGHT_FRACTION: f32 = 0.75;
/// Fenstergröße, solange die Bildschirmgröße unbekannt ist.
pub const FALLBACK_WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];

// ── Zeichnen ────────────────────────────────────────────────────────

/// Linienbreite in Pixeln.
pub const PEN_WIDTH: f32 = 1.0;
/// Größe des Stiftkopfs in Pixeln.
pub const PEN_HEAD_SIZE: f32 = 9.0;
/// Hintergrundfarbe (RGB: Weiß).
pub const BACKGROUND_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
/// Farbe der statischen Kurve (RGB: Schwarz).
pub const STATIC_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
/// Farbe des Hilfskreises (RGB: Hellgrau).
pub const GUIDE_CIRCLE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

// ── Export ──────────────────────────────────────────────────────────

/// Dateiname (ohne Endung) für den Export.
pub const EXPORT_BASENAME: &str = "spiro-test";

/// Alle über die Konfigurationsdatei änderbaren Optionen.
/// Wird als `spirograph.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpiroOptions {
    // ── Animation ───────────────────────────────────────────────
    /// Tick-Intervall in Millisekunden
    pub tick_interval_ms: u64,
    /// Winkelschritt in Grad
    pub step_degrees: u32,
    /// Anzahl Kurven im Animationsmodus
    pub curve_count: usize,

    // ── Fenster ─────────────────────────────────────────────────
    /// Fensterbreite relativ zum Bildschirm
    pub window_width_fraction: f32,
    /// Fensterhöhe relativ zum Bildschirm
    pub window_height_fraction: f32,
    /// Fenstergröße ohne bekannte Bildschirmgröße
    pub fallback_window_size: [f32; 2],

    // ── Zeichnen ────────────────────────────────────────────────
    /// Linienbreite in Pixeln
    pub pen_width: f32,
    /// Größe des Stiftkopfs in Pixeln
    pub pen_head_size: f32,
    /// Hintergrundfarbe
    pub background_color: [f32; 3],
    /// Farbe der statischen Kurve
    pub static_color: [f32; 3],
    /// Hilfskreis mit Radius R im statischen Modus zeichnen
    pub show_guide_circle: bool,
    /// Farbe des Hilfskreises
    pub guide_circle_color: [f32; 3],

    // ── Export ──────────────────────────────────────────────────
    /// Dateiname ohne Endung
    pub export_basename: String,
    /// Zusätzlich ein PNG neben der EPS-Datei schreiben
    pub export_png: bool,
}

impl Default for SpiroOptions {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            step_degrees: STEP_DEGREES,
            curve_count: CURVE_COUNT,

            window_width_fraction: WINDOW_WIDTH_FRACTION,
            window_height_fraction: WINDOW_HEIGHT_FRACTION,
            fallback_window_size: FALLBACK_WINDOW_SIZE,

            pen_width: PEN_WIDTH,
            pen_head_size: PEN_HEAD_SIZE,
            background_color: BACKGROUND_COLOR,
            static_color: STATIC_COLOR,
            show_guide_circle: false,
            guide_circle_color: GUIDE_CIRCLE_COLOR,

            export_basename: EXPORT_BASENAME.to_string(),
            export_png: true,
        }
    }
}

impl SpiroOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spirograph"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spirograph.toml")
    }

    /// Klemmt Werte, die den Ablauf blockieren würden (Schritt 0, keine Kurven).
    pub fn validated(mut self) -> Self {
        self.step_degrees = self.step_degrees.max(1);
        self.curve_count = self.curve_count.max(1);
        self.tick_interval_ms = self.tick_interval_ms.max(1);
        self.window_width_fraction = self.window_width_fraction.clamp(0.1, 1.0);
        self.window_height_fraction = self.window_height_fraction.clamp(0.1, 1.0);
        if self.export_basename.trim().is_empty() {
            self.export_basename = EXPORT_BASENAME.to_string();
        }
        self
    }

    /// Tick-Intervall als `Duration`.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    /// Zielgröße des Fensters für eine Bildschirmgröße.
    pub fn window_size_for_monitor(&self, monitor_size: Option<[f32; 2]>) -> [f32; 2] {
        match monitor_size {
            Some([w, h]) if w > 0.0 && h > 0.0 => [
                (w * self.window_width_fraction).round(),
                (h * self.window_height_fraction).round(),
            ],
            _ => self.fallback_window_size,
        }
    }
}

/// Eingaben aus Fenster, Timer und Tastatur.
///
/// Ein Intent mutiert nichts selbst; das Intent-Mapping übersetzt ihn in `AppCommand`s.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Erster Frame: Canvas-Größe ist bekannt, Zeichnung kann starten
    CanvasReady { size: [f32; 2] },
    /// Canvas-Größe hat sich geändert
    CanvasResized { size: [f32; 2] },
    /// Einmal-Timer ist abgelaufen
    TickElapsed,
    /// Zeichnung exportieren (Taste `s`)
    SaveDrawingRequested,
    /// Stiftköpfe ein-/ausblenden (Taste `t`)
    TogglePensRequested,
    /// Alle Kurven sofort neu starten (Leertaste)
    RestartRequested,
}

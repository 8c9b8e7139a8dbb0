//! Zeichenfläche mit Stiften (Turtle-artig).
//!
//! Kurven-Sessions besitzen ihre Stifte nicht, sie halten nur eine
//! [`PenId`] und bekommen die Zeichenfläche als `&mut dyn Canvas` injiziert.

use glam::DVec2;

use super::params::PenColor;

/// Handle auf einen Stift der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PenId(pub usize);

/// Stiftzustand bei einer Bewegung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenState {
    /// Bewegen ohne zu zeichnen
    Up,
    /// Linie zur Zielposition zeichnen
    Down,
}

/// Zeichen-Capability, die von Sessions und Animator genutzt wird.
pub trait Canvas {
    /// Legt einen neuen, sichtbaren Stift im Ursprung an.
    fn create_pen(&mut self, color: PenColor) -> PenId;
    /// Setzt die Farbe für alle folgenden Linien des Stifts.
    fn set_pen_color(&mut self, pen: PenId, color: PenColor);
    /// Bewegt den Stift; bei `PenState::Down` entsteht eine Linie.
    fn move_pen(&mut self, pen: PenId, to: DVec2, state: PenState);
    /// Blendet den Stiftkopf ein oder aus (Gezeichnetes bleibt erhalten).
    fn set_pen_visible(&mut self, pen: PenId, visible: bool);
    /// Ob der Stiftkopf aktuell sichtbar ist.
    fn is_pen_visible(&self, pen: PenId) -> bool;
    /// Löscht alle Linien des Stifts.
    fn clear_pen(&mut self, pen: PenId);
}

/// Zusammenhängender Linienzug in einer Farbe.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Linienfarbe
    pub color: PenColor,
    /// Punkte des Linienzugs (mindestens zwei)
    pub points: Vec<DVec2>,
}

/// Zustand eines Stifts.
#[derive(Debug, Clone)]
pub struct Pen {
    /// Aktuelle Farbe
    pub color: PenColor,
    /// Aktuelle Position
    pub position: DVec2,
    /// Richtung der letzten Bewegung (Radiant)
    pub heading: f64,
    /// Stiftkopf sichtbar
    pub visible: bool,
    /// Gezeichnete Linienzüge
    pub strokes: Vec<Stroke>,
    /// Ob die nächste Down-Bewegung den letzten Linienzug fortsetzt
    continues_stroke: bool,
}

impl Pen {
    fn new(color: PenColor) -> Self {
        Self {
            color,
            position: DVec2::ZERO,
            heading: 0.0,
            visible: true,
            strokes: Vec::new(),
            continues_stroke: false,
        }
    }

    /// Alle Punkte aller Linienzüge in Zeichenreihenfolge.
    pub fn polyline(&self) -> Vec<DVec2> {
        self.strokes
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .collect()
    }
}

/// Vektor-Zeichenfläche, die alle Linien als Polylinien speichert.
#[derive(Debug, Clone, Default)]
pub struct VectorCanvas {
    pens: Vec<Pen>,
}

impl VectorCanvas {
    /// Erstellt eine leere Zeichenfläche.
    pub fn new() -> Self {
        Self { pens: Vec::new() }
    }

    /// Alle Stifte in Erstellungsreihenfolge.
    pub fn pens(&self) -> &[Pen] {
        &self.pens
    }

    /// Liefert einen Stift, falls vorhanden.
    pub fn pen(&self, pen: PenId) -> Option<&Pen> {
        self.pens.get(pen.0)
    }

    /// Entfernt alle Stifte und Linien.
    pub fn reset(&mut self) {
        self.pens.clear();
    }

    /// Gesamtzahl gezeichneter Liniensegmente.
    pub fn segment_count(&self) -> usize {
        self.pens
            .iter()
            .flat_map(|p| p.strokes.iter())
            .map(|s| s.points.len().saturating_sub(1))
            .sum()
    }

    fn pen_mut(&mut self, pen: PenId) -> Option<&mut Pen> {
        let found = self.pens.get_mut(pen.0);
        if found.is_none() {
            log::warn!("Unbekannter Stift {:?}", pen);
        }
        found
    }
}

impl Canvas for VectorCanvas {
    fn create_pen(&mut self, color: PenColor) -> PenId {
        self.pens.push(Pen::new(color));
        PenId(self.pens.len() - 1)
    }

    fn set_pen_color(&mut self, pen: PenId, color: PenColor) {
        if let Some(p) = self.pen_mut(pen) {
            p.color = color;
            p.continues_stroke = false;
        }
    }

    fn move_pen(&mut self, pen: PenId, to: DVec2, state: PenState) {
        let Some(p) = self.pen_mut(pen) else {
            return;
        };

        let delta = to - p.position;
        if delta.length_squared() > 0.0 {
            p.heading = delta.y.atan2(delta.x);
        }

        match state {
            PenState::Up => p.continues_stroke = false,
            PenState::Down => {
                let open_stroke = if p.continues_stroke {
                    p.strokes.last_mut()
                } else {
                    None
                };
                if let Some(stroke) = open_stroke {
                    stroke.points.push(to);
                } else {
                    let color = p.color;
                    let from = p.position;
                    p.strokes.push(Stroke {
                        color,
                        points: vec![from, to],
                    });
                }
                p.continues_stroke = true;
            }
        }
        p.position = to;
    }

    fn set_pen_visible(&mut self, pen: PenId, visible: bool) {
        if let Some(p) = self.pen_mut(pen) {
            p.visible = visible;
        }
    }

    fn is_pen_visible(&self, pen: PenId) -> bool {
        self.pens.get(pen.0).is_some_and(|p| p.visible)
    }

    fn clear_pen(&mut self, pen: PenId) {
        if let Some(p) = self.pen_mut(pen) {
            p.strokes.clear();
            p.continues_stroke = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PenColor = [1.0, 0.0, 0.0];
    const BLUE: PenColor = [0.0, 0.0, 1.0];

    #[test]
    fn pen_up_move_draws_nothing() {
        let mut canvas = VectorCanvas::new();
        let pen = canvas.create_pen(RED);

        canvas.move_pen(pen, DVec2::new(10.0, 0.0), PenState::Up);

        assert_eq!(canvas.segment_count(), 0);
        assert_eq!(canvas.pen(pen).unwrap().position, DVec2::new(10.0, 0.0));
    }

    #[test]
    fn consecutive_down_moves_extend_one_stroke() {
        let mut canvas = VectorCanvas::new();
        let pen = canvas.create_pen(RED);

        canvas.move_pen(pen, DVec2::new(1.0, 0.0), PenState::Up);
        canvas.move_pen(pen, DVec2::new(2.0, 0.0), PenState::Down);
        canvas.move_pen(pen, DVec2::new(2.0, 3.0), PenState::Down);

        let p = canvas.pen(pen).unwrap();
        assert_eq!(p.strokes.len(), 1);
        assert_eq!(
            p.strokes[0].points,
            vec![DVec2::new(1.0, 0.0), DVec2::new(2.0, 0.0), DVec2::new(2.0, 3.0)]
        );
        assert!((p.heading - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn color_change_starts_new_stroke() {
        let mut canvas = VectorCanvas::new();
        let pen = canvas.create_pen(RED);

        canvas.move_pen(pen, DVec2::new(1.0, 0.0), PenState::Down);
        canvas.set_pen_color(pen, BLUE);
        canvas.move_pen(pen, DVec2::new(2.0, 0.0), PenState::Down);

        let p = canvas.pen(pen).unwrap();
        assert_eq!(p.strokes.len(), 2);
        assert_eq!(p.strokes[1].color, BLUE);
        assert_eq!(canvas.segment_count(), 2);
    }

    #[test]
    fn clear_removes_only_own_strokes() {
        let mut canvas = VectorCanvas::new();
        let a = canvas.create_pen(RED);
        let b = canvas.create_pen(BLUE);
        canvas.move_pen(a, DVec2::new(1.0, 1.0), PenState::Down);
        canvas.move_pen(b, DVec2::new(-1.0, 1.0), PenState::Down);

        canvas.clear_pen(a);

        assert!(canvas.pen(a).unwrap().strokes.is_empty());
        assert_eq!(canvas.pen(b).unwrap().strokes.len(), 1);
        assert_eq!(canvas.pen(a).unwrap().position, DVec2::new(1.0, 1.0));
    }

    #[test]
    fn visibility_does_not_touch_strokes() {
        let mut canvas = VectorCanvas::new();
        let pen = canvas.create_pen(RED);
        canvas.move_pen(pen, DVec2::new(1.0, 1.0), PenState::Down);

        canvas.set_pen_visible(pen, false);

        assert!(!canvas.is_pen_visible(pen));
        assert_eq!(canvas.segment_count(), 1);
    }
}

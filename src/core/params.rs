//! Parameter einer einzelnen Spirograph-Kurve.

use glam::DVec2;
use thiserror::Error;

use super::curve;

/// Höchstzahl an Umläufen einer Kurve von der Kommandozeile.
pub const MAX_ROTATIONS: u32 = 10_000;

/// RGB-Farbe, Komponenten jeweils in [0, 1].
pub type PenColor = [f32; 3];

/// Fehler bei degenerierten Kurvenparametern.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    /// R oder r ist kleiner als 1 (Kurve wäre undefiniert)
    #[error("Radius {name} muss eine positive Ganzzahl sein (erhalten: {value})")]
    NonPositiveRadius { name: &'static str, value: f64 },
    /// Wert ist keine endliche Zahl
    #[error("Parameter {name} ist keine endliche Zahl (erhalten: {value})")]
    NotFinite { name: &'static str, value: f64 },
    /// Kurve schließt sich erst nach zu vielen Umläufen
    #[error(
        "R={outer} und r={inner} ergeben {rotations} Umläufe bis zum Schließen (höchstens {max})"
    )]
    TooManyRotations {
        outer: u32,
        inner: u32,
        rotations: u32,
        max: u32,
    },
}

/// Unveränderliche Parameter einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiroParams {
    /// Mittelpunkt der Kurve (Canvas-Koordinaten, Ursprung in der Mitte, y nach oben)
    pub center: DVec2,
    /// Stiftfarbe
    pub color: PenColor,
    /// Radius des festen äußeren Kreises (R)
    pub outer_radius: u32,
    /// Radius des rollenden inneren Kreises (r)
    pub inner_radius: u32,
    /// Lochabstand relativ zu r (l)
    pub hole_ratio: f64,
}

impl SpiroParams {
    /// Erstellt Parameter aus bereits ganzzahligen Radien.
    pub fn new(
        center: DVec2,
        color: PenColor,
        outer_radius: u32,
        inner_radius: u32,
        hole_ratio: f64,
    ) -> Self {
        Self {
            center,
            color,
            outer_radius,
            inner_radius,
            hole_ratio,
        }
    }

    /// Erstellt Parameter aus Kommazahlen (z.B. von der Kommandozeile).
    ///
    /// Radien werden wie bei einer Ganzzahl-Konvertierung abgeschnitten.
    /// Mehr als [`MAX_ROTATIONS`] Umläufe bis zum Schließen sind ein Fehler.
    /// `r >= R` wird akzeptiert, aber protokolliert.
    pub fn from_real(
        center: DVec2,
        color: PenColor,
        outer_radius: f64,
        inner_radius: f64,
        hole_ratio: f64,
    ) -> Result<Self, ParamsError> {
        let outer = radius_from_real("R", outer_radius)?;
        let inner = radius_from_real("r", inner_radius)?;
        let rotations = curve::rotation_count(outer, inner);
        if rotations > MAX_ROTATIONS {
            return Err(ParamsError::TooManyRotations {
                outer,
                inner,
                rotations,
                max: MAX_ROTATIONS,
            });
        }
        if !hole_ratio.is_finite() {
            return Err(ParamsError::NotFinite {
                name: "l",
                value: hole_ratio,
            });
        }
        if inner >= outer {
            log::warn!(
                "r ({}) >= R ({}): Kurve wird trotzdem gezeichnet",
                inner,
                outer
            );
        }
        if !(0.0..=1.0).contains(&hole_ratio) || hole_ratio == 0.0 {
            log::warn!("l = {} liegt außerhalb von (0, 1]", hole_ratio);
        }

        Ok(Self::new(center, color, outer, inner, hole_ratio))
    }

    /// `k = r / R`
    pub fn radius_ratio(&self) -> f64 {
        f64::from(self.inner_radius) / f64::from(self.outer_radius)
    }

    /// Schließwinkel in Grad.
    pub fn closing_angle(&self) -> u32 {
        curve::closing_angle_degrees(self.outer_radius, self.inner_radius)
    }

    /// Absoluter Kurvenpunkt (inkl. Mittelpunkt) für einen Winkel in Grad.
    pub fn point_at(&self, angle_degrees: u32) -> DVec2 {
        self.center
            + curve::curve_point(
                self.outer_radius,
                self.inner_radius,
                self.hole_ratio,
                f64::from(angle_degrees),
            )
    }
}

fn radius_from_real(name: &'static str, value: f64) -> Result<u32, ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NotFinite { name, value });
    }
    let truncated = value.trunc();
    if truncated < 1.0 || truncated > f64::from(u32::MAX) {
        return Err(ParamsError::NonPositiveRadius { name, value });
    }
    Ok(truncated as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BLACK: PenColor = [0.0, 0.0, 0.0];

    #[test]
    fn from_real_truncates_radii() {
        let params = SpiroParams::from_real(DVec2::ZERO, BLACK, 300.7, 100.2, 0.9)
            .expect("gültige Parameter");

        assert_eq!(params.outer_radius, 300);
        assert_eq!(params.inner_radius, 100);
        assert_eq!(params.closing_angle(), 360);
    }

    #[test]
    fn from_real_rejects_zero_radius() {
        let err = SpiroParams::from_real(DVec2::ZERO, BLACK, 300.0, 0.0, 0.9).unwrap_err();
        assert!(matches!(err, ParamsError::NonPositiveRadius { name: "r", .. }));

        let err = SpiroParams::from_real(DVec2::ZERO, BLACK, 0.5, 10.0, 0.9).unwrap_err();
        assert!(matches!(err, ParamsError::NonPositiveRadius { name: "R", .. }));
    }

    #[test]
    fn from_real_rejects_curves_with_too_many_rotations() {
        let err = SpiroParams::from_real(DVec2::ZERO, BLACK, 20_000_000.0, 19_999_999.0, 0.5)
            .unwrap_err();
        assert_eq!(
            err,
            ParamsError::TooManyRotations {
                outer: 20_000_000,
                inner: 19_999_999,
                rotations: 19_999_999,
                max: MAX_ROTATIONS,
            }
        );

        let params = SpiroParams::from_real(DVec2::ZERO, BLACK, 10_001.0, 10_000.0, 0.5)
            .expect("genau die Höchstzahl an Umläufen ist erlaubt");
        assert_eq!(params.closing_angle(), 360 * MAX_ROTATIONS);
    }

    #[test]
    fn from_real_rejects_nan() {
        let err = SpiroParams::from_real(DVec2::ZERO, BLACK, 300.0, 100.0, f64::NAN).unwrap_err();
        assert!(matches!(err, ParamsError::NotFinite { name: "l", .. }));
    }

    #[test]
    fn from_real_accepts_inner_larger_than_outer() {
        let params = SpiroParams::from_real(DVec2::ZERO, BLACK, 50.0, 80.0, 0.5)
            .expect("r >= R ist erlaubt");
        assert_eq!(params.closing_angle(), 360 * 8);
    }

    #[test]
    fn point_at_adds_center() {
        let params = SpiroParams::new(DVec2::new(10.0, -20.0), BLACK, 300, 100, 0.9);
        let p = params.point_at(0);

        assert_relative_eq!(p.x, 300.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, -20.0, epsilon = 1e-9);
        assert_relative_eq!(params.radius_ratio(), 1.0 / 3.0);
    }
}

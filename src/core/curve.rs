//! Kurvengenerator für Hypotrochoiden (Spirograph-Kurven).
//!
//! Reine Funktionen ohne Seiteneffekte: Punkt auf der Kurve für einen
//! Winkel in Grad, sowie der Schließwinkel der Kurve.

use glam::DVec2;

/// Größter gemeinsamer Teiler (euklidischer Algorithmus).
///
/// `gcd(0, 0)` liefert 0; Aufrufer müssen positive Radien garantieren.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Anzahl voller Umläufe, nach denen sich die Kurve schließt: `r / gcd(R, r)`.
pub fn rotation_count(outer_radius: u32, inner_radius: u32) -> u32 {
    inner_radius / gcd(outer_radius, inner_radius)
}

/// Winkel in Grad, bei dem sich die Kurve exakt schließt (`360 * nRot`).
///
/// `None`, wenn der Winkel nicht in `u32` passt.
pub fn checked_closing_angle(outer_radius: u32, inner_radius: u32) -> Option<u32> {
    rotation_count(outer_radius, inner_radius).checked_mul(360)
}

/// Wie [`checked_closing_angle`], sättigt aber bei `u32::MAX`.
pub fn closing_angle_degrees(outer_radius: u32, inner_radius: u32) -> u32 {
    rotation_count(outer_radius, inner_radius).saturating_mul(360)
}

/// Punkt der Kurve relativ zu ihrem eigenen Mittelpunkt.
///
/// `hole_ratio` ist das Verhältnis Stiftabstand / r. Für `inner_radius == 0`
/// ist das Ergebnis nicht definiert (Division durch k).
pub fn curve_point(outer_radius: u32, inner_radius: u32, hole_ratio: f64, angle_degrees: f64) -> DVec2 {
    let big_r = f64::from(outer_radius);
    let k = f64::from(inner_radius) / big_r;
    let a = angle_degrees.to_radians();
    let rolled = (1.0 - k) * a / k;

    DVec2::new(
        big_r * ((1.0 - k) * a.cos() + hole_ratio * k * rolled.cos()),
        big_r * ((1.0 - k) * a.sin() + hole_ratio * k * rolled.sin()),
    )
}

/// Punkt auf einem Kreis um den Ursprung (Hilfslinie für den statischen Modus).
pub fn circle_point(radius: f64, angle_degrees: f64) -> DVec2 {
    let a = angle_degrees.to_radians();
    DVec2::new(radius * a.cos(), radius * a.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gcd_of_common_radii() {
        assert_eq!(gcd(300, 100), 100);
        assert_eq!(gcd(8, 3), 1);
        assert_eq!(gcd(8, 2), 2);
        assert_eq!(gcd(7, 0), 7);
    }

    #[test]
    fn closing_angle_matches_rotation_count() {
        assert_eq!(closing_angle_degrees(300, 100), 360);
        assert_eq!(closing_angle_degrees(8, 2), 360);
        assert_eq!(closing_angle_degrees(8, 3), 1080);
        assert_eq!(rotation_count(8, 3), 3);
    }

    #[test]
    fn closing_angle_of_huge_coprime_radii_does_not_overflow() {
        assert_eq!(checked_closing_angle(20_000_000, 19_999_999), None);
        assert_eq!(closing_angle_degrees(20_000_000, 19_999_999), u32::MAX);
        assert_eq!(checked_closing_angle(8, 3), Some(1080));
    }

    #[test]
    fn closing_angle_is_multiple_of_full_turn() {
        for outer in 2..60 {
            for inner in 1..outer {
                assert_eq!(closing_angle_degrees(outer, inner) % 360, 0);
            }
        }
    }

    #[test]
    fn start_point_for_reference_curve() {
        let p = curve_point(300, 100, 0.9, 0.0);

        assert_relative_eq!(p.x, 290.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn curve_closes_at_closing_angle() {
        for &(outer, inner, l) in &[(300, 100, 0.9), (8, 3, 0.5), (220, 65, 0.3), (97, 41, 0.8)] {
            let closing = f64::from(closing_angle_degrees(outer, inner));
            let start = curve_point(outer, inner, l, 0.0);
            let end = curve_point(outer, inner, l, closing);

            assert_relative_eq!(start.x, end.x, epsilon = 1e-6);
            assert_relative_eq!(start.y, end.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn curve_is_periodic_in_closing_angle() {
        let (outer, inner, l) = (8, 3, 0.7);
        let period = f64::from(closing_angle_degrees(outer, inner));

        for angle in (0..1080).step_by(35) {
            let a = f64::from(angle);
            let p = curve_point(outer, inner, l, a);
            let q = curve_point(outer, inner, l, a + period);

            assert_relative_eq!(p.x, q.x, epsilon = 1e-9);
            assert_relative_eq!(p.y, q.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn circle_point_lies_on_radius() {
        let p = circle_point(50.0, 135.0);
        assert_relative_eq!(p.length(), 50.0, epsilon = 1e-9);
    }
}

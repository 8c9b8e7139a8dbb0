//! Zufallsparameter für den Animationsmodus.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::params::SpiroParams;

/// Kleinster zufälliger Außenradius R.
pub const MIN_OUTER_RADIUS: u32 = 50;
/// Kleinster zufälliger Innenradius r.
pub const MIN_INNER_RADIUS: u32 = 10;
/// Wertebereich des Lochabstands l.
pub const HOLE_RATIO_RANGE: std::ops::RangeInclusive<f64> = 0.1..=0.9;

/// Erzeugt zufällige Kurvenparameter innerhalb der Canvas-Größe.
#[derive(Debug, Clone)]
pub struct ParamRandomizer {
    rng: StdRng,
    width: u32,
    height: u32,
}

impl ParamRandomizer {
    /// Randomizer mit Entropie-Seed.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(StdRng::from_os_rng(), width, height)
    }

    /// Deterministischer Randomizer (Tests, `--seed`).
    pub fn seeded(seed: u64, width: u32, height: u32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), width, height)
    }

    fn with_rng(rng: StdRng, width: u32, height: u32) -> Self {
        Self {
            rng,
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Canvas-Größe, auf die sich die Zufallswerte beziehen.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Zieht einen neuen Parametersatz.
    ///
    /// `R ∈ [50, min(w,h)/2]`, `r ∈ [10, 9R/10]`, `l ∈ [0.1, 0.9]`,
    /// Mittelpunkt ganzzahlig in `[-w/2, w/2] × [-h/2, h/2]`.
    pub fn next_params(&mut self) -> SpiroParams {
        let max_outer = (self.width.min(self.height) / 2).max(MIN_OUTER_RADIUS);
        let outer = self.rng.random_range(MIN_OUTER_RADIUS..=max_outer);
        let inner = self.rng.random_range(MIN_INNER_RADIUS..=9 * outer / 10);
        let hole_ratio = self.rng.random_range(HOLE_RATIO_RANGE);

        let half_w = (self.width / 2) as i32;
        let half_h = (self.height / 2) as i32;
        let center = DVec2::new(
            f64::from(self.rng.random_range(-half_w..=half_w)),
            f64::from(self.rng.random_range(-half_h..=half_h)),
        );
        let color = [
            self.rng.random::<f32>(),
            self.rng.random::<f32>(),
            self.rng.random::<f32>(),
        ];

        SpiroParams::new(center, color, outer, inner, hole_ratio)
    }
}

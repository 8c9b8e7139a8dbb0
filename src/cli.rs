//! Kommandozeilen-Argumente.

use std::path::PathBuf;

use clap::Parser;
use glam::DVec2;

use crate::app::LaunchMode;
use crate::core::{ParamsError, SpiroParams};
use crate::shared::SpiroOptions;

/// Spirograph – zeichnet Hypotrochoiden, statisch oder als Endlos-Animation.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "spirograph", version, about)]
pub struct Cli {
    /// Einzelne statische Kurve: äußerer Radius R, innerer Radius r, Lochverhältnis l
    #[arg(
        long,
        num_args = 3,
        value_names = ["R", "r", "l"],
        allow_negative_numbers = true
    )]
    pub sparams: Option<Vec<f64>>,

    /// Seed für reproduzierbare Zufallskurven (nur Animationsmodus)
    #[arg(long, value_name = "SEED", conflicts_with = "sparams")]
    pub seed: Option<u64>,

    /// Pfad zur Optionen-Datei (Standard: spirograph.toml neben der Binary)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Pfad der zu ladenden Optionen-Datei.
    pub fn options_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(SpiroOptions::config_path)
    }

    /// Bestimmt den Startmodus; degenerierte `--sparams` liefern einen Fehler.
    pub fn launch_mode(&self, options: &SpiroOptions) -> Result<LaunchMode, ParamsError> {
        match self.sparams.as_deref() {
            Some(&[outer, inner, hole]) => {
                let params =
                    SpiroParams::from_real(DVec2::ZERO, options.static_color, outer, inner, hole)?;
                Ok(LaunchMode::Static { params })
            }
            _ => Ok(LaunchMode::Animated { seed: self.seed }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn no_flags_means_animation() {
        let cli = Cli::try_parse_from(["spirograph"]).expect("leere Argumente sind gültig");

        assert_eq!(
            cli.launch_mode(&SpiroOptions::default()),
            Ok(LaunchMode::Animated { seed: None })
        );
    }

    #[test]
    fn sparams_builds_static_black_curve_at_origin() {
        let cli = Cli::try_parse_from(["spirograph", "--sparams", "300", "100", "0.9"])
            .expect("drei Werte sind gültig");

        let Ok(LaunchMode::Static { params }) = cli.launch_mode(&SpiroOptions::default()) else {
            panic!("statischer Modus erwartet");
        };
        assert_eq!(params.outer_radius, 300);
        assert_eq!(params.inner_radius, 100);
        assert_relative_eq!(params.hole_ratio, 0.9);
        assert_eq!(params.center, DVec2::ZERO);
        assert_eq!(params.color, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn fractional_radii_are_truncated() {
        let cli = Cli::try_parse_from(["spirograph", "--sparams", "300.7", "100.2", "0.5"])
            .expect("Kommazahlen sind gültig");

        let Ok(LaunchMode::Static { params }) = cli.launch_mode(&SpiroOptions::default()) else {
            panic!("statischer Modus erwartet");
        };
        assert_eq!((params.outer_radius, params.inner_radius), (300, 100));
    }

    #[test]
    fn wrong_value_count_is_a_parse_error() {
        assert!(Cli::try_parse_from(["spirograph", "--sparams", "300", "100"]).is_err());
        assert!(Cli::try_parse_from(["spirograph", "--sparams", "a", "b", "c"]).is_err());
    }

    #[test]
    fn zero_or_negative_radius_is_rejected() {
        let cli = Cli::try_parse_from(["spirograph", "--sparams", "300", "-5", "0.5"])
            .expect("negative Zahlen erreichen die Validierung");
        assert!(matches!(
            cli.launch_mode(&SpiroOptions::default()),
            Err(ParamsError::NonPositiveRadius { name: "r", .. })
        ));

        let cli = Cli::try_parse_from(["spirograph", "--sparams", "0", "10", "0.5"])
            .expect("Null ist syntaktisch gültig");
        assert!(cli.launch_mode(&SpiroOptions::default()).is_err());
    }

    #[test]
    fn radii_that_never_close_in_time_are_rejected() {
        let cli = Cli::try_parse_from(["spirograph", "--sparams", "20000000", "19999999", "0.5"])
            .expect("große Radien sind syntaktisch gültig");

        assert!(matches!(
            cli.launch_mode(&SpiroOptions::default()),
            Err(ParamsError::TooManyRotations {
                rotations: 19_999_999,
                ..
            })
        ));
    }

    #[test]
    fn seed_and_config_are_parsed() {
        let cli = Cli::try_parse_from(["spirograph", "--seed", "42", "--config", "x.toml"])
            .expect("gültige Argumente");

        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.options_path(), PathBuf::from("x.toml"));
        assert_eq!(
            cli.launch_mode(&SpiroOptions::default()),
            Ok(LaunchMode::Animated { seed: Some(42) })
        );
    }
}

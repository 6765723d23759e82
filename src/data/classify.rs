//! Propagation-condition classification.
//!
//! Buckets the four propagation metrics into qualitative tiers. Bands are
//! evaluated top-down and the first match wins. Values that fall between
//! bands (Solar Flux 70 to 80, A-Index exactly 10) have no defined band and
//! classify as [`Tier::Unknown`]; those gaps are intentional.

use std::fmt;

/// A metric the classifier understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    SolarFlux,
    SunspotCount,
    AIndex,
    KIndex,
}

impl Metric {
    /// All classifiable metrics, in report order.
    pub const ALL: [Metric; 4] = [
        Metric::SolarFlux,
        Metric::SunspotCount,
        Metric::AIndex,
        Metric::KIndex,
    ];

    /// The metric's display name, as used by [`classify`].
    pub fn label(&self) -> &'static str {
        match self {
            Metric::SolarFlux => "Solar Flux",
            Metric::SunspotCount => "Sunspot Count",
            Metric::AIndex => "A-Index",
            Metric::KIndex => "K-Index",
        }
    }

    /// The feed key carrying this metric.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::SolarFlux => "solarflux",
            Metric::SunspotCount => "sunspots",
            Metric::AIndex => "aindex",
            Metric::KIndex => "kindex",
        }
    }

    /// Heading used by the colorized summary.
    pub fn summary_title(&self) -> &'static str {
        match self {
            Metric::SolarFlux => "Solar Flux Index (SFI)",
            Metric::SunspotCount => "Sunspot Numbers",
            Metric::AIndex => "A-Index",
            Metric::KIndex => "K-Index",
        }
    }

    pub fn from_label(label: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.label() == label)
    }

    fn tier_for(&self, v: f64) -> Tier {
        match self {
            Metric::SolarFlux => {
                if v < 70.0 {
                    Tier::Critical
                } else if (80.0..90.0).contains(&v) {
                    Tier::Poor
                } else if (90.0..100.0).contains(&v) {
                    Tier::Fair
                } else if (100.0..150.0).contains(&v) {
                    Tier::Good
                } else if v >= 150.0 {
                    Tier::Excellent
                } else {
                    Tier::Unknown
                }
            }
            Metric::SunspotCount => {
                if v < 50.0 {
                    Tier::Critical
                } else if v < 75.0 {
                    Tier::Poor
                } else if v < 100.0 {
                    Tier::Fair
                } else if v < 150.0 {
                    Tier::Good
                } else if v >= 150.0 {
                    Tier::Excellent
                } else {
                    Tier::Unknown
                }
            }
            Metric::AIndex => {
                if v <= 5.0 {
                    Tier::Good
                } else if (6.0..=9.0).contains(&v) {
                    Tier::Fair
                } else if v > 10.0 {
                    Tier::Critical
                } else {
                    Tier::Unknown
                }
            }
            Metric::KIndex => {
                if (0.0..=1.0).contains(&v) {
                    Tier::Good
                } else if (2.0..=3.0).contains(&v) {
                    Tier::Fair
                } else if (4.0..=5.0).contains(&v) {
                    Tier::Poor
                } else if v > 5.0 {
                    Tier::Critical
                } else {
                    Tier::Unknown
                }
            }
        }
    }

    fn description(&self, tier: Tier) -> &'static str {
        use Tier::*;
        match (self, tier) {
            (_, Unknown) => UNKNOWN_DESCRIPTION,

            (Metric::SolarFlux, Critical) => "Propagation potentially bad",
            (Metric::SolarFlux, Poor) => "Propagation somewhat low",
            (Metric::SolarFlux, Fair) => "Propagation average",
            (Metric::SolarFlux, Good) => "Propagation good",
            (Metric::SolarFlux, Excellent) => "Propagation ideal",

            (Metric::SunspotCount, Critical) => "Propagation very bad",
            (Metric::SunspotCount, Poor) => "Propagation attenuated",
            (Metric::SunspotCount, Fair) => "Propagation good",
            (Metric::SunspotCount, Good) => "Propagation ideal",
            (Metric::SunspotCount, Excellent) => "Propagation exceptional",

            (Metric::AIndex | Metric::KIndex, Good) => "Best conditions on 10-20 meter bands",
            (Metric::AIndex, Fair) => "Average conditions on 10-20 meter bands",
            (Metric::KIndex, Fair) => "Good conditions on 10-20 meter bands",
            (Metric::KIndex, Poor) => "Average conditions on 10-20 meter bands",
            (Metric::AIndex | Metric::KIndex, Critical) => {
                "Very bad conditions on 10-20 meter bands"
            }

            // Tiers the metric never produces.
            (Metric::AIndex, Poor | Excellent) | (Metric::KIndex, Excellent) => {
                UNKNOWN_DESCRIPTION
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const UNKNOWN_DESCRIPTION: &str = "Unknown condition";

/// Qualitative propagation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Critical,
    Poor,
    Fair,
    Good,
    Excellent,
    /// Unsupported metric, or a value between defined bands.
    Unknown,
}

impl Tier {
    /// Severity rank, worst first. `None` for [`Tier::Unknown`].
    pub fn severity(&self) -> Option<u8> {
        match self {
            Tier::Critical => Some(4),
            Tier::Poor => Some(3),
            Tier::Fair => Some(2),
            Tier::Good => Some(1),
            Tier::Excellent => Some(0),
            Tier::Unknown => None,
        }
    }

    pub fn color(&self) -> SeverityColor {
        match self {
            Tier::Critical => SeverityColor::Red,
            Tier::Poor => SeverityColor::Orange,
            Tier::Fair => SeverityColor::Yellow,
            Tier::Good => SeverityColor::Green,
            Tier::Excellent => SeverityColor::Blue,
            Tier::Unknown => SeverityColor::Gray,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Critical => "Critical",
            Tier::Poor => "Poor",
            Tier::Fair => "Fair",
            Tier::Good => "Good",
            Tier::Excellent => "Excellent",
            Tier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display colour for a verdict, ordered from calm to severe.
///
/// Presenters map these onto their own palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityColor {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl SeverityColor {
    pub fn name(&self) -> &'static str {
        match self {
            SeverityColor::Blue => "blue",
            SeverityColor::Green => "green",
            SeverityColor::Yellow => "yellow",
            SeverityColor::Orange => "orange",
            SeverityColor::Red => "red",
            SeverityColor::Gray => "gray",
        }
    }
}

/// Result of classifying one metric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionVerdict {
    pub metric: String,
    pub tier: Tier,
    pub description: &'static str,
    pub color: SeverityColor,
}

/// Classify `value` for the metric named `metric`.
///
/// Unrecognized metric names yield [`Tier::Unknown`].
///
/// ```
/// use swx_monitor::{classify, Tier};
///
/// assert_eq!(classify("K-Index", 1.0).tier, Tier::Good);
/// assert_eq!(classify("Solar Flux", 72.0).tier, Tier::Unknown);
/// assert_eq!(classify("Proton Flux", 10.0).tier, Tier::Unknown);
/// ```
pub fn classify(metric: &str, value: f64) -> ConditionVerdict {
    match Metric::from_label(metric) {
        Some(m) => classify_metric(m, value),
        None => verdict(metric, Tier::Unknown, UNKNOWN_DESCRIPTION),
    }
}

/// Classify `value` for a known metric.
pub fn classify_metric(metric: Metric, value: f64) -> ConditionVerdict {
    let tier = metric.tier_for(value);
    verdict(metric.label(), tier, metric.description(tier))
}

fn verdict(metric: &str, tier: Tier, description: &'static str) -> ConditionVerdict {
    ConditionVerdict {
        metric: metric.to_string(),
        tier,
        description,
        color: tier.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(metric: &str, value: f64) -> Tier {
        classify(metric, value).tier
    }

    #[test]
    fn test_solar_flux_bands() {
        assert_eq!(tier("Solar Flux", 65.0), Tier::Critical);
        assert_eq!(tier("Solar Flux", 69.9), Tier::Critical);
        assert_eq!(tier("Solar Flux", 80.0), Tier::Poor);
        assert_eq!(tier("Solar Flux", 89.9), Tier::Poor);
        assert_eq!(tier("Solar Flux", 90.0), Tier::Fair);
        assert_eq!(tier("Solar Flux", 100.0), Tier::Good);
        assert_eq!(tier("Solar Flux", 120.5), Tier::Good);
        assert_eq!(tier("Solar Flux", 150.0), Tier::Excellent);
        assert_eq!(tier("Solar Flux", 310.0), Tier::Excellent);
    }

    #[test]
    fn test_solar_flux_gap_is_unknown() {
        assert_eq!(tier("Solar Flux", 70.0), Tier::Unknown);
        assert_eq!(tier("Solar Flux", 72.0), Tier::Unknown);
        assert_eq!(tier("Solar Flux", 79.99), Tier::Unknown);

        let verdict = classify("Solar Flux", 72.0);
        assert_eq!(verdict.description, "Unknown condition");
        assert_eq!(verdict.color, SeverityColor::Gray);
    }

    #[test]
    fn test_sunspot_bands() {
        assert_eq!(tier("Sunspot Count", 0.0), Tier::Critical);
        assert_eq!(tier("Sunspot Count", 49.0), Tier::Critical);
        assert_eq!(tier("Sunspot Count", 50.0), Tier::Poor);
        assert_eq!(tier("Sunspot Count", 75.0), Tier::Fair);
        assert_eq!(tier("Sunspot Count", 80.0), Tier::Fair);
        assert_eq!(tier("Sunspot Count", 100.0), Tier::Good);
        assert_eq!(tier("Sunspot Count", 150.0), Tier::Excellent);
    }

    #[test]
    fn test_a_index_bands() {
        assert_eq!(tier("A-Index", 0.0), Tier::Good);
        assert_eq!(tier("A-Index", 4.0), Tier::Good);
        assert_eq!(tier("A-Index", 5.0), Tier::Good);
        assert_eq!(tier("A-Index", 6.0), Tier::Fair);
        assert_eq!(tier("A-Index", 9.0), Tier::Fair);
        assert_eq!(tier("A-Index", 11.0), Tier::Critical);
        assert_eq!(tier("A-Index", 48.0), Tier::Critical);
    }

    #[test]
    fn test_a_index_ten_is_unknown() {
        assert_eq!(tier("A-Index", 10.0), Tier::Unknown);
        assert_eq!(tier("A-Index", 5.5), Tier::Unknown);
        assert_eq!(tier("A-Index", 9.5), Tier::Unknown);
    }

    #[test]
    fn test_k_index_bands() {
        assert_eq!(tier("K-Index", 0.0), Tier::Good);
        assert_eq!(tier("K-Index", 1.0), Tier::Good);
        assert_eq!(tier("K-Index", 2.0), Tier::Fair);
        assert_eq!(tier("K-Index", 3.0), Tier::Fair);
        assert_eq!(tier("K-Index", 4.0), Tier::Poor);
        assert_eq!(tier("K-Index", 5.0), Tier::Poor);
        assert_eq!(tier("K-Index", 6.0), Tier::Critical);
        assert_eq!(tier("K-Index", 9.0), Tier::Critical);
    }

    #[test]
    fn test_k_index_between_integers_is_unknown() {
        assert_eq!(tier("K-Index", 1.5), Tier::Unknown);
        assert_eq!(tier("K-Index", -1.0), Tier::Unknown);
    }

    #[test]
    fn test_unknown_metric() {
        let verdict = classify("Proton Flux", 10.0);
        assert_eq!(verdict.tier, Tier::Unknown);
        assert_eq!(verdict.metric, "Proton Flux");
        assert_eq!(verdict.color, SeverityColor::Gray);
    }

    #[test]
    fn test_descriptions_and_colors() {
        let verdict = classify("K-Index", 2.0);
        assert_eq!(verdict.metric, "K-Index");
        assert_eq!(verdict.description, "Good conditions on 10-20 meter bands");
        assert_eq!(verdict.color, SeverityColor::Yellow);

        let verdict = classify("Solar Flux", 85.0);
        assert_eq!(verdict.description, "Propagation somewhat low");
        assert_eq!(verdict.color, SeverityColor::Orange);

        let verdict = classify("Sunspot Count", 200.0);
        assert_eq!(verdict.description, "Propagation exceptional");
        assert_eq!(verdict.color, SeverityColor::Blue);

        let verdict = classify("A-Index", 30.0);
        assert_eq!(verdict.description, "Very bad conditions on 10-20 meter bands");
        assert_eq!(verdict.color, SeverityColor::Red);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for metric in Metric::ALL {
            for v in [0.0, 5.0, 10.0, 72.0, 150.0] {
                assert_eq!(classify_metric(metric, v), classify_metric(metric, v));
            }
        }
    }

    #[test]
    fn test_metric_labels_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_label(metric.label()), Some(metric));
        }
        assert!(Metric::from_label("solar flux").is_none());
    }

    #[test]
    fn test_severity_order() {
        assert!(Tier::Critical.severity() > Tier::Poor.severity());
        assert!(Tier::Good.severity() > Tier::Excellent.severity());
        assert!(Tier::Unknown.severity().is_none());
    }
}

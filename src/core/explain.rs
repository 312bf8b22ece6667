//! Threshold heuristics shown next to the model probability.
//!
//! Each rule is evaluated on its own and never feeds the probability, so the
//! explanation may contradict the model verdict.

use crate::domain::model::{Explanation, FeatureVector, Rule, RuleOutcome};

/// Open interval (lower, upper) in Earth radii.
pub const PLANET_SIZE_RANGE: (f64, f64) = (0.5, 2.5);
/// Open interval (lower, upper) in Kelvin.
pub const STAR_TEMPERATURE_RANGE: (f64, f64) = (2500.0, 7000.0);
/// Open interval (lower, upper) in AU.
pub const ORBIT_DISTANCE_RANGE: (f64, f64) = (0.5, 2.0);
/// Upper bound (exclusive) in days.
pub const MAX_ORBITAL_PERIOD: f64 = 1000.0;

pub const DISAGREEMENT_NOTE: &str = "Note: these checks are simple heuristics evaluated separately from the model and may disagree with its prediction.";

fn within(value: f64, (lower, upper): (f64, f64)) -> bool {
    lower < value && value < upper
}

pub fn evaluate(rule: Rule, features: &FeatureVector) -> RuleOutcome {
    let (satisfied, message) = match rule {
        Rule::PlanetSize => {
            let ok = within(features.radius, PLANET_SIZE_RANGE);
            let message = if ok {
                "Planet size is Earth-like, so a rocky surface is plausible."
            } else {
                "Planet size is outside the Earth-like range (likely a gas giant or too small to hold an atmosphere)."
            };
            (ok, message)
        }
        Rule::StarTemperature => {
            let ok = within(features.star_temp, STAR_TEMPERATURE_RANGE);
            let message = if ok {
                "Star temperature allows for liquid water on an orbiting planet."
            } else {
                "Star temperature is too extreme for stable liquid water."
            };
            (ok, message)
        }
        Rule::OrbitDistance => {
            let ok = within(features.semi_major_axis, ORBIT_DISTANCE_RANGE);
            let message = if ok {
                "Orbit distance falls within the habitable zone."
            } else {
                "Orbit distance is outside the habitable zone."
            };
            (ok, message)
        }
        Rule::OrbitalPeriod => {
            let ok = features.period < MAX_ORBITAL_PERIOD;
            let message = if ok {
                "Orbital period is compatible with a stable climate."
            } else {
                "Orbital period is very long, making a stable climate unlikely."
            };
            (ok, message)
        }
    };

    RuleOutcome {
        rule,
        satisfied,
        message: message.to_string(),
    }
}

/// Always four outcomes, ordered size, temperature, orbit distance, period.
pub fn explain(features: &FeatureVector) -> Explanation {
    Rule::ALL
        .iter()
        .map(|rule| evaluate(*rule, features))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth_like() -> FeatureVector {
        FeatureVector::new(1.0, 365.0, 5500.0, 1.0)
    }

    #[test]
    fn test_earth_like_satisfies_every_rule() {
        let explanation = explain(&earth_like());

        assert_eq!(explanation.len(), 4);
        assert!(explanation.iter().all(|o| o.satisfied));
    }

    #[test]
    fn test_fixed_rule_order() {
        let rules: Vec<Rule> = explain(&earth_like()).iter().map(|o| o.rule).collect();
        assert_eq!(
            rules,
            vec![
                Rule::PlanetSize,
                Rule::StarTemperature,
                Rule::OrbitDistance,
                Rule::OrbitalPeriod
            ]
        );
    }

    #[test]
    fn test_gas_giant_fails_only_size_rule() {
        let baseline = explain(&earth_like());
        let giant = explain(&FeatureVector {
            radius: 15.0,
            ..earth_like()
        });

        assert!(!giant[0].satisfied);
        assert_eq!(&giant[1..], &baseline[1..]);
    }

    #[test]
    fn test_size_boundaries_are_excluded() {
        for (radius, expected) in [
            (0.5, false),
            (0.5001, true),
            (2.4999, true),
            (2.5, false),
            (0.1, false),
            (20.0, false),
        ] {
            let outcome = evaluate(
                Rule::PlanetSize,
                &FeatureVector {
                    radius,
                    ..earth_like()
                },
            );
            assert_eq!(outcome.satisfied, expected, "radius {}", radius);
        }
    }

    #[test]
    fn test_other_boundaries_are_excluded() {
        let base = earth_like();
        let hot = FeatureVector {
            star_temp: 7000.0,
            ..base
        };
        let cool = FeatureVector {
            star_temp: 2500.0,
            ..base
        };
        let far = FeatureVector {
            semi_major_axis: 2.0,
            ..base
        };
        let near = FeatureVector {
            semi_major_axis: 0.5,
            ..base
        };
        let long_year = FeatureVector {
            period: 1000.0,
            ..base
        };

        assert!(!evaluate(Rule::StarTemperature, &hot).satisfied);
        assert!(!evaluate(Rule::StarTemperature, &cool).satisfied);
        assert!(!evaluate(Rule::OrbitDistance, &far).satisfied);
        assert!(!evaluate(Rule::OrbitDistance, &near).satisfied);
        assert!(!evaluate(Rule::OrbitalPeriod, &long_year).satisfied);
        assert!(evaluate(Rule::OrbitalPeriod, &FeatureVector { period: 0.1, ..base }).satisfied);
    }

    #[test]
    fn test_explain_is_deterministic() {
        let features = FeatureVector::new(3.2, 1500.0, 8000.0, 4.0);
        assert_eq!(explain(&features), explain(&features));
        assert!(explain(&features).iter().all(|o| !o.satisfied));
    }
}

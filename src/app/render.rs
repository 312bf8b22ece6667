use crate::domain::model::{Assessment, RankedPlanet};
use std::fmt::Write;

pub fn render_assessment(assessment: &Assessment) -> String {
    let mut out = String::new();
    let prediction = &assessment.prediction;

    let _ = writeln!(
        out,
        "Predicted Habitability Probability: {:.2}",
        prediction.probability
    );
    if prediction.habitable {
        let _ = writeln!(out, "✅ This planet is likely to be habitable!");
    } else {
        let _ = writeln!(out, "❌ This planet is probably not habitable.");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Why:");
    for outcome in &assessment.explanation {
        let marker = if outcome.satisfied { "✅" } else { "❌" };
        let _ = writeln!(out, "  {} {}: {}", marker, outcome.rule, outcome.message);
    }

    let _ = writeln!(out);
    if assessment.heuristics_disagree() {
        let _ = writeln!(
            out,
            "⚠️  {} of {} checks passed, which does not match the model verdict.",
            assessment.satisfied_rules(),
            assessment.explanation.len()
        );
    }
    let _ = writeln!(out, "{}", assessment.note);
    out
}

pub fn render_ranking(ranked: &[RankedPlanet]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "🌟 Top {} Most Habitable Planets (Predicted)",
        ranked.len()
    );

    if ranked.is_empty() {
        let _ = writeln!(out, "(no complete catalog rows to rank)");
        return out;
    }

    let width = ranked
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Planet".len());

    let _ = writeln!(out, "{:>3}  {:<width$}  {}", "#", "Planet", "Probability");
    for (index, planet) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:.2}",
            index + 1,
            planet.name,
            planet.probability
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::explain::{explain, DISAGREEMENT_NOTE};
    use crate::domain::model::{FeatureVector, PredictionResult};

    fn assessment(probability: f64, features: FeatureVector) -> Assessment {
        Assessment {
            features,
            prediction: PredictionResult::from_probability(probability),
            explanation: explain(&features),
            note: DISAGREEMENT_NOTE,
        }
    }

    #[test]
    fn test_probability_has_two_decimals() {
        let text = render_assessment(&assessment(0.876, FeatureVector::default()));
        assert!(text.starts_with("Predicted Habitability Probability: 0.88\n"));
        assert!(text.contains("likely to be habitable"));
        assert!(text.contains(DISAGREEMENT_NOTE));
        assert!(!text.contains("does not match the model verdict"));
    }

    #[test]
    fn test_disagreement_is_stated() {
        // 所有規則成立，但模型判定不可居住
        let text = render_assessment(&assessment(0.2, FeatureVector::default()));
        assert!(text.contains("4 of 4 checks passed, which does not match the model verdict."));
        assert!(text.contains(DISAGREEMENT_NOTE));
    }

    #[test]
    fn test_explanations_listed_in_order() {
        let features = FeatureVector {
            radius: 15.0,
            ..FeatureVector::default()
        };
        let text = render_assessment(&assessment(0.5, features));

        assert!(text.contains("probably not habitable"));
        let size = text.find("❌ Planet size").unwrap();
        let temp = text.find("✅ Star temperature").unwrap();
        let orbit = text.find("✅ Orbit distance").unwrap();
        let period = text.find("✅ Orbital period").unwrap();
        assert!(size < temp && temp < orbit && orbit < period);
    }

    #[test]
    fn test_ranking_table() {
        let ranked = vec![
            RankedPlanet {
                name: "Kepler-1649 c".to_string(),
                features: FeatureVector::default(),
                probability: 0.934,
            },
            RankedPlanet {
                name: "Ross 128 b".to_string(),
                features: FeatureVector::default(),
                probability: 0.5,
            },
        ];

        let text = render_ranking(&ranked);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "🌟 Top 2 Most Habitable Planets (Predicted)");
        assert_eq!(lines[2], "  1  Kepler-1649 c  0.93");
        assert_eq!(lines[3], "  2  Ross 128 b     0.50");
    }

    #[test]
    fn test_empty_ranking() {
        assert!(render_ranking(&[]).contains("no complete catalog rows"));
    }
}

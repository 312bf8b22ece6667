use crate::domain::ports::Classifier;
use crate::utils::error::{HabitabilityError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standardization {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub standardization: Option<Standardization>,
}

impl LogisticRegression {
    pub fn validate(&self, n_features: usize) -> std::result::Result<(), String> {
        if self.coefficients.len() != n_features {
            return Err(format!(
                "expected {} coefficients, found {}",
                n_features,
                self.coefficients.len()
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("coefficients must be finite".to_string());
        }

        if let Some(std) = &self.standardization {
            if std.mean.len() != n_features || std.scale.len() != n_features {
                return Err("standardization must cover every feature".to_string());
            }
            if std.scale.iter().any(|s| *s == 0.0 || !s.is_finite())
                || std.mean.iter().any(|m| !m.is_finite())
            {
                return Err("standardization scale must be finite and non-zero".to_string());
            }
        }

        Ok(())
    }

    fn decision(&self, row: &[f64]) -> f64 {
        let linear: f64 = match &self.standardization {
            Some(std) => row
                .iter()
                .zip(&self.coefficients)
                .zip(std.mean.iter().zip(&std.scale))
                .map(|((x, w), (m, s))| w * (x - m) / s)
                .sum(),
            None => row.iter().zip(&self.coefficients).map(|(x, w)| w * x).sum(),
        };
        linear + self.intercept
    }
}

fn sigmoid(z: f64) -> f64 {
    // 分兩支避免 exp 溢位
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn positive_probability(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(HabitabilityError::inference(format!(
                "expected {} features, got {}",
                self.coefficients.len(),
                row.len()
            )));
        }
        Ok(sigmoid(self.decision(row)))
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LogisticRegression {
        LogisticRegression {
            coefficients: vec![-1.0, 0.0, 0.0, 0.0],
            intercept: 2.0,
            standardization: None,
        }
    }

    #[test]
    fn test_zero_margin_is_one_half() {
        let p = model().positive_probability(&[2.0, 365.0, 5500.0, 1.0]).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_margins_stay_in_unit_interval() {
        let m = model();
        let high = m.positive_probability(&[-1.0e6, 0.0, 0.0, 0.0]).unwrap();
        let low = m.positive_probability(&[1.0e6, 0.0, 0.0, 0.0]).unwrap();
        assert!(high <= 1.0 && high > 0.99);
        assert!(low >= 0.0 && low < 0.01);
    }

    #[test]
    fn test_standardization_is_applied() {
        let m = LogisticRegression {
            coefficients: vec![1.0, 0.0, 0.0, 0.0],
            intercept: 0.0,
            standardization: Some(Standardization {
                mean: vec![1.0, 0.0, 0.0, 0.0],
                scale: vec![2.0, 1.0, 1.0, 1.0],
            }),
        };
        assert!(m.validate(4).is_ok());
        let p = m.positive_probability(&[1.0, 9.0, 9.0, 9.0]).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_zero_scale_and_bad_arity() {
        let mut m = model();
        assert!(m.validate(3).is_err());

        m.standardization = Some(Standardization {
            mean: vec![0.0; 4],
            scale: vec![1.0, 0.0, 1.0, 1.0],
        });
        assert!(m.validate(4).is_err());
    }
}

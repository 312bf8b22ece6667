use crate::domain::model::FeatureVector;
use crate::utils::error::{HabitabilityError, Result};
use crate::utils::validation::validate_range;

pub const RADIUS_RANGE: (f64, f64) = (0.1, 20.0);
pub const PERIOD_RANGE: (f64, f64) = (0.1, 10000.0);
pub const STAR_TEMP_RANGE: (f64, f64) = (2000.0, 10000.0);
pub const SEMI_MAJOR_AXIS_RANGE: (f64, f64) = (0.01, 10.0);

/// 輸入介面的範圍檢查，核心邏輯本身不做驗證
pub fn validate_features(features: &FeatureVector) -> Result<()> {
    validate_range("radius", features.radius, RADIUS_RANGE.0, RADIUS_RANGE.1)?;
    validate_range("period", features.period, PERIOD_RANGE.0, PERIOD_RANGE.1)?;
    validate_range(
        "star_temp",
        features.star_temp,
        STAR_TEMP_RANGE.0,
        STAR_TEMP_RANGE.1,
    )?;
    validate_range(
        "semi_major_axis",
        features.semi_major_axis,
        SEMI_MAJOR_AXIS_RANGE.0,
        SEMI_MAJOR_AXIS_RANGE.1,
    )?;
    Ok(())
}

/// Parses `radius period star_temp semi_major_axis`; no arguments means the
/// default Earth-like inputs.
pub fn parse_features(args: &[&str]) -> Result<FeatureVector> {
    if args.is_empty() {
        return Ok(FeatureVector::default());
    }
    if args.len() != 4 {
        return Err(HabitabilityError::InvalidConfigValueError {
            field: "predict".to_string(),
            value: args.join(" "),
            reason: "expected: predict <radius> <period> <star_temp> <semi_major_axis>".to_string(),
        });
    }

    let mut values = [0.0; 4];
    for (slot, (raw, field)) in values.iter_mut().zip(
        args.iter()
            .zip(["radius", "period", "star_temp", "semi_major_axis"]),
    ) {
        *slot = raw
            .parse::<f64>()
            .map_err(|_| HabitabilityError::InvalidConfigValueError {
                field: field.to_string(),
                value: raw.to_string(),
                reason: "not a number".to_string(),
            })?;
    }

    let features = FeatureVector::new(values[0], values[1], values[2], values[3]);
    validate_features(&features)?;
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_values() {
        let features = parse_features(&["1.2", "300", "5000", "0.9"]).unwrap();
        assert_eq!(features, FeatureVector::new(1.2, 300.0, 5000.0, 0.9));
    }

    #[test]
    fn test_no_values_means_defaults() {
        assert_eq!(parse_features(&[]).unwrap(), FeatureVector::default());
    }

    #[test]
    fn test_rejects_wrong_count_and_text() {
        assert!(parse_features(&["1.0", "365"]).is_err());
        let err = parse_features(&["big", "365", "5500", "1"]).unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_range_edges() {
        assert!(validate_features(&FeatureVector::new(0.1, 0.1, 2000.0, 0.01)).is_ok());
        assert!(validate_features(&FeatureVector::new(20.0, 10000.0, 10000.0, 10.0)).is_ok());
        assert!(validate_features(&FeatureVector::new(1.0, 365.0, 1999.0, 1.0)).is_err());
        assert!(validate_features(&FeatureVector::new(1.0, 365.0, 5500.0, 0.0)).is_err());
    }
}

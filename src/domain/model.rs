use serde::{Deserialize, Serialize};
use std::fmt;

/// 模型要求的特徵數量，順序為 radius, period, star_temp, semi_major_axis
pub const FEATURE_COUNT: usize = 4;

/// Probability strictly above this value is labelled habitable.
pub const HABITABLE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Planet radius in Earth radii.
    pub radius: f64,
    /// Orbital period in days.
    pub period: f64,
    /// Host star effective temperature in Kelvin.
    pub star_temp: f64,
    /// Semi-major axis in AU.
    pub semi_major_axis: f64,
}

impl FeatureVector {
    pub fn new(radius: f64, period: f64, star_temp: f64, semi_major_axis: f64) -> Self {
        Self {
            radius,
            period,
            star_temp,
            semi_major_axis,
        }
    }

    /// Column order the model was trained on.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [self.radius, self.period, self.star_temp, self.semi_major_axis]
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new(1.0, 365.0, 5500.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub probability: f64,
    pub habitable: bool,
}

impl PredictionResult {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            probability,
            habitable: probability > HABITABLE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    PlanetSize,
    StarTemperature,
    OrbitDistance,
    OrbitalPeriod,
}

impl Rule {
    /// 顯示順序固定
    pub const ALL: [Rule; 4] = [
        Rule::PlanetSize,
        Rule::StarTemperature,
        Rule::OrbitDistance,
        Rule::OrbitalPeriod,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::PlanetSize => "Planet size",
            Rule::StarTemperature => "Star temperature",
            Rule::OrbitDistance => "Orbit distance",
            Rule::OrbitalPeriod => "Orbital period",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub satisfied: bool,
    pub message: String,
}

pub type Explanation = Vec<RuleOutcome>;

/// A prediction shown together with the heuristic explanation. The two are
/// computed independently and are allowed to disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub features: FeatureVector,
    pub prediction: PredictionResult,
    pub explanation: Explanation,
    /// Fixed notice that the explanation may contradict the prediction.
    pub note: &'static str,
}

impl Assessment {
    pub fn satisfied_rules(&self) -> usize {
        self.explanation.iter().filter(|o| o.satisfied).count()
    }

    /// True when the heuristics and the model point in different directions.
    pub fn heuristics_disagree(&self) -> bool {
        let all_rules = self.satisfied_rules() == self.explanation.len();
        all_rules != self.prediction.habitable
    }
}

/// 目錄中的一列；任一欄位缺值時在評分前會被剔除
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogRow {
    pub name: Option<String>,
    pub radius: Option<f64>,
    pub period: Option<f64>,
    pub star_temp: Option<f64>,
    pub semi_major_axis: Option<f64>,
}

impl CatalogRow {
    pub fn features(&self) -> Option<FeatureVector> {
        Some(FeatureVector::new(
            self.radius?,
            self.period?,
            self.star_temp?,
            self.semi_major_axis?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlanet {
    pub name: String,
    pub features: FeatureVector,
    pub probability: f64,
}

/// 目錄欄位名稱，預設為 PHL 系外行星目錄的欄位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogColumns {
    pub name: String,
    pub radius: String,
    pub period: String,
    pub star_temp: String,
    pub semi_major_axis: String,
}

impl CatalogColumns {
    pub fn required(&self) -> [&str; 5] {
        [
            self.radius.as_str(),
            self.period.as_str(),
            self.star_temp.as_str(),
            self.semi_major_axis.as_str(),
            self.name.as_str(),
        ]
    }
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            name: "P_NAME".to_string(),
            radius: "P_RADIUS".to_string(),
            period: "P_PERIOD".to_string(),
            star_temp: "S_TEMPERATURE".to_string(),
            semi_major_axis: "P_SEMI_MAJOR_AXIS_EST".to_string(),
        }
    }
}

use crate::domain::ports::Classifier;
use crate::utils::error::{HabitabilityError, Result};
use serde::{Deserialize, Serialize};

/// A node in array form. Children always sit after their parent, which makes
/// traversal terminate without a visited set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Class weights `[not_habitable, habitable]`; need not be normalised.
        value: [f64; 2],
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn validate(&self, n_features: usize) -> std::result::Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }

        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!(
                            "node {} splits on feature {} but the model has {} features",
                            index, feature, n_features
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", index));
                    }
                    for child in [left, right] {
                        if *child <= index || *child >= self.nodes.len() {
                            return Err(format!(
                                "node {} points to invalid child {}",
                                index, child
                            ));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(format!("leaf {} has negative or non-finite weights", index));
                    }
                    if value.iter().sum::<f64>() <= 0.0 {
                        return Err(format!("leaf {} has no class weight", index));
                    }
                }
            }
        }

        Ok(())
    }

    /// Normalised probability of the positive class at the reached leaf.
    pub fn leaf_probability(&self, row: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value } => {
                    return value[1] / (value[0] + value[1]);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForest {
    /// 建立並驗證樹結構，所有節點索引必須合法
    pub fn new(trees: Vec<DecisionTree>, n_features: usize) -> std::result::Result<Self, String> {
        let forest = Self { trees, n_features };
        forest.validate()?;
        Ok(forest)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.trees.is_empty() {
            return Err("random forest has no trees".to_string());
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|e| format!("tree {}: {}", index, e))?;
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn positive_probability(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.n_features {
            return Err(HabitabilityError::inference(format!(
                "expected {} features, got {}",
                self.n_features,
                row.len()
            )));
        }

        let total: f64 = self.trees.iter().map(|t| t.leaf_probability(row)).sum();
        Ok(total / self.trees.len() as f64)
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}

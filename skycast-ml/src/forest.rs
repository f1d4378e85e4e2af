//! Gradient-boosted forest classifier
//!
//! The shipped model is an additive ensemble of decision trees produced by
//! an external training job and deserialized from an artifact blob. The
//! forest stores the exact schema it was trained on and verifies every
//! incoming record against it before any tree is traversed; a record that
//! does not match field-for-field is refused, never repaired.
//!
//! Scoring sums each tree's leaf scores per class and returns the arg-max
//! class index. Ties break to the lowest index, so classification is
//! deterministic for identical input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skycast_core::{Classifier, FeatureKind, FeatureRecord, FeatureValue, InferenceError};

use crate::node::Node;
use crate::tree::{ResolvedValue, Tree};

/// One column of the trained schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Column name.
    pub name: String,
    /// Column kind.
    pub kind: FeatureKind,
}

/// Token table for one categorical column.
///
/// Tokens are stored exactly as the training job saw them after its own
/// preprocessing; ids are positions in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Schema index of the column this table belongs to.
    pub feature: u16,
    /// Known tokens, id = position.
    pub tokens: Vec<String>,
}

/// Descriptive metadata carried inside the model artifact.
///
/// Never consulted during inference; display layers read it so the facts
/// shown next to a prediction come from the artifact itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Training algorithm name.
    pub algorithm: String,
    /// Overall accuracy measured at training time.
    pub trained_accuracy: f32,
    /// Per-class accuracy measured at training time.
    pub per_class_accuracy: Vec<(String, f32)>,
}

/// Structural defect found in a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelIntegrityError {
    #[error("model has no trees")]
    NoTrees,

    #[error("model declares {0} classes, at least two required")]
    TooFewClasses(usize),

    #[error("tree {tree} has no nodes")]
    EmptyTree { tree: usize },

    #[error("tree {tree} node {node} references feature {feature} outside the schema")]
    FeatureOutOfRange { tree: usize, node: usize, feature: u16 },

    #[error("tree {tree} node {node} split kind does not match the schema kind of its feature")]
    KindMismatch { tree: usize, node: usize },

    #[error("tree {tree} node {node} child index {child} out of bounds")]
    ChildOutOfRange { tree: usize, node: usize, child: u32 },

    #[error("tree {tree} node {node} children must be stored after their parent")]
    ChildOrder { tree: usize, node: usize },

    #[error("tree {tree} node {node} carries a non-finite value")]
    NonFinite { tree: usize, node: usize },

    #[error("tree {tree} leaf {node} has {found} scores, expected {expected}")]
    LeafArity {
        tree: usize,
        node: usize,
        expected: usize,
        found: usize,
    },

    #[error("tree {tree} node {node} references category id {id} outside its vocabulary")]
    CategoryOutOfRange { tree: usize, node: usize, id: u16 },

    #[error("categorical feature `{name}` has no vocabulary")]
    MissingVocabulary { name: String },

    #[error("vocabulary {index} does not reference a categorical schema column")]
    VocabularyMismatch { index: usize },

    #[error("vocabulary for feature `{name}` repeats token `{token}`")]
    DuplicateToken { name: String, token: String },
}

/// Pre-trained boosted-tree classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientForest {
    schema: Vec<FeatureSpec>,
    vocabularies: Vec<Vocabulary>,
    trees: Vec<Tree>,
    num_classes: usize,
    info: ModelInfo,
}

/// Shape summary of a loaded forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestStats {
    /// Number of trees in the ensemble.
    pub trees: usize,
    /// Total nodes across all trees.
    pub total_nodes: usize,
    /// Number of classes the forest scores.
    pub classes: usize,
    /// Number of schema columns.
    pub features: usize,
}

impl GradientForest {
    /// Assemble a forest and check its structural integrity.
    pub fn new(
        schema: Vec<FeatureSpec>,
        vocabularies: Vec<Vocabulary>,
        trees: Vec<Tree>,
        num_classes: usize,
        info: ModelInfo,
    ) -> Result<Self, ModelIntegrityError> {
        let forest = Self {
            schema,
            vocabularies,
            trees,
            num_classes,
            info,
        };
        forest.validate()?;
        Ok(forest)
    }

    /// Check every structural invariant traversal relies on.
    ///
    /// Called on construction and again after deserialization, so a
    /// corrupted artifact is rejected at load time rather than observed as
    /// undefined traversal behavior.
    pub fn validate(&self) -> Result<(), ModelIntegrityError> {
        if self.num_classes < 2 {
            return Err(ModelIntegrityError::TooFewClasses(self.num_classes));
        }
        if self.trees.is_empty() {
            return Err(ModelIntegrityError::NoTrees);
        }

        for (index, vocabulary) in self.vocabularies.iter().enumerate() {
            let spec = self
                .schema
                .get(vocabulary.feature as usize)
                .ok_or(ModelIntegrityError::VocabularyMismatch { index })?;
            if spec.kind != FeatureKind::Categorical {
                return Err(ModelIntegrityError::VocabularyMismatch { index });
            }
            for (i, token) in vocabulary.tokens.iter().enumerate() {
                if vocabulary.tokens[..i].contains(token) {
                    return Err(ModelIntegrityError::DuplicateToken {
                        name: spec.name.clone(),
                        token: token.clone(),
                    });
                }
            }
        }

        for (position, spec) in self.schema.iter().enumerate() {
            if spec.kind == FeatureKind::Categorical && self.vocabulary_for(position).is_none() {
                return Err(ModelIntegrityError::MissingVocabulary {
                    name: spec.name.clone(),
                });
            }
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.node_count() == 0 {
                return Err(ModelIntegrityError::EmptyTree { tree: t });
            }
            for (n, node) in tree.nodes().iter().enumerate() {
                self.validate_node(t, n, node, tree.node_count())?;
            }
        }

        Ok(())
    }

    fn validate_node(
        &self,
        tree: usize,
        node: usize,
        data: &Node,
        node_count: usize,
    ) -> Result<(), ModelIntegrityError> {
        let check_children = |left: u32, right: u32| {
            for child in [left, right] {
                if child as usize >= node_count {
                    return Err(ModelIntegrityError::ChildOutOfRange { tree, node, child });
                }
                if child as usize <= node {
                    return Err(ModelIntegrityError::ChildOrder { tree, node });
                }
            }
            Ok(())
        };

        match data {
            Node::Numeric {
                feature,
                threshold,
                left,
                right,
            } => {
                let spec = self.schema.get(*feature as usize).ok_or(
                    ModelIntegrityError::FeatureOutOfRange {
                        tree,
                        node,
                        feature: *feature,
                    },
                )?;
                if spec.kind != FeatureKind::Numeric {
                    return Err(ModelIntegrityError::KindMismatch { tree, node });
                }
                if !threshold.is_finite() {
                    return Err(ModelIntegrityError::NonFinite { tree, node });
                }
                check_children(*left, *right)
            }
            Node::Categorical {
                feature,
                left_categories,
                left,
                right,
            } => {
                let spec = self.schema.get(*feature as usize).ok_or(
                    ModelIntegrityError::FeatureOutOfRange {
                        tree,
                        node,
                        feature: *feature,
                    },
                )?;
                if spec.kind != FeatureKind::Categorical {
                    return Err(ModelIntegrityError::KindMismatch { tree, node });
                }
                // MissingVocabulary was already ruled out above
                let vocabulary_len = self
                    .vocabulary_for(*feature as usize)
                    .map(|v| v.tokens.len())
                    .unwrap_or(0);
                for &id in left_categories {
                    if id as usize >= vocabulary_len {
                        return Err(ModelIntegrityError::CategoryOutOfRange { tree, node, id });
                    }
                }
                check_children(*left, *right)
            }
            Node::Leaf { scores } => {
                if scores.len() != self.num_classes {
                    return Err(ModelIntegrityError::LeafArity {
                        tree,
                        node,
                        expected: self.num_classes,
                        found: scores.len(),
                    });
                }
                if scores.iter().any(|s| !s.is_finite()) {
                    return Err(ModelIntegrityError::NonFinite { tree, node });
                }
                Ok(())
            }
        }
    }

    fn vocabulary_for(&self, feature: usize) -> Option<&Vocabulary> {
        self.vocabularies
            .iter()
            .find(|v| v.feature as usize == feature)
    }

    /// Verify a record against the trained schema and resolve its values.
    fn resolve(&self, record: &FeatureRecord) -> Result<Vec<ResolvedValue>, InferenceError> {
        if record.len() != self.schema.len() {
            return Err(InferenceError::FieldCount {
                expected: self.schema.len(),
                found: record.len(),
            });
        }

        let mut row = Vec::with_capacity(self.schema.len());
        for (position, (field, spec)) in record.fields().iter().zip(&self.schema).enumerate() {
            if field.name != spec.name {
                return Err(InferenceError::FieldName {
                    position,
                    expected: spec.name.clone(),
                    found: field.name.to_string(),
                });
            }
            if field.value.kind() != spec.kind {
                return Err(InferenceError::FieldKind {
                    name: spec.name.clone(),
                    expected: spec.kind,
                    found: field.value.kind(),
                });
            }

            row.push(match &field.value {
                FeatureValue::Numeric(v) => ResolvedValue::Numeric(*v),
                FeatureValue::Categorical(token) => {
                    // Kind check above guarantees the vocabulary exists
                    let vocabulary = self.vocabulary_for(position).ok_or_else(|| {
                        InferenceError::UnknownCategory {
                            feature: spec.name.clone(),
                            token: token.clone(),
                        }
                    })?;
                    let id = vocabulary
                        .tokens
                        .iter()
                        .position(|t| t == token)
                        .ok_or_else(|| InferenceError::UnknownCategory {
                            feature: spec.name.clone(),
                            token: token.clone(),
                        })?;
                    ResolvedValue::Category(id as u16)
                }
            });
        }

        Ok(row)
    }

    /// Trained schema, in training order.
    pub fn schema(&self) -> &[FeatureSpec] {
        &self.schema
    }

    /// Number of classes the forest scores.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Descriptive training metadata.
    pub fn info(&self) -> &ModelInfo {
        &self.info
    }

    /// Shape summary.
    pub fn stats(&self) -> ForestStats {
        ForestStats {
            trees: self.trees.len(),
            total_nodes: self.trees.iter().map(Tree::node_count).sum(),
            classes: self.num_classes,
            features: self.schema.len(),
        }
    }
}

impl Classifier for GradientForest {
    fn classify(&self, record: &FeatureRecord) -> Result<usize, InferenceError> {
        let row = self.resolve(record)?;

        let mut scores = vec![0.0f32; self.num_classes];
        for tree in &self.trees {
            for (total, score) in scores.iter_mut().zip(tree.leaf_scores(&row)) {
                *total += score;
            }
        }

        // Arg-max with ties broken to the lowest index
        let mut best = 0;
        for (class, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = class;
            }
        }

        Ok(best)
    }
}

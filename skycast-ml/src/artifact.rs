//! Artifact storage
//!
//! Two named blobs ship with a deployment: the serialized classifier and
//! the serialized label encoder. The classifier blob is bincode behind a
//! format-version prefix; the encoder blob is a small JSON document. Both
//! formats are an implementation detail of this crate - callers only see
//! `load`/`save` and [`ArtifactError`].
//!
//! Every load re-runs the structural validation of the decoded value, so a
//! truncated or hand-edited blob fails here, at startup, instead of deep
//! inside tree traversal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoder::LabelEncoder;
use crate::forest::GradientForest;

/// Format version written into classifier blobs.
///
/// Bump on any breaking change to the serialized forest layout; loaders
/// refuse blobs written with a different version.
pub const MODEL_FORMAT_VERSION: u16 = 1;

/// Default artifact file names, relative to the working directory.
const DEFAULT_MODEL_FILE: &str = "weather_model.bin";
const DEFAULT_ENCODER_FILE: &str = "label_encoder.json";

/// Environment variables overriding the artifact locations.
const MODEL_PATH_VAR: &str = "SKYCAST_MODEL_PATH";
const ENCODER_PATH_VAR: &str = "SKYCAST_ENCODER_PATH";

/// Failure to produce a usable artifact pair.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The blob could not be read from disk.
    #[error("cannot read artifact {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The blob could not be written to disk.
    #[error("cannot write artifact {path}: {source}")]
    Write {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The blob bytes do not decode as the expected format.
    #[error("cannot decode artifact {path}: {reason}")]
    Decode {
        /// Path that failed.
        path: PathBuf,
        /// Decoder's account of the failure.
        reason: String,
    },

    /// The value could not be encoded for storage.
    #[error("cannot encode artifact {path}: {reason}")]
    Encode {
        /// Path being written.
        path: PathBuf,
        /// Encoder's account of the failure.
        reason: String,
    },

    /// The blob was written with an incompatible format version.
    #[error("artifact {path} has format version {found}, expected {expected}")]
    Version {
        /// Path that failed.
        path: PathBuf,
        /// Version found in the blob.
        found: u16,
        /// Version this build reads.
        expected: u16,
    },

    /// The decoded value failed its structural validation.
    #[error("artifact {path} failed integrity checks: {reason}")]
    Invalid {
        /// Path that failed.
        path: PathBuf,
        /// Violated invariant.
        reason: String,
    },

    /// The encoder and classifier disagree on the class count.
    #[error("label encoder is fitted on {encoder_classes} classes, classifier emits {model_classes}")]
    ClassMismatch {
        /// Classes the classifier scores.
        model_classes: usize,
        /// Classes the encoder was fitted on.
        encoder_classes: usize,
    },

    /// A previous load attempt failed; the artifacts stay unavailable for
    /// the life of the process.
    #[error("artifacts unavailable: {0}")]
    Unavailable(String),
}

/// Where the two artifact blobs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Classifier blob location.
    pub model: PathBuf,
    /// Label encoder blob location.
    pub encoder: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_FILE),
            encoder: PathBuf::from(DEFAULT_ENCODER_FILE),
        }
    }
}

impl ArtifactPaths {
    /// Explicit locations for both blobs.
    pub fn new(model: impl Into<PathBuf>, encoder: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            encoder: encoder.into(),
        }
    }

    /// Locations from `SKYCAST_MODEL_PATH` / `SKYCAST_ENCODER_PATH`,
    /// falling back to the defaults per variable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model: std::env::var_os(MODEL_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.model),
            encoder: std::env::var_os(ENCODER_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.encoder),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ModelBlob {
    format_version: u16,
    forest: GradientForest,
}

#[derive(Serialize, Deserialize)]
struct EncoderBlob {
    classes: Vec<String>,
}

/// Serialize a classifier to its artifact file.
pub fn save_model(forest: &GradientForest, path: &Path) -> Result<(), ArtifactError> {
    let blob = ModelBlob {
        format_version: MODEL_FORMAT_VERSION,
        forest: forest.clone(),
    };
    let bytes = bincode::serialize(&blob).map_err(|e| ArtifactError::Encode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    fs::write(path, bytes).map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a classifier from its artifact file.
pub fn load_model(path: &Path) -> Result<GradientForest, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // The version prefix is a fixed-width little-endian u16, readable even
    // when the rest of the layout has changed.
    if bytes.len() < 2 {
        return Err(ArtifactError::Decode {
            path: path.to_path_buf(),
            reason: "blob shorter than its version prefix".to_string(),
        });
    }
    let found = u16::from_le_bytes([bytes[0], bytes[1]]);
    if found != MODEL_FORMAT_VERSION {
        return Err(ArtifactError::Version {
            path: path.to_path_buf(),
            found,
            expected: MODEL_FORMAT_VERSION,
        });
    }

    let blob: ModelBlob = bincode::deserialize(&bytes).map_err(|e| ArtifactError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    blob.forest.validate().map_err(|e| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let stats = blob.forest.stats();
    log::info!(
        "loaded classifier from {}: {} trees, {} nodes, {} classes",
        path.display(),
        stats.trees,
        stats.total_nodes,
        stats.classes,
    );

    Ok(blob.forest)
}

/// Serialize a label encoder to its artifact file.
pub fn save_encoder(encoder: &LabelEncoder, path: &Path) -> Result<(), ArtifactError> {
    let blob = EncoderBlob {
        classes: encoder.classes().to_vec(),
    };
    let bytes = serde_json::to_vec_pretty(&blob).map_err(|e| ArtifactError::Encode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    fs::write(path, bytes).map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a label encoder from its artifact file.
pub fn load_encoder(path: &Path) -> Result<LabelEncoder, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let blob: EncoderBlob = serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let encoder = LabelEncoder::new(blob.classes).map_err(|e| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    log::debug!(
        "loaded label encoder from {}: {:?}",
        path.display(),
        encoder.classes(),
    );

    Ok(encoder)
}

/// Load both artifacts and cross-check that they agree on the class count.
///
/// The encoder must have been fitted on exactly the classes the classifier
/// emits; a mismatch means the two blobs come from different training runs
/// and the pair is refused as a whole.
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<(GradientForest, LabelEncoder), ArtifactError> {
    let model = load_model(&paths.model)?;
    let encoder = load_encoder(&paths.encoder)?;

    if encoder.len() != model.num_classes() {
        return Err(ArtifactError::ClassMismatch {
            model_classes: model.num_classes(),
            encoder_classes: encoder.len(),
        });
    }

    Ok((model, encoder))
}

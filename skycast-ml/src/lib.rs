//! Pre-Trained Classifier Artifacts for Skycast
//!
//! ## Overview
//!
//! This crate owns everything that exists outside the prediction pipeline's
//! pure core: the concrete boosted-tree classifier, the fitted label
//! encoder, their on-disk artifact formats, and the load-once cache that
//! holds them for the life of the process. `skycast-core` defines the
//! `Classifier` and `LabelDecoder` seams; this crate ships the only real
//! implementations.
//!
//! ## Model shape
//!
//! The reference model is a gradient-boosted ensemble over the ten trained
//! feature columns. Each tree routes a record through numeric threshold
//! splits and categorical membership splits down to a leaf of per-class
//! scores; the forest sums leaf scores across trees and emits the arg-max
//! class index. The label encoder maps that index back to the class name it
//! was fitted on.
//!
//! Training happens elsewhere. Nothing in this crate fits, updates, or
//! otherwise mutates a model: artifacts are produced by the training job,
//! validated on load, and read-only from then on.
//!
//! ## Artifact lifecycle
//!
//! ```no_run
//! use skycast_core::{CloudCover, Location, Season, WeatherObservation};
//! use skycast_ml::{ArtifactCache, ArtifactPaths};
//!
//! let cache = ArtifactCache::new(ArtifactPaths::from_env());
//!
//! let observation = WeatherObservation {
//!     temperature: 25.0,
//!     humidity: 50,
//!     wind_speed: 10.0,
//!     precipitation: 20.0,
//!     pressure: 1013.0,
//!     uv_index: 5,
//!     visibility: 10.0,
//!     cloud_cover: CloudCover::Clear,
//!     season: Season::Summer,
//!     location: Location::Inland,
//! };
//!
//! // First call loads both blobs; every later call reuses the same pair.
//! let artifacts = cache.get().expect("artifacts must be deployed");
//! let prediction = artifacts.predict(&observation).unwrap();
//! println!("{} - {}", prediction, prediction.recommendation);
//! ```
//!
//! A failed load is final: the cache keeps answering `Unavailable` without
//! touching disk again, so a misdeployed process refuses prediction
//! requests instead of serving from a partial pair.

#![deny(unsafe_code)]

pub mod artifact;
pub mod cache;
pub mod encoder;
pub mod forest;
pub mod node;
pub mod tree;

// Public API
pub use artifact::{
    load_artifacts, load_encoder, load_model, save_encoder, save_model, ArtifactError,
    ArtifactPaths, MODEL_FORMAT_VERSION,
};
pub use cache::{ArtifactCache, CacheStats, LoadedArtifacts};
pub use encoder::{EncoderError, LabelEncoder};
pub use forest::{
    FeatureSpec, ForestStats, GradientForest, ModelInfo, ModelIntegrityError, Vocabulary,
};
pub use node::Node;
pub use tree::Tree;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

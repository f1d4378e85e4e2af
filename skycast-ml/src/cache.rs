//! Process-wide artifact cache
//!
//! Artifacts load once per process and are read-only afterwards. The cache
//! is an ordinary value rather than a process global so its lifecycle is
//! explicit and testable: construct it where the process wires its state,
//! share it by reference, inspect it with [`ArtifactCache::stats`].
//!
//! First-use discipline: the first caller of [`ArtifactCache::get`]
//! performs the load; concurrent first callers block on that same in-flight
//! load; everyone afterwards observes the same loaded pair. A failed load
//! is remembered - later calls fail fast with
//! [`ArtifactError::Unavailable`] and never touch disk again, so a process
//! that came up without its artifacts refuses every prediction request
//! instead of limping on a partial pair.

use std::sync::atomic::{AtomicU32, Ordering};

use once_cell::sync::OnceCell;

use skycast_core::{predict, PredictError, Prediction, WeatherObservation};

use crate::artifact::{self, ArtifactError, ArtifactPaths};
use crate::encoder::LabelEncoder;
use crate::forest::GradientForest;

/// The loaded, immutable artifact pair.
#[derive(Debug)]
pub struct LoadedArtifacts {
    model: GradientForest,
    encoder: LabelEncoder,
}

impl LoadedArtifacts {
    /// The loaded classifier.
    pub fn model(&self) -> &GradientForest {
        &self.model
    }

    /// The loaded label encoder.
    pub fn encoder(&self) -> &LabelEncoder {
        &self.encoder
    }

    /// Run one prediction request against the loaded pair.
    pub fn predict(&self, observation: &WeatherObservation) -> Result<Prediction, PredictError> {
        predict(observation, &self.model, &self.encoder)
    }
}

/// Load-once holder for the artifact pair.
pub struct ArtifactCache {
    paths: ArtifactPaths,
    // The load outcome, including failure: a failed load is as final as a
    // successful one for the life of the process.
    slot: OnceCell<Result<LoadedArtifacts, String>>,
    attempts: AtomicU32,
}

/// Lifecycle snapshot of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Whether a usable pair is loaded.
    pub loaded: bool,
    /// Disk load attempts performed so far (0 or 1).
    pub load_attempts: u32,
}

impl ArtifactCache {
    /// Cache reading from the given locations on first use.
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths,
            slot: OnceCell::new(),
            attempts: AtomicU32::new(0),
        }
    }

    /// Locations this cache loads from.
    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// The loaded pair, loading it on first call.
    pub fn get(&self) -> Result<&LoadedArtifacts, ArtifactError> {
        let outcome = self.slot.get_or_init(|| {
            self.attempts.fetch_add(1, Ordering::Relaxed);
            match artifact::load_artifacts(&self.paths) {
                Ok((model, encoder)) => Ok(LoadedArtifacts { model, encoder }),
                Err(e) => {
                    log::error!("artifact load failed: {e}");
                    Err(e.to_string())
                }
            }
        });

        match outcome {
            Ok(artifacts) => Ok(artifacts),
            Err(reason) => Err(ArtifactError::Unavailable(reason.clone())),
        }
    }

    /// Lifecycle snapshot.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            loaded: matches!(self.slot.get(), Some(Ok(_))),
            load_attempts: self.attempts.load(Ordering::Relaxed),
        }
    }
}

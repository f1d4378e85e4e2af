//! Skycast Basic Prediction Example
//!
//! This example walks the full artifact lifecycle on a miniature model:
//! - Author a two-tree classifier and a fitted label encoder
//! - Save both as artifact blobs, the way a training job would
//! - Load them back through the one-time cache
//! - Run prediction requests against the loaded pair
//!
//! The real deployment ships much larger artifacts, but the contract is
//! identical: the cache loads once, every request is validated, normalized,
//! classified, and decoded with no shared mutable state.

use skycast_core::{
    features::FEATURE_KINDS, CloudCover, Location, Season, WeatherObservation, FEATURE_NAMES,
};
use skycast_ml::{
    save_encoder, save_model, ArtifactCache, ArtifactPaths, FeatureSpec, GradientForest,
    LabelEncoder, ModelInfo, Node, Tree, Vocabulary,
};

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// A deliberately small ensemble: cold observations score as Snowy, wet
/// ones as Rainy, clear ones as Sunny, the rest as Cloudy.
fn author_model() -> GradientForest {
    let schema: Vec<FeatureSpec> = FEATURE_NAMES
        .iter()
        .zip(FEATURE_KINDS)
        .map(|(&name, kind)| FeatureSpec {
            name: name.to_string(),
            kind,
        })
        .collect();

    let vocabularies = vec![
        Vocabulary {
            feature: 7,
            tokens: tokens(&["overcast", "partly cloudy", "clear", "cloudy"]),
        },
        Vocabulary {
            feature: 8,
            tokens: tokens(&["Winter", "Spring", "Summer", "Autumn"]),
        },
        Vocabulary {
            feature: 9,
            tokens: tokens(&["inland", "mountain", "coastal"]),
        },
    ];

    let temperature_tree = Tree::new(vec![
        Node::Numeric {
            feature: 0,
            threshold: 0.0,
            left: 1,
            right: 2,
        },
        Node::Leaf {
            scores: vec![0.0, 0.0, 2.0, 0.0],
        },
        Node::Numeric {
            feature: 3,
            threshold: 50.0,
            left: 3,
            right: 4,
        },
        Node::Leaf {
            scores: vec![0.5, 0.0, 0.0, 0.5],
        },
        Node::Leaf {
            scores: vec![0.0, 2.0, 0.0, 0.0],
        },
    ]);

    let sky_tree = Tree::new(vec![
        Node::Categorical {
            feature: 7,
            left_categories: vec![2], // "clear"
            left: 1,
            right: 2,
        },
        Node::Leaf {
            scores: vec![0.0, 0.0, 0.0, 1.0],
        },
        Node::Leaf {
            scores: vec![1.0, 0.0, 0.0, 0.0],
        },
    ]);

    let info = ModelInfo {
        algorithm: "gradient boosting (demo)".to_string(),
        trained_accuracy: 1.0,
        per_class_accuracy: vec![],
    };

    GradientForest::new(schema, vocabularies, vec![temperature_tree, sky_tree], 4, info)
        .expect("demo model is structurally valid")
}

fn main() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = ArtifactPaths::new(
        dir.path().join("weather_model.bin"),
        dir.path().join("label_encoder.json"),
    );

    // What the training job would produce
    let model = author_model();
    let encoder = LabelEncoder::new(tokens(&["Cloudy", "Rainy", "Snowy", "Sunny"]))
        .expect("unique classes");
    save_model(&model, &paths.model).expect("save model");
    save_encoder(&encoder, &paths.encoder).expect("save encoder");
    println!("authored artifacts under {}", dir.path().display());

    // What the serving process does
    let cache = ArtifactCache::new(paths);
    let artifacts = cache.get().expect("artifacts load");
    let stats = artifacts.model().stats();
    println!(
        "loaded {}: {} trees, {} nodes, {} classes\n",
        artifacts.model().info().algorithm,
        stats.trees,
        stats.total_nodes,
        stats.classes,
    );

    let requests = [
        (
            "clear summer afternoon",
            WeatherObservation {
                temperature: 25.0,
                humidity: 50,
                wind_speed: 10.0,
                precipitation: 20.0,
                pressure: 1013.0,
                uv_index: 5,
                visibility: 10.0,
                cloud_cover: CloudCover::Clear,
                season: Season::Summer,
                location: Location::Inland,
            },
        ),
        (
            "mountain blizzard",
            WeatherObservation {
                temperature: -12.0,
                humidity: 85,
                wind_speed: 30.0,
                precipitation: 70.0,
                pressure: 990.0,
                uv_index: 0,
                visibility: 0.5,
                cloud_cover: CloudCover::Overcast,
                season: Season::Winter,
                location: Location::Mountain,
            },
        ),
        (
            "coastal downpour",
            WeatherObservation {
                temperature: 16.0,
                humidity: 90,
                wind_speed: 25.0,
                precipitation: 85.0,
                pressure: 998.0,
                uv_index: 1,
                visibility: 2.0,
                cloud_cover: CloudCover::Cloudy,
                season: Season::Autumn,
                location: Location::Coastal,
            },
        ),
    ];

    for (name, observation) in &requests {
        match artifacts.predict(observation) {
            Ok(prediction) => {
                println!("{name}: {prediction}");
                println!("  {}", prediction.recommendation);
            }
            Err(e) => println!("{name}: request failed: {e}"),
        }
    }

    // An out-of-contract observation is rejected before inference
    let mut invalid = requests[0].1.clone();
    invalid.humidity = 110;
    match artifacts.predict(&invalid) {
        Ok(_) => unreachable!("humidity 110 is outside the input contract"),
        Err(e) => println!("\nrejected as expected: {e}"),
    }
}

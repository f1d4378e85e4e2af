//! Shared fixtures for integration tests
//!
//! The reference fixture forest is small enough to verify by hand but
//! exercises every split kind: numeric thresholds, categorical membership,
//! and the season column's display-case vocabulary. Expected outcomes for
//! the scenario observations below:
//!
//! - `sunny_scenario`: warm, dry, clear sky -> Sunny (class 3)
//! - `snowy_scenario`: below freezing in winter -> Snowy (class 2)
//! - `rainy_scenario`: mild, humid, heavy precipitation -> Rainy (class 1)
//! - `cloudy_scenario`: overcast spring day -> Cloudy (class 0)

#![allow(dead_code)]

use skycast_core::{
    features::FEATURE_KINDS, CloudCover, Location, Season, WeatherObservation, FEATURE_NAMES,
};
use skycast_ml::{
    FeatureSpec, GradientForest, LabelEncoder, ModelInfo, Node, Tree, Vocabulary,
};

/// Schema column indices used by the fixture trees.
const TEMPERATURE: u16 = 0;
const HUMIDITY: u16 = 1;
const PRECIPITATION: u16 = 3;
const VISIBILITY: u16 = 6;
const CLOUD_COVER: u16 = 7;
const SEASON: u16 = 8;

/// Vocabulary ids in the fixture tables.
const CLOUD_CLEAR: u16 = 2;
const SEASON_WINTER: u16 = 0;

pub fn reference_schema() -> Vec<FeatureSpec> {
    FEATURE_NAMES
        .iter()
        .zip(FEATURE_KINDS)
        .map(|(&name, kind)| FeatureSpec {
            name: name.to_string(),
            kind,
        })
        .collect()
}

pub fn reference_vocabularies() -> Vec<Vocabulary> {
    let tokens = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
    vec![
        Vocabulary {
            feature: CLOUD_COVER,
            tokens: tokens(&["overcast", "partly cloudy", "clear", "cloudy"]),
        },
        // Season keeps its display case; the training job never folded it
        Vocabulary {
            feature: SEASON,
            tokens: tokens(&["Winter", "Spring", "Summer", "Autumn"]),
        },
        Vocabulary {
            feature: 9,
            tokens: tokens(&["inland", "mountain", "coastal"]),
        },
    ]
}

pub fn reference_info() -> ModelInfo {
    ModelInfo {
        algorithm: "CatBoost".to_string(),
        trained_accuracy: 0.915,
        per_class_accuracy: vec![
            ("Sunny".to_string(), 0.921),
            ("Rainy".to_string(), 0.918),
            ("Cloudy".to_string(), 0.909),
            ("Snowy".to_string(), 0.914),
        ],
    }
}

/// Three boosting stages over the reference schema.
pub fn reference_forest() -> GradientForest {
    let freezing_tree = Tree::new(vec![
        Node::Numeric {
            feature: TEMPERATURE,
            threshold: 0.0,
            left: 1,
            right: 2,
        },
        Node::Leaf {
            scores: vec![0.2, 0.4, 2.0, 0.1],
        },
        Node::Numeric {
            feature: PRECIPITATION,
            threshold: 50.0,
            left: 3,
            right: 4,
        },
        Node::Categorical {
            feature: CLOUD_COVER,
            left_categories: vec![CLOUD_CLEAR],
            left: 5,
            right: 6,
        },
        Node::Leaf {
            scores: vec![0.4, 2.1, 0.2, 0.1],
        },
        Node::Leaf {
            scores: vec![0.1, 0.2, 0.0, 2.2],
        },
        Node::Leaf {
            scores: vec![1.8, 0.6, 0.1, 0.3],
        },
    ]);

    let humidity_tree = Tree::new(vec![
        Node::Numeric {
            feature: HUMIDITY,
            threshold: 75.0,
            left: 1,
            right: 2,
        },
        Node::Leaf {
            scores: vec![0.1, 0.1, 0.1, 0.4],
        },
        Node::Numeric {
            feature: TEMPERATURE,
            threshold: 0.0,
            left: 3,
            right: 4,
        },
        Node::Leaf {
            scores: vec![0.0, 0.3, 0.9, 0.0],
        },
        Node::Leaf {
            scores: vec![0.2, 0.8, 0.1, 0.0],
        },
    ]);

    let season_tree = Tree::new(vec![
        Node::Categorical {
            feature: SEASON,
            left_categories: vec![SEASON_WINTER],
            left: 1,
            right: 2,
        },
        Node::Leaf {
            scores: vec![0.1, 0.2, 0.7, 0.1],
        },
        Node::Numeric {
            feature: VISIBILITY,
            threshold: 5.0,
            left: 3,
            right: 4,
        },
        Node::Leaf {
            scores: vec![0.9, 0.5, 0.1, 0.0],
        },
        Node::Leaf {
            scores: vec![0.3, 0.2, 0.0, 0.6],
        },
    ]);

    GradientForest::new(
        reference_schema(),
        reference_vocabularies(),
        vec![freezing_tree, humidity_tree, season_tree],
        4,
        reference_info(),
    )
    .expect("reference fixture must be structurally valid")
}

/// Encoder order matches the training job's sorted class names.
pub fn reference_encoder() -> LabelEncoder {
    LabelEncoder::new(
        ["Cloudy", "Rainy", "Snowy", "Sunny"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
    .expect("reference classes are unique")
}

pub fn sunny_scenario() -> WeatherObservation {
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
    }
}

pub fn snowy_scenario() -> WeatherObservation {
    WeatherObservation {
        temperature: -10.0,
        humidity: 80,
        wind_speed: 15.0,
        precipitation: 60.0,
        pressure: 1005.0,
        uv_index: 1,
        visibility: 1.0,
        cloud_cover: CloudCover::Overcast,
        season: Season::Winter,
        location: Location::Mountain,
    }
}

pub fn rainy_scenario() -> WeatherObservation {
    WeatherObservation {
        temperature: 15.0,
        humidity: 85,
        wind_speed: 20.0,
        precipitation: 80.0,
        pressure: 995.0,
        uv_index: 2,
        visibility: 3.0,
        cloud_cover: CloudCover::Cloudy,
        season: Season::Autumn,
        location: Location::Coastal,
    }
}

pub fn cloudy_scenario() -> WeatherObservation {
    WeatherObservation {
        temperature: 10.0,
        humidity: 60,
        wind_speed: 12.0,
        precipitation: 30.0,
        pressure: 1010.0,
        uv_index: 3,
        visibility: 8.0,
        cloud_cover: CloudCover::Overcast,
        season: Season::Spring,
        location: Location::Inland,
    }
}

//! Artifact round-trip and failure-path tests

mod common;

use std::fs;

use tempfile::tempdir;

use skycast_ml::{
    load_artifacts, load_encoder, load_model, save_encoder, save_model, ArtifactError,
    ArtifactPaths, LabelEncoder, MODEL_FORMAT_VERSION,
};

#[test]
fn model_round_trips_through_its_blob() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weather_model.bin");
    let forest = common::reference_forest();

    save_model(&forest, &path).unwrap();
    let loaded = load_model(&path).unwrap();

    assert_eq!(loaded, forest);
    assert_eq!(loaded.stats(), forest.stats());
    assert_eq!(loaded.schema().len(), 10);
    assert_eq!(loaded.info().algorithm, "CatBoost");
}

#[test]
fn encoder_round_trips_through_its_blob() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("label_encoder.json");
    let encoder = common::reference_encoder();

    save_encoder(&encoder, &path).unwrap();
    let loaded = load_encoder(&path).unwrap();

    assert_eq!(loaded, encoder);
}

#[test]
fn missing_model_path_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.bin");

    let err = load_model(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }), "got {err:?}");
}

#[test]
fn missing_encoder_path_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_encoder(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }), "got {err:?}");
}

#[test]
fn truncated_model_blob_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weather_model.bin");
    save_model(&common::reference_forest(), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let err = load_model(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Decode { .. }), "got {err:?}");
}

#[test]
fn wrong_format_version_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weather_model.bin");
    save_model(&common::reference_forest(), &path).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    let stale = (MODEL_FORMAT_VERSION + 1).to_le_bytes();
    bytes[0] = stale[0];
    bytes[1] = stale[1];
    fs::write(&path, bytes).unwrap();

    let err = load_model(&path).unwrap_err();
    match err {
        ArtifactError::Version { found, expected, .. } => {
            assert_eq!(found, MODEL_FORMAT_VERSION + 1);
            assert_eq!(expected, MODEL_FORMAT_VERSION);
        }
        other => panic!("expected version error, got {other:?}"),
    }
}

#[test]
fn malformed_encoder_json_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("label_encoder.json");
    fs::write(&path, b"{\"classes\": \"not a list\"}").unwrap();

    let err = load_encoder(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Decode { .. }), "got {err:?}");
}

#[test]
fn encoder_with_duplicate_classes_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("label_encoder.json");
    fs::write(&path, b"{\"classes\": [\"Rainy\", \"Rainy\"]}").unwrap();

    let err = load_encoder(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Invalid { .. }), "got {err:?}");
}

#[test]
fn artifact_pair_from_different_trainings_is_refused() {
    let dir = tempdir().unwrap();
    let paths = ArtifactPaths::new(
        dir.path().join("weather_model.bin"),
        dir.path().join("label_encoder.json"),
    );

    save_model(&common::reference_forest(), &paths.model).unwrap();
    let three_classes =
        LabelEncoder::new(vec!["A".to_string(), "B".to_string(), "C".to_string()]).unwrap();
    save_encoder(&three_classes, &paths.encoder).unwrap();

    let err = load_artifacts(&paths).unwrap_err();
    match err {
        ArtifactError::ClassMismatch {
            model_classes,
            encoder_classes,
        } => {
            assert_eq!(model_classes, 4);
            assert_eq!(encoder_classes, 3);
        }
        other => panic!("expected class mismatch, got {other:?}"),
    }
}

#[test]
fn loading_a_valid_pair_succeeds() {
    let dir = tempdir().unwrap();
    let paths = ArtifactPaths::new(
        dir.path().join("weather_model.bin"),
        dir.path().join("label_encoder.json"),
    );

    save_model(&common::reference_forest(), &paths.model).unwrap();
    save_encoder(&common::reference_encoder(), &paths.encoder).unwrap();

    let (model, encoder) = load_artifacts(&paths).unwrap();
    assert_eq!(model.num_classes(), encoder.len());
}

use oncoforge_core::config::{decay_for_tumor, SearchConfig, TrajectoryConfig};
use std::fs::File;
use std::io::Write;

#[test]
fn test_trajectory_config_roundtrip_through_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("params.json");

    let cfg = TrajectoryConfig::builder()
        .days(30)
        .decay(0.0077)
        .seed("patient-7")
        .threshold(0.25)
        .build();

    let mut file = File::create(&path).expect("create params file");
    write!(file, "{}", serde_json::to_string(&cfg).expect("serialize")).expect("write");

    let loaded = TrajectoryConfig::load_from_file(&path).expect("load");
    assert_eq!(loaded.days, 30);
    assert_eq!(loaded.dt, 1.0);
    assert_eq!(loaded.decay, 0.0077);
    assert_eq!(loaded.seed, "patient-7");
    assert_eq!(loaded.threshold, 0.25);
}

#[test]
fn test_partial_config_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("partial.json");

    let mut file = File::create(&path).expect("create params file");
    write!(file, "{{\"iterations\": 7}}").expect("write");

    let loaded = SearchConfig::load_from_file(&path).expect("load");
    assert_eq!(loaded.iterations, 7);
    assert_eq!(loaded.mutation_threshold, 0.02);
    assert!(loaded.context.is_none());
    assert!(loaded.seed.is_none());
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");

    let mut file = File::create(&path).expect("create params file");
    write!(file, "not json").expect("write");

    assert!(TrajectoryConfig::load_from_file(&path).is_err());
    assert!(TrajectoryConfig::load_from_file(dir.path().join("missing.json")).is_err());
}

#[test]
fn test_tumor_decay_table() {
    assert_eq!(decay_for_tumor("prostata", 1, 0.0), 0.00385);
    assert_eq!(decay_for_tumor("prostata", 4, 0.0), 0.00770);
    assert_eq!(decay_for_tumor("Mama", 2, 0.0), 0.00580);
    assert_eq!(decay_for_tumor("pancreas", 3, 0.0), 0.01540);
    assert_eq!(decay_for_tumor("unknown", 9, 0.0), 0.01540);
}

#[test]
fn test_tumor_decay_severity_formula() {
    // Stage 1 maps to severity 0: the base rate passes through.
    assert_eq!(decay_for_tumor("pancreas", 1, 2.0), 0.01540);

    // Stage 4 maps to severity 1: rate divided by (1 + alpha).
    let adjusted = decay_for_tumor("pancreas", 4, 2.0);
    assert!((adjusted - 0.01540 / 3.0).abs() < 1e-12);

    // Higher severity never increases the rate.
    for stage in 1..=4u8 {
        assert!(decay_for_tumor("prostata", stage, 1.5) <= 0.01540);
    }
}

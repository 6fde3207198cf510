use anyhow::Result;
use dropdown_options::core::generator::round_to_places;
use dropdown_options::{
    LocalStorage, OutputWriter, RangeSpec, ResolvedConfig, SequenceEngine, SequenceError,
};
use tempfile::TempDir;

fn engine_in(dir: &TempDir, range: RangeSpec) -> SequenceEngine<LocalStorage, ResolvedConfig> {
    let config = ResolvedConfig {
        range,
        output_path: "dropdownOptions.json".to_string(),
    };
    SequenceEngine::new(LocalStorage::new(dir.path()), config)
}

#[test]
fn test_default_run_writes_201_options() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = engine_in(&temp_dir, RangeSpec::default());

    let mut console = Vec::new();
    let summary = engine.run_with_console(&mut console)?;

    assert_eq!(summary.count, 201);
    assert_eq!(summary.first, Some(0.0));
    assert_eq!(summary.last, Some(1.0));

    let content = std::fs::read_to_string(temp_dir.path().join("dropdownOptions.json"))?;
    assert!(content.starts_with("[0.0, 0.005, 0.01, 0.015, 0.02, "));
    assert!(content.ends_with(", 0.99, 0.995, 1.0]"));
    assert_eq!(String::from_utf8(console)?.trim_end(), content);

    Ok(())
}

#[test]
fn test_written_values_match_formula() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let range = RangeSpec::new(0.1, 2.0, 0.015);
    let engine = engine_in(&temp_dir, range);
    engine.run_with_console(&mut std::io::sink())?;

    let sequence = engine.writer().read("dropdownOptions.json")?;
    assert_eq!(sequence.len(), range.element_count());
    for (i, value) in sequence.iter().enumerate() {
        let expected = round_to_places(range.lower + i as f64 * range.step, 3);
        assert!((value - expected).abs() < 1e-9, "index {i}: {value} != {expected}");
    }
    assert!(sequence.values().windows(2).all(|w| w[0] <= w[1]));

    Ok(())
}

#[test]
fn test_repeated_runs_are_byte_identical() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dropdownOptions.json");
    let engine = engine_in(&temp_dir, RangeSpec::default());

    engine.run_with_console(&mut std::io::sink())?;
    let first = std::fs::read(&path)?;
    engine.run_with_console(&mut std::io::sink())?;
    let second = std::fs::read(&path)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_round_trip_through_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let writer = OutputWriter::new(LocalStorage::new(temp_dir.path()));
    let sequence = RangeSpec::default().generate();

    writer.write(&sequence, "options.json")?;
    let parsed = writer.read("options.json")?;

    assert_eq!(parsed.len(), sequence.len());
    for (a, b) in parsed.iter().zip(sequence.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn test_run_overwrites_stale_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dropdownOptions.json");
    std::fs::write(&path, "stale content that is much longer than the new output")?;

    let engine = engine_in(&temp_dir, RangeSpec::new(0.0, 1.0, 0.5));
    engine.run_with_console(&mut std::io::sink())?;

    assert_eq!(std::fs::read_to_string(&path)?, "[0.0, 0.5, 1.0]");
    Ok(())
}

#[test]
fn test_unwritable_path_surfaces_write_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = ResolvedConfig {
        range: RangeSpec::default(),
        output_path: "no/such/dir/dropdownOptions.json".to_string(),
    };
    let engine = SequenceEngine::new(LocalStorage::new(temp_dir.path()), config);

    let err = engine.run_with_console(&mut std::io::sink()).unwrap_err();
    assert!(matches!(err, SequenceError::WriteError { .. }));
    assert!(err.to_string().contains("dropdownOptions.json"));
    Ok(())
}

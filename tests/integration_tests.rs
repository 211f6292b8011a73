use anyhow::Result;
use letter_count::{
    count_letters, CountEngine, CountError, CountPipeline, LocalStorage, OutputFormat, SortOrder,
    TomlConfig,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn config_with(input: &str, output: &str) -> Result<TomlConfig> {
    Ok(TomlConfig::from_toml_str(&format!("{}\n{}", input, output))?)
}

#[tokio::test]
async fn test_end_to_end_sample_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_with("", "[output]\npath = \"result.txt\"\n")?;

    let storage = LocalStorage::new(temp_dir.path());
    let engine = CountEngine::new(CountPipeline::new(storage, config));
    let outcome = engine.run().await?;

    assert_eq!(outcome.destination, "result.txt");
    assert_eq!(outcome.report.source, "sample");
    assert_eq!(outcome.report.counts, count_letters("Hello, World!"));

    let written = std::fs::read_to_string(temp_dir.path().join("result.txt"))?;
    assert_eq!(
        written,
        "{'h': 1, 'e': 1, 'l': 3, 'o': 2, 'w': 1, 'r': 1, 'd': 1}\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_file_input_json_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("poem.txt"),
        "Roses are red,\nViolets are blue.\n",
    )?;

    let config = config_with(
        "[input]\nfile = \"poem.txt\"\n",
        "[output]\nformat = \"json\"\nsort = \"alphabetical\"\npath = \"out/counts.json\"\n",
    )?;
    assert_eq!(config.output.format, Some(OutputFormat::Json));
    assert_eq!(config.output.sort, Some(SortOrder::Alphabetical));

    let storage = LocalStorage::new(temp_dir.path());
    let outcome = CountEngine::new(CountPipeline::new(storage, config))
        .run()
        .await?;

    assert_eq!(outcome.report.source, "poem.txt");
    assert_eq!(outcome.report.total_letters, 25);

    let json = std::fs::read_to_string(temp_dir.path().join("out/counts.json"))?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["source"], "poem.txt");
    assert_eq!(value["total_letters"], 25);
    assert_eq!(value["counts"]["e"], 6);
    assert_eq!(value["counts"]["r"], 4);
    assert_eq!(value["counts"]["v"], 1);

    let keys: Vec<&String> = value["counts"]
        .as_object()
        .expect("counts should be an object")
        .keys()
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_inline_csv_by_frequency() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_with(
        "[input]\ntext = \"Mississippi 1999!\"\n",
        "[output]\nformat = \"csv\"\nsort = \"frequency\"\npath = \"m.csv\"\n",
    )?;

    let storage = LocalStorage::new(temp_dir.path());
    CountEngine::new(CountPipeline::new(storage, config))
        .run()
        .await?;

    let csv = std::fs::read_to_string(temp_dir.path().join("m.csv"))?;
    assert_eq!(csv, "letter,count\ni,4\ns,4\np,2\nm,1\n");
    Ok(())
}

#[tokio::test]
async fn test_letterless_input_yields_empty_result() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_with(
        "[input]\ntext = \"12345 !@#$%\"\n",
        "[output]\nformat = \"tsv\"\npath = \"empty.tsv\"\n",
    )?;

    let storage = LocalStorage::new(temp_dir.path());
    let outcome = CountEngine::new(CountPipeline::new(storage, config))
        .run()
        .await?;

    assert!(outcome.report.counts.is_empty());
    assert_eq!(outcome.report.total_letters, 0);
    let tsv = std::fs::read_to_string(temp_dir.path().join("empty.tsv"))?;
    assert_eq!(tsv, "letter\tcount\n");
    Ok(())
}

#[tokio::test]
async fn test_non_utf8_file_is_invalid_argument() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("latin1.txt"), [b'c', b'a', b'f', 0xe9])?;

    let config = config_with(
        "[input]\nfile = \"latin1.txt\"\n",
        "[output]\npath = \"never.txt\"\n",
    )?;

    let storage = LocalStorage::new(temp_dir.path());
    let err = CountEngine::new(CountPipeline::new(storage, config))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, CountError::InvalidArgument { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!temp_dir.path().join("never.txt").exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_input_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_with("[input]\nfile = \"nope.txt\"\n", "")?;

    let storage = LocalStorage::new(temp_dir.path());
    let err = CountEngine::new(CountPipeline::new(storage, config))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, CountError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
    Ok(())
}

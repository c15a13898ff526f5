use std::path::Path;

use crate::{
    ArcPath, ArcStr,
    app::config::{Config, Data, PathOpt, StrOpt, USizeOpt},
    log::LogLevel,
};
use anyhow::Result;

#[tokio::test]
async fn test_mock_config_creation() {
    let config = Config::mock(Data::default());
    assert!(matches!(config, Config::Mock(_)));
}

#[tokio::test]
async fn test_actual_config_creation() {
    let config = Config::spawn(ArcPath::from(Path::new("test_config.toml")));
    assert!(matches!(config, Config::Actual(_)));
}

#[tokio::test]
async fn test_mock_operations() -> Result<()> {
    let config = Config::mock(Data::default());

    let new_path = ArcPath::from(Path::new("/custom/path"));
    config.set_path(PathOpt::LogDir, new_path.clone()).await?;
    assert_eq!(config.path(PathOpt::LogDir).await?, new_path);

    assert_eq!(config.log_level().await?, LogLevel::Warning);
    config.set_log_level(LogLevel::Info).await?;
    assert_eq!(config.log_level().await?, LogLevel::Info);

    config.set_usize(USizeOpt::Timeout, 5).await?;
    assert_eq!(config.usize(USizeOpt::Timeout).await?, 5);

    config.set_str(StrOpt::UserAgent, ArcStr::from("tests")).await?;
    assert_eq!(&*config.str(StrOpt::UserAgent).await?, "tests");

    config.load().await?;
    config.save().await?;
    Ok(())
}

#[tokio::test]
async fn test_load_missing_file_keeps_defaults() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = ArcPath::from(temp_dir.path().join("missing.toml"));
    let config = Config::spawn(path);

    assert!(config.load().await.is_err());
    assert_eq!(config.usize(USizeOpt::Timeout).await?, 30);
    Ok(())
}

#[tokio::test]
async fn test_save_and_load_roundtrip() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = ArcPath::from(temp_dir.path().join("nested").join("config.toml"));

    let config = Config::spawn(path.clone());
    config.set_usize(USizeOpt::MaxAge, 7).await?;
    config
        .set_str(StrOpt::FeedUrl, ArcStr::from("http://localhost:8080/feed"))
        .await?;
    config.save().await?;
    assert!(path.exists());

    let reloaded = Config::spawn(path);
    reloaded.load().await?;
    assert_eq!(reloaded.usize(USizeOpt::MaxAge).await?, 7);
    assert_eq!(
        &*reloaded.str(StrOpt::FeedUrl).await?,
        "http://localhost:8080/feed"
    );
    Ok(())
}

#[tokio::test]
async fn test_load_invalid_file_is_an_error() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("config.toml");
    tokio::fs::write(&path, "timeout = \"not a number\"").await?;

    let config = Config::spawn(ArcPath::from(path));
    assert!(config.load().await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_load_or_init_creates_missing_file() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = ArcPath::from(temp_dir.path().join("pixfeed").join("config.toml"));

    let config = Config::spawn(path.clone());
    config.load_or_init().await?;
    assert!(path.exists());

    let written: Data = toml::from_str(&tokio::fs::read_to_string(&path).await?)?;
    assert_eq!(written.usize(USizeOpt::Timeout), 30);
    Ok(())
}

#[tokio::test]
async fn test_load_or_init_keeps_malformed_file() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("config.toml");
    let contents = "feed_url = \"https://my/feed\"\ntimeout = 5\nlog_level = \"eror\"\n";
    tokio::fs::write(&path, contents).await?;

    let config = Config::spawn(ArcPath::from(path.as_path()));
    let err = config.load_or_init().await.unwrap_err();
    assert!(format!("{err:#}").contains("Parsing config file"));

    assert_eq!(tokio::fs::read_to_string(&path).await?, contents);
    Ok(())
}

#[tokio::test]
async fn test_load_or_init_reads_existing_file() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("config.toml");
    tokio::fs::write(&path, "feed_url = \"https://my/feed\"\ntimeout = 5\n").await?;

    let config = Config::spawn(ArcPath::from(path.as_path()));
    config.load_or_init().await?;
    assert_eq!(&*config.str(StrOpt::FeedUrl).await?, "https://my/feed");
    assert_eq!(config.usize(USizeOpt::Timeout).await?, 5);
    Ok(())
}

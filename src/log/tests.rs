use super::*;

#[tokio::test]
async fn test_mock_records_messages_in_order() {
    let log = Log::mock();
    log.info("test", "first");
    log.warn("test", "second");
    log.error("net", "third");

    let messages = log.get_messages().await.unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].level, LogLevel::Info);
    assert_eq!(messages[1].message, "second");
    assert_eq!(messages[2].scope, "net");
}

#[tokio::test]
async fn test_log_on_error_passthrough() {
    let log = Log::mock();
    let ok: Result<u32, &str> = Ok(42);
    let err: Result<u32, &str> = Err("fail");

    assert_eq!(log.info_on_error("test", ok), Ok(42));
    assert_eq!(log.warn_on_error("test", err), Err("fail"));
    assert_eq!(log.error_on_error("test", err), Err("fail"));

    let messages = log.get_messages().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].level, LogLevel::Warning);
    assert_eq!(messages[1].level, LogLevel::Error);
}

#[tokio::test]
async fn test_actual_logger_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = ArcPath::from(dir.path());
    let log = Log::spawn(LogLevel::Error, 0, log_dir).await.unwrap();
    assert!(log.get_messages().await.is_none());

    log.info("test", "hello from the actor");
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    log.flush().await.unwrap();

    let latest = tokio::fs::read_to_string(dir.path().join("latest.log"))
        .await
        .unwrap();
    assert!(latest.contains("hello from the actor"));
}

#[tokio::test]
async fn test_flush_waits_for_the_actor() {
    let dir = tempfile::tempdir().unwrap();
    let log = Log::spawn(LogLevel::Info, 0, ArcPath::from(dir.path()))
        .await
        .unwrap();
    let Log::Actual(sender) = log.clone() else {
        panic!("expected a real logger");
    };

    log.error("test", "printed on flush");
    log.clone().flush().await.unwrap();
    assert!(sender.is_closed());

    // A second flush finds the actor gone and still completes
    log.flush().await.unwrap();
}

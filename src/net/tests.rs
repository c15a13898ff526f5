use std::collections::HashMap;

use super::*;
use crate::app::config::{Data, USizeOpt};

#[tokio::test]
async fn test_mock_get_known_url() {
    let responses = HashMap::from([(ArcStr::from("http://feed/1"), ArcStr::from("{}"))]);
    let net = Net::mock(responses);

    let body = net.get(ArcStr::from("http://feed/1"), None).await.unwrap();
    assert_eq!(&*body, "{}");

    let Net::Mock(mock) = &net else {
        panic!("expected a mock");
    };
    assert_eq!(mock.requests().await, vec![ArcStr::from("http://feed/1")]);
}

#[tokio::test]
async fn test_mock_get_unknown_url_fails() {
    let net = Net::mock(HashMap::new());
    let err = net.get(ArcStr::from("http://feed/2"), None).await.unwrap_err();
    assert!(err.to_string().contains("http://feed/2"));
}

#[tokio::test]
async fn test_actual_get_unreachable_host_fails() {
    let config = Config::mock(Data::default());
    let log = Log::mock();
    let net = Net::spawn(config, log.clone()).await.unwrap();

    let result = net.get(ArcStr::from("http://127.0.0.1:9/nothing"), None).await;
    assert!(result.is_err());

    let messages = log.get_messages().await.unwrap();
    assert!(messages.iter().any(|m| m.scope == "net"));
}

#[test]
fn test_zero_timeout_means_unbounded() {
    use std::time::Duration;

    assert_eq!(super::core::request_timeout(0), None);
    assert_eq!(
        super::core::request_timeout(30),
        Some(Duration::from_secs(30))
    );
}

#[tokio::test]
async fn test_spawn_without_timeout() {
    let config = Config::mock(Data::default());
    config.set_usize(USizeOpt::Timeout, 0).await.unwrap();

    let net = Net::spawn(config, Log::mock()).await.unwrap();
    assert!(matches!(net, Net::Actual(_)));
}

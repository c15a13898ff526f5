use std::collections::HashMap;

use super::*;
use crate::app::list::ListShow;

const FEED_URL: &str = "https://app-api.example/v1/illust/recommended";
const NEXT_URL: &str = "https://app-api.example/v1/illust/recommended?offset=30";

fn illust_json(id: u64, visible: bool) -> String {
    format!(
        r#"{{
            "id": {id},
            "title": "work {id}",
            "type": "manga",
            "caption": "",
            "user": {{ "id": 7, "name": "artist", "account": "artist_7", "is_followed": false }},
            "tags": [{{ "name": "風景", "translated_name": "scenery" }}],
            "image_urls": {{ "square_medium": "https://i.example/{id}_sq.jpg" }},
            "create_date": "2024-05-01T12:30:00+09:00",
            "page_count": 3,
            "total_bookmarks": 120,
            "total_view": 4000,
            "is_bookmarked": false,
            "visible": {visible},
            "sanity_level": 2
        }}"#
    )
}

fn page_json(ids: &[u64], next: Option<&str>) -> String {
    let illusts: Vec<String> = ids.iter().map(|id| illust_json(*id, true)).collect();
    let next = next.map_or("null".to_string(), |n| format!("\"{n}\""));
    format!(r#"{{ "illusts": [{}], "next_url": {next} }}"#, illusts.join(","))
}

#[test]
fn test_parse_page() {
    let page = parse::parse_illust_page(&page_json(&[1, 2], Some(NEXT_URL))).unwrap();

    assert_eq!(page.illusts.len(), 2);
    assert_eq!(page.next_page_url(), Some(NEXT_URL));

    let first = &page.display_list()[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.kind, IllustKind::Manga);
    assert_eq!(&*first.user.account, "artist_7");
    assert_eq!(first.tags[0].translated_name.as_deref(), Some("scenery"));
    assert_eq!(first.page_count, 3);
    assert!(first.image_urls.large.is_none());
    assert_eq!(first.create_date.to_rfc3339(), "2024-05-01T12:30:00+09:00");
}

#[test]
fn test_parse_last_page() {
    let page = parse::parse_illust_page(r#"{ "illusts": [] }"#).unwrap();
    assert!(page.illusts.is_empty());
    assert_eq!(page.next_page_url(), None);
}

#[test]
fn test_parse_defaults_for_missing_fields() {
    let body = r#"{
        "illusts": [{
            "id": 9,
            "title": "minimal",
            "user": { "id": 1, "name": "a", "account": "a" },
            "create_date": "2024-01-01T00:00:00+00:00"
        }],
        "next_url": null
    }"#;
    let page = parse::parse_illust_page(body).unwrap();
    let illust = &page.illusts[0];

    assert_eq!(illust.kind, IllustKind::Illust);
    assert_eq!(illust.page_count, 1);
    assert!(illust.visible);
    assert!(illust.tags.is_empty());
}

#[test]
fn test_parse_server_error() {
    let body = r#"{ "error": { "user_message": "", "message": "Rate Limit", "reason": "" } }"#;
    let err = parse::parse_illust_page(body).unwrap_err();

    assert!(matches!(&err, ParseError::Api { message } if message == "Rate Limit"));
}

#[test]
fn test_parse_malformed_body() {
    assert!(matches!(
        parse::parse_illust_page("<html>502 Bad Gateway</html>"),
        Err(ParseError::Json(_))
    ));
    assert!(matches!(
        parse::parse_illust_page(r#"{ "next_url": null }"#),
        Err(ParseError::Json(_))
    ));
}

fn api_over(responses: &[(&str, String)]) -> (IllustApi, Net) {
    let responses = responses
        .iter()
        .map(|(url, body)| (ArcStr::from(*url), ArcStr::from(body.as_str())))
        .collect::<HashMap<_, _>>();
    let net = Net::mock(responses);
    let api = IllustApi::spawn(net.clone(), Log::mock(), ArcStr::from(FEED_URL));
    (api, net)
}

#[tokio::test]
async fn test_first_page_uses_feed_url_and_next_uses_cursor() {
    let (api, net) = api_over(&[
        (FEED_URL, page_json(&[1, 2], Some(NEXT_URL))),
        (NEXT_URL, page_json(&[3], None)),
    ]);

    let first = api.get_page(None).await.unwrap();
    let second = api.get_page(first.next_url.clone()).await.unwrap();

    assert_eq!(second.illusts[0].id, 3);
    assert_eq!(second.next_url, None);

    let Net::Mock(mock) = net else {
        panic!("expected a mock");
    };
    assert_eq!(
        mock.requests().await,
        vec![ArcStr::from(FEED_URL), ArcStr::from(NEXT_URL)]
    );
}

#[tokio::test]
async fn test_parse_failure_carries_url() {
    let (api, _) = api_over(&[(FEED_URL, "not json".to_string())]);

    let err = api.get_page(None).await.unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Parsing feed page"));
    assert!(chain.contains(FEED_URL));
    assert!(err.downcast_ref::<ParseError>().is_some());
}

#[tokio::test]
async fn test_mock_pages_by_cursor() {
    let first = parse::parse_illust_page(&page_json(&[1], Some(NEXT_URL))).unwrap();
    let api = IllustApi::mock(HashMap::from([(None, first.clone())]));

    assert_eq!(api.get_page(None).await.unwrap(), first);
    assert!(api.get_page(Some(ArcStr::from(NEXT_URL))).await.is_err());
}

#[tokio::test]
async fn test_feed_as_paged_list_of_cards() {
    use crate::app::{PagedList, illust_cards, list::RefreshState};

    let first = format!(
        r#"{{ "illusts": [{}, {}], "next_url": "{NEXT_URL}" }}"#,
        illust_json(1, true),
        illust_json(2, false)
    );
    let (api, _) = api_over(&[(FEED_URL, first), (NEXT_URL, page_json(&[3], None))]);

    let list = PagedList::spawn(api, illust_cards, Log::mock());
    assert!(matches!(
        list.wait_settled().await.unwrap(),
        RefreshState::Loaded { has_next: true }
    ));
    // The hidden work has no card
    assert_eq!(list.items().iter().map(|c| c.id).collect::<Vec<_>>(), [1]);

    list.load_more().await.unwrap();
    assert!(matches!(list.state(), RefreshState::Loaded { has_next: false }));
    assert_eq!(list.items().iter().map(|c| c.id).collect::<Vec<_>>(), [1, 3]);
    assert_eq!(list.items()[1].badge.as_deref(), Some("manga 3P"));
}

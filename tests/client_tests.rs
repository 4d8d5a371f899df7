//! Integration tests for scryfall-rs.
//!
//! Every test runs against a local `wiremock` server, so no network access
//! is needed.
//!
//! Run with: cargo test --test client_tests
//!
//! Set `RUST_LOG=scryfall_rs=debug` to see request logging.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scryfall_rs::api::{NameMatch, SearchOptions};
use scryfall_rs::client::{BoxFuture, RateLimiter};
use scryfall_rs::models::{CardIdentifier, CatalogKind, Lang, RulingSource, SortOrder};
use scryfall_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Base configuration pointing at the mock server, without pacing.
fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_base_uri(server.uri())
        .with_user_agent("scryfall-rs-tests/1.0")
        .disable_rate_limit()
}

fn create_client(server: &MockServer) -> ScryfallClient {
    init_logging();
    config(server).build().expect("client should build")
}

#[derive(Debug, Deserialize)]
struct Record {
    id: String,
}

fn card_json(name: &str, set: &str, number: &str) -> Value {
    json!({
        "object": "card",
        "id": format!("{}-{}", set, number),
        "lang": "en",
        "uri": format!("https://api.scryfall.com/cards/{}/{}", set, number),
        "scryfall_uri": format!("https://scryfall.com/card/{}/{}", set, number),
        "prints_search_uri": "https://api.scryfall.com/cards/search?q=prints",
        "rulings_uri": "https://api.scryfall.com/cards/rulings",
        "layout": "normal",
        "name": name,
        "legalities": {"modern": "legal"},
        "set": set,
        "set_name": "Test Set",
        "set_id": "set-id",
        "set_uri": "https://api.scryfall.com/sets/set-id",
        "set_search_uri": "https://api.scryfall.com/cards/search?q=e%3Aset",
        "scryfall_set_uri": "https://scryfall.com/sets/set",
        "collector_number": number,
        "rarity": "common",
        "released_at": "2017-09-29",
        "prices": {"usd": "0.10"}
    })
}

fn error_json(status: u16, code: &str, details: &str) -> Value {
    json!({
        "object": "error",
        "status": status,
        "code": code,
        "details": details
    })
}

// =============================================================================
// Request Pipeline Tests
// =============================================================================

mod pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_get_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let record: Record = client.get("cards/abc").await.unwrap();
        assert_eq!(record.id, "abc");
    }

    #[tokio::test]
    async fn test_standard_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/random"))
            .and(header("user-agent", "scryfall-rs-tests/1.0"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(card_json("Opt", "xln", "65")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        client.cards().random().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
        assert!(requests[0].headers.get("content-type").is_none());
    }

    #[tokio::test]
    async fn test_client_secret_sent_as_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        init_logging();
        let client = config(&server).with_client_secret("s3cret").build().unwrap();
        let record: Record = client.get("cards/abc").await.unwrap();
        assert_eq!(record.id, "abc");
    }

    #[tokio::test]
    async fn test_grant_secret_sent_as_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .and(header("authorization", "Bearer granted"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        init_logging();
        let client = config(&server).with_grant_secret("granted").build().unwrap();
        let _: Record = client.get("cards/abc").await.unwrap();
    }

    #[tokio::test]
    async fn test_both_secrets_rejected_before_any_request() {
        let server = MockServer::start().await;

        let err = config(&server)
            .with_client_secret("a")
            .with_grant_secret("b")
            .build()
            .unwrap_err();

        assert!(err.is_config_error());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(error_json(404, "not_found", "No card found with the given ID.")),
            )
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.cards().get("missing").await.unwrap_err();

        let api = err.api_error().expect("should be an API error");
        assert_eq!(api.status, 404);
        assert_eq!(api.code, "not_found");
        assert_eq!(api.details, "No card found with the given ID.");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_error_with_type_and_warnings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/search"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "object": "error",
                "status": 400,
                "code": "bad_request",
                "type": "ambiguous",
                "details": "All of your terms were ignored.",
                "warnings": ["Invalid expression \"is:wrong\" was ignored."]
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client
            .cards()
            .search("is:wrong", &SearchOptions::new())
            .await
            .unwrap_err();

        let api = err.api_error().unwrap();
        assert_eq!(api.error_type.as_deref(), Some("ambiguous"));
        assert_eq!(api.warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/random"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.cards().random().await.unwrap_err();

        assert!(err.is_decoding_error());
        assert!(matches!(err, Error::MalformedErrorBody { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.get::<Record>("cards/abc").await.unwrap_err();
        assert!(matches!(err, Error::MalformedErrorBody { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_invalid_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "no id"})))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.get::<Record>("cards/abc").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_list_envelope_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "has_more": false,
                "data": [{"id": "first"}, {"id": "second"}]
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let records: Vec<Record> = client.list_get("things").await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "first");
        assert_eq!(records[1].id, "second");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        init_logging();
        let client = ClientConfig::default()
            .with_base_uri("http://127.0.0.1:1")
            .disable_rate_limit()
            .build()
            .unwrap();

        let err = client.cards().random().await.unwrap_err();
        assert!(err.is_transport_error());
        assert!(matches!(err, Error::Http(_)));
    }
}

// =============================================================================
// Cancellation and Rate Limit Tests
// =============================================================================

mod control_tests {
    use super::*;

    #[tokio::test]
    async fn test_cancel_while_waiting_for_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "abc"}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = create_client(&server);
        let handle = CancellationHandle::new();
        let scoped = client.with_context(RequestContext::new().with_cancellation(&handle));

        let canceller = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let started = Instant::now();
        let result = scoped.get::<Record>("cards/abc").await;

        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_already_cancelled_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(0)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let handle = CancellationHandle::new();
        handle.cancel();

        let err = client
            .with_context(RequestContext::new().with_cancellation(&handle))
            .get::<Record>("cards/abc")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Cancelled));
        assert!(err.is_transport_error());
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/random"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(card_json("Opt", "xln", "65"))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = create_client(&server)
            .with_context(RequestContext::new().with_timeout(Duration::from_millis(100)));

        let err = client.cards().random().await.unwrap_err();
        assert!(matches!(err, Error::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_uncancelled_context_completes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let handle = CancellationHandle::new();
        let ctx = RequestContext::new()
            .with_cancellation(&handle)
            .with_timeout(Duration::from_secs(10));

        let record: Record = client.with_context(ctx).get("cards/abc").await.unwrap();
        assert_eq!(record.id, "abc");
        assert!(!handle.is_cancelled());
    }

    #[tokio::test]
    async fn test_requests_are_paced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(3)
            .mount(&server)
            .await;

        init_logging();
        let client = ClientConfig::default()
            .with_base_uri(server.uri())
            .with_requests_per_second(20.0)
            .build()
            .unwrap();

        let started = Instant::now();
        for _ in 0..3 {
            let _: Record = client.get("cards/abc").await.unwrap();
        }

        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_clones_share_the_limiter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .mount(&server)
            .await;

        init_logging();
        let client = ClientConfig::default()
            .with_base_uri(server.uri())
            .with_requests_per_second(10.0)
            .build()
            .unwrap();
        let other = client.clone();

        let started = Instant::now();
        let (a, b) = tokio::join!(
            client.get::<Record>("cards/abc"),
            other.get::<Record>("cards/abc")
        );
        a.unwrap();
        b.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_cancel_while_waiting_for_limiter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        init_logging();
        let handle = CancellationHandle::new();
        let client = ClientConfig::default()
            .with_base_uri(server.uri())
            .with_requests_per_second(0.5)
            .build()
            .unwrap()
            .with_context(RequestContext::new().with_cancellation(&handle));

        // The first call spends the only permit for the next two seconds.
        let _: Record = client.get("cards/abc").await.unwrap();

        let canceller = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let started = Instant::now();
        let err = client.get::<Record>("cards/abc").await.unwrap_err();

        assert!(matches!(err, Error::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    /// Limiter that never waits and counts permits.
    #[derive(Default)]
    struct CountingLimiter {
        acquired: AtomicUsize,
    }

    impl RateLimiter for CountingLimiter {
        fn acquire(&self) -> BoxFuture<'_, ()> {
            self.acquired.fetch_add(1, Ordering::SeqCst);
            Box::pin(async {})
        }
    }

    #[tokio::test]
    async fn test_custom_rate_limiter_gates_every_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(3)
            .mount(&server)
            .await;

        init_logging();
        let limiter = Arc::new(CountingLimiter::default());
        let client = ClientConfig::default()
            .with_base_uri(server.uri())
            .with_rate_limiter(limiter.clone())
            .build()
            .unwrap();

        for _ in 0..3 {
            let _: Record = client.get("cards/abc").await.unwrap();
        }

        assert_eq!(limiter.acquired.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_custom_http_client() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/abc"))
            .and(header("user-agent", "scryfall-rs-tests/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        init_logging();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let client = config(&server).with_http_client(http).build().unwrap();

        let record: Record = client.get("cards/abc").await.unwrap();
        assert_eq!(record.id, "abc");
    }
}

// =============================================================================
// Cards Tests
// =============================================================================

mod cards_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_and_next_page() {
        let server = MockServer::start().await;
        let next = format!("{}/cards/search?page=2&q=t%3Agoblin", server.uri());

        Mock::given(method("GET"))
            .and(path("/cards/search"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "total_cards": 3,
                "has_more": false,
                "data": [card_json("Goblin Guide", "zen", "126")]
            })))
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/cards/search"))
            .and(query_param("q", "t:goblin"))
            .and(query_param("order", "name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "total_cards": 3,
                "has_more": true,
                "next_page": next,
                "data": [
                    card_json("Goblin Bushwhacker", "zen", "125"),
                    card_json("Goblin Chieftain", "m10", "141")
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let cards = client.cards();

        let first = cards
            .search("t:goblin", &SearchOptions::new().order(SortOrder::Name))
            .await
            .unwrap();
        assert_eq!(first.total_cards, Some(3));
        assert_eq!(first.data.len(), 2);
        assert_eq!(first.data[0].name, "Goblin Bushwhacker");
        assert!(first.has_more);

        let second = cards.next_page(&first).await.unwrap().expect("second page");
        assert_eq!(second.data.len(), 1);
        assert_eq!(second.data[0].name, "Goblin Guide");

        assert!(cards.next_page(&second).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_named_fuzzy_in_set() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/named"))
            .and(query_param("fuzzy", "jac bele"))
            .and(query_param("set", "csp"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(card_json("Jace, the Mind Sculptor", "csp", "20")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let card = client
            .cards()
            .named("jac bele", NameMatch::Fuzzy, Some("csp"))
            .await
            .unwrap();
        assert_eq!(card.name, "Jace, the Mind Sculptor");
    }

    #[tokio::test]
    async fn test_autocomplete() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/autocomplete"))
            .and(query_param("q", "thal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "catalog",
                "total_values": 2,
                "data": ["Thalia, Guardian of Thraben", "Thalia's Lancers"]
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let names = client.cards().autocomplete("thal").await.unwrap();
        assert_eq!(names, vec!["Thalia, Guardian of Thraben", "Thalia's Lancers"]);
    }

    #[tokio::test]
    async fn test_collection_posts_identifiers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cards/collection"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "identifiers": [
                    {"id": "xln-65"},
                    {"name": "Lightning Bolt", "set": "lea"},
                    {"set": "mrd", "collector_number": "150"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "not_found": [{"set": "mrd", "collector_number": "150"}],
                "data": [
                    card_json("Opt", "xln", "65"),
                    card_json("Lightning Bolt", "lea", "161")
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let response = client
            .cards()
            .collection(&[
                CardIdentifier::id("xln-65"),
                CardIdentifier::name_in_set("Lightning Bolt", "lea"),
                CardIdentifier::set_and_number("mrd", "150"),
            ])
            .await
            .unwrap();

        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[1].name, "Lightning Bolt");
        assert_eq!(
            response.not_found,
            vec![CardIdentifier::set_and_number("mrd", "150")]
        );
    }

    #[tokio::test]
    async fn test_collection_rejects_empty_input() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let err = client.cards().collection(&[]).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_by_set_and_number_in_lang() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/xln/65/ja"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(card_json("Opt", "xln", "65")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let card = client
            .cards()
            .by_set_and_number_in_lang("xln", "65", Lang::Ja)
            .await
            .unwrap();
        assert_eq!(card.collector_number, "65");
    }

    #[tokio::test]
    async fn test_lookup_by_external_ids() {
        let server = MockServer::start().await;
        for route in [
            "/cards/multiverse/409574",
            "/cards/mtgo/54957",
            "/cards/arena/67330",
            "/cards/tcgplayer/162145",
        ] {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(card_json("Strip Mine", "ema", "242")),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = create_client(&server);
        let cards = client.cards();
        cards.by_multiverse_id(409574).await.unwrap();
        cards.by_mtgo_id(54957).await.unwrap();
        cards.by_arena_id(67330).await.unwrap();
        cards.by_tcgplayer_id(162145).await.unwrap();
    }

    #[tokio::test]
    async fn test_from_uri() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/xln/65"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(card_json("Opt", "xln", "65")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let card = client
            .cards()
            .from_uri("https://scryfall.com/card/xln/65/opt")
            .await
            .unwrap();
        assert_eq!(card.name, "Opt");
    }

    #[tokio::test]
    async fn test_unknown_lang_rejected_before_request() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let err = client
            .cards()
            .by_set_and_number_in_lang("xln", "65", Lang::Unknown)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_next_page_on_other_origin_omits_credential() {
        let api = MockServer::start().await;
        let elsewhere = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "has_more": false,
                "data": [card_json("Goblin Guide", "zen", "126")]
            })))
            .expect(1)
            .mount(&elsewhere)
            .await;

        init_logging();
        let client = config(&api).with_client_secret("s3cret").build().unwrap();
        let page = CardList {
            data: Vec::new(),
            has_more: true,
            next_page: Some(format!("{}/cards/search?page=2&q=goblin", elsewhere.uri())),
            total_cards: None,
            warnings: Vec::new(),
        };

        let next = client.cards().next_page(&page).await.unwrap().unwrap();
        assert_eq!(next.data[0].name, "Goblin Guide");

        let requests = elsewhere.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_from_uri_rejects_short_uri() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let err = client.cards().from_uri("scryfall.com/xln").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

// =============================================================================
// Reference Data Tests
// =============================================================================

mod reference_tests {
    use super::*;

    fn set_json(code: &str, name: &str) -> Value {
        json!({
            "object": "set",
            "id": format!("{}-id", code),
            "code": code,
            "name": name,
            "set_type": "expansion",
            "released_at": "2017-09-29",
            "card_count": 279,
            "scryfall_uri": format!("https://scryfall.com/sets/{}", code),
            "uri": format!("https://api.scryfall.com/sets/{}", code),
            "icon_svg_uri": "https://svgs.scryfall.io/sets/xln.svg",
            "search_uri": "https://api.scryfall.com/cards/search?q=e%3Axln"
        })
    }

    #[tokio::test]
    async fn test_list_sets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "has_more": false,
                "data": [set_json("xln", "Ixalan"), set_json("rix", "Rivals of Ixalan")]
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let sets = client.sets().list().await.unwrap();

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].code, "xln");
        assert_eq!(sets[1].name, "Rivals of Ixalan");
    }

    #[tokio::test]
    async fn test_get_set() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sets/xln"))
            .respond_with(ResponseTemplate::new(200).set_body_json(set_json("xln", "Ixalan")))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let set = client.sets().get("xln").await.unwrap();
        assert_eq!(set.card_count, 279);
    }

    #[tokio::test]
    async fn test_rulings_for_card() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/xln/65/rulings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "has_more": false,
                "data": [
                    {
                        "object": "ruling",
                        "oracle_id": "oracle",
                        "source": "wotc",
                        "published_at": "2017-09-29",
                        "comment": "First ruling."
                    },
                    {
                        "object": "ruling",
                        "oracle_id": "oracle",
                        "source": "scryfall",
                        "published_at": "2018-01-19",
                        "comment": "Second ruling."
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let rulings = client.rulings().by_set_and_number("xln", "65").await.unwrap();

        assert_eq!(rulings.len(), 2);
        assert_eq!(rulings[0].source, RulingSource::Wotc);
        assert_eq!(rulings[1].comment, "Second ruling.");
    }

    #[tokio::test]
    async fn test_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog/card-types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "catalog",
                "uri": "https://api.scryfall.com/catalog/card-types",
                "total_values": 3,
                "data": ["Artifact", "Creature", "Land"]
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let catalog = client.catalogs().get(CatalogKind::CardTypes).await.unwrap();

        assert_eq!(catalog.total_values, 3);
        assert_eq!(catalog.data[1], "Creature");
    }

    #[tokio::test]
    async fn test_parse_mana() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/symbology/parse-mana"))
            .and(query_param("cost", "2ww"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "mana_cost",
                "cost": "{2}{W}{W}",
                "cmc": 4.0,
                "colors": ["W"],
                "colorless": false,
                "monocolored": true,
                "multicolored": false
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let cost = client.symbology().parse_mana("2ww").await.unwrap();

        assert_eq!(cost.cost, "{2}{W}{W}");
        assert!(cost.monocolored);
    }

    #[tokio::test]
    async fn test_bulk_data_by_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bulk-data/oracle_cards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "bulk_data",
                "id": "27bf3214-1271-490b-bdfe-c0be6c23d02e",
                "type": "oracle_cards",
                "updated_at": "2024-02-09T10:02:14.012+00:00",
                "uri": "https://api.scryfall.com/bulk-data/27bf3214",
                "name": "Oracle Cards",
                "description": "One card object per Oracle ID.",
                "size": 150000000,
                "download_uri": "https://data.scryfall.io/oracle-cards/oracle-cards.json",
                "content_type": "application/json",
                "content_encoding": "gzip"
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let bulk = client.bulk_data().get_by_type("oracle_cards").await.unwrap();
        assert_eq!(bulk.bulk_type, "oracle_cards");
    }
}

use std::net::TcpListener;
use std::time::Duration;

use quote_scrape::{
    Backoff, FetchResult, QuoteClient, QuoteFetcher, QuoteField, RetryConfig, ScrapeError,
};
use url::Url;

use crate::common::{RecordingPause, ScriptedTransport, fixture, fixture_without, scripted_client};

fn page() -> String {
    fixture("quote", "AAPL", "html")
}

#[test]
fn two_503_then_200_pauses_exactly_twice() {
    let transport = ScriptedTransport::new([
        (503, "busy".to_string()),
        (503, "busy".to_string()),
        (200, page()),
    ]);
    let pause = RecordingPause::new();

    let snap = QuoteFetcher::apple(&scripted_client(&transport, &pause))
        .fetch(3)
        .unwrap();

    assert_eq!(transport.requests().len(), 3);
    assert_eq!(pause.pauses(), vec![Duration::from_secs(2); 2]);
    assert_eq!(snap.price(), "227.52");
    assert_eq!(snap.previous_close(), "225.77");
    assert_eq!(snap.market_cap(), "3.459T");
}

#[test]
fn every_attempt_failing_exhausts_after_exactly_max_attempts() {
    for max_attempts in 1..=5u32 {
        let script = (0..max_attempts).map(|_| (500, "oops".to_string()));
        let transport = ScriptedTransport::new(script);
        let pause = RecordingPause::new();

        let err = QuoteFetcher::apple(&scripted_client(&transport, &pause))
            .fetch(max_attempts)
            .unwrap_err();

        assert_eq!(transport.requests().len(), max_attempts as usize);
        assert_eq!(pause.pauses().len(), max_attempts as usize - 1);
        match err {
            ScrapeError::FetchExhausted {
                attempts,
                last_status,
                ..
            } => {
                assert_eq!(attempts, max_attempts);
                assert_eq!(last_status, Some(500));
            }
            other => panic!("expected FetchExhausted, got {other:?}"),
        }
    }
}

#[test]
fn first_success_wins_regardless_of_budget() {
    for max_attempts in [2u32, 5, 10] {
        let transport = ScriptedTransport::new([(200, page())]);
        let pause = RecordingPause::new();

        let snap = QuoteFetcher::apple(&scripted_client(&transport, &pause))
            .fetch(max_attempts)
            .unwrap();

        assert_eq!(transport.requests().len(), 1);
        assert!(pause.pauses().is_empty());
        assert_eq!(snap.market_cap(), "3.459T");
    }
}

#[test]
fn zero_attempts_is_rejected_without_a_request() {
    let transport = ScriptedTransport::new(Vec::<(u16, String)>::new());
    let pause = RecordingPause::new();

    let err = QuoteFetcher::apple(&scripted_client(&transport, &pause))
        .fetch(0)
        .unwrap_err();

    assert!(matches!(err, ScrapeError::InvalidAttempts));
    assert!(transport.requests().is_empty());
}

#[test]
fn missing_price_after_retries_is_an_extraction_error() {
    let transport = ScriptedTransport::new([
        (429, "slow down".to_string()),
        (200, fixture_without(r#"data-field="regularMarketPrice""#)),
    ]);
    let pause = RecordingPause::new();

    let err = QuoteFetcher::apple(&scripted_client(&transport, &pause))
        .fetch(3)
        .unwrap_err();

    assert_eq!(pause.pauses().len(), 1);
    match err {
        ScrapeError::Extraction { field } => assert_eq!(field, QuoteField::Price),
        other => panic!("expected Extraction, got {other:?}"),
    }
}

#[test]
fn fetch_raw_reports_the_succeeding_attempt() {
    let transport = ScriptedTransport::new([(502, String::new()), (200, "<html></html>".into())]);
    let pause = RecordingPause::new();

    let raw = QuoteFetcher::apple(&scripted_client(&transport, &pause))
        .fetch_raw(2)
        .unwrap();

    assert_eq!(
        raw,
        FetchResult::Loaded {
            status: 200,
            body: "<html></html>".into(),
            attempts: 2,
        }
    );
    assert_eq!(transport.requests()[0], "https://finance.yahoo.com/quote/AAPL?p=AAPL");
}

#[test]
fn exponential_backoff_is_capped() {
    let backoff = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: 2.0,
        max: Duration::from_millis(350),
    };
    assert_eq!(backoff.delay_after(1), Duration::from_millis(100));
    assert_eq!(backoff.delay_after(2), Duration::from_millis(200));
    assert_eq!(backoff.delay_after(3), Duration::from_millis(350));
    assert_eq!(backoff.delay_after(40), Duration::from_millis(350));
}

#[test]
fn exponential_backoff_with_negative_factor_does_not_pause() {
    let backoff = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: -2.0,
        max: Duration::from_secs(1),
    };
    assert_eq!(backoff.delay_after(1), Duration::from_millis(100));
    assert_eq!(backoff.delay_after(2), Duration::ZERO);
    assert_eq!(backoff.delay_after(3), Duration::from_millis(400));
    assert_eq!(backoff.delay_after(4), Duration::ZERO);
}

#[test]
fn exponential_backoff_with_zero_factor_does_not_pause() {
    let backoff = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: 0.0,
        max: Duration::from_secs(1),
    };
    assert_eq!(backoff.delay_after(1), Duration::from_millis(100));
    assert_eq!(backoff.delay_after(2), Duration::ZERO);
    assert_eq!(backoff.delay_after(9), Duration::ZERO);
}

#[test]
fn negative_factor_backoff_inside_fetch() {
    let transport = ScriptedTransport::new([
        (503, String::new()),
        (503, String::new()),
        (200, page()),
    ]);
    let pause = RecordingPause::new();
    let client = QuoteClient::builder()
        .transport(std::sync::Arc::clone(&transport))
        .pause(std::sync::Arc::clone(&pause))
        .retry_policy(RetryConfig {
            backoff: Backoff::Exponential {
                base: Duration::from_millis(100),
                factor: -2.0,
                max: Duration::from_secs(1),
            },
            ..RetryConfig::default()
        })
        .build()
        .unwrap();

    let snap = QuoteFetcher::apple(&client).fetch(3).unwrap();

    assert_eq!(snap.price(), "227.52");
    assert_eq!(
        pause.pauses(),
        vec![Duration::from_millis(100), Duration::ZERO]
    );
}

#[test]
fn custom_backoff_flows_into_pauses() {
    let transport = ScriptedTransport::new([
        (503, String::new()),
        (503, String::new()),
        (503, String::new()),
    ]);
    let pause = RecordingPause::new();
    let client = QuoteClient::builder()
        .transport(std::sync::Arc::clone(&transport))
        .pause(std::sync::Arc::clone(&pause))
        .retry_policy(RetryConfig {
            backoff: Backoff::Fixed(Duration::from_millis(5)),
            ..RetryConfig::default()
        })
        .build()
        .unwrap();

    QuoteFetcher::apple(&client).fetch(3).unwrap_err();
    assert_eq!(pause.pauses(), vec![Duration::from_millis(5); 2]);
}

fn unused_local_base() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}/quote/")).unwrap()
}

#[test]
fn connect_error_aborts_by_default() {
    let pause = RecordingPause::new();
    let client = QuoteClient::builder()
        .base_quote(unused_local_base())
        .pause(std::sync::Arc::clone(&pause))
        .build()
        .unwrap();

    let err = QuoteFetcher::apple(&client).fetch(3).unwrap_err();

    assert!(matches!(err, ScrapeError::Http(_)), "got {err:?}");
    assert!(pause.pauses().is_empty());
}

#[test]
fn connect_error_retried_when_opted_in() {
    let pause = RecordingPause::new();
    let client = QuoteClient::builder()
        .base_quote(unused_local_base())
        .pause(std::sync::Arc::clone(&pause))
        .retry_policy(RetryConfig {
            retry_on_connect: true,
            ..RetryConfig::default()
        })
        .build()
        .unwrap();

    let err = QuoteFetcher::apple(&client).fetch(2).unwrap_err();

    assert_eq!(pause.pauses().len(), 1);
    assert!(matches!(
        err,
        ScrapeError::FetchExhausted {
            attempts: 2,
            last_status: None,
            ..
        }
    ));
}

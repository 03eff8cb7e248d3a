use std::collections::VecDeque;
use std::time::Duration;

use chrono::Local;
use crossbeam_channel::unbounded;
use ticker_common::clock::ManualClock;
use ticker_common::render::Renderer;
use ticker_common::source::DataSource;
use ticker_common::view::{Frame, Status};
use ticker_common::{Config, FetchError, FetchOutcome, Quote, TickerError, TickerLoop};

/// Source answering from a per-call script; defaults to a priced quote when the script
/// runs dry.
#[derive(Default)]
struct ScriptedSource {
    script: VecDeque<Result<Quote, FetchError>>,
    calls: Vec<String>,
}

impl ScriptedSource {
    fn push(&mut self, result: Result<Quote, FetchError>) {
        self.script.push_back(result);
    }
}

impl DataSource for ScriptedSource {
    fn fetch(&mut self, ticker: &str) -> Result<Quote, FetchError> {
        self.calls.push(ticker.to_string());
        self.script.pop_front().unwrap_or_else(|| Ok(priced(100.0)))
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Frame>,
    statuses: Vec<(String, Status)>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, ticker: &str, quote: Option<&Quote>) {
        self.frames.push(Frame::new(ticker, quote));
    }

    fn status(&mut self, ticker: &str, status: Status) {
        self.statuses.push((ticker.to_string(), status));
    }
}

fn priced(last: f64) -> Quote {
    Quote {
        last: Some(last),
        prev_close: Some(last),
        ..Quote::empty(Local::now())
    }
}

fn config(tickers: &[&str]) -> Config {
    Config {
        tickers: tickers.iter().map(|t| t.to_string()).collect(),
        ..Config::default()
    }
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn empty_ticker_list_is_rejected_at_startup() {
    let clock = ManualClock::default();
    let result = TickerLoop::new(
        &config(&[]),
        ScriptedSource::default(),
        RecordingRenderer::default(),
        &clock,
    );
    assert!(matches!(result, Err(TickerError::EmptyTickerList)));
}

#[test]
fn first_iteration_fetches_then_draws() {
    let clock = ManualClock::default();
    let mut ticker_loop = TickerLoop::new(
        &config(&["AAPL", "MSFT"]),
        ScriptedSource::default(),
        RecordingRenderer::default(),
        &clock,
    )
    .unwrap();

    let step = ticker_loop.step();
    assert_eq!(step.ticker, "AAPL");
    assert_eq!(step.fetch, FetchOutcome::Fetched { evicted: None });

    let renderer = ticker_loop.renderer();
    assert_eq!(renderer.statuses, vec![("AAPL".to_string(), Status::Loading)]);
    assert_eq!(renderer.frames.len(), 1);
    assert_eq!(renderer.frames[0].price, "$100.00");
}

#[test]
fn fresh_cache_skips_fetch_until_stale() {
    let clock = ManualClock::default();
    let mut cfg = config(&["AAPL"]);
    cfg.dwell = secs(3_600);
    let mut ticker_loop = TickerLoop::new(
        &cfg,
        ScriptedSource::default(),
        RecordingRenderer::default(),
        &clock,
    )
    .unwrap();

    ticker_loop.step();
    for _ in 0..290 {
        clock.advance(Duration::from_millis(100));
        assert_eq!(ticker_loop.step().fetch, FetchOutcome::Cached);
    }
    clock.set(secs(30));
    assert_eq!(ticker_loop.step().fetch, FetchOutcome::Cached);
    clock.set(secs(31));
    assert_eq!(ticker_loop.step().fetch, FetchOutcome::Fetched { evicted: None });
    assert_eq!(ticker_loop.source_mut().calls.len(), 2);
}

#[test]
fn rotation_is_independent_of_fetching() {
    let clock = ManualClock::default();
    let mut ticker_loop = TickerLoop::new(
        &config(&["AAPL", "MSFT", "GOOGL"]),
        ScriptedSource::default(),
        RecordingRenderer::default(),
        &clock,
    )
    .unwrap();

    let mut drawn = Vec::new();
    for _ in 0..4 {
        drawn.push(ticker_loop.step().ticker);
        clock.advance(secs(10));
    }
    assert_eq!(drawn, vec!["AAPL", "MSFT", "GOOGL", "AAPL"]);
    // AAPL came back 30s after its fetch: exactly at the boundary, still fresh.
    assert_eq!(ticker_loop.source_mut().calls, vec!["AAPL", "MSFT", "GOOGL"]);
}

#[test]
fn failed_fetch_keeps_previous_quote() {
    let clock = ManualClock::default();
    let mut cfg = config(&["MSFT"]);
    cfg.dwell = secs(3_600);
    let mut source = ScriptedSource::default();
    source.push(Ok(priced(410.0)));
    source.push(Err(FetchError::Transport("connection reset".to_string())));
    let mut ticker_loop =
        TickerLoop::new(&cfg, source, RecordingRenderer::default(), &clock).unwrap();

    ticker_loop.step();
    let before = ticker_loop.cache().get("MSFT").cloned();

    clock.set(secs(45));
    let step = ticker_loop.step();
    assert!(matches!(step.fetch, FetchOutcome::Failed(FetchError::Transport(_))));
    assert_eq!(ticker_loop.cache().get("MSFT").cloned(), before);
    assert_eq!(ticker_loop.cache().fetched_at("MSFT"), Some(Duration::ZERO));

    let renderer = ticker_loop.renderer();
    assert_eq!(renderer.statuses.last(), Some(&("MSFT".to_string(), Status::Error)));
    assert_eq!(renderer.frames.last().map(|f| f.price.as_str()), Some("$410.00"));
}

#[test]
fn failure_without_cached_data_draws_placeholder() {
    let clock = ManualClock::default();
    let mut source = ScriptedSource::default();
    source.push(Err(FetchError::Logical("Ticker not found".to_string())));
    let mut ticker_loop =
        TickerLoop::new(&config(&["ZZZZ"]), source, RecordingRenderer::default(), &clock)
            .unwrap();

    ticker_loop.step();
    assert!(ticker_loop.cache().is_empty());
    let frame = &ticker_loop.renderer().frames[0];
    assert_eq!(frame.title, "ZZZZ");
    assert_eq!(frame.status, "No data");

    // No backoff: the next iteration tries again.
    assert_eq!(ticker_loop.step().fetch, FetchOutcome::Fetched { evicted: None });
}

#[test]
fn cache_bound_holds_across_rotation() {
    let clock = ManualClock::default();
    let tickers: Vec<String> = (0..12).map(|i| format!("T{i:02}")).collect();
    let refs: Vec<&str> = tickers.iter().map(String::as_str).collect();
    let mut cfg = config(&refs);
    cfg.max_cache_size = 10;
    let mut ticker_loop = TickerLoop::new(
        &cfg,
        ScriptedSource::default(),
        RecordingRenderer::default(),
        &clock,
    )
    .unwrap();

    let mut evictions = Vec::new();
    for _ in 0..12 {
        if let FetchOutcome::Fetched { evicted: Some(t) } = ticker_loop.step().fetch {
            evictions.push(t);
        }
        assert!(ticker_loop.cache().len() <= 10);
        clock.advance(secs(10));
    }
    assert_eq!(evictions, vec!["T00", "T01"]);
    assert_eq!(ticker_loop.cache().len(), 10);
}

#[test]
fn partial_quote_is_drawn_without_fault() {
    let clock = ManualClock::default();
    let mut source = ScriptedSource::default();
    source.push(Ok(Quote {
        last: Some(150.0),
        prev_close: Some(149.0),
        ..Quote::empty(Local::now())
    }));
    let mut ticker_loop =
        TickerLoop::new(&config(&["AAPL"]), source, RecordingRenderer::default(), &clock)
            .unwrap();

    ticker_loop.step();
    let frame = &ticker_loop.renderer().frames[0];
    assert_eq!(frame.price, "$150.00");
    assert_eq!(frame.change, "+$1.00 (0.7%)");
    assert_eq!(frame.bid_ask, "B/A:N/A");
    assert_eq!(frame.volume, "Vol:N/A");
}

#[test]
fn run_stops_on_shutdown_signal() {
    let clock = ManualClock::default();
    let mut ticker_loop = TickerLoop::new(
        &config(&["AAPL"]),
        ScriptedSource::default(),
        RecordingRenderer::default(),
        &clock,
    )
    .unwrap();

    let (tx, rx) = unbounded();
    tx.send(()).unwrap();
    ticker_loop.run(&rx);
    assert_eq!(ticker_loop.renderer().frames.len(), 1);

    drop(tx);
    ticker_loop.run(&rx);
    assert_eq!(ticker_loop.renderer().frames.len(), 2);
}

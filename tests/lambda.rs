use std::sync::Arc;
use std::sync::Mutex;

use series_processing::SeriesError;
use series_processing::lambda::{CancelToken, LambdaEngine, LambdaEvent, LambdaObserver, LambdaOutcome};
use series_processing::series::Series;
use series_processing::types::Value;

fn int_series(data: Vec<i64>) -> Series {
    let mut series = Series::new();
    series.set_data(data).unwrap();
    series
}

fn doubling(_cancel: &CancelToken, value: Value) -> LambdaOutcome {
    match value.as_i64() {
        Some(v) => LambdaOutcome::Commit(Value::Int64(v * 2)),
        None => LambdaOutcome::Keep,
    }
}

#[test]
fn commit_replaces_and_keep_preserves() {
    let mut series = int_series(vec![1, 2, 3, 4]);
    let cancel = CancelToken::new();

    // Double even positions' values, keep odd ones.
    let summary = series
        .lambda(&cancel, |_cancel, value| match value.as_i64() {
            Some(v) if v % 2 == 0 => LambdaOutcome::Commit(Value::Int64(v * 2)),
            _ => LambdaOutcome::Keep,
        })
        .unwrap();

    assert_eq!(summary.processed, 4);
    assert_eq!(summary.committed, 2);
    assert_eq!(series.get(0).unwrap(), &Value::Int64(1));
    assert_eq!(series.get(1).unwrap(), &Value::Int64(4));
    assert_eq!(series.get(2).unwrap(), &Value::Int64(3));
    assert_eq!(series.get(3).unwrap(), &Value::Int64(8));
}

#[test]
fn keep_discards_whatever_the_candidate_would_have_been() {
    let mut series = int_series(vec![7, 8]);
    let cancel = CancelToken::new();

    let summary = series
        .lambda(&cancel, |_cancel, _value| LambdaOutcome::Keep)
        .unwrap();

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.committed, 0);
    assert_eq!(series.get(0).unwrap(), &Value::Int64(7));
    assert_eq!(series.get(1).unwrap(), &Value::Int64(8));
}

#[test]
fn callback_sees_ascending_positions_with_no_gaps() {
    let data: Vec<i64> = (0..50).collect();
    let mut series = int_series(data.clone());
    let cancel = CancelToken::new();

    let mut seen = Vec::new();
    series
        .lambda(&cancel, |_cancel, value| {
            seen.push(value.as_i64().unwrap());
            LambdaOutcome::Keep
        })
        .unwrap();

    // Each call receives the pre-call value at its own position, so the
    // observed sequence is exactly the ingested order.
    assert_eq!(seen, data);
}

#[test]
fn doubling_twice_is_not_a_no_op() {
    let mut series = int_series(vec![1, 2, 3]);
    let cancel = CancelToken::new();

    series.lambda(&cancel, doubling).unwrap();
    let collected: Vec<i64> = series.iter().filter_map(Value::as_i64).collect();
    assert_eq!(collected, vec![2, 4, 6]);

    series.lambda(&cancel, doubling).unwrap();
    let collected: Vec<i64> = series.iter().filter_map(Value::as_i64).collect();
    assert_eq!(collected, vec![4, 8, 12]);
}

#[test]
fn cancellation_preserves_committed_prefix_and_untouched_suffix() {
    const K: usize = 3;

    let mut series = int_series(vec![1, 2, 3, 4, 5, 6]);
    let cancel = CancelToken::new();

    let mut calls = 0usize;
    let err = series
        .lambda(&cancel, |cancel, value| {
            calls += 1;
            if calls == K {
                // The engine finishes this element, then stops before the next.
                cancel.cancel();
            }
            doubling(cancel, value)
        })
        .unwrap_err();

    assert!(matches!(err, SeriesError::Cancelled { processed: K }));
    assert_eq!(calls, K);

    // Positions 0..K committed, K.. unchanged.
    let collected: Vec<i64> = series.iter().filter_map(Value::as_i64).collect();
    assert_eq!(collected, vec![2, 4, 6, 4, 5, 6]);
}

#[test]
fn cancelling_from_another_handle_is_observed() {
    let mut series = int_series(vec![1, 2, 3]);
    let cancel = CancelToken::new();
    let external = cancel.clone();
    external.cancel();

    let err = series.lambda(&cancel, doubling).unwrap_err();
    assert!(matches!(err, SeriesError::Cancelled { processed: 0 }));
    let collected: Vec<i64> = series.iter().filter_map(Value::as_i64).collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn empty_series_pass_succeeds_with_zero_invocations() {
    let mut series = Series::new();
    series.set_data(Vec::<i64>::new()).unwrap();
    let cancel = CancelToken::new();

    let mut calls = 0usize;
    let summary = series
        .lambda(&cancel, |_cancel, _value| {
            calls += 1;
            LambdaOutcome::Keep
        })
        .unwrap();

    assert_eq!(calls, 0);
    assert_eq!(summary.processed, 0);
    assert_eq!(summary.committed, 0);
}

#[test]
fn failed_narrowing_in_the_callback_keeps_data_intact() {
    let mut series = Series::new();
    series.set_data(vec![1.5f64, 2.5]).unwrap();
    let cancel = CancelToken::new();

    // An integer-doubling callback running against a float series cannot
    // interpret any element; every position is kept as-is.
    let summary = series.lambda(&cancel, doubling).unwrap();
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.committed, 0);
    assert_eq!(series.get(0).unwrap(), &Value::Float64(1.5));
    assert_eq!(series.get(1).unwrap(), &Value::Float64(2.5));
}

struct RecordingObserver {
    events: Mutex<Vec<LambdaEvent>>,
}

impl RecordingObserver {
    fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn take(&self) -> Vec<LambdaEvent> {
        std::mem::take(&mut *self.events.lock().expect("observer mutex poisoned"))
    }
}

impl LambdaObserver for RecordingObserver {
    fn on_event(&self, event: &LambdaEvent) {
        self.events
            .lock()
            .expect("observer mutex poisoned")
            .push(event.clone());
    }
}

#[test]
fn observer_sees_the_full_event_stream() {
    let observer = Arc::new(RecordingObserver::new());
    let obs_trait: Arc<dyn LambdaObserver> = observer.clone();
    let engine = LambdaEngine::new().with_observer(obs_trait);

    let mut series = int_series(vec![1, 2, 3]);
    let cancel = CancelToken::new();
    engine.run(&mut series, &cancel, doubling).unwrap();

    let events = observer.take();
    assert_eq!(events.len(), 5);
    assert!(matches!(events[0], LambdaEvent::RunStarted { len: 3 }));
    for (offset, event) in events[1..4].iter().enumerate() {
        match event {
            LambdaEvent::ElementProcessed { index, committed } => {
                assert_eq!(*index, offset);
                assert!(*committed);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
    assert!(matches!(
        events[4],
        LambdaEvent::RunFinished { summary, .. }
            if summary.processed == 3 && summary.committed == 3
    ));
}

#[test]
fn observer_sees_cancellation() {
    let observer = Arc::new(RecordingObserver::new());
    let obs_trait: Arc<dyn LambdaObserver> = observer.clone();
    let engine = LambdaEngine::new().with_observer(obs_trait);

    let mut series = int_series(vec![1, 2, 3]);
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = engine.run(&mut series, &cancel, doubling).unwrap_err();
    assert!(matches!(err, SeriesError::Cancelled { processed: 0 }));

    let events = observer.take();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], LambdaEvent::RunStarted { len: 3 }));
    assert!(matches!(events[1], LambdaEvent::RunCancelled { processed: 0 }));
}

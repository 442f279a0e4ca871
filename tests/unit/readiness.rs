//! Unit tests for the readiness gate retry loop.

#![allow(clippy::expect_used)]

use std::time::Duration;

use proptest::prelude::*;
use stratus_cli::application::services::readiness::wait_ready;
use stratus_cli::domain::error::ReadinessError;
use stratus_cli::domain::readiness::{Gate, ProbeOutcome, WaitPlan};

use crate::mocks::{NoopReporter, ProbeScript, RecordingSleeper};

fn plan(max_attempts: u32) -> WaitPlan {
    WaitPlan {
        max_attempts,
        initial_delay: Duration::from_secs(80),
        poll_interval: Duration::from_secs(30),
    }
}

#[tokio::test]
async fn first_probe_success_returns_immediately() {
    let probe = ProbeScript::always_ready();
    let sleeper = RecordingSleeper::new();

    let attempts = wait_ready(&probe, &sleeper, &NoopReporter, "203.0.113.9", Gate::HttpOk, plan(6))
        .await
        .expect("gate should pass");

    assert_eq!(attempts, 1);
    assert_eq!(probe.call_count(), 1);
    // Only the initial delay was slept; no poll intervals.
    assert_eq!(sleeper.sleeps(), vec![Duration::from_secs(80)]);
}

#[tokio::test]
async fn recovers_within_the_budget() {
    // Refused twice, 200 on the third probe, budget of three.
    let probe = ProbeScript::ready_after(2);
    let sleeper = RecordingSleeper::new();

    let attempts = wait_ready(&probe, &sleeper, &NoopReporter, "203.0.113.9", Gate::HttpOk, plan(3))
        .await
        .expect("third probe should pass");

    assert_eq!(attempts, 3);
    assert_eq!(probe.call_count(), 3);
    assert_eq!(
        sleeper.sleeps(),
        vec![
            Duration::from_secs(80),
            Duration::from_secs(30),
            Duration::from_secs(30)
        ]
    );
}

#[tokio::test]
async fn exhausted_budget_times_out() {
    let probe = ProbeScript::always_refused();
    let sleeper = RecordingSleeper::new();

    let err = wait_ready(&probe, &sleeper, &NoopReporter, "203.0.113.9", Gate::HttpOk, plan(3))
        .await
        .expect_err("gate should time out");

    let ReadinessError::Timeout { host, attempts } = err;
    assert_eq!(host, "203.0.113.9");
    assert_eq!(attempts, 3);
    assert_eq!(probe.call_count(), 3);
}

#[tokio::test]
async fn connected_gate_accepts_any_status() {
    // A 500 means the socket answers even though the web stack is not up.
    let probe = ProbeScript::new(
        vec![ProbeOutcome::Responded(500)],
        ProbeOutcome::Unreachable("connection refused".to_owned()),
    );
    let sleeper = RecordingSleeper::new();

    let attempts = wait_ready(&probe, &sleeper, &NoopReporter, "203.0.113.9", Gate::Connected, plan(4))
        .await
        .expect("connected gate should pass on any response");

    assert_eq!(attempts, 1);
}

#[tokio::test]
async fn strict_gate_rejects_non_200_statuses() {
    // 503 while the web stack warms up, then 200.
    let probe = ProbeScript::new(
        vec![ProbeOutcome::Responded(503), ProbeOutcome::Responded(200)],
        ProbeOutcome::Unreachable("connection refused".to_owned()),
    );
    let sleeper = RecordingSleeper::new();

    let attempts = wait_ready(&probe, &sleeper, &NoopReporter, "203.0.113.9", Gate::HttpOk, plan(6))
        .await
        .expect("second probe should pass");

    assert_eq!(attempts, 2);
}

#[tokio::test]
async fn zero_initial_delay_is_still_slept_once() {
    let probe = ProbeScript::always_ready();
    let sleeper = RecordingSleeper::new();
    let plan = WaitPlan {
        max_attempts: 6,
        initial_delay: Duration::ZERO,
        poll_interval: Duration::from_secs(30),
    };

    wait_ready(&probe, &sleeper, &NoopReporter, "203.0.113.9", Gate::HttpOk, plan)
        .await
        .expect("gate should pass");

    assert_eq!(sleeper.sleeps(), vec![Duration::ZERO]);
}

proptest! {
    /// With an endpoint that never answers, the loop performs exactly `n`
    /// probes and sleeps once for the initial delay plus `n - 1` times for
    /// the poll interval.
    #[test]
    fn prop_exhaustion_makes_exactly_n_probes(n in 1u32..12) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        let (calls, sleeps, result) = rt.block_on(async {
            let probe = ProbeScript::always_refused();
            let sleeper = RecordingSleeper::new();
            let result =
                wait_ready(&probe, &sleeper, &NoopReporter, "10.0.0.5", Gate::HttpOk, plan(n)).await;
            (probe.call_count(), sleeper.sleeps(), result)
        });

        prop_assert!(result.is_err());
        prop_assert_eq!(calls, n);
        prop_assert_eq!(sleeps.len() as u32, n);
        prop_assert_eq!(sleeps[0], Duration::from_secs(80));
        for interval in &sleeps[1..] {
            prop_assert_eq!(*interval, Duration::from_secs(30));
        }
    }

    /// A success on probe `k` never consumes more than `k` probes.
    #[test]
    fn prop_success_stops_probing(k in 0usize..8) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        let (calls, attempts) = rt.block_on(async {
            let probe = ProbeScript::ready_after(k);
            let sleeper = RecordingSleeper::new();
            let attempts = wait_ready(
                &probe,
                &sleeper,
                &NoopReporter,
                "10.0.0.5",
                Gate::HttpOk,
                plan(12),
            )
            .await;
            (probe.call_count(), attempts)
        });

        let attempts = attempts.expect("budget of 12 covers every k");
        prop_assert_eq!(attempts as usize, k + 1);
        prop_assert_eq!(calls as usize, k + 1);
    }
}

//! Readiness gate — a bounded retry-poll against one endpoint.

use tracing::warn;

use crate::application::ports::{EndpointProbe, ProgressReporter, Sleeper};
use crate::domain::error::ReadinessError;
use crate::domain::readiness::{Gate, WaitPlan};

/// Block until `host` passes `gate`, probing on the given plan.
///
/// Sleeps `plan.initial_delay` once, then probes up to `plan.max_attempts`
/// times with `plan.poll_interval` between consecutive probes. Returns on
/// the first passing probe with the number of probes it took. A probe that
/// fails to connect or answers with the wrong status is logged and counted,
/// never fatal mid-budget.
///
/// Readiness never touches sessions or bootstrap state; its only side
/// effects are network probes and log output.
///
/// # Errors
///
/// Returns [`ReadinessError::Timeout`] once the attempt budget is spent.
pub async fn wait_ready(
    probe: &impl EndpointProbe,
    sleeper: &impl Sleeper,
    reporter: &impl ProgressReporter,
    host: &str,
    gate: Gate,
    plan: WaitPlan,
) -> Result<u32, ReadinessError> {
    reporter.step(&format!("waiting until {host} {}...", gate.describe()));
    sleeper.sleep(plan.initial_delay).await;

    for attempt in 1..=plan.max_attempts {
        let outcome = probe.probe(host).await;
        if gate.passes(&outcome) {
            reporter.success(&format!("{host} {}", gate.describe()));
            return Ok(attempt);
        }
        warn!(host, attempt, max_attempts = plan.max_attempts, ?outcome, "endpoint not ready");
        if attempt < plan.max_attempts {
            sleeper.sleep(plan.poll_interval).await;
        }
    }

    Err(ReadinessError::Timeout {
        host: host.to_owned(),
        attempts: plan.max_attempts,
    })
}

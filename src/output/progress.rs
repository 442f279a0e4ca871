//! Spinners for long-running waits, built on indicatif.

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(80);
const RUNNING_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed}]";
const FINISHED_TEMPLATE: &str = "{prefix} {msg}";

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).expect("valid template")
}

/// A ticking spinner with an elapsed-time column, for waits with no known
/// endpoint such as the appliance coming up.
///
/// # Panics
///
/// Panics if the template constant is malformed, which it is not.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner().with_style(style(RUNNING_TEMPLATE));
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(TICK);
    pb
}

/// Stop the spinner, replacing it with `✓ {msg}`.
pub fn finish_ok(pb: &ProgressBar, msg: &str) {
    pb.set_style(style(FINISHED_TEMPLATE));
    pb.set_prefix("✓");
    pb.finish_with_message(msg.to_string());
}

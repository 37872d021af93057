use crate::timer;
use dioxus::prelude::*;
use std::time::Duration;
use time::{Date, format_description::FormatItem, macros::date, macros::format_description};

const RECOVERY_TARGET: f64 = 94.8;
const RECOVERY_STEP: f64 = 1.2;
const RECOVERY_TICK: Duration = Duration::from_millis(20);

const VOLUME_TARGET: f64 = 2.4;
const VOLUME_STEP: f64 = 0.1;
const VOLUME_TICK: Duration = Duration::from_millis(40);

const LAST_TRANSMUTATION: Date = date!(2026 - 02 - 08);
const FOOTER_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:zero], [year]");

/// A display value that climbs from zero to a fixed target in fixed steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {
    value: f64,
    target: f64,
    step: f64,
}

impl Counter {
    pub fn new(target: f64, step: f64) -> Self {
        Self {
            value: 0.0,
            target,
            step,
        }
    }

    pub fn recovery_rate() -> Self {
        Self::new(RECOVERY_TARGET, RECOVERY_STEP)
    }

    pub fn total_volume() -> Self {
        Self::new(VOLUME_TARGET, VOLUME_STEP)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.value >= self.target
    }

    /// Advances one step, rounded to a tenth and clamped to the target.
    /// Returns `false` once the target has been reached.
    pub fn tick(&mut self) -> bool {
        if !self.is_done() {
            let next = round_tenth(self.value + self.step);
            self.value = next.min(self.target);
        }
        !self.is_done()
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn last_transmutation_label() -> String {
    LAST_TRANSMUTATION
        .format(FOOTER_DATE_FORMAT)
        .unwrap_or_default()
}

fn use_counter_animation(counter: Signal<Counter>, every: Duration) {
    use_future(move || {
        let mut counter = counter;
        async move {
            loop {
                timer::sleep(every).await;
                if !counter.with_mut(Counter::tick) {
                    break;
                }
            }
        }
    });
}

#[component]
pub fn Statistics() -> Element {
    let recovery = use_signal(Counter::recovery_rate);
    let volume = use_signal(Counter::total_volume);

    use_counter_animation(recovery, RECOVERY_TICK);
    use_counter_animation(volume, VOLUME_TICK);

    let percent = format!("{:.1}", recovery().value());
    let size = format!("{:.1}", volume().value());

    rsx! {
        div { class: "stats-page",
            div { class: "stats-container",
                header { class: "stats-header",
                    p { class: "eyebrow", "Yield Report" }
                    h1 { "Process Results" }
                }
                div { class: "stats-grid",
                    StatCard {
                        label: "Recovery Rate",
                        value: percent,
                        unit: "%",
                        description: "Percentage of dark data successfully transmuted.",
                    }
                    StatCard {
                        label: "Total Volume",
                        value: size,
                        unit: "GB",
                        description: "Final weight of recovered data stored in the vaults.",
                    }
                }
                div { class: "stats-footer",
                    div { class: "status-indicator",
                        span { class: "dot" }
                        " System Optimal"
                    }
                    p { "Last transmutation: {last_transmutation_label()}" }
                }
            }
        }
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: String,
    unit: &'static str,
    description: &'static str,
) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-label", "{label}" }
            div { class: "stat-value-wrapper",
                h2 { class: "stat-number", "{value}" }
                span { class: "stat-unit", "{unit}" }
            }
            p { class: "stat-desc", "{description}" }
        }
    }
}

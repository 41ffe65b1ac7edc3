//! Wedding Countdown
//!
//! Ticks once a second until the ceremony, then shows the arrival message.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use dioxus::prelude::*;
use invite_core::countdown::ARRIVED_MESSAGE;
use invite_core::TimeLeft;

const TICK: Duration = Duration::from_secs(1);

fn time_left(target: NaiveDateTime) -> TimeLeft {
    TimeLeft::until_local(target, Local::now().naive_local())
}

/// Live countdown to `target` (local wall-clock time).
#[component]
pub fn Countdown(target: NaiveDateTime) -> Element {
    let mut left = use_signal(|| time_left(target));

    use_hook(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(TICK).await;
                let next = time_left(target);
                left.set(next);
                if next.is_zero() {
                    break;
                }
            }
        });
    });

    let current = left();

    rsx! {
        div { class: "countdown",
            if current.is_zero() {
                h3 { class: "countdown__arrived", {ARRIVED_MESSAGE} }
            } else {
                h3 { class: "countdown__title", "Faltan para nuestra boda" }
                div { class: "countdown__grid",
                    for (value, label) in current.units() {
                        div { key: "{label}", class: "countdown__unit",
                            div { class: "countdown__value", {format!("{:02}", value)} }
                            div { class: "countdown__label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

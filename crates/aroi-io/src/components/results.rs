//! Prediction result presentation.
//!
//! Renders one of two headline cards -- a confident match or the
//! not-in-database warning -- followed by the ranked top-5 list.
//! Which card appears is decided by [`PredictionResponse::verdict`],
//! so a flagged response can never show its raw label as the answer.

use aroi_api::response::{ClassScore, PredictionResponse, Verdict};
use aroi_api::format;
use dioxus::prelude::*;

/// The dishes the backing service was trained on, shown when an upload
/// does not match any of them.
const KNOWN_DISHES: [&str; 10] = [
    "ข้าวผัด",
    "แกงเขียวหวาน",
    "ข้าวซอย",
    "แกงมัสมั่น",
    "ผัดไทย",
    "พะแนง",
    "ผัดกะเพรา",
    "โรตี",
    "ต้มข่าไก่",
    "ต้มยำ",
];

/// Props for the [`ResultsPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultsPanelProps {
    /// The decoded prediction response to present.
    response: PredictionResponse,
}

/// Full results block for one prediction response.
#[component]
pub fn ResultsPanel(props: ResultsPanelProps) -> Element {
    let headline = match props.response.verdict() {
        Verdict::Match { label, confidence } => render_match(label, confidence),
        Verdict::NotInDatabase {
            message,
            confidence,
        } => render_not_in_database(message, confidence),
    };

    rsx! {
        div { class: "space-y-6",
            {headline}
            {render_ranked(props.response.top())}
        }
    }
}

/// Headline card for a confident match.
fn render_match(label: &str, confidence: f64) -> Element {
    let percent = format::percent(confidence);
    let width = format::bar_width(confidence);

    rsx! {
        div { class: "bg-[var(--success-bg)] border-2 border-[var(--success-border)] rounded-xl p-6",
            h2 { class: "text-2xl font-bold text-[var(--text-heading)] mb-2", "ผลการทำนาย" }
            p { class: "text-4xl font-bold text-[var(--text-success)] mb-2", "{label}" }
            div { class: "flex items-center gap-2",
                div { class: "flex-1 bg-[var(--bar-track)] rounded-full h-4 overflow-hidden",
                    div {
                        class: "bg-[var(--bar-success)] h-full rounded-full",
                        style: "width: {width}",
                    }
                }
                span { class: "text-lg font-semibold text-[var(--text)]", "{percent}" }
            }
        }
    }
}

/// Warning card for an input the service does not recognize.
///
/// Shows the service's message (or the fallback), the highest
/// below-threshold confidence, and the list of dishes the service
/// actually knows.
fn render_not_in_database(message: &str, confidence: f64) -> Element {
    let percent = format::percent(confidence);

    rsx! {
        div { class: "bg-[var(--warning-bg)] border-2 border-[var(--warning-border)] rounded-xl p-6",
            h2 { class: "text-2xl font-bold text-[var(--text-heading)] mb-2",
                "⚠️ ไม่พบในฐานความรู้"
            }
            p { class: "text-lg text-[var(--text)] mb-3", "{message}" }
            p { class: "text-sm text-[var(--text-secondary)]",
                "ความมั่นใจสูงสุด: {percent} (ต่ำกว่าเกณฑ์ที่กำหนด)"
            }
            div { class: "mt-4 p-4 bg-[var(--surface)] rounded-lg",
                p { class: "text-sm font-semibold text-[var(--text)] mb-2",
                    "📋 อาหารที่รองรับในระบบ:"
                }
                div { class: "grid grid-cols-2 gap-2 text-sm text-[var(--text-secondary)]",
                    for dish in KNOWN_DISHES {
                        div { "• {dish}" }
                    }
                }
            }
        }
    }
}

/// Ranked top-5 list, in the order the service supplied.
fn render_ranked(entries: &[ClassScore]) -> Element {
    rsx! {
        div {
            h3 { class: "text-xl font-bold text-[var(--text-heading)] mb-4",
                "ความเป็นไปได้ทั้งหมด (Top 5)"
            }
            div { class: "space-y-3",
                for (index, entry) in entries.iter().enumerate() {
                    {render_ranked_entry(index, entry)}
                }
            }
        }
    }
}

/// One row of the ranked list: rank badge, label, confidence bar.
fn render_ranked_entry(index: usize, entry: &ClassScore) -> Element {
    let rank = index + 1;
    let percent = format::percent(entry.confidence);
    let width = format::bar_width(entry.confidence);

    rsx! {
        div {
            key: "{index}",
            class: "flex items-center gap-4 p-4 bg-[var(--surface)] rounded-lg",
            div { class: "flex-shrink-0 w-8 h-8 bg-[var(--accent)] text-white rounded-full flex items-center justify-center font-bold",
                "{rank}"
            }
            div { class: "flex-1",
                p { class: "font-semibold text-[var(--text)]", "{entry.class}" }
                div { class: "flex items-center gap-2 mt-1",
                    div { class: "flex-1 bg-[var(--bar-track)] rounded-full h-2 overflow-hidden",
                        div {
                            class: "bg-[var(--accent)] h-full rounded-full",
                            style: "width: {width}",
                        }
                    }
                    span { class: "text-sm text-[var(--text-secondary)] w-16 text-right",
                        "{percent}"
                    }
                }
            }
        }
    }
}

//! Page sections, top to bottom. Content comes from the site table.

use leptos::prelude::*;
use crate::models::site::TextRun;

pub mod about;
pub mod contact;
pub mod culture;
pub mod donate;
pub mod footer;
pub mod founder;
pub mod hero;
pub mod mission;
pub mod tribute;
pub mod videos;
pub mod vision;
pub mod visit;

/// Render runs of text, wrapping emphasized runs in a span with `emphasis_class`.
pub fn text_runs(runs: &'static [TextRun], emphasis_class: &'static str) -> AnyView {
    runs.iter().map(|run| {
        if run.emphasis {
            view! { <strong class=emphasis_class>{run.text.as_str()}</strong> }.into_any()
        } else {
            run.text.as_str().into_any()
        }
    }).collect_view().into_any()
}

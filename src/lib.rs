use leptos::prelude::*;
use leptos_meta::*;
// Modules
pub mod app_state;
pub mod components;
pub mod icons;
pub mod lifecycle;
pub mod models;
pub mod pages;
pub mod state;
#[cfg(test)]
mod testing;

use crate::app_state::provide_app_state;
use crate::components::preloader::Preloader;
use crate::models::site::site_config;
use crate::pages::home::Home;

/// Build metadata captured by build.rs, published on `window.buildInfo`.
fn build_info() -> String {
    let git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    let git_describe = option_env!("VERGEN_GIT_DESCRIBE").unwrap_or("unknown");
    let git_commit_timestamp = option_env!("VERGEN_GIT_COMMIT_TIMESTAMP").unwrap_or("unknown");
    let git_dirty = option_env!("VERGEN_GIT_DIRTY").unwrap_or("unknown");
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let opt_level = option_env!("VERGEN_CARGO_OPT_LEVEL").unwrap_or("unknown");

    serde_json::to_string_pretty(&serde_json::json!({
        "SHA": git_sha,
        "DESCRIBE": git_describe,
        "COMMIT_TIMESTAMP": git_commit_timestamp,
        "DIRTY": git_dirty,
        "BUILD_TIMESTAMP": build_timestamp,
        "OPT_LEVEL": opt_level,
    }))
    .unwrap_or_else(|_| "{}".to_string())
}

/// Page root. Falls back to a bare notice if the site table cannot be loaded.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let page = match site_config() {
        Ok(site) => {
            provide_app_state(site);
            view! {
                // sets the document title
                <Title text=site.brand.document_title.as_str() />
                // Theme tokens scope the loader as well as the page.
                <div style=site.theme_style()>
                    <Preloader>
                        <Home />
                    </Preloader>
                </div>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("Site table unavailable: {e:#}");
            view! {
                <div class="flex items-center justify-center min-h-screen p-8 text-center text-gray-700">
                    <p>"This page could not be loaded. Please try again later."</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Html attr:lang="en" attr:dir="ltr" />

        // injects metadata in the <head> of the page
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        {page}
        <script>
            "window.buildInfo = "{build_info()}";"
        </script>
    }
}

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlImageElement, HtmlVideoElement};
use crate::app_state::use_site;
use crate::lifecycle::{self, LeaseSet};
use crate::state::{AssetOutcome, PreloadGate, ReadyReason};

/// Ask the browser for video metadata only, so the first play starts sooner.
fn prewarm_videos(sources: &[String]) -> Vec<HtmlVideoElement> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    sources.iter().filter_map(|src| {
        let video = document
            .create_element("video")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());
        match video {
            Some(video) => {
                video.set_preload("metadata");
                video.set_src(src);
                Some(video)
            }
            None => {
                log::warn!("Could not pre-warm {src}");
                None
            }
        }
    }).collect()
}

/// Loading screen shown until the page images have settled or the ceiling passes.
///
/// Children are mounted only once the gate opens; the loader then fades out
/// and is removed.
#[component]
pub fn Preloader(children: ChildrenFn) -> impl IntoView {
    let site = use_site();
    let timing = site.timing;
    let images = site.preload_images();

    let gate = RwSignal::new(PreloadGate::new(images.len()));
    let ready = Memo::new(move |_| gate.with(PreloadGate::is_ready));
    let (loader_mounted, set_loader_mounted) = signal(true);

    // Image listeners plus the grace and ceiling timers; all dropped on reveal.
    let leases = LeaseSet::scoped();
    let fade = LeaseSet::scoped();

    let start_grace = move || {
        log::debug!("All preload assets settled, waiting {}ms", timing.preload_grace_ms);
        leases.update_value(|set| {
            set.hold(lifecycle::timeout(timing.preload_grace_ms, move || {
                gate.try_update(|g| g.reveal(ReadyReason::AllSettled));
            }))
        });
    };

    let settle = move |outcome: AssetOutcome| {
        let completed = gate.try_update(|g| g.settle(outcome)).unwrap_or(false);
        if completed {
            start_grace();
        }
    };

    for src in &images {
        let img = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                log::warn!("Could not create image for {src}: {e:?}");
                settle(AssetOutcome::Failed);
                continue;
            }
        };
        let target: &EventTarget = img.as_ref();
        leases.update_value(|set| {
            set.hold(lifecycle::listen(target, "load", move |_| settle(AssetOutcome::Loaded)));
            set.hold(lifecycle::listen(target, "error", move |_| settle(AssetOutcome::Failed)));
        });
        img.set_src(src);
    }

    // Nothing to wait for. A failed image above has already started the grace timer.
    if images.is_empty() {
        start_grace();
    }

    leases.update_value(|set| {
        set.hold(lifecycle::timeout(timing.preload_ceiling_ms, move || {
            gate.try_update(|g| g.reveal(ReadyReason::Ceiling));
        }))
    });

    // Held for the page's lifetime so the requests are not collected early.
    let _videos = StoredValue::new_local(prewarm_videos(&site.video_sources()));

    Effect::new(move |_| {
        if ready.get() {
            // Runs after the revealing callback has returned, so dropping its
            // timer here is safe.
            leases.update_value(LeaseSet::release);
            fade.update_value(|set| {
                set.hold(lifecycle::timeout(timing.preload_fade_ms, move || {
                    set_loader_mounted.try_set(false);
                }))
            });
        }
    });

    Effect::new(move |_| {
        if !loader_mounted.get() {
            fade.update_value(LeaseSet::release);
        }
    });

    let loader_class = move || {
        if ready.get() {
            "fixed inset-0 z-[100] flex flex-col items-center justify-center bg-white transition-opacity ease-out opacity-0 pointer-events-none"
        } else {
            "fixed inset-0 z-[100] flex flex-col items-center justify-center bg-white transition-opacity ease-out opacity-100"
        }
    };
    let fade_style = format!("transition-duration: {}ms;", timing.preload_fade_ms);

    view! {
        {move || loader_mounted.get().then(|| view! {
            <div class=loader_class style=fade_style.clone() role="status" aria-live="polite">
                <div class="relative w-24 h-24">
                    <div class="absolute inset-0 border-4 rounded-full border-[var(--accent-soft)]"></div>
                    <div class="absolute inset-0 border-4 rounded-full border-t-[var(--accent)] border-transparent animate-spin"></div>
                    <img src=site.brand.logo.as_str() alt=site.brand.logo_alt.as_str() class="absolute object-cover w-16 h-16 rounded-lg inset-4" />
                </div>
                <p class="mt-6 text-sm font-semibold tracking-widest uppercase text-[var(--accent)] animate-pulse">
                    {site.preloader.message.as_str()}
                </p>
            </div>
        })}
        {move || ready.get().then(|| view! {
            <div class="animate-fade-in">{children()}</div>
        })}
    }
}

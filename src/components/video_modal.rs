use leptos::prelude::*;
use leptos::ev::{keydown, MouseEvent};
use leptos_use::{use_document, use_event_listener};
use crate::app_state::{close_media, modal_click, use_active_media, use_app_state};
use crate::icons::outline_icon;
use crate::models::media::MediaItem;
use crate::state::{ActiveMedia, ClickTarget};

/// Overlay player for the active media item. One per page.
#[component]
pub fn VideoModal() -> impl IntoView {
    let state = use_app_state();
    let active = use_active_media();

    let _ = use_event_listener(use_document(), keydown, move |ev| {
        if ev.key() == "Escape" && state.active_media.with_untracked(ActiveMedia::is_active) {
            close_media(&state);
        }
    });

    view! {
        {move || active.get().map(|item| view! { <ModalPlayer item=item /> })}
    }
}

#[component]
fn ModalPlayer(item: MediaItem) -> impl IntoView {
    let state = use_app_state();
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let title = item.title.clone();

    // A detached <video> can keep playing; stop it before it goes.
    on_cleanup(move || {
        if let Some(video) = video_ref.try_get_untracked().flatten() {
            if let Err(e) = video.pause() {
                log::warn!("Failed to pause video: {e:?}");
            }
        }
    });

    view! {
        <div
            class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/90 backdrop-blur-sm animate-fade-in"
            role="dialog"
            aria-modal="true"
            aria-label=title
            on:click=move |_| {
                modal_click(&state, ClickTarget::Backdrop);
            }
        >
            <div
                class="relative w-full max-w-4xl overflow-hidden bg-black shadow-2xl rounded-xl animate-zoom-in"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    modal_click(&state, ClickTarget::Panel);
                }
            >
                <button
                    type="button"
                    class="absolute z-10 p-2 text-white transition-colors rounded-full top-4 right-4 bg-white/10 hover:bg-white/20"
                    aria-label="Close video"
                    on:click=move |_| close_media(&state)
                >
                    {outline_icon("close", "w-6 h-6")}
                </button>

                <div class="aspect-video">
                    <video node_ref=video_ref src=item.media controls=true autoplay=true playsinline=true class="w-full h-full"></video>
                </div>

                <div class="p-4 text-white bg-gray-900">
                    <h3 class="text-xl font-bold">{item.title}</h3>
                </div>
            </div>
        </div>
    }
}

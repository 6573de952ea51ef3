use leptos::prelude::*;
use crate::models::media::MediaItem;
use crate::models::site::SiteConfig;
use crate::state::{ActiveMedia, ClickTarget, MenuState, ScrollFlag};

// Shared page state
#[derive(Clone, Copy, Debug)]
pub struct AppState {
  pub site: &'static SiteConfig,
  pub active_media: RwSignal<ActiveMedia>,
  pub menu: RwSignal<MenuState>,
  pub scroll: RwSignal<ScrollFlag>,
}

pub fn provide_app_state(site: &'static SiteConfig) -> AppState {
  let state = AppState {
    site,
    active_media: RwSignal::new(ActiveMedia::default()),
    menu: RwSignal::new(MenuState::default()),
    scroll: RwSignal::new(ScrollFlag::new(site.timing.scroll_threshold_px)),
  };
  provide_context(state);
  log::debug!("AppState provided");
  state
}

pub fn use_app_state() -> AppState {
  use_context::<AppState>().expect("AppState to be provided")
}

pub fn use_site() -> &'static SiteConfig {
  use_app_state().site
}

pub fn open_media(state: &AppState, item: MediaItem) {
  log::info!("Opening media {} ({})", item.id, item.title);
  state.active_media.update(|m| m.activate(item));
}

pub fn close_media(state: &AppState) {
  state.active_media.update(|m| m.deactivate());
}

/// Returns true if the click dismissed the modal.
pub fn modal_click(state: &AppState, target: ClickTarget) -> bool {
  let mut closed = false;
  state.active_media.update(|m| closed = m.click(target));
  closed
}

pub fn use_active_media() -> Memo<Option<MediaItem>> {
  let state = use_app_state();
  Memo::new(move |_| state.active_media.with(|m| m.current().cloned()))
}

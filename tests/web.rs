#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use tabernacle_web::app_state::{close_media, modal_click, open_media, provide_app_state, AppState};
use tabernacle_web::components::carousel::{Carousel, CarouselTreatment};
use tabernacle_web::components::main_top_nav::MainTopNav;
use tabernacle_web::components::preloader::Preloader;
use tabernacle_web::components::sections::visit::Visit;
use tabernacle_web::components::video_modal::VideoModal;
use tabernacle_web::lifecycle::{self, ResourceKind};
use tabernacle_web::models::site::{load_site_config, site_config, SiteConfig, SITE_JSON};
use tabernacle_web::state::ClickTarget;
use tabernacle_web::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

fn element(parent: &web_sys::HtmlElement, selector: &str) -> web_sys::HtmlElement {
    parent
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into()
}

fn class_of(list: &web_sys::NodeList, index: u32) -> String {
    list.item(index).unwrap().unchecked_into::<web_sys::Element>().class_name()
}

/// Let pending effects and re-renders run.
async fn settle() {
    TimeoutFuture::new(0).await;
}

/// The embedded table with test-specific changes, leaked for the page lifetime.
fn site_with(change: impl FnOnce(&mut SiteConfig)) -> &'static SiteConfig {
    let mut site = load_site_config(SITE_JSON).unwrap();
    change(&mut site);
    Box::leak(Box::new(site))
}

#[wasm_bindgen_test]
fn carousel_interval_is_released_on_unmount() {
    let before = lifecycle::active(ResourceKind::Interval);
    let handle = leptos::mount::mount_to(container(), || view! {
        <Carousel images=vec!["/a.png".to_string(), "/b.png".to_string()] interval_ms=5000 />
        <Carousel
            images=vec!["/c.png".to_string()]
            interval_ms=4000
            treatment=CarouselTreatment::Heritage
            caption=Some("caption".to_string())
        />
    });
    assert_eq!(lifecycle::active(ResourceKind::Interval), before + 2);
    drop(handle);
    assert_eq!(lifecycle::active(ResourceKind::Interval), before);
}

#[wasm_bindgen_test]
fn carousel_renders_slide_and_dot_per_image() {
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), || view! {
        <Carousel images=vec!["/a.png".to_string(), "/b.png".to_string(), "/c.png".to_string()] interval_ms=5000 />
    });
    let dots = parent.query_selector_all("button").unwrap();
    assert_eq!(dots.length(), 3);
    let imgs = parent.query_selector_all("img").unwrap();
    assert_eq!(imgs.length(), 3);
}

#[wasm_bindgen_test]
fn nav_scroll_listener_is_released_on_unmount() {
    let site = site_config().unwrap();
    let before = lifecycle::active(ResourceKind::Listener);
    let captured: Rc<RefCell<Option<AppState>>> = Rc::default();
    let slot = captured.clone();
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), move || {
        *slot.borrow_mut() = Some(provide_app_state(site));
        view! { <MainTopNav /> }
    });
    assert_eq!(lifecycle::active(ResourceKind::Listener), before + 1);

    let state = captured.borrow().unwrap();
    let toggle: web_sys::HtmlElement = parent
        .query_selector("button[aria-label='Toggle navigation']")
        .unwrap()
        .unwrap()
        .unchecked_into();
    toggle.click();
    assert!(state.menu.get_untracked().is_open());
    toggle.click();
    assert!(!state.menu.get_untracked().is_open());

    drop(handle);
    assert_eq!(lifecycle::active(ResourceKind::Listener), before);
}

#[wasm_bindgen_test]
fn modal_click_routing() {
    let site = site_config().unwrap();
    let captured: Rc<RefCell<Option<AppState>>> = Rc::default();
    let slot = captured.clone();
    let _handle = leptos::mount::mount_to(container(), move || {
        *slot.borrow_mut() = Some(provide_app_state(site));
    });
    let state = captured.borrow().unwrap();
    let item = site.media(2).unwrap().clone();

    assert!(!modal_click(&state, ClickTarget::Backdrop));

    open_media(&state, item.clone());
    assert!(!modal_click(&state, ClickTarget::Panel));
    assert_eq!(state.active_media.get_untracked().current(), Some(&item));
    assert!(modal_click(&state, ClickTarget::Backdrop));
    assert!(!state.active_media.get_untracked().is_active());

    open_media(&state, item);
    close_media(&state);
    assert!(!state.active_media.get_untracked().is_active());
}

#[wasm_bindgen_test]
fn preloader_leaves_nothing_behind() {
    let site = site_config().unwrap();
    let images = site.preload_images().len();
    let before_listeners = lifecycle::active(ResourceKind::Listener);
    let before_timeouts = lifecycle::active(ResourceKind::Timeout);
    let handle = leptos::mount::mount_to(container(), move || {
        provide_app_state(site);
        view! { <Preloader><p>"content"</p></Preloader> }
    });
    assert_eq!(lifecycle::active(ResourceKind::Listener), before_listeners + 2 * images);
    assert_eq!(lifecycle::active(ResourceKind::Timeout), before_timeouts + 1);
    drop(handle);
    assert_eq!(lifecycle::active(ResourceKind::Listener), before_listeners);
    assert_eq!(lifecycle::active(ResourceKind::Timeout), before_timeouts);
}

#[wasm_bindgen_test]
async fn carousel_dot_shows_its_slide() {
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), || view! {
        <Carousel images=vec!["/a.png".to_string(), "/b.png".to_string(), "/c.png".to_string()] interval_ms=60_000 />
    });
    let imgs = parent.query_selector_all("img").unwrap();
    assert!(class_of(&imgs, 0).contains("opacity-100"));

    let dots = parent.query_selector_all("button").unwrap();
    dots.item(2).unwrap().unchecked_into::<web_sys::HtmlElement>().click();
    settle().await;

    assert!(class_of(&imgs, 2).contains("opacity-100"));
    assert!(!class_of(&imgs, 0).contains("opacity-100"));
    assert!(!class_of(&imgs, 1).contains("opacity-100"));
}

#[wasm_bindgen_test]
async fn modal_stays_open_on_panel_click_and_closes_on_backdrop() {
    let site = site_config().unwrap();
    let captured: Rc<RefCell<Option<AppState>>> = Rc::default();
    let slot = captured.clone();
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        *slot.borrow_mut() = Some(provide_app_state(site));
        view! { <VideoModal /> }
    });
    let state = captured.borrow().unwrap();
    assert!(parent.query_selector("[role=dialog]").unwrap().is_none());

    open_media(&state, site.media(1).unwrap().clone());
    settle().await;

    element(&parent, "video").click();
    assert!(state.active_media.get_untracked().is_active());
    element(&parent, "h3").click();
    assert!(state.active_media.get_untracked().is_active());

    element(&parent, "[role=dialog]").click();
    assert!(!state.active_media.get_untracked().is_active());
    settle().await;
    assert!(parent.query_selector("video").unwrap().is_none());
    assert!(parent.query_selector("[role=dialog]").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn modal_closes_from_button_and_escape() {
    let site = site_config().unwrap();
    let captured: Rc<RefCell<Option<AppState>>> = Rc::default();
    let slot = captured.clone();
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        *slot.borrow_mut() = Some(provide_app_state(site));
        view! { <VideoModal /> }
    });
    let state = captured.borrow().unwrap();

    open_media(&state, site.media(2).unwrap().clone());
    settle().await;
    element(&parent, "button[aria-label='Close video']").click();
    assert!(!state.active_media.get_untracked().is_active());

    open_media(&state, site.media(3).unwrap().clone());
    settle().await;
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let escape = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let document = web_sys::window().unwrap().document().unwrap();
    document.dispatch_event(&escape).unwrap();
    assert!(!state.active_media.get_untracked().is_active());
    settle().await;
    assert!(parent.query_selector("video").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn preloader_opens_at_ceiling_and_releases_its_leases() {
    // Grace longer than the ceiling, so the ceiling opens the gate.
    let site = site_with(|s| {
        s.timing.preload_grace_ms = 10_000;
        s.timing.preload_ceiling_ms = 200;
        s.timing.preload_fade_ms = 50;
    });
    let before_listeners = lifecycle::active(ResourceKind::Listener);
    let before_timeouts = lifecycle::active(ResourceKind::Timeout);
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), move || {
        provide_app_state(site);
        view! { <Preloader><p id="gated">"content"</p></Preloader> }
    });
    assert!(parent.query_selector("#gated").unwrap().is_none());
    assert!(parent.query_selector("[role=status]").unwrap().is_some());

    TimeoutFuture::new(600).await;

    assert!(parent.query_selector("#gated").unwrap().is_some());
    assert!(parent.query_selector("[role=status]").unwrap().is_none());
    assert_eq!(lifecycle::active(ResourceKind::Listener), before_listeners);
    assert_eq!(lifecycle::active(ResourceKind::Timeout), before_timeouts);
    drop(handle);
}

#[wasm_bindgen_test]
fn preloader_without_images_leases_one_grace_timer() {
    let site = site_with(|s| {
        s.brand.logo.clear();
        s.hero.background.clear();
        s.about.images = vec![String::new()];
        s.culture.images = vec![String::new()];
        for item in &mut s.videos.items {
            item.thumbnail.clear();
        }
        s.tribute.background.clear();
        s.founder.image.clear();
    });
    assert!(site.preload_images().is_empty());
    let before_listeners = lifecycle::active(ResourceKind::Listener);
    let before_timeouts = lifecycle::active(ResourceKind::Timeout);
    let handle = leptos::mount::mount_to(container(), move || {
        provide_app_state(site);
        view! { <Preloader><p>"content"</p></Preloader> }
    });
    // Grace and ceiling only.
    assert_eq!(lifecycle::active(ResourceKind::Timeout), before_timeouts + 2);
    assert_eq!(lifecycle::active(ResourceKind::Listener), before_listeners);
    drop(handle);
    assert_eq!(lifecycle::active(ResourceKind::Timeout), before_timeouts);
}

#[wasm_bindgen_test]
fn loader_is_inside_the_theme_scope() {
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), App);
    let loader = element(&parent, "[role=status]");
    let scope = loader.closest("[style*='--accent']").unwrap();
    assert!(scope.is_some());
    drop(handle);
}

#[wasm_bindgen_test]
async fn map_embed_is_deferred() {
    let site = site_config().unwrap();
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        provide_app_state(site);
        view! { <Visit /> }
    });
    settle().await;
    let frame = element(&parent, "iframe");
    assert_eq!(frame.get_attribute("loading").as_deref(), Some("lazy"));
    assert_eq!(frame.get_attribute("src").as_deref(), Some(site.visit.map.embed_url.as_str()));
    assert_eq!(frame.get_attribute("title").as_deref(), Some(site.visit.map.title.as_str()));
}

#[wasm_bindgen_test]
async fn modal_labels_dialog_with_title() {
    let site = site_config().unwrap();
    let captured: Rc<RefCell<Option<AppState>>> = Rc::default();
    let slot = captured.clone();
    let parent = container();
    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        *slot.borrow_mut() = Some(provide_app_state(site));
        view! { <VideoModal /> }
    });
    let state = captured.borrow().unwrap();
    let item = site.media(2).unwrap().clone();
    open_media(&state, item.clone());
    settle().await;
    let dialog = element(&parent, "[role=dialog]");
    assert_eq!(dialog.get_attribute("aria-label"), Some(item.title.clone()));
    assert_eq!(element(&parent, "h3").text_content(), Some(item.title));
}

use leptos::prelude::*;
use crate::lifecycle::{self, LeaseSet};
use crate::state::CarouselState;

/// Visual treatment for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselTreatment {
    /// Rounded frame; outgoing slide shrinks as it fades.
    Framed,
    /// Taller frame with a bottom gradient and caption; outgoing slide only fades.
    Heritage,
}

impl CarouselTreatment {
    fn frame_classes(self) -> &'static str {
        match self {
            CarouselTreatment::Framed => "relative w-full h-[420px] rounded-2xl overflow-hidden shadow-lg",
            CarouselTreatment::Heritage => "relative w-full h-[450px] rounded-2xl overflow-hidden shadow-xl bg-gray-100",
        }
    }

    fn slide_classes(self, role: SlideRole) -> &'static str {
        use CarouselTreatment::*;
        use SlideRole::*;
        match (self, role) {
            (Framed, Showing) => "absolute inset-0 w-full h-full object-cover transition-all duration-1000 ease-in-out opacity-100 scale-100 z-10",
            (Framed, Leaving) => "absolute inset-0 w-full h-full object-cover transition-all duration-1000 ease-in-out opacity-0 scale-90",
            (Framed, Waiting) => "absolute inset-0 w-full h-full object-cover transition-all duration-1000 ease-in-out opacity-0 scale-110",
            (Heritage, Showing) => "absolute inset-0 w-full h-full object-cover transition-all duration-[1200ms] ease-in-out opacity-100 scale-100 z-10",
            (Heritage, Leaving) => "absolute inset-0 w-full h-full object-cover transition-all duration-[1200ms] ease-in-out opacity-0 scale-100",
            (Heritage, Waiting) => "absolute inset-0 w-full h-full object-cover transition-all duration-[1200ms] ease-in-out opacity-0 scale-110",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlideRole {
    Showing,
    Leaving,
    Waiting,
}

fn slide_role(state: &CarouselState, index: usize) -> SlideRole {
    if state.current() == index {
        SlideRole::Showing
    } else if state.previous() == Some(index) {
        SlideRole::Leaving
    } else {
        SlideRole::Waiting
    }
}

/// Image carousel advancing every `interval_ms`, with dot navigation.
///
/// Each instance owns its index and its interval; the interval is released
/// when the component is unmounted.
#[component]
pub fn Carousel(
    images: Vec<String>,
    interval_ms: u32,
    #[prop(default = CarouselTreatment::Framed)] treatment: CarouselTreatment,
    #[prop(into, default = String::new())] alt: String,
    #[prop(default = None)] caption: Option<String>,
    #[prop(default = true)] show_dots: bool,
) -> impl IntoView {
    let state = match CarouselState::new(images) {
        Ok(state) => RwSignal::new(state),
        Err(e) => {
            log::error!("Carousel not started: {e:#}");
            return view! { <div class=treatment.frame_classes()></div> }.into_any();
        }
    };

    let leases = LeaseSet::scoped();
    leases.update_value(|set| {
        set.hold(lifecycle::interval(interval_ms, move || {
            state.try_update(CarouselState::advance);
        }))
    });

    let slides = state.with_untracked(|s| s.items().to_vec())
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            let class = move || treatment.slide_classes(state.with(|s| slide_role(s, index)));
            view! { <img src=src alt=alt.clone() class=class /> }
        })
        .collect_view();

    let overlay = (treatment == CarouselTreatment::Heritage).then(|| view! {
        <div class="absolute inset-0 z-20 bg-gradient-to-t from-black/60 via-transparent to-transparent pointer-events-none"></div>
    });

    let caption = caption.map(|text| view! {
        <div class="absolute z-30 text-white pointer-events-none bottom-6 left-6">
            <p class="text-sm font-medium opacity-90">{text}</p>
        </div>
    });

    let dots = show_dots.then(|| {
        let count = state.with_untracked(CarouselState::len);
        let buttons = (0..count).map(|index| {
            let class = move || {
                if state.with(|s| s.current()) == index {
                    "w-2 h-2 rounded-full bg-white"
                } else {
                    "w-2 h-2 rounded-full bg-white/50"
                }
            };
            view! {
                <button
                    type="button"
                    class=class
                    aria-label=format!("Go to image {}", index + 1)
                    on:click=move |_| state.update(|s| s.select(index))
                ></button>
            }
        }).collect_view();
        view! {
            <div class="absolute z-30 flex space-x-2 transform -translate-x-1/2 bottom-4 left-1/2">
                {buttons}
            </div>
        }
    });

    view! {
        <div class=treatment.frame_classes()>
            {slides}
            {overlay}
            {caption}
            {dots}
        </div>
    }.into_any()
}

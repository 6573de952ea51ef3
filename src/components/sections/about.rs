use leptos::prelude::*;
use crate::app_state::use_site;
use crate::components::carousel::{Carousel, CarouselTreatment};

#[component]
pub fn About() -> impl IntoView {
    let site = use_site();
    let about = &site.about;
    view! {
        <section id="about" class="py-24 bg-white">
            <div class="grid items-center max-w-6xl gap-12 px-6 mx-auto md:grid-cols-2">
                <Carousel
                    images=about.images.clone()
                    interval_ms=site.timing.about_interval_ms
                    treatment=CarouselTreatment::Framed
                    alt=about.image_alt.as_str()
                />
                <div>
                    <h3 class="mb-4 text-3xl font-bold">{about.heading.as_str()}</h3>
                    {about.paragraphs.iter().map(|p| view! { <p class="mb-4 last:mb-0">{p.as_str()}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;
use crate::components::main_top_nav::MainTopNav;
use crate::components::sections::{
    about::About, contact::Contact, culture::Culture, donate::Donate, footer::Footer,
    founder::Founder, hero::Hero, mission::Mission, tribute::Tribute, videos::Videos,
    vision::Vision, visit::Visit,
};
use crate::components::video_modal::VideoModal;

/// The whole page, in scroll order.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="min-h-screen font-sans text-[var(--ink)] bg-gray-50">
            {/* ==== TOP BAR ==== */}
            <MainTopNav />

            <main>
                <Hero />
                <About />
                <Mission />
                <Vision />
                <Culture />
                <Videos />
                <Visit />
                <Tribute />
                <Donate />
                <Founder />
                <Contact />
            </main>

            <Footer />
            <VideoModal />
        </div>
    }
}

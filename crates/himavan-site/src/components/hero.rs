//! Landing hero

use leptos::*;
use crate::components::nav::scroll_to_section;
use crate::timers::{use_typewriter, Typewriter};

const BRAND: &str = "HIMAVAN";
const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/1108572/pexels-photo-1108572.jpeg?auto=compress&cs=tinysrgb&w=1920";

#[component]
pub fn Hero() -> impl IntoView {
    let title = use_typewriter(Typewriter::new(BRAND, 120, 80, 1500));

    view! {
        <section id="home" class="min-h-screen relative flex items-center justify-center overflow-hidden">
            // Background Image
            <div class="absolute inset-0">
                <img src=HERO_IMAGE alt="Sustainable dining background" class="w-full h-full object-cover"/>
                <div class="absolute inset-0 bg-gradient-to-br from-blue-900/70 via-blue-800/60 to-blue-700/70"></div>
            </div>

            <div class="text-center z-10 px-4 relative">
                <h1 class="text-6xl md:text-8xl lg:text-9xl font-bold mb-6 tracking-wider text-white">
                    {move || title.get()}
                    <span class="typewriter-cursor">"|"</span>
                </h1>

                <div class="h-16 md:h-24"></div>

                <p class="text-xl md:text-2xl text-white mb-8 max-w-2xl mx-auto leading-relaxed font-medium">
                    "Sustainable Cutlery Solutions for a Greener Tomorrow"
                </p>

                <button
                    class="bg-white text-blue-600 px-8 py-4 rounded-full text-lg font-semibold hover:bg-blue-50 hover:scale-105 transition-all duration-300 shadow-lg"
                    on:click=move |_| {
                        scroll_to_section("products");
                    }
                >
                    "Explore Products"
                </button>
            </div>
        </section>
    }
}

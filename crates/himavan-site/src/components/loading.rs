//! Loading screen shown before the router mounts

use leptos::*;
use crate::config::use_config;
use crate::timers::use_loading_progress;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let config = use_config();
    let percent = use_loading_progress(config.progress_tick(), config.progress_max_step);

    view! {
        <div class="fixed inset-0 bg-gradient-to-br from-royal-blue to-blue-800 flex items-center justify-center z-50">
            <div class="text-center">
                <div class="mb-8">
                    <h1 class="text-6xl md:text-8xl font-bold text-white mb-4 tracking-wider">"HIMAVAN"</h1>
                    <p class="text-powder-blue text-lg md:text-xl">"Sustainable Living Solutions"</p>
                </div>

                <div class="w-64 md:w-80 mx-auto">
                    <div class="bg-white/20 rounded-full h-2 mb-4">
                        <div
                            class="bg-white rounded-full h-2 transition-all duration-300 ease-out"
                            style=move || format!("width: {}%", percent.get())
                        ></div>
                    </div>
                    <p class="text-white text-lg font-semibold">{move || percent.get()} "%"</p>
                </div>
            </div>
        </div>
    }
}

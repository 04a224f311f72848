//! Himavan Marketing Site
//!
//! A Leptos client-side rendered single-page site.

mod animation;
mod app;
mod components;
mod config;
mod pages;
mod routes;
mod timers;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    mount_to_body(|| {
        view! {
            <app::App/>
        }
    });
}

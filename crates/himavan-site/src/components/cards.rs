//! Card components

use himavan_catalog::{DisplayProduct, QuoteLink, StarRating};
use leptos::*;
use leptos_router::A;
use crate::animation::Entrance;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(into)] style: Signal<String>,
) -> impl IntoView {
    view! {
        <div
            class="bg-white p-8 rounded-2xl shadow-lg hover:shadow-xl transition-shadow duration-300 cursor-pointer group"
            style=move || style.get()
        >
            <div class="mb-6 text-5xl group-hover:scale-110 transition-transform duration-300">{icon}</div>
            <h3 class="text-2xl font-bold text-gray-900 mb-4">{title}</h3>
            <p class="text-gray-600 leading-relaxed">{description}</p>
        </div>
    }
}

#[component]
pub fn CategoryTeaserCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
    gradient: &'static str,
    image: &'static str,
    #[prop(into)] style: Signal<String>,
) -> impl IntoView {
    view! {
        <A href=href class="group relative block overflow-hidden rounded-2xl shadow-lg hover:shadow-2xl cursor-pointer">
            <div style=move || style.get()>
                <div class="relative">
                    <img
                        src=image
                        alt=title
                        class="w-full h-64 object-cover group-hover:scale-110 transition-transform duration-700"
                    />
                    <div class=format!("absolute inset-0 bg-gradient-to-t {gradient} opacity-70 group-hover:opacity-60 transition-opacity duration-300")></div>
                </div>
                <div class="absolute inset-0 flex flex-col justify-end p-6 text-white">
                    <h3 class="text-2xl font-bold mb-2">{title}</h3>
                    <p class="text-white/90 mb-4 leading-relaxed">{description}</p>
                    <div class="flex items-center group-hover:text-yellow-300 transition-colors duration-300">
                        <span class="font-semibold mr-2">"Explore Collection"</span>
                        <span class="group-hover:translate-x-2 transition-transform duration-300">"→"</span>
                    </div>
                </div>
            </div>
        </A>
    }
}

#[component]
pub fn StatCard(
    icon: &'static str,
    value: &'static str,
    label: &'static str,
    #[prop(into)] style: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-2xl shadow-lg text-center hover:shadow-xl" style=move || style.get()>
            <div class="text-blue-600 mb-4 text-3xl">{icon}</div>
            <div class="text-3xl font-bold text-gray-900 mb-2">{value}</div>
            <div class="text-gray-600 font-medium">{label}</div>
        </div>
    }
}

#[component]
pub fn StoryCard(
    title: &'static str,
    content: &'static str,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    let class = move || {
        if active.get() {
            "p-6 rounded-xl cursor-pointer transition-all duration-500 bg-blue-600 text-white shadow-lg scale-105"
        } else {
            "p-6 rounded-xl cursor-pointer transition-all duration-500 bg-white text-gray-700 hover:bg-gray-100"
        }
    };

    view! {
        <div class=class on:click=move |_| on_select.call(())>
            <h3 class="text-xl font-bold mb-2">{title}</h3>
            <p class="leading-relaxed">{content}</p>
        </div>
    }
}

fn star_icon(class: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
            <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/>
        </svg>
    }
}

#[component]
pub fn StarRow(stars: StarRating) -> impl IntoView {
    view! {
        <div class="flex mr-2">
            {(0..stars.full).map(|_| star_icon("h-4 w-4 fill-yellow-400 text-yellow-400")).collect_view()}
            {stars.half.then(|| star_icon("h-4 w-4 fill-yellow-400 text-yellow-400 opacity-50"))}
            {(0..stars.empty).map(|_| star_icon("h-4 w-4 fill-none text-gray-300")).collect_view()}
        </div>
    }
}

/// Full-page navigation to the product's WhatsApp quote link
fn open_quote(link: &QuoteLink, product: &DisplayProduct) {
    let url = link.for_product(product);
    tracing::info!(product = product.id, "opening quote link");
    if let Err(err) = window().location().set_href(&url) {
        tracing::warn!(?err, %url, "quote navigation failed");
    }
}

#[component]
pub fn ProductCard(
    product: DisplayProduct,
    index: usize,
    stagger_ms: u64,
    quote_link: QuoteLink,
    visible: ReadSignal<bool>,
) -> impl IntoView {
    let style = move || Entrance::CARD.style(visible.get(), index, stagger_ms);
    let rating = product.rating;
    let stars = product.stars();
    let stored = store_value(product.clone());
    let link = store_value(quote_link);

    view! {
        <div
            class="bg-white rounded-3xl shadow-xl hover:shadow-2xl overflow-hidden group border border-gray-100"
            style=style
        >
            <div class="overflow-hidden bg-gray-100">
                <img
                    src=product.image_ref
                    alt=product.name.clone()
                    class="w-full h-48 object-contain p-4 group-hover:scale-105 transition-transform duration-700"
                />
            </div>

            <div class="p-6">
                <h3 class="text-2xl font-bold text-gray-900 mb-3 group-hover:text-green-600 transition-colors duration-300">
                    {product.name}
                </h3>

                <div class="text-sm font-medium text-gray-700 bg-blue-50 p-3 rounded-lg mb-4">
                    <p class="mb-1 text-blue-800">
                        <span class="font-semibold">"Features:"</span>
                    </p>
                    <p class="text-xs">{product.description}</p>
                </div>

                <div class="flex items-center justify-between mb-4">
                    <div class="flex items-center">
                        <StarRow stars=stars/>
                        <span class="text-sm text-gray-500">"(" {rating} " Rating)"</span>
                    </div>
                </div>

                <button
                    class="w-full bg-green-600 text-white px-6 py-3 mt-2 rounded-xl hover:bg-green-700 transition-all duration-300 flex items-center justify-center font-semibold shadow-md shadow-green-200"
                    on:click=move |_| link.with_value(|link| stored.with_value(|product| open_quote(link, product)))
                >
                    "Get Quote on WhatsApp"
                </button>
            </div>
        </div>
    }
}

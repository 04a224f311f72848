//! Landing page

use himavan_catalog::Category;
use leptos::*;
use crate::animation::{use_scroll_reveal, Entrance, RevealMode};
use crate::components::*;
use crate::config::use_config;
use crate::timers::use_rotation;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="HomePage">
            <Navbar/>
            <Hero/>
            <CompanyDescription/>
            <ProductCategories/>
            <About/>
            <ScrollingQuotes/>
            <ContactSection/>
            <Footer/>
        </div>
    }
}

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🍃",
        "Paper Products",
        "Biodegradable paper cutlery made from sustainable sources, perfect for eco-conscious dining experiences.",
    ),
    (
        "♻️",
        "Bagasse Innovation",
        "Revolutionary cutlery made from sugarcane bagasse, transforming agricultural waste into functional products.",
    ),
    (
        "💙",
        "Plastic-Free Future",
        "Completely plastic-free alternatives that decompose naturally, protecting our planet for future generations.",
    ),
];

#[component]
fn CompanyDescription() -> impl IntoView {
    let stagger = use_config().card_stagger_ms;
    let revealed = use_scroll_reveal("company", RevealMode::Once);

    view! {
        <section id="company" class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                        "Revolutionizing Sustainable Dining"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                        "At Himavan, we're committed to creating eco-friendly cutlery solutions that combine "
                        "functionality with environmental responsibility. Our products are designed to reduce "
                        "plastic waste while maintaining the quality and durability you need."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES.into_iter().enumerate().map(|(index, (icon, title, description))| view! {
                        <FeatureCard
                            icon=icon
                            title=title
                            description=description
                            style=Signal::derive(move || Entrance::FEATURE.style(revealed.get(), index, stagger))
                        />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Landing tile for a product category
struct CategoryTeaser {
    category: Category,
    description: &'static str,
    gradient: &'static str,
    image: &'static str,
}

const TEASERS: [CategoryTeaser; 3] = [
    CategoryTeaser {
        category: Category::Paper,
        description: "Sustainable paper cutlery for eco-conscious dining",
        gradient: "from-green-400 to-green-600",
        image: "https://images.pexels.com/photos/4099354/pexels-photo-4099354.jpeg?auto=compress&cs=tinysrgb&w=500",
    },
    CategoryTeaser {
        category: Category::Bagasse,
        description: "Innovative sugarcane bagasse products",
        gradient: "from-amber-400 to-orange-600",
        image: "https://images.pexels.com/photos/6995219/pexels-photo-6995219.jpeg?auto=compress&cs=tinysrgb&w=500",
    },
    CategoryTeaser {
        category: Category::PlasticFree,
        description: "Completely biodegradable alternatives",
        gradient: "from-blue-400 to-blue-600",
        image: "https://images.pexels.com/photos/6995220/pexels-photo-6995220.jpeg?auto=compress&cs=tinysrgb&w=500",
    },
];

#[component]
fn ProductCategories() -> impl IntoView {
    let stagger = use_config().reveal_stagger_ms;
    let revealed = use_scroll_reveal("products", RevealMode::Reversible);

    view! {
        <section id="products" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">"Our Product Categories"</h2>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                        "Discover our range of sustainable cutlery solutions"
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {TEASERS.into_iter().enumerate().map(|(index, teaser)| view! {
                        <CategoryTeaserCard
                            title=teaser.category.label()
                            description=teaser.description
                            href=teaser.category.path()
                            gradient=teaser.gradient
                            image=teaser.image
                            style=Signal::derive(move || Entrance::TEASER.style(revealed.get(), index, stagger))
                        />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

const STORIES: [(&str, &str); 4] = [
    (
        "Our Beginning",
        "Founded with a vision to revolutionize the cutlery industry, Himavan started as a small initiative to reduce plastic waste in dining experiences.",
    ),
    (
        "Innovation Drive",
        "We invested heavily in research and development to create sustainable alternatives that don't compromise on quality or functionality.",
    ),
    (
        "Global Impact",
        "Today, we've helped thousands of businesses transition to eco-friendly cutlery, preventing millions of plastic items from reaching landfills.",
    ),
    (
        "Future Vision",
        "Our goal is to make sustainable dining the standard worldwide, creating a plastic-free future for generations to come.",
    ),
];

const STATS: [(&str, &str, &str); 4] = [
    ("👥", "10,000+", "Happy Customers"),
    ("🏆", "5M+", "Products Delivered"),
    ("🌍", "50+", "Countries Served"),
    ("🎯", "100%", "Plastic-Free"),
];

const MISSION_TAGS: [&str; 4] = ["Sustainable", "Innovative", "Quality", "Eco-friendly"];

#[component]
fn About() -> impl IntoView {
    let config = use_config();
    let stagger = config.reveal_stagger_ms;
    let (active, set_active) = use_rotation(STORIES.len(), config.story_rotation());
    let revealed = use_scroll_reveal("about", RevealMode::Reversible);

    view! {
        <section id="about" class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">"About Himavan"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                        "We're passionate about creating sustainable solutions that make a real difference "
                        "in the world. Our journey is driven by innovation, quality, and environmental responsibility."
                    </p>
                </div>

                // Stories
                <div class="grid lg:grid-cols-2 gap-12 mb-16">
                    <div class="space-y-4">
                        {STORIES.into_iter().enumerate().map(|(index, (title, content))| view! {
                            <StoryCard
                                title=title
                                content=content
                                active=Signal::derive(move || active.get() == index)
                                on_select=move |_| set_active.set(index)
                            />
                        }).collect_view()}
                    </div>

                    <div class="flex items-center justify-center">
                        <div class="bg-gradient-to-br from-blue-400 to-blue-600 rounded-2xl p-8 text-white shadow-xl">
                            <h3 class="text-3xl font-bold mb-6">"Our Mission"</h3>
                            <p class="text-lg leading-relaxed mb-6">
                                "To provide innovative, sustainable cutlery solutions that help businesses "
                                "and individuals reduce their environmental footprint while maintaining "
                                "the highest standards of quality and functionality."
                            </p>
                            <div class="flex flex-wrap gap-2">
                                {MISSION_TAGS.into_iter().map(|tag| view! {
                                    <span class="bg-white/20 px-4 py-2 rounded-full text-sm font-medium">{tag}</span>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                // Stats
                <div class="grid md:grid-cols-4 gap-8">
                    {STATS.into_iter().enumerate().map(|(index, (icon, value, label))| view! {
                        <StatCard
                            icon=icon
                            value=value
                            label=label
                            style=Signal::derive(move || Entrance::STAT.style(revealed.get(), index, stagger))
                        />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

const QUOTES: [&str; 7] = [
    "The Earth does not belong to us; we belong to the Earth",
    "Small acts, when multiplied by millions, can transform the world",
    "Nature is not a place to visit. It is home",
    "The environment is where we all meet; where we all have a mutual interest",
    "Every day is Earth Day when you live sustainably",
    "Be the change you wish to see in the world",
    "The greatest threat to our planet is the belief that someone else will save it",
];

/// Quote band scrolling in an endless loop; the list is rendered twice so the
/// marquee keyframes can wrap at the halfway point.
#[component]
fn ScrollingQuotes() -> impl IntoView {
    view! {
        <section class="py-16 bg-blue-600 overflow-hidden">
            <div class="marquee flex whitespace-nowrap" style="width: fit-content">
                {QUOTES.into_iter().chain(QUOTES).map(|quote| view! {
                    <div class="inline-block px-8 text-white text-xl md:text-2xl font-medium">
                        "\"" {quote} "\""
                        <span class="mx-8 text-blue-300">"•"</span>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

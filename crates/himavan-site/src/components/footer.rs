//! Site footer

use leptos::*;

const QUICK_LINKS: [&str; 5] = ["About Us", "Products", "Sustainability", "Contact", "Blog"];

const PRODUCT_LINKS: [(&str, &str); 4] = [
    ("Paper Cutlery", "/paper"),
    ("Bagasse Products", "/bagasse"),
    ("Plastic-Free Items", "/plastic-free"),
    ("Custom Solutions", "#contact"),
];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://www.facebook.com/share/17RxGR8oLi/"),
    ("Twitter", "#"),
    ("Instagram", "https://www.instagram.com/himavanpackagingsolutions"),
    ("LinkedIn", "#"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid md:grid-cols-4 gap-8">
                    // Brand
                    <div class="col-span-1">
                        <div class="flex items-center mb-6">
                            <span class="text-2xl mr-2">"🍃"</span>
                            <span class="text-2xl font-bold">"HIMAVAN"</span>
                        </div>
                        <p class="text-gray-400 leading-relaxed mb-6">
                            "Leading the way in sustainable cutlery solutions. "
                            "Creating a plastic-free future, one product at a time."
                        </p>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS.into_iter().map(|(label, href)| view! {
                                <a
                                    href=href
                                    aria-label=label
                                    class="text-gray-400 hover:text-blue-400 transition-colors duration-300 p-2 rounded-full hover:bg-gray-800 text-sm"
                                >
                                    {label}
                                </a>
                            }).collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-6">"Quick Links"</h3>
                        <ul class="space-y-3">
                            {QUICK_LINKS.into_iter().map(|link| view! {
                                <li>
                                    <a href="#" class="text-gray-400 hover:text-white transition-colors duration-300">{link}</a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-6">"Products"</h3>
                        <ul class="space-y-3">
                            {PRODUCT_LINKS.into_iter().map(|(label, href)| view! {
                                <li>
                                    <a href=href class="text-gray-400 hover:text-white transition-colors duration-300">{label}</a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    // Newsletter field is presentational only
                    <div>
                        <h3 class="text-lg font-semibold mb-6">"Stay Updated"</h3>
                        <p class="text-gray-400 mb-4">
                            "Subscribe to our newsletter for the latest eco-friendly products and sustainability tips."
                        </p>
                        <div class="flex">
                            <input
                                type="email"
                                placeholder="Your email"
                                class="flex-1 px-4 py-2 bg-gray-800 border border-gray-700 rounded-l-lg focus:outline-none focus:border-blue-400 transition-colors duration-300"
                            />
                            <button class="bg-blue-600 px-4 py-2 rounded-r-lg hover:bg-blue-700 transition-colors duration-300">
                                "Subscribe"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-12 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <div class="text-gray-400 text-sm">"© 2024 Himavan. All rights reserved."</div>
                    <div class="flex space-x-6 mt-4 md:mt-0">
                        <a href="#" class="text-gray-400 hover:text-white text-sm transition-colors duration-300">"Privacy Policy"</a>
                        <a href="#" class="text-gray-400 hover:text-white text-sm transition-colors duration-300">"Terms of Service"</a>
                        <a href="#" class="text-gray-400 hover:text-white text-sm transition-colors duration-300">"Sustainability Report"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

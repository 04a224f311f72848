//! Contact section

use leptos::*;
use crate::animation::{use_scroll_reveal, Entrance, RevealMode};

/// Contents of the contact form at submission time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactMessage {
    /// Company is optional and left out of the log when blank
    pub fn company(&self) -> Option<&str> {
        let company = self.company.trim();
        (!company.is_empty()).then_some(company)
    }
}

const CONTACT_INFO: [(&str, &str, &str, &str); 3] = [
    ("📧", "Email Us", "hello@himavan.com", "We reply within 24 hours"),
    ("📞", "Call Us", "+919008392267 +918917579780", "Mon-Fri 9AM-6PM"),
    ("📍", "Visit Us", "123 Eco Street, Green City", "Schedule an appointment"),
];

const REASONS: [&str; 4] = [
    "Bulk discounts available for businesses",
    "Custom branding and packaging options",
    "Fast shipping and reliable delivery",
    "Expert consultation on sustainability transition",
];

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-300";

#[component]
pub fn ContactSection() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (company, set_company) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(false);

    let revealed = use_scroll_reveal("contact-form", RevealMode::Reversible);
    let form_style = move || Entrance::SLIDE_IN.style(revealed.get(), 0, 0);

    // Required fields are enforced by the inputs themselves
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submission = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            message: message.get_untracked(),
        };
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            company = submission.company(),
            message = %submission.message,
            "contact form submitted"
        );
        set_name.set(String::new());
        set_email.set(String::new());
        set_company.set(String::new());
        set_message.set(String::new());
        set_submitted.set(true);
    };

    view! {
        <section id="contact" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                        "Let's Start Your Sustainable Journey"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                        "Ready to make the switch to eco-friendly cutlery? Get in touch with our team "
                        "for bulk orders, custom solutions, or any questions about our products."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    // Contact Info
                    <div class="space-y-8">
                        <div class="bg-gradient-to-br from-blue-600 to-blue-800 rounded-2xl p-8 text-white">
                            <h3 class="text-2xl font-bold mb-6">"Why Choose Himavan?"</h3>
                            <ul class="space-y-4">
                                {REASONS.into_iter().map(|reason| view! {
                                    <li class="flex items-start">
                                        <div class="w-2 h-2 bg-white rounded-full mt-3 mr-4 flex-shrink-0"></div>
                                        <span>{reason}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>

                        <div class="space-y-6">
                            {CONTACT_INFO.into_iter().map(|(icon, title, details, subtitle)| view! {
                                <div class="flex items-start p-6 bg-gray-50 rounded-xl hover:bg-gray-100 transition-colors duration-300">
                                    <div class="text-blue-600 mr-4 mt-1 text-2xl">{icon}</div>
                                    <div>
                                        <h4 class="font-bold text-gray-900 mb-1">{title}</h4>
                                        <p class="text-gray-800 font-medium">{details}</p>
                                        <p class="text-gray-600 text-sm">{subtitle}</p>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    // Form
                    <div id="contact-form" style=form_style>
                        <Show
                            when=move || !submitted.get()
                            fallback=move || view! {
                                <div class="text-center py-12 bg-gray-50 rounded-2xl">
                                    <div class="text-5xl mb-4">"✓"</div>
                                    <h3 class="text-2xl font-bold text-gray-900 mb-2">"Thank You!"</h3>
                                    <p class="text-gray-600 mb-6">
                                        "Thank you for your interest! We will get back to you soon."
                                    </p>
                                    <button
                                        class="text-blue-600 hover:text-blue-800 font-medium"
                                        on:click=move |_| set_submitted.set(false)
                                    >
                                        "Send another message"
                                    </button>
                                </div>
                            }
                        >
                            <form on:submit=on_submit class="space-y-6">
                                <div class="grid md:grid-cols-2 gap-6">
                                    <div>
                                        <label for="name" class="block text-sm font-medium text-gray-700 mb-2">"Full Name *"</label>
                                        <input
                                            type="text"
                                            id="name"
                                            name="name"
                                            required
                                            class=INPUT_CLASS
                                            placeholder="John Doe"
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            prop:value=name
                                        />
                                    </div>
                                    <div>
                                        <label for="email" class="block text-sm font-medium text-gray-700 mb-2">"Email Address *"</label>
                                        <input
                                            type="email"
                                            id="email"
                                            name="email"
                                            required
                                            class=INPUT_CLASS
                                            placeholder="john@company.com"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                        />
                                    </div>
                                </div>

                                <div>
                                    <label for="company" class="block text-sm font-medium text-gray-700 mb-2">"Company Name"</label>
                                    <input
                                        type="text"
                                        id="company"
                                        name="company"
                                        class=INPUT_CLASS
                                        placeholder="Your Company"
                                        on:input=move |ev| set_company.set(event_target_value(&ev))
                                        prop:value=company
                                    />
                                </div>

                                <div>
                                    <label for="message" class="block text-sm font-medium text-gray-700 mb-2">"Message *"</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="6"
                                        required
                                        class=format!("{INPUT_CLASS} resize-none")
                                        placeholder="Tell us about your requirements, quantity needed, or any questions you have..."
                                        on:input=move |ev| set_message.set(event_target_value(&ev))
                                        prop:value=message
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    class="w-full bg-gradient-to-r from-blue-600 to-blue-700 text-white px-8 py-4 rounded-xl font-semibold hover:from-blue-700 hover:to-blue-800 transition-all duration-300 shadow-lg"
                                >
                                    "Send Message"
                                </button>
                            </form>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

//! Main application component

use himavan_catalog::Category;
use leptos::*;
use leptos_router::*;
use crate::components::LoadingScreen;
use crate::config::{use_config, SiteConfig};
use crate::pages::*;
use crate::routes::SiteRoute;
use crate::timers::use_timeout;

#[component]
pub fn App() -> impl IntoView {
    provide_context(SiteConfig::bundled());
    let config = use_config();

    let (loading, set_loading) = create_signal(true);
    use_timeout(config.loading(), move || set_loading.set(false));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen/> }>
            <Router>
                <div class="App">
                    <RouteTracker/>
                    <Routes>
                        <Route path=SiteRoute::Home.path() view=HomePage/>
                        <Route
                            path=Category::Paper.path()
                            view=|| view! { <CategoryPage category=Category::Paper/> }
                        />
                        <Route
                            path=Category::Bagasse.path()
                            view=|| view! { <CategoryPage category=Category::Bagasse/> }
                        />
                        <Route
                            path=Category::PlasticFree.path()
                            view=|| view! { <CategoryPage category=Category::PlasticFree/> }
                        />
                    </Routes>
                </div>
            </Router>
        </Show>
    }
}

/// Logs every route activation against the closed route table
#[component]
fn RouteTracker() -> impl IntoView {
    let location = use_location();
    create_effect(move |_| {
        let path = location.pathname.get();
        match SiteRoute::from_path(&path) {
            Some(route) => tracing::debug!(%path, category = ?route.category(), "route activated"),
            None => tracing::warn!(%path, "no view for path"),
        }
    });
}

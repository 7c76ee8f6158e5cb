use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::Calendar;
use crate::components::Dashboard;
use crate::components::Landing;
use crate::components::MyShows;
use crate::components::Recommendations;
use crate::components::TmdbTesting;
use crate::routes::{Page, APP_ALIAS};
use crate::state::provide_theme_context;

/// Redirect that replaces the current history entry, so the back button
/// does not revisit the redirect source.
fn redirect_replace(path: &'static str) -> impl IntoView {
    view! {
        <Redirect
            path=path
            options=NavigateOptions {
                replace: true,
                ..Default::default()
            }
        />
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // Provide theme context at the app root
    provide_theme_context();

    view! {
        <Router>
            <Routes>
                // Public landing page, rendered without the app shell
                <Route path="/" view=Landing />
                // App shell: pages render in the layout outlet
                <Route path="/" view=Layout>
                    <Route path="dashboard" view=Dashboard />
                    <Route path="my-shows" view=MyShows />
                    <Route path="calendar" view=Calendar />
                    <Route path="recommendations" view=Recommendations />
                    <Route path="tmdb-testing" view=TmdbTesting />
                </Route>
                // Alias kept for old bookmarks
                <Route
                    path=APP_ALIAS
                    view=move || redirect_replace(Page::Dashboard.path())
                />
                // Anything else falls back to the landing page
                <Route path="/*any" view=move || redirect_replace("/") />
            </Routes>
        </Router>
    }
}

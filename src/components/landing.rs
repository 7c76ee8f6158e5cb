use leptos::*;
use leptos_router::*;

use crate::routes::Page;

/// Public landing page, rendered outside the app shell
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing-hero">
                <h1 class="landing-title">"Tally"</h1>
                <p class="landing-tagline">
                    "Track the shows you watch, see what airs next, and find your next binge."
                </p>
                <A href=Page::Dashboard.path() class="landing-cta">
                    "Open Dashboard"
                </A>
            </header>

            <section class="landing-features">
                <div class="feature">
                    <h3>"Your shows, in one place"</h3>
                    <p>"Keep watch status and episode progress for everything you follow."</p>
                </div>
                <div class="feature">
                    <h3>"Never miss an airing"</h3>
                    <p>"A calendar of upcoming episodes for the shows you track."</p>
                </div>
                <div class="feature">
                    <h3>"Fresh recommendations"</h3>
                    <p>"Daily picks from what is popular, trending, and airing right now."</p>
                </div>
            </section>
        </div>
    }
}

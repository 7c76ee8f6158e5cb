use crate::api::ApiClient;
use leptos::*;

use super::airing_today_card::AiringTodayCard;
use super::continue_watching_card::ContinueWatchingCard;
use super::stats_card::StatsCard;

/// Dashboard page component with data fetching
#[component]
pub fn Dashboard() -> impl IntoView {
    let client = ApiClient::new();
    let client_stats = client.clone();
    let client_airing = client.clone();
    let client_shows = client.clone();

    // Resources for async data fetching (using create_local_resource for CSR)
    // Tracking stats - refetch every 60 seconds
    let (stats_trigger, set_stats_trigger) = create_signal(0);
    let stats = create_local_resource(
        move || stats_trigger.get(),
        move |_| {
            let client = client_stats.clone();
            async move { client.get_stats().await }
        },
    );

    // Airing today - refetch every 5 minutes
    let (airing_trigger, set_airing_trigger) = create_signal(0);
    let airing_today = create_local_resource(
        move || airing_trigger.get(),
        move |_| {
            let client = client_airing.clone();
            async move { client.get_airing_today().await }
        },
    );

    // Tracked shows for the continue-watching card - refetch every 60 seconds
    let (shows_trigger, set_shows_trigger) = create_signal(0);
    let my_shows = create_local_resource(
        move || shows_trigger.get(),
        move |_| {
            let client = client_shows.clone();
            async move { client.get_my_shows().await }
        },
    );

    // Set up polling intervals
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        // Stats: 60 seconds
        let stats_interval = Interval::new(60_000, move || {
            set_stats_trigger.update(|n| *n += 1);
        });

        // Airing today: 5 minutes
        let airing_interval = Interval::new(300_000, move || {
            set_airing_trigger.update(|n| *n += 1);
        });

        // Tracked shows: 60 seconds
        let shows_interval = Interval::new(60_000, move || {
            set_shows_trigger.update(|n| *n += 1);
        });

        on_cleanup(move || {
            drop(stats_interval);
            drop(airing_interval);
            drop(shows_interval);
        });
    }

    view! {
        <div class="dashboard">
            <div class="dashboard-grid">
                // Stats card
                <Suspense fallback=move || view! { <LoadingCard title="Your Tally" /> }>
                    {move || {
                        stats.get().map(|result| {
                            view! { <StatsCard data=result /> }
                        })
                    }}
                </Suspense>

                // Airing today card
                <Suspense fallback=move || view! { <LoadingCard title="Airing Today" /> }>
                    {move || {
                        airing_today.get().map(|result| {
                            view! { <AiringTodayCard data=result /> }
                        })
                    }}
                </Suspense>

                // Continue watching card
                <Suspense fallback=move || view! { <LoadingCard title="Continue Watching" /> }>
                    {move || {
                        my_shows.get().map(|result| {
                            view! { <ContinueWatchingCard data=result /> }
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}

/// Loading card placeholder
#[component]
fn LoadingCard(title: &'static str) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            <div class="loading">"Loading..."</div>
        </div>
    }
}

use leptos::*;

use crate::api::ApiClient;
use crate::models::Recommendation;

/// Recommendations page component
#[component]
pub fn Recommendations() -> impl IntoView {
    let client = ApiClient::new();
    let client_fetch = client.clone();

    let (trigger, set_trigger) = create_signal(0);
    let recommendations = create_local_resource(
        move || trigger.get(),
        move |_| {
            let client = client_fetch.clone();
            async move { client.get_recommendations().await }
        },
    );

    let refresh = move |_| {
        set_trigger.update(|n| *n += 1);
    };

    view! {
        <div class="recommendations-page">
            <div class="recommendations-header">
                <h2>"Recommendations"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Refresh"
                </button>
            </div>

            <Suspense fallback=move || view! {
                <div class="loading">"Loading recommendations..."</div>
            }>
                {move || {
                    recommendations.get().map(|result| {
                        match result {
                            Ok(response) if response.recommendations.is_empty() => {
                                view! {
                                    <div class="no-data">
                                        "No recommendations yet. Track a few shows first."
                                    </div>
                                }.into_view()
                            }
                            Ok(response) => {
                                view! {
                                    <div class="recommendations-grid">
                                        {response
                                            .recommendations
                                            .into_iter()
                                            .map(|rec| view! { <RecommendationCard rec=rec /> })
                                            .collect_view()}
                                    </div>
                                }.into_view()
                            }
                            Err(e) => {
                                view! {
                                    <div class="error-banner">
                                        <strong>"Error loading recommendations:"</strong>
                                        <div>{format!("{}", e)}</div>
                                    </div>
                                }.into_view()
                            }
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Card for a single recommended show
#[component]
fn RecommendationCard(rec: Recommendation) -> impl IntoView {
    let year = rec
        .show
        .first_air_year()
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();

    let rating = rec
        .show
        .vote_average
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "N/A".to_string());

    let overview = rec.show.overview.clone().unwrap_or_default();

    view! {
        <div class="recommendation-card">
            <div class="recommendation-header">
                <h3>{rec.show.title.clone()}{year}</h3>
                <span class="source-badge">{rec.source.as_str()}</span>
            </div>
            <div class="recommendation-meta">
                <span class="rating">"TMDB " {rating}</span>
                <span class="score">{format!("Match {:.0}%", rec.score * 100.0)}</span>
            </div>
            <p class="recommendation-overview">{overview}</p>
        </div>
    }
}

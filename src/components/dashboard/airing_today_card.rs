use crate::api::ApiError;
use crate::models::EpisodeAiring;
use leptos::*;

#[component]
pub fn AiringTodayCard(
    data: Result<Vec<EpisodeAiring>, ApiError>,
) -> impl IntoView {
    match data {
        Ok(airings) if airings.is_empty() => {
            view! {
                <div class="card">
                    <h3>"Airing Today"</h3>
                    <p class="no-data">"Nothing from your shows airs today."</p>
                </div>
            }.into_view()
        }
        Ok(airings) => {
            view! {
                <div class="card">
                    <h3>"Airing Today"</h3>
                    <ul class="airing-list">
                        {airings
                            .into_iter()
                            .map(|airing| {
                                view! {
                                    <li class="airing-item">
                                        <span class="airing-show">{airing.show_title.clone()}</span>
                                        <span class="airing-code">{airing.code()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            }.into_view()
        }
        Err(e) => {
            view! {
                <div class="card card-error">
                    <h3>"Airing Today"</h3>
                    <div class="error-message">
                        {format!("Error: {}", e)}
                    </div>
                </div>
            }.into_view()
        }
    }
}

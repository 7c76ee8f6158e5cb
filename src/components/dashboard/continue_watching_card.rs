use crate::api::ApiError;
use crate::models::{MyShowsResponse, WatchStatus};
use leptos::*;

/// How many in-progress shows the card lists
const MAX_ENTRIES: usize = 5;

#[component]
pub fn ContinueWatchingCard(
    data: Result<MyShowsResponse, ApiError>,
) -> impl IntoView {
    match data {
        Ok(response) => {
            let watching: Vec<_> = response
                .shows
                .into_iter()
                .filter(|s| s.status == WatchStatus::Watching)
                .take(MAX_ENTRIES)
                .collect();

            if watching.is_empty() {
                return view! {
                    <div class="card">
                        <h3>"Continue Watching"</h3>
                        <p class="no-data">"No shows in progress. Start one from My Shows."</p>
                    </div>
                }.into_view();
            }

            view! {
                <div class="card">
                    <h3>"Continue Watching"</h3>
                    <ul class="watching-list">
                        {watching
                            .into_iter()
                            .map(|tracked| {
                                let progress = tracked.progress_text();
                                view! {
                                    <li class="watching-item">
                                        <span class="watching-title">{tracked.show.title.clone()}</span>
                                        <span class="watching-progress">{progress}</span>
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
                    <h3>"Continue Watching"</h3>
                    <div class="error-message">
                        {format!("Error: {}", e)}
                    </div>
                </div>
            }.into_view()
        }
    }
}

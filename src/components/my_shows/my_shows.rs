use crate::api::ApiClient;
use crate::models::TrackedPatch;
use leptos::*;

use super::show_card::ShowCard;

/// My Shows page component
#[component]
pub fn MyShows() -> impl IntoView {
    let client = ApiClient::new();
    let client_fetch = client.clone();
    let client_update = client.clone();
    let client_remove = client.clone();

    // Trigger for refetching the tracked list
    let (trigger, set_trigger) = create_signal(0);

    // Fetch tracked shows
    let shows_resource = create_local_resource(
        move || trigger.get(),
        move |_| {
            let client = client_fetch.clone();
            async move { client.get_my_shows().await }
        },
    );

    // Create action for progress/status updates
    let update_show = create_action(move |input: &(i64, TrackedPatch)| {
        let (show_id, patch) = input.clone();
        let client = client_update.clone();
        async move { client.update_tracked_show(show_id, &patch).await }
    });

    // Create action for untracking a show
    let remove_show = create_action(move |show_id: &i64| {
        let show_id = *show_id;
        let client = client_remove.clone();
        async move { client.remove_tracked_show(show_id).await }
    });

    // When an update or removal completes, refetch the list
    create_effect(move |_| {
        if update_show.value().get().is_some() || remove_show.value().get().is_some() {
            set_trigger.update(|n| *n += 1);
        }
    });

    // Manual refresh button handler
    let refresh = move |_| {
        set_trigger.update(|n| *n += 1);
    };

    view! {
        <div class="my-shows-page">
            <div class="my-shows-header">
                <h2>"My Shows"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Refresh"
                </button>
            </div>

            <Suspense fallback=move || view! {
                <div class="loading">"Loading your shows..."</div>
            }>
                {move || {
                    shows_resource.get().map(|result| {
                        match result {
                            Ok(response) if response.shows.is_empty() => {
                                view! {
                                    <div class="no-data">"You are not tracking any shows yet"</div>
                                }.into_view()
                            }
                            Ok(response) => {
                                view! {
                                    <div class="shows-grid">
                                        <For
                                            each=move || response.shows.clone()
                                            key=|tracked| tracked.show.show_id
                                            children=move |tracked| {
                                                let is_pending = update_show.pending();

                                                view! {
                                                    <ShowCard
                                                        tracked=tracked
                                                        on_update=update_show
                                                        on_remove=remove_show
                                                        is_pending=is_pending.into()
                                                    />
                                                }
                                            }
                                        />
                                    </div>
                                }.into_view()
                            }
                            Err(e) => {
                                view! {
                                    <div class="error-banner">
                                        <strong>"Error loading shows:"</strong>
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

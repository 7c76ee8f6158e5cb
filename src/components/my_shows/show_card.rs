use crate::api::ApiError;
use crate::models::{TrackedPatch, TrackedShow, WatchStatus};
use leptos::*;

/// Card for a single tracked show with an episode progress stepper
#[component]
pub fn ShowCard(
    tracked: TrackedShow,
    on_update: Action<(i64, TrackedPatch), Result<TrackedShow, ApiError>>,
    on_remove: Action<i64, Result<(), ApiError>>,
    is_pending: Signal<bool>,
) -> impl IntoView {
    let show_id = tracked.show.show_id;
    let watched = tracked.episodes_watched;
    let total = tracked.episodes_total;
    let status = tracked.status;

    let year = tracked
        .show
        .first_air_year()
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();

    let on_decrement = move |_| {
        let patch = progress_patch(watched - 1, total);
        on_update.dispatch((show_id, patch));
    };

    let on_increment = move |_| {
        let patch = progress_patch(watched + 1, total);
        on_update.dispatch((show_id, patch));
    };

    view! {
        <div class="show-card">
            <div class="show-card-header">
                <h3>{tracked.show.title.clone()}{year}</h3>
                <span class=status.css_class()>{status.as_str()}</span>
                <button
                    class="remove-button"
                    on:click=move |_| on_remove.dispatch(show_id)
                    disabled=move || is_pending.get()
                    aria-label="Stop tracking this show"
                >
                    "Remove"
                </button>
            </div>

            {tracked.next_air_date.clone().map(|date| {
                view! {
                    <div class="next-airing">
                        "Next episode: " {date}
                    </div>
                }
            })}

            <div class="show-progress">
                <span class="progress-label">"Progress"</span>
                <div class="progress-controls">
                    <button
                        class="adjust-button"
                        on:click=on_decrement
                        disabled=move || is_pending.get() || watched == 0
                        aria-label="Mark previous episode unwatched"
                    >
                        "-"
                    </button>
                    <span class="progress-value">{tracked.progress_text()}</span>
                    <button
                        class="adjust-button"
                        on:click=on_increment
                        disabled=move || is_pending.get() || is_caught_up(watched, total)
                        aria-label="Mark next episode watched"
                    >
                        "+"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Build a patch for the new progress value; reaching the final episode also
/// flips the status to completed.
fn progress_patch(episodes_watched: i32, episodes_total: Option<i32>) -> TrackedPatch {
    let episodes_watched = episodes_watched.max(0);
    let status = match episodes_total {
        Some(total) if episodes_watched >= total => Some(WatchStatus::Completed),
        _ => None,
    };

    TrackedPatch {
        status,
        episodes_watched: Some(episodes_watched),
    }
}

/// True when every known episode has been watched
fn is_caught_up(watched: i32, total: Option<i32>) -> bool {
    match total {
        Some(total) => watched >= total,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_patch_clamps_to_zero() {
        let patch = progress_patch(-1, Some(10));
        assert_eq!(patch.episodes_watched, Some(0));
        assert_eq!(patch.status, None);
    }

    #[test]
    fn finishing_the_last_episode_completes_the_show() {
        let patch = progress_patch(62, Some(62));
        assert_eq!(patch.episodes_watched, Some(62));
        assert_eq!(patch.status, Some(WatchStatus::Completed));
    }

    #[test]
    fn unknown_total_never_completes() {
        let patch = progress_patch(100, None);
        assert_eq!(patch.status, None);
        assert!(!is_caught_up(100, None));
        assert!(is_caught_up(10, Some(10)));
    }
}

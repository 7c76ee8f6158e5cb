use chrono::NaiveDate;
use leptos::*;

use crate::api::ApiClient;
use crate::models::EpisodeAiring;

/// How far ahead the calendar looks
const UPCOMING_DAYS: u32 = 14;

/// Calendar page listing upcoming airings grouped by day
#[component]
pub fn Calendar() -> impl IntoView {
    let client = ApiClient::new();
    let client_fetch = client.clone();

    let (trigger, set_trigger) = create_signal(0);
    let upcoming = create_local_resource(
        move || trigger.get(),
        move |_| {
            let client = client_fetch.clone();
            async move { client.get_upcoming_airings(UPCOMING_DAYS).await }
        },
    );

    // Refetch every 10 minutes
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(600_000, move || {
            set_trigger.update(|n| *n += 1);
        });

        on_cleanup(move || drop(interval));
    }

    view! {
        <div class="calendar-page">
            <h2>"Calendar"</h2>

            <Suspense fallback=move || view! {
                <div class="loading">"Loading upcoming episodes..."</div>
            }>
                {move || {
                    upcoming.get().map(|result| {
                        match result {
                            Ok(airings) if airings.is_empty() => {
                                view! {
                                    <div class="no-data">
                                        "No upcoming episodes in the next two weeks"
                                    </div>
                                }.into_view()
                            }
                            Ok(airings) => {
                                let today = chrono::Local::now().date_naive();
                                let groups = group_by_air_date(airings);
                                view! {
                                    <div class="calendar-days">
                                        {groups
                                            .into_iter()
                                            .map(|(date, day_airings)| {
                                                view! {
                                                    <DaySection
                                                        label=day_label(date, today)
                                                        airings=day_airings
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }.into_view()
                            }
                            Err(e) => {
                                view! {
                                    <div class="error-banner">
                                        <strong>"Error loading calendar:"</strong>
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

/// One day's worth of airings
#[component]
fn DaySection(label: String, airings: Vec<EpisodeAiring>) -> impl IntoView {
    view! {
        <section class="calendar-day">
            <h3 class="calendar-day-label">{label}</h3>
            <ul class="airing-list">
                {airings
                    .into_iter()
                    .map(|airing| {
                        let episode = airing
                            .episode_title
                            .clone()
                            .unwrap_or_else(|| airing.code());
                        view! {
                            <li class="airing-item">
                                <span class="airing-show">{airing.show_title.clone()}</span>
                                <span class="airing-code">{airing.code()}</span>
                                <span class="airing-episode">{episode}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

/// Group airings by parsed air date, ascending. Entries with unparseable
/// dates are dropped with a warning.
fn group_by_air_date(airings: Vec<EpisodeAiring>) -> Vec<(NaiveDate, Vec<EpisodeAiring>)> {
    let mut groups: std::collections::BTreeMap<NaiveDate, Vec<EpisodeAiring>> =
        std::collections::BTreeMap::new();

    for airing in airings {
        match NaiveDate::parse_from_str(&airing.air_date, "%Y-%m-%d") {
            Ok(date) => groups.entry(date).or_default().push(airing),
            Err(_) => {
                log::warn!(
                    "Skipping airing with bad air_date {:?} for show {}",
                    airing.air_date,
                    airing.show_id
                );
            }
        }
    }

    groups.into_iter().collect()
}

/// Human label for a day relative to today
fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    let delta = (date - today).num_days();
    match delta {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A, %b %d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airing(show_id: i64, air_date: &str) -> EpisodeAiring {
        EpisodeAiring {
            show_id,
            show_title: format!("Show {}", show_id),
            season_number: 1,
            episode_number: 1,
            episode_title: None,
            air_date: air_date.to_string(),
        }
    }

    #[test]
    fn groups_are_sorted_by_date() {
        let groups = group_by_air_date(vec![
            airing(2, "2026-09-05"),
            airing(1, "2026-09-04"),
            airing(3, "2026-09-04"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, NaiveDate::from_ymd_opt(2026, 9, 4).unwrap());
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn bad_dates_are_dropped() {
        let groups = group_by_air_date(vec![airing(1, "not-a-date"), airing(2, "2026-09-04")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1[0].show_id, 2);
    }

    #[test]
    fn relative_day_labels() {
        let today = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
        assert_eq!(day_label(today, today), "Today");
        assert_eq!(day_label(today.succ_opt().unwrap(), today), "Tomorrow");
        assert_eq!(
            day_label(NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(), today),
            "Monday, Sep 07"
        );
    }
}

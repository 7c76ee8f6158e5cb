use crate::api::ApiError;
use crate::models::DashboardStats;
use leptos::*;

#[component]
pub fn StatsCard(
    data: Result<DashboardStats, ApiError>,
) -> impl IntoView {
    match data {
        Ok(stats) => {
            view! {
                <div class="card">
                    <h3>"Your Tally"</h3>
                    <div class="stats-grid">
                        <StatItem label="Shows Tracked" value=stats.shows_tracked />
                        <StatItem label="Watching Now" value=stats.shows_watching />
                        <StatItem label="Episodes Watched" value=stats.episodes_watched />
                        <StatItem label="Airing This Week" value=stats.airing_this_week />
                    </div>
                </div>
            }.into_view()
        }
        Err(e) => {
            view! {
                <div class="card card-error">
                    <h3>"Your Tally"</h3>
                    <div class="error-message">
                        {format!("Error: {}", e)}
                    </div>
                </div>
            }.into_view()
        }
    }
}

#[component]
fn StatItem(label: &'static str, value: i32) -> impl IntoView {
    view! {
        <div class="stat-item">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

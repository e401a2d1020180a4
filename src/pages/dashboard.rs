//! Dashboard landing page: a static grid of stat cards.

use leptos::prelude::*;

struct StatCard {
    title: &'static str,
    value: &'static str,
    change: &'static str,
    up: bool,
}

const STATS: [StatCard; 4] = [
    StatCard { title: "Total Users", value: "12,345", change: "5.25%", up: true },
    StatCard { title: "Revenue", value: "$45,678", change: "2.15%", up: true },
    StatCard { title: "Tasks", value: "64", change: "1.05%", up: false },
    StatCard { title: "Pending", value: "12", change: "3.55%", up: true },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__stats">
                {STATS
                    .iter()
                    .map(|stat| {
                        let change_class = if stat.up {
                            "stat-card__change stat-card__change--up"
                        } else {
                            "stat-card__change stat-card__change--down"
                        };
                        view! {
                            <div class="stat-card">
                                <h6 class="stat-card__title">{stat.title}</h6>
                                <h3 class="stat-card__value">{stat.value}</h3>
                                <span class=change_class>
                                    {if stat.up { "▲ " } else { "▼ " }}
                                    {stat.change}
                                </span>
                                <span class="stat-card__period">" Since last month"</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

use crate::dashboards::d400_traffic::api;
use crate::dashboards::d400_traffic::ui::chart::TrafficChart;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::format_thousands;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_traffic::{DashboardResponse, TimeRange};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize, Spinner};

/// Traffic overview dashboard
#[component]
pub fn TrafficDashboard() -> impl IntoView {
    // The selected range only drives the buttons; the sample data is fixed
    let time_range = RwSignal::new(TimeRange::default());

    let (data, set_data) = signal(None::<DashboardResponse>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::get_dashboard().await {
            Ok(response) => set_data.set(Some(response)),
            Err(err) => {
                log::error!("Failed to load D400 dashboard: {}", err);
                set_error.set(Some(err));
            }
        }
        set_loading.set(false);
    });

    let traffic = Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.traffic.clone()).unwrap_or_default()));

    view! {
        <PageFrame page_id="d400_traffic--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle="Storefront traffic overview">
                <div class="range-buttons">
                    {TimeRange::ALL
                        .into_iter()
                        .map(|range| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=move || {
                                    if time_range.get() == range {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                }
                                on_click=move |_| time_range.set(range)
                            >
                                {range.label()}
                            </Button>
                        })
                        .collect_view()}
                </div>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || loading.get()>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                <div class="stat-grid">
                    {move || data.get().map(|d| d.stats.into_iter().map(|tile| view! {
                        <StatCard tile=tile />
                    }).collect_view())}
                </div>

                <div class="dashboard-grid">
                    <CardAnimated class="dashboard-card dashboard-card--wide">
                        <h3 class="dashboard-card__title">"Traffic Overview"</h3>
                        <TrafficChart points=traffic />
                    </CardAnimated>

                    <CardAnimated class="dashboard-card" delay_ms=80>
                        <h3 class="dashboard-card__title">"Top Countries"</h3>
                        <ul class="country-list">
                            {move || data.get().map(|d| d.top_countries.into_iter().map(|c| view! {
                                <li class="country-list__item">
                                    <span class="country-list__name">{c.country}</span>
                                    <span class="country-list__visits">{format_thousands(c.visits)}</span>
                                </li>
                            }).collect_view())}
                        </ul>
                    </CardAnimated>
                </div>
            </div>
        </PageFrame>
    }
}

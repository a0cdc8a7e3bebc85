//! System alerts list.

use leptos::prelude::*;

use camwatch_shared::{Alert, AlertLevel};

use crate::auth::use_auth;
use crate::components::icons::RefreshCw;
use crate::remote::{Remote, load_into};

fn level_badge(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Info => "badge badge-info",
        AlertLevel::Warning => "badge badge-warning",
        AlertLevel::Critical => "badge badge-error",
    }
}

#[component]
pub fn AlertsPanel() -> impl IntoView {
    let auth = use_auth();

    let alerts = RwSignal::new(Remote::<Vec<Alert>>::default());

    let load = move || {
        if let Some(api) = auth.api() {
            load_into(alerts, async move { api.get_alerts().await });
        }
    };
    Effect::new(move |_| load());

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Alerts"</h3>
                    <button on:click=move |_| load() class="btn btn-ghost btn-circle btn-sm">
                        <RefreshCw attr:class="h-4 w-4" />
                    </button>
                </div>
                {move || match alerts.get() {
                    Remote::Idle | Remote::Loading => view! {
                        <div class="py-8 text-center">
                            <span class="loading loading-spinner loading-md"></span>
                        </div>
                    }.into_any(),
                    Remote::Failed(e) => view! {
                        <div class="alert alert-error">
                            <span>{format!("Loading alerts failed: {}", e)}</span>
                            <button on:click=move |_| load() class="btn btn-sm">"Retry"</button>
                        </div>
                    }.into_any(),
                    Remote::Loaded(list) if list.is_empty() => view! {
                        <p class="py-8 text-center text-base-content/50">"No alerts. All quiet."</p>
                    }.into_any(),
                    Remote::Loaded(list) => view! {
                        <ul class="space-y-3">
                            {list.into_iter().map(|alert| view! {
                                <li class="flex items-start gap-3 p-3 bg-base-200 rounded-box">
                                    <span class=level_badge(alert.level)>{alert.level.as_str()}</span>
                                    <div>
                                        <p class="font-semibold">{alert.title}</p>
                                        <p class="text-sm text-base-content/70">{alert.message}</p>
                                    </div>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

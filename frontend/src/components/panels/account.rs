//! Account profile and subscription plan.

use leptos::prelude::*;
use leptos::task::spawn_local;

use camwatch_shared::{ChangePlanRequest, PlanTier, Subscription};

use crate::auth::use_auth;
use crate::components::dashboard::use_notifier;
use crate::remote::{Remote, load_into};

#[component]
pub fn AccountPanel() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notifier();

    let subscription = RwSignal::new(Remote::<Subscription>::default());

    let load = move || {
        if let Some(api) = auth.api() {
            load_into(subscription, async move { api.get_subscription().await });
        }
    };
    Effect::new(move |_| load());

    let change_plan = move |plan: PlanTier| {
        let Some(api) = auth.api() else { return };
        spawn_local(async move {
            match api.change_plan(&ChangePlanRequest { plan }).await {
                Ok(()) => {
                    notify.success(format!("Switched to the {} plan", plan.as_str()));
                    load();
                }
                Err(e) => notify.error(format!("Plan change failed: {}", e)),
            }
        });
    };

    let profile = move || auth.state.get().session.map(|s| s.user);

    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Profile"</h3>
                    {move || profile().map(|user| view! {
                        <div class="space-y-1">
                            <p class="font-semibold">{user.name}</p>
                            <p class="text-sm text-base-content/70">{user.email}</p>
                        </div>
                    })}
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Subscription"</h3>
                    {move || match subscription.get() {
                        Remote::Idle | Remote::Loading => view! {
                            <div class="py-8 text-center">
                                <span class="loading loading-spinner loading-md"></span>
                            </div>
                        }.into_any(),
                        Remote::Failed(e) => view! {
                            <div class="alert alert-error">
                                <span>{format!("Loading subscription failed: {}", e)}</span>
                                <button on:click=move |_| load() class="btn btn-sm">"Retry"</button>
                            </div>
                        }.into_any(),
                        Remote::Loaded(sub) => view! {
                            <div class="space-y-4">
                                <p class="text-sm text-base-content/70">
                                    "Current plan: "
                                    <span class="font-bold capitalize">{sub.plan.as_str()}</span>
                                    " (" {sub.status.clone()} ")"
                                </p>
                                <div class="join">
                                    {PlanTier::ALL.iter().map(|tier| {
                                        let tier = *tier;
                                        let current = sub.plan == tier;
                                        view! {
                                            <button
                                                class="btn join-item capitalize"
                                                class:btn-primary=current
                                                disabled=current
                                                on:click=move |_| change_plan(tier)
                                            >
                                                {tier.as_str()}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

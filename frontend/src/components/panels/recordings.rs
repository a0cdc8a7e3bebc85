//! Recorded footage list.

use leptos::prelude::*;

use camwatch_shared::Recording;

use crate::auth::use_auth;
use crate::components::icons::RefreshCw;
use crate::remote::{Remote, load_into};

#[component]
pub fn RecordingsPanel() -> impl IntoView {
    let auth = use_auth();

    let recordings = RwSignal::new(Remote::<Vec<Recording>>::default());

    let load = move || {
        if let Some(api) = auth.api() {
            load_into(recordings, async move { api.get_recordings().await });
        }
    };
    Effect::new(move |_| load());

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Recordings"</h3>
                    <button on:click=move |_| load() class="btn btn-ghost btn-circle btn-sm">
                        <RefreshCw attr:class="h-4 w-4" />
                    </button>
                </div>
                {move || match recordings.get() {
                    Remote::Idle | Remote::Loading => view! {
                        <div class="py-8 text-center">
                            <span class="loading loading-spinner loading-md"></span>
                        </div>
                    }.into_any(),
                    Remote::Failed(e) => view! {
                        <div class="alert alert-error">
                            <span>{format!("Loading recordings failed: {}", e)}</span>
                            <button on:click=move |_| load() class="btn btn-sm">"Retry"</button>
                        </div>
                    }.into_any(),
                    Remote::Loaded(list) if list.is_empty() => view! {
                        <p class="py-8 text-center text-base-content/50">"No recordings available."</p>
                    }.into_any(),
                    Remote::Loaded(list) => view! {
                        <div class="overflow-x-auto">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Started"</th>
                                        <th>"Ended"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list.into_iter().map(|rec| view! {
                                        <tr>
                                            <td>{rec.started_at.format("%b %d, %Y %H:%M").to_string()}</td>
                                            <td>{rec.ended_at.format("%b %d, %Y %H:%M").to_string()}</td>
                                            <td>
                                                <a
                                                    href=rec.playback_url
                                                    target="_blank"
                                                    class="btn btn-ghost btn-xs"
                                                >
                                                    "Play"
                                                </a>
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

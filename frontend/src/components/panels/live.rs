//! Live camera feeds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use camwatch_shared::{Camera, CameraStatus, CreateCameraRequest};

use crate::auth::use_auth;
use crate::components::dashboard::use_notifier;
use crate::components::icons::{RefreshCw, Video};
use crate::remote::{Remote, load_into};

fn status_badge(status: CameraStatus) -> &'static str {
    match status {
        CameraStatus::Online => "badge badge-success",
        CameraStatus::Offline => "badge badge-error",
        CameraStatus::Unknown => "badge badge-ghost",
    }
}

#[component]
pub fn LivePanel() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notifier();

    let cameras = RwSignal::new(Remote::<Vec<Camera>>::default());
    let (name, set_name) = signal(String::new());
    let (location, set_location) = signal(String::new());

    let load = move || {
        if let Some(api) = auth.api() {
            load_into(cameras, async move { api.get_cameras().await });
        }
    };
    Effect::new(move |_| load());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(api) = auth.api() else { return };
        let req = CreateCameraRequest {
            name: name.get_untracked(),
            location: location.get_untracked(),
        };
        if req.name.trim().is_empty() {
            notify.error("Camera name is required");
            return;
        }
        spawn_local(async move {
            match api.add_camera(&req).await {
                Ok(()) => {
                    notify.success("Camera added");
                    set_name.set(String::new());
                    set_location.set(String::new());
                    load();
                }
                Err(e) => notify.error(format!("Adding camera failed: {}", e)),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Live cameras"</h3>
                        <button on:click=move |_| load() class="btn btn-ghost btn-circle btn-sm">
                            <RefreshCw attr:class="h-4 w-4" />
                        </button>
                    </div>
                    {move || match cameras.get() {
                        Remote::Idle | Remote::Loading => view! {
                            <div class="py-8 text-center">
                                <span class="loading loading-spinner loading-md"></span>
                            </div>
                        }.into_any(),
                        Remote::Failed(e) => view! {
                            <div class="alert alert-error">
                                <span>{format!("Loading cameras failed: {}", e)}</span>
                                <button on:click=move |_| load() class="btn btn-sm">"Retry"</button>
                            </div>
                        }.into_any(),
                        Remote::Loaded(list) if list.is_empty() => view! {
                            <p class="py-8 text-center text-base-content/50">
                                "No cameras connected yet."
                            </p>
                        }.into_any(),
                        Remote::Loaded(list) => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {list.into_iter().map(|camera| view! {
                                    <div class="card bg-base-200">
                                        <div class="card-body p-4">
                                            <div class="flex items-center justify-between">
                                                <h4 class="font-bold flex items-center gap-2">
                                                    <Video attr:class="h-4 w-4 text-primary" />
                                                    {camera.name}
                                                </h4>
                                                <span class=status_badge(camera.status)>
                                                    {camera.status.as_str()}
                                                </span>
                                            </div>
                                            <p class="text-sm text-base-content/70">{camera.location}</p>
                                            <a
                                                href=camera.stream_url
                                                target="_blank"
                                                class="link link-primary text-sm"
                                            >
                                                "Open stream"
                                            </a>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_add>
                    <h3 class="card-title">"Add a camera"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="camera-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="camera-name"
                                type="text"
                                placeholder="Front door"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="camera-location">
                                <span class="label-text">"Location"</span>
                            </label>
                            <input
                                id="camera-location"
                                type="text"
                                placeholder="Entrance, north wall"
                                on:input=move |ev| set_location.set(event_target_value(&ev))
                                prop:value=location
                                class="input input-bordered"
                            />
                        </div>
                    </div>
                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-primary btn-sm">"Add camera"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

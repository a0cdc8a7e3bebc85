//! Service bookings: list plus a booking form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use camwatch_shared::{BookServiceRequest, BookingStatus, ServiceBooking};

use crate::auth::use_auth;
use crate::components::dashboard::use_notifier;
use crate::components::icons::RefreshCw;
use crate::remote::{Remote, load_into};

const SERVICE_TYPES: [&str; 3] = ["installation", "maintenance", "inspection"];

fn status_badge(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "badge badge-warning",
        BookingStatus::Scheduled => "badge badge-info",
        BookingStatus::Completed => "badge badge-success",
        BookingStatus::Cancelled => "badge badge-ghost",
    }
}

#[component]
pub fn ServicesPanel() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notifier();

    let bookings = RwSignal::new(Remote::<Vec<ServiceBooking>>::default());
    let (service_type, set_service_type) = signal(SERVICE_TYPES[0].to_string());
    let (address, set_address) = signal(String::new());

    let load = move || {
        if let Some(api) = auth.api() {
            load_into(bookings, async move { api.get_services().await });
        }
    };
    Effect::new(move |_| load());

    let on_book = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(api) = auth.api() else { return };
        let req = BookServiceRequest {
            service_type: service_type.get_untracked(),
            address: address.get_untracked(),
        };
        if req.address.trim().is_empty() {
            notify.error("An address is required");
            return;
        }
        spawn_local(async move {
            match api.book_service(&req).await {
                Ok(()) => {
                    notify.success("Service booked");
                    set_address.set(String::new());
                    load();
                }
                Err(e) => notify.error(format!("Booking failed: {}", e)),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Your service requests"</h3>
                        <button on:click=move |_| load() class="btn btn-ghost btn-circle btn-sm">
                            <RefreshCw attr:class="h-4 w-4" />
                        </button>
                    </div>
                    {move || match bookings.get() {
                        Remote::Idle | Remote::Loading => view! {
                            <div class="py-8 text-center">
                                <span class="loading loading-spinner loading-md"></span>
                            </div>
                        }.into_any(),
                        Remote::Failed(e) => view! {
                            <div class="alert alert-error">
                                <span>{format!("Loading bookings failed: {}", e)}</span>
                                <button on:click=move |_| load() class="btn btn-sm">"Retry"</button>
                            </div>
                        }.into_any(),
                        Remote::Loaded(list) if list.is_empty() => view! {
                            <p class="py-8 text-center text-base-content/50">"No service requests yet."</p>
                        }.into_any(),
                        Remote::Loaded(list) => view! {
                            <ul class="space-y-3">
                                {list.into_iter().map(|booking| view! {
                                    <li class="flex items-center justify-between p-3 bg-base-200 rounded-box">
                                        <div>
                                            <p class="font-semibold capitalize">{booking.service_type}</p>
                                            <p class="text-sm text-base-content/70">{booking.address}</p>
                                        </div>
                                        <span class=status_badge(booking.status)>
                                            {booking.status.as_str()}
                                        </span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any(),
                    }}
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_book>
                    <h3 class="card-title">"Book a service"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="service-type">
                                <span class="label-text">"Service"</span>
                            </label>
                            <select
                                id="service-type"
                                class="select select-bordered"
                                on:change=move |ev| set_service_type.set(event_target_value(&ev))
                                prop:value=service_type
                            >
                                {SERVICE_TYPES.iter().map(|t| view! {
                                    <option value=*t>{*t}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="service-address">
                                <span class="label-text">"Address"</span>
                            </label>
                            <input
                                id="service-address"
                                type="text"
                                placeholder="Where should we come?"
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                                prop:value=address
                                class="input input-bordered"
                                required
                            />
                        </div>
                    </div>
                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-primary btn-sm">"Book"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

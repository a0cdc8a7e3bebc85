//! Shopping cart and checkout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use camwatch_shared::cart::{self, CartItem};

use crate::auth::use_auth;
use crate::cart::{CartStore, place_order};
use crate::components::dashboard::use_notifier;
use crate::components::icons::Trash2;
use crate::web::BrowserStorage;

fn store() -> CartStore<BrowserStorage> {
    CartStore::new(BrowserStorage)
}

#[component]
pub fn CartPanel() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notifier();

    // Read once at mount; every mutation rewrites the persisted array
    // and mirrors it here.
    let (items, set_items) = signal(store().load());
    let (address, set_address) = signal(String::new());
    let (is_checking_out, set_is_checking_out) = signal(false);

    let totals = move || items.with(|i| cart::totals(i));

    let on_checkout = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(api) = auth.api() else { return };
        if address.get_untracked().trim().is_empty() {
            notify.error("A delivery address is required");
            return;
        }
        set_is_checking_out.set(true);
        spawn_local(async move {
            match place_order(&api, &store(), address.get_untracked()).await {
                Ok(order) => {
                    set_items.set(Vec::new());
                    set_address.set(String::new());
                    notify.success(format!("Order {} placed", order.id));
                }
                Err(e) => notify.error(e),
            }
            set_is_checking_out.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Your cart"</h3>
                <Show
                    when=move || !items.with(|i| i.is_empty())
                    fallback=|| view! {
                        <p class="py-8 text-center text-base-content/50">"Your cart is empty."</p>
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table w-full">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Price"</th>
                                    <th>"Qty"</th>
                                    <th>"Line total"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || items.get()
                                    key=|line: &CartItem| line.product_id.clone()
                                    children=move |line| {
                                        let id_dec = line.product_id.clone();
                                        let id_inc = line.product_id.clone();
                                        let id_rm = line.product_id.clone();
                                        view! {
                                            <tr>
                                                <td class="font-semibold">{line.name.clone()}</td>
                                                <td>{format!("${:.2}", line.price)}</td>
                                                <td>
                                                    <div class="join">
                                                        <button
                                                            class="btn btn-xs join-item"
                                                            on:click=move |_| set_items.set(store().decrement(&id_dec))
                                                        >
                                                            "-"
                                                        </button>
                                                        <span class="btn btn-xs join-item no-animation pointer-events-none">
                                                            {line.qty}
                                                        </span>
                                                        <button
                                                            class="btn btn-xs join-item"
                                                            on:click=move |_| set_items.set(store().increment(&id_inc))
                                                        >
                                                            "+"
                                                        </button>
                                                    </div>
                                                </td>
                                                <td>{format!("${:.2}", line.line_total())}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-error"
                                                        on:click=move |_| set_items.set(store().remove(&id_rm))
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>

                    <div class="flex flex-col items-end gap-1 mt-4 text-sm">
                        <span>{move || format!("Subtotal: ${:.2}", totals().subtotal)}</span>
                        <span>{move || format!("Tax (7%): ${:.2}", totals().tax)}</span>
                        <span class="text-lg font-bold">
                            {move || format!("Total: ${:.2}", totals().total)}
                        </span>
                    </div>

                    <form class="flex flex-wrap items-end gap-4 mt-4" on:submit=on_checkout>
                        <div class="form-control flex-1 min-w-64">
                            <label class="label" for="cart-address">
                                <span class="label-text">"Delivery address"</span>
                            </label>
                            <input
                                id="cart-address"
                                type="text"
                                placeholder="1 Main St, Springfield"
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                                prop:value=address
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <button class="btn btn-primary" disabled=move || is_checking_out.get()>
                            {move || if is_checking_out.get() {
                                view! { <span class="loading loading-spinner"></span> "Placing order..." }.into_any()
                            } else {
                                "Checkout".into_any()
                            }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

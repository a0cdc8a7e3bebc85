//! Product catalog with explicit filtering.
//!
//! The filter form refetches only on submit, not on every keystroke.
//! "Add to cart" goes straight to the cart repository; nothing touches
//! the backend until checkout.

use leptos::prelude::*;

use camwatch_shared::Product;
use camwatch_shared::cart::CartItem;

use crate::auth::use_auth;
use crate::cart::CartStore;
use crate::components::dashboard::use_notifier;
use crate::components::icons::ShoppingCart;
use crate::remote::{Remote, load_into};
use crate::web::BrowserStorage;

const CATEGORIES: [&str; 4] = ["cameras", "sensors", "alarms", "accessories"];

#[component]
pub fn ShopPanel() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notifier();

    let products = RwSignal::new(Remote::<Vec<Product>>::default());
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let load = move || {
        if let Some(api) = auth.api() {
            let search = search.get_untracked();
            let category = category.get_untracked();
            load_into(products, async move {
                api.get_products(&search, &category).await
            });
        }
    };
    Effect::new(move |_| load());

    let on_filter = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    let add_to_cart = move |product: &Product| {
        CartStore::new(BrowserStorage).add(CartItem::from_product(product));
        notify.success(format!("{} added to cart", product.name));
    };

    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body py-4 flex-row flex-wrap items-end gap-4" on:submit=on_filter>
                    <div class="form-control flex-1 min-w-48">
                        <label class="label" for="shop-search">
                            <span class="label-text">"Search"</span>
                        </label>
                        <input
                            id="shop-search"
                            type="text"
                            placeholder="Search products"
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                            prop:value=search
                            class="input input-bordered"
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="shop-category">
                            <span class="label-text">"Category"</span>
                        </label>
                        <select
                            id="shop-category"
                            class="select select-bordered"
                            on:change=move |ev| set_category.set(event_target_value(&ev))
                            prop:value=category
                        >
                            <option value="">"All categories"</option>
                            {CATEGORIES.iter().map(|c| view! {
                                <option value=*c>{*c}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <button class="btn btn-primary">"Filter"</button>
                </form>
            </div>

            {move || match products.get() {
                Remote::Idle | Remote::Loading => view! {
                    <div class="py-8 text-center">
                        <span class="loading loading-spinner loading-md"></span>
                    </div>
                }.into_any(),
                Remote::Failed(e) => view! {
                    <div class="alert alert-error">
                        <span>{format!("Loading products failed: {}", e)}</span>
                        <button on:click=move |_| load() class="btn btn-sm">"Retry"</button>
                    </div>
                }.into_any(),
                Remote::Loaded(list) if list.is_empty() => view! {
                    <p class="py-8 text-center text-base-content/50">"No products match your filter."</p>
                }.into_any(),
                Remote::Loaded(list) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {list.into_iter().map(|product| {
                            let card_product = product.clone();
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    {product.images.first().cloned().map(|src| view! {
                                        <figure class="h-40 bg-base-200">
                                            <img src=src alt=product.name.clone() class="object-cover h-full w-full" />
                                        </figure>
                                    })}
                                    <div class="card-body p-4">
                                        <div class="flex items-center justify-between">
                                            <h4 class="card-title text-base">{product.name.clone()}</h4>
                                            <span class="badge badge-outline">{product.category.clone()}</span>
                                        </div>
                                        <p class="text-sm text-base-content/70">{product.description.clone()}</p>
                                        <div class="flex items-center justify-between mt-2">
                                            <div>
                                                <span class="text-lg font-bold">{format!("${:.2}", product.price)}</span>
                                                <span class="text-xs text-base-content/50 ml-2">
                                                    {format!("{} in stock", product.stock)}
                                                </span>
                                            </div>
                                            <button
                                                class="btn btn-primary btn-sm gap-1"
                                                on:click=move |_| add_to_cart(&card_product)
                                            >
                                                <ShoppingCart attr:class="h-4 w-4" /> "Add"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

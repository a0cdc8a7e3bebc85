//! Admin sub-dashboard.
//!
//! Gated on the cached role flag, which is a UI convenience only: every
//! endpoint used here is authorized again by the backend. The five
//! resource lists load independently; one failing never blocks or
//! clears another.

use leptos::prelude::*;
use leptos::task::spawn_local;

use camwatch_shared::{
    Alert, AlertLevel, Camera, CreateAlertRequest, CreateProductRequest, Order, OrderStatus,
    Product, ServiceBooking, UpdateOrderStatusRequest, User,
};

use crate::auth::use_auth;
use crate::components::dashboard::use_notifier;
use crate::components::icons::Trash2;
use crate::remote::{Remote, load_into};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Cameras,
    Products,
    Orders,
    Services,
    SendAlert,
}

impl AdminTab {
    const ALL: [AdminTab; 6] = [
        AdminTab::Users,
        AdminTab::Cameras,
        AdminTab::Products,
        AdminTab::Orders,
        AdminTab::Services,
        AdminTab::SendAlert,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Users => "Users",
            AdminTab::Cameras => "Cameras",
            AdminTab::Products => "Products",
            AdminTab::Orders => "Orders",
            AdminTab::Services => "Services",
            AdminTab::SendAlert => "Send alert",
        }
    }
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notifier();

    let is_admin = move || {
        auth.state
            .get()
            .session
            .is_some_and(|s| s.user.role.is_admin())
    };

    let (active, set_active) = signal(AdminTab::Users);

    let users = RwSignal::new(Remote::<Vec<User>>::default());
    let cameras = RwSignal::new(Remote::<Vec<Camera>>::default());
    let products = RwSignal::new(Remote::<Vec<Product>>::default());
    let orders = RwSignal::new(Remote::<Vec<Order>>::default());
    let services = RwSignal::new(Remote::<Vec<ServiceBooking>>::default());
    let alerts = RwSignal::new(Remote::<Vec<Alert>>::default());

    let load_users = move || {
        if let Some(api) = auth.api() {
            load_into(users, async move { api.admin_users().await });
        }
    };
    let load_cameras = move || {
        if let Some(api) = auth.api() {
            load_into(cameras, async move { api.admin_cameras().await });
        }
    };
    let load_products = move || {
        if let Some(api) = auth.api() {
            load_into(products, async move { api.get_products("", "").await });
        }
    };
    let load_orders = move || {
        if let Some(api) = auth.api() {
            load_into(orders, async move { api.admin_orders().await });
        }
    };
    let load_services = move || {
        if let Some(api) = auth.api() {
            load_into(services, async move { api.admin_services().await });
        }
    };
    let load_alerts = move || {
        if let Some(api) = auth.api() {
            load_into(alerts, async move { api.get_alerts().await });
        }
    };

    Effect::new(move |_| {
        if !is_admin() {
            return;
        }
        load_users();
        load_cameras();
        load_products();
        load_orders();
        load_services();
        load_alerts();
    });

    // Product creation form
    let (p_name, set_p_name) = signal(String::new());
    let (p_desc, set_p_desc) = signal(String::new());
    let (p_category, set_p_category) = signal(String::new());
    let (p_price, set_p_price) = signal(String::new());
    let (p_stock, set_p_stock) = signal(String::new());

    let on_create_product = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(api) = auth.api() else { return };
        let Ok(price) = p_price.get_untracked().trim().parse::<f64>() else {
            notify.error("Price must be a number");
            return;
        };
        let stock = p_stock.get_untracked().trim().parse::<u32>().unwrap_or(0);
        let req = CreateProductRequest {
            name: p_name.get_untracked(),
            description: p_desc.get_untracked(),
            category: p_category.get_untracked(),
            price,
            stock,
            images: Vec::new(),
        };
        if req.name.trim().is_empty() {
            notify.error("Product name is required");
            return;
        }
        spawn_local(async move {
            match api.create_product(&req).await {
                Ok(()) => {
                    notify.success("Product created");
                    set_p_name.set(String::new());
                    set_p_desc.set(String::new());
                    set_p_category.set(String::new());
                    set_p_price.set(String::new());
                    set_p_stock.set(String::new());
                    load_products();
                }
                Err(e) => notify.error(format!("Creating product failed: {}", e)),
            }
        });
    };

    let delete_product = move |id: String| {
        let Some(api) = auth.api() else { return };
        spawn_local(async move {
            match api.delete_product(&id).await {
                Ok(()) => {
                    notify.success("Product deleted");
                    load_products();
                }
                Err(e) => notify.error(format!("Deleting product failed: {}", e)),
            }
        });
    };

    let set_order_status = move |id: String, status: OrderStatus| {
        let Some(api) = auth.api() else { return };
        spawn_local(async move {
            match api
                .update_order_status(&id, &UpdateOrderStatusRequest { status })
                .await
            {
                Ok(()) => {
                    notify.success("Order updated");
                    load_orders();
                }
                Err(e) => notify.error(format!("Updating order failed: {}", e)),
            }
        });
    };

    // Alert form
    let (a_title, set_a_title) = signal(String::new());
    let (a_message, set_a_message) = signal(String::new());
    let (a_level, set_a_level) = signal(AlertLevel::Info);

    let on_send_alert = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(api) = auth.api() else { return };
        let req = CreateAlertRequest {
            title: a_title.get_untracked(),
            message: a_message.get_untracked(),
            level: a_level.get_untracked(),
        };
        if req.title.trim().is_empty() {
            notify.error("An alert title is required");
            return;
        }
        spawn_local(async move {
            match api.send_alert(&req).await {
                Ok(()) => {
                    notify.success("Alert sent");
                    set_a_title.set(String::new());
                    set_a_message.set(String::new());
                    load_alerts();
                }
                Err(e) => notify.error(format!("Sending alert failed: {}", e)),
            }
        });
    };

    let users_view = move || match users.get() {
        Remote::Idle | Remote::Loading => spinner(),
        Remote::Failed(e) => failed("users", e, load_users),
        Remote::Loaded(list) if list.is_empty() => empty("No users."),
        Remote::Loaded(list) => view! {
            <table class="table table-zebra w-full">
                <thead>
                    <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th></tr>
                </thead>
                <tbody>
                    {list.into_iter().map(|user| view! {
                        <tr>
                            <td>{user.name}</td>
                            <td>{user.email}</td>
                            <td>
                                <span class="badge badge-outline">
                                    {if user.role.is_admin() { "admin" } else { "user" }}
                                </span>
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    let cameras_view = move || match cameras.get() {
        Remote::Idle | Remote::Loading => spinner(),
        Remote::Failed(e) => failed("cameras", e, load_cameras),
        Remote::Loaded(list) if list.is_empty() => empty("No cameras registered."),
        Remote::Loaded(list) => view! {
            <table class="table table-zebra w-full">
                <thead>
                    <tr><th>"Name"</th><th>"Location"</th><th>"Status"</th></tr>
                </thead>
                <tbody>
                    {list.into_iter().map(|camera| view! {
                        <tr>
                            <td>{camera.name}</td>
                            <td>{camera.location}</td>
                            <td>{camera.status.as_str()}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    let products_view = move || match products.get() {
        Remote::Idle | Remote::Loading => spinner(),
        Remote::Failed(e) => failed("products", e, load_products),
        Remote::Loaded(list) if list.is_empty() => empty("No products in the catalog."),
        Remote::Loaded(list) => view! {
            <table class="table table-zebra w-full">
                <thead>
                    <tr><th>"Name"</th><th>"Category"</th><th>"Price"</th><th>"Stock"</th><th></th></tr>
                </thead>
                <tbody>
                    {list.into_iter().map(|product| {
                        let id = product.id.clone();
                        view! {
                            <tr>
                                <td>{product.name}</td>
                                <td>{product.category}</td>
                                <td>{format!("${:.2}", product.price)}</td>
                                <td>{product.stock}</td>
                                <td>
                                    <button
                                        class="btn btn-ghost btn-xs text-error"
                                        on:click=move |_| delete_product(id.clone())
                                    >
                                        <Trash2 attr:class="h-4 w-4" />
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    let orders_view = move || match orders.get() {
        Remote::Idle | Remote::Loading => spinner(),
        Remote::Failed(e) => failed("orders", e, load_orders),
        Remote::Loaded(list) if list.is_empty() => empty("No orders yet."),
        Remote::Loaded(list) => view! {
            <table class="table table-zebra w-full">
                <thead>
                    <tr><th>"Order"</th><th>"Placed"</th><th>"Total"</th><th>"Status"</th></tr>
                </thead>
                <tbody>
                    {list.into_iter().map(|order| {
                        let id = order.id.clone();
                        let current = order.status;
                        view! {
                            <tr>
                                <td class="font-mono text-xs">{order.id.clone()}</td>
                                <td>{order.created_at.format("%b %d, %Y").to_string()}</td>
                                <td>{format!("${:.2}", order.total)}</td>
                                <td>
                                    <select
                                        class="select select-bordered select-xs"
                                        on:change=move |ev| {
                                            let status = OrderStatus::from_str_or_default(
                                                &event_target_value(&ev),
                                            );
                                            set_order_status(id.clone(), status);
                                        }
                                        prop:value=current.as_str().to_string()
                                    >
                                        {OrderStatus::ALL.iter().map(|s| view! {
                                            <option value=s.as_str() selected=*s == current>
                                                {s.as_str()}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    let services_view = move || match services.get() {
        Remote::Idle | Remote::Loading => spinner(),
        Remote::Failed(e) => failed("service requests", e, load_services),
        Remote::Loaded(list) if list.is_empty() => empty("No service requests."),
        Remote::Loaded(list) => view! {
            <table class="table table-zebra w-full">
                <thead>
                    <tr><th>"Service"</th><th>"Address"</th><th>"Status"</th></tr>
                </thead>
                <tbody>
                    {list.into_iter().map(|booking| view! {
                        <tr>
                            <td class="capitalize">{booking.service_type}</td>
                            <td>{booking.address}</td>
                            <td>{booking.status.as_str()}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    let alerts_view = move || match alerts.get() {
        Remote::Idle | Remote::Loading => spinner(),
        Remote::Failed(e) => failed("alerts", e, load_alerts),
        Remote::Loaded(list) if list.is_empty() => empty("No alerts sent yet."),
        Remote::Loaded(list) => view! {
            <ul class="space-y-2">
                {list.into_iter().map(|alert| view! {
                    <li class="flex items-center gap-3 p-2 bg-base-200 rounded-box text-sm">
                        <span class="badge badge-outline">{alert.level.as_str()}</span>
                        <span class="font-semibold">{alert.title}</span>
                        <span class="text-base-content/70">{alert.message}</span>
                    </li>
                }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <Show
            when=is_admin
            fallback=|| view! {
                <div class="alert alert-warning">
                    <span>"Administrator access required."</span>
                </div>
            }
        >
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Administration"</h3>
                    <div role="tablist" class="tabs tabs-bordered">
                        {AdminTab::ALL.iter().map(|tab| {
                            let tab = *tab;
                            view! {
                                <a
                                    role="tab"
                                    class="tab"
                                    class:tab-active=move || active.get() == tab
                                    on:click=move |_| set_active.set(tab)
                                >
                                    {tab.label()}
                                </a>
                            }
                        }).collect_view()}
                    </div>

                    <div class="overflow-x-auto mt-4">
                        {move || match active.get() {
                            AdminTab::Users => users_view().into_any(),
                            AdminTab::Cameras => cameras_view().into_any(),
                            AdminTab::Orders => orders_view().into_any(),
                            AdminTab::Services => services_view().into_any(),
                            AdminTab::Products => view! {
                                <div class="space-y-6">
                                    {products_view()}
                                    <form class="space-y-3" on:submit=on_create_product>
                                        <h4 class="font-bold">"New product"</h4>
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                                            <input
                                                type="text"
                                                placeholder="Name"
                                                class="input input-bordered input-sm"
                                                on:input=move |ev| set_p_name.set(event_target_value(&ev))
                                                prop:value=p_name
                                                required
                                            />
                                            <input
                                                type="text"
                                                placeholder="Category"
                                                class="input input-bordered input-sm"
                                                on:input=move |ev| set_p_category.set(event_target_value(&ev))
                                                prop:value=p_category
                                            />
                                            <input
                                                type="text"
                                                placeholder="Price"
                                                class="input input-bordered input-sm"
                                                on:input=move |ev| set_p_price.set(event_target_value(&ev))
                                                prop:value=p_price
                                                required
                                            />
                                            <input
                                                type="text"
                                                placeholder="Stock"
                                                class="input input-bordered input-sm"
                                                on:input=move |ev| set_p_stock.set(event_target_value(&ev))
                                                prop:value=p_stock
                                            />
                                        </div>
                                        <textarea
                                            placeholder="Description"
                                            class="textarea textarea-bordered w-full"
                                            on:input=move |ev| set_p_desc.set(event_target_value(&ev))
                                            prop:value=p_desc
                                        ></textarea>
                                        <div class="flex justify-end">
                                            <button class="btn btn-primary btn-sm">"Create product"</button>
                                        </div>
                                    </form>
                                </div>
                            }.into_any(),
                            AdminTab::SendAlert => view! {
                                <div class="space-y-6">
                                    <form class="space-y-3 max-w-lg" on:submit=on_send_alert>
                                        <input
                                            type="text"
                                            placeholder="Title"
                                            class="input input-bordered w-full"
                                            on:input=move |ev| set_a_title.set(event_target_value(&ev))
                                            prop:value=a_title
                                            required
                                        />
                                        <textarea
                                            placeholder="Message"
                                            class="textarea textarea-bordered w-full"
                                            on:input=move |ev| set_a_message.set(event_target_value(&ev))
                                            prop:value=a_message
                                        ></textarea>
                                        <select
                                            class="select select-bordered"
                                            on:change=move |ev| set_a_level.set(
                                                AlertLevel::from_str_or_default(&event_target_value(&ev)),
                                            )
                                        >
                                            {AlertLevel::ALL.iter().map(|level| view! {
                                                <option value=level.as_str()>{level.as_str()}</option>
                                            }).collect_view()}
                                        </select>
                                        <div class="flex justify-end">
                                            <button class="btn btn-primary btn-sm">"Send alert"</button>
                                        </div>
                                    </form>
                                    {alerts_view()}
                                </div>
                            }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn spinner() -> AnyView {
    view! {
        <div class="py-8 text-center">
            <span class="loading loading-spinner loading-md"></span>
        </div>
    }
    .into_any()
}

fn empty(msg: &'static str) -> AnyView {
    view! { <p class="py-8 text-center text-base-content/50">{msg}</p> }.into_any()
}

fn failed(what: &'static str, e: String, retry: impl Fn() + Copy + Send + 'static) -> AnyView {
    view! {
        <div class="alert alert-error">
            <span>{format!("Loading {} failed: {}", what, e)}</span>
            <button on:click=move |_| retry() class="btn btn-sm">"Retry"</button>
        </div>
    }
    .into_any()
}

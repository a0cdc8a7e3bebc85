//! Tabbed dashboard container.
//!
//! Only the active tab's panel is mounted; each panel fetches its own
//! data on mount and owns its own display state. The Admin tab is shown
//! only for admin sessions (a UI convenience; the backend authorizes
//! every admin call independently).

use std::time::Duration;

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::layout::Shell;
use crate::components::panels::account::AccountPanel;
use crate::components::panels::admin::AdminPanel;
use crate::components::panels::alerts::AlertsPanel;
use crate::components::panels::cart::CartPanel;
use crate::components::panels::live::LivePanel;
use crate::components::panels::recordings::RecordingsPanel;
use crate::components::panels::services::ServicesPanel;
use crate::components::panels::shop::ShopPanel;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Live,
    Recordings,
    Alerts,
    Shop,
    Cart,
    Services,
    Account,
    Admin,
}

impl Tab {
    const USER_TABS: [Tab; 7] = [
        Tab::Live,
        Tab::Recordings,
        Tab::Alerts,
        Tab::Shop,
        Tab::Cart,
        Tab::Services,
        Tab::Account,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tab::Live => "Live",
            Tab::Recordings => "Recordings",
            Tab::Alerts => "Alerts",
            Tab::Shop => "Shop",
            Tab::Cart => "Cart",
            Tab::Services => "Services",
            Tab::Account => "Account",
            Tab::Admin => "Admin",
        }
    }
}

/// Toast handle shared with the panels: (message, is_error).
#[derive(Clone, Copy)]
pub struct Notifier {
    set: WriteSignal<Option<(String, bool)>>,
}

impl Notifier {
    pub fn success(&self, msg: impl Into<String>) {
        self.set.set(Some((msg.into(), false)));
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.set.set(Some((msg.into(), true)));
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier should be provided")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let (active, set_active) = signal(Tab::Live);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);
    provide_context(Notifier {
        set: set_notification,
    });

    let is_admin = move || {
        auth.state
            .get()
            .session
            .is_some_and(|s| s.user.role.is_admin())
    };

    // Clear the toast after 3 seconds.
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                Duration::from_secs(3),
            );
        }
    });

    view! {
        <Shell>
            <div class="max-w-7xl mx-auto space-y-6">
                <Show when=move || notification.get().is_some()>
                    <div class="toast toast-top toast-end z-50">
                        <div class=move || {
                            match notification.get() {
                                Some((_, true)) => "alert alert-error shadow-lg",
                                _ => "alert alert-success shadow-lg",
                            }
                        }>
                            <span>{move || notification.get().map(|(msg, _)| msg)}</span>
                        </div>
                    </div>
                </Show>

                <div role="tablist" class="tabs tabs-boxed bg-base-100 shadow">
                    {Tab::USER_TABS
                        .iter()
                        .map(|tab| {
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
                        })
                        .collect_view()}
                    <Show when=is_admin>
                        <a
                            role="tab"
                            class="tab"
                            class:tab-active=move || active.get() == Tab::Admin
                            on:click=move |_| set_active.set(Tab::Admin)
                        >
                            "Admin"
                        </a>
                    </Show>
                </div>

                {move || match active.get() {
                    Tab::Live => view! { <LivePanel /> }.into_any(),
                    Tab::Recordings => view! { <RecordingsPanel /> }.into_any(),
                    Tab::Alerts => view! { <AlertsPanel /> }.into_any(),
                    Tab::Shop => view! { <ShopPanel /> }.into_any(),
                    Tab::Cart => view! { <CartPanel /> }.into_any(),
                    Tab::Services => view! { <ServicesPanel /> }.into_any(),
                    Tab::Account => view! { <AccountPanel /> }.into_any(),
                    Tab::Admin => view! { <AdminPanel /> }.into_any(),
                }}
            </div>
        </Shell>
    }
}

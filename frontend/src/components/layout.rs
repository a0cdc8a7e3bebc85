//! Fixed header/footer frame around the signed-in experience.

use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, ShieldCheck};

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth = use_auth();

    let user_name = move || {
        auth.state
            .get()
            .session
            .map(|s| s.user.name)
            .unwrap_or_default()
    };
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <header class="navbar bg-base-100 shadow-md px-4">
                <div class="flex-1 gap-2">
                    <ShieldCheck attr:class="h-6 w-6 text-primary" />
                    <span class="text-xl font-bold">"CamWatch"</span>
                </div>
                <div class="flex-none gap-3">
                    <span class="text-sm text-base-content/70 hidden md:inline">{user_name}</span>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut attr:class="h-4 w-4" /> "Log out"
                    </button>
                </div>
            </header>
            <main class="flex-1 p-4 md:p-8">{children()}</main>
            <footer class="footer footer-center p-4 bg-base-100 text-base-content/60 text-sm">
                <p>"CamWatch · security monitoring and hardware"</p>
            </footer>
        </div>
    }
}

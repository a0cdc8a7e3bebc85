//! Login / registration screen.
//!
//! One form, two modes. Submission errors render inline on the form;
//! a successful submit updates the session context, which flips the
//! root view over to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{login, register, use_auth};
use crate::components::icons::ShieldCheck;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

#[component]
pub fn AuthScreen() -> impl IntoView {
    let auth = use_auth();

    let (mode, set_mode) = signal(Mode::Login);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }
        if mode.get() == Mode::Register && name.get().trim().is_empty() {
            set_error_msg.set(Some("Please enter your name".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = match mode.get_untracked() {
                Mode::Login => login(&auth, email.get_untracked(), password.get_untracked()).await,
                Mode::Register => {
                    register(
                        &auth,
                        name.get_untracked(),
                        email.get_untracked(),
                        password.get_untracked(),
                    )
                    .await
                }
            };
            if let Err(e) = result {
                set_error_msg.set(Some(e));
            }
            set_is_submitting.set(false);
        });
    };

    let toggle_mode = move |_| {
        set_error_msg.set(None);
        set_mode.update(|m| {
            *m = match m {
                Mode::Login => Mode::Register,
                Mode::Register => Mode::Login,
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"CamWatch"</h1>
                        <p class="text-base-content/70">
                            {move || match mode.get() {
                                Mode::Login => "Sign in to your dashboard",
                                Mode::Register => "Create your account",
                            }}
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show when=move || mode.get() == Mode::Register>
                            <div class="form-control">
                                <label class="label" for="name">
                                    <span class="label-text">"Name"</span>
                                </label>
                                <input
                                    id="name"
                                    type="text"
                                    placeholder="Ada Lovelace"
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    prop:value=name
                                    class="input input-bordered"
                                />
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any()
                                } else if mode.get() == Mode::Login {
                                    "Sign in".into_any()
                                } else {
                                    "Create account".into_any()
                                }}
                            </button>
                        </div>
                        <div class="text-center mt-2">
                            <a class="link link-hover text-sm" on:click=toggle_mode>
                                {move || match mode.get() {
                                    Mode::Login => "No account yet? Register",
                                    Mode::Register => "Already registered? Sign in",
                                }}
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

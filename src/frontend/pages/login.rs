//! Sign-in page

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api::HttpAuthApi;
use crate::config::ApiConfig;
use crate::frontend::components::{Button, EmailInput, ErrorAlert, PasswordInput};
use crate::services::{BrowserTokenStore, LoginFlow, MountScope, Route, SubmitGate, SubmitOutcome};
use crate::types::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let scope = MountScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let gate = SubmitGate::observed(move |phase| {
        busy.try_set(phase.is_submitting());
    });
    let go = move |route: Route| navigate(route.path(), NavigateOptions::default());
    let flow = Rc::new(
        LoginFlow::new(HttpAuthApi::new(config), BrowserTokenStore, go)
            .with_gate(gate)
            .with_scope(scope),
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if flow.gate().is_busy() {
            return;
        }
        error.set(None);

        let flow = flow.clone();
        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            if let SubmitOutcome::Failed(text) = flow.submit(request).await {
                error.try_set(Some(text));
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-br from-indigo-950 via-[#311188] to-indigo-950">
            <div class="w-full max-w-md">
                <div class="bg-indigo-950/70 backdrop-blur-sm border border-indigo-300/10 rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <a href=Route::Landing.path() class="inline-block text-3xl font-bold text-violet-200 mb-4">"Signavox"</a>
                        <h1 class="text-2xl font-bold text-white">"Welcome Back"</h1>
                        <p class="text-indigo-200/80 mt-2">"Sign in to your portal"</p>
                    </div>

                    {move || error.get().map(|message| view! { <ErrorAlert message=message /> })}

                    <form on:submit=on_submit class="space-y-5">
                        <EmailInput label="Email" value=email />
                        <PasswordInput label="Password" value=password />
                        <Button
                            label="Sign In"
                            loading=busy
                            loading_text="Signing in..."
                        />
                    </form>
                </div>

                <a href=Route::Landing.path() class="block text-center text-indigo-300 hover:text-white mt-6 text-sm transition-colors">
                    "← Back to home"
                </a>
            </div>
        </div>
    }
}

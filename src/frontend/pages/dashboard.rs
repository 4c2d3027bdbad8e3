//! Landing spot after a successful sign-in

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::services::{BrowserTokenStore, Route, TokenStore, TOKEN_KEY};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let signed_in = BrowserTokenStore.token().ok().flatten().is_some();

    let sign_out = move |_| {
        if let Err(e) = BrowserTokenStore.remove(TOKEN_KEY) {
            log::warn!("could not clear session: {}", e);
        }
        navigate(Route::Landing.path(), NavigateOptions::default());
    };

    view! {
        <div class="min-h-screen bg-indigo-950 text-white">
            <nav class="flex items-center justify-between px-6 py-4 border-b border-indigo-300/10">
                <span class="text-xl font-bold text-violet-200">"Signavox Portal"</span>
                <button
                    class="px-4 py-2 rounded-lg border border-indigo-300/40 text-sm hover:bg-indigo-900/40"
                    on:click=sign_out
                >
                    "Sign out"
                </button>
            </nav>
            <div class="max-w-3xl mx-auto px-6 py-16 text-center">
                {if signed_in {
                    view! {
                        <h1 class="text-3xl font-bold mb-4">"Dashboard"</h1>
                        <p class="text-indigo-200/80">"Your workspace is being prepared."</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <h1 class="text-3xl font-bold mb-4">"You are not signed in"</h1>
                        <a href=Route::Login.path() class="text-violet-300 hover:text-white">"Go to login →"</a>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::services::Route;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 backdrop-blur-md bg-indigo-950/80 border-b border-indigo-300/10">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href=Route::Landing.path() class="flex items-center gap-3">
                    <span class="text-2xl font-bold bg-gradient-to-r from-violet-300 to-indigo-200 bg-clip-text text-transparent">
                        "Signavox"
                    </span>
                </a>
                <div class="flex items-center gap-6">
                    <a href="#features" class="text-indigo-200 hover:text-white transition-colors">"Why us"</a>
                    <a href="#register" class="text-indigo-200 hover:text-white transition-colors">"Apply"</a>
                    <a href=Route::Login.path() class="px-4 py-2 rounded-lg border border-indigo-300/40 text-sm text-indigo-100 hover:bg-indigo-900/40">
                        "Login"
                    </a>
                </div>
            </div>
        </nav>
    }
}

//! 404 page

use leptos::prelude::*;

use crate::services::Route;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-gradient-to-br from-indigo-950 via-[#311188] to-indigo-950">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold bg-gradient-to-r from-violet-300 to-indigo-200 bg-clip-text text-transparent mb-4">
                    "404"
                </h1>
                <p class="text-2xl font-semibold text-white mb-2">"Page not found"</p>
                <p class="text-indigo-200/80 mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a href=Route::Landing.path() class="px-6 py-3 rounded-lg bg-violet-600 hover:bg-violet-700 text-white font-medium">
                    "Return Home"
                </a>
            </div>
        </div>
    }
}

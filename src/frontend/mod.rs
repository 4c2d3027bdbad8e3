pub mod components;
pub mod pages;

#[cfg(feature = "csr")]
pub mod console_log;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ApiConfig;
use pages::{DashboardPage, LandingPage, LoginPage, NotFound};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_build_env());

    view! {
        <Title text="Signavox - Internship Portal"/>
        <Meta name="description" content="Apply for the Signavox internship programme or sign in to your portal"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}

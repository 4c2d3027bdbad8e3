use leptos::prelude::*;

use super::RegistrationForm;
use crate::frontend::components::{FeatureCard, Footer, Nav};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-indigo-950 via-[#311188] to-indigo-950 text-white">
            <Nav/>

            <div class="pt-28 pb-16 px-6 flex-grow">
                <div class="max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-5 gap-12 items-start">
                    // Pitch
                    <section id="features" class="lg:col-span-3 space-y-8">
                        <h1 class="text-5xl md:text-6xl font-bold leading-tight">
                            "Start your career with "<br/>
                            <span class="bg-gradient-to-r from-violet-300 via-fuchsia-300 to-indigo-200 bg-clip-text text-transparent">
                                "Signavox"
                            </span>
                        </h1>
                        <p class="text-xl text-indigo-100/80 max-w-2xl">
                            "This is not just our company, it is our legacy. Signavox stands for trust, "
                            "transformation and a fearless journey into the future."
                        </p>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <FeatureCard icon="🎓" title="Globally Recognized Certification"/>
                            <FeatureCard icon="🏅" title="Learn from IT Legends"/>
                            <FeatureCard icon="💻" title="100% Real-World Training"/>
                            <FeatureCard icon="💼" title="Internship + Job Support"/>
                        </div>
                    </section>

                    // Application
                    <section id="register" class="lg:col-span-2 flex justify-center">
                        <RegistrationForm/>
                    </section>
                </div>
            </div>

            <Footer/>
        </div>
    }
}

//! Public landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use session::dashboard_for;
use session::routes::{LOGIN_PATH, SIGNUP_PATH};

use crate::state::session::SessionState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<SessionState>();

    view! {
        <Title text="Warranty Tracker"/>
        <main class="landing-page">
            <section class="landing-page__hero">
                <h1>"Warranty Tracker"</h1>
                <p>
                    "Register your appliances, watch warranty deadlines, and book service with a technician before coverage runs out."
                </p>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="landing-page__actions">
                                <a class="btn btn--primary" href=SIGNUP_PATH>
                                    "Get started"
                                </a>
                                <a class="btn btn--ghost" href=LOGIN_PATH>
                                    "Log in"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="landing-page__actions">
                        <a class="btn btn--primary" href=move || dashboard_for(session.role())>
                            "Go to your dashboard"
                        </a>
                    </div>
                </Show>
            </section>
            <section class="landing-page__roles">
                <article>
                    <h2>"Homeowners"</h2>
                    <p>"Keep purchase dates and warranty terms for every appliance in one place."</p>
                </article>
                <article>
                    <h2>"Technicians"</h2>
                    <p>"See assigned jobs and file completion reports from the field."</p>
                </article>
                <article>
                    <h2>"Administrators"</h2>
                    <p>"Dispatch requests and notify owners before warranties lapse."</p>
                </article>
            </section>
        </main>
    }
}

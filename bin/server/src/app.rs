//! Main Leptos application component and routing.

use crate::pages::HomePage;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="datadeck"/>
        <Router>
            <Header/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Header component with the application name.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"datadeck"</a>
            </div>
        </header>
    }
}

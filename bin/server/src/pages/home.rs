//! Home page: picks an integration, takes credentials, hosts the data form.

use crate::pages::DataForm;
use datadeck_core::{Credentials, IntegrationKind, LoadError};
use leptos::prelude::*;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let (integration, set_integration) = signal(IntegrationKind::Notion);
    let (credentials_text, set_credentials_text) = signal("{}".to_string());
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let parsed_credentials =
        Memo::new(move |_| Credentials::from_json_str(&credentials_text.get()).ok());
    let credentials = Signal::derive(move || parsed_credentials.get());

    let on_error = Callback::new(move |err: LoadError| {
        set_load_error.set(Some(err.user_message()));
    });
    let on_change = Callback::new(move |()| set_load_error.set(None));

    view! {
        <div class="home-page">
            <h1>"Integrations"</h1>
            <p>"Load items from a connected service."</p>

            <div class="form-group">
                <label>"Integration Type"</label>
                <select
                    prop:value=move || integration.get().path_segment()
                    on:change=move |ev| {
                        if let Ok(kind) = event_target_value(&ev).parse::<IntegrationKind>() {
                            set_integration.set(kind);
                        }
                    }
                >
                    {IntegrationKind::ALL
                        .into_iter()
                        .map(|kind| view! {
                            <option value=kind.path_segment()>{kind.display_name()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label>"Credentials (JSON)"</label>
                <textarea
                    rows="6"
                    prop:value=move || credentials_text.get()
                    on:input=move |ev| set_credentials_text.set(event_target_value(&ev))
                ></textarea>
                {move || parsed_credentials.get().is_none().then(|| view! {
                    <p class="error">"Credentials must be valid JSON."</p>
                })}
            </div>

            {move || load_error.get().map(|message| view! {
                <div class="error-banner">
                    <strong>"Load failed"</strong>
                    <span class="error-detail">{message}</span>
                    <button class="link-btn" on:click=move |_| set_load_error.set(None)>"Dismiss"</button>
                </div>
            })}

            <DataForm
                integration=integration
                credentials=credentials
                on_error=on_error
                on_change=on_change
            />
        </div>
    }
}

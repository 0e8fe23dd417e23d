//! Data form component: load integration items, show them as cards, clear.

use crate::error::load_error_from_server_fn;
use datadeck_core::view::ItemCard as CardModel;
use datadeck_core::{
    Credentials, DataFormController, IntegrationKind, KeyedCard, LoadError, LoadedItem,
    NO_ITEMS_NOTICE, Rendered,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Outcome of one load as seen by the browser.
pub type LoadOutcome = Result<Vec<LoadedItem>, LoadError>;

/// Server function that loads items from the integration service.
///
/// Load failures are returned inside `Ok` so the browser sees the typed
/// error; `Err` means the call itself failed.
#[server]
pub async fn load_integration_items(
    kind: IntegrationKind,
    credentials: String,
) -> Result<LoadOutcome, ServerFnError> {
    use axum::Extension;
    use datadeck_core::LoadRequest;
    use datadeck_integration::LoadClient;

    let Extension(client): Extension<LoadClient> = leptos_axum::extract().await?;

    let credentials = Credentials::from_json_str(&credentials).map_err(|e| {
        tracing::debug!(error = %e, integration = %kind, "Rejected malformed credentials");
        ServerFnError::new("Credentials must be valid JSON")
    })?;

    let outcome = client.fetch(&LoadRequest::new(kind, credentials)).await;

    if let Err(e) = &outcome {
        tracing::warn!(error = %e, integration = %kind, "Integration load failed");
    }

    Ok(outcome)
}

/// Arguments for [`load_integration_items`], or `None` when the host has no
/// usable credentials and nothing should be sent.
fn load_args(
    kind: IntegrationKind,
    credentials: Option<&Credentials>,
) -> Option<(IntegrationKind, String)> {
    credentials.map(|c| (kind, c.to_json_string()))
}

/// Form that loads items for one integration and renders them.
///
/// The host supplies the integration and credentials and decides how to
/// present load errors. `None` credentials disable loading. `on_change`
/// fires after every successful load and every clear.
#[component]
pub fn DataForm(
    #[prop(into)] integration: Signal<IntegrationKind>,
    #[prop(into)] credentials: Signal<Option<Credentials>>,
    #[prop(into)] on_error: Callback<LoadError>,
    #[prop(optional, into)] on_change: Option<Callback<()>>,
) -> impl IntoView {
    let rendered = RwSignal::new(Rendered::Nothing);
    let controller = StoredValue::new_local(
        DataFormController::new()
            .on_render(move |output| {
                rendered.set(output.clone());
                if let Some(on_change) = on_change {
                    on_change.run(());
                }
            })
            .on_error(move |err| on_error.run(err.clone())),
    );

    let cannot_load = move || credentials.with(Option::is_none);

    let on_load = move |_| {
        let args = credentials
            .with_untracked(|c| load_args(integration.get_untracked(), c.as_ref()));
        let Some((kind, credentials)) = args else {
            return;
        };
        spawn_local(async move {
            let outcome = load_integration_items(kind, credentials)
                .await
                .unwrap_or_else(|e| Err(load_error_from_server_fn(e)));
            controller.update_value(|form| form.finish_load(outcome));
        });
    };

    let on_clear = move |_| controller.update_value(DataFormController::clear);

    view! {
        <div class="data-form">
            <div class="data-form-results">
                {move || match rendered.get() {
                    Rendered::Nothing => ().into_any(),
                    Rendered::NoItems => view! {
                        <p class="muted no-items">{NO_ITEMS_NOTICE}</p>
                    }.into_any(),
                    Rendered::Cards(cards) => view! {
                        <For
                            each=move || cards.clone()
                            key=|keyed: &KeyedCard| keyed.key.clone()
                            let:keyed
                        >
                            <ItemCard card=keyed.card/>
                        </For>
                    }.into_any(),
                }}
            </div>
            <div class="actions-bar">
                <button class="primary-btn" prop:disabled=cannot_load on:click=on_load>
                    "Load Data"
                </button>
                <button class="primary-btn" on:click=on_clear>"Clear Data"</button>
            </div>
        </div>
    }
}

/// A single loaded item.
#[component]
pub fn ItemCard(card: CardModel) -> impl IntoView {
    let is_placeholder = card.name.is_placeholder();
    let name = card.name.text().to_string();

    view! {
        <div class="item-card">
            <div class="item-type">{card.type_label}</div>
            <h3 class="item-name" class:placeholder=is_placeholder>{name}</h3>
            <p class="item-field"><b>"ID:"</b>" "{card.id}</p>
            {card.created.map(|created| view! {
                <p class="item-field"><b>"Created:"</b>" "{created}</p>
            })}
            {card.last_modified.map(|modified| view! {
                <p class="item-field"><b>"Last Modified:"</b>" "{modified}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_args_carry_credentials_as_json_text() {
        let creds = Credentials::from_json_str(r#"{ "token": "abc" }"#).expect("parse");
        let (kind, text) =
            load_args(IntegrationKind::HubSpot, Some(&creds)).expect("loadable");
        assert_eq!(kind, IntegrationKind::HubSpot);
        assert_eq!(text, r#"{"token":"abc"}"#);
    }

    #[test]
    fn nothing_is_sent_without_credentials() {
        assert_eq!(load_args(IntegrationKind::Notion, None), None);
    }
}

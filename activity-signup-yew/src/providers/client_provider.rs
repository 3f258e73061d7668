use crate::hooks::SignupContext;
use crate::infrastructure::{GlooActivityApi, GlooScheduler};
use crate::state::PageState;
use crate::view::ReducerView;
use activity_signup_core::{ActivityClient, ClientCommand, ClientConfig, Endpoints};
use std::rc::Rc;
use std::time::Duration;
use yew::prelude::*;

pub const DEFAULT_STATUS_DISPLAY_MS: u32 = 5_000;

/// The client wired to the browser: fetch, setTimeout and the page reducer
pub type BrowserClient = ActivityClient<GlooActivityApi, ReducerView, GlooScheduler>;

#[derive(Properties, PartialEq)]
pub struct ActivityClientProviderProps {
    /// API prefix, empty for same-origin
    #[prop_or_default]
    pub base_url: AttrValue,
    #[prop_or(DEFAULT_STATUS_DISPLAY_MS)]
    pub status_display_ms: u32,
    pub children: Children,
}

/// Owns the activity client and triggers the initial load on mount
#[function_component(ActivityClientProvider)]
pub fn activity_client_provider(props: &ActivityClientProviderProps) -> Html {
    let state = use_reducer(PageState::default);

    let client = {
        let dispatcher = state.dispatcher();
        let config = ClientConfig::new(props.base_url.to_string()).with_status_display(
            Duration::from_millis(u64::from(props.status_display_ms)),
        );

        use_memo((), move |_| -> BrowserClient {
            tracing::info!(base_url = %config.base_url, "Creating activity client");
            let api = GlooActivityApi::new(Endpoints::new(config.base_url.clone()));
            ActivityClient::new(api, ReducerView::new(dispatcher), GlooScheduler, config)
        })
    };

    let send_command = use_memo((), move |_| {
        Rc::new(move |command: ClientCommand| {
            let client = Rc::clone(&client);
            wasm_bindgen_futures::spawn_local(async move {
                let event = client.handle_command(command).await;
                if event.is_failure() {
                    tracing::warn!(?event, "Command failed");
                } else {
                    tracing::debug!(?event, "Command finished");
                }
            });
        }) as Rc<dyn Fn(ClientCommand)>
    });

    {
        let send_command = Rc::clone(&send_command);
        use_effect_with((), move |_| {
            send_command(ClientCommand::LoadActivities);
            || ()
        });
    }

    let context = SignupContext {
        state,
        send_command: (*send_command).clone(),
    };

    html! {
        <ContextProvider<SignupContext> {context}>
            {props.children.clone()}
        </ContextProvider<SignupContext>>
    }
}

use crate::components::{ActivityList, SignupForm, StatusBanner};
use crate::providers::{ActivityClientProvider, DEFAULT_STATUS_DISPLAY_MS};
use yew::prelude::*;

#[derive(Debug, Properties, PartialEq)]
pub struct AppProps {
    /// API prefix, empty for same-origin
    #[prop_or_default]
    pub base_url: AttrValue,
    #[prop_or(DEFAULT_STATUS_DISPLAY_MS)]
    pub status_display_ms: u32,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            base_url: AttrValue::default(),
            status_display_ms: DEFAULT_STATUS_DISPLAY_MS,
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ActivityClientProvider
            base_url={props.base_url.clone()}
            status_display_ms={props.status_display_ms}
        >
            <main class="app">
                <section id="activities-container">
                    <h3>{"Available Activities"}</h3>
                    <ActivityList />
                </section>

                <section id="signup-container">
                    <h3>{"Sign Up for an Activity"}</h3>
                    <SignupForm />
                    <StatusBanner />
                </section>
            </main>
        </ActivityClientProvider>
    }
}

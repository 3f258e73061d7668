use crate::hooks::use_signup;
use yew::prelude::*;

/// The `#message` element. Hidden via the `hidden` class, text kept.
#[function_component(StatusBanner)]
pub fn status_banner() -> Html {
    let signup = use_signup();
    let state = &signup.state;

    let (text, kind) = match &state.status {
        Some(status) => (status.text.clone(), Some(status.kind.css_class())),
        None => (String::new(), None),
    };

    html! {
        <div
            id="message"
            class={classes!(kind, (!state.status_visible).then_some("hidden"))}
        >
            {text}
        </div>
    }
}

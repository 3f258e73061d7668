use crate::hooks::use_signup;
use crate::state::PageAction;
use activity_signup_core::domain::copy;
use activity_signup_core::ClientCommand;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// `#signup-form` with the `#email` field and the `#activity` dropdown
#[function_component(SignupForm)]
pub fn signup_form() -> Html {
    let signup = use_signup();
    let state = signup.state.clone();
    let select_ref = use_node_ref();

    // `selected` attributes don't override a user's choice; sync the DOM value
    {
        let select_ref = select_ref.clone();
        let selected = state.selected_activity.clone();
        use_effect_with((selected, state.options.clone()), move |(selected, _)| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(selected);
            }
            || ()
        });
    }

    let on_email_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(PageAction::EmailChanged(input.value()));
        })
    };

    let on_activity_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(PageAction::ActivitySelected(select.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        let send_command = signup.send_command.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send_command(ClientCommand::Signup {
                email: state.email.clone(),
                activity: state.selected_activity.clone(),
            });
        })
    };

    html! {
        <form id="signup-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    required={true}
                    placeholder="your-email@mergington.edu"
                    value={state.email.clone()}
                    oninput={on_email_input}
                />
            </div>
            <div class="form-group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" ref={select_ref} onchange={on_activity_change}>
                    <option value="" selected={state.selected_activity.is_empty()}>
                        {copy::SELECT_PLACEHOLDER}
                    </option>
                    {for state.options.iter().map(|name| html! {
                        <option
                            key={name.clone()}
                            value={name.clone()}
                            selected={*name == state.selected_activity}
                        >
                            {name}
                        </option>
                    })}
                </select>
            </div>
            <button type="submit">{"Sign Up"}</button>
        </form>
    }
}

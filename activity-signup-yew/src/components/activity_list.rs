use super::ActivityCard;
use crate::hooks::use_signup;
use crate::state::ListState;
use activity_signup_core::domain::copy;
use activity_signup_core::ClientCommand;
use yew::prelude::*;

/// The `#activities-list` area: one card per activity, or a notice
#[function_component(ActivityList)]
pub fn activity_list() -> Html {
    let signup = use_signup();

    let on_remove = {
        let send_command = signup.send_command.clone();
        Callback::from(move |(activity, email): (String, String)| {
            send_command(ClientCommand::RemoveParticipant { activity, email });
        })
    };

    html! {
        <div id="activities-list">
            {match &signup.state.list {
                ListState::Loading => html! { <p>{copy::LOADING_NOTICE}</p> },
                ListState::Failed(notice) => html! { <p>{notice}</p> },
                ListState::Loaded(catalog) => html! {
                    <>
                        {for catalog.iter().map(|(name, activity)| html! {
                            <ActivityCard
                                key={name.to_string()}
                                name={AttrValue::from(name.to_string())}
                                activity={activity.clone()}
                                on_remove={on_remove.clone()}
                            />
                        })}
                    </>
                },
            }}
        </div>
    }
}

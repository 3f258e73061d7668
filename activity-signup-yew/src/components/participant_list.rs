use activity_signup_core::domain::copy;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParticipantListProps {
    pub activity: AttrValue,
    pub participants: Vec<String>,
    /// Emits `(activity, email)` when a remove button is clicked
    pub on_remove: Callback<(String, String)>,
}

/// Registered emails of one activity, each with a remove button
#[function_component(ParticipantList)]
pub fn participant_list(props: &ParticipantListProps) -> Html {
    if props.participants.is_empty() {
        return html! {
            <p class="no-participants">{copy::NO_PARTICIPANTS}</p>
        };
    }

    html! {
        <ul class="participants-list">
            {for props.participants.iter().enumerate().map(|(index, email)| {
                let onclick = {
                    let on_remove = props.on_remove.clone();
                    let activity = props.activity.to_string();
                    let email = email.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_remove.emit((activity.clone(), email.clone()));
                    })
                };

                // Payloads may repeat an email
                html! {
                    <li key={format!("{index}:{email}")}>
                        <span class="participant-email">{email}</span>
                        <button
                            class="participant-remove"
                            data-activity={props.activity.clone()}
                            data-email={email.clone()}
                            aria-label={format!("Remove {}", email)}
                            {onclick}
                        >
                            {"×"}
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}

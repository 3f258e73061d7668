use super::ParticipantList;
use activity_signup_core::Activity;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,
    pub on_remove: Callback<(String, String)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;

    html! {
        <div class="activity-card">
            <h4>{props.name.clone()}</h4>
            <p>{&activity.description}</p>
            <p><strong>{"Schedule:"}</strong>{" "}{&activity.schedule}</p>
            <p>
                <strong>{"Availability:"}</strong>
                {format!(" {} spots left", activity.spots_left())}
            </p>
            <div class="participants-section">
                <h5>{format!("Participants ({})", activity.participant_count())}</h5>
                <ParticipantList
                    activity={props.name.clone()}
                    participants={activity.participants.clone()}
                    on_remove={props.on_remove.clone()}
                />
            </div>
        </div>
    }
}

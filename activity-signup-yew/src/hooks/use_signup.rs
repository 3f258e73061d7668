use crate::state::PageState;
use activity_signup_core::ClientCommand;
use std::rc::Rc;
use yew::prelude::*;

/// Page state and command sink shared by the page components
#[derive(Clone)]
pub struct SignupContext {
    pub state: UseReducerHandle<PageState>,

    /// Run a command on the activity client (fire-and-forget)
    pub send_command: Rc<dyn Fn(ClientCommand)>,
}

impl PartialEq for SignupContext {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state && Rc::ptr_eq(&self.send_command, &other.send_command)
    }
}

/// Hook to access the page state and send commands
///
/// # Example
///
/// ```rust,ignore
/// use activity_signup_core::ClientCommand;
/// use activity_signup_yew::use_signup;
///
/// let signup = use_signup();
/// (signup.send_command)(ClientCommand::LoadActivities);
/// ```
#[hook]
pub fn use_signup() -> SignupContext {
    use_context::<SignupContext>().expect("use_signup must be used within an ActivityClientProvider")
}

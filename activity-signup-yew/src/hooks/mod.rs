mod use_signup;

pub use use_signup::{use_signup, SignupContext};

pub mod countdown;
pub mod registration_form;
pub mod wheel;

pub use countdown::Countdown;
pub use registration_form::RegistrationForm;
pub use wheel::{ResultDisplay, Wheel};

pub mod use_wheel_session;

pub use use_wheel_session::*;

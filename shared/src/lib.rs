//! Promotional prize wheel: eligibility rules, prize resolution and the
//! session flow shared by the browser client and the registration service.

pub mod constants;
pub mod eligibility;
pub mod prize;
pub mod rate_limit;
pub mod record;
pub mod registration;
pub mod session;
pub mod share;
pub mod store;
pub mod validation;

pub use eligibility::{evaluate, EligibilityState};
pub use prize::{resolve, resolve_rotation, PrizeCatalog, PrizeOutcome};
pub use record::{SessionRecord, NEVER_SPUN};
pub use session::{SessionController, SessionError, SessionPhase};

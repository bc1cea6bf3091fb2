use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::eligibility::EligibilityState;
use shared::prize::{claim_code, PrizeCatalog, PrizeOutcome, RESULT_REVEAL_DELAY_MS};
use shared::rate_limit::DAILY_RESET_RECHECK;
use shared::session::{SessionController, SessionError, SessionPhase};
use shared::share::ShareTarget;
use shared::validation::RegistrationForm;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::now_ms;
use crate::share::open_share;
use crate::storage::LocalStorageSlot;
use crate::transport::HttpRegistrationTransport;

type Controller = SessionController<LocalStorageSlot>;

/// Snapshot of the visitor's session for one render, plus the actions the
/// screens can take.
#[derive(Clone, PartialEq)]
pub struct WheelSession {
    pub phase: SessionPhase,
    pub state: Option<EligibilityState>,
    pub time_left: i64,
    pub outcome: Option<PrizeOutcome>,
    pub claim_code: Option<String>,
    pub error: Option<String>,
    pub catalog: Rc<PrizeCatalog>,
    pub register: Callback<RegistrationForm>,
    pub spin: Callback<()>,
    pub share: Callback<ShareTarget>,
    pub acknowledge: Callback<()>,
}

impl WheelSession {
    pub fn name(&self) -> &str {
        self.state.as_ref().map(|s| s.record.name.as_str()).unwrap_or_default()
    }

    pub fn can_spin(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.can_spin)
    }

    pub fn can_get_second_chance(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.can_get_second_chance)
    }

    pub fn daily_limit_reached(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.daily_limit_reached())
    }
}

fn report(error: &UseStateHandle<Option<String>>, result: Result<EligibilityState, SessionError>) {
    match result {
        Ok(_) => error.set(None),
        Err(e) => {
            log::warn!("Session update failed: {}", e);
            error.set(Some(e.to_string()));
        }
    }
}

#[hook]
pub fn use_wheel_session() -> WheelSession {
    let controller = use_mut_ref(|| Controller::load(LocalStorageSlot::new(), now_ms()));
    let catalog = use_memo((), |_| PrizeCatalog::taqueria());
    let error = use_state(|| None::<String>);
    let claim = use_state(|| None::<String>);
    let ticks = use_state(|| 0u64);
    let update = use_force_update();

    let (phase, time_left) = {
        let controller = controller.borrow();
        (controller.phase(), controller.time_left())
    };

    // One-second countdown; a capped visitor with no countdown re-checks
    // for the daily reset at a slower pace. Every tick bumps `ticks` so the
    // timer re-arms even when phase and time left come out unchanged.
    {
        let controller = controller.clone();
        let ticks = ticks.clone();
        use_effect_with((time_left, phase, *ticks), move |&(time_left, phase, count)| {
            let delay = if time_left > 0 {
                Some(1_000)
            } else if phase == SessionPhase::Waiting {
                Some(DAILY_RESET_RECHECK.as_millis() as u32)
            } else {
                None
            };
            let timeout = delay.map(move |delay| {
                Timeout::new(delay, move || {
                    controller.borrow_mut().tick(now_ms());
                    ticks.set(count.wrapping_add(1));
                })
            });
            move || drop(timeout)
        });
    }

    let register = {
        let controller = controller.clone();
        let error = error.clone();
        let update = update.clone();
        Callback::from(move |form: RegistrationForm| {
            let result = controller
                .borrow_mut()
                .register(&form, now_ms(), &HttpRegistrationTransport);
            report(&error, result);
            update.force_update();
        })
    };

    let spin = {
        let controller = controller.clone();
        let catalog = catalog.clone();
        let error = error.clone();
        let claim = claim.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let mut rng = SmallRng::from_entropy();
            let now = now_ms();
            let started = controller.borrow_mut().begin_random_spin(&catalog, &mut rng, now);
            let outcome = match started {
                Ok(outcome) => outcome,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            error.set(None);
            claim.set(None);
            update.force_update();

            let controller = controller.clone();
            let claim = claim.clone();
            let update = update.clone();
            spawn_local(async move {
                TimeoutFuture::new(RESULT_REVEAL_DELAY_MS).await;
                controller.borrow_mut().finish_spin();
                if outcome.is_win {
                    claim.set(Some(claim_code(now)));
                }
                update.force_update();
            });
        })
    };

    let share = {
        let controller = controller.clone();
        let error = error.clone();
        let claim = claim.clone();
        let update = update.clone();
        Callback::from(move |target: ShareTarget| {
            if !open_share(target) {
                log::warn!("Counting {:?} share without an open dialog", target);
            }
            let result = controller.borrow_mut().record_share(now_ms());
            claim.set(None);
            report(&error, result);
            update.force_update();
        })
    };

    let acknowledge = {
        let controller = controller.clone();
        let claim = claim.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            controller.borrow_mut().acknowledge_result();
            claim.set(None);
            update.force_update();
        })
    };

    let current = controller.borrow();
    WheelSession {
        phase,
        state: current.state().cloned(),
        time_left,
        outcome: current.outcome().cloned(),
        claim_code: (*claim).clone(),
        error: (*error).clone(),
        catalog,
        register,
        spin,
        share,
        acknowledge,
    }
}

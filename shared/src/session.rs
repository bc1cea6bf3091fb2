//! Session controller: owns the visitor's record slot and drives the
//! registration, spin, share and countdown transitions.
//!
//! Every mutation is persisted and then re-evaluated, so reloading the page
//! mid-flow observes the same state. The current time is always passed in.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::eligibility::{evaluate, EligibilityState};
use crate::prize::{draw_spin, resolve_with_spins, PrizeCatalog, PrizeOutcome};
use crate::record::SessionRecord;
use crate::registration::RegistrationTransport;
use crate::store::{RecordSlot, StoreError};
use crate::validation::{validate_registration, RegistrationForm, RegistrationIssue};

/// Screen the visitor is on. Observed by the view, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Registration,
    CanSpin,
    Spinning,
    ResultShown,
    Waiting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Validation(RegistrationIssue),
    AlreadyRegistered,
    NotRegistered,
    NotEligible,
    Storage(StoreError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(issue) => write!(f, "{}", issue.message()),
            Self::AlreadyRegistered => write!(f, "{}", crate::constants::ALREADY_REGISTERED_ERROR),
            Self::NotRegistered => write!(f, "{}", crate::constants::NOT_REGISTERED_ERROR),
            Self::NotEligible => write!(f, "{}", crate::constants::NOT_ELIGIBLE_ERROR),
            Self::Storage(e) => write!(f, "{} ({})", crate::constants::STORAGE_ERROR, e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err)
    }
}

impl From<RegistrationIssue> for SessionError {
    fn from(issue: RegistrationIssue) -> Self {
        Self::Validation(issue)
    }
}

pub struct SessionController<S: RecordSlot> {
    slot: S,
    state: Option<EligibilityState>,
    phase: SessionPhase,
    time_left: i64,
    outcome: Option<PrizeOutcome>,
}

impl<S: RecordSlot> SessionController<S> {
    /// Reads the slot. A record that fails to parse is discarded and the
    /// visitor starts over at registration.
    pub fn load(mut slot: S, now: i64) -> Self {
        let record = match slot.read() {
            None => None,
            Some(raw) => match SessionRecord::from_json(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Discarding unreadable session record: {}", e);
                    slot.clear();
                    None
                }
            },
        };

        let mut controller = Self {
            slot,
            state: None,
            phase: SessionPhase::Registration,
            time_left: 0,
            outcome: None,
        };

        if let Some(record) = record {
            if let Err(e) = controller.commit(record, now) {
                log::warn!("Could not persist normalized session: {}", e);
            }
            controller.phase = controller.resting_phase();
        }

        controller
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> Option<&EligibilityState> {
        self.state.as_ref()
    }

    pub fn record(&self) -> Option<&SessionRecord> {
        self.state.as_ref().map(|s| &s.record)
    }

    pub fn needs_registration(&self) -> bool {
        self.state.is_none()
    }

    /// Seconds left on the live countdown.
    pub fn time_left(&self) -> i64 {
        self.time_left
    }

    pub fn outcome(&self) -> Option<&PrizeOutcome> {
        self.outcome.as_ref()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn register<T: RegistrationTransport + ?Sized>(
        &mut self,
        form: &RegistrationForm,
        now: i64,
        transport: &T,
    ) -> Result<EligibilityState, SessionError> {
        if self.state.is_some() {
            return Err(SessionError::AlreadyRegistered);
        }
        let request = validate_registration(form)?;

        let record = SessionRecord::new(request.name.clone(), request.email.clone(), now);
        log::info!("Registered {} as {}", request.email, record.id);

        let persisted = self.commit(record, now);
        self.phase = self.resting_phase();

        // Local eligibility never waits on the mailing lists.
        transport.forward(request);

        persisted
    }

    /// Resolves the prize and counts the spin before the wheel starts
    /// turning, so a reload during the animation cannot draw again. The view
    /// gates the spin button on `can_spin`; this refuses if it did not.
    pub fn begin_spin(
        &mut self,
        catalog: &PrizeCatalog,
        draw: f64,
        spins: u32,
        now: i64,
    ) -> Result<PrizeOutcome, SessionError> {
        let state = self.state.as_ref().ok_or(SessionError::NotRegistered)?;
        if !state.can_spin || self.phase == SessionPhase::Spinning {
            return Err(SessionError::NotEligible);
        }
        let record = state.record.with_spin(now);

        let outcome = resolve_with_spins(catalog, draw, spins);
        log::info!("Prize won: {} (win: {})", outcome.label, outcome.is_win);

        if let Err(e) = self.commit(record, now) {
            log::warn!("Spin counted but not saved: {}", e);
        }
        self.outcome = Some(outcome.clone());
        self.phase = SessionPhase::Spinning;
        Ok(outcome)
    }

    /// [`begin_spin`](Self::begin_spin) with the draw taken from `rng`.
    pub fn begin_random_spin<R: Rng + ?Sized>(
        &mut self,
        catalog: &PrizeCatalog,
        rng: &mut R,
        now: i64,
    ) -> Result<PrizeOutcome, SessionError> {
        let (draw, spins) = draw_spin(rng);
        self.begin_spin(catalog, draw, spins, now)
    }

    /// The wheel stopped: reveals the outcome drawn by
    /// [`begin_spin`](Self::begin_spin). Nothing is counted here.
    pub fn finish_spin(&mut self) -> SessionPhase {
        if self.phase == SessionPhase::Spinning {
            self.phase = if self.outcome.is_some() {
                SessionPhase::ResultShown
            } else {
                self.resting_phase()
            };
        }
        self.phase
    }

    /// Counts a spin at `now` that was not drawn through the wheel.
    pub fn record_spin(&mut self, now: i64) -> Result<EligibilityState, SessionError> {
        let record = self.record().ok_or(SessionError::NotRegistered)?.with_spin(now);

        let persisted = self.commit(record, now);
        self.outcome = None;
        self.phase = self.resting_phase();
        persisted
    }

    /// Spends the day's share. Only has an effect while the second chance is
    /// on offer; then the second spin unlocks immediately.
    pub fn record_share(&mut self, now: i64) -> Result<EligibilityState, SessionError> {
        let record = self.record().ok_or(SessionError::NotRegistered)?.clone();

        let current = evaluate(&record, now);
        let record = if current.can_get_second_chance {
            log::info!("Share recorded for {}, unlocking second spin", current.record.id);
            current.record.with_share()
        } else {
            log::debug!("Share ignored, no second chance on offer for {}", current.record.id);
            current.record
        };

        let persisted = self.commit(record, now);
        self.outcome = None;
        self.phase = self.resting_phase();
        persisted
    }

    /// Leaves the result screen.
    pub fn acknowledge_result(&mut self) -> SessionPhase {
        self.outcome = None;
        if self.phase == SessionPhase::ResultShown {
            self.phase = self.resting_phase();
        }
        self.phase
    }

    /// One second of countdown. At zero the record is re-evaluated so the
    /// waiting screen can give way to the wheel. With no countdown running a
    /// waiting visitor is capped for the day, and each tick re-checks for the
    /// daily reset.
    pub fn tick(&mut self, now: i64) -> SessionPhase {
        if self.time_left <= 0 {
            if self.phase == SessionPhase::Waiting {
                if let Err(e) = self.refresh(now) {
                    log::warn!("Daily reset check failed: {}", e);
                }
            }
            return self.phase;
        }
        self.time_left -= 1;

        if self.time_left == 0 {
            if let Err(e) = self.refresh(now) {
                log::warn!("Countdown refresh failed: {}", e);
            }
        }
        self.phase
    }

    /// Re-evaluates against `now` without mutating anything but the daily
    /// counters.
    pub fn refresh(&mut self, now: i64) -> Result<(), SessionError> {
        let record = self.record().ok_or(SessionError::NotRegistered)?.clone();
        let persisted = self.commit(record, now);
        if self.phase == SessionPhase::Waiting || self.phase == SessionPhase::CanSpin {
            self.phase = self.resting_phase();
        }
        persisted.map(|_| ())
    }

    fn resting_phase(&self) -> SessionPhase {
        match &self.state {
            None => SessionPhase::Registration,
            Some(state) if state.can_spin => SessionPhase::CanSpin,
            Some(_) => SessionPhase::Waiting,
        }
    }

    /// Evaluates, adopts the result in memory and writes the normalized
    /// record. A failed write is reported but the in-memory state stands.
    fn commit(&mut self, record: SessionRecord, now: i64) -> Result<EligibilityState, SessionError> {
        let state = evaluate(&record, now);
        self.time_left = state.seconds_until_next_spin;
        self.state = Some(state.clone());

        let raw = state
            .record
            .to_json()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        self.slot.write(&raw)?;
        Ok(state)
    }
}

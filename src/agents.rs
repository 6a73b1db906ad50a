//! Agents: seat policies that decide actions for a [`Round`].
//!
//! The table asks one [`Policy`] per seat for a decision whenever that seat
//! is due to act. Scripted opponents roll against a [`ScriptedProfile`]
//! using an injected RNG, so a fixed seed replays the same decisions.

use crate::table::{Action, Round};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seat controller. Must return a legal action for `seat` in `round`.
pub trait Policy {
    fn decide(&mut self, round: &Round, seat: usize) -> Action;
}

/// Decision odds for a scripted opponent.
///
/// Facing a bet: fold with `fold`, call with `call`, otherwise raise.
/// With nothing to call: check with `check`, otherwise bet.
/// Raises are `raise_step` times a uniform pick from `1..=raise_steps`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ScriptedProfile {
    pub fold: f64,
    pub call: f64,
    pub check: f64,
    pub raise_step: u64,
    pub raise_steps: u64,
}

impl Default for ScriptedProfile {
    fn default() -> Self {
        Self { fold: 0.2, call: 0.5, check: 0.5, raise_step: 5, raise_steps: 3 }
    }
}

/// Random opponent driven by a [`ScriptedProfile`].
#[derive(Debug, Clone)]
pub struct ScriptedOpponent<R = ChaCha8Rng> {
    profile: ScriptedProfile,
    rng: R,
}

impl ScriptedOpponent<ChaCha8Rng> {
    /// Reproducible opponent from a seed.
    pub fn seeded(profile: ScriptedProfile, seed: u64) -> Self {
        Self::new(profile, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ScriptedOpponent<R> {
    pub fn new(profile: ScriptedProfile, rng: R) -> Self {
        Self { profile, rng }
    }

    fn raise_amount(&mut self) -> u64 {
        let steps = self.rng.random_range(1..=self.profile.raise_steps.max(1));
        self.profile.raise_step.max(1) * steps
    }
}

impl<R: Rng> Policy for ScriptedOpponent<R> {
    fn decide(&mut self, round: &Round, seat: usize) -> Action {
        let roll: f64 = self.rng.random();
        if round.to_call(seat) > 0 {
            if roll < self.profile.fold {
                Action::Fold
            } else if roll < self.profile.fold + self.profile.call {
                Action::Call
            } else {
                Action::Raise(self.raise_amount())
            }
        } else if roll < self.profile.check {
            Action::Check
        } else {
            Action::Raise(self.raise_amount())
        }
    }
}

/// Never folds, never raises.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl Policy for CallingStation {
    fn decide(&mut self, round: &Round, seat: usize) -> Action {
        if round.to_call(seat) > 0 {
            Action::Call
        } else {
            Action::Check
        }
    }
}

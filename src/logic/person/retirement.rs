// When players and managers call it a career.
use serde::{Deserialize, Serialize};

use crate::logic::{person::Aging, random::RandomSource};

// The cutoff age grows linearly with vitality. Past the cutoff, retirement pressure
// grows linearly until it is certain `window` years later.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq)]
pub struct RetirementModel {
    pub base_age: f64,
    pub vitality_span: f64,
    pub window: f64,
}

impl Default for RetirementModel {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl RetirementModel {
    pub const PLAYER: Self = Self { base_age: 20.0, vitality_span: 15.0, window: 10.0 };
    pub const MANAGER: Self = Self { base_age: 55.0, vitality_span: 15.0, window: 10.0 };

    // The oldest age at which the person is safe from retirement.
    pub fn cutoff(&self, vitality: f64) -> f64 {
        self.base_age + self.vitality_span * vitality.clamp(0.0, 1.0)
    }

    // How close the person is to certain retirement, between 0 and 1.
    pub fn pressure(&self, age: u8, vitality: f64) -> f64 {
        let years_past = f64::from(age) - self.cutoff(vitality);
        if self.window <= 0.0 {
            return if years_past > 0.0 { 1.0 } else { 0.0 };
        }
        return (years_past / self.window).clamp(0.0, 1.0);
    }

    // Deterministic check: the person is past their cutoff age.
    pub fn should_retire<P: Aging + ?Sized>(&self, person: &P) -> bool {
        f64::from(person.age()) > self.cutoff(person.vitality())
    }

    // Probabilistic check with a single draw from the random source.
    pub fn ready_to_retire<P: Aging + ?Sized>(&self, person: &P, rng: &mut dyn RandomSource) -> bool {
        let draw = rng.draw();
        return self.decide(person.age(), person.vitality(), draw);
    }

    // The pure part of `ready_to_retire`.
    pub fn decide(&self, age: u8, vitality: f64, draw: f64) -> bool {
        let pressure = self.pressure(age, vitality);
        if pressure <= 0.0 {
            return false;
        }
        return draw <= pressure;
    }
}

// A manager's strategic emphasis, derived from their four ratings.
use serde::{Deserialize, Serialize};

use crate::logic::person::mean;

#[derive(Debug, PartialEq, Eq, Hash)]
#[derive(Default, Clone, Copy)]
#[derive(Serialize, Deserialize)]
#[derive(sqlx::Type)]
pub enum ManagerStyle {
    Offensive,
    Defensive,
    Intangible,
    Penalties,
    #[default]
    Balanced,
}

impl ManagerStyle {
    // How far the top rating must rise above the average for the manager to lean on it.
    pub const LEAN_THRESHOLD: f64 = 0.1;

    // Classify the ratings. A single standout rating names the style, anything else is Balanced.
    pub fn classify(offense: f64, defense: f64, intangible: f64, penalties: f64) -> Self {
        let ratings = [
            (Self::Offensive, offense),
            (Self::Defensive, defense),
            (Self::Intangible, intangible),
            (Self::Penalties, penalties),
        ];

        let average = mean(&[offense, defense, intangible, penalties]);
        let (top_style, top) = ratings.iter()
            .fold((Self::Balanced, f64::MIN), |best, (style, value)| {
                if *value > best.1 { (*style, *value) } else { best }
            });

        let shared_top = ratings.iter().filter(|(_, value)| *value == top).count() > 1;
        if shared_top || top - average < Self::LEAN_THRESHOLD {
            return Self::Balanced;
        }
        return top_style;
    }
}

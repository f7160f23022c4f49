// Functions and methods for ranking players from a manager's point of view.
use crate::logic::person::{manager::style::ManagerStyle, player::Player};

// Multiplicative adjustments to a player's composite rating. Each factor is between 0 and 1.
#[derive(Debug, PartialEq, Eq)]
#[derive(Clone, Copy)]
pub enum Adjustment {
    Age,
    Confidence,
    Fatigue,
}

impl Adjustment {
    // Players keep their full value until this age.
    const PEAK_AGE: u8 = 28;
    // Value lost per year past the peak.
    const AGE_DECLINE: f64 = 0.05;

    pub fn factor(&self, player: &Player) -> f64 {
        match self {
            Adjustment::Age => {
                let years_past = player.age.saturating_sub(Self::PEAK_AGE);
                (1.0 - f64::from(years_past) * Self::AGE_DECLINE).clamp(0.0, 1.0)
            },
            Adjustment::Confidence => 0.5 + 0.5 * player.confidence.clamp(0.0, 1.0),
            // Endurance is what keeps fatigue away.
            Adjustment::Fatigue => 0.75 + 0.25 * player.endurance.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerRanking {
    style: ManagerStyle,
    adjustments: Vec<Adjustment>,
}

impl PlayerRanking {
    pub fn for_style(style: ManagerStyle) -> Self {
        Self { style, adjustments: Vec::new() }
    }

    // Rookies are all the same age, so only the raw ratings matter.
    pub fn for_draft(style: ManagerStyle) -> Self {
        Self::for_style(style)
    }

    pub fn for_free_agency(style: ManagerStyle) -> Self {
        Self::for_style(style).with(Adjustment::Age)
    }

    pub fn for_game(style: ManagerStyle) -> Self {
        Self::for_style(style).with(Adjustment::Confidence).with(Adjustment::Fatigue)
    }

    pub fn with(mut self, adjustment: Adjustment) -> Self {
        self.adjustments.push(adjustment);
        self
    }

    // The style composite before adjustments.
    pub fn composite(&self, player: &Player) -> f64 {
        let ratings = &player.ratings;
        match self.style {
            ManagerStyle::Offensive => ratings.offensive(),
            ManagerStyle::Defensive => ratings.defensive(),
            ManagerStyle::Intangible => ratings.intangible(),
            ManagerStyle::Penalties => ratings.penalties(),
            ManagerStyle::Balanced => ratings.balanced(),
        }
    }

    // The composite with every adjustment applied.
    pub fn rating(&self, player: &Player) -> f64 {
        self.adjustments.iter()
            .fold(self.composite(player), |rating, adjustment| rating * adjustment.factor(player))
    }

    // Sign of the rating difference: positive when `a` is the better player.
    pub fn compare(&self, a: &Player, b: &Player) -> i32 {
        let diff = self.rating(a) - self.rating(b);
        if diff > 0.0 { 1 } else if diff < 0.0 { -1 } else { 0 }
    }

    // Index of the best player among those that pass the filter. Earlier players win ties.
    pub fn best_index<F: Fn(&Player) -> bool>(&self, players: &[Player], filter: F) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, player) in players.iter().enumerate() {
            if !filter(player) { continue; }
            best = match best {
                Some(b) if self.compare(player, &players[b]) <= 0 => Some(b),
                _ => Some(i),
            };
        }
        return best;
    }

    // Index of the worst player among those that pass the filter. Earlier players win ties.
    pub fn worst_index<F: Fn(&Player) -> bool>(&self, players: &[Player], filter: F) -> Option<usize> {
        let mut worst: Option<usize> = None;
        for (i, player) in players.iter().enumerate() {
            if !filter(player) { continue; }
            worst = match worst {
                Some(w) if self.compare(player, &players[w]) >= 0 => Some(w),
                _ => Some(i),
            };
        }
        return worst;
    }
}

// Round robin pairings with the circle method.
use crate::logic::types::TeamId;

// Days needed for every team to meet every other team once.
// An odd number of teams gets an extra day so that each team sits out once.
pub fn days_per_cycle(team_count: usize) -> usize {
    match team_count {
        0 | 1 => 0,
        n if n % 2 == 0 => n - 1,
        n => n,
    }
}

// (home, road) pairs for the given day. Day numbers past the first cycle start a new cycle with venues flipped.
pub fn day_matchups(team_ids: &[TeamId], day: u16) -> Vec<(TeamId, TeamId)> {
    let cycle = days_per_cycle(team_ids.len());
    if cycle == 0 {
        return Vec::new();
    }

    let mut slots: Vec<Option<TeamId>> = team_ids.iter().copied().map(Some).collect();
    slots.sort();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let day = usize::from(day);
    let round = day % cycle;
    let flipped = (day / cycle) % 2 == 1;
    let size = slots.len();

    // Slot 0 stays put, the rest rotate by one position each round.
    let arrangement: Vec<Option<TeamId>> = (0..size).map(|p| {
        if p == 0 { slots[0] } else { slots[1 + (p - 1 + round) % (size - 1)] }
    }).collect();

    let mut pairs = Vec::new();
    for i in 0..size / 2 {
        let (a, b) = match (arrangement[i], arrangement[size - 1 - i]) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };

        let first_at_home = ((round + i) % 2 == 0) != flipped;
        pairs.push(if first_at_home { (a, b) } else { (b, a) });
    }
    return pairs;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn met_once_each(team_ids: &[TeamId]) {
        let cycle = days_per_cycle(team_ids.len());
        let mut met = HashSet::new();

        for day in 0..cycle {
            let pairs = day_matchups(team_ids, day as u16);
            let mut playing = HashSet::new();
            for (home, road) in pairs {
                assert!(playing.insert(home) && playing.insert(road), "a team plays twice on day {day}");
                assert!(met.insert((home.min(road), home.max(road))), "{home} and {road} met twice");
            }
        }

        let n = team_ids.len();
        assert_eq!(met.len(), n * (n - 1) / 2);
    }

    #[test]
    fn even_league_meets_once_per_cycle() {
        met_once_each(&[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn odd_league_has_byes() {
        met_once_each(&[3, 5, 9, 11, 14]);
        assert_eq!(day_matchups(&[3, 5, 9, 11, 14], 0).len(), 2);
    }

    #[test]
    fn second_cycle_flips_venues() {
        let teams = [1, 2, 3, 4];
        let first = day_matchups(&teams, 1);
        let second = day_matchups(&teams, 4);
        let flipped: Vec<(TeamId, TeamId)> = first.iter().map(|(h, r)| (*r, *h)).collect();
        assert_eq!(second, flipped);
    }

    #[test]
    fn too_few_teams_play_nothing() {
        assert!(day_matchups(&[1], 0).is_empty());
        assert!(day_matchups(&[], 3).is_empty());
    }
}

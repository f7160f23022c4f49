// Draft order and the assignment of free managers to vacant teams.
use std::cmp::Ordering;

use rand::seq::SliceRandom;

use crate::logic::{error::{LeagueError, Result}, person::manager::Manager, random::{RandomSource, SourceRng}, team::{ranking::TeamRanking, Team}, types::{ManagerId, TeamId}};

// Worst prior-year team first when every team has a prior-year snapshot, a random order otherwise.
pub fn draft_order(teams: &[Team], prior_teams: &[Team], ranking: &TeamRanking, rng: &mut dyn RandomSource) -> Vec<TeamId> {
    let mut prior: Vec<Team> = teams.iter()
        .filter_map(|team| prior_teams.iter().find(|p| p.team_id == team.team_id).cloned())
        .collect();

    if !teams.is_empty() && prior.len() == teams.len() {
        ranking.sort_worst_to_best(&mut prior);
        return prior.iter().map(|team| team.team_id).collect();
    }

    let mut order: Vec<TeamId> = teams.iter().map(|team| team.team_id).collect();
    order.shuffle(&mut SourceRng::new(rng));
    return order;
}

// Higher performance first, then higher overall rating.
fn candidate_order(a: &Manager, b: &Manager) -> Ordering {
    a.performance_rating().total_cmp(&b.performance_rating())
        .then(a.overall_rating().total_cmp(&b.overall_rating()))
}

// Give each team in order the best available manager that did not just leave it.
// Managers hired before a failure keep their new teams.
pub fn assign_managers(order: &[TeamId], managers: &mut [Manager]) -> Result<Vec<(TeamId, ManagerId)>> {
    let mut assignments = Vec::new();

    for team_id in order {
        let mut best: Option<usize> = None;
        for (i, manager) in managers.iter().enumerate() {
            if !manager.is_available() || manager.former_team_id == Some(*team_id) {
                continue;
            }
            best = match best {
                Some(b) if candidate_order(manager, &managers[b]) != Ordering::Greater => Some(b),
                _ => Some(i),
            };
        }

        let i = best.ok_or(LeagueError::NoEligibleManager { team_id: *team_id })?;
        managers[i].hire(*team_id);
        assignments.push((*team_id, managers[i].manager_id));
    }

    return Ok(assignments);
}

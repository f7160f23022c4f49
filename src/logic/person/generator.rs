// Generation of new players and managers with random ratings.
use crate::logic::{error::Result, names::NameGenerator, person::{manager::Manager, player::{Player, PlayerRatings}}, random::{RandomSource, range_f64}, types::{ManagerId, PlayerId, Year}};

// Eight independent ratings.
pub fn random_ratings(rng: &mut dyn RandomSource) -> PlayerRatings {
    let mut values = [0.0; 8];
    for value in values.iter_mut() {
        *value = rng.draw();
    }
    return PlayerRatings::build(values);
}

// A player with random ratings and physical traits.
pub fn random_player(player_id: PlayerId, year: Year, age: u8, names: &mut NameGenerator, rng: &mut dyn RandomSource) -> Result<Player> {
    let name = names.generate(rng)?;
    let ratings = random_ratings(rng);

    let mut player = Player::build(player_id, year, name, ratings, age);
    player.vitality = rng.draw();
    player.endurance = rng.draw();
    player.confidence = range_f64(rng, 0.25, 0.75);
    return Ok(player);
}

// A player fresh out of school, waiting to be drafted.
pub fn rookie(player_id: PlayerId, year: Year, age: u8, names: &mut NameGenerator, rng: &mut dyn RandomSource) -> Result<Player> {
    let mut player = random_player(player_id, year, age, names, rng)?;
    player.rookie = true;
    return Ok(player);
}

// A manager with random ratings.
pub fn random_manager(manager_id: ManagerId, year: Year, age: u8, names: &mut NameGenerator, rng: &mut dyn RandomSource) -> Result<Manager> {
    let name = names.generate(rng)?;
    let ratings = [rng.draw(), rng.draw(), rng.draw(), rng.draw()];
    let vitality = rng.draw();
    return Ok(Manager::build(manager_id, year, name, ratings, age, vitality));
}

// Name generation for new players and managers.
use std::{collections::HashSet, path::Path};

use serde::Deserialize;

use crate::logic::{error::{LeagueError, Result}, io::read_json_file, random::{self, RandomSource}};

const FORENAMES: &[&str] = &[
    "Aaron", "Adam", "Alex", "Andre", "Ben", "Blake", "Brandon", "Caleb", "Carl", "Chris",
    "Cody", "Colin", "Dan", "Darius", "Derek", "Devin", "Dylan", "Eli", "Eric", "Evan",
    "Felix", "Frank", "Gabe", "Grant", "Greg", "Hank", "Ian", "Isaac", "Jack", "Jake",
    "Jalen", "Jason", "Joel", "Jordan", "Kevin", "Kyle", "Lance", "Leo", "Luke", "Malik",
    "Marcus", "Mason", "Miles", "Nate", "Noah", "Omar", "Owen", "Paul", "Quinn", "Ray",
    "Reggie", "Sam", "Sean", "Terrell", "Tom", "Tony", "Trey", "Tyler", "Victor", "Wes",
];

const SURNAMES: &[&str] = &[
    "Adams", "Allen", "Bailey", "Baker", "Banks", "Bell", "Brooks", "Brown", "Bryant", "Burke",
    "Carter", "Clark", "Cole", "Collins", "Cooper", "Cox", "Davis", "Dixon", "Edwards", "Ellis",
    "Evans", "Fisher", "Ford", "Foster", "Garcia", "Gibson", "Gordon", "Graham", "Grant", "Gray",
    "Green", "Hall", "Harris", "Hayes", "Hill", "Holmes", "Howard", "Hughes", "Hunt", "Jackson",
    "James", "Jenkins", "Johnson", "Jones", "Kelly", "King", "Knight", "Lane", "Lewis", "Long",
    "Marshall", "Martin", "Mason", "Miller", "Mitchell", "Moore", "Morgan", "Murphy", "Myers", "Nelson",
    "Owens", "Parker", "Perry", "Porter", "Powell", "Price", "Reed", "Reyes", "Rivera", "Roberts",
    "Robinson", "Rogers", "Ross", "Russell", "Sanders", "Scott", "Shaw", "Simmons", "Stewart", "Stone",
    "Sullivan", "Taylor", "Thomas", "Turner", "Walker", "Wallace", "Ward", "Warren", "Washington", "Watson",
    "Wells", "West", "White", "Williams", "Wilson", "Wood", "Woods", "Wright", "Young", "Zimmerman",
];

// Forename and surname lists, as read from a names file.
#[derive(Debug, Clone)]
#[derive(Deserialize)]
pub struct NamePools {
    pub forenames: Vec<String>,
    pub surnames: Vec<String>,
}

impl Default for NamePools {
    fn default() -> Self {
        Self {
            forenames: FORENAMES.iter().map(|s| s.to_string()).collect(),
            surnames: SURNAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NamePools {
    // Use the names file if one is given, the built-in pools otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let pools: Self = match path {
            Some(p) => serde_json::from_str(&read_json_file(p)?)?,
            None => return Ok(Self::default()),
        };

        if pools.forenames.is_empty() || pools.surnames.is_empty() {
            return Err(LeagueError::Generation("names file has an empty name pool".to_string()));
        }
        return Ok(pools);
    }

    fn combinations(&self) -> usize {
        self.forenames.len() * self.surnames.len()
    }
}

// Hands out (forename, surname) pairs that nobody in the league has yet.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    pools: NamePools,
    used: HashSet<(String, String)>,
}

impl NameGenerator {
    pub fn build(pools: NamePools, used: HashSet<(String, String)>) -> Self {
        Self { pools, used }
    }

    // Draw a random pair. On a collision, walk forward through the combinations until a free one turns up.
    pub fn generate(&mut self, rng: &mut dyn RandomSource) -> Result<(String, String)> {
        let total = self.pools.combinations();
        let start = random::index(rng, total);
        let surname_count = self.pools.surnames.len();

        for offset in 0..total {
            let i = (start + offset) % total;
            let name = (
                self.pools.forenames[i / surname_count].clone(),
                self.pools.surnames[i % surname_count].clone(),
            );

            if self.used.insert(name.clone()) {
                return Ok(name);
            }
        }

        Err(LeagueError::Generation(format!("all {total} name combinations are in use")))
    }
}

use std::collections::HashSet;

use crate::logic::{error::Result, names::{NameGenerator, NamePools}, types::Db};

impl NameGenerator {
    // A generator that avoids every name any manager or player has ever had.
    pub async fn fetch(db: &Db, pools: NamePools) -> Result<Self> {
        let names: Vec<(String, String)> = sqlx::query_as(
            "SELECT forename, surname FROM Manager
            UNION
            SELECT forename, surname FROM Player"
        ).fetch_all(db).await?;

        let used: HashSet<(String, String)> = names.into_iter().collect();
        Ok(Self::build(pools, used))
    }
}

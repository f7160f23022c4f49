use std::time::Instant;

use crate::logic::{config::LeagueConfig, error::Result, names::{NameGenerator, NamePools}, types::Db};

// Everything the engine needs besides the random source.
pub struct AppData {
    pub db: Db,
    pub config: LeagueConfig,
    pub names: NamePools,
}

impl AppData {
    // Build the thing. The name pools come from the names file in the config, if there is one.
    pub fn build(db: Db, config: LeagueConfig) -> Result<Self> {
        let names = NamePools::load(config.names_file.as_deref())?;
        Ok(Self { db, config, names })
    }

    // A name generator that knows every name in use.
    pub async fn name_generator(&self) -> Result<NameGenerator> {
        let now = Instant::now();
        let generator = NameGenerator::fetch(&self.db, self.names.clone()).await?;
        tracing::debug!("Loaded names in use in {:.2?}", now.elapsed());
        Ok(generator)
    }
}

//! Template catalog
//!
//! Splits the spawn templates into a day bucket and a night bucket once at
//! startup. Templates without a recognised period are never spawned.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SpawnError};
use super::templates::{SpawnPeriod, SpawnTemplate};

/// Spawn templates partitioned by period
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    day: Vec<SpawnTemplate>,
    night: Vec<SpawnTemplate>,
}

impl TemplateCatalog {
    /// Route every template to its bucket, discarding untagged ones
    pub fn classify(templates: impl IntoIterator<Item = SpawnTemplate>) -> Self {
        let mut catalog = Self::default();

        for template in templates {
            match template.spawn_period() {
                Some(SpawnPeriod::Day) => catalog.day.push(template),
                Some(SpawnPeriod::Night) => catalog.night.push(template),
                None => {
                    log::debug!(
                        "Skipping template '{}': period tag {:?} is not DAY or NIGHT",
                        template.id,
                        template.period
                    );
                }
            }
        }

        log::info!(
            "Classified spawn templates: {} day, {} night",
            catalog.day.len(),
            catalog.night.len()
        );
        catalog
    }

    /// Fail if either bucket is empty
    pub fn validate(&self) -> Result<()> {
        for period in [SpawnPeriod::Day, SpawnPeriod::Night] {
            if self.bucket(period).is_empty() {
                return Err(SpawnError::ConfigurationGap { period });
            }
        }
        Ok(())
    }

    pub fn bucket(&self, period: SpawnPeriod) -> &[SpawnTemplate] {
        match period {
            SpawnPeriod::Day => &self.day,
            SpawnPeriod::Night => &self.night,
        }
    }

    pub fn day_templates(&self) -> &[SpawnTemplate] {
        &self.day
    }

    pub fn night_templates(&self) -> &[SpawnTemplate] {
        &self.night
    }

    /// Pick a template for the current phase
    pub fn select(&self, is_night: bool, rng: &mut impl Rng) -> Result<&SpawnTemplate> {
        let period = if is_night { SpawnPeriod::Night } else { SpawnPeriod::Day };
        self.bucket(period)
            .choose(rng)
            .ok_or(SpawnError::ConfigurationGap { period })
    }
}

use crate::constants::*;
use anyhow::{Context, Result};
use std::str::FromStr;
use watercolor_core::ParticleConfig;

fn parse<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("bad value for dataset key {key}: {raw:?}"))
}

/// Apply dataset overrides on top of `config` and validate the result.
pub fn apply_overrides(
    mut config: ParticleConfig,
    pairs: &[(&str, String)],
) -> Result<ParticleConfig> {
    for (key, raw) in pairs {
        match *key {
            DATA_CAP => config.cap = parse(key, raw)?,
            DATA_MIN_DISTANCE => config.spawn.min_distance = parse(key, raw)?,
            DATA_STEP => config.spawn.step = parse(key, raw)?,
            DATA_MAX_PER_EVENT => config.spawn.max_per_event = parse(key, raw)?,
            DATA_JITTER => config.spawn.jitter = parse(key, raw)?,
            DATA_LAYERS => config.render.layers = parse(key, raw)?,
            other => log::debug!("[settings] ignoring unknown override {other}"),
        }
    }
    config.validate().context("canvas overrides rejected")?;
    Ok(config)
}

/// `data-seed` as a fixed RNG seed; absent means seed from entropy.
pub fn parse_seed(raw: Option<&str>) -> Result<Option<u64>> {
    raw.map(|s| parse(DATA_SEED, s)).transpose()
}

use crate::domain::reading::Parameter;
use crate::domain::statistics::StatisticRequests;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One INI section, e.g. `[temperature]` with `stats = average, min`
#[derive(Debug, Deserialize, Clone)]
pub struct SectionConfig {
    pub stats: Option<String>,
}

pub fn load_stats_config(path: &Path) -> anyhow::Result<StatisticRequests> {
    if !path.is_file() {
        tracing::warn!(
            "Config file {} not found, no statistics will be computed",
            path.display()
        );
        return Ok(StatisticRequests::new());
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Ini))
        .build()
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let sections: HashMap<String, SectionConfig> = settings
        .try_deserialize()
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    Ok(requests_from_sections(sections))
}

/// Map config sections onto known parameters, skipping anything unusable
pub fn requests_from_sections(sections: HashMap<String, SectionConfig>) -> StatisticRequests {
    let mut requests = StatisticRequests::new();

    for (section, settings) in sections {
        let parameter = match section.to_lowercase().parse::<Parameter>() {
            Ok(parameter) => parameter,
            Err(_) => {
                tracing::warn!("Skipping config section [{}]: not a known parameter", section);
                continue;
            }
        };

        match settings.stats {
            Some(stats) => {
                let names = parse_stat_list(&stats);
                tracing::debug!("Requested statistics for {}: {:?}", parameter, names);
                requests.insert(parameter, names);
            }
            None => {
                tracing::warn!("Skipping config section [{}]: no 'stats' key", section);
            }
        }
    }

    requests
}

/// Split a comma-separated statistic list, trimming whitespace and dropping blanks
pub fn parse_stat_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

use crate::error::KpiError;
use crate::report::OutputFormat;
use crate::team::{FallbackPolicy, TeamCategory};
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_PRECISION: usize = 2;
const MAX_PRECISION: u8 = 6;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KpiConfig {
    pub teams: Option<TeamsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamsConfig {
    pub fallback: Option<String>,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub precision: Option<u8>,
}

impl KpiConfig {
    pub fn fallback_policy(&self) -> Result<FallbackPolicy, KpiError> {
        match self
            .teams
            .as_ref()
            .and_then(|teams| teams.fallback.as_deref())
        {
            Some(value) => FallbackPolicy::parse(value).ok_or_else(|| {
                KpiError::ConfigParse(format!("unsupported teams.fallback: {value}"))
            }),
            None => Ok(FallbackPolicy::default()),
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
            .and_then(OutputFormat::parse)
    }

    pub fn precision(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|output| output.precision)
            .map(usize::from)
            .unwrap_or(DEFAULT_PRECISION)
    }

    pub fn team_aliases(&self) -> Result<Vec<(&str, TeamCategory)>, KpiError> {
        let Some(teams) = &self.teams else {
            return Ok(Vec::new());
        };
        let mut resolved = Vec::with_capacity(teams.aliases.len());
        let mut invalid = Vec::new();
        for (alias, slug) in &teams.aliases {
            match TeamCategory::from_slug(slug) {
                Some(team) => resolved.push((alias.as_str(), team)),
                None => invalid.push(format!("{alias} = {slug}")),
            }
        }
        if !invalid.is_empty() {
            invalid.sort();
            return Err(KpiError::ConfigParse(format!(
                "teams.aliases must map to sales, ads, website-ads or portfolio-holders: {}",
                invalid.join(", ")
            )));
        }
        Ok(resolved)
    }

    pub fn validate(&self) -> Result<(), KpiError> {
        self.fallback_policy()?;
        self.team_aliases()?;

        if let Some(teams) = &self.teams {
            if teams.aliases.keys().any(|alias| alias.trim().is_empty()) {
                return Err(KpiError::ConfigParse(
                    "teams.aliases cannot contain an empty team name".to_string(),
                ));
            }
        }

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                if OutputFormat::parse(format).is_none() {
                    return Err(KpiError::ConfigParse(format!(
                        "unsupported output.format: {format}"
                    )));
                }
            }
            if let Some(precision) = output.precision {
                if precision > MAX_PRECISION {
                    return Err(KpiError::ConfigParse(format!(
                        "output.precision must be between 0 and {MAX_PRECISION}"
                    )));
                }
            }
        }

        Ok(())
    }
}

use crate::error::Result;
use crate::types::config::KpiConfig;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TeamCategory {
    #[serde(rename = "Sales")]
    Sales,
    #[serde(rename = "Ads")]
    Ads,
    #[serde(rename = "Website Ads")]
    WebsiteAds,
    #[serde(rename = "Portfolio Holders")]
    PortfolioHolders,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl TeamCategory {
    pub const RECOGNIZED: [TeamCategory; 4] = [
        TeamCategory::Sales,
        TeamCategory::Ads,
        TeamCategory::WebsiteAds,
        TeamCategory::PortfolioHolders,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Ads => "Ads",
            Self::WebsiteAds => "Website Ads",
            Self::PortfolioHolders => "Portfolio Holders",
            Self::Unknown => "Unknown",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Ads => "ads",
            Self::WebsiteAds => "website-ads",
            Self::PortfolioHolders => "portfolio-holders",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim().to_ascii_lowercase();
        Self::RECOGNIZED
            .into_iter()
            .find(|team| team.slug() == slug)
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for TeamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Maps a free-text team name to its category.
///
/// Case-insensitive substring match, first hit wins: portfolio, website,
/// ads, sales. Anything else (including an empty name) is `Unknown`.
pub fn normalize_team(raw: &str) -> TeamCategory {
    let name = raw.to_lowercase();
    if name.contains("portfolio") {
        TeamCategory::PortfolioHolders
    } else if name.contains("website") {
        TeamCategory::WebsiteAds
    } else if name.contains("ads") {
        TeamCategory::Ads
    } else if name.contains("sales") {
        TeamCategory::Sales
    } else {
        TeamCategory::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    #[default]
    Unknown,
    Sales,
}

impl FallbackPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unknown" => Some(Self::Unknown),
            "sales" => Some(Self::Sales),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamResolver {
    aliases: HashMap<String, TeamCategory>,
    fallback: FallbackPolicy,
}

impl TeamResolver {
    pub fn new(fallback: FallbackPolicy) -> Self {
        Self {
            aliases: HashMap::new(),
            fallback,
        }
    }

    pub fn from_config(config: Option<&KpiConfig>) -> Result<Self> {
        let Some(config) = config else {
            return Ok(Self::default());
        };
        let resolver = config
            .team_aliases()?
            .into_iter()
            .fold(Self::new(config.fallback_policy()?), |resolver, (alias, team)| {
                resolver.with_alias(alias, team)
            });
        Ok(resolver)
    }

    pub fn with_alias(mut self, alias: &str, team: TeamCategory) -> Self {
        self.aliases.insert(alias_key(alias), team);
        self
    }

    pub fn resolve(&self, raw: &str) -> TeamCategory {
        if let Some(team) = self.aliases.get(&alias_key(raw)) {
            return *team;
        }
        match (normalize_team(raw), self.fallback) {
            (TeamCategory::Unknown, FallbackPolicy::Sales) => {
                tracing::debug!(team = raw, "unmatched team falls back to Sales");
                TeamCategory::Sales
            }
            (team, _) => team,
        }
    }
}

fn alias_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_team_matches_canonical_names() {
        assert_eq!(normalize_team("Sales"), TeamCategory::Sales);
        assert_eq!(normalize_team("Ads"), TeamCategory::Ads);
        assert_eq!(normalize_team("Website Ads"), TeamCategory::WebsiteAds);
        assert_eq!(
            normalize_team("Portfolio Holders"),
            TeamCategory::PortfolioHolders
        );
    }

    #[test]
    fn normalize_team_is_case_insensitive_and_matches_substrings() {
        assert_eq!(normalize_team("amazon ADS team"), TeamCategory::Ads);
        assert_eq!(normalize_team("inside-sales (legacy)"), TeamCategory::Sales);
        assert_eq!(normalize_team("WEBSITE"), TeamCategory::WebsiteAds);
        assert_eq!(normalize_team("portfolio"), TeamCategory::PortfolioHolders);
    }

    #[test]
    fn normalize_team_applies_precedence_order() {
        // website wins over ads, portfolio wins over everything
        assert_eq!(normalize_team("website ads"), TeamCategory::WebsiteAds);
        assert_eq!(
            normalize_team("portfolio sales ads"),
            TeamCategory::PortfolioHolders
        );
        assert_eq!(normalize_team("ads sales"), TeamCategory::Ads);
    }

    #[test]
    fn normalize_team_returns_unknown_without_match() {
        assert_eq!(normalize_team("Engineering"), TeamCategory::Unknown);
        assert_eq!(normalize_team(""), TeamCategory::Unknown);
        assert_eq!(normalize_team("   "), TeamCategory::Unknown);
    }

    #[test]
    fn from_slug_accepts_only_recognized_teams() {
        assert_eq!(
            TeamCategory::from_slug("Website-Ads"),
            Some(TeamCategory::WebsiteAds)
        );
        assert_eq!(TeamCategory::from_slug("unknown"), None);
        assert_eq!(TeamCategory::from_slug("marketing"), None);
    }

    #[test]
    fn resolver_default_keeps_unknown() {
        let resolver = TeamResolver::default();
        assert_eq!(resolver.resolve("Engineering"), TeamCategory::Unknown);
    }

    #[test]
    fn resolver_sales_fallback_replaces_unknown() {
        let resolver = TeamResolver::new(FallbackPolicy::Sales);
        assert_eq!(resolver.resolve("Engineering"), TeamCategory::Sales);
        assert_eq!(resolver.resolve("Ads"), TeamCategory::Ads);
    }

    #[test]
    fn resolver_aliases_take_precedence_over_substring_rules() {
        let resolver = TeamResolver::default()
            .with_alias("PPC", TeamCategory::Ads)
            .with_alias("Sales Ops Website", TeamCategory::Sales);
        assert_eq!(resolver.resolve(" ppc "), TeamCategory::Ads);
        assert_eq!(resolver.resolve("sales ops website"), TeamCategory::Sales);
        assert_eq!(resolver.resolve("Sales Ops"), TeamCategory::Sales);
    }

    #[test]
    fn resolver_from_config_reads_aliases_and_fallback() {
        let config: KpiConfig = toml::from_str(
            r#"
[teams]
fallback = "sales"

[teams.aliases]
"Growth" = "portfolio-holders"
"#,
        )
        .expect("config should parse");

        let resolver = TeamResolver::from_config(Some(&config)).expect("resolver should build");
        assert_eq!(resolver.resolve("growth"), TeamCategory::PortfolioHolders);
        assert_eq!(resolver.resolve("Engineering"), TeamCategory::Sales);
    }

    #[test]
    fn resolver_from_config_rejects_unknown_alias_slug() {
        let config: KpiConfig = toml::from_str(
            r#"
[teams.aliases]
"Growth" = "marketing"
"#,
        )
        .expect("config should parse");

        let err = TeamResolver::from_config(Some(&config)).expect_err("slug should be rejected");
        assert!(matches!(&err, crate::error::KpiError::ConfigParse(_)));
        assert!(err.to_string().contains("Growth = marketing"));
    }
}

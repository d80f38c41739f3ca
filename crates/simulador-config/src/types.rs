//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Every field is optional
//! on disk so that a project config can override a single value of the user
//! config; accessor methods resolve the built-in defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [setup]
//! min_partners = 2
//! new_partner_percentage = 0
//! default_years = 5
//!
//! [[setup.default_partners]]
//! name = "João da Silva"
//! percentage = 50
//!
//! [[setup.default_partners]]
//! name = "Pedro Souza"
//! percentage = 50
//!
//! [ui]
//! navigation = "sidebar"
//! brand = "Joicont Contabilidade"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::limits;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.simulador/config.toml`
/// 2. Project config: `./.simulador/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimuladorConfig {
    /// Setup form rules and initial values
    #[serde(default)]
    pub setup: SetupConfig,

    /// Window and navigation preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// A partner row the setup form starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerDefault {
    pub name: String,
    pub percentage: u32,
}

impl PartnerDefault {
    pub fn new(name: impl Into<String>, percentage: u32) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }
}

/// Setup form rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Minimum number of partner rows (2 strict, 1 loose).
    #[serde(default)]
    pub min_partners: Option<usize>,

    /// Percentage given to a freshly added partner row.
    #[serde(default)]
    pub new_partner_percentage: Option<u32>,

    /// Simulation duration the form starts with.
    #[serde(default)]
    pub default_years: Option<u32>,

    /// Partner rows the form starts with. Replaces (never extends) lower layers.
    #[serde(default)]
    pub default_partners: Option<Vec<PartnerDefault>>,
}

impl SetupConfig {
    pub fn min_partners(&self) -> usize {
        self.min_partners.unwrap_or(limits::STRICT_MIN_PARTNERS)
    }

    /// New rows start at 0%, which the form reports as "Mínimo 1%" until edited.
    pub fn new_partner_percentage(&self) -> u32 {
        self.new_partner_percentage.unwrap_or(0)
    }

    pub fn default_years(&self) -> u32 {
        self.default_years.unwrap_or(5)
    }

    pub fn default_partners(&self) -> Vec<PartnerDefault> {
        self.default_partners.clone().unwrap_or_else(|| {
            vec![
                PartnerDefault::new("João da Silva", 50),
                PartnerDefault::new("Pedro Souza", 50),
            ]
        })
    }

    /// Merge two setup configs, with `override_config` taking precedence.
    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            min_partners: override_config.min_partners.or(base.min_partners),
            new_partner_percentage: override_config
                .new_partner_percentage
                .or(base.new_partner_percentage),
            default_years: override_config.default_years.or(base.default_years),
            default_partners: override_config
                .default_partners
                .clone()
                .or_else(|| base.default_partners.clone()),
        }
    }
}

/// How the root shell presents the five pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
    /// Vertical menu with logo header and footer.
    #[default]
    Sidebar,
    /// Header banner with a horizontal tab strip underneath.
    Tabs,
}

/// UI preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub navigation: Option<NavigationStyle>,

    /// Logo image shown above the navigation. Falls back to `~/.simulador/assets/logo.png`.
    #[serde(default)]
    pub logo_path: Option<PathBuf>,

    /// Firm name shown under the app title and in the sidebar footer.
    #[serde(default)]
    pub brand: Option<String>,
}

impl UiConfig {
    pub fn navigation(&self) -> NavigationStyle {
        self.navigation.unwrap_or_default()
    }

    pub fn brand(&self) -> &str {
        self.brand.as_deref().unwrap_or("Joicont Contabilidade")
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            navigation: override_config.navigation.or(base.navigation),
            logo_path: override_config
                .logo_path
                .clone()
                .or_else(|| base.logo_path.clone()),
            brand: override_config.brand.clone().or_else(|| base.brand.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_setup_page() {
        let config = SimuladorConfig::default();
        assert_eq!(config.setup.min_partners(), 2);
        assert_eq!(config.setup.new_partner_percentage(), 0);
        assert_eq!(config.setup.default_years(), 5);
        assert_eq!(
            config.setup.default_partners(),
            vec![
                PartnerDefault::new("João da Silva", 50),
                PartnerDefault::new("Pedro Souza", 50),
            ]
        );
        assert_eq!(config.ui.navigation(), NavigationStyle::Sidebar);
        assert_eq!(config.ui.brand(), "Joicont Contabilidade");
    }

    #[test]
    fn test_empty_toml_parses_to_defaults() {
        let config: SimuladorConfig = toml::from_str("").unwrap();
        assert_eq!(config, SimuladorConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config: SimuladorConfig = toml::from_str(
            r#"
[setup]
min_partners = 1
new_partner_percentage = 1
default_years = 3

[[setup.default_partners]]
name = "Ana"
percentage = 100

[ui]
navigation = "tabs"
logo_path = "/opt/logo.png"
brand = "Outra Firma"
"#,
        )
        .unwrap();

        assert_eq!(config.setup.min_partners(), 1);
        assert_eq!(config.setup.new_partner_percentage(), 1);
        assert_eq!(config.setup.default_years(), 3);
        assert_eq!(
            config.setup.default_partners(),
            vec![PartnerDefault::new("Ana", 100)]
        );
        assert_eq!(config.ui.navigation(), NavigationStyle::Tabs);
        assert_eq!(config.ui.logo_path, Some(PathBuf::from("/opt/logo.png")));
        assert_eq!(config.ui.brand(), "Outra Firma");
    }

    #[test]
    fn test_unknown_navigation_style_is_parse_error() {
        let result: Result<SimuladorConfig, _> = toml::from_str(
            r#"
[ui]
navigation = "ribbon"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_ui_merge_keeps_base_when_override_empty() {
        let base = UiConfig {
            navigation: Some(NavigationStyle::Tabs),
            logo_path: None,
            brand: Some("Base".to_string()),
        };
        let merged = UiConfig::merge(&base, &UiConfig::default());
        assert_eq!(merged, base);
    }
}

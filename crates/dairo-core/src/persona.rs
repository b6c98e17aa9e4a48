//! Persona lookup table.
//!
//! A persona is a short key selected in the UI that maps to the role string
//! injected into the engineer meta-prompt.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// The built-in personas, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter, EnumString,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    #[default]
    Default,
    SoftwareArchitect,
    MarketingGuru,
    LegalAdvisor,
}

impl Persona {
    /// Resolves a persona key sent by a client.
    ///
    /// Absent, blank, or unknown keys fall back to [`Persona::Default`].
    pub fn resolve(key: Option<&str>) -> Self {
        key.map(str::trim)
            .and_then(|key| Self::from_str(key).ok())
            .unwrap_or_default()
    }

    /// Wire key (`software_architect`, ...)
    pub fn key(&self) -> &str {
        self.as_ref()
    }

    /// Human readable label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Default => "Default",
            Persona::SoftwareArchitect => "Software Architect",
            Persona::MarketingGuru => "Marketing Guru",
            Persona::LegalAdvisor => "Legal Advisor",
        }
    }

    /// Role description inserted into the meta-prompt
    pub fn descriptor(&self) -> &'static str {
        match self {
            Persona::Default => "an expert in the relevant field",
            Persona::SoftwareArchitect => "a senior software architect",
            Persona::MarketingGuru => "a world-class marketing guru",
            Persona::LegalAdvisor => "an experienced legal advisor",
        }
    }

    pub fn all() -> Vec<Persona> {
        Self::iter().collect()
    }

    pub fn summary(&self) -> PersonaSummary {
        PersonaSummary {
            key: self.key().to_string(),
            label: self.label().to_string(),
            descriptor: self.descriptor().to_string(),
        }
    }
}

/// Serializable view of a persona for the UI and CLI listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSummary {
    pub key: String,
    pub label: String,
    pub descriptor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_keys() {
        assert_eq!(
            Persona::resolve(Some("software_architect")),
            Persona::SoftwareArchitect
        );
        assert_eq!(Persona::resolve(Some("marketing_guru")), Persona::MarketingGuru);
        assert_eq!(Persona::resolve(Some("legal_advisor")), Persona::LegalAdvisor);
        assert_eq!(Persona::resolve(Some("default")), Persona::Default);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Persona::resolve(None), Persona::Default);
        assert_eq!(Persona::resolve(Some("")), Persona::Default);
        assert_eq!(Persona::resolve(Some("astronaut")), Persona::Default);
        assert_eq!(Persona::resolve(Some("Software_Architect")), Persona::Default);
        assert_eq!(
            Persona::resolve(Some("astronaut")).descriptor(),
            "an expert in the relevant field"
        );
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert_eq!(Persona::resolve(Some(" legal_advisor ")), Persona::LegalAdvisor);
    }

    #[test]
    fn test_all_is_in_display_order() {
        let all = Persona::all();
        let keys: Vec<&str> = all.iter().map(|p| p.key()).collect();
        assert_eq!(
            keys,
            vec!["default", "software_architect", "marketing_guru", "legal_advisor"]
        );
    }

    #[test]
    fn test_serde_uses_wire_keys() {
        let json = serde_json::to_string(&Persona::MarketingGuru).unwrap();
        assert_eq!(json, "\"marketing_guru\"");
    }
}

//! Issuer settings printed on every weighment slip

use serde::{Deserialize, Serialize};

/// Single-record issuer identity. Full-overwrite semantics, no lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub company_name: String,
    pub address: String,
}

impl Default for Settings {
    /// Placeholder identity used until the operator saves their own; the
    /// printed slip never renders with empty issuer fields.
    fn default() -> Self {
        Self {
            company_name: "My Weighbridge".to_string(),
            address: "123 Main St, Anytown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_non_empty() {
        let settings = Settings::default();
        assert!(!settings.company_name.is_empty());
        assert!(!settings.address.is_empty());
    }

    #[test]
    fn test_round_trips() {
        let settings = Settings {
            company_name: "Shree Weighbridge".to_string(),
            address: "NH-48, Surat".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}

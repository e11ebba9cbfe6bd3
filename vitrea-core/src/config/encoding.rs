//! Configuration encoding
//!
//! Binary (postcard) round trips for storage and TOML parsing for
//! operator-edited files. Both validate before returning.

#[cfg(feature = "serde")]
use super::types::{ConfigError, MissionConfig};

#[cfg(feature = "serde")]
impl MissionConfig {
    /// Encode into `buf` as postcard binary, returning the used prefix
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Decode and validate a postcard-encoded configuration
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: MissionConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "toml")]
impl MissionConfig {
    /// Parse and validate a TOML document
    ///
    /// Missing keys fall back to defaults:
    ///
    /// ```toml
    /// fault_budget = 3
    /// strategy = "zigzag"
    /// low_resource_policy = "finish_route"
    ///
    /// [thresholds]
    /// low_battery = 30
    /// critical_battery = 10
    ///
    /// [cost]
    /// battery = 8
    /// fluid = 10
    /// ```
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: MissionConfig = toml::from_str(input).map_err(|_| ConfigError::TomlParse)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::config::LowResourcePolicy;
    use crate::planner::Strategy;

    #[test]
    fn test_binary_storage() {
        let config = MissionConfig {
            fault_budget: 5,
            strategy: Strategy::Sequential,
            low_resource_policy: LowResourcePolicy::ReturnOnLow,
            ..Default::default()
        };
        let mut buf = [0u8; 128];
        let used = config.to_slice(&mut buf).unwrap().len();
        let decoded = MissionConfig::from_bytes(&buf[..used]).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_encode_into_tiny_buffer_fails() {
        let mut buf = [0u8; 2];
        assert_eq!(
            MissionConfig::default().to_slice(&mut buf),
            Err(ConfigError::Encode)
        );
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        assert_eq!(MissionConfig::from_bytes(&[3]), Err(ConfigError::Decode));
    }
}

#[cfg(all(test, feature = "toml"))]
mod toml_tests {
    use super::*;
    use crate::config::LowResourcePolicy;
    use crate::planner::Strategy;

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = MissionConfig::from_toml(
            r#"
            fault_budget = 4
            strategy = "sequential"
            low_resource_policy = "return_on_low"

            [cost]
            battery = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.fault_budget, 4);
        assert_eq!(config.strategy, Strategy::Sequential);
        assert_eq!(config.low_resource_policy, LowResourcePolicy::ReturnOnLow);
        assert_eq!(config.cost.battery, 5);
        assert_eq!(config.cost.fluid, 10);
        assert_eq!(config.thresholds.low_battery, 30);
    }

    #[test]
    fn test_inconsistent_thresholds_rejected() {
        let result = MissionConfig::from_toml(
            r#"
            [thresholds]
            low_battery = 10
            critical_battery = 20
            "#,
        );
        assert_eq!(result, Err(ConfigError::InvalidThresholds));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert_eq!(
            MissionConfig::from_toml("fault_budget = \"many\""),
            Err(ConfigError::TomlParse)
        );
    }
}

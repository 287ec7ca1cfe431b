use serde::{Deserialize, Serialize};

use crate::error::{HuffmanError, Result};

pub const DEFAULT_BITS_PER_SYMBOL: u32 = 8;

/// Settings for a [`Compressor`](crate::Compressor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Width of one uncompressed symbol, used as the baseline for the ratio metrics.
    pub bits_per_symbol: u32,
}

impl CodecConfig {
    pub fn validate(&self) -> Result<()> {
        if self.bits_per_symbol == 0 {
            return Err(HuffmanError::InvalidConfig(
                "bits_per_symbol must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            bits_per_symbol: DEFAULT_BITS_PER_SYMBOL,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.bits_per_symbol, 8);

        let config: CodecConfig = serde_json::from_str(r#"{"bits_per_symbol": 16}"#).unwrap();
        assert_eq!(config.bits_per_symbol, 16);
    }

    #[test]
    fn zero_width_is_invalid() {
        let config = CodecConfig { bits_per_symbol: 0 };
        assert!(matches!(config.validate(), Err(HuffmanError::InvalidConfig(_))));
        assert!(CodecConfig::default().validate().is_ok());
    }
}

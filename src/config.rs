//! Decoder and logging configuration.
//!
//! Configuration is read from YAML. Every section and field is optional:
//!
//! ```yaml
//! decoder:
//!   sentinel: "aa"     # integer, hex ("aa", "0x7e") or decimal string, defaults to 0xAA
//! logging:
//!   level: debug       # tracing filter directive, defaults to "info"
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::debug;

use crate::split::DEFAULT_SENTINEL;
use crate::{MoveeError, Result};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveeConfig {
    pub decoder: DecoderConfig,
    pub logging: LoggingConfig,
}

impl MoveeConfig {
    /// Parse configuration from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml_ng rejects an empty document for a struct
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| MoveeError::file_error(path.to_path_buf(), e))?;
        let config = Self::from_yaml_str(&yaml)?;
        debug!(path = %path.display(), sentinel = config.decoder.sentinel, "Loaded configuration");
        Ok(config)
    }
}

/// Settings for splitting and decoding frame streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Byte separating consecutive frames
    #[serde(deserialize_with = "deserialize_sentinel")]
    pub sentinel: u8,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { sentinel: DEFAULT_SENTINEL }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Parse a sentinel byte written as decimal (`170`) or hex (`aa`, `0xAA`).
///
/// Text is hex when it carries a `0x` prefix or a letter digit (`7e`), and
/// decimal otherwise, so `85` is 85 here and in a YAML integer alike.
pub fn parse_sentinel(text: &str) -> Result<u8> {
    let text = text.trim();
    let invalid = || MoveeError::config(format!("invalid sentinel '{text}', expected one byte"));

    let hex_digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.bytes().any(|b| b.is_ascii_alphabetic()).then_some(text));
    match hex_digits {
        Some(digits) => u8::from_str_radix(digits, 16).map_err(|_| invalid()),
        None => text.parse::<u8>().map_err(|_| invalid()),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSentinel {
    Number(u64),
    Text(String),
}

fn deserialize_sentinel<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match RawSentinel::deserialize(deserializer)? {
        RawSentinel::Number(n) => u8::try_from(n)
            .map_err(|_| D::Error::custom(format!("sentinel {n} does not fit in one byte"))),
        RawSentinel::Text(text) => parse_sentinel(&text).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_sentinel_parses_in_every_notation(byte in any::<u8>()) {
            prop_assert_eq!(parse_sentinel(&format!("0x{byte:02X}")).unwrap(), byte);
            prop_assert_eq!(parse_sentinel(&format!("0x{byte:02x}")).unwrap(), byte);
            prop_assert_eq!(parse_sentinel(&byte.to_string()).unwrap(), byte);
        }

        #[test]
        fn prop_text_and_yaml_sentinels_agree(byte in any::<u8>()) {
            let text = byte.to_string();
            let plain = format!("decoder:\n  sentinel: {text}\n");
            let quoted = format!("decoder:\n  sentinel: \"{text}\"\n");
            let plain = MoveeConfig::from_yaml_str(&plain).unwrap();
            let quoted = MoveeConfig::from_yaml_str(&quoted).unwrap();
            prop_assert_eq!(parse_sentinel(&text).unwrap(), byte);
            prop_assert_eq!(plain.decoder.sentinel, byte);
            prop_assert_eq!(quoted.decoder.sentinel, byte);
        }
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = MoveeConfig::from_yaml_str("").unwrap();
        assert_eq!(config, MoveeConfig::default());
        assert_eq!(config.decoder.sentinel, 0xAA);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn sentinel_accepts_integer_and_hex() {
        let config = MoveeConfig::from_yaml_str("decoder:\n  sentinel: 255\n").unwrap();
        assert_eq!(config.decoder.sentinel, 0xFF);

        let config = MoveeConfig::from_yaml_str("decoder:\n  sentinel: \"0x7E\"\n").unwrap();
        assert_eq!(config.decoder.sentinel, 0x7E);

        let config = MoveeConfig::from_yaml_str("decoder:\n  sentinel: aa\n").unwrap();
        assert_eq!(config.decoder.sentinel, 0xAA);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = MoveeConfig::from_yaml_str("logging:\n  level: trace\n").unwrap();
        assert_eq!(config.decoder, DecoderConfig::default());
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn out_of_range_sentinel_is_rejected() {
        let err = MoveeConfig::from_yaml_str("decoder:\n  sentinel: 256\n").unwrap_err();
        assert!(matches!(err, MoveeError::Config { .. }));
        assert!(parse_sentinel("zz").is_err());
        assert!(parse_sentinel("0x100").is_err());
        assert!(parse_sentinel("").is_err());
    }

    #[test]
    fn digits_only_sentinel_is_decimal() {
        assert_eq!(parse_sentinel("170").unwrap(), 170);
        assert_eq!(parse_sentinel("7").unwrap(), 7);
        assert_eq!(parse_sentinel("85").unwrap(), 85);
        assert_eq!(parse_sentinel("99").unwrap(), 99);
        assert_eq!(parse_sentinel("100").unwrap(), 100);
    }

    #[test]
    fn letter_digits_make_a_sentinel_hex() {
        assert_eq!(parse_sentinel("aa").unwrap(), 0xAA);
        assert_eq!(parse_sentinel("7E").unwrap(), 0x7E);
        assert_eq!(parse_sentinel("b").unwrap(), 0x0B);
        assert!(parse_sentinel("1aa").is_err());
        assert!(parse_sentinel("256").is_err());
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let path = std::env::temp_dir().join("movee-config-that-does-not-exist.yaml");
        let err = MoveeConfig::load(&path).unwrap_err();
        assert!(matches!(err, MoveeError::File { .. }));
    }

    #[test]
    fn load_reads_yaml_from_disk() {
        let path = std::env::temp_dir().join(format!("movee-config-{}.yaml", std::process::id()));
        std::fs::write(&path, "decoder:\n  sentinel: 0\n").unwrap();
        let config = MoveeConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().decoder.sentinel, 0);
    }
}

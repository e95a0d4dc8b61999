//! The `.rcconfig` parser.
//!
//! The file holds exactly one `root=<path>` line. Parsing is deliberately
//! strict: quotes are rejected outright, the text must start with the `root`
//! token, and the whole buffer must contain exactly one `=`.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Key every config file must start with.
pub const ROOT_KEY: &str = "root";

/// Parsed contents of a `.rcconfig` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RcConfig {
    root: String,
}

impl RcConfig {
    /// Parse the bytes actually read from a config file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; the replacement
    /// character never satisfies the `root` prefix, so such files still fail
    /// unless the damage is confined to the path value.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DomainError> {
        String::from_utf8_lossy(bytes).parse()
    }

    /// Root folder the scaffold is generated under, exactly as written.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Render back into the on-disk `root=<path>` form.
    pub fn to_line(&self) -> String {
        format!("{ROOT_KEY}={}", self.root)
    }
}

impl FromStr for RcConfig {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if text.is_empty() {
            return Err(DomainError::invalid_format("config is empty"));
        }

        if text.contains('"') || text.contains('\'') {
            return Err(DomainError::invalid_format(
                "root string cannot contain quotes",
            ));
        }

        if !text.starts_with(ROOT_KEY) {
            return Err(DomainError::invalid_format("could not find root token"));
        }

        let mut tokens = text.split('=');
        let (Some(_key), Some(value), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(DomainError::invalid_format(
                "could not find key-value pair for root",
            ));
        };

        if value.trim_matches('/').is_empty() {
            return Err(DomainError::invalid_format("root path is empty"));
        }

        Ok(Self {
            root: value.to_string(),
        })
    }
}

impl fmt::Display for RcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<RcConfig, DomainError> {
        RcConfig::from_bytes(s.as_bytes())
    }

    #[test]
    fn parses_plain_root() {
        let cfg = parse("root=src/components").unwrap();
        assert_eq!(cfg.root(), "src/components");
    }

    #[test]
    fn outer_whitespace_is_trimmed() {
        assert_eq!(parse("  root=src  ").unwrap().root(), "src");
        assert_eq!(parse("root=src\n").unwrap().root(), "src");
    }

    #[test]
    fn value_is_not_normalised() {
        assert_eq!(parse("root=src/ui/").unwrap().root(), "src/ui/");
        assert_eq!(parse("root= src").unwrap().root(), " src");
    }

    #[test]
    fn empty_buffer_is_invalid() {
        assert!(matches!(parse(""), Err(DomainError::InvalidFormat { .. })));
        assert!(matches!(parse("   "), Err(DomainError::InvalidFormat { .. })));
    }

    #[test]
    fn quotes_are_rejected() {
        assert!(matches!(
            parse("root='src'"),
            Err(DomainError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse("root=\"src\""),
            Err(DomainError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn wrong_prefix_is_rejected() {
        assert!(matches!(
            parse("base=src"),
            Err(DomainError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn equals_count_must_be_exactly_one() {
        assert!(matches!(parse("root"), Err(DomainError::InvalidFormat { .. })));
        assert!(matches!(
            parse("root=src=lib"),
            Err(DomainError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn empty_root_value_is_rejected() {
        assert!(parse("root=").is_err());
        assert!(parse("root=/").is_err());
        assert!(parse("root=//").is_err());
    }

    #[test]
    fn any_unquoted_single_value_round_trips() {
        for p in ["src", "a/b/c", "/abs/path", "ui-kit", "comp onents"] {
            let cfg = parse(&format!("root={p}")).unwrap();
            assert_eq!(cfg.root(), p, "failed for: {p}");
        }
    }

    #[test]
    fn display_renders_config_line() {
        let cfg: RcConfig = "root=src/components".parse().unwrap();
        assert_eq!(cfg.to_string(), "root=src/components");
    }

    #[test]
    fn invalid_utf8_does_not_panic() {
        let bytes = [0xff, 0xfe, b'=', b'x'];
        assert!(RcConfig::from_bytes(&bytes).is_err());
    }
}

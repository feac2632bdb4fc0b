//! Reader configuration

use std::fmt;
use std::str::FromStr;

/// How to handle bytes that are not valid UTF-8
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecodePolicy {
    /// Fail the read at the offending line
    #[default]
    Strict,
    /// Substitute U+FFFD for each invalid sequence and continue
    Replace,
}

impl DecodePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DecodePolicy::Strict => "strict",
            DecodePolicy::Replace => "replace",
        }
    }
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown decode policy name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown decode policy {0:?}, expected \"strict\" or \"replace\"")]
pub struct UnknownPolicy(pub String);

impl FromStr for DecodePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(DecodePolicy::Strict),
            "replace" => Ok(DecodePolicy::Replace),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Options for [`crate::ConllReader`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub decode: DecodePolicy,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(mut self, decode: DecodePolicy) -> Self {
        self.decode = decode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<DecodePolicy>(), Ok(DecodePolicy::Strict));
        assert_eq!("replace".parse::<DecodePolicy>(), Ok(DecodePolicy::Replace));
        assert_eq!(
            "ignore".parse::<DecodePolicy>(),
            Err(UnknownPolicy("ignore".to_string()))
        );
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [DecodePolicy::Strict, DecodePolicy::Replace] {
            assert_eq!(policy.to_string().parse::<DecodePolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ReadOptions::default().decode, DecodePolicy::Strict);
        assert_eq!(
            ReadOptions::new().decode(DecodePolicy::Replace).decode,
            DecodePolicy::Replace
        );
    }
}

//! Robot Framework versions.
//!
//! Every recognizer, mapper and token representation declares the range of
//! Robot Framework versions it applies to. A missing patch component compares
//! equal to `0`, so `3.1` and `3.1.0` are the same version.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

/// Error when parsing a version string such as `3.0.9`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,
    /// A component was missing or not a number.
    #[error("invalid version component '{0}'")]
    InvalidComponent(String),
    #[error("version has {0} components, at most 3 are allowed")]
    TooManyComponents(usize),
}

/// A Robot Framework version: `major.minor[.patch]`.
#[derive(Copy, Clone, Debug)]
pub struct RobotVersion {
    major: u16,
    minor: u16,
    patch: Option<u16>,
}

impl RobotVersion {
    pub const V2_9: RobotVersion = RobotVersion::new(2, 9);
    pub const V3_0: RobotVersion = RobotVersion::new(3, 0);
    pub const V3_1: RobotVersion = RobotVersion::new(3, 1);
    pub const V3_2: RobotVersion = RobotVersion::new(3, 2);

    /// Create a version without a patch component.
    #[inline]
    pub const fn new(major: u16, minor: u16) -> Self {
        RobotVersion {
            major,
            minor,
            patch: None,
        }
    }

    /// Create a version with an explicit patch component.
    #[inline]
    pub const fn with_patch(major: u16, minor: u16, patch: u16) -> Self {
        RobotVersion {
            major,
            minor,
            patch: Some(patch),
        }
    }

    #[inline]
    pub const fn major(self) -> u16 {
        self.major
    }

    #[inline]
    pub const fn minor(self) -> u16 {
        self.minor
    }

    #[inline]
    pub const fn patch(self) -> Option<u16> {
        self.patch
    }

    fn key(self) -> (u16, u16, u16) {
        (self.major, self.minor, self.patch.unwrap_or(0))
    }

    pub fn is_older_than(self, other: RobotVersion) -> bool {
        self < other
    }

    pub fn is_older_than_or_equal_to(self, other: RobotVersion) -> bool {
        self <= other
    }

    pub fn is_newer_than(self, other: RobotVersion) -> bool {
        self > other
    }

    pub fn is_newer_or_equal_to(self, other: RobotVersion) -> bool {
        self >= other
    }
}

impl Default for RobotVersion {
    fn default() -> Self {
        RobotVersion::V3_1
    }
}

impl PartialEq for RobotVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RobotVersion {}

impl Hash for RobotVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for RobotVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RobotVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for RobotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for RobotVersion {
    type Err = VersionParseError;

    /// Parses `3`, `3.1`, `3.1.5` and tolerates pre-release suffixes such as
    /// `3.1rc1` by reading only the leading digits of each component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() > 3 {
            return Err(VersionParseError::TooManyComponents(parts.len()));
        }

        let mut numbers = [0u16; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            *slot = digits
                .parse()
                .map_err(|_| VersionParseError::InvalidComponent((*part).to_string()))?;
        }

        Ok(match parts.len() {
            3 => RobotVersion::with_patch(numbers[0], numbers[1], numbers[2]),
            _ => RobotVersion::new(numbers[0], numbers[1]),
        })
    }
}

#[cfg(test)]
mod tests;

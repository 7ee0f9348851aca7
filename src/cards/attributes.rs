//! Categorical card attributes used for chemistry bucketing.
//!
//! Both categories have a fixed code set and a fixed bucket order; the
//! bucket index decides chemistry tie-breaks, so variant order matters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CardDataError;

/// Main server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Msrv {
    E1,
    E2,
    BR,
    TR,
}

impl Msrv {
    /// All servers in bucket order.
    pub const ALL: [Msrv; 4] = [Msrv::E1, Msrv::E2, Msrv::BR, Msrv::TR];

    /// Bucket index (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Source code for this server.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Msrv::E1 => "E1",
            Msrv::E2 => "E2",
            Msrv::BR => "BR",
            Msrv::TR => "TR",
        }
    }
}

impl FromStr for Msrv {
    type Err = CardDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Msrv::ALL
            .into_iter()
            .find(|m| m.code() == s)
            .ok_or_else(|| CardDataError::UnknownCategory {
                field: "msrv",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Msrv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Living continent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lvct {
    EU,
    NA,
    AS,
    AF,
    LA,
}

impl Lvct {
    /// All continents in bucket order.
    pub const ALL: [Lvct; 5] = [Lvct::EU, Lvct::NA, Lvct::AS, Lvct::AF, Lvct::LA];

    /// Bucket index (0..5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Source code for this continent.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Lvct::EU => "EU",
            Lvct::NA => "NA",
            Lvct::AS => "AS",
            Lvct::AF => "AF",
            Lvct::LA => "LA",
        }
    }
}

impl FromStr for Lvct {
    type Err = CardDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lvct::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| CardDataError::UnknownCategory {
                field: "lvct",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Lvct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

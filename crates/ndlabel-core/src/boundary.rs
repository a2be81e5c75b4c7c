//! Boundary extension modes
//!
//! A [`BoundaryMode`] decides what a neighbor lookup returns when the
//! neighbor lies outside the array. Modes follow the usual N-D filtering
//! conventions, shown here for a row `a b c d`:
//!
//! | mode       | left extension | row       | right extension |
//! |------------|----------------|-----------|-----------------|
//! | `Constant` | (none)         | `a b c d` | (none)          |
//! | `Nearest`  | `a a`          | `a b c d` | `d d`           |
//! | `Wrap`     | `c d`          | `a b c d` | `a b`           |
//! | `Reflect`  | `b a`          | `a b c d` | `d c`           |
//! | `Mirror`   | `c b`          | `a b c d` | `c b`           |

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Policy for resolving out-of-range neighbor coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryMode {
    /// Out-of-range neighbors are not retrieved at all
    #[default]
    Constant,
    /// Clamp to the nearest edge element
    Nearest,
    /// Periodic extension
    Wrap,
    /// Half-sample symmetric: the edge element is repeated
    Reflect,
    /// Whole-sample symmetric: the edge element is not repeated
    Mirror,
}

impl BoundaryMode {
    /// All modes, in declaration order
    pub const ALL: [BoundaryMode; 5] = [
        BoundaryMode::Constant,
        BoundaryMode::Nearest,
        BoundaryMode::Wrap,
        BoundaryMode::Reflect,
        BoundaryMode::Mirror,
    ];

    /// Canonical lowercase name of the mode
    pub fn name(self) -> &'static str {
        match self {
            BoundaryMode::Constant => "constant",
            BoundaryMode::Nearest => "nearest",
            BoundaryMode::Wrap => "wrap",
            BoundaryMode::Reflect => "reflect",
            BoundaryMode::Mirror => "mirror",
        }
    }

    /// Resolve a coordinate along one axis of length `len`.
    ///
    /// In-range coordinates are returned unchanged. Out-of-range coordinates
    /// are mapped back into `0..len` according to the mode, except under
    /// [`BoundaryMode::Constant`], which yields `None`. `len` must be
    /// non-zero.
    pub fn resolve(self, index: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if (0..n).contains(&index) {
            return Some(index as usize);
        }
        if n == 1 {
            return match self {
                BoundaryMode::Constant => None,
                _ => Some(0),
            };
        }

        let resolved = match self {
            BoundaryMode::Constant => return None,
            BoundaryMode::Nearest => index.clamp(0, n - 1),
            BoundaryMode::Wrap => index.rem_euclid(n),
            BoundaryMode::Reflect => {
                let m = index.rem_euclid(2 * n);
                if m < n { m } else { 2 * n - 1 - m }
            }
            BoundaryMode::Mirror => {
                let period = 2 * n - 2;
                let m = index.rem_euclid(period);
                if m < n { m } else { period - m }
            }
        };
        Some(resolved as usize)
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        BoundaryMode::ALL
            .into_iter()
            .find(|mode| mode.name() == lower)
            .ok_or_else(|| Error::UnknownBoundaryMode(s.to_string()))
    }
}

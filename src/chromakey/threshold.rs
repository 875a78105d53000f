use std::fmt;
use std::str::FromStr;

use crate::chromakey::hue::MAX_HUE;
use crate::error::{Error, Result};

/// Inclusive interval of hue values, `low..=high`
///
/// Intervals never wrap around the end of the hue circle. A band that
/// crosses `179 -> 0` has to be expressed as two intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HueRange {
    low: u8,
    high: u8,
}

impl HueRange {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidParameter` - When `low > high` or `high` exceeds the
    ///   largest hue value (179)
    pub fn new(low: u8, high: u8) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidParameter(format!(
                "hue interval lower bound {low} exceeds upper bound {high}"
            )));
        }
        if high > MAX_HUE {
            return Err(Error::InvalidParameter(format!(
                "hue interval upper bound {high} exceeds {MAX_HUE}"
            )));
        }
        Ok(Self { low, high })
    }

    pub const fn low(&self) -> u8 {
        self.low
    }

    pub const fn high(&self) -> u8 {
        self.high
    }

    #[inline]
    pub const fn contains(&self, hue: u8) -> bool {
        self.low <= hue && hue <= self.high
    }
}

impl fmt::Display for HueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for HueRange {
    type Err = Error;

    /// Parses `"low-high"`, or a single value `"h"` meaning `h-h`.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |value: &str| {
            value.trim().parse::<u8>().map_err(|_| {
                Error::InvalidParameter(format!("'{}' is not a hue value", value.trim()))
            })
        };

        match s.split_once('-') {
            Some((low, high)) => Self::new(parse(low)?, parse(high)?),
            None => {
                let hue = parse(s)?;
                Self::new(hue, hue)
            }
        }
    }
}

/// Ordered set of hue intervals classifying pixels as background
///
/// A pixel belongs to the background when its hue falls in any interval.
/// The empty set classifies nothing as background.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThresholdSet {
    ranges: Vec<HueRange>,
}

impl ThresholdSet {
    /// Hue band of a typical green screen under even lighting.
    pub const GREEN_SCREEN: (u8, u8) = (59, 75);

    pub const fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    pub fn new(ranges: impl IntoIterator<Item = HueRange>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }

    /// Builds a set from `(low, high)` pairs, validating each of them.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self> {
        pairs
            .iter()
            .map(|&(low, high)| HueRange::new(low, high))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    pub fn green_screen() -> Self {
        let (low, high) = Self::GREEN_SCREEN;
        Self {
            ranges: vec![HueRange { low, high }],
        }
    }

    pub fn push(&mut self, range: HueRange) -> &mut Self {
        self.ranges.push(range);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HueRange> {
        self.ranges.iter()
    }

    /// Returns `true` when `hue` falls in at least one interval.
    #[inline]
    pub fn contains(&self, hue: u8) -> bool {
        self.ranges.iter().any(|range| range.contains(hue))
    }

    /// Precomputes membership for every hue value.
    pub(crate) fn lookup_table(&self) -> [bool; 256] {
        let mut table = [false; 256];
        for range in &self.ranges {
            table[usize::from(range.low)..=usize::from(range.high)].fill(true);
        }
        table
    }
}

impl fmt::Display for ThresholdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for range in &self.ranges {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for ThresholdSet {
    type Err = Error;

    /// Parses a comma separated list such as `"59-75,80-90"`.
    ///
    /// An empty or blank string yields the empty set.
    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(HueRange::from_str)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::ConfigError;

/// How consecutive page indexes are distributed over the grid of a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageOrder {
    /// Fill a row of the view left-to-right before moving down a row.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "row"))]
    RowMajor,
    /// Fill a column top-to-bottom before moving right a column.
    #[cfg_attr(feature = "serde", serde(rename = "column"))]
    ColumnMajor,
}

impl PageOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RowMajor => "row",
            Self::ColumnMajor => "column",
        }
    }
}

impl fmt::Display for PageOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Self::RowMajor),
            "column" => Ok(Self::ColumnMajor),
            other => Err(ConfigError::UnknownOrdering(other.to_string())),
        }
    }
}

/// Granularity of a single forward/backward turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TurnUnit {
    #[default]
    Page,
    Column,
    View,
}

impl TurnUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Column => "column",
            Self::View => "view",
        }
    }
}

impl fmt::Display for TurnUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TurnUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Self::Page),
            "column" => Ok(Self::Column),
            "view" => Ok(Self::View),
            other => Err(ConfigError::UnknownTurnUnit(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    Forward,
    Backward,
}

/// A zero-based grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

/// Where a page sits inside the paged strip, in percent of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub cell: Cell,
    pub top_percent: f32,
    pub left_percent: f32,
    pub height_percent: f32,
    pub width_percent: f32,
}

/// An inclusive, 1-based range of page numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    pub first: usize,
    pub last: usize, // inclusive
}

impl PageRange {
    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.last - self.first + 1
        }
    }

    pub fn contains(&self, page: usize) -> bool {
        page >= self.first && page <= self.last
    }
}

/// The "page changed" notification.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageChange {
    pub previous_page: usize,
    pub current_page: usize,
    /// Offset of the view's leading edge along the paging axis, in percent of the viewport.
    pub target_offset_percent: f32,
}

/// Everything a host needs to apply one completed navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageTurn {
    pub change: PageChange,
    /// Zero-based column aligned with the view's leading edge.
    pub target_column: usize,
    /// Effective transition duration (configured value unless overridden for this call).
    pub duration_ms: u64,
}

impl PageTurn {
    pub fn target_offset_percent(&self) -> f32 {
        self.change.target_offset_percent
    }
}

/// Per-call navigation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Re-apply the transition even when the landing page equals the current page.
    pub force: bool,
    /// Overrides the configured transition duration for this call only.
    pub duration_override_ms: Option<u64>,
}

impl NavigateOptions {
    pub fn forced() -> Self {
        Self {
            force: true,
            duration_override_ms: None,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_duration_override_ms(mut self, duration_ms: Option<u64>) -> Self {
        self.duration_override_ms = duration_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionState {
    #[default]
    Idle,
    /// An offset change was handed to the transition primitive and not yet confirmed.
    Transitioning {
        target_offset_percent: f32,
        duration_ms: u64,
    },
}

impl TransitionState {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }
}

pub type PageKey = u64;

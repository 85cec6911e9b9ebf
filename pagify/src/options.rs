use alloc::sync::Arc;

use crate::geometry::GridDimensions;
use crate::pages::PageSink;
use crate::{ConfigError, LoadError, PageChange, PageOrder, TurnUnit};

/// A content loader invoked when navigation runs past the materialized pages.
///
/// The loader appends pages through the [`PageSink`] (typically placeholders that the host
/// resolves once content arrives) and returns:
/// - `Ok(true)` to let the navigation continue with the new page count,
/// - `Ok(false)` when no more content is available (the navigation is abandoned),
/// - `Err(_)` on failure, which the engine treats exactly like `Ok(false)`.
///
/// The loader only sees the page set, never the engine, so it cannot re-enter navigation.
pub type PageLoader<K> = Arc<dyn Fn(&mut PageSink<'_, K>) -> Result<bool, LoadError> + Send + Sync>;

/// A callback fired once per navigation that actually moves (or is forced to re-apply) the view.
pub type OnPageChangeCallback = Arc<dyn Fn(&PageChange) + Send + Sync>;

pub const DEFAULT_PAGE_PERCENT: f32 = 100.0;
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 250;

/// Layout and navigation configuration for [`crate::Pagify`].
///
/// This is plain data: collaborators (loader, change callback) are installed on the engine, not
/// here. Replace it wholesale with [`crate::Pagify::reconfigure`].
///
/// Defaults: one full-viewport page per view, row-major ordering, page turns, no blank columns,
/// no load buffer, no throttling, 250ms transitions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Page height in percent of the viewport, in `(0, 100]`.
    pub page_height_percent: f32,
    /// Page width in percent of the viewport, in `(0, 100]`.
    pub page_width_percent: f32,

    pub ordering: PageOrder,
    pub turn_unit: TurnUnit,

    /// Allow the last view to end in empty columns instead of clamping to the last full view.
    pub allow_blank_columns: bool,

    /// Extra columns of look-ahead before the end of the material that trigger a load.
    pub column_load_buffer: usize,

    /// Minimum spacing between forwarded navigation triggers (`0` disables throttling).
    pub throttle_window_ms: u64,

    pub transition_duration_ms: u64,

    /// Invoke the page loader as soon as it is installed while the page set is still empty (for
    /// viewers that start empty).
    pub load_on_init: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_height_percent: DEFAULT_PAGE_PERCENT,
            page_width_percent: DEFAULT_PAGE_PERCENT,
            ordering: PageOrder::RowMajor,
            turn_unit: TurnUnit::Page,
            allow_blank_columns: false,
            column_load_buffer: 0,
            throttle_window_ms: 0,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            load_on_init: false,
        }
    }
}

impl LayoutConfig {
    pub fn new(page_height_percent: f32, page_width_percent: f32) -> Self {
        Self {
            page_height_percent,
            page_width_percent,
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_height_percent: f32, page_width_percent: f32) -> Self {
        self.page_height_percent = page_height_percent;
        self.page_width_percent = page_width_percent;
        self
    }

    pub fn with_ordering(mut self, ordering: PageOrder) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_turn_unit(mut self, turn_unit: TurnUnit) -> Self {
        self.turn_unit = turn_unit;
        self
    }

    pub fn with_allow_blank_columns(mut self, allow_blank_columns: bool) -> Self {
        self.allow_blank_columns = allow_blank_columns;
        self
    }

    pub fn with_column_load_buffer(mut self, column_load_buffer: usize) -> Self {
        self.column_load_buffer = column_load_buffer;
        self
    }

    pub fn with_throttle_window_ms(mut self, throttle_window_ms: u64) -> Self {
        self.throttle_window_ms = throttle_window_ms;
        self
    }

    pub fn with_transition_duration_ms(mut self, transition_duration_ms: u64) -> Self {
        self.transition_duration_ms = transition_duration_ms;
        self
    }

    pub fn with_load_on_init(mut self, load_on_init: bool) -> Self {
        self.load_on_init = load_on_init;
        self
    }

    /// Checks the page percentages and returns the resulting grid.
    pub fn validate(&self) -> Result<GridDimensions, ConfigError> {
        check_percent("page_height_percent", self.page_height_percent)?;
        check_percent("page_width_percent", self.page_width_percent)?;
        Ok(self.grid())
    }

    /// Grid dimensions for this config. Only meaningful once [`Self::validate`] passed.
    pub fn grid(&self) -> GridDimensions {
        GridDimensions::from_percents(self.page_height_percent, self.page_width_percent)
    }
}

fn check_percent(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinitePercent { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositivePercent { field, value });
    }
    if value > 100.0 {
        return Err(ConfigError::PercentOutOfRange { field, value });
    }
    Ok(())
}

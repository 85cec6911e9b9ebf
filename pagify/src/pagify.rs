use alloc::sync::Arc;

use crate::geometry::GridDimensions;
use crate::pages::{Page, PageSet, PageSink};
use crate::{
    ConfigError, EngineState, LayoutConfig, LoadError, NavigateOptions, NavigationState,
    OnPageChangeCallback, PageChange, PageKey, PageLoader, PageRange, PageTurn, TransitionState,
    TurnDirection, TurnUnit,
};

/// A headless paged-grid navigation engine.
///
/// Pages are laid out in a grid of `rows_per_column × columns_per_view` cells per view and the
/// view moves along the column axis. The engine:
/// - tracks the current page and the page set (metadata only, content is the host's),
/// - maps navigation requests to a target column and a target offset (percent of the viewport),
/// - asks the installed [`PageLoader`] for more pages when a request runs past the material,
/// - keeps the last view full unless blank columns are allowed.
///
/// It does not animate anything. Each navigation that moves the view returns a [`PageTurn`]
/// which the host (see the `pagify-adapter` crate) hands to its transition primitive, and the
/// engine stays "transitioning" until [`Pagify::finish_transition`] is called.
#[derive(Clone)]
pub struct Pagify<K = PageKey> {
    config: LayoutConfig,
    grid: GridDimensions,
    pages: PageSet<K>,
    current_page: usize,
    transition: TransitionState,
    target_column: usize,
    offset_percent: f32,

    loader: Option<PageLoader<K>>,
    on_page_change: Option<OnPageChangeCallback>,
}

impl<K> Pagify<K> {
    /// Creates an engine with an empty page set.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        pdebug!(
            rows_per_column = grid.rows_per_column,
            columns_per_view = grid.columns_per_view,
            ordering = config.ordering.as_str(),
            turn_unit = config.turn_unit.as_str(),
            "Pagify::new"
        );
        Ok(Self {
            pages: PageSet::new(&config, grid),
            config,
            grid,
            current_page: 1,
            transition: TransitionState::Idle,
            target_column: 0,
            offset_percent: 0.0,
            loader: None,
            on_page_change: None,
        })
    }

    /// Creates an engine over already materialized pages.
    pub fn with_pages(
        config: LayoutConfig,
        keys: impl IntoIterator<Item = K>,
    ) -> Result<Self, ConfigError> {
        let mut p = Self::new(config)?;
        for key in keys {
            p.pages.push(key, false);
        }
        Ok(p)
    }

    /// Creates an engine with a page loader installed.
    ///
    /// When `config.load_on_init` is set the loader is invoked once right away, so the page set
    /// can start empty and be filled entirely by the loader.
    pub fn with_loader(
        config: LayoutConfig,
        loader: impl Fn(&mut PageSink<'_, K>) -> Result<bool, LoadError> + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        let mut p = Self::new(config)?;
        p.set_page_loader(Some(loader));
        Ok(p)
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    /// Installs (or removes) the page loader.
    ///
    /// With `load_on_init` set and no pages yet, the new loader runs once right away.
    pub fn set_page_loader(
        &mut self,
        loader: Option<
            impl Fn(&mut PageSink<'_, K>) -> Result<bool, LoadError> + Send + Sync + 'static,
        >,
    ) {
        self.loader = loader.map(|f| Arc::new(f) as _);
        if self.loader.is_some() && self.config.load_on_init && self.pages.is_empty() {
            self.load_more_pages();
        }
    }

    pub fn set_on_page_change(
        &mut self,
        on_page_change: Option<impl Fn(&PageChange) + Send + Sync + 'static>,
    ) {
        self.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
    }

    pub fn pages(&self) -> &PageSet<K> {
        &self.pages
    }

    /// Page by 1-based index.
    pub fn page(&self, index: usize) -> Option<&Page<K>> {
        self.pages.get(index)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn total_columns(&self) -> usize {
        self.grid.total_columns(self.pages.len())
    }

    /// Column aligned with the view's leading edge after the last applied navigation.
    pub fn target_column(&self) -> usize {
        self.target_column
    }

    /// Offset of the last applied navigation, in percent of the viewport.
    pub fn offset_percent(&self) -> f32 {
        self.offset_percent
    }

    pub fn transition_state(&self) -> TransitionState {
        self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    pub fn navigation_state(&self) -> NavigationState {
        NavigationState {
            current_page: self.current_page,
            total_pages: self.pages.len(),
        }
    }

    pub fn state(&self) -> EngineState {
        EngineState {
            navigation: self.navigation_state(),
            transition: self.transition,
            offset_percent: self.offset_percent,
        }
    }

    /// Signals that the transition primitive finished applying the last target offset.
    pub fn finish_transition(&mut self) {
        if self.transition.is_transitioning() {
            ptrace!(offset_percent = self.offset_percent, "finish_transition");
        }
        self.transition = TransitionState::Idle;
    }

    /// Asks the loader for more pages.
    ///
    /// Returns whether navigation may continue. Without a loader this is always `true`; a loader
    /// error counts as `false`.
    pub fn load_more_pages(&mut self) -> bool {
        let Some(loader) = self.loader.clone() else {
            return true;
        };
        let mut sink = PageSink::new(&mut self.pages);
        match loader(&mut sink) {
            Ok(more) => {
                pdebug!(more, total_pages = self.pages.len(), "load_more_pages");
                more
            }
            Err(_err) => {
                pwarn!(error = %_err, "page loader failed; abandoning navigation");
                false
            }
        }
    }

    /// Moves the view so that `page` sits at its leading edge (or as close as the blank-column
    /// policy allows).
    ///
    /// Returns `None` when nothing observable happened: the request landed on the current page,
    /// the loader declined, or there are no pages. Otherwise the engine is now transitioning
    /// toward the returned offset and the change callback has fired.
    pub fn navigate(&mut self, page: usize, options: NavigateOptions) -> Option<PageTurn> {
        let requested = page.max(1);
        let grid = self.grid;
        let columns_per_view = grid.columns_per_view;
        let allow_blank = self.config.allow_blank_columns;

        let mut target_column = grid.column_of(requested, self.config.ordering);
        if self.config.turn_unit == TurnUnit::View && allow_blank {
            target_column -= target_column % columns_per_view;
        }

        let mut total_columns = grid.total_columns(self.pages.len());
        let reach = target_column
            .saturating_add(columns_per_view)
            .saturating_add(self.config.column_load_buffer);
        if reach > total_columns {
            if !self.load_more_pages() {
                ptrace!(requested, "navigate: load declined");
                return None;
            }
            total_columns = grid.total_columns(self.pages.len());
        }
        if total_columns == 0 {
            ptrace!(requested, "navigate: no pages");
            return None;
        }

        let mut landing = requested;
        if !allow_blank && target_column.saturating_add(columns_per_view) > total_columns {
            target_column = total_columns.saturating_sub(columns_per_view);
            landing = target_column * grid.rows_per_column + 1;
        } else if allow_blank && target_column >= total_columns {
            // Past the material: the current page stays, the offset follows the request.
            landing = self.current_page;
        }
        landing = landing.min(self.pages.len());

        if landing == self.current_page && !options.force {
            ptrace!(requested, landing, "navigate: already there");
            return None;
        }

        let previous_page = self.current_page;
        let duration_ms = options
            .duration_override_ms
            .unwrap_or(self.config.transition_duration_ms);
        let target_offset_percent = target_column as f32 * self.config.page_width_percent;

        if self.transition.is_transitioning() {
            ptrace!(previous_page, "navigate: superseding in-flight transition");
        }
        self.current_page = landing;
        self.target_column = target_column;
        self.offset_percent = target_offset_percent;
        self.transition = TransitionState::Transitioning {
            target_offset_percent,
            duration_ms,
        };

        let change = PageChange {
            previous_page,
            current_page: landing,
            target_offset_percent,
        };
        ptrace!(
            requested,
            previous_page,
            current_page = landing,
            target_column,
            target_offset_percent,
            duration_ms,
            "navigate"
        );
        if let Some(cb) = &self.on_page_change {
            cb(&change);
        }

        Some(PageTurn {
            change,
            target_column,
            duration_ms,
        })
    }

    pub fn go_to_page(&mut self, page: usize) -> Option<PageTurn> {
        self.navigate(page, NavigateOptions::default())
    }

    pub fn go_to_next_page(&mut self) -> Option<PageTurn> {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn go_to_previous_page(&mut self) -> Option<PageTurn> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Moves to the first page of the column after the one holding the current page.
    pub fn go_to_next_column(&mut self) -> Option<PageTurn> {
        let rows = self.grid.rows_per_column;
        let column = (self.current_page - 1) / rows;
        self.go_to_page(column.saturating_add(1).saturating_mul(rows).saturating_add(1))
    }

    /// Moves to the first page of the column before the one holding the current page.
    pub fn go_to_previous_column(&mut self) -> Option<PageTurn> {
        let rows = self.grid.rows_per_column;
        let column = (self.current_page - 1) / rows;
        self.go_to_page(column.saturating_sub(1) * rows + 1)
    }

    pub fn go_to_next_view(&mut self) -> Option<PageTurn> {
        self.go_to_page(self.current_page.saturating_add(self.grid.view_size()))
    }

    pub fn go_to_previous_view(&mut self) -> Option<PageTurn> {
        self.go_to_page(self.current_page.saturating_sub(self.grid.view_size()))
    }

    /// A single forward/backward turn of the configured [`TurnUnit`].
    pub fn turn(&mut self, direction: TurnDirection) -> Option<PageTurn> {
        match (self.config.turn_unit, direction) {
            (TurnUnit::Page, TurnDirection::Forward) => self.go_to_next_page(),
            (TurnUnit::Page, TurnDirection::Backward) => self.go_to_previous_page(),
            (TurnUnit::Column, TurnDirection::Forward) => self.go_to_next_column(),
            (TurnUnit::Column, TurnDirection::Backward) => self.go_to_previous_column(),
            (TurnUnit::View, TurnDirection::Forward) => self.go_to_next_view(),
            (TurnUnit::View, TurnDirection::Backward) => self.go_to_previous_view(),
        }
    }

    /// 1-based view holding the current page.
    pub fn current_view(&self) -> usize {
        self.grid.view_of(self.current_page)
    }

    /// Page numbers of the current view, clipped to the page count.
    pub fn current_view_range(&self) -> PageRange {
        let view_size = self.grid.view_size();
        let view = self.current_view();
        PageRange {
            first: (view - 1) * view_size + 1,
            last: self.pages.len().min(view * view_size),
        }
    }

    pub fn pages_in_current_view(&self) -> &[Page<K>] {
        self.pages.slice(self.current_view_range())
    }

    /// Appends a loaded page. Does not move the view; follow with [`Self::refresh`].
    pub fn add_page(&mut self, key: K) -> usize {
        self.pages.push(key, false)
    }

    /// Appends a placeholder page. Does not move the view; follow with [`Self::refresh`].
    pub fn add_placeholder(&mut self, key: K) -> usize {
        self.pages.push(key, true)
    }

    /// Marks a placeholder as loaded, replacing its key. Returns `false` for an unknown index.
    pub fn resolve_placeholder(&mut self, index: usize, key: K) -> bool {
        self.pages.resolve_placeholder(index, key)
    }

    /// Removes the page at `index` and relayouts the rest.
    ///
    /// Removing a page at or before the current page shifts the current page back by one so the
    /// view stays on the same content. Does not move the view; follow with [`Self::refresh`].
    pub fn remove_page(&mut self, index: usize) -> Option<Page<K>> {
        let removed = self.pages.remove(index)?;
        if index <= self.current_page && self.current_page > 1 {
            self.current_page -= 1;
        }
        pdebug!(
            index,
            current_page = self.current_page,
            total_pages = self.pages.len(),
            "remove_page"
        );
        Some(removed)
    }

    /// Re-applies the layout at the current page (a forced navigation).
    pub fn refresh(&mut self, duration_override_ms: Option<u64>) -> Option<PageTurn> {
        self.navigate(
            self.current_page,
            NavigateOptions::forced().with_duration_override_ms(duration_override_ms),
        )
    }

    /// Replaces the configuration and re-settles the view on the current page.
    ///
    /// The new config is validated first; on error nothing changes.
    pub fn reconfigure(
        &mut self,
        config: LayoutConfig,
        duration_override_ms: Option<u64>,
    ) -> Result<Option<PageTurn>, ConfigError> {
        let grid = config.validate()?;
        pdebug!(
            rows_per_column = grid.rows_per_column,
            columns_per_view = grid.columns_per_view,
            ordering = config.ordering.as_str(),
            turn_unit = config.turn_unit.as_str(),
            "Pagify::reconfigure"
        );
        self.pages.set_layout(&config, grid);
        self.config = config;
        self.grid = grid;
        Ok(self.refresh(duration_override_ms))
    }
}

impl<K: PartialEq> Pagify<K> {
    /// Removes the first page with `key`. See [`Self::remove_page`].
    pub fn remove_page_by_key(&mut self, key: &K) -> Option<Page<K>> {
        let index = self.pages.index_of(key)?;
        self.remove_page(index)
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for Pagify<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pagify")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("pages", &self.pages)
            .field("current_page", &self.current_page)
            .field("transition", &self.transition)
            .field("target_column", &self.target_column)
            .field("offset_percent", &self.offset_percent)
            .finish_non_exhaustive()
    }
}

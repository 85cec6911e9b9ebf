use crate::TransitionState;

/// Current page and page count.
///
/// `current_page` is always at least 1. After every completed navigation it is also at most
/// `total_pages` (unless the page set is empty).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationState {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }
}

/// A combined snapshot of navigation + transition state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub navigation: NavigationState,
    pub transition: TransitionState,
    /// Offset of the most recent transition target, in percent of the viewport.
    pub offset_percent: f32,
}

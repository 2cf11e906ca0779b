//! Result presentation
//!
//! Pure derivations over a probe result list: the visible slice under an
//! expand/collapse state, the "show more" affordance, and the three-way
//! loading / empty / rows distinction. No state beyond the one boolean.

use crate::rpc::ProbeResult;

/// Expand/collapse state for the results view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub expanded: bool,
}

impl ViewState {
    /// Flip between collapsed and expanded
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Slice of results currently visible: the first `preview_size` rows when
/// collapsed, everything when expanded.
pub fn visible(results: &[ProbeResult], expanded: bool, preview_size: usize) -> &[ProbeResult] {
    if expanded {
        results
    } else {
        &results[..results.len().min(preview_size)]
    }
}

/// True when the expand control should be offered: more rows than the
/// preview holds, and probing has finished.
pub fn show_toggle(len: usize, preview_size: usize, loading: bool) -> bool {
    len > preview_size && !loading
}

/// What the results area shows
#[derive(Debug, PartialEq)]
pub enum Panel<'a> {
    /// Probes still in flight
    Loading,
    /// Probing finished with nothing to show
    Empty,
    /// Probing finished with rows
    Rows {
        rows: &'a [ProbeResult],
        show_toggle: bool,
    },
}

/// Derive the panel for the current snapshot and view state
pub fn panel<'a>(
    results: &'a [ProbeResult],
    loading: bool,
    view: ViewState,
    preview_size: usize,
) -> Panel<'a> {
    if loading {
        return Panel::Loading;
    }
    if results.is_empty() {
        return Panel::Empty;
    }

    Panel::Rows {
        rows: visible(results, view.expanded, preview_size),
        show_toggle: show_toggle(results.len(), preview_size, loading),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(n: usize) -> Vec<ProbeResult> {
        (0..n)
            .map(|i| ProbeResult {
                endpoint: format!("ep-{}", i),
                reachable: true,
                latency: None,
            })
            .collect()
    }

    #[test]
    fn test_collapsed_shows_preview_prefix() {
        let all = results(6);

        let shown = visible(&all, false, 4);
        assert_eq!(shown.len(), 4);
        for (i, row) in shown.iter().enumerate() {
            assert_eq!(row.endpoint, format!("ep-{}", i));
        }
    }

    #[test]
    fn test_expanded_shows_everything() {
        let all = results(6);
        assert_eq!(visible(&all, true, 4).len(), 6);
    }

    #[test]
    fn test_short_list_unaffected_by_collapse() {
        let all = results(2);
        assert_eq!(visible(&all, false, 4).len(), 2);
        assert_eq!(visible(&all, true, 4).len(), 2);
    }

    #[test]
    fn test_zero_preview_size() {
        let all = results(3);
        assert!(visible(&all, false, 0).is_empty());
        assert_eq!(visible(&all, true, 0).len(), 3);
    }

    #[test]
    fn test_show_toggle_rules() {
        // More rows than the preview, done loading
        assert!(show_toggle(6, 4, false));
        // Still loading
        assert!(!show_toggle(6, 4, true));
        // Fits in the preview
        assert!(!show_toggle(4, 4, false));
        assert!(!show_toggle(3, 4, false));
        assert!(!show_toggle(0, 4, false));
    }

    #[test]
    fn test_panel_loading_wins_over_rows() {
        let all = results(6);
        assert_eq!(panel(&all, true, ViewState::default(), 4), Panel::Loading);
    }

    #[test]
    fn test_panel_empty_after_loading() {
        assert_eq!(panel(&[], false, ViewState::default(), 4), Panel::Empty);
        assert_eq!(panel(&[], true, ViewState::default(), 4), Panel::Loading);
    }

    #[test]
    fn test_panel_rows_collapsed_and_expanded() {
        let all = results(6);

        match panel(&all, false, ViewState { expanded: false }, 4) {
            Panel::Rows { rows, show_toggle } => {
                assert_eq!(rows.len(), 4);
                assert!(show_toggle);
            }
            other => panic!("expected rows, got {:?}", other),
        }

        match panel(&all, false, ViewState { expanded: true }, 4) {
            Panel::Rows { rows, show_toggle } => {
                assert_eq!(rows.len(), 6);
                assert!(show_toggle);
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_flips() {
        let mut view = ViewState::default();
        assert!(!view.expanded);
        view.toggle();
        assert!(view.expanded);
        view.toggle();
        assert!(!view.expanded);
    }
}

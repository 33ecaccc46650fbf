use std::collections::HashMap;
use std::time::{Duration, Instant};

use pwref_engine::ViewMode;
use pwref_types::Protocol;

/// How long a copy acknowledgment stays visible without a newer copy.
pub(crate) const COPY_ACK_TTL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Commands,
    Compare,
    Workflows,
    Setup,
}

impl Screen {
    pub(crate) fn all() -> [Screen; 4] {
        [Screen::Commands, Screen::Compare, Screen::Workflows, Screen::Setup]
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Screen::Commands => "Commands",
            Screen::Compare => "Compare",
            Screen::Workflows => "Workflows",
            Screen::Setup => "Setup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CopyOutcome {
    Copied,
    Failed,
}

#[derive(Debug, Clone, Copy)]
struct CopyAck {
    outcome: CopyOutcome,
    until: Instant,
}

/// All transient UI state, mutated only through the named transitions
/// below. Nothing here touches the terminal or the clock; callers pass
/// `Instant`s in, which keeps every transition deterministic under test.
pub(crate) struct AppState {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub search: String,
    pub view: ViewMode,
    pub active_category: usize,
    pub scroll: u16,
    pub workflow_cursor: usize,
    pub expanded_workflow: Option<String>,
    category_count: usize,
    workflow_count: usize,
    default_tab: Protocol,
    workflow_tabs: HashMap<String, Protocol>,
    copy_acks: HashMap<String, CopyAck>,
}

impl AppState {
    pub(crate) fn new(
        category_count: usize,
        workflow_count: usize,
        view: ViewMode,
        default_tab: Protocol,
    ) -> Self {
        Self {
            screen: Screen::Commands,
            input_mode: InputMode::Normal,
            search: String::new(),
            view,
            active_category: 0,
            scroll: 0,
            workflow_cursor: 0,
            expanded_workflow: None,
            category_count,
            workflow_count,
            default_tab,
            workflow_tabs: HashMap::new(),
            copy_acks: HashMap::new(),
        }
    }

    // --- Screens ---

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.scroll = 0;
    }

    // --- Category selection / view mode ---

    pub(crate) fn select_next_category(&mut self) {
        if self.category_count > 0 {
            self.active_category = (self.active_category + 1) % self.category_count;
            self.scroll = 0;
        }
    }

    pub(crate) fn select_previous_category(&mut self) {
        if self.category_count > 0 {
            self.active_category =
                (self.active_category + self.category_count - 1) % self.category_count;
            self.scroll = 0;
        }
    }

    pub(crate) fn toggle_view(&mut self) {
        self.view = self.view.toggle();
        self.scroll = 0;
    }

    // --- Search ---

    pub(crate) fn enter_search(&mut self) {
        self.screen = Screen::Commands;
        self.input_mode = InputMode::Search;
    }

    /// Leave search input, keeping the query active.
    pub(crate) fn commit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Leave search input and drop the query.
    pub(crate) fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search.clear();
        self.scroll = 0;
    }

    pub(crate) fn search_push(&mut self, c: char) {
        self.search.push(c);
        self.scroll = 0;
    }

    pub(crate) fn search_backspace(&mut self) {
        self.search.pop();
        self.scroll = 0;
    }

    // --- Scrolling ---

    pub(crate) fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub(crate) fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    // --- Workflow panel ---

    pub(crate) fn select_next_workflow(&mut self) {
        if self.workflow_cursor + 1 < self.workflow_count {
            self.workflow_cursor += 1;
        }
    }

    pub(crate) fn select_previous_workflow(&mut self) {
        self.workflow_cursor = self.workflow_cursor.saturating_sub(1);
    }

    /// Expand `id`, collapsing whatever else was expanded; toggling the
    /// already-expanded workflow collapses it. At most one workflow is
    /// expanded at any time.
    pub(crate) fn toggle_workflow(&mut self, id: &str) {
        if self.expanded_workflow.as_deref() == Some(id) {
            self.expanded_workflow = None;
        } else {
            self.expanded_workflow = Some(id.to_string());
        }
    }

    pub(crate) fn is_expanded(&self, id: &str) -> bool {
        self.expanded_workflow.as_deref() == Some(id)
    }

    /// The tab shown for `id`. Defaults until the first explicit switch,
    /// then sticks across collapse/expand cycles.
    pub(crate) fn active_tab(&self, id: &str) -> Protocol {
        self.workflow_tabs.get(id).copied().unwrap_or(self.default_tab)
    }

    pub(crate) fn cycle_tab(&mut self, id: &str) {
        let next = self.active_tab(id).next();
        self.workflow_tabs.insert(id.to_string(), next);
    }

    // --- Copy acknowledgment ---

    /// Record a copy attempt. A newer copy replaces the pending
    /// acknowledgment and its deadline (last write wins).
    pub(crate) fn mark_copy(&mut self, id: &str, outcome: CopyOutcome, now: Instant) {
        self.copy_acks.insert(
            id.to_string(),
            CopyAck {
                outcome,
                until: now + COPY_ACK_TTL,
            },
        );
    }

    /// The acknowledgment to display for `id`, if it has not decayed yet.
    pub(crate) fn copy_ack(&self, id: &str, now: Instant) -> Option<CopyOutcome> {
        self.copy_acks
            .get(id)
            .filter(|ack| ack.until > now)
            .map(|ack| ack.outcome)
    }

    /// Drop decayed acknowledgments. Called from the tick loop so the map
    /// does not grow over a long session.
    pub(crate) fn on_tick(&mut self, now: Instant) {
        self.copy_acks.retain(|_, ack| ack.until > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(8, 3, ViewMode::ByCategory, Protocol::Mcp)
    }

    #[test]
    fn category_selection_wraps_both_ways() {
        let mut state = state();
        state.select_previous_category();
        assert_eq!(state.active_category, 7);
        state.select_next_category();
        assert_eq!(state.active_category, 0);
    }

    #[test]
    fn expanding_one_workflow_collapses_the_other() {
        let mut state = state();

        state.toggle_workflow("login-auth");
        assert!(state.is_expanded("login-auth"));

        state.toggle_workflow("form-validation");
        assert!(state.is_expanded("form-validation"));
        assert!(!state.is_expanded("login-auth"));
        assert_eq!(state.expanded_workflow.as_deref(), Some("form-validation"));
    }

    #[test]
    fn toggling_the_expanded_workflow_collapses_it() {
        let mut state = state();

        state.toggle_workflow("login-auth");
        state.toggle_workflow("login-auth");
        assert_eq!(state.expanded_workflow, None);
    }

    #[test]
    fn tab_defaults_to_mcp_and_persists_across_collapse() {
        let mut state = state();

        state.toggle_workflow("login-auth");
        assert_eq!(state.active_tab("login-auth"), Protocol::Mcp);

        state.cycle_tab("login-auth");
        assert_eq!(state.active_tab("login-auth"), Protocol::Cli);

        // Collapse and re-expand: the tab choice survives.
        state.toggle_workflow("login-auth");
        state.toggle_workflow("login-auth");
        assert_eq!(state.active_tab("login-auth"), Protocol::Cli);

        // Other workflows are untouched.
        assert_eq!(state.active_tab("form-validation"), Protocol::Mcp);
    }

    #[test]
    fn copy_ack_decays_after_ttl() {
        let mut state = state();
        let t0 = Instant::now();

        state.mark_copy("login-auth", CopyOutcome::Copied, t0);
        assert_eq!(state.copy_ack("login-auth", t0), Some(CopyOutcome::Copied));
        assert_eq!(
            state.copy_ack("login-auth", t0 + Duration::from_millis(1999)),
            Some(CopyOutcome::Copied)
        );
        assert_eq!(state.copy_ack("login-auth", t0 + COPY_ACK_TTL), None);
    }

    #[test]
    fn a_second_copy_resets_the_deadline() {
        let mut state = state();
        let t0 = Instant::now();

        state.mark_copy("login-auth", CopyOutcome::Copied, t0);
        let t1 = t0 + Duration::from_millis(1500);
        state.mark_copy("login-auth", CopyOutcome::Copied, t1);

        // Without the reset this instant would be past the first deadline.
        assert_eq!(
            state.copy_ack("login-auth", t0 + Duration::from_millis(2500)),
            Some(CopyOutcome::Copied)
        );
        assert_eq!(state.copy_ack("login-auth", t1 + COPY_ACK_TTL), None);
    }

    #[test]
    fn copy_acks_are_independent_per_workflow() {
        let mut state = state();
        let t0 = Instant::now();

        state.mark_copy("login-auth", CopyOutcome::Copied, t0);
        assert_eq!(state.copy_ack("form-validation", t0), None);

        state.mark_copy("form-validation", CopyOutcome::Failed, t0);
        assert_eq!(state.copy_ack("login-auth", t0), Some(CopyOutcome::Copied));
        assert_eq!(
            state.copy_ack("form-validation", t0),
            Some(CopyOutcome::Failed)
        );
    }

    #[test]
    fn tick_prunes_decayed_acks() {
        let mut state = state();
        let t0 = Instant::now();

        state.mark_copy("login-auth", CopyOutcome::Copied, t0);
        state.on_tick(t0 + Duration::from_millis(2500));
        assert!(state.copy_acks.is_empty());
    }

    #[test]
    fn search_entry_returns_to_the_commands_screen() {
        let mut state = state();
        state.set_screen(Screen::Workflows);

        state.enter_search();
        assert_eq!(state.screen, Screen::Commands);
        assert_eq!(state.input_mode, InputMode::Search);

        state.search_push('c');
        state.search_push('l');
        state.commit_search();
        assert_eq!(state.search, "cl");
        assert_eq!(state.input_mode, InputMode::Normal);

        state.enter_search();
        state.cancel_search();
        assert!(state.search.is_empty());
    }

    #[test]
    fn workflow_cursor_clamps_at_both_ends() {
        let mut state = state();
        state.select_previous_workflow();
        assert_eq!(state.workflow_cursor, 0);

        for _ in 0..10 {
            state.select_next_workflow();
        }
        assert_eq!(state.workflow_cursor, 2);
    }
}

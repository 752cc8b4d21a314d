use crate::content::PageKind;

/// Width in logical pixels of the leading/trailing zones on the first/last
/// tab that turn a hover into drop-before-all / drop-after-all.
pub const EDGE_ZONE_WIDTH: f32 = 20.0;

/// Reorder gesture state. One tagged union instead of loose flags so a
/// target or boundary flag can never exist without a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging {
        source: usize,
        target: Option<usize>,
        to_start: bool,
        to_end: bool,
    },
}

/// One entry of the tab-strip drag preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSlot {
    Tab(PageKind),
    Placeholder,
}

/// The ordered open-tab sequence, the active page, and the in-flight
/// reorder gesture.
///
/// Invariants: the sequence never contains duplicate pages and is never
/// empty; the active page is always a member of the sequence. Invalid
/// operations are tolerated as no-ops rather than errors. Every mutator
/// returns whether anything observable changed so callers can skip
/// redundant redraws.
pub struct TabSession {
    open: Vec<PageKind>,
    active: PageKind,
    drag: DragState,
}

impl TabSession {
    pub fn new() -> Self {
        Self {
            open: vec![PageKind::DEFAULT],
            active: PageKind::DEFAULT,
            drag: DragState::Idle,
        }
    }

    pub fn tabs(&self) -> &[PageKind] {
        &self.open
    }

    pub fn active(&self) -> PageKind {
        self.active
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.drag, DragState::Idle)
    }

    pub fn drag_source(&self) -> Option<usize> {
        match self.drag {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    pub fn index_of(&self, page: PageKind) -> Option<usize> {
        self.open.iter().position(|open| *open == page)
    }

    // Backend Projects behaves like a provisional (preview) tab: switching
    // to any other page closes it implicitly.
    fn evict_provisional(&mut self, next: PageKind) -> bool {
        if self.active == PageKind::BackendProjects && next != PageKind::BackendProjects {
            let before = self.open.len();
            self.open.retain(|page| *page != PageKind::BackendProjects);
            return self.open.len() != before;
        }
        false
    }

    /// Opens a page: activates it if already open, otherwise appends it to
    /// the end of the strip and activates it.
    pub fn open(&mut self, page: PageKind) -> bool {
        let evicted = self.evict_provisional(page);
        let mut changed = evicted;
        if !self.open.contains(&page) {
            self.open.push(page);
            changed = true;
        }
        if self.active != page {
            self.active = page;
            changed = true;
        }
        changed
    }

    /// Activates an already-open page; unknown pages are ignored.
    pub fn activate(&mut self, page: PageKind) -> bool {
        if !self.open.contains(&page) {
            return false;
        }
        let evicted = self.evict_provisional(page);
        if self.active == page {
            return evicted;
        }
        self.active = page;
        true
    }

    /// Closes a page. Closing the active tab activates the tab before the
    /// closed position (or the new first tab); closing the last remaining
    /// tab resets the strip to the default page.
    pub fn close(&mut self, page: PageKind) -> bool {
        let Some(index) = self.index_of(page) else {
            return false;
        };
        self.open.remove(index);

        if self.active == page {
            if self.open.is_empty() {
                self.open.push(PageKind::DEFAULT);
                self.active = PageKind::DEFAULT;
            } else {
                let next_index = if index > 0 { index - 1 } else { 0 };
                let next = self.open[next_index.min(self.open.len() - 1)];
                self.evict_provisional(next);
                self.active = next;
            }
        } else if self.open.is_empty() {
            self.open.push(PageKind::DEFAULT);
            self.active = PageKind::DEFAULT;
        }
        true
    }

    /// Starts a reorder from `source` and focuses the dragged tab.
    pub fn begin_drag(&mut self, source: usize) -> bool {
        let Some(&page) = self.open.get(source) else {
            return false;
        };
        self.activate(page);
        // Re-resolve: activation may have evicted the provisional tab and
        // shifted indices.
        let Some(source) = self.index_of(page) else {
            return false;
        };
        self.drag = DragState::Dragging {
            source,
            target: None,
            to_start: false,
            to_end: false,
        };
        true
    }

    /// Records the hover target and boundary flags for an in-flight drag.
    /// Returns false (no redraw needed) when nothing changed, when there is
    /// no drag, or when hovering the source tab itself.
    pub fn drag_over(&mut self, index: usize, to_start: bool, to_end: bool) -> bool {
        let DragState::Dragging {
            source,
            target,
            to_start: old_start,
            to_end: old_end,
        } = self.drag
        else {
            return false;
        };
        if index == source || index >= self.open.len() {
            return false;
        }
        if target == Some(index) && old_start == to_start && old_end == to_end {
            return false;
        }
        self.drag = DragState::Dragging {
            source,
            target: Some(index),
            to_start,
            to_end,
        };
        true
    }

    /// Drag-over on the strip background rather than a tab: infers the
    /// target from the pointer x and the first/last tab bounds
    /// (left..right x ranges in the same coordinate space).
    pub fn drag_over_container(
        &mut self,
        pointer_x: f32,
        first_tab: (f32, f32),
        last_tab: (f32, f32),
    ) -> bool {
        let DragState::Dragging {
            source,
            target,
            to_start,
            to_end,
        } = self.drag
        else {
            return false;
        };
        let last_index = self.open.len() - 1;

        let (next_target, next_start, next_end) = if pointer_x < first_tab.0 + EDGE_ZONE_WIDTH {
            (Some(0), true, false)
        } else if pointer_x > last_tab.1 - EDGE_ZONE_WIDTH {
            (Some(last_index), false, true)
        } else if pointer_x >= last_tab.0 && pointer_x <= last_tab.1 {
            (Some(last_index), false, false)
        } else {
            // Somewhere between tabs: keep the current target, drop flags.
            (target, false, false)
        };

        if next_target == target && next_start == to_start && next_end == to_end {
            return false;
        }
        self.drag = DragState::Dragging {
            source,
            target: next_target,
            to_start: next_start,
            to_end: next_end,
        };
        true
    }

    /// Resolves the drop target for a release on the strip background.
    pub fn container_drop_target(
        &self,
        pointer_x: f32,
        first_tab: (f32, f32),
        last_tab: (f32, f32),
    ) -> usize {
        let last_index = self.open.len() - 1;
        if pointer_x < first_tab.0 + EDGE_ZONE_WIDTH {
            return 0;
        }
        if pointer_x > last_tab.1 - EDGE_ZONE_WIDTH {
            return last_index;
        }
        match self.drag {
            DragState::Dragging {
                target: Some(target),
                ..
            } => target,
            _ => last_index,
        }
    }

    /// Commits the reorder. The recorded hover target wins over
    /// `fallback_target` (the tab the pointer was released on). Adjacent
    /// positions swap directly; other moves remove and re-insert with the
    /// boundary flags deciding the edge cases. Always clears the gesture.
    pub fn drop(&mut self, fallback_target: usize) -> bool {
        let DragState::Dragging {
            source,
            target,
            to_start,
            to_end,
        } = self.drag
        else {
            return false;
        };
        self.drag = DragState::Idle;

        let len = self.open.len();
        let target = target.unwrap_or(fallback_target);
        if source >= len || target >= len || source == target {
            return false;
        }

        if source.abs_diff(target) == 1 {
            self.open.swap(source, target);
            return true;
        }

        let is_last = target == len - 1;
        let is_first = target == 0;
        let page = self.open.remove(source);
        let insert_index = if is_last && to_end {
            self.open.len()
        } else if is_first && to_start {
            0
        } else if source < target {
            // The removed tab shifted everything after it one slot left.
            target - 1
        } else if is_last && !to_end {
            // Dropping "near" the last tab lands just before it instead of
            // jumping past the end.
            target
        } else {
            target + 1
        };
        let insert_index = insert_index.min(self.open.len());
        self.open.insert(insert_index, page);
        true
    }

    /// Abandons the gesture without reordering.
    pub fn end_drag(&mut self) -> bool {
        if self.is_dragging() {
            self.drag = DragState::Idle;
            true
        } else {
            false
        }
    }

    /// The strip as it should render mid-drag: adjacent swaps show the two
    /// tabs pre-swapped, other moves show a placeholder gap at the drop
    /// position. Purely derived; the committed order is untouched until
    /// `drop`.
    pub fn preview(&self) -> Vec<TabSlot> {
        let DragState::Dragging {
            source,
            target: Some(target),
            to_start,
            to_end,
        } = self.drag
        else {
            return self.open.iter().copied().map(TabSlot::Tab).collect();
        };

        if source == target || source >= self.open.len() || target >= self.open.len() {
            return self.open.iter().copied().map(TabSlot::Tab).collect();
        }

        if source.abs_diff(target) == 1 {
            let mut pages = self.open.clone();
            pages.swap(source, target);
            return pages.into_iter().map(TabSlot::Tab).collect();
        }

        let last_index = self.open.len() - 1;
        let is_last = target == last_index;
        let is_first = target == 0;
        let at_end = is_last && to_end;
        let at_start = is_first && to_start;

        let mut slots = Vec::with_capacity(self.open.len() + 1);
        for (index, &page) in self.open.iter().enumerate() {
            let before = index == target && ((source < target && !at_end && !at_start) || at_start);
            let after = index == target && ((source > target && !at_end && !at_start) || at_end);
            if before {
                slots.push(TabSlot::Placeholder);
            }
            slots.push(TabSlot::Tab(page));
            if after {
                slots.push(TabSlot::Placeholder);
            }
        }
        slots
    }
}

/// Boundary flags for a hover over the tab at `index`, from the pointer x
/// and that tab's left..right bounds. Only the first and last tab have
/// edge zones.
pub fn edge_zones(
    index: usize,
    tab_count: usize,
    pointer_x: f32,
    tab_bounds: (f32, f32),
) -> (bool, bool) {
    if tab_count == 0 {
        return (false, false);
    }
    if index == tab_count - 1 {
        (false, pointer_x > tab_bounds.1 - EDGE_ZONE_WIDTH)
    } else if index == 0 {
        (pointer_x < tab_bounds.0 + EDGE_ZONE_WIDTH, false)
    } else {
        (false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageKind::*;

    fn session_with(pages: &[PageKind], active: PageKind) -> TabSession {
        let mut session = TabSession::new();
        for &page in pages {
            session.open(page);
        }
        session.activate(active);
        assert_eq!(session.tabs(), pages);
        session
    }

    fn drag(session: &mut TabSession, source: usize, target: usize, to_start: bool, to_end: bool) {
        assert!(session.begin_drag(source));
        session.drag_over(target, to_start, to_end);
        session.drop(target);
    }

    #[test]
    fn starts_with_the_default_page() {
        let session = TabSession::new();
        assert_eq!(session.tabs(), &[Welcome]);
        assert_eq!(session.active(), Welcome);
    }

    #[test]
    fn open_appends_and_activates() {
        let mut session = TabSession::new();
        assert!(session.open(Skills));
        assert_eq!(session.tabs(), &[Welcome, Skills]);
        assert_eq!(session.active(), Skills);
    }

    #[test]
    fn open_when_already_open_is_activate() {
        let mut session = session_with(&[Welcome, Skills, Contact], Contact);
        assert!(session.open(Skills));
        assert_eq!(session.tabs(), &[Welcome, Skills, Contact]);
        assert_eq!(session.active(), Skills);
        // And again: no duplicate, no reorder, no change at all.
        assert!(!session.open(Skills));
        assert_eq!(session.tabs(), &[Welcome, Skills, Contact]);
    }

    #[test]
    fn activate_requires_membership() {
        let mut session = TabSession::new();
        assert!(!session.activate(Contact));
        assert_eq!(session.active(), Welcome);
    }

    #[test]
    fn close_active_moves_to_previous_tab() {
        let mut session = session_with(&[Welcome, Skills, Contact], Contact);
        assert!(session.close(Contact));
        assert_eq!(session.tabs(), &[Welcome, Skills]);
        assert_eq!(session.active(), Skills);
    }

    #[test]
    fn close_active_first_moves_to_new_first() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        session.activate(Welcome);
        assert!(session.close(Welcome));
        assert_eq!(session.tabs(), &[Skills, Contact]);
        assert_eq!(session.active(), Skills);
    }

    #[test]
    fn close_inactive_keeps_active() {
        let mut session = session_with(&[Welcome, Skills, Contact], Contact);
        assert!(session.close(Skills));
        assert_eq!(session.tabs(), &[Welcome, Contact]);
        assert_eq!(session.active(), Contact);
    }

    #[test]
    fn closing_the_last_tab_resets_to_default() {
        let mut session = TabSession::new();
        session.open(Contact);
        session.close(Welcome);
        assert!(session.close(Contact));
        assert_eq!(session.tabs(), &[Welcome]);
        assert_eq!(session.active(), Welcome);
    }

    #[test]
    fn close_unknown_is_a_noop() {
        let mut session = session_with(&[Welcome, Skills], Skills);
        assert!(!session.close(Contact));
        assert_eq!(session.tabs(), &[Welcome, Skills]);
    }

    #[test]
    fn after_close_the_active_page_is_always_open() {
        let mut session = session_with(&[Welcome, Games, Skills, Contact], Games);
        for page in [Games, Welcome, Contact, Skills] {
            session.close(page);
            assert!(
                session.tabs().contains(&session.active()),
                "active {:?} not in {:?}",
                session.active(),
                session.tabs()
            );
            assert!(!session.tabs().is_empty());
        }
    }

    #[test]
    fn open_close_never_duplicates_or_empties() {
        let mut session = TabSession::new();
        let ops: &[(bool, PageKind)] = &[
            (true, Skills),
            (true, Contact),
            (true, Skills),
            (false, Welcome),
            (true, Games),
            (false, Skills),
            (false, Contact),
            (false, Games),
            (true, Dreams),
        ];
        for &(is_open, page) in ops {
            if is_open {
                session.open(page);
            } else {
                session.close(page);
            }
            let mut seen = std::collections::HashSet::new();
            assert!(session.tabs().iter().all(|page| seen.insert(*page)));
            assert!(!session.tabs().is_empty());
        }
    }

    #[test]
    fn provisional_tab_closes_when_navigating_away() {
        let mut session = TabSession::new();
        session.open(BackendProjects);
        assert_eq!(session.tabs(), &[Welcome, BackendProjects]);
        session.open(Skills);
        assert_eq!(session.tabs(), &[Welcome, Skills]);
        assert_eq!(session.active(), Skills);
    }

    #[test]
    fn provisional_tab_survives_reopening_itself() {
        let mut session = TabSession::new();
        session.open(BackendProjects);
        assert!(!session.open(BackendProjects));
        assert_eq!(session.tabs(), &[Welcome, BackendProjects]);
    }

    #[test]
    fn provisional_tab_closes_on_activate_away() {
        let mut session = TabSession::new();
        session.open(BackendProjects);
        session.activate(Welcome);
        assert_eq!(session.tabs(), &[Welcome]);
        assert_eq!(session.active(), Welcome);
    }

    #[test]
    fn provisional_tab_stays_while_inactive() {
        let mut session = TabSession::new();
        session.open(BackendProjects);
        session.open(Skills);
        session.open(BackendProjects);
        session.open(Games);
        // Eviction only triggers when navigating away from it.
        assert_eq!(session.tabs(), &[Welcome, Skills, Games]);
    }

    #[test]
    fn begin_drag_activates_the_dragged_tab() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        assert!(session.begin_drag(2));
        assert_eq!(session.active(), Contact);
        assert_eq!(session.drag_source(), Some(2));
    }

    #[test]
    fn begin_drag_out_of_range_is_a_noop() {
        let mut session = TabSession::new();
        assert!(!session.begin_drag(5));
        assert!(!session.is_dragging());
    }

    #[test]
    fn adjacent_drop_swaps_the_pair() {
        let mut session = session_with(&[Welcome, Skills], Welcome);
        drag(&mut session, 0, 1, false, false);
        assert_eq!(session.tabs(), &[Skills, Welcome]);
        assert!(!session.is_dragging());
    }

    #[test]
    fn adjacent_swap_is_its_own_inverse() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        drag(&mut session, 1, 2, false, false);
        assert_eq!(session.tabs(), &[Welcome, Contact, Skills]);
        drag(&mut session, 2, 1, false, false);
        assert_eq!(session.tabs(), &[Welcome, Skills, Contact]);
    }

    #[test]
    fn forward_drop_on_last_tab_lands_before_it() {
        // [A, B, C], drag A onto C without the end zone -> [B, A, C].
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        drag(&mut session, 0, 2, false, false);
        assert_eq!(session.tabs(), &[Skills, Welcome, Contact]);
    }

    #[test]
    fn forward_drop_into_the_end_zone_lands_last() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        drag(&mut session, 0, 2, false, true);
        assert_eq!(session.tabs(), &[Skills, Contact, Welcome]);
    }

    #[test]
    fn backward_drop_into_the_start_zone_lands_first() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        drag(&mut session, 2, 0, true, false);
        assert_eq!(session.tabs(), &[Contact, Welcome, Skills]);
    }

    #[test]
    fn backward_drop_inserts_after_the_target() {
        let mut session = session_with(&[Welcome, Skills, Contact, Games], Welcome);
        drag(&mut session, 3, 0, false, false);
        assert_eq!(session.tabs(), &[Welcome, Games, Skills, Contact]);
    }

    #[test]
    fn drop_on_the_source_is_a_noop() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        session.begin_drag(1);
        assert!(!session.drop(1));
        assert_eq!(session.tabs(), &[Welcome, Skills, Contact]);
        assert!(!session.is_dragging());
    }

    #[test]
    fn drop_without_a_drag_is_a_noop() {
        let mut session = session_with(&[Welcome, Skills], Welcome);
        assert!(!session.drop(1));
        assert_eq!(session.tabs(), &[Welcome, Skills]);
    }

    #[test]
    fn end_drag_abandons_without_reordering() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        session.begin_drag(0);
        session.drag_over(2, false, true);
        assert!(session.end_drag());
        assert_eq!(session.tabs(), &[Welcome, Skills, Contact]);
        assert!(!session.end_drag());
    }

    #[test]
    fn drag_over_reports_changes_only() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        session.begin_drag(0);
        assert!(session.drag_over(2, false, false));
        assert!(!session.drag_over(2, false, false));
        assert!(session.drag_over(2, false, true));
        // Hovering the source never records a target.
        assert!(!session.drag_over(0, false, false));
    }

    #[test]
    fn container_hover_resolves_the_edges() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        session.begin_drag(1);
        let first = (100.0, 180.0);
        let last = (260.0, 340.0);

        assert!(session.drag_over_container(105.0, first, last));
        assert_eq!(
            session.drag(),
            DragState::Dragging {
                source: 1,
                target: Some(0),
                to_start: true,
                to_end: false
            }
        );

        assert!(session.drag_over_container(335.0, first, last));
        assert_eq!(
            session.drag(),
            DragState::Dragging {
                source: 1,
                target: Some(2),
                to_start: false,
                to_end: true
            }
        );

        // Over the last tab body: target last, no flags.
        assert!(session.drag_over_container(280.0, first, last));
        assert_eq!(
            session.drag(),
            DragState::Dragging {
                source: 1,
                target: Some(2),
                to_start: false,
                to_end: false
            }
        );

        // Dead space between tabs keeps the target and reports no change.
        assert!(!session.drag_over_container(220.0, first, last));
    }

    #[test]
    fn container_drop_target_prefers_the_zones() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        session.begin_drag(1);
        let first = (100.0, 180.0);
        let last = (260.0, 340.0);
        assert_eq!(session.container_drop_target(110.0, first, last), 0);
        assert_eq!(session.container_drop_target(330.0, first, last), 2);
        session.drag_over(2, false, false);
        assert_eq!(session.container_drop_target(220.0, first, last), 2);
    }

    #[test]
    fn preview_shows_adjacent_pairs_pre_swapped() {
        let mut session = session_with(&[Welcome, Skills, Contact], Welcome);
        session.begin_drag(0);
        session.drag_over(1, false, false);
        assert_eq!(
            session.preview(),
            vec![
                TabSlot::Tab(Skills),
                TabSlot::Tab(Welcome),
                TabSlot::Tab(Contact)
            ]
        );
        // Preview never touches the committed order.
        assert_eq!(session.tabs(), &[Welcome, Skills, Contact]);
    }

    #[test]
    fn preview_places_the_gap_around_the_target() {
        let mut session = session_with(&[Welcome, Skills, Contact, Games], Welcome);
        session.begin_drag(0);
        session.drag_over(2, false, false);
        assert_eq!(
            session.preview(),
            vec![
                TabSlot::Tab(Welcome),
                TabSlot::Tab(Skills),
                TabSlot::Placeholder,
                TabSlot::Tab(Contact),
                TabSlot::Tab(Games),
            ]
        );

        session.drag_over(3, false, true);
        assert_eq!(
            session.preview(),
            vec![
                TabSlot::Tab(Welcome),
                TabSlot::Tab(Skills),
                TabSlot::Tab(Contact),
                TabSlot::Tab(Games),
                TabSlot::Placeholder,
            ]
        );

        session.end_drag();
        session.begin_drag(3);
        session.drag_over(0, true, false);
        assert_eq!(
            session.preview(),
            vec![
                TabSlot::Placeholder,
                TabSlot::Tab(Welcome),
                TabSlot::Tab(Skills),
                TabSlot::Tab(Contact),
                TabSlot::Tab(Games),
            ]
        );

        session.drag_over(1, false, false);
        assert_eq!(
            session.preview(),
            vec![
                TabSlot::Tab(Welcome),
                TabSlot::Tab(Skills),
                TabSlot::Placeholder,
                TabSlot::Tab(Contact),
                TabSlot::Tab(Games),
            ]
        );
    }

    #[test]
    fn preview_without_a_target_is_the_plain_strip() {
        let mut session = session_with(&[Welcome, Skills], Welcome);
        session.begin_drag(0);
        assert_eq!(
            session.preview(),
            vec![TabSlot::Tab(Welcome), TabSlot::Tab(Skills)]
        );
    }

    #[test]
    fn edge_zones_only_apply_to_the_strip_ends() {
        // Last tab, pointer inside the trailing 20px.
        assert_eq!(edge_zones(2, 3, 395.0, (300.0, 400.0)), (false, true));
        assert_eq!(edge_zones(2, 3, 350.0, (300.0, 400.0)), (false, false));
        // First tab, pointer inside the leading 20px.
        assert_eq!(edge_zones(0, 3, 105.0, (100.0, 200.0)), (true, false));
        assert_eq!(edge_zones(0, 3, 150.0, (100.0, 200.0)), (false, false));
        // Middle tabs never set flags.
        assert_eq!(edge_zones(1, 3, 205.0, (200.0, 300.0)), (false, false));
    }
}

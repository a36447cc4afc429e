//! State machine behind the quick-search box.
//!
//! The controller performs no I/O and owns no timers. Callers feed it
//! keystrokes, timer expiries and fetch results; it decides which request to
//! issue and whether a response may still be shown.

use std::fmt::Display;

use crate::domain::search::SearchResultItem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    /// Text changed, debounce timer armed.
    Pending,
    Loading,
    Success,
    Failed,
}

/// Identifies one armed debounce timer. Only the newest ticket can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerTicket(u64);

/// Lookup the caller must perform once the debounce timer fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub text: String,
}

/// What happened to a response handed to [`SearchController::on_response`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied,
    /// Superseded or dismissed; the response was dropped.
    Cancelled,
}

#[derive(Debug, Default)]
pub struct SearchController {
    text: String,
    status: SearchStatus,
    results: Vec<SearchResultItem>,
    error: Option<String>,
    timer: u64,
    timer_armed: bool,
    last_seq: u64,
    awaiting: Option<u64>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text as typed, updated on every keystroke.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// Sequence number of the most recently issued request, 0 before any.
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Records a keystroke and arms a new debounce timer.
    ///
    /// Any previously returned ticket becomes stale.
    pub fn on_text_change(&mut self, raw: &str) -> TimerTicket {
        self.text = raw.to_string();
        self.timer += 1;
        self.timer_armed = true;
        self.status = SearchStatus::Pending;
        TimerTicket(self.timer)
    }

    /// Handles a debounce timer expiry.
    ///
    /// Returns the request to issue, or `None` when the ticket is stale or the
    /// text is blank (which also clears the results).
    pub fn on_timer_fired(&mut self, ticket: TimerTicket) -> Option<SearchRequest> {
        if !self.timer_armed || ticket.0 != self.timer {
            return None;
        }
        self.timer_armed = false;

        let text = self.text.trim();
        if text.is_empty() {
            self.status = SearchStatus::Idle;
            self.results.clear();
            self.error = None;
            self.awaiting = None;
            return None;
        }

        self.last_seq += 1;
        self.awaiting = Some(self.last_seq);
        self.status = SearchStatus::Loading;
        self.error = None;

        Some(SearchRequest {
            seq: self.last_seq,
            text: text.to_string(),
        })
    }

    /// Applies the response of request `seq` if it is still the latest one.
    ///
    /// A failure keeps the results already on screen.
    pub fn on_response<E: Display>(
        &mut self,
        seq: u64,
        response: Result<Vec<SearchResultItem>, E>,
    ) -> ResponseOutcome {
        if self.awaiting != Some(seq) {
            log::debug!("Discarding search response #{seq}, latest is #{}", self.last_seq);
            return ResponseOutcome::Cancelled;
        }
        self.awaiting = None;

        let settled = match response {
            Ok(items) => {
                self.results = items;
                self.error = None;
                SearchStatus::Success
            }
            Err(err) => {
                self.error = Some(format!("Search failed: {err}"));
                SearchStatus::Failed
            }
        };
        // A keystroke typed while loading keeps its timer running.
        if !self.timer_armed {
            self.status = settled;
        }

        ResponseOutcome::Applied
    }

    /// Clears the box after the user picks `item` and hands the item back.
    ///
    /// Any lookup still in flight is for text that is gone, so its response
    /// is discarded.
    pub fn on_select(&mut self, item: SearchResultItem) -> SearchResultItem {
        self.close();
        self.text.clear();
        self.awaiting = None;
        item
    }

    /// Closes the dropdown. An in-flight request is not cancelled: its
    /// response still goes through the sequence check like any other.
    pub fn on_dismiss(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.status = SearchStatus::Idle;
        self.results.clear();
        self.error = None;
        self.timer_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(titles: &[&str]) -> Vec<SearchResultItem> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| SearchResultItem::new(i.to_string(), *title))
            .collect()
    }

    fn issue(controller: &mut SearchController, text: &str) -> SearchRequest {
        let ticket = controller.on_text_change(text);
        controller.on_timer_fired(ticket).expect("request issued")
    }

    #[test]
    fn text_updates_immediately_and_arms_timer() {
        let mut controller = SearchController::new();

        controller.on_text_change("mu");

        assert_eq!(controller.text(), "mu");
        assert_eq!(controller.status(), SearchStatus::Pending);
        assert!(controller.results().is_empty());
    }

    #[test]
    fn only_latest_ticket_fires() {
        let mut controller = SearchController::new();
        let first = controller.on_text_change("a");
        let second = controller.on_text_change("ab");

        assert_eq!(controller.on_timer_fired(first), None);
        assert_eq!(
            controller.on_timer_fired(second),
            Some(SearchRequest {
                seq: 1,
                text: "ab".to_string()
            })
        );
        assert_eq!(controller.on_timer_fired(second), None);
        assert!(controller.is_loading());
    }

    #[test]
    fn blank_text_clears_without_request() {
        let mut controller = SearchController::new();
        let request = issue(&mut controller, "lamp");
        controller.on_response::<String>(request.seq, Ok(items(&["Lamp"])));

        let ticket = controller.on_text_change("  ");

        assert_eq!(controller.on_timer_fired(ticket), None);
        assert_eq!(controller.status(), SearchStatus::Idle);
        assert!(controller.results().is_empty());
        assert_eq!(controller.last_seq(), 1);
    }

    #[test]
    fn stale_response_never_overwrites_newer_one() {
        let mut controller = SearchController::new();
        let first = issue(&mut controller, "a");
        let second = issue(&mut controller, "ab");

        assert_eq!(
            controller.on_response::<String>(second.seq, Ok(items(&["Abacus"]))),
            ResponseOutcome::Applied
        );
        assert_eq!(
            controller.on_response::<String>(first.seq, Ok(items(&["Apple"]))),
            ResponseOutcome::Cancelled
        );

        assert_eq!(controller.results(), items(&["Abacus"]).as_slice());
        assert_eq!(controller.status(), SearchStatus::Success);
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut controller = SearchController::new();
        let first = issue(&mut controller, "lamp");
        controller.on_response::<String>(first.seq, Ok(items(&["Lamp"])));

        let second = issue(&mut controller, "lampshade");
        controller.on_response(second.seq, Err("connection reset"));

        assert_eq!(controller.status(), SearchStatus::Failed);
        assert_eq!(controller.error(), Some("Search failed: connection reset"));
        assert_eq!(controller.results(), items(&["Lamp"]).as_slice());
        assert!(!controller.is_loading());
    }

    #[test]
    fn response_during_new_keystroke_keeps_pending() {
        let mut controller = SearchController::new();
        let request = issue(&mut controller, "lam");
        controller.on_text_change("lamp");

        controller.on_response::<String>(request.seq, Ok(items(&["Lamb"])));

        assert_eq!(controller.status(), SearchStatus::Pending);
        assert_eq!(controller.results().len(), 1);
    }

    #[test]
    fn select_clears_text_and_results() {
        let mut controller = SearchController::new();
        let request = issue(&mut controller, "mug");
        controller.on_response::<String>(request.seq, Ok(items(&["Mug"])));
        let chosen = controller.results()[0].clone();

        let selected = controller.on_select(chosen.clone());

        assert_eq!(selected, chosen);
        assert_eq!(controller.text(), "");
        assert!(controller.results().is_empty());
        assert_eq!(controller.status(), SearchStatus::Idle);
    }

    #[test]
    fn latest_response_after_dismiss_is_applied() {
        let mut controller = SearchController::new();
        let request = issue(&mut controller, "mug");

        controller.on_dismiss();
        assert_eq!(controller.status(), SearchStatus::Idle);
        assert!(!controller.is_loading());

        assert_eq!(
            controller.on_response::<String>(request.seq, Ok(items(&["Mug"]))),
            ResponseOutcome::Applied
        );
        assert_eq!(controller.results(), items(&["Mug"]).as_slice());
        assert_eq!(controller.text(), "mug");
        assert_eq!(controller.last_seq(), 1);
    }

    #[test]
    fn older_response_after_dismiss_is_still_discarded() {
        let mut controller = SearchController::new();
        let first = issue(&mut controller, "mu");
        let second = issue(&mut controller, "mug");

        controller.on_dismiss();

        assert_eq!(
            controller.on_response::<String>(first.seq, Ok(items(&["Muffin"]))),
            ResponseOutcome::Cancelled
        );
        assert_eq!(
            controller.on_response::<String>(second.seq, Ok(items(&["Mug"]))),
            ResponseOutcome::Applied
        );
    }

    #[test]
    fn response_after_select_is_discarded() {
        let mut controller = SearchController::new();
        let request = issue(&mut controller, "mug");

        controller.on_select(SearchResultItem::new("p1", "Mug"));

        assert_eq!(
            controller.on_response::<String>(request.seq, Ok(items(&["Mug"]))),
            ResponseOutcome::Cancelled
        );
        assert!(controller.results().is_empty());
    }
}

use crate::view_model::{AppViewModel, MessageTone, QueryPhase};
use crate::QueryOption;

pub type QueryId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selected: Option<QueryOption>,
    loading: bool,
    message: String,
    tone: Option<MessageTone>,
    last_query_id: QueryId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            options: QueryOption::ALL.to_vec(),
            selected: self.selected,
            loading: self.loading,
            message: self.message.clone(),
            tone: self.tone,
            phase: self.phase(),
            dirty: self.dirty,
        }
    }

    pub fn selected(&self) -> Option<QueryOption> {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn phase(&self) -> QueryPhase {
        if self.loading {
            return QueryPhase::Loading;
        }
        match self.tone {
            None => QueryPhase::Idle,
            Some(MessageTone::Success) => QueryPhase::Success,
            Some(MessageTone::Warning) => QueryPhase::Warning,
            Some(MessageTone::Error) => QueryPhase::Error,
        }
    }

    pub(crate) fn select(&mut self, option: QueryOption) {
        if self.selected != Some(option) {
            self.selected = Some(option);
            self.mark_dirty();
        }
    }

    /// Enters Loading and hands out the id of the query about to be issued.
    pub(crate) fn begin_query(&mut self) -> QueryId {
        self.last_query_id += 1;
        self.loading = true;
        self.message.clear();
        self.tone = None;
        self.mark_dirty();
        self.last_query_id
    }

    pub(crate) fn show_message(&mut self, tone: MessageTone, message: String) {
        self.tone = Some(tone);
        self.message = message;
        self.mark_dirty();
    }

    pub(crate) fn finish_query(&mut self, tone: MessageTone, message: String) {
        self.loading = false;
        self.show_message(tone, message);
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

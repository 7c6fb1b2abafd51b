use crate::QueryOption;

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub options: Vec<QueryOption>,
    pub selected: Option<QueryOption>,
    pub loading: bool,
    pub message: String,
    pub tone: Option<MessageTone>,
    pub phase: QueryPhase,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn selected_label(&self) -> Option<&'static str> {
        self.selected.map(QueryOption::label)
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked an entry from the option selector.
    OptionSelected(crate::QueryOption),
    /// User clicked the query button.
    QueryClicked,
    /// Engine finished a query.
    QueryFinished {
        query_id: crate::QueryId,
        outcome: QueryOutcome,
    },
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// What the user gets to see of a finished query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// HTTP 200 with a `message` field in the body.
    Completed { message: String },
    /// The backend answered with a status other than 200.
    Rejected { status: u16 },
    /// The request never got an answer.
    Unreachable,
}

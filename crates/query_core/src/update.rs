use crate::{AppState, Effect, MessageTone, Msg, QueryOutcome};

pub const MSG_NO_SELECTION: &str = "⚠️ Please select an option.";
pub const SUCCESS_PREFIX: &str = "✅ Query completed. Result: ";
pub const MSG_QUERY_FAILED: &str = "⚠️ An error occurred while running the query.";
pub const MSG_UNREACHABLE: &str = "❌ Could not connect to the API.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::OptionSelected(option) => {
            state.select(option);
            Vec::new()
        }
        Msg::QueryClicked => match state.selected() {
            None => {
                state.show_message(MessageTone::Warning, MSG_NO_SELECTION.to_string());
                Vec::new()
            }
            // A click while loading issues another query; nothing is cancelled.
            Some(option) => {
                let query_id = state.begin_query();
                vec![Effect::PostQuery { query_id, option }]
            }
        },
        Msg::QueryFinished { outcome, .. } => {
            let (tone, message) = describe_outcome(outcome);
            state.finish_query(tone, message);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn describe_outcome(outcome: QueryOutcome) -> (MessageTone, String) {
    match outcome {
        QueryOutcome::Completed { message } => {
            (MessageTone::Success, format!("{SUCCESS_PREFIX}{message}"))
        }
        QueryOutcome::Rejected { .. } => (MessageTone::Warning, MSG_QUERY_FAILED.to_string()),
        QueryOutcome::Unreachable => (MessageTone::Error, MSG_UNREACHABLE.to_string()),
    }
}

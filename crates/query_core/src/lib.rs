//! Query menu core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod option;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, QueryOutcome};
pub use option::{QueryOption, UnknownOption};
pub use state::{AppState, QueryId};
pub use update::{
    update, MSG_NO_SELECTION, MSG_QUERY_FAILED, MSG_UNREACHABLE, SUCCESS_PREFIX,
};
pub use view_model::{AppViewModel, MessageTone, QueryPhase};

//! Console login core: pure form state machine and view-model helpers.
mod config;
mod debounce;
mod effect;
mod msg;
mod provider;
mod state;
mod update;
mod view_model;

pub use config::{CloudConfig, FieldEdit, ValidationError};
pub use debounce::Debouncer;
pub use effect::{Effect, COPY_FEEDBACK_DURATION, DEBOUNCE_DELAY};
pub use msg::Msg;
pub use provider::{ParseProviderError, Provider, ProviderDefaults};
pub use state::{FormState, Revision, SubmissionId, GENERIC_FAILURE_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, FormViewModel, ResultViewModel};

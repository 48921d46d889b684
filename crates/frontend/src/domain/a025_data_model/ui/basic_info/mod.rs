//! Basic info step of the data model wizard
//!
//! - model.rs: service trait and its HTTP implementation
//! - validator.rs: async field validation (local rules, then uniqueness)
//! - state.rs: plain form state with per-field revisions
//! - view_model.rs: signals and commands
//! - handle.rs: validate/get_value bridge for the wizard
//! - view.rs: Leptos component

mod handle;
mod model;
mod state;
mod validator;
mod view;
mod view_model;

pub use handle::{BasicInfoHandle, BasicInfoRef};
pub use model::{BasicInfoApi, HttpBasicInfoApi};
pub use state::BasicInfoState;
pub use view::BasicInfo;
pub use view_model::{BasicInfoVm, ModelDetailUpdater};

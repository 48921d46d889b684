//! Data model creation wizard: the "basic info" step
//!
//! - aggregate.rs: wizard-level model state and mode
//! - data_source.rs: selectable data sources and their metadata payload
//! - basic_info.rs: the step's own fields and the value it hands back
//! - validation.rs: field rules and uniqueness-check contract

pub mod aggregate;
pub mod basic_info;
pub mod data_source;
pub mod validation;

pub use aggregate::{DataModelId, ModelDetail, WizardMode};
pub use basic_info::{BasicInfoField, MergedValue, ModelDraftFields, ValidationTrigger};
pub use data_source::{decode_data_sources, DataSourceId, DataSourceItem, DsType, ExtraMetadata};
pub use validation::{FieldCode, FieldError, RepeatValidateRequest, UniqueCheck};

pub mod field_error;
pub mod input;
pub mod select;
pub mod textarea;

pub use field_error::FieldErrorText;
pub use input::Input;
pub use select::{filter_options, Select};
pub use textarea::Textarea;

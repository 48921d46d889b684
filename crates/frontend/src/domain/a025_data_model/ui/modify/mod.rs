//! Wizard page hosting the basic info step

mod view;

pub use view::DataModelModify;

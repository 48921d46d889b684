pub mod basic_info;
pub mod modify;

pub use modify::DataModelModify;

pub mod a025_data_model;

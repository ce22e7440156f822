pub mod data_file;

pub mod parameters_reader;
pub mod writer;

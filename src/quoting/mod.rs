pub mod parameters_repository;
pub mod quote_generator;

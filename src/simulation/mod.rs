pub mod simulated_broker;

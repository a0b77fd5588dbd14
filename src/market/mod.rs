pub mod broker;
pub mod fair_value_agent;

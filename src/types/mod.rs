pub mod decision;
pub mod fair_value;
pub mod instrument;
pub mod order_book;
pub mod position;
pub mod price;
pub mod quote;
pub mod quoting_parameters;
pub mod side;

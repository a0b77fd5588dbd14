pub mod trader;

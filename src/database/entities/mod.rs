pub mod fuels;
pub mod industries;
pub mod renewables;
pub mod user_data;

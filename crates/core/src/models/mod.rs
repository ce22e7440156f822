pub mod chart;
pub mod dataset;
pub mod price;
pub mod settings;

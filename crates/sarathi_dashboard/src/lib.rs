pub mod chart;
pub mod error;
pub mod panels;
pub mod session;

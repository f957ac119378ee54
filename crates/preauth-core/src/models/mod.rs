pub mod anomaly;
pub mod intake;
pub mod labels;
pub mod response;

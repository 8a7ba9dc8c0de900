pub mod client;
pub mod throttle;

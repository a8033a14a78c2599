// Scripted opponents

mod controller;
mod tracker;

pub use controller::Controller;
pub use tracker::Tracker;

pub mod controller;
pub mod pages;

pub use controller::UiController;

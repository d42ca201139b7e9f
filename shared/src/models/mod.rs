//! Domain models shared between the booking and chef-management flows.

pub mod dish;

pub use dish::{DayDish, DateSavedRef, Dish, DishAvailability, DishCategory, DishCreate};

//! API request/response types shared with the remote store
//!
//! Shapes match the remote REST endpoints byte for byte; see the client
//! crate for the operations that carry them.

use crate::calendar::CalendarDate;
use crate::models::{DayDish, DishAvailability, DishCreate};
use serde::{Deserialize, Serialize};

/// `GET booking/week/{week}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekDishesResponse {
    pub dishes: Vec<DishAvailability>,
}

/// `GET chef-management/day-dishes/{date}/` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayDishesResponse {
    pub dishes: Vec<DayDish>,
    /// Booked attendee count for the day, absent when nobody booked yet.
    pub attendance: Option<i64>,
}

/// `POST chef-management/create/` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDishRequest {
    pub dish: DishCreate,
    /// Dates to offer the new dish on.
    #[serde(default)]
    pub dates: Vec<CalendarDate>,
}

/// `DELETE chef-management/delete-dish-from-date/` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDishFromDateRequest {
    pub date_has_dish_ids: Vec<i64>,
}

/// Success envelope used by mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope used by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: serde_json::Value,
}

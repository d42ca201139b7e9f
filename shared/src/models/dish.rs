//! Dish Model

use crate::calendar::CalendarDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dish entity
///
/// Field names follow the remote store's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub dish_id: i64,
    pub dish_name: String,
    pub dish_description: Option<String>,
    /// Free-form category label; resolve with [`DishCategory::parse`].
    pub dish_type: String,
    pub dish_calories: Option<i32>,
    pub light_healthy: Option<bool>,
    pub sugar_free: Option<bool>,
}

impl Dish {
    /// The display category, `None` for unrecognized labels.
    pub fn category(&self) -> Option<DishCategory> {
        DishCategory::parse(&self.dish_type)
    }
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub dish_name: String,
    pub dish_description: Option<String>,
    pub dish_type: String,
    pub dish_calories: Option<i32>,
    pub light_healthy: Option<bool>,
    pub sugar_free: Option<bool>,
}

/// Fixed menu categories used to group the display.
///
/// The wire `dish_type` field is open-ended; labels that match none of
/// these are dropped from grouped views rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishCategory {
    Soup,
    #[serde(rename = "Main Course")]
    MainCourse,
    Side,
    Dessert,
    Water,
}

impl DishCategory {
    /// All categories in display order.
    pub const ALL: [DishCategory; 5] = [
        DishCategory::Soup,
        DishCategory::MainCourse,
        DishCategory::Side,
        DishCategory::Dessert,
        DishCategory::Water,
    ];

    /// Resolve a wire label, `None` for unrecognized categories.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Soup" => Some(Self::Soup),
            "Main Course" => Some(Self::MainCourse),
            "Side" => Some(Self::Side),
            "Dessert" => Some(Self::Dessert),
            "Water" => Some(Self::Water),
            _ => None,
        }
    }

    /// The wire/display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Soup => "Soup",
            Self::MainCourse => "Main Course",
            Self::Side => "Side",
            Self::Dessert => "Dessert",
            Self::Water => "Water",
        }
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One dish offered on one date, as served by the booking week feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishAvailability {
    pub date: CalendarDate,
    pub dish: Dish,
}

/// Nested date reference in the chef day feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSavedRef {
    pub date_saved: CalendarDate,
}

/// One dish-on-date row from the chef day feed, including the row id
/// needed to remove the dish from that date, the planned quantity and
/// the accumulated diner ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDish {
    pub date_has_dish_id: i64,
    pub date_saved: DateSavedRef,
    pub dish: Dish,
    pub quantity: Option<i32>,
    #[serde(default)]
    pub rating_sum: u32,
    #[serde(default)]
    pub rating_count: u32,
    pub average_rating: Option<f64>,
}

impl DayDish {
    pub fn date(&self) -> CalendarDate {
        self.date_saved.date_saved
    }
}

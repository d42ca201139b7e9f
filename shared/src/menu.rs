//! Menu grouping for display
//!
//! Turns the flat dish feeds into the containers the views render from.
//! Every requested weekday and every category is present in the result,
//! empty when nothing matches, so consumers never branch on missing keys.

use crate::calendar::CalendarDate;
use crate::models::{DayDish, DishAvailability, DishCategory};
use chrono::Weekday;
use std::collections::HashMap;

/// Group one week's dish availabilities by weekday, then by category.
///
/// `dishes` is assumed pre-filtered to a single week by the fetch
/// boundary. Dishes whose `dish_type` matches no known category are
/// dropped.
pub fn group_by_weekday_and_category(
    dishes: &[DishAvailability],
    weekdays: &[Weekday],
) -> HashMap<Weekday, HashMap<DishCategory, Vec<DishAvailability>>> {
    let mut grouped = HashMap::with_capacity(weekdays.len());

    for &day in weekdays {
        let mut by_category = empty_categories::<DishAvailability>();
        for availability in dishes {
            if availability.date.weekday() != day {
                continue;
            }
            if let Some(category) = availability.dish.category() {
                by_category
                    .entry(category)
                    .or_default()
                    .push(availability.clone());
            }
        }
        grouped.insert(day, by_category);
    }

    grouped
}

/// Group a single day's chef feed by category.
pub fn group_by_category(dishes: &[DayDish]) -> HashMap<DishCategory, Vec<DayDish>> {
    let mut by_category = empty_categories::<DayDish>();
    for row in dishes {
        if let Some(category) = row.dish.category() {
            by_category.entry(category).or_default().push(row.clone());
        }
    }
    by_category
}

/// Dishes dated on `day`, in feed order.
pub fn dishes_on(dishes: &[DishAvailability], date: CalendarDate) -> Vec<DishAvailability> {
    dishes
        .iter()
        .filter(|availability| availability.date == date)
        .cloned()
        .collect()
}

fn empty_categories<T>() -> HashMap<DishCategory, Vec<T>> {
    DishCategory::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dish;

    fn dish(id: i64, name: &str, dish_type: &str) -> Dish {
        Dish {
            dish_id: id,
            dish_name: name.to_string(),
            dish_description: None,
            dish_type: dish_type.to_string(),
            dish_calories: Some(250),
            light_healthy: Some(false),
            sugar_free: None,
        }
    }

    fn availability(date: &str, id: i64, name: &str, dish_type: &str) -> DishAvailability {
        DishAvailability {
            date: date.parse().unwrap(),
            dish: dish(id, name, dish_type),
        }
    }

    #[test]
    fn test_weekday_grouping_scenario() {
        // One Soup on Monday 2024-03-04, requested Monday and Tuesday.
        let dishes = vec![availability("2024-03-04", 1, "Tomato Soup", "Soup")];
        let grouped =
            group_by_weekday_and_category(&dishes, &[Weekday::Mon, Weekday::Tue]);

        assert_eq!(grouped.len(), 2);

        let monday = &grouped[&Weekday::Mon];
        assert_eq!(monday.len(), DishCategory::ALL.len());
        assert_eq!(monday[&DishCategory::Soup].len(), 1);
        assert_eq!(monday[&DishCategory::Soup][0].dish.dish_name, "Tomato Soup");
        assert!(monday[&DishCategory::MainCourse].is_empty());

        // Tuesday is present with every category empty.
        let tuesday = &grouped[&Weekday::Tue];
        assert_eq!(tuesday.len(), DishCategory::ALL.len());
        assert!(tuesday.values().all(Vec::is_empty));
    }

    #[test]
    fn test_unrecognized_category_is_dropped() {
        let dishes = vec![
            availability("2024-03-04", 1, "Goulash", "Main Course"),
            availability("2024-03-04", 2, "Mystery", "Experimental"),
        ];
        let grouped = group_by_weekday_and_category(&dishes, &[Weekday::Mon]);
        let monday = &grouped[&Weekday::Mon];
        let total: usize = monday.values().map(Vec::len).sum();
        assert_eq!(total, 1);
        assert_eq!(monday[&DishCategory::MainCourse][0].dish.dish_id, 1);
    }

    #[test]
    fn test_day_grouping_seeds_all_categories() {
        let grouped = group_by_category(&[]);
        assert_eq!(grouped.len(), DishCategory::ALL.len());
        assert!(grouped.values().all(Vec::is_empty));
    }

    #[test]
    fn test_dishes_on_filters_by_date() {
        let dishes = vec![
            availability("2024-03-04", 1, "Tomato Soup", "Soup"),
            availability("2024-03-05", 2, "Goulash", "Main Course"),
        ];
        let monday = dishes_on(&dishes, "2024-03-04".parse().unwrap());
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].dish.dish_id, 1);
    }
}

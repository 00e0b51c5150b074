//! Derived values for cars.

/// Cars at most this many years old count as new.
pub const NEW_CAR_MAX_AGE: i32 = 5;

/// Age of a car in whole years, relative to `current_year`.
///
/// A manufacture year in the future yields a negative age; callers decide
/// how to present it.
pub fn age(manufacture_year: i32, current_year: i32) -> i32 {
    current_year - manufacture_year
}

pub fn is_new(age: i32) -> bool {
    age <= NEW_CAR_MAX_AGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_is_difference_of_years() {
        assert_eq!(age(2018, 2026), 8);
        assert_eq!(age(2026, 2026), 0);
    }

    #[test]
    fn five_year_old_car_is_new() {
        assert!(is_new(age(2021, 2026)));
    }

    #[test]
    fn six_year_old_car_is_not_new() {
        assert!(!is_new(age(2020, 2026)));
    }
}

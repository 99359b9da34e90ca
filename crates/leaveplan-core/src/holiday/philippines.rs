//! Philippine public holidays.
//!
//! Based on Proclamation No. 727, s. 2024. Bonifacio Day is listed on its
//! actual date (a Sunday in 2025).

/// `(0-based month, day, name, is_special)`
pub(super) const HOLIDAYS_2025: &[(u32, u32, &str, bool)] = &[
    // Regular holidays
    (0, 1, "New Year's Day", false),
    (3, 9, "Araw ng Kagitingan", false),
    (3, 17, "Maundy Thursday", false),
    (3, 18, "Good Friday", false),
    (4, 1, "Labor Day", false),
    (5, 12, "Independence Day", false),
    (7, 25, "National Heroes Day", false),
    (10, 30, "Bonifacio Day", false),
    (11, 25, "Christmas Day", false),
    (11, 30, "Rizal Day", false),
    // Special non-working holidays
    (1, 9, "Chinese New Year", true),
    (1, 25, "People Power Anniversary", true),
    (3, 19, "Black Saturday", true),
    (7, 21, "Ninoy Aquino Day", true),
    (10, 1, "All Saints' Day", true),
    (10, 2, "All Souls' Day", true),
    (11, 8, "Feast of the Immaculate Conception", true),
    (11, 24, "Christmas Eve", true),
    (11, 31, "New Year's Eve", true),
];

//! Fixed time-slot and table catalogs, and the availability rules over them

/// Bookable time slots, in display order.
pub const TIME_SLOTS: [&str; 6] = [
    "10:00 AM - 12:00 PM",
    "12:00 PM - 2:00 PM",
    "2:00 PM - 4:00 PM",
    "4:00 PM - 6:00 PM",
    "6:00 PM - 8:00 PM",
    "8:00 PM - 10:00 PM",
];

/// Table numbers in the cafe.
pub const TABLES: [i32; 5] = [1, 2, 3, 4, 5];

pub fn is_known_slot(slot: &str) -> bool {
    TIME_SLOTS.contains(&slot)
}

pub fn is_known_table(table_no: i32) -> bool {
    TABLES.contains(&table_no)
}

/// Slots that still have at least one free table.
///
/// `booked` holds `(slot, number of bookings)` for a single date.
pub fn available_slots(booked: &[(String, u64)]) -> Vec<&'static str> {
    TIME_SLOTS
        .iter()
        .copied()
        .filter(|slot| {
            let taken = booked
                .iter()
                .find(|(s, _)| s == slot)
                .map(|(_, n)| *n)
                .unwrap_or(0);
            taken < TABLES.len() as u64
        })
        .collect()
}

/// Tables not present in `booked` for a single (date, slot).
pub fn available_tables(booked: &[i32]) -> Vec<i32> {
    TABLES
        .iter()
        .copied()
        .filter(|t| !booked.contains(t))
        .collect()
}

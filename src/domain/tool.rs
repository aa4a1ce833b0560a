//! Tool catalog entries and derived availability

use serde::{Deserialize, Serialize};

use super::reservation::Reservation;
use crate::format;

/// A tool the library owns, with the reservations currently held against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Display name (e.g., "Band Saw")
    name: String,
    /// Total units owned by the library
    total_quantity: u32,
    /// Reservations in display order
    #[serde(default)]
    reservations: Vec<Reservation>,
}

impl Tool {
    /// Create a tool with no reservations
    pub fn new(name: impl Into<String>, total_quantity: u32) -> Self {
        Self::with_reservations(name, total_quantity, Vec::new())
    }

    /// Create a tool with an initial reservation list
    pub fn with_reservations(name: impl Into<String>, total_quantity: u32, reservations: Vec<Reservation>) -> Self {
        Self {
            name: name.into(),
            total_quantity,
            reservations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Append a reservation to the end of the list
    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    /// Units not currently reserved.
    ///
    /// Not clamped: a tool with more reservations than units reports a
    /// negative number.
    pub fn available_quantity(&self) -> i64 {
        i64::from(self.total_quantity) - self.reservations.len() as i64
    }

    /// Whether reservations exceed the owned quantity
    pub fn is_overbooked(&self) -> bool {
        self.available_quantity() < 0
    }

    /// One-line availability view: `Band Saw (Available: 32)`
    pub fn summarize(&self) -> String {
        format!("{} (Available: {})", self.name, self.available_quantity())
    }

    /// Catalog view. Shows the total quantity, not availability.
    pub fn render(&self) -> String {
        format!(
            "Tool: {}\nQuantity: {}\nReserve Now!\nDonate Tool!",
            self.name, self.total_quantity
        )
    }

    pub fn format_reservations(&self) -> String {
        format::format_reservations(&self.name, &self.reservations)
    }
}

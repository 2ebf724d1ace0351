// Billing: one day's room rent plus everything ordered from the kitchen

use crate::money::Money;
use crate::registry::{BookingError, RoomRegistry};
use crate::room::{Booking, RoomCategory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub room_rent: Money,
    pub meal_charges: Money,
    pub total: Money,
}

impl Bill {
    pub fn for_booking(category: RoomCategory, booking: &Booking) -> Self {
        let room_rent = category.daily_rate();
        let meal_charges = booking.meal_charges();
        Self {
            room_rent,
            meal_charges,
            total: room_rent + meal_charges,
        }
    }
}

pub fn compute_bill(
    registry: &RoomRegistry,
    category: RoomCategory,
    room: usize,
) -> Result<Bill, BookingError> {
    let booking = registry
        .slot(category, room)?
        .booking()
        .ok_or(BookingError::RoomNotBooked { category, room })?;
    Ok(Bill::for_booking(category, booking))
}

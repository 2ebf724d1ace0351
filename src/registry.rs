// Room registry: the hotel's whole inventory and the booking state machine
// Rooms are addressed 1-based from the outside and stored 0-based

use crate::menu::{MealItem, MealOrder};
use crate::money::Money;
use crate::occupant::Occupant;
use crate::room::{Booking, RoomCategory, RoomSlot};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;
use tracing::{debug, warn};

// Error types for registry and billing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Sorry! {category} room {room} is already booked.")]
    RoomUnavailable { category: RoomCategory, room: usize },

    #[error("{category} room {room} is not booked.")]
    RoomNotBooked { category: RoomCategory, room: usize },

    #[error("Invalid room number {room} for {category} (valid: 1 to {capacity})")]
    InvalidIndex {
        category: RoomCategory,
        room: usize,
        capacity: usize,
    },

    #[error("{category} rooms take {expected} guest(s), got {actual}")]
    OccupancyMismatch {
        category: RoomCategory,
        expected: usize,
        actual: usize,
    },
}

// Why a registry loaded from outside does not fit the hotel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum InventoryError {
    #[error("{category} has {actual} rooms, expected {expected}")]
    RoomCount {
        category: RoomCategory,
        actual: usize,
        expected: usize,
    },

    #[error("{category} room {room} holds {actual} guest(s), expected {expected}")]
    GuestCount {
        category: RoomCategory,
        room: usize,
        actual: usize,
        expected: usize,
    },

    #[error("{category} room {room}: line total {line_total} for {quantity} x {item} does not match the menu")]
    LineTotal {
        category: RoomCategory,
        room: usize,
        item: MealItem,
        quantity: u32,
        line_total: Money,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRegistry {
    executive_doubles: Vec<RoomSlot>,
    deluxe_doubles: Vec<RoomSlot>,
    executive_singles: Vec<RoomSlot>,
    deluxe_singles: Vec<RoomSlot>,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomRegistry {
    // Every room vacant
    pub fn new() -> Self {
        let vacant = |category: RoomCategory| vec![RoomSlot::Vacant; category.capacity()];
        Self {
            executive_doubles: vacant(RoomCategory::ExecutiveDouble),
            deluxe_doubles: vacant(RoomCategory::DeluxeDouble),
            executive_singles: vacant(RoomCategory::ExecutiveSingle),
            deluxe_singles: vacant(RoomCategory::DeluxeSingle),
        }
    }

    pub fn rooms(&self, category: RoomCategory) -> &[RoomSlot] {
        match category {
            RoomCategory::ExecutiveDouble => &self.executive_doubles,
            RoomCategory::DeluxeDouble => &self.deluxe_doubles,
            RoomCategory::ExecutiveSingle => &self.executive_singles,
            RoomCategory::DeluxeSingle => &self.deluxe_singles,
        }
    }

    fn rooms_mut(&mut self, category: RoomCategory) -> &mut [RoomSlot] {
        match category {
            RoomCategory::ExecutiveDouble => &mut self.executive_doubles,
            RoomCategory::DeluxeDouble => &mut self.deluxe_doubles,
            RoomCategory::ExecutiveSingle => &mut self.executive_singles,
            RoomCategory::DeluxeSingle => &mut self.deluxe_singles,
        }
    }

    // Maps a 1-based room number onto a storage index
    fn index(category: RoomCategory, room: usize) -> Result<usize, BookingError> {
        let capacity = category.capacity();
        if room == 0 || room > capacity {
            return Err(BookingError::InvalidIndex {
                category,
                room,
                capacity,
            });
        }
        Ok(room - 1)
    }

    pub fn slot(&self, category: RoomCategory, room: usize) -> Result<&RoomSlot, BookingError> {
        let idx = Self::index(category, room)?;
        Ok(&self.rooms(category)[idx])
    }

    fn slot_mut(
        &mut self,
        category: RoomCategory,
        room: usize,
    ) -> Result<&mut RoomSlot, BookingError> {
        let idx = Self::index(category, room)?;
        Ok(&mut self.rooms_mut(category)[idx])
    }

    pub fn is_available(&self, category: RoomCategory, room: usize) -> Result<bool, BookingError> {
        Ok(self.slot(category, room)?.is_vacant())
    }

    // One entry per room in room order, true when vacant
    pub fn list_availability(&self, category: RoomCategory) -> Vec<bool> {
        self.rooms(category).iter().map(RoomSlot::is_vacant).collect()
    }

    pub fn occupied_count(&self, category: RoomCategory) -> usize {
        self.rooms(category)
            .iter()
            .filter(|slot| !slot.is_vacant())
            .count()
    }

    pub fn book(
        &mut self,
        category: RoomCategory,
        room: usize,
        occupant: Occupant,
    ) -> Result<(), BookingError> {
        let slot = self.slot_mut(category, room)?;
        if !slot.is_vacant() {
            warn!(%category, room, "room already booked");
            return Err(BookingError::RoomUnavailable { category, room });
        }

        let expected = category.guests_per_room();
        let actual = occupant.guest_count();
        if expected != actual {
            return Err(BookingError::OccupancyMismatch {
                category,
                expected,
                actual,
            });
        }

        debug!(%category, room, guest = %occupant.primary.name, "booking room");
        *slot = RoomSlot::Occupied(Booking::new(occupant));
        Ok(())
    }

    // Vacates the room and drops its meal tab. Cancelling a vacant room is a no-op.
    pub fn cancel(&mut self, category: RoomCategory, room: usize) -> Result<(), BookingError> {
        let slot = self.slot_mut(category, room)?;
        if let RoomSlot::Occupied(booking) = std::mem::take(slot) {
            debug!(
                %category,
                room,
                guest = %booking.occupant.primary.name,
                meals = booking.meals.len(),
                "booking cancelled"
            );
        }
        Ok(())
    }

    pub fn add_meal(
        &mut self,
        category: RoomCategory,
        room: usize,
        item: MealItem,
        quantity: NonZeroU32,
    ) -> Result<&MealOrder, BookingError> {
        let booking = self
            .slot_mut(category, room)?
            .booking_mut()
            .ok_or(BookingError::RoomNotBooked { category, room })?;

        let order = MealOrder::new(item, quantity);
        debug!(%category, room, %item, quantity = quantity.get(), line_total = %order.line_total(), "meal ordered");
        booking.meals.push(order);
        // just pushed, so the tab is non-empty
        Ok(&booking.meals[booking.meals.len() - 1])
    }

    // Checks a registry that came from outside (e.g. a snapshot) against the fixed inventory and the menu
    pub(crate) fn validate(&self) -> Result<(), InventoryError> {
        for category in RoomCategory::ALL {
            let rooms = self.rooms(category);
            if rooms.len() != category.capacity() {
                return Err(InventoryError::RoomCount {
                    category,
                    actual: rooms.len(),
                    expected: category.capacity(),
                });
            }

            for (idx, slot) in rooms.iter().enumerate() {
                let Some(booking) = slot.booking() else {
                    continue;
                };
                let room = idx + 1;

                let guests = booking.occupant.guest_count();
                if guests != category.guests_per_room() {
                    return Err(InventoryError::GuestCount {
                        category,
                        room,
                        actual: guests,
                        expected: category.guests_per_room(),
                    });
                }

                if let Some(order) = booking.meals.iter().find(|o| !o.is_priced_correctly()) {
                    return Err(InventoryError::LineTotal {
                        category,
                        room,
                        item: order.item(),
                        quantity: order.quantity().get(),
                        line_total: order.line_total(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupant::Guest;
    use test_case::test_case;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn occupant_for(category: RoomCategory, name: &str) -> Occupant {
        let first = Guest::new(name, "555", "M");
        if category.is_double() {
            Occupant::double(first, Guest::new(format!("{}-2", name), "556", "F"))
        } else {
            Occupant::single(first)
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = RoomRegistry::new();
        for category in RoomCategory::ALL {
            let availability = registry.list_availability(category);
            assert_eq!(availability.len(), category.capacity());
            assert!(availability.iter().all(|&free| free));
            assert_eq!(registry.occupied_count(category), 0);
        }
    }

    #[test_case(RoomCategory::ExecutiveDouble; "executive double")]
    #[test_case(RoomCategory::DeluxeDouble; "deluxe double")]
    #[test_case(RoomCategory::ExecutiveSingle; "executive single")]
    #[test_case(RoomCategory::DeluxeSingle; "deluxe single")]
    fn test_book_then_cancel_every_room(category: RoomCategory) {
        let mut registry = RoomRegistry::new();

        for room in 1..=category.capacity() {
            assert_eq!(registry.is_available(category, room), Ok(true));
            registry
                .book(category, room, occupant_for(category, "guest"))
                .unwrap();
            assert_eq!(registry.is_available(category, room), Ok(false));
        }
        assert_eq!(registry.occupied_count(category), category.capacity());
        assert!(registry.list_availability(category).iter().all(|&free| !free));

        for room in 1..=category.capacity() {
            registry.cancel(category, room).unwrap();
            assert_eq!(registry.is_available(category, room), Ok(true));
        }
        assert_eq!(registry, RoomRegistry::new());
    }

    #[test]
    fn test_list_availability_follows_room_order() {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::ExecutiveSingle;
        registry.book(category, 2, occupant_for(category, "A")).unwrap();
        registry.book(category, 10, occupant_for(category, "B")).unwrap();

        let availability = registry.list_availability(category);
        assert!(availability[0]);
        assert!(!availability[1]);
        assert!(!availability[9]);
        assert_eq!(availability.iter().filter(|&&free| free).count(), 8);
    }

    #[test]
    fn test_double_booking_is_rejected_and_keeps_existing_stay() {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::ExecutiveDouble;
        registry.book(category, 3, occupant_for(category, "first")).unwrap();
        registry
            .add_meal(category, 3, MealItem::Burger, qty(1))
            .unwrap();
        let before = registry.clone();

        let result = registry.book(category, 3, occupant_for(category, "second"));
        assert_eq!(
            result,
            Err(BookingError::RoomUnavailable { category, room: 3 })
        );
        assert_eq!(registry, before);

        let booking = registry.slot(category, 3).unwrap().booking().unwrap();
        assert_eq!(booking.occupant.primary.name, "first");
        assert_eq!(booking.meals.len(), 1);
    }

    #[test]
    fn test_double_room_requires_second_guest() {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::DeluxeDouble;

        let result = registry.book(category, 1, Occupant::single(Guest::new("A", "555", "M")));
        assert_eq!(
            result,
            Err(BookingError::OccupancyMismatch {
                category,
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(registry.is_available(category, 1), Ok(true));
    }

    #[test]
    fn test_single_room_rejects_second_guest() {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::DeluxeSingle;
        let pair = Occupant::double(Guest::new("A", "555", "M"), Guest::new("B", "556", "F"));

        let result = registry.book(category, 1, pair);
        assert!(matches!(
            result,
            Err(BookingError::OccupancyMismatch { expected: 1, actual: 2, .. })
        ));
        assert_eq!(registry.is_available(category, 1), Ok(true));
    }

    #[test]
    fn test_last_room_is_valid_and_one_past_is_invalid_index() {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::DeluxeDouble;

        registry.book(category, 20, occupant_for(category, "A")).unwrap();
        assert_eq!(registry.is_available(category, 20), Ok(false));

        let result = registry.book(category, 21, occupant_for(category, "B"));
        assert_eq!(
            result,
            Err(BookingError::InvalidIndex {
                category,
                room: 21,
                capacity: 20
            })
        );
    }

    #[test_case(0; "room zero")]
    #[test_case(11; "one past capacity")]
    #[test_case(usize::MAX; "huge")]
    fn test_out_of_range_rooms_are_rejected_everywhere(room: usize) {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::ExecutiveSingle;
        let invalid = BookingError::InvalidIndex {
            category,
            room,
            capacity: 10,
        };

        assert_eq!(registry.is_available(category, room), Err(invalid.clone()));
        assert_eq!(registry.slot(category, room).err(), Some(invalid.clone()));
        assert_eq!(
            registry.book(category, room, occupant_for(category, "A")),
            Err(invalid.clone())
        );
        assert_eq!(
            registry.add_meal(category, room, MealItem::Pizza, qty(1)).err(),
            Some(invalid.clone())
        );
        assert_eq!(registry.cancel(category, room), Err(invalid));
        assert_eq!(registry, RoomRegistry::new());
    }

    #[test]
    fn test_meal_on_vacant_room_is_rejected_without_mutation() {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::ExecutiveSingle;

        let result = registry.add_meal(category, 1, MealItem::Pizza, qty(2));
        assert_eq!(
            result.err(),
            Some(BookingError::RoomNotBooked { category, room: 1 })
        );
        assert_eq!(registry, RoomRegistry::new());
    }

    #[test]
    fn test_meals_accumulate_in_order() {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::ExecutiveSingle;
        registry.book(category, 1, occupant_for(category, "A")).unwrap();

        let order = registry
            .add_meal(category, 1, MealItem::Pizza, qty(2))
            .unwrap();
        assert_eq!(order.line_total(), Money::rupees(90));
        registry
            .add_meal(category, 1, MealItem::from_code(9), qty(5))
            .unwrap();
        registry
            .add_meal(category, 1, MealItem::Juice, qty(1))
            .unwrap();

        let booking = registry.slot(category, 1).unwrap().booking().unwrap();
        let items: Vec<MealItem> = booking.meals.iter().map(MealOrder::item).collect();
        assert_eq!(
            items,
            vec![MealItem::Pizza, MealItem::Other(9), MealItem::Juice]
        );
        assert_eq!(booking.meal_charges(), Money::rupees(115));
    }

    #[test]
    fn test_cancel_is_idempotent_and_clears_meals() {
        let mut registry = RoomRegistry::new();
        let category = RoomCategory::ExecutiveDouble;
        registry.book(category, 5, occupant_for(category, "A")).unwrap();
        registry
            .add_meal(category, 5, MealItem::Pasta, qty(3))
            .unwrap();

        registry.cancel(category, 5).unwrap();
        let once = registry.clone();
        registry.cancel(category, 5).unwrap();
        assert_eq!(registry, once);
        assert_eq!(registry.slot(category, 5), Ok(&RoomSlot::Vacant));

        // a fresh stay starts with an empty tab
        registry.book(category, 5, occupant_for(category, "B")).unwrap();
        let booking = registry.slot(category, 5).unwrap().booking().unwrap();
        assert!(booking.meals.is_empty());
    }

    #[test]
    fn test_categories_are_independent() {
        let mut registry = RoomRegistry::new();
        registry
            .book(
                RoomCategory::ExecutiveSingle,
                1,
                occupant_for(RoomCategory::ExecutiveSingle, "A"),
            )
            .unwrap();

        assert_eq!(registry.is_available(RoomCategory::DeluxeSingle, 1), Ok(true));
        assert_eq!(registry.is_available(RoomCategory::ExecutiveDouble, 1), Ok(true));
        assert_eq!(registry.occupied_count(RoomCategory::ExecutiveSingle), 1);
    }

    #[test]
    fn test_validate_catches_bad_inventory() {
        assert_eq!(RoomRegistry::new().validate(), Ok(()));

        let mut short = RoomRegistry::new();
        short.deluxe_singles.pop();
        assert_eq!(
            short.validate(),
            Err(InventoryError::RoomCount {
                category: RoomCategory::DeluxeSingle,
                actual: 9,
                expected: 10
            })
        );

        let mut lonely = RoomRegistry::new();
        lonely.executive_doubles[0] =
            RoomSlot::Occupied(Booking::new(Occupant::single(Guest::new("A", "555", "M"))));
        let err = lonely.validate().unwrap_err();
        assert!(matches!(err, InventoryError::GuestCount { room: 1, actual: 1, expected: 2, .. }));
        assert!(err.to_string().contains("room 1"));
    }

    #[test]
    fn test_validate_catches_mispriced_meal() {
        let category = RoomCategory::ExecutiveSingle;
        let mut registry = RoomRegistry::new();
        registry.book(category, 4, occupant_for(category, "A")).unwrap();
        registry
            .add_meal(category, 4, MealItem::Juice, qty(1))
            .unwrap();
        assert_eq!(registry.validate(), Ok(()));

        let inflated: MealOrder =
            serde_json::from_str(r#"{"item":"Pizza","quantity":2,"line_total":18446744073709551615}"#)
                .unwrap();
        registry.executive_singles[3]
            .booking_mut()
            .unwrap()
            .meals
            .push(inflated);

        let err = registry.validate().unwrap_err();
        assert_eq!(
            err,
            InventoryError::LineTotal {
                category,
                room: 4,
                item: MealItem::Pizza,
                quantity: 2,
                line_total: Money::rupees(u64::MAX),
            }
        );
        assert!(err.to_string().contains("does not match the menu"));
    }

    #[test]
    fn test_error_messages() {
        let err = BookingError::RoomUnavailable {
            category: RoomCategory::DeluxeSingle,
            room: 4,
        };
        assert_eq!(err.to_string(), "Sorry! Deluxe Single room 4 is already booked.");

        let err = BookingError::InvalidIndex {
            category: RoomCategory::DeluxeDouble,
            room: 21,
            capacity: 20,
        };
        assert_eq!(
            err.to_string(),
            "Invalid room number 21 for Deluxe Double (valid: 1 to 20)"
        );
    }
}

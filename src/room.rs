// Room categories and inventory slots

use crate::menu::MealOrder;
use crate::money::Money;
use crate::occupant::Occupant;
use serde::{Deserialize, Serialize};
use std::fmt;

// The four kinds of room the hotel sells. Inventory and rates are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    ExecutiveDouble,
    DeluxeDouble,
    ExecutiveSingle,
    DeluxeSingle,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 4] = [
        RoomCategory::ExecutiveDouble,
        RoomCategory::DeluxeDouble,
        RoomCategory::ExecutiveSingle,
        RoomCategory::DeluxeSingle,
    ];

    // Codes as shown on the room-type menu
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RoomCategory::ExecutiveDouble),
            2 => Some(RoomCategory::DeluxeDouble),
            3 => Some(RoomCategory::ExecutiveSingle),
            4 => Some(RoomCategory::DeluxeSingle),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            RoomCategory::ExecutiveDouble => 1,
            RoomCategory::DeluxeDouble => 2,
            RoomCategory::ExecutiveSingle => 3,
            RoomCategory::DeluxeSingle => 4,
        }
    }

    pub fn capacity(self) -> usize {
        match self {
            RoomCategory::ExecutiveDouble | RoomCategory::ExecutiveSingle => 10,
            RoomCategory::DeluxeDouble | RoomCategory::DeluxeSingle => 20,
        }
    }

    pub fn daily_rate(self) -> Money {
        match self {
            RoomCategory::ExecutiveDouble => Money::rupees(4000),
            RoomCategory::DeluxeDouble => Money::rupees(3000),
            RoomCategory::ExecutiveSingle => Money::rupees(2000),
            RoomCategory::DeluxeSingle => Money::rupees(1500),
        }
    }

    pub fn is_double(self) -> bool {
        matches!(
            self,
            RoomCategory::ExecutiveDouble | RoomCategory::DeluxeDouble
        )
    }

    pub fn guests_per_room(self) -> usize {
        if self.is_double() {
            2
        } else {
            1
        }
    }

    pub fn features(self) -> RoomFeatures {
        let (air_conditioned, bed) = match self {
            RoomCategory::ExecutiveDouble => (true, BedType::King),
            RoomCategory::DeluxeDouble => (false, BedType::Queen),
            RoomCategory::ExecutiveSingle => (true, BedType::Single),
            RoomCategory::DeluxeSingle => (false, BedType::Single),
        };
        RoomFeatures {
            category: self,
            air_conditioned,
            bed,
            daily_rate: self.daily_rate(),
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomCategory::ExecutiveDouble => "Executive Double",
            RoomCategory::DeluxeDouble => "Deluxe Double",
            RoomCategory::ExecutiveSingle => "Executive Single",
            RoomCategory::DeluxeSingle => "Deluxe Single",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedType {
    King,
    Queen,
    Single,
}

impl fmt::Display for BedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedType::King => f.write_str("King Bed"),
            BedType::Queen => f.write_str("Queen Bed"),
            BedType::Single => f.write_str("Single Bed"),
        }
    }
}

// Static description shown by the "room features" menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomFeatures {
    pub category: RoomCategory,
    pub air_conditioned: bool,
    pub bed: BedType,
    pub daily_rate: Money,
}

impl fmt::Display for RoomFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Room: {}, {}, {}/day",
            self.category,
            if self.air_conditioned { "AC" } else { "Non-AC" },
            self.bed,
            self.daily_rate
        )
    }
}

// A stay in progress: who is in the room and what they have ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub occupant: Occupant,
    #[serde(default)]
    pub meals: Vec<MealOrder>,
}

impl Booking {
    pub fn new(occupant: Occupant) -> Self {
        Self {
            occupant,
            meals: Vec::new(),
        }
    }

    pub fn meal_charges(&self) -> Money {
        self.meals.iter().map(MealOrder::line_total).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "booking", rename_all = "snake_case")]
pub enum RoomSlot {
    #[default]
    Vacant,
    Occupied(Booking),
}

impl RoomSlot {
    pub fn is_vacant(&self) -> bool {
        matches!(self, RoomSlot::Vacant)
    }

    pub fn booking(&self) -> Option<&Booking> {
        match self {
            RoomSlot::Vacant => None,
            RoomSlot::Occupied(booking) => Some(booking),
        }
    }

    pub(crate) fn booking_mut(&mut self) -> Option<&mut Booking> {
        match self {
            RoomSlot::Vacant => None,
            RoomSlot::Occupied(booking) => Some(booking),
        }
    }
}

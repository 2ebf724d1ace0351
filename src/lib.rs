// Hotel room booking and billing library

// Core: rooms, guests, meals and money
pub mod billing;
pub mod menu;
pub mod money;
pub mod occupant;
pub mod registry;
pub mod room;

// Snapshot file and the front-desk binary's plumbing
pub mod config;
pub mod logging;
pub mod persistence;
pub mod shell;

// Re-export key types for convenience
pub use billing::{compute_bill, Bill};
pub use menu::{MealItem, MealOrder, MENU};
pub use money::Money;
pub use occupant::{Guest, Occupant};
pub use persistence::{PersistenceError, SnapshotStore};
pub use registry::{BookingError, RoomRegistry};
pub use room::{BedType, Booking, RoomCategory, RoomFeatures, RoomSlot};

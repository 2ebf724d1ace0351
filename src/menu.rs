// Room-service menu and meal orders

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

// Items the kitchen serves. Codes outside the menu are kept as `Other` and priced at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealItem {
    Pizza,
    Burger,
    Pasta,
    Juice,
    Other(u32),
}

// Priced items in menu order; position + 1 is the code guests type
pub const MENU: [MealItem; 4] = [
    MealItem::Pizza,
    MealItem::Burger,
    MealItem::Pasta,
    MealItem::Juice,
];

impl MealItem {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => MealItem::Pizza,
            2 => MealItem::Burger,
            3 => MealItem::Pasta,
            4 => MealItem::Juice,
            other => MealItem::Other(other),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            MealItem::Pizza => 1,
            MealItem::Burger => 2,
            MealItem::Pasta => 3,
            MealItem::Juice => 4,
            MealItem::Other(code) => code,
        }
    }

    pub fn unit_price(self) -> Money {
        match self {
            MealItem::Pizza => Money::rupees(45),
            MealItem::Burger => Money::rupees(55),
            MealItem::Pasta => Money::rupees(65),
            MealItem::Juice => Money::rupees(25),
            MealItem::Other(_) => Money::ZERO,
        }
    }
}

impl fmt::Display for MealItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealItem::Pizza => write!(f, "Pizza"),
            MealItem::Burger => write!(f, "Burger"),
            MealItem::Pasta => write!(f, "Pasta"),
            MealItem::Juice => write!(f, "Juice"),
            MealItem::Other(code) => write!(f, "Item #{}", code),
        }
    }
}

// One line on a room's food tab. The line total is fixed when the order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealOrder {
    item: MealItem,
    quantity: NonZeroU32,
    line_total: Money,
}

impl MealOrder {
    pub fn new(item: MealItem, quantity: NonZeroU32) -> Self {
        Self {
            item,
            quantity,
            line_total: item.unit_price() * quantity.get(),
        }
    }

    pub fn item(&self) -> MealItem {
        self.item
    }

    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.line_total
    }

    // False when the stored total no longer matches the menu price, e.g. after a hand-edited snapshot
    pub(crate) fn is_priced_correctly(&self) -> bool {
        self.line_total == self.item.unit_price() * self.quantity.get()
    }
}

// Lines for the shell, e.g. "1. Pizza - ₹45"
pub fn menu_lines() -> Vec<String> {
    MENU.iter()
        .map(|item| format!("{}. {} - {}", item.code(), item, item.unit_price()))
        .collect()
}

// Interactive front-desk menu
// Reads whitespace-separated tokens from any reader, so a scripted session drives it the same way a keyboard does

use crate::billing::compute_bill;
use crate::menu::{menu_lines, MealItem};
use crate::occupant::{Guest, Occupant};
use crate::registry::{BookingError, RoomRegistry};
use crate::room::RoomCategory;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

const MAIN_MENU: &str = "
===== HOTEL MANAGEMENT MENU =====
1. Book a Room
2. Check Room Features
3. Check Room Availability
4. Order Meal
5. Generate Bill
6. Cancel Booking
7. Exit";

const ROOM_TYPE_MENU: &str = "Select Room Type:
1. Executive Double
2. Deluxe Double
3. Executive Single
4. Deluxe Single";

const EXIT_CHOICE: u32 = 7;

// Reasons an action stops early
#[derive(Error, Debug)]
enum ShellError {
    #[error("input ended")]
    EndOfInput,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid room type: {0}")]
    InvalidRoomType(u8),

    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

// Splits input lines into tokens on demand
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

pub struct Shell<R, W> {
    registry: RoomRegistry,
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: RoomRegistry, input: R, out: W) -> Self {
        Self {
            registry,
            input: Tokens::new(input),
            out,
        }
    }

    // Runs until Exit or end of input and hands the registry back for saving
    pub fn run(mut self) -> io::Result<RoomRegistry> {
        loop {
            writeln!(self.out, "{}", MAIN_MENU)?;
            self.out.flush()?;

            let choice = match self.read_number::<u32>() {
                Ok(choice) => choice,
                Err(ShellError::EndOfInput) => break,
                Err(ShellError::Io(e)) => return Err(e),
                Err(other) => {
                    writeln!(self.out, "{}", other)?;
                    continue;
                }
            };
            if choice == EXIT_CHOICE {
                break;
            }
            if !(1..EXIT_CHOICE).contains(&choice) {
                continue;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(ShellError::EndOfInput) => break,
                Err(ShellError::Io(e)) => return Err(e),
                Err(other) => {
                    debug!(choice, error = %other, "action rejected");
                    writeln!(self.out, "{}", other)?;
                }
            }
        }
        Ok(self.registry)
    }

    fn dispatch(&mut self, choice: u32) -> Result<(), ShellError> {
        writeln!(self.out, "{}", ROOM_TYPE_MENU)?;
        self.out.flush()?;
        let code = self.read_number::<u8>()?;
        let category = RoomCategory::from_code(code).ok_or(ShellError::InvalidRoomType(code))?;

        match choice {
            1 => self.book_room(category),
            2 => self.show_features(category),
            3 => self.show_availability(category),
            4 => self.order_meal(category),
            5 => self.generate_bill(category),
            6 => self.cancel_booking(category),
            _ => Ok(()),
        }
    }

    fn book_room(&mut self, category: RoomCategory) -> Result<(), ShellError> {
        self.prompt(&format!(
            "Enter room number to book (1 to {}): ",
            category.capacity()
        ))?;
        let room = self.read_number::<usize>()?;
        // refuse before asking for guest details
        if !self.registry.is_available(category, room)? {
            return Err(BookingError::RoomUnavailable { category, room }.into());
        }

        let first = self.read_guest("")?;
        let occupant = if category.is_double() {
            let second = self.read_guest("second ")?;
            Occupant::double(first, second)
        } else {
            Occupant::single(first)
        };

        self.registry.book(category, room, occupant)?;
        writeln!(self.out, "Room booked successfully.")?;
        Ok(())
    }

    fn read_guest(&mut self, which: &str) -> Result<Guest, ShellError> {
        self.prompt(&format!("Enter {}guest name: ", which))?;
        let name = self.read_token()?;
        self.prompt(&format!("Enter {}contact number: ", which))?;
        let contact = self.read_token()?;
        self.prompt("Enter gender: ")?;
        let gender = self.read_token()?;
        Ok(Guest::new(name, contact, gender))
    }

    fn show_features(&mut self, category: RoomCategory) -> Result<(), ShellError> {
        writeln!(self.out, "\n--- Room Features ---")?;
        writeln!(self.out, "{}", category.features())?;
        Ok(())
    }

    fn show_availability(&mut self, category: RoomCategory) -> Result<(), ShellError> {
        writeln!(self.out, "\n--- Room Availability ---")?;
        for (idx, available) in self.registry.list_availability(category).iter().enumerate() {
            let state = if *available { "Available" } else { "Occupied" };
            writeln!(self.out, "Room {} is {}", idx + 1, state)?;
        }
        writeln!(
            self.out,
            "{} of {} {} rooms occupied",
            self.registry.occupied_count(category),
            category.capacity(),
            category
        )?;
        Ok(())
    }

    fn order_meal(&mut self, category: RoomCategory) -> Result<(), ShellError> {
        self.prompt("Enter room number: ")?;
        let room = self.read_number::<usize>()?;
        if self.registry.is_available(category, room)? {
            return Err(BookingError::RoomNotBooked { category, room }.into());
        }

        for line in menu_lines() {
            writeln!(self.out, "{}", line)?;
        }
        self.prompt("Enter item number: ")?;
        let item = MealItem::from_code(self.read_number::<u32>()?);
        self.prompt("Enter quantity: ")?;
        let quantity = NonZeroU32::new(self.read_number::<u32>()?).ok_or(ShellError::ZeroQuantity)?;

        self.registry.add_meal(category, room, item, quantity)?;
        writeln!(self.out, "Meal ordered successfully.")?;
        Ok(())
    }

    fn generate_bill(&mut self, category: RoomCategory) -> Result<(), ShellError> {
        self.prompt("Enter room number: ")?;
        let room = self.read_number::<usize>()?;
        let bill = compute_bill(&self.registry, category, room)?;

        writeln!(self.out, "Room Rent: {}", bill.room_rent)?;
        writeln!(self.out, "Meal Charges: {}", bill.meal_charges)?;
        writeln!(self.out, "Total Bill: {}", bill.total)?;
        Ok(())
    }

    fn cancel_booking(&mut self, category: RoomCategory) -> Result<(), ShellError> {
        self.prompt("Enter room number to cancel: ")?;
        let room = self.read_number::<usize>()?;
        self.registry.cancel(category, room)?;
        writeln!(self.out, "Booking cancelled.")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), ShellError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn read_token(&mut self) -> Result<String, ShellError> {
        self.input.next_token()?.ok_or(ShellError::EndOfInput)
    }

    fn read_number<T: FromStr>(&mut self) -> Result<T, ShellError> {
        let token = self.read_token()?;
        token.parse().map_err(|_| ShellError::InvalidNumber(token))
    }
}

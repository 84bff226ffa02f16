//! Interactive text menu driving a [`Showroom`].

use std::io::{self, BufRead, Write};

use crate::{
    core::store::{Listing, StoreError},
    showroom::{Saved, Showroom},
    vehicle::VehicleDraft,
};

/// Menu loop over any line-oriented input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream, consuming the console.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `label` and reads one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Runs the menu until Exit is chosen or input ends.
    pub fn run(&mut self, showroom: &mut Showroom) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n--- Car Showroom System ---")?;
            writeln!(self.output, "Showroom: {}", showroom.name())?;
            writeln!(self.output, "1. Add Car to Inventory")?;
            writeln!(self.output, "2. Display Inventory")?;
            writeln!(self.output, "3. Sell a Car (by ID)")?;
            writeln!(self.output, "4. Search Cars")?;
            writeln!(self.output, "5. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let keep_going = match choice.as_str() {
                "1" => self.add(showroom)?,
                "2" => {
                    self.display(showroom)?;
                    true
                }
                "3" => self.sell(showroom)?,
                "4" => self.search(showroom)?,
                "5" => false,
                _ => {
                    writeln!(self.output, "Error: Invalid choice. Please try again.")?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "Exiting the car showroom system. Goodbye!")?;
        Ok(())
    }

    fn add(&mut self, showroom: &mut Showroom) -> io::Result<bool> {
        let mut fields = Vec::with_capacity(5);
        for label in [
            "Enter car make: ",
            "Enter car model: ",
            "Enter car year: ",
            "Enter car color: ",
            "Enter car price: ",
        ] {
            let Some(value) = self.prompt(label)? else {
                return Ok(false);
            };
            fields.push(value);
        }
        let draft = VehicleDraft::new(&fields[0], &fields[1], &fields[2], &fields[3], &fields[4]);

        match showroom.add(&draft) {
            Ok(saved) => {
                let id = saved.value;
                if let Some(rec) = showroom.store().get(id) {
                    writeln!(
                        self.output,
                        "'{} {}' (ID: {id}) added to the showroom.",
                        rec.make, rec.model
                    )?;
                }
                self.report_save(&saved)?;
            }
            Err(err) => self.report_error(&err)?,
        }
        Ok(true)
    }

    fn display(&mut self, showroom: &Showroom) -> io::Result<()> {
        match showroom.list() {
            Listing::Empty => {
                writeln!(self.output, "\nShowroom '{}' is currently empty.", showroom.name())?;
            }
            Listing::Vehicles(records) => {
                writeln!(self.output, "\n--- Inventory of {} ---", showroom.name())?;
                for rec in records {
                    writeln!(self.output, "{rec}")?;
                }
            }
        }
        Ok(())
    }

    fn sell(&mut self, showroom: &mut Showroom) -> io::Result<bool> {
        let Some(raw_id) = self.prompt("Enter the Car ID to sell: ")? else {
            return Ok(false);
        };

        match showroom.sell(&raw_id) {
            Ok(saved) => {
                let rec = &saved.value;
                writeln!(
                    self.output,
                    "Car ID {} ({} {}) has been sold.",
                    rec.id, rec.make, rec.model
                )?;
                self.report_save(&saved)?;
            }
            Err(err) => self.report_error(&err)?,
        }
        Ok(true)
    }

    fn search(&mut self, showroom: &Showroom) -> io::Result<bool> {
        let Some(term) = self.prompt("Enter a search term: ")? else {
            return Ok(false);
        };

        match showroom.search(&term) {
            Ok(results) if results.is_empty() => {
                writeln!(self.output, "No cars found matching '{}'.", term.to_lowercase())?;
            }
            Ok(results) => {
                writeln!(self.output, "\n--- Search Results for '{}' ---", term.to_lowercase())?;
                for rec in results {
                    writeln!(self.output, "{rec}")?;
                }
            }
            Err(StoreError::BlankSearchTerm) => {
                writeln!(self.output, "Please enter a search term.")?;
            }
            Err(err) => self.report_error(&err)?,
        }
        Ok(true)
    }

    fn report_save<T>(&mut self, saved: &Saved<T>) -> io::Result<()> {
        match &saved.save_warning {
            None => writeln!(self.output, "Inventory saved."),
            Some(err) => writeln!(
                self.output,
                "Warning: {err}. The change is kept in memory only."
            ),
        }
    }

    fn report_error(&mut self, err: &StoreError) -> io::Result<()> {
        writeln!(self.output, "Error: {err}.")
    }
}

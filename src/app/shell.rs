//! The interactive menu loop. Generic over its input/output streams so tests
//! can drive it with in-memory buffers instead of a terminal.

use crate::core::codec;
use crate::core::list::ShoppingList;
use crate::domain::model::Item;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub struct Shell<S: Storage, R: BufRead, W: Write> {
    storage: S,
    reader: R,
    writer: W,
    list: ShoppingList,
}

/// Parses a 1-based position typed by the user into a 0-based index,
/// rejecting anything non-numeric, non-positive, or past the end of the list.
fn parse_index(input: &str, len: usize) -> Option<usize> {
    let position: i64 = input.trim().parse().ok()?;
    if position < 1 || position as usize > len {
        return None;
    }
    Some(position as usize - 1)
}

impl<S: Storage, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(storage: S, reader: R, writer: W) -> Self {
        Self {
            storage,
            reader,
            writer,
            list: ShoppingList::new(),
        }
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    /// Replaces the working list with the contents of `path`. On any error
    /// the working list is left untouched.
    pub fn load_list(&mut self, path: &str) -> Result<()> {
        self.list = codec::load(&self.storage, path)?;
        Ok(())
    }

    /// Runs the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.read_line()? else {
                // end of input behaves like quitting
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.add_item()?,
                "2" => self.remove_item()?,
                "3" => self.display_list()?,
                "4" => self.save_list()?,
                "5" => self.load_list_prompt()?,
                "6" => {
                    writeln!(self.writer, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.writer, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.writer, "Shopping List Manager")?;
        writeln!(self.writer, "1. Add Item")?;
        writeln!(self.writer, "2. Remove Item")?;
        writeln!(self.writer, "3. Display List")?;
        writeln!(self.writer, "4. Save List")?;
        writeln!(self.writer, "5. Load List")?;
        writeln!(self.writer, "6. Quit")?;
        write!(self.writer, "Enter your choice: ")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Reads one trimmed line, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        self.read_line()
    }

    fn add_item(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter item name: ")? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt("Enter quantity: ")? else {
            return Ok(());
        };
        let Some(notes) = self.prompt("Enter notes: ")? else {
            return Ok(());
        };

        let Ok(quantity) = quantity.trim().parse::<i64>() else {
            writeln!(self.writer, "Invalid quantity. Item not added.")?;
            return Ok(());
        };

        self.list.add(Item::new(name, quantity, notes));
        tracing::debug!("item added, list now holds {}", self.list.len());
        writeln!(self.writer, "Item added to the list.")?;
        Ok(())
    }

    fn remove_item(&mut self) -> Result<()> {
        let Some(input) = self.prompt("Enter the index of the item to remove: ")? else {
            return Ok(());
        };

        // The list store treats a bad index as a silent no-op; the shell
        // checks first so the user still hears about it.
        match parse_index(&input, self.list.len()) {
            Some(index) => {
                self.list.remove(index);
                writeln!(self.writer, "Item removed from the list.")?;
            }
            None => {
                tracing::warn!("removal index {:?} out of range", input);
                writeln!(self.writer, "No item at index {}.", input.trim())?;
            }
        }
        Ok(())
    }

    fn display_list(&mut self) -> Result<()> {
        for line in self.list.render_lines() {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    fn save_list(&mut self) -> Result<()> {
        let Some(filename) = self.prompt("Enter the filename to save the list: ")? else {
            return Ok(());
        };

        match codec::save(&self.storage, &filename, &self.list) {
            Ok(()) => {
                tracing::info!("list saved to {}", filename);
                writeln!(self.writer, "Shopping list saved to {filename}")?;
            }
            Err(e) => {
                tracing::warn!("save failed: {}", e);
                writeln!(self.writer, "Error: {e}")?;
            }
        }
        Ok(())
    }

    fn load_list_prompt(&mut self) -> Result<()> {
        let Some(filename) = self.prompt("Enter the filename to load the list: ")? else {
            return Ok(());
        };

        // only assign on success, so a failed load leaves the working list
        // untouched
        match codec::load(&self.storage, &filename) {
            Ok(loaded) => {
                self.list = loaded;
                tracing::info!("list loaded from {}", filename);
                writeln!(self.writer, "Shopping list loaded from {filename}")?;
            }
            Err(e) => {
                tracing::warn!("load failed: {}", e);
                writeln!(self.writer, "Error: {e}")?;
            }
        }
        Ok(())
    }
}

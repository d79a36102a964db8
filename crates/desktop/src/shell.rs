//! Menu-driven shell.
//!
//! Reads one command per line, dispatches it against the store, and writes the
//! resulting screen. Any `BufRead`/`Write` pair works, so sessions can be
//! scripted in tests.

use core::str::FromStr;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use freshmart_core::{Clock, SystemClock};
use freshmart_inventory::InventoryStore;

use crate::config::DesktopConfig;
use crate::forms::{ADD_PRODUCT_FIELDS, AddProductForm, FormError, UpdateStockForm};
use crate::render::Renderer;
use crate::types::{Notification, Screen};
use crate::views::View;

pub const APP_TITLE: &str = "FreshMart Retail - Inventory Manager";

pub const HELP: &str = "\
Commands:
  dashboard        summary cards and recent activity
  list             all products
  search <term>    products whose name or category contains <term>
  expiring         products expiring soon
  low-stock        products running low
  add              add a new product
  update           update a product's stock quantity
  help             show this help
  quit             exit";

/// One menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dashboard,
    List,
    Search(String),
    Expiring,
    LowStock,
    Add,
    Update,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        match word.to_lowercase().as_str() {
            "dashboard" | "home" => Ok(Command::Dashboard),
            "list" | "all" => Ok(Command::List),
            "search" => Ok(Command::Search(rest.trim().to_string())),
            "expiring" => Ok(Command::Expiring),
            "low-stock" | "low" => Ok(Command::LowStock),
            "add" => Ok(Command::Add),
            "update" => Ok(Command::Update),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Interactive session owning the store for its whole lifetime.
pub struct Shell<R, W, C = SystemClock> {
    input: R,
    output: W,
    store: InventoryStore<C>,
    config: DesktopConfig,
    renderer: Renderer,
}

impl<R: BufRead, W: Write, C: Clock> Shell<R, W, C> {
    pub fn new(input: R, output: W, store: InventoryStore<C>, config: DesktopConfig) -> Self {
        let renderer = Renderer::new(config.output);
        Self {
            input,
            output,
            store,
            config,
            renderer,
        }
    }

    pub fn store(&self) -> &InventoryStore<C> {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the dashboard, then process commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.renderer.banner(&mut self.output, APP_TITLE)?;
        self.show(&Screen::Dashboard)?;

        while let Some(line) = self.prompt("> ")? {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    tracing::debug!(?command, "dispatching");
                    self.dispatch(command)?;
                }
                Err(e) => {
                    self.notify(&Notification::error(e.to_string()))?;
                    self.renderer.help(&mut self.output, HELP)?;
                }
            }
        }

        tracing::info!(products = self.store.len(), "session ended");
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Dashboard => self.show(&Screen::Dashboard),
            Command::List => self.show(&Screen::AllProducts),
            Command::Search(term) => self.show(&Screen::Search(term)),
            Command::Expiring => self.show(&Screen::ExpiringSoon),
            Command::LowStock => self.show(&Screen::LowStock),
            Command::Add => self.add_product(),
            Command::Update => self.update_stock(),
            Command::Help => self.renderer.help(&mut self.output, HELP),
            Command::Quit => Ok(()),
        }
    }

    fn show(&mut self, screen: &Screen) -> io::Result<()> {
        let view = View::for_screen(screen, &self.store, &self.config);
        self.renderer.view(&mut self.output, &view)
    }

    fn notify(&mut self, notification: &Notification) -> io::Result<()> {
        self.renderer.notification(&mut self.output, notification)
    }

    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.renderer.prompt(&mut self.output, label)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add_product(&mut self) -> io::Result<()> {
        self.show(&Screen::AddProduct)?;

        let mut form = AddProductForm::default();
        for label in ADD_PRODUCT_FIELDS {
            let Some(value) = self.prompt(&format!("{label}: "))? else {
                return Ok(());
            };
            form.set_field(label, value);
        }

        let outcome = form.submit(&mut self.store);
        self.finish(outcome)
    }

    fn update_stock(&mut self) -> io::Result<()> {
        self.show(&Screen::UpdateStock)?;

        let mut form = UpdateStockForm::open(&self.store);
        let Some(choice) = self.prompt("Product Name: ")? else {
            return Ok(());
        };
        form.select(&choice);
        let Some(quantity) = self.prompt("New Quantity: ")? else {
            return Ok(());
        };
        form.quantity = quantity;

        let outcome = form.submit(&mut self.store);
        self.finish(outcome)
    }

    /// Successful submissions return to the full product list.
    fn finish(&mut self, outcome: Result<Notification, FormError>) -> io::Result<()> {
        match outcome {
            Ok(notification) => {
                self.notify(&notification)?;
                self.show(&Screen::AllProducts)
            }
            Err(e) => self.notify(&e.notification()),
        }
    }
}

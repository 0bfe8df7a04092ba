//! The top-level menu session.
//!
//! A [`Session`] owns both collections for the life of the process. The
//! menu loop runs while an explicit [`SessionControl`] says so; only the
//! quit action clears it.

use tracing::info;

use crate::actions::{
    manage_formulary, manage_inventory, report_formulary, report_inventory, ActionResult,
};
use crate::models::{Formulary, Inventory};
use crate::prompt::Prompter;
use crate::store::{DataStore, StoreResult};

const MENU_PROMPT: &str = "What would you like to do?";

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddToFormulary,
    ReportFormulary,
    AddToInventory,
    ReportInventory,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::AddToFormulary,
        MenuAction::ReportFormulary,
        MenuAction::AddToInventory,
        MenuAction::ReportInventory,
        MenuAction::Quit,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddToFormulary => "Add Medication To Formulary",
            MenuAction::ReportFormulary => "Generate Formulary Report",
            MenuAction::AddToInventory => "Add Medication To Inventory",
            MenuAction::ReportInventory => "Generate Inventory Report",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionControl {
    running: bool,
}

impl Default for SessionControl {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionControl {
    pub fn new() -> Self {
        Self { running: true }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the menu loop after the current action.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// In-memory state of one interactive run.
#[derive(Debug)]
pub struct Session {
    store: DataStore,
    formulary: Formulary,
    inventory: Inventory,
}

impl Session {
    /// Load both collections. The inventory is validated against the loaded formulary.
    pub fn open(store: DataStore) -> StoreResult<Self> {
        let formulary = store.load_formulary()?;
        let inventory = store.load_inventory(&formulary)?;
        info!(
            formulary = formulary.len(),
            inventory = inventory.len(),
            "collections loaded"
        );
        Ok(Self {
            store,
            formulary,
            inventory,
        })
    }

    pub fn formulary(&self) -> &Formulary {
        &self.formulary
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Show the menu until the quit action runs.
    pub fn run<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> ActionResult<()> {
        let mut control = SessionControl::new();
        while control.is_running() {
            prompter.clear()?;
            let action = self.choose_action(prompter)?;
            self.dispatch(action, prompter, &mut control)?;
        }
        Ok(())
    }

    /// Ask which menu entry to run.
    pub fn choose_action<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
    ) -> ActionResult<MenuAction> {
        let labels = MenuAction::ALL.map(|action| action.label());
        let index = prompter.ask_select(MENU_PROMPT, &labels)?;
        // Out-of-range selections are treated as quit
        Ok(MenuAction::ALL
            .get(index)
            .copied()
            .unwrap_or(MenuAction::Quit))
    }

    /// Run one menu action to completion.
    pub fn dispatch<P: Prompter + ?Sized>(
        &mut self,
        action: MenuAction,
        prompter: &mut P,
        control: &mut SessionControl,
    ) -> ActionResult<()> {
        match action {
            MenuAction::AddToFormulary => {
                manage_formulary(prompter, &self.store, &mut self.formulary)
            }
            MenuAction::ReportFormulary => report_formulary(prompter, &self.formulary),
            MenuAction::AddToInventory => {
                manage_inventory(prompter, &self.store, &self.formulary, &mut self.inventory)
            }
            MenuAction::ReportInventory => report_inventory(prompter, &self.inventory),
            MenuAction::Quit => {
                control.stop();
                Ok(())
            }
        }
    }
}

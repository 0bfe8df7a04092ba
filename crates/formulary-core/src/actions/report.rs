//! Read-only report actions.

use super::ActionResult;
use crate::models::InventoryItem;
use crate::prompt::Prompter;
use crate::report::{render_formulary, render_inventory};

const GO_BACK: &str = "Go Back?";

/// Show the formulary table until the user chooses to go back.
pub fn report_formulary<P: Prompter + ?Sized>(
    prompter: &mut P,
    formulary: &[String],
) -> ActionResult<()> {
    show_until_back(prompter, &render_formulary(formulary, true))
}

/// Show the inventory table until the user chooses to go back.
pub fn report_inventory<P: Prompter + ?Sized>(
    prompter: &mut P,
    inventory: &[InventoryItem],
) -> ActionResult<()> {
    show_until_back(prompter, &render_inventory(inventory))
}

fn show_until_back<P: Prompter + ?Sized>(prompter: &mut P, table: &str) -> ActionResult<()> {
    loop {
        prompter.clear()?;
        prompter.show(table)?;
        if prompter.ask_confirm(GO_BACK)? {
            return Ok(());
        }
    }
}

//! Adding medication packs to the inventory.

use tracing::{debug, warn};

use super::{ActionResult, Submission};
use crate::models::{Formulary, Inventory, InventoryItem};
use crate::prompt::Prompter;
use crate::report::render_inventory;
use crate::store::DataStore;
use crate::validation::{
    capitalize, check_medication_name, check_pack_number, is_cancel,
    parse_positive_whole_number, PackField, Rejection,
};

const ENTER_PACK: &str = "Enter medication pack details (or \"q\" to go back):";
const NAME: &str = "Name:";
const CONFIRM_ADD: &str = "Add above medication pack into inventory?";
const CONTINUE_ADDING: &str = "Continue adding medication packs?";

/// What committing a pack did to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A new stock row was appended
    Appended,
    /// An existing row with the same name, strength and pack size grew
    Merged { total_packs: u64 },
}

/// Run the add-to-inventory action until the user goes back or stops.
pub fn manage_inventory<P: Prompter + ?Sized>(
    prompter: &mut P,
    store: &DataStore,
    formulary: &Formulary,
    inventory: &mut Inventory,
) -> ActionResult<()> {
    loop {
        if submit_inventory_pack(prompter, store, formulary, inventory)?.is_cancelled() {
            return Ok(());
        }
        if !prompter.ask_confirm(CONTINUE_ADDING)? {
            return Ok(());
        }
    }
}

/// Ask for one pack, then merge it into the inventory on confirmation.
///
/// The name is checked against the formulary before any number is asked.
pub fn submit_inventory_pack<P: Prompter + ?Sized>(
    prompter: &mut P,
    store: &DataStore,
    formulary: &Formulary,
    inventory: &mut Inventory,
) -> ActionResult<Submission<MergeOutcome>> {
    prompter.clear()?;
    prompter.show(ENTER_PACK)?;

    let name = prompter.ask_text(NAME, &|input| check_medication_name(formulary, input))?;
    if is_cancel(&name) {
        return Ok(Submission::Cancelled);
    }

    let strength = ask_pack_number(prompter, PackField::Strength)?;
    let pack_size = ask_pack_number(prompter, PackField::PackSize)?;
    let total_packs = ask_pack_number(prompter, PackField::TotalPacks)?;

    let candidate = InventoryItem::new(capitalize(&name), strength, pack_size, total_packs);
    prompter.show(&render_inventory(std::slice::from_ref(&candidate)))?;

    if !prompter.ask_confirm(CONFIRM_ADD)? {
        debug!(name = %candidate.name, "inventory addition declined");
        return Ok(Submission::Declined);
    }

    match merge_pack(inventory, candidate) {
        Ok(outcome) => {
            store.write_inventory(inventory)?;
            Ok(Submission::Committed(outcome))
        }
        Err(rejection) => {
            warn!("{}", rejection);
            prompter.show(&rejection.to_string())?;
            Ok(Submission::Declined)
        }
    }
}

/// Merge a pack into the inventory by `(name, strength, pack_size)`.
///
/// A matching row has its `total_packs` increased; otherwise the pack is
/// appended. On overflow the inventory is left unchanged.
pub fn merge_pack(
    inventory: &mut Inventory,
    candidate: InventoryItem,
) -> Result<MergeOutcome, Rejection> {
    match inventory.iter_mut().find(|item| item.same_pack(&candidate)) {
        Some(existing) => {
            let total_packs = existing
                .total_packs
                .checked_add(candidate.total_packs)
                .ok_or_else(|| Rejection::PackCountOverflow {
                    name: candidate.name.clone(),
                })?;
            existing.total_packs = total_packs;
            debug!(name = %existing.name, total_packs, "merged into existing pack");
            Ok(MergeOutcome::Merged { total_packs })
        }
        None => {
            debug!(name = %candidate.name, "appended new pack");
            inventory.push(candidate);
            Ok(MergeOutcome::Appended)
        }
    }
}

fn ask_pack_number<P: Prompter + ?Sized>(prompter: &mut P, field: PackField) -> ActionResult<u64> {
    let answer = prompter.ask_text(field.prompt(), &|input| check_pack_number(field, input))?;
    let value = parse_positive_whole_number(&answer)
        .ok_or(Rejection::NotPositiveWholeNumber { field })?;
    Ok(value)
}

//! Adding medication names to the formulary.

use tracing::debug;

use super::{ActionResult, Submission};
use crate::models::Formulary;
use crate::prompt::Prompter;
use crate::report::render_formulary;
use crate::store::DataStore;
use crate::validation::{
    check_formulary_input, parse_formulary_input, pending_additions, FormularyInput,
};

const ENTER_NAMES: &str = "Enter medication name (or \"q\" to go back):";
const CONFIRM_ADD: &str = "Add medications above into formulary?";
const CONTINUE_ADDING: &str = "Continue adding medication?";

/// Run the add-to-formulary action until the user goes back or stops.
pub fn manage_formulary<P: Prompter + ?Sized>(
    prompter: &mut P,
    store: &DataStore,
    formulary: &mut Formulary,
) -> ActionResult<()> {
    loop {
        if submit_formulary_names(prompter, store, formulary)?.is_cancelled() {
            return Ok(());
        }
        if !prompter.ask_confirm(CONTINUE_ADDING)? {
            return Ok(());
        }
    }
}

/// Ask for comma-separated names once and commit them on confirmation.
///
/// Answers naming an existing entry are re-asked. Names repeated within one
/// answer are committed as given.
pub fn submit_formulary_names<P: Prompter + ?Sized>(
    prompter: &mut P,
    store: &DataStore,
    formulary: &mut Formulary,
) -> ActionResult<Submission<Vec<String>>> {
    prompter.clear()?;

    let snapshot: &Formulary = formulary;
    let answer = prompter.ask_text(ENTER_NAMES, &|input| {
        check_formulary_input(snapshot, input)
    })?;

    let names = match parse_formulary_input(formulary, &answer)? {
        FormularyInput::Cancel => return Ok(Submission::Cancelled),
        FormularyInput::Names(names) => names,
    };
    let pending = pending_additions(formulary, &names);
    prompter.show(&render_formulary(&pending, false))?;

    if !prompter.ask_confirm(CONFIRM_ADD)? {
        debug!(count = names.len(), "formulary addition declined");
        return Ok(Submission::Declined);
    }

    commit_names(store, formulary, &names)?;
    Ok(Submission::Committed(names))
}

/// Append `names` in order and rewrite the formulary file.
pub fn commit_names(
    store: &DataStore,
    formulary: &mut Formulary,
    names: &[String],
) -> ActionResult<()> {
    formulary.extend(names.iter().cloned());
    store.write_formulary(formulary)?;
    debug!(added = names.len(), total = formulary.len(), "formulary updated");
    Ok(())
}

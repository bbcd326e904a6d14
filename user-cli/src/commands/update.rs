use crate::commands::{required, CommandResult, NOT_FOUND_MESSAGE};
use crate::prompt::{parse_user_id, Console};

use std::io::{BufRead, Write};

use tracing::info;
use user_service::{User, UserStore};

pub fn execute<S, R, W>(store: &mut S, console: &mut Console<R, W>) -> CommandResult
where
    S: UserStore,
    R: BufRead,
    W: Write,
{
    let id = parse_user_id(&required(console.prompt("Enter the ID of the user to update: ")?)?)?;

    let Some(existing) = store.get_by_id(id).cloned() else {
        console.out().warning(NOT_FOUND_MESSAGE)?;
        return Ok(());
    };
    console.out().line(&format!("Current data: {}", existing))?;

    let name = required(console.prompt("Enter new name (leave blank to keep): ")?)?;
    let email = required(console.prompt("Enter new email (leave blank to keep): ")?)?;

    let updated = User::new(
        id,
        keep_if_blank(name, existing.name),
        keep_if_blank(email, existing.email),
    );
    store.update(updated)?;
    info!(id, "user updated");

    console.out().success("User updated successfully.")?;
    Ok(())
}

fn keep_if_blank(input: String, current: String) -> String {
    if input.trim().is_empty() {
        current
    } else {
        input
    }
}

use crate::commands::{required, CommandResult, NOT_FOUND_MESSAGE};
use crate::prompt::{parse_user_id, Console};

use std::io::{BufRead, Write};

use tracing::info;
use user_service::UserStore;

pub fn execute<S, R, W>(store: &mut S, console: &mut Console<R, W>) -> CommandResult
where
    S: UserStore,
    R: BufRead,
    W: Write,
{
    let id = parse_user_id(&required(console.prompt("Enter the ID of the user to delete: ")?)?)?;

    let Some(existing) = store.get_by_id(id).cloned() else {
        console.out().warning(NOT_FOUND_MESSAGE)?;
        return Ok(());
    };

    store.delete(&existing)?;
    info!(id, "user deleted");

    console.out().success("User deleted successfully.")?;
    Ok(())
}

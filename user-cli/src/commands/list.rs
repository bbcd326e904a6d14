use crate::commands::CommandResult;
use crate::prompt::Console;

use std::io::{BufRead, Write};

use user_service::UserStore;

pub fn execute<S, R, W>(store: &S, console: &mut Console<R, W>) -> CommandResult
where
    S: UserStore,
    R: BufRead,
    W: Write,
{
    let users = store.get_all();
    let out = console.out();

    if users.is_empty() {
        out.line("\nNo users registered.")?;
        return Ok(());
    }

    out.line("\nUser list:")?;
    for user in users {
        out.user(user)?;
    }
    Ok(())
}

use crate::commands::{required, CommandResult};
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
    let id = parse_user_id(&required(console.prompt("Enter user ID: ")?)?)?;
    let name = required(console.prompt("Enter name: ")?)?;
    let email = required(console.prompt("Enter email: ")?)?;

    store.insert(User::new(id, name, email))?;
    info!(id, "user created");

    console.out().success("User created successfully.")?;
    Ok(())
}

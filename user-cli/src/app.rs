use crate::commands::{self, CommandError};
use crate::prompt::Console;

use std::io::{BufRead, Write};

use color_eyre::Result;
use tracing::{debug, info};
use user_service::UserStore;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    List,
    Create,
    Update,
    Delete,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::List,
        MenuOption::Create,
        MenuOption::Update,
        MenuOption::Delete,
        MenuOption::Exit,
    ];

    pub fn parse(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(MenuOption::List),
            "2" => Some(MenuOption::Create),
            "3" => Some(MenuOption::Update),
            "4" => Some(MenuOption::Delete),
            "5" => Some(MenuOption::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::List => "List users",
            MenuOption::Create => "Create user",
            MenuOption::Update => "Update user",
            MenuOption::Delete => "Delete user",
            MenuOption::Exit => "Exit",
        }
    }
}

/// The interactive menu loop. Owns the store for the whole session.
pub struct App<S, R, W> {
    store: S,
    console: Console<R, W>,
}

impl<S, R, W> App<S, R, W>
where
    S: UserStore,
    R: BufRead,
    W: Write,
{
    /// Menu output is plain text unless `color` is set.
    pub fn new(store: S, input: R, out: W, color: bool) -> Self {
        Self {
            store,
            console: Console::new(input, out, color),
        }
    }

    /// Run until the user picks Exit or input runs out.
    ///
    /// Only terminal I/O failures are returned; every store or parse error is
    /// printed and the menu is shown again.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");

        loop {
            self.show_menu()?;

            let Some(selection) = self.console.prompt("Select an option: ")? else {
                info!("input closed, ending session");
                return Ok(());
            };

            let Some(option) = MenuOption::parse(&selection) else {
                debug!(selection = %selection, "unrecognized menu selection");
                self.console.out().line("Invalid option. Please try again.")?;
                continue;
            };

            debug!(?option, "dispatching");
            let result = match option {
                MenuOption::List => commands::list::execute(&self.store, &mut self.console),
                MenuOption::Create => commands::create::execute(&mut self.store, &mut self.console),
                MenuOption::Update => commands::update::execute(&mut self.store, &mut self.console),
                MenuOption::Delete => commands::delete::execute(&mut self.store, &mut self.console),
                MenuOption::Exit => {
                    self.console.out().line("Exiting.")?;
                    info!(users = self.store.len(), "session ended");
                    return Ok(());
                }
            };

            match result {
                Ok(()) => {}
                Err(CommandError::Service(err)) => {
                    self.console.out().error(&err.to_string())?;
                }
                Err(CommandError::InputClosed) => {
                    info!("input closed, ending session");
                    return Ok(());
                }
                Err(CommandError::Io(err)) => return Err(err.into()),
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (S, W) {
        (self.store, self.console.into_output())
    }

    fn show_menu(&mut self) -> std::io::Result<()> {
        let out = self.console.out();
        out.header("User Management Menu")?;
        for (index, option) in MenuOption::ALL.iter().enumerate() {
            out.line(&format!("{}. {}", index + 1, option.label()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use user_service::{InMemoryUserStore, User, UserStore};

    fn run_session(script: &str) -> (InMemoryUserStore, String) {
        run_session_with(InMemoryUserStore::new(), script)
    }

    fn run_session_with(store: InMemoryUserStore, script: &str) -> (InMemoryUserStore, String) {
        let mut app = App::new(store, Cursor::new(script.to_string()), Vec::new(), false);
        app.run().unwrap();
        let (store, out) = app.into_parts();
        (store, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_menu_option_parse() {
        assert_eq!(MenuOption::parse(" 1 "), Some(MenuOption::List));
        assert_eq!(MenuOption::parse("5"), Some(MenuOption::Exit));
        assert_eq!(MenuOption::parse("6"), None);
        assert_eq!(MenuOption::parse(""), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (store, out) = run_session("5\n");
        assert!(store.is_empty());
        assert!(out.starts_with("\n=== User Management Menu ===\n1. List users\n"));
        assert!(out.contains("1. List users"));
        assert!(out.contains("5. Exit"));
        assert!(out.ends_with("Exiting.\n"));
    }

    #[test]
    fn test_list_empty() {
        let (_, out) = run_session("1\n5\n");
        assert!(out.contains("No users registered."));
    }

    #[test]
    fn test_create_and_list() {
        let (store, out) = run_session("2\n1\nAna\na@x.com\n1\n5\n");
        assert_eq!(store.get_by_id(1), Some(&User::new(1, "Ana", "a@x.com")));
        assert!(out.contains("User created successfully."));
        assert!(out.contains("User list:"));
        assert!(out.contains("ID: 1 | Name: Ana | Email: a@x.com"));
    }

    #[test]
    fn test_create_with_bad_id_keeps_looping() {
        // name and email are never asked for, so "5" is read as the next selection
        let (store, out) = run_session("2\nabc\n5\n");
        assert!(store.is_empty());
        assert!(out.contains(
            "Error: invalid input: the ID must be an integer (got \"abc\")\n"
        ));
        assert!(!out.contains("Enter name: "));
        assert!(out.ends_with("Exiting.\n"));
    }

    #[test]
    fn test_create_duplicate_reports_error() {
        let (store, out) = run_session("2\n1\nAna\na@x.com\n2\n1\nBo\nb@x.com\n5\n");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(1).unwrap().name, "Ana");
        assert!(out.contains("Enter email: Error: a user with id 1 already exists\n"));
        assert!(out.contains("\nUser created successfully.\n"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_update_blank_fields_keep_existing() {
        let mut store = InMemoryUserStore::new();
        store.insert(User::new(1, "Ana", "a@x.com")).unwrap();

        let (store, out) = run_session_with(store, "3\n1\nAna2\n  \n5\n");
        assert_eq!(store.get_by_id(1), Some(&User::new(1, "Ana2", "a@x.com")));
        assert!(out.contains("Current data: ID: 1 | Name: Ana | Email: a@x.com"));
        assert!(out.contains("User updated successfully."));
    }

    #[test]
    fn test_update_missing_user() {
        let (store, out) = run_session("3\n9\n5\n");
        assert!(store.is_empty());
        assert!(out.contains("No user found with that ID."));
        assert!(!out.contains("Current data"));
    }

    #[test]
    fn test_delete_flow() {
        let mut store = InMemoryUserStore::new();
        store.insert(User::new(1, "Ana", "a@x.com")).unwrap();
        store.insert(User::new(2, "Bo", "b@x.com")).unwrap();

        let (store, out) = run_session_with(store, "4\n2\n4\n2\n5\n");
        assert!(store.get_by_id(2).is_none());
        assert_eq!(store.get_all(), vec![&User::new(1, "Ana", "a@x.com")]);
        assert!(out.contains("User deleted successfully."));
        assert!(out.contains("No user found with that ID."));
    }

    #[test]
    fn test_invalid_option() {
        let (_, out) = run_session("9\nlist\n5\n");
        assert_eq!(out.matches("Invalid option. Please try again.").count(), 2);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (store, out) = run_session("");
        assert!(store.is_empty());
        assert!(!out.contains("Exiting."));

        // closed in the middle of a create flow
        let (store, _) = run_session("2\n3\nAna\n");
        assert!(store.is_empty());
    }

    #[test]
    fn test_end_of_input_during_update_keeps_record() {
        let mut store = InMemoryUserStore::new();
        store.insert(User::new(1, "Ana", "a@x.com")).unwrap();

        let mut app = App::new(store, Cursor::new("3\n1\n"), Vec::new(), false);
        assert!(app.run().is_ok());

        let (store, out) = app.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Current data: ID: 1 | Name: Ana | Email: a@x.com\n"));
        assert!(!out.contains("User updated successfully."));
        assert_eq!(store.get_all(), vec![&User::new(1, "Ana", "a@x.com")]);
    }

    #[test]
    fn test_colored_session_styles_errors() {
        let input = Cursor::new("2\nx\n5\n");
        let mut app = App::new(InMemoryUserStore::new(), input, Vec::new(), true);
        app.run().unwrap();

        let (_, out) = app.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\x1b[1;31mError:\x1b[0m invalid input"));
    }

    #[test]
    fn test_full_scenario() {
        let script = "\
2\n1\nAna\na@x.com\n\
2\n2\nBo\nb@x.com\n\
3\n1\nAna2\n\n\
4\n2\n\
1\n\
5\n";
        let (store, out) = run_session(script);

        let users: Vec<_> = store.get_all().into_iter().cloned().collect();
        assert_eq!(users, vec![User::new(1, "Ana2", "a@x.com")]);
        assert!(out.contains("ID: 1 | Name: Ana2 | Email: a@x.com"));
        assert!(!out.contains("ID: 2 | Name: Bo"));
    }
}

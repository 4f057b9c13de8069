pub mod cli;
pub mod run;

mod run_add_contact;
mod run_export_emails;
mod run_list_contacts;
mod run_remove_contact;
mod show_store_stats;

pub use cli::{Cli, Command};

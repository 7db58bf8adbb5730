use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use phonebook::api::Directory;
use phonebook::commands::{CmdMessage, MessageLevel};
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use phonebook::index::IndexedContact;
use phonebook::model::ContactFields;
use phonebook::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod prompt;
use args::{Cli, Commands};

const DATA_FILENAME: &str = "phonebook.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    directory: Directory<FileStore>,
    per_page: usize,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            last_name,
            first_name,
            middle_name,
            organization,
            work_phone,
            personal_phone,
        }) => handle_add(
            &mut ctx,
            last_name,
            first_name,
            middle_name,
            organization,
            work_phone,
            personal_phone,
        ),
        Some(Commands::List { page, per_page }) => handle_list(&mut ctx, page, per_page),
        Some(Commands::Edit { index }) => handle_edit(&mut ctx, index),
        Some(Commands::Search { term }) => handle_search(&mut ctx, term),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => run_menu(&mut ctx),
    }
}

fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("PHONEBOOK_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs = ProjectDirs::from("com", "phonebook", "phonebook")
        .expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir();
    let config = PhonebookConfig::load(&data_dir).unwrap_or_default();

    let data_file = cli
        .file
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| data_dir.join(DATA_FILENAME));

    let store = FileStore::new(data_file);
    let directory = Directory::open(store)?;

    Ok(AppContext {
        directory,
        per_page: config.per_page(),
        data_dir,
    })
}

// --- Interactive menu ---

fn run_menu(ctx: &mut AppContext) -> Result<()> {
    loop {
        println!();
        println!("Phonebook commands:");
        println!("1. Add a contact");
        println!("2. List contacts");
        println!("3. Edit a contact");
        println!("4. Search");
        println!("5. Quit");

        let choice = prompt::read_line("Command number: ")?;
        let outcome = match choice.trim() {
            "1" => menu_add(ctx),
            "2" => menu_list(ctx),
            "3" => menu_edit(ctx),
            "4" => menu_search(ctx),
            "5" => {
                println!("Bye!");
                return Ok(());
            }
            _ => {
                println!("{}", "Unknown command, try again.".yellow());
                Ok(())
            }
        };
        report_or_bail(outcome)?;
    }
}

/// User-level errors print and return to the menu; IO and file corruption
/// propagate and end the process.
fn report_or_bail(outcome: Result<()>) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(e @ (PhonebookError::Io(_) | PhonebookError::Serialization(_))) => Err(e),
        Err(recoverable) => {
            println!("{}", recoverable.to_string().red());
            Ok(())
        }
    }
}

fn menu_add(ctx: &mut AppContext) -> Result<()> {
    let fields = prompt::contact_fields()?;
    let result = ctx.directory.add(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn menu_list(ctx: &mut AppContext) -> Result<()> {
    if !ensure_contacts(ctx) {
        return Ok(());
    }
    let page = prompt::number("Page number")?;
    handle_list(ctx, page, None)
}

fn menu_edit(ctx: &mut AppContext) -> Result<()> {
    if !ensure_contacts(ctx) {
        return Ok(());
    }
    let index = prompt::number("Contact number to edit")?;
    handle_edit(ctx, index)
}

fn menu_search(ctx: &mut AppContext) -> Result<()> {
    if !ensure_contacts(ctx) {
        return Ok(());
    }
    let term = prompt::field("Search for")?;
    handle_search(ctx, term)
}

// --- Subcommand handlers ---

fn handle_add(
    ctx: &mut AppContext,
    last_name: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
    organization: Option<String>,
    work_phone: Option<String>,
    personal_phone: Option<String>,
) -> Result<()> {
    let fields = ContactFields {
        last_name: prompt::field_from_flag("Last name", last_name)?,
        first_name: prompt::field_from_flag("First name", first_name)?,
        middle_name: prompt::field_from_flag("Middle name", middle_name)?,
        organization: prompt::field_from_flag("Organization", organization)?,
        work_phone: prompt::phone_from_flag("Work phone", work_phone)?,
        personal_phone: prompt::phone_from_flag("Personal phone", personal_phone)?,
    };

    let result = ctx.directory.add(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, page: usize, per_page: Option<usize>) -> Result<()> {
    if !ensure_contacts(ctx) {
        return Ok(());
    }

    let per_page = per_page.unwrap_or(ctx.per_page);
    let result = ctx.directory.list(page, per_page)?;
    if result.listed.is_empty() {
        println!("{}", format!("No contacts on page {}.", page).dimmed());
    } else {
        print_contacts(&result.listed);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: usize) -> Result<()> {
    if !ensure_contacts(ctx) {
        return Ok(());
    }

    let current = match ctx.directory.get(index) {
        Some(contact) => contact.clone(),
        None => {
            return Err(PhonebookError::IndexOutOfRange {
                index,
                len: ctx.directory.len(),
            })
        }
    };

    println!("Editing contact {} (empty input keeps the current value):", index);
    let fields = prompt::contact_fields_with_defaults(&current)?;
    let result = ctx.directory.edit(index, fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    if !ensure_contacts(ctx) {
        return Ok(());
    }

    let result = ctx.directory.search(&term)?;
    if !result.listed.is_empty() {
        println!("Here is what turned up:");
        print_contacts(&result.listed);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = PhonebookConfig::load(&ctx.data_dir)?;

    match (key.as_deref(), value) {
        (None, _) | (Some("per-page"), None) => {
            println!("per-page = {}", config.per_page());
        }
        (Some("per-page"), Some(v)) => match v.parse::<usize>() {
            Ok(n) => {
                config.set_per_page(n);
                config.save(&ctx.data_dir)?;
                println!("per-page = {}", config.per_page());
            }
            Err(_) => println!("{}", "per-page takes a number".red()),
        },
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

// --- Output ---

fn ensure_contacts(ctx: &AppContext) -> bool {
    if ctx.directory.is_empty() {
        println!("{}", "No contacts yet. Add one first.".dimmed());
        return false;
    }
    true
}

fn print_contacts(contacts: &[IndexedContact]) {
    for ic in contacts {
        println!(
            "{} {}",
            format!("{}.", ic.index).yellow(),
            ic.contact.full_name().bold()
        );
        println!("   Organization: {}", ic.contact.organization);
        println!("   Work phone: {}", ic.contact.work_phone);
        println!("   Personal phone: {}", ic.contact.personal_phone);
        println!();
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

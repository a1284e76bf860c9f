use std::io::{self, BufRead, Write};

use clap::{
    app_from_crate, crate_authors, crate_description, crate_name, crate_version, App, AppSettings,
    Arg, ArgMatches, SubCommand,
};
use contact_book::ContactBook;

fn main() -> io::Result<()> {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Logs every book operation to stderr"),
        )
        .get_matches();

    let log_level = if matches.is_present("verbose") {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_level)
        .init();

    let mut book = ContactBook::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let words = match shell_words::split(&line?) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        match shell().get_matches_from_safe(words) {
            Ok(m) => {
                if !run(&mut book, &m, &mut out)? {
                    break;
                }
            }
            Err(e) => writeln!(out, "{}", e.message)?,
        }
    }
    Ok(())
}

fn shell<'a, 'b>() -> App<'a, 'b> {
    let name = || Arg::with_name("name").index(1).required(true);

    App::new("contacts")
        .settings(&[
            AppSettings::NoBinaryName,
            AppSettings::SubcommandRequiredElseHelp,
            AppSettings::DisableVersion,
            AppSettings::VersionlessSubcommands,
            AppSettings::ColorNever,
        ])
        .subcommand(
            SubCommand::with_name("add")
                .about("Adds a contact")
                .arg(name())
                .arg(Arg::with_name("phone").index(2).required(true))
                .arg(Arg::with_name("email").index(3).required(true)),
        )
        .subcommand(
            SubCommand::with_name("search")
                .alias("find")
                .about("Shows the contact with exactly this name")
                .arg(name()),
        )
        .subcommand(
            SubCommand::with_name("delete")
                .alias("rm")
                .about("Removes a contact")
                .arg(name()),
        )
        .subcommand(
            SubCommand::with_name("update")
                .about("Changes the phone or email of a contact")
                .arg(name())
                .arg(Arg::with_name("phone").long("phone").takes_value(true))
                .arg(Arg::with_name("email").long("email").takes_value(true)),
        )
        .subcommand(
            SubCommand::with_name("display")
                .alias("list")
                .about("Lists all contacts alphabetically"),
        )
        .subcommand(
            SubCommand::with_name("quit")
                .alias("exit")
                .about("Leaves the shell"),
        )
}

/// Executes one shell command. Returns `false` once the shell should stop.
fn run(book: &mut ContactBook, matches: &ArgMatches, out: &mut impl Write) -> io::Result<bool> {
    let outcome = match matches.subcommand() {
        ("add", Some(m)) => {
            let name = m.value_of("name").unwrap_or_default();
            let phone = m.value_of("phone").unwrap_or_default();
            let email = m.value_of("email").unwrap_or_default();
            book.add(name, phone, email)
                .map(|contact| format!("Added: {}", contact.name()))
        }
        ("search", Some(m)) => book
            .search(m.value_of("name").unwrap_or_default())
            .map(|contact| format!("Found: {}", contact)),
        ("delete", Some(m)) => book
            .delete(m.value_of("name").unwrap_or_default())
            .map(|contact| format!("Deleted: {}", contact.name())),
        ("update", Some(m)) => book
            .update(
                m.value_of("name").unwrap_or_default(),
                m.value_of("phone"),
                m.value_of("email"),
            )
            .map(|contact| format!("Updated: {}", contact)),
        ("display", _) => book.display().map(|contacts| {
            let mut listing = String::from("Contacts:");
            for contact in contacts {
                listing.push('\n');
                listing.push_str(&contact.to_string());
            }
            listing
        }),
        ("quit", _) => return Ok(false),
        _ => return Ok(true),
    };

    match outcome {
        Ok(message) => writeln!(out, "{}", message)?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(true)
}

//! Volunteer roster CLI.
//!
//! Thin command-line entry point over the library: `list`, `import <file>`,
//! `export <file>`. Storage location and log level come from the
//! environment (see [`Config`]).

use std::env;
use std::fs;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use volunteer_roster::config::Config;
use volunteer_roster::db::BlobStore;
use volunteer_roster::roster::Roster;

fn main() -> ExitCode {
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Roster data path: {:?}", config.data_path);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let store = BlobStore::open(&config.data_path)?;
    let mut roster = Roster::new(store);

    match args.first().map(String::as_str) {
        Some("list") => {
            for volunteer in roster.volunteers() {
                let groups = roster.group_name_list(&volunteer.groups).join(", ");
                println!(
                    "{} {} <{}>  [{}]",
                    volunteer.firstname, volunteer.lastname, volunteer.email, groups
                );
            }
            println!(
                "{} volunteers, {} groups",
                roster.volunteers().len(),
                roster.groups().len()
            );
            Ok(())
        }
        Some("import") => {
            let path = args.get(1).ok_or("Usage: volunteer-roster import <file>")?;
            let text = fs::read_to_string(path)?;
            let summary = roster.import_csv(&text)?;
            println!(
                "Imported {} rows, skipped {}",
                summary.imported, summary.skipped
            );
            for error in &summary.errors {
                println!("  {}", error);
            }
            Ok(())
        }
        Some("export") => {
            let path = args.get(1).ok_or("Usage: volunteer-roster export <file>")?;
            fs::write(path, roster.export_csv())?;
            println!("Exported {} volunteers to {}", roster.volunteers().len(), path);
            Ok(())
        }
        _ => Err("Usage: volunteer-roster <list|import <file>|export <file>>".into()),
    }
}

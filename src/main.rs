use clap::Parser;
use dayjot::application::{
    add_entry, edit_entry, export, init, list_entries, mood_trend, search, EntryPatch,
    ExportSelection,
};
use dayjot::cli::{format_entry_list, format_trend, format_user_list, Cli, Commands};
use dayjot::domain::{today, validate_date, EntryDraft, Session};
use dayjot::error::DayjotError;
use dayjot::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DayjotError> {
    match cli.command {
        Commands::Init { path } => init(&path),

        Commands::Add {
            user,
            date,
            mood,
            did,
            meaningful,
            choice,
            avoid,
            tomorrow,
            tags,
        } => {
            let repo = FileSystemRepository::discover()?;
            let session = Session::new(&user)?;
            let date = match date {
                Some(d) => validate_date(&d)?,
                None => today(),
            };
            let draft = EntryDraft {
                date,
                mood,
                did_today: did.unwrap_or_default(),
                meaningful_event: meaningful.unwrap_or_default(),
                self_choice: choice.unwrap_or_default(),
                dont_repeat: avoid.unwrap_or_default(),
                plan_tomorrow: tomorrow.unwrap_or_default(),
                tags: tags.unwrap_or_default(),
            };
            add_entry(&repo, &session, &draft)?;
            println!("Recorded entry for {} on {}", session.user, draft.date);
            Ok(())
        }

        Commands::List { user, limit } => {
            let repo = FileSystemRepository::discover()?;
            let session = Session::new(&user)?;
            let entries = soft_read(list_entries(&repo, &session, Some(limit)), Vec::new())?;
            print!("{}", format_entry_list(&entries));
            Ok(())
        }

        Commands::Edit {
            user,
            date,
            mood,
            did,
            meaningful,
            choice,
            avoid,
            tomorrow,
            tags,
        } => {
            let repo = FileSystemRepository::discover()?;
            let session = Session::new(&user)?;
            let date = validate_date(&date)?;
            let patch = EntryPatch {
                mood,
                did_today: did,
                meaningful_event: meaningful,
                self_choice: choice,
                dont_repeat: avoid,
                plan_tomorrow: tomorrow,
                tags,
            };

            if patch.is_empty() {
                println!("Nothing to update; pass at least one field option");
                return Ok(());
            }

            match edit_entry(&repo, &session, &date, &patch) {
                Ok(position) => {
                    println!(
                        "Updated entry for {} on {} (row {})",
                        session.user, date, position
                    );
                    Ok(())
                }
                // Nothing to edit is not an alarm.
                Err(DayjotError::NotFound { user, date }) => {
                    println!("No entry for {} on {}; nothing to edit", user, date);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Search { query } => {
            let repo = FileSystemRepository::discover()?;
            let matches = soft_read(search(&repo, &query), Vec::new())?;
            if matches.is_empty() {
                println!("No entries match '{}'", query);
            } else {
                println!("Found {} entries matching '{}':\n", matches.len(), query);
                print!("{}", format_entry_list(&matches));
            }
            Ok(())
        }

        Commands::Users => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store()?;
            print!("{}", format_user_list(&store.list_users()));
            Ok(())
        }

        Commands::Trend { user, limit } => {
            let repo = FileSystemRepository::discover()?;
            let session = Session::new(&user)?;
            let points = soft_read(mood_trend(&repo, &session, Some(limit)), Vec::new())?;
            print!("{}", format_trend(&points));
            Ok(())
        }

        Commands::Export {
            user,
            date,
            recent,
            all,
            output,
        } => {
            let repo = FileSystemRepository::discover()?;
            let selection = match (all, user) {
                (true, _) => ExportSelection::All,
                (false, Some(user)) => {
                    if let Some(date) = date {
                        ExportSelection::Day {
                            user,
                            date: validate_date(&date)?,
                        }
                    } else {
                        ExportSelection::Recent {
                            user,
                            limit: recent.unwrap_or(10),
                        }
                    }
                }
                (false, None) => {
                    return Err(DayjotError::Config(
                        "Export needs --user or --all".to_string(),
                    ));
                }
            };
            let summary = export(&repo, &selection, output.as_deref())?;
            println!("Exported {} entries to {}", summary.rows, summary.path.display());
            Ok(())
        }
    }
}

/// Reads degrade to an empty result with a notice; one unreachable table
/// must not make a whole command crash. Writes never come through here.
fn soft_read<T>(result: Result<T, DayjotError>, empty: T) -> Result<T, DayjotError> {
    match result {
        Err(e @ DayjotError::BackingStoreUnavailable(_)) => {
            eprintln!("Warning: {}", e);
            Ok(empty)
        }
        other => other,
    }
}

//! Terminal console for the dianovi patient API.
//!
//! With no subcommand the console fetches the patient list and enters the
//! interactive session. Subcommands map each user action to a single API
//! call for scripted use.
//!
//! # Environment Variables
//! - `DIANOVI_API_URL`: Backend base URL (default: "http://localhost:8000")
//! - `RUST_LOG`: Log filter for diagnostics (logs never replace UI output)

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_client::{ApiClient, DEFAULT_API_URL};
use dianovi_console::board::{PatientBoard, RecommendationPanel};
use dianovi_console::ingest;
use dianovi_console::prompt::Prompter;
use dianovi_console::render::{render_board, render_panel};
use dianovi_console::{ConsoleSession, ReadlinePrompter};
use dianovi_types::{BirthDate, NonEmptyText, Patient};

#[derive(Parser)]
#[command(name = "dianovi")]
#[command(about = "Terminal console for the dianovi patient API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,
    /// Show a single patient
    Show {
        /// Patient identifier
        patient_id: String,
    },
    /// Create a patient
    Add {
        /// Patient identifier (unique)
        patient_id: String,
        /// Display name
        name: String,
        /// Date of birth (YYYY-MM-DD)
        date_of_birth: String,
    },
    /// Update a patient's name and date of birth
    Edit {
        /// Patient identifier
        patient_id: String,
        /// New display name
        name: String,
        /// New date of birth (YYYY-MM-DD)
        date_of_birth: String,
    },
    /// Delete a patient
    Delete {
        /// Patient identifier
        patient_id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Fetch recommendations for a patient
    Recommendations {
        /// Patient identifier
        patient_id: String,
    },
    /// Bulk-create patients from a JSON file
    Import {
        /// File holding a JSON array of patients
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dianovi_run=info".parse()?)
                .add_directive("dianovi_console=info".parse()?)
                .add_directive("api_client=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("DIANOVI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    let client = ApiClient::new(base_url);

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::List) => {
            match client.list_patients().await {
                Ok(patients) => {
                    let mut board = PatientBoard::new();
                    board.set_patients(patients);
                    print!("{}", render_board(&board));
                }
                Err(e) => {
                    tracing::error!("Fetch patients error: {:?}", e);
                    println!("Error loading patients. Is the API running?");
                }
            }
        }
        Some(Commands::Show { patient_id }) => {
            print_patient(&client, &patient_id).await;
        }
        Some(Commands::Add {
            patient_id,
            name,
            date_of_birth,
        }) => {
            let Some(patient) = validated_patient(&patient_id, &name, &date_of_birth) else {
                return Ok(());
            };
            match client.create_patient(&patient).await {
                Ok(()) => println!("Created patient {}", patient.patient_id),
                Err(e) => eprintln!("Error creating patient: {e}"),
            }
        }
        Some(Commands::Edit {
            patient_id,
            name,
            date_of_birth,
        }) => {
            let Some(patient) = validated_patient(&patient_id, &name, &date_of_birth) else {
                return Ok(());
            };
            match client.update_patient(&patient_id, &patient).await {
                Ok(()) => println!("Updated patient {patient_id}"),
                Err(e) => eprintln!("Error updating patient: {e}"),
            }
        }
        Some(Commands::Delete { patient_id, yes }) => {
            let confirmed = if yes {
                true
            } else {
                let mut prompter = ReadlinePrompter::new()?;
                prompter.confirm(&format!(
                    "Are you sure you want to delete patient {patient_id}?"
                ))?
            };
            if confirmed {
                match client.delete_patient(&patient_id).await {
                    Ok(()) => println!("Deleted patient {patient_id}"),
                    Err(e) => eprintln!("Error deleting patient: {e}"),
                }
            }
        }
        Some(Commands::Recommendations { patient_id }) => {
            match client.list_recommendations(&patient_id).await {
                Ok(items) => print!("{}", render_panel(&RecommendationPanel::Loaded(items))),
                Err(e) => {
                    tracing::error!("Fetch recommendations error: {:?}", e);
                    println!("Could not load recommendations.");
                }
            }
        }
        Some(Commands::Import { path }) => {
            match ingest::import_patients(
                &client,
                &path,
                ingest::READY_ATTEMPTS,
                ingest::READY_DELAY,
            )
            .await
            {
                Ok(summary) => println!(
                    "Imported {} patients ({} skipped, {} failed)",
                    summary.created, summary.skipped, summary.failed
                ),
                Err(e) => eprintln!("Error importing patients: {e}"),
            }
        }
        None => run_interactive(client).await?,
    }

    Ok(())
}

/// Validates one-shot command input the same way the interactive form does.
fn validated_patient(patient_id: &str, name: &str, date_of_birth: &str) -> Option<Patient> {
    let id = match NonEmptyText::new(patient_id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Invalid patient id: {e}");
            return None;
        }
    };
    let name = match NonEmptyText::new(name) {
        Ok(name) => name,
        Err(e) => {
            eprintln!("Invalid name: {e}");
            return None;
        }
    };
    let dob = match BirthDate::new(date_of_birth) {
        Ok(dob) => dob,
        Err(e) => {
            eprintln!("Invalid date of birth: {e}");
            return None;
        }
    };
    Some(Patient {
        patient_id: id.into_string(),
        name: name.into_string(),
        date_of_birth: dob.into_string(),
    })
}

async fn print_patient(client: &ApiClient, patient_id: &str) {
    match client.get_patient(patient_id).await {
        Ok(patient) => println!(
            "ID: {}, Name: {}, Date of Birth: {}",
            patient.patient_id, patient.name, patient.date_of_birth
        ),
        Err(e) => {
            tracing::error!("Fetch patient error: {:?}", e);
            println!("Could not load patient {patient_id}.");
        }
    }
}

/// The interactive session: initial list fetch, then one command at a time.
async fn run_interactive(client: ApiClient) -> anyhow::Result<()> {
    let prompter = ReadlinePrompter::new()?;
    let mut session = ConsoleSession::new(client, prompter);
    session.refresh().await;
    print!("{}", render_board(session.board()));
    println!("Type 'help' for commands.");

    let mut editor = rustyline::DefaultEditor::new()?;
    loop {
        let line = match editor.readline("dianovi> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();

        match (command, argument) {
            ("help", _) => print_help(),
            ("quit", _) | ("exit", _) => break,
            ("list", _) | ("refresh", _) => {
                session.refresh().await;
                print!("{}", render_board(session.board()));
            }
            ("add", _) => {
                session.add_patient().await?;
                print!("{}", render_board(session.board()));
            }
            ("edit", Some(id)) => {
                session.edit_patient(id).await?;
                print!("{}", render_board(session.board()));
            }
            ("delete", Some(id)) => {
                session.delete_patient(id).await?;
                print!("{}", render_board(session.board()));
            }
            ("view", Some(id)) => {
                session.view_recommendations(id).await;
                print!("{}", render_board(session.board()));
            }
            ("show", Some(id)) => print_patient(session.client(), id).await,
            ("edit", None) | ("delete", None) | ("view", None) | ("show", None) => {
                println!("Usage: {command} <patient-id>");
            }
            _ => println!("Unknown command. Type 'help' for commands."),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  list              refresh the patient list from the server");
    println!("  add               create a patient (prompts for the fields)");
    println!("  edit <id>         update a patient's name and date of birth");
    println!("  delete <id>       delete a patient");
    println!("  view <id>         fetch a patient's recommendations");
    println!("  show <id>         fetch a single patient record");
    println!("  quit              leave the console");
}

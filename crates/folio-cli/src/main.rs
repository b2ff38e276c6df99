// Rust guideline compliant 2026-10-18

//! Folio CLI Application
//!
//! Command-line interface for managing a Folio portfolio site.

use clap::Parser;
use folio_app::{AppError, ErrorEnvelope};
use folio_cli::commands;
use folio_cli::commands::categories::CategoryChange;
use folio_cli::commands::list::Listing;
use folio_cli::commands::upload::UploadArgs;
use folio_cli::terminal::{print_notice, print_success};
use folio_cli::{create_formatter, init_tracing, should_use_color, OutputFormatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Folio: portfolio gallery and admin tooling",
    long_about = "Folio manages a portfolio site: the public gallery of projects grouped by mode and category, and the admin workflow for uploading media, editing category lists and deleting projects.",
    after_help = "Examples:\n  folio init --admin-email me@studio.kr --admin-password secret\n  folio login --email me@studio.kr --password secret\n  folio upload --mode std --category Branding --title Poster --thumbnail cover.jpg --detail a.jpg --detail b.mp4\n  folio list --mode lab --search zine\n  folio delete prj-abc123 prj-def456\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Site root (defaults to the current directory)
    #[arg(long, global = true)]
    site: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Folio site
    Init {
        /// Administrator email
        #[arg(long)]
        admin_email: Option<String>,

        /// Administrator password (stored as a SHA-256 digest)
        #[arg(long)]
        admin_password: Option<String>,
    },

    /// List gallery projects
    List {
        /// Mode (std or lab)
        #[arg(long)]
        mode: Option<String>,

        /// Category, or "All Project"
        #[arg(long)]
        category: Option<String>,

        /// Search title and subtitle
        #[arg(long)]
        search: Option<String>,
    },

    /// List all projects for administration
    Projects {
        /// Mode (all, std or lab)
        #[arg(long)]
        mode: Option<String>,

        /// Category, or "All Project"
        #[arg(long)]
        category: Option<String>,
    },

    /// Show details of a project
    Show {
        /// Project ID
        id: String,
    },

    /// Show the category lists
    Categories,

    /// Edit the category lists
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Sign in as the administrator
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the current session
    Whoami,

    /// Upload media and create a project
    Upload {
        /// Mode (std or lab)
        #[arg(long)]
        mode: String,

        /// Category from the mode's list
        #[arg(long)]
        category: String,

        /// Project title
        #[arg(long)]
        title: String,

        /// Subtitle
        #[arg(long)]
        subtitle: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Layout (wide, square or tall)
        #[arg(long)]
        layout: Option<String>,

        /// Date label (defaults to the current year)
        #[arg(long)]
        date: Option<String>,

        /// Role (defaults to "Design")
        #[arg(long)]
        role: Option<String>,

        /// Client (defaults to "Client")
        #[arg(long)]
        client: Option<String>,

        /// Cover image or video
        #[arg(long)]
        thumbnail: Option<PathBuf>,

        /// Detail media, in display order
        #[arg(long = "detail")]
        details: Vec<PathBuf>,
    },

    /// Append detail media to a project
    Attach {
        /// Project ID
        id: String,

        /// Media files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Delete one or more projects
    Delete {
        /// Project IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Send a contact message
    Contact {
        /// Your name
        #[arg(long)]
        name: String,

        /// Reply address
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum CategoryAction {
    /// Append a category to a mode's list
    Add {
        /// Mode (std or lab)
        mode: String,
        /// Category name
        value: String,
    },
    /// Remove a category from a mode's list
    Remove {
        /// Mode (std or lab)
        mode: String,
        /// Category name
        value: String,
    },
}

async fn run(
    command: Commands,
    site: Option<&Path>,
    formatter: &dyn OutputFormatter,
    json: bool,
) -> anyhow::Result<Output> {
    let output = match command {
        Commands::Init {
            admin_email,
            admin_password,
        } => {
            let root = site.unwrap_or_else(|| Path::new("."));
            Output::Success(commands::init::execute(root, admin_email, admin_password)?)
        }
        Commands::List {
            mode,
            category,
            search,
        } => match commands::list::execute(site, mode, category, search, formatter).await? {
            Listing::Projects(text) => Output::Text(text),
            Listing::Empty(notice) => Output::Notice(notice),
        },
        Commands::Projects { mode, category } => {
            Output::Text(commands::projects::execute(site, mode, category, formatter).await?)
        }
        Commands::Show { id } => Output::Text(commands::show::execute(site, &id, formatter).await?),
        Commands::Categories => Output::Text(commands::categories::show(site, formatter).await?),
        Commands::Category { action } => {
            let (change, mode, value) = match action {
                CategoryAction::Add { mode, value } => (CategoryChange::Add, mode, value),
                CategoryAction::Remove { mode, value } => (CategoryChange::Remove, mode, value),
            };
            Output::Text(
                commands::categories::change(site, change, &mode, &value, formatter).await?,
            )
        }
        Commands::Login { email, password } => {
            Output::Success(commands::auth::login(site, &email, &password).await?)
        }
        Commands::Logout => Output::Success(commands::auth::logout(site).await?),
        Commands::Whoami => Output::Text(commands::auth::whoami(site, json).await?),
        Commands::Upload {
            mode,
            category,
            title,
            subtitle,
            description,
            layout,
            date,
            role,
            client,
            thumbnail,
            details,
        } => {
            let args = UploadArgs {
                mode,
                category,
                title,
                subtitle,
                description,
                layout,
                date,
                role,
                client,
                thumbnail,
                details,
            };
            let id = commands::upload::execute(site, args).await?;
            if json {
                Output::Text(serde_json::json!({ "id": id }).to_string())
            } else {
                Output::Success(format!("Created project {id}"))
            }
        }
        Commands::Attach { id, files } => {
            Output::Success(commands::attach::execute(site, &id, &files).await?)
        }
        Commands::Delete { ids } => Output::Success(commands::delete::execute(site, &ids).await?),
        Commands::Contact {
            name,
            email,
            message,
        } => Output::Success(commands::contact::execute(site, &name, &email, &message).await?),
    };
    Ok(output)
}

enum Output {
    Text(String),
    Success(String),
    Notice(String),
}

fn report_error(err: &anyhow::Error, json: bool, formatter: &dyn OutputFormatter) {
    if json {
        if let Some(app_err) = err.downcast_ref::<AppError>() {
            let envelope = ErrorEnvelope::from_error(app_err);
            match serde_json::to_string_pretty(&envelope) {
                Ok(body) => println!("{body}"),
                Err(_) => eprintln!("{}", formatter.format_error(&app_err.notice())),
            }
            return;
        }
    }
    let message = match err.downcast_ref::<AppError>() {
        Some(app_err) => app_err.notice(),
        None => err.to_string(),
    };
    eprintln!("{}", formatter.format_error(&message));
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match init_tracing(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let json = format == "json";
    let formatter = create_formatter(format, use_color);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run(
        cli.command,
        cli.site.as_deref(),
        formatter.as_ref(),
        json,
    ));

    match result {
        Ok(Output::Text(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Output::Success(message)) => {
            if json {
                println!("{}", serde_json::json!({ "status": "ok", "message": message }));
            } else {
                print_success(&message, use_color);
            }
            ExitCode::SUCCESS
        }
        Ok(Output::Notice(notice)) => {
            if json {
                println!("{}", serde_json::json!({ "status": "ok", "notice": notice }));
            } else {
                print_notice(&notice, use_color);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            report_error(&err, json, formatter.as_ref());
            ExitCode::FAILURE
        }
    }
}

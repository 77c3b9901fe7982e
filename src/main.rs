// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use resreview::client::http::parse_listing;
use resreview::utils::logging::{format_error, format_field, format_success, format_warning};
use resreview::{
    CandidateExtractor, Config, HttpResumeSource, JsonExporter, RecordBuilder, ResumeBoard,
    ResumeRecord, ResumeSource, Validator,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "resreview")]
#[command(version)]
#[command(about = "Candidate field recovery for resume screening results", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive name, email, phone and job role from a plain-text resume
    Extract {
        resume: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        job_description: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Show a user's resumes ranked by match percentage
    List {
        #[arg(short, long, env = "RESREVIEW_USER")]
        user: Option<String>,

        /// Only show resumes whose job role contains this text
        #[arg(short, long)]
        role: Option<String>,

        /// Read a saved listing instead of calling the backend
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Delete a resume on the backend
    Delete { id: String },

    /// Download the original resume file
    View {
        id: String,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write the ranked table to JSON
    Export {
        #[arg(short, long, env = "RESREVIEW_USER")]
        user: Option<String>,

        #[arg(short, long)]
        role: Option<String>,

        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    resreview::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Extract {
            resume,
            job_description,
            json,
        } => {
            cmd_extract(&config, &resume, job_description.as_deref(), json)?;
        }
        Commands::List { user, role, input } => {
            cmd_list(&config, user.as_deref(), role.as_deref(), input.as_deref()).await?;
        }
        Commands::Delete { id } => {
            cmd_delete(&config, &id).await?;
        }
        Commands::View { id, output } => {
            cmd_view(&config, &id, &output).await?;
        }
        Commands::Export {
            user,
            role,
            input,
            output,
            pretty,
        } => {
            cmd_export(
                &config,
                user.as_deref(),
                role.as_deref(),
                input.as_deref(),
                output,
                pretty,
            )
            .await?;
        }
    }

    Ok(())
}

fn cmd_extract(
    config: &Config,
    resume: &Path,
    job_description: Option<&Path>,
    json: bool,
) -> Result<()> {
    let resume_text = Validator::read_text_file(resume).context("Failed to read resume text")?;
    let job_description = match job_description {
        Some(path) => {
            Validator::read_text_file(path).context("Failed to read job description")?
        }
        None => String::new(),
    };

    let extractor = CandidateExtractor::new(config.extraction.clone());
    let fields = extractor.extract(&resume_text, &job_description);

    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        println!("{}", format_field("Name", &fields.name));
        println!("{}", format_field("Email", &fields.email));
        println!("{}", format_field("Phone", &fields.phone));
        println!("{}", format_field("Job role", &fields.job_role));
    }

    Ok(())
}

async fn cmd_list(
    config: &Config,
    user: Option<&str>,
    role: Option<&str>,
    input: Option<&Path>,
) -> Result<()> {
    let mut board = load_board(config, user, input).await?;

    if let Some(role) = role
        && !board.filter(role)
    {
        println!("{}", format_warning("Blank role filter ignored"));
    }

    let records = board.displayed();
    if records.is_empty() {
        println!("{}", format_warning("No resumes to show"));
        return Ok(());
    }

    print_table(records);
    Ok(())
}

async fn cmd_delete(config: &Config, id: &str) -> Result<()> {
    Validator::validate_identifier("resume id", id)?;
    let source = HttpResumeSource::new(&config.backend)?;

    match source.delete_resume(id).await {
        Ok(()) => {
            println!("{}", format_success(&format!("Deleted resume {}", id)));
            Ok(())
        }
        Err(e) => {
            println!("{}", format_error(&format!("Delete failed: {}", e)));
            Err(e.into())
        }
    }
}

async fn cmd_view(config: &Config, id: &str, output: &Path) -> Result<()> {
    Validator::validate_identifier("resume id", id)?;
    let source = HttpResumeSource::new(&config.backend)?;

    let bytes = source
        .download_file(id)
        .await
        .context("Failed to download resume file")?;
    tokio::fs::write(output, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{}",
        format_success(&format!("Saved {} bytes to {}", bytes.len(), output.display()))
    );
    Ok(())
}

async fn cmd_export(
    config: &Config,
    user: Option<&str>,
    role: Option<&str>,
    input: Option<&Path>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let mut board = load_board(config, user, input).await?;
    let applied = role.is_some_and(|role| board.filter(role));

    let output_dir = output.unwrap_or_else(|| config.export.output_dir.clone());
    let exporter = JsonExporter::new(output_dir, pretty || config.export.pretty)?;
    let manifest = exporter.export(board.displayed(), role.filter(|_| applied))?;

    println!(
        "{}",
        format_success(&format!(
            "Exported {} resumes to {}",
            manifest.total_records,
            exporter.output_dir().display()
        ))
    );
    Ok(())
}

async fn load_board(
    config: &Config,
    user: Option<&str>,
    input: Option<&Path>,
) -> Result<ResumeBoard> {
    let builder = RecordBuilder::new(CandidateExtractor::new(config.extraction.clone()));
    let mut board = ResumeBoard::new(builder);

    if let Some(path) = input {
        let raw = Validator::read_text_file(path).context("Failed to read saved listing")?;
        let body = serde_json::from_str(&raw).context("Saved listing is not valid JSON")?;
        let ticket = board.begin_reload();
        board.complete_reload(ticket, Ok(parse_listing(body)));
    } else {
        let user = user.unwrap_or_default();
        Validator::validate_identifier("user id", user)?;
        let source = HttpResumeSource::new(&config.backend)?;
        board.reload(&source, user).await;
    }

    if let Some(message) = board.error() {
        bail!("{}", message);
    }

    Ok(board)
}

fn print_table(records: &[Arc<ResumeRecord>]) {
    println!(
        "{:>4}  {:<24} {:<18} {:<28} {:<24} {:>6} {:>7}  {}",
        "#", "Candidate", "Phone", "Email", "Job Role", "ATS", "Match %", "Rating"
    );

    for (idx, record) in records.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:<18} {:<28} {:<24} {:>6} {:>7}  {}",
            idx + 1,
            record.display_name(),
            record.candidate_phone.or("-"),
            record.candidate_email.or("-"),
            record.job_role.or("-"),
            resreview::models::format_score(record.ats_score),
            resreview::models::format_score(record.match_percentage),
            record.display_rating()
        );
    }
}

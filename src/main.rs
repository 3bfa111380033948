use quasar::adapters::outbound::console::StderrProgressReporter;
use quasar::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use quasar::application::dto::ReportRequest;
use quasar::application::factories::{FormatterFactory, FormatterType};
use quasar::application::use_cases::GenerateReportUseCase;
use quasar::assistant::{chunk_delay, chunk_response, AssistantInteraction};
use quasar::cli::{Args, OutputFormat};
use quasar::config::{discover_config, load_config_from_path, ConfigFile};
use quasar::inventory::domain::DataMode;
use quasar::inventory::template::sample_template;
use quasar::ports::outbound::OutputPresenter;
use quasar::shared::error::{ExitCode, QuasarError};
use quasar::shared::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::process;
use std::str::FromStr;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config: an explicit path must exist; the default location is
    // optional.
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(std::path::Path::new("."))?,
    };
    let config = config.unwrap_or_default();

    // Template mode: write the sample CSV and exit
    if let Some(template_path) = args.template {
        let writer = FileSystemWriter::new(template_path.clone());
        writer.present(sample_template())?;
        eprintln!("✅ Sample template written to: {}", template_path.display());
        return Ok(());
    }

    // Assistant mode: answer a question instead of generating a report
    if let Some(question) = args.ask {
        return run_assistant(
            &question,
            args.verbosity,
            args.tone,
            args.save_response,
            args.seed.or(config.seed),
        );
    }

    // Report mode. Flags override config values; defaults apply last.
    let format = resolve_format(args.format, &config)?;
    let mode = resolve_mode(args.mode, &config)?;
    let seed = args.seed.or(config.seed);

    // Create adapters (Dependency Injection)
    let dataset_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateReportUseCase::new(dataset_reader, progress_reporter);

    // Create request
    let request = ReportRequest::new(args.data, mode, args.as_of, seed);

    // Execute use case
    let response = use_case.execute(request)?;

    // Convert CLI format to application layer format type
    let formatter_type = match format {
        OutputFormat::Json => FormatterType::Json,
        OutputFormat::Markdown => FormatterType::Markdown,
    };

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(formatter_type));

    // Create formatter using factory
    let formatter = FormatterFactory::create(formatter_type);
    let formatted_output = formatter.format(&response.model)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(output_path))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Streams the canned assistant response to stdout chunk by chunk, then
/// optionally saves the interaction as JSON.
fn run_assistant(
    question: &str,
    verbosity: quasar::assistant::Verbosity,
    tone: quasar::assistant::Tone,
    save_dir: Option<std::path::PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let interaction =
        AssistantInteraction::new(question.to_string(), verbosity, tone, Utc::now());

    let chunks = chunk_response(&interaction.response, verbosity);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            write!(handle, " ").ok();
        }
        write!(handle, "{}", chunk).ok();
        handle.flush().ok();
        if i + 1 < chunks.len() {
            std::thread::sleep(chunk_delay(&mut rng));
        }
    }
    writeln!(handle).ok();

    if let Some(dir) = save_dir {
        let path = dir.join(interaction.export_filename());
        let json = serde_json::to_string_pretty(&interaction).map_err(|e| {
            QuasarError::OutputGenerationError {
                format: "JSON".to_string(),
                details: e.to_string(),
            }
        })?;
        let writer = FileSystemWriter::new(path.clone());
        writer.present(&json)?;
        eprintln!("✅ Response saved to: {}", path.display());
    }

    Ok(())
}

fn resolve_format(flag: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match &config.format {
        Some(value) => OutputFormat::from_str(value)
            .map_err(|details| QuasarError::InvalidConfig { details }.into()),
        None => Ok(OutputFormat::Json),
    }
}

fn resolve_mode(flag: Option<DataMode>, config: &ConfigFile) -> Result<DataMode> {
    if let Some(mode) = flag {
        return Ok(mode);
    }
    match &config.mode {
        Some(value) => DataMode::from_str(value)
            .map_err(|details| QuasarError::InvalidConfig { details }.into()),
        None => Ok(DataMode::Combined),
    }
}

use clap::{Parser, Subcommand};
use semantic_highlight::analysis::highlight::ExcludeClassification;
use semantic_highlight::config::{self, HighlightSettings};
use semantic_highlight::events::EventType;
use semantic_highlight::{
    HighlightRequest, HighlightResult, HighlightService, StaticClassifications,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Build editor highlight spans from a front-end classification forest
#[derive(Parser)]
#[command(name = "semantic-highlight")]
#[command(version)]
#[command(about = "Build editor highlight spans from a front-end classification forest")]
struct Cli {
    /// Settings file (default: the user config file, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print highlight spans for a source file as JSON
    Highlight {
        /// The source file to highlight
        file: PathBuf,

        /// JSON file holding the classification forest for the source file
        #[arg(long)]
        classifications: PathBuf,

        /// Restrict output to these 0-based lines
        #[arg(long, value_delimiter = ',')]
        lines: Vec<u32>,

        /// Classification groups to leave out
        #[arg(long, value_delimiter = ',', value_parser = parse_exclusion)]
        exclude: Vec<ExcludeClassification>,

        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,
    },
    /// List the lifecycle event names
    Events,
    /// Print the user config path and the default settings
    Config,
}

fn parse_exclusion(value: &str) -> Result<ExcludeClassification, String> {
    match value.to_ascii_lowercase().as_str() {
        "keyword" => Ok(ExcludeClassification::Keyword),
        "punctuation" => Ok(ExcludeClassification::Punctuation),
        "operator" => Ok(ExcludeClassification::Operator),
        "identifier" => Ok(ExcludeClassification::Identifier),
        "name" => Ok(ExcludeClassification::Name),
        _ => Err(format!(
            "unknown classification '{}' (expected keyword, punctuation, operator, identifier or name)",
            value
        )),
    }
}

fn load_settings(path: Option<&Path>) -> HighlightResult<HighlightSettings> {
    match path {
        Some(path) => HighlightSettings::load(path),
        None => Ok(config::load_user_config()?.unwrap_or_default()),
    }
}

fn run_highlight(
    settings: HighlightSettings,
    file: &Path,
    classifications: &Path,
    lines: Vec<u32>,
    exclude: Vec<ExcludeClassification>,
    pretty: bool,
) -> HighlightResult<()> {
    let file_name = file.display().to_string();
    let text = std::fs::read_to_string(file)?;

    let provider = StaticClassifications::new();
    provider.insert_json(file_name.clone(), &std::fs::read_to_string(classifications)?)?;

    let service = HighlightService::with_settings(Arc::new(provider), settings);
    service.open_document(file_name.clone(), text, None);

    let mut request = HighlightRequest::new(file_name);
    if !lines.is_empty() {
        request = request.with_lines(lines);
    }
    if !exclude.is_empty() {
        request = request.excluding(exclude);
    }

    let response = service.highlight(&request)?;
    let json = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Highlight {
            file,
            classifications,
            lines,
            exclude,
            pretty,
        } => load_settings(cli.config.as_deref()).and_then(|settings| {
            run_highlight(settings, &file, &classifications, lines, exclude, pretty)
        }),
        Commands::Events => {
            for event in EventType::all() {
                println!("{}", event);
            }
            Ok(())
        }
        Commands::Config => {
            match config::user_config_path() {
                Some(path) => eprintln!("User config: {}", path.display()),
                None => eprintln!("User config: <no config directory>"),
            }
            print!("{}", config::default_settings_toml());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

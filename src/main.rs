use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use essay_grader::error::GradeError;
use essay_grader::grading;
use essay_grader::lexicon::FileLexicon;
use essay_grader::oracle::{HttpGrammarOracle, HttpSentimentOracle};
use essay_grader::params::{self, GradingParameters, ParameterStore};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade an essay (default if no subcommand)
    Grade {
        /// Path to the essay text file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Essay category to grade against (short, medium, long, or a
        /// stored custom category)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// One-off grading parameters YAML file; overrides the stored
        /// category configuration for this call only
        #[arg(long)]
        params: Option<PathBuf>,

        /// Emit the result as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Store grading parameters for a category
    SetParams {
        /// Category name to write (existing entries are overwritten)
        #[arg(long)]
        category: String,

        #[arg(long)]
        min_words: u32,

        #[arg(long)]
        max_words: u32,

        #[arg(long)]
        grammar_weight: f64,

        #[arg(long)]
        vocabulary_weight: f64,

        #[arg(long)]
        creativity_weight: f64,
    },
}

#[derive(Parser, Debug)]
#[command(name = "essay-grader")]
#[command(about = "Essay grading CLI: weighted scoring over grammar, vocabulary and creativity", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/essay-grader/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Grade {
        file: None,
        category: None,
        params: None,
        json: false,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match essay_grader::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    match command {
        Commands::Grade {
            file,
            category,
            params,
            json,
        } => {
            run_grade(&config, file, category, params, json, cli.verbose).await;
        }
        Commands::SetParams {
            category,
            min_words,
            max_words,
            grammar_weight,
            vocabulary_weight,
            creativity_weight,
        } => {
            let new_params = GradingParameters {
                category_name: category,
                min_word_count: min_words,
                max_word_count: max_words,
                grammar_weight,
                vocabulary_weight,
                creativity_weight,
            };
            run_set_params(new_params);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

async fn run_grade(
    config: &essay_grader::config::Config,
    file: Option<PathBuf>,
    category: Option<String>,
    params_override: Option<PathBuf>,
    json: bool,
    verbose: bool,
) {
    // Seed the parameter store: built-ins, then config categories, then
    // entries stored by set-params (last writer wins)
    let store = ParameterStore::with_builtins();
    for seeded in &config.categories {
        store.update(seeded.clone());
    }
    let stored = match params::load_parameters(&params::get_parameters_path()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Parameter store error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    for entry in stored.categories.into_values() {
        store.update(entry.params);
    }

    // Resolve effective parameters: one-off override file beats the store
    let effective_params = match params_override {
        Some(path) => match load_params_override(&path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Parameter override error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
        None => store.resolve(category.as_deref()),
    };

    if let Err(errors) = params::validate_parameters(&effective_params) {
        eprintln!("Grading parameter errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        eprintln!(
            "Grading against category '{}' ({}-{} words, weights {}/{}/{})",
            effective_params.category_name,
            effective_params.min_word_count,
            effective_params.max_word_count,
            effective_params.grammar_weight,
            effective_params.vocabulary_weight,
            effective_params.creativity_weight
        );
    }

    // Read the essay
    let essay = match read_essay(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Essay input error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    // Load the lexical database
    let lexicon_path = config
        .lexicon_path
        .clone()
        .unwrap_or_else(essay_grader::config::get_lexicon_path);
    let lexicon = match FileLexicon::load(&lexicon_path) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Lexicon error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if verbose && lexicon.is_empty() {
        eprintln!(
            "Lexicon at {} is empty; complexity and metaphor signals will read as zero",
            lexicon_path.display()
        );
    }

    let grammar_oracle = HttpGrammarOracle::new(config.grammar_api.clone());
    let sentiment_oracle = HttpSentimentOracle::new(config.sentiment_api.clone());

    let (pair, result) = match grading::grade(
        &essay,
        &effective_params,
        &grammar_oracle,
        &sentiment_oracle,
        &lexicon,
    )
    .await
    {
        Ok(graded) => graded,
        Err(e @ GradeError::EmptyInput) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_INPUT);
        }
        Err(e @ GradeError::Oracle { .. }) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    } else {
        let use_colors = essay_grader::output::should_use_colors();
        println!("{}", essay_grader::output::format_result(&result, &pair, use_colors));
    }
}

fn run_set_params(new_params: GradingParameters) {
    if let Err(errors) = params::validate_parameters(&new_params) {
        eprintln!("Grading parameter errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let path = params::get_parameters_path();
    let mut stored = match params::load_parameters(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Parameter store error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let category = new_params.category_name.clone();
    stored.record(new_params);

    if let Err(e) = params::save_parameters(&path, &stored) {
        eprintln!("Failed to save parameters: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    println!("Grading parameters for {} essays updated successfully", category);
}

fn read_essay(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read essay from {}: {}", path.display(), e)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| anyhow::anyhow!("Failed to read essay from stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

/// Parse a one-off GradingParameters override from a YAML file.
fn load_params_override(path: &PathBuf) -> anyhow::Result<GradingParameters> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!("Failed to read parameters from {}: {}", path.display(), e)
    })?;
    serde_saphyr::from_str(&content).map_err(|e| {
        anyhow::anyhow!("Failed to parse parameters YAML in {}: {}", path.display(), e)
    })
}

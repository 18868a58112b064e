use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::*;
use rosmodel_cli::{commands, config};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rosmodel")]
#[command(about = "rosmodel - Generate model files from running robotics nodes")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase output verbosity (show debug messages)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Suppress informational output
    #[arg(short = 'Q', long = "quiet-all", global = true)]
    quiet_all: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump information about a running node into a model file
    Node {
        /// Node name to request information
        node_name: String,

        /// Display hidden topics, services, and actions as well
        #[arg(long = "include-hidden")]
        include_hidden: bool,

        /// The output file for the generated model
        #[arg(short = 'o', long = "output")]
        output: PathBuf,

        /// Directory containing node_model.hbs (default: built-in template)
        #[arg(long = "templates")]
        templates: Option<PathBuf>,

        /// Graph directory to read node presence files from
        #[arg(long = "graph-dir")]
        graph_dir: Option<PathBuf>,
    },

    /// List nodes currently present in the graph
    List {
        /// Include hidden nodes as well
        #[arg(long = "include-hidden")]
        include_hidden: bool,

        /// Graph directory to read node presence files from
        #[arg(long = "graph-dir")]
        graph_dir: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize structured logging based on verbosity flags
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet_all {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    log::debug!("rosmodel v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_command(cli.command) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_command(command: Commands) -> rosmodel_core::Result<()> {
    match command {
        Commands::Node {
            node_name,
            include_hidden,
            output,
            templates,
            graph_dir,
        } => {
            let graph_dir = graph_dir.unwrap_or_else(config::graph_dir);
            let templates = templates.or_else(config::template_dir);
            commands::node::run_node(
                &node_name,
                include_hidden,
                &output,
                templates.as_deref(),
                &graph_dir,
            )
        }

        Commands::List {
            include_hidden,
            graph_dir,
        } => {
            let graph_dir = graph_dir.unwrap_or_else(config::graph_dir);
            commands::list::run_list(include_hidden, &graph_dir)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "rosmodel", &mut io::stdout());
            Ok(())
        }
    }
}

use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "companion", version, about = "Student Companion CLI")]
struct Cli {
    /// Start from an empty session instead of the demo records
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Achievement log
    Achievement {
        #[command(subcommand)]
        action: commands::achievement::AchievementAction,
    },
    /// Productivity suggestions for the current session
    Suggest {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Send a chat message and print the transcript
    Chat {
        /// Message text
        message: String,
    },
    /// Interactive session (state lives until exit)
    Session,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action, cli.empty),
        Commands::Achievement { action } => commands::achievement::run(action, cli.empty),
        Commands::Suggest { json } => commands::suggest::run(json, cli.empty),
        Commands::Chat { message } => commands::chat::run(&message, cli.empty),
        Commands::Session => commands::session::run(cli.empty),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "companion",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

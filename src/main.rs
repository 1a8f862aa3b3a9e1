use clap::Parser;
use color_eyre::Result;
use tagfield::{
    Config, Profile,
    cli::{Cli, Commands},
};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    // Load configuration with the determined profile
    // Note: --config option is parsed but not yet used to override config path
    let config = Config::load_with_profile(profile)?;

    // Dispatch to appropriate command handler; no subcommand launches the TUI
    match cli.command.unwrap_or(Commands::Tui { seed: None }) {
        Commands::Tui { seed } => {
            let app = tagfield::tui::App::new(config, seed.as_deref());
            // The accepted value goes to stdout so a surrounding form/script
            // can pick it up; a cancelled session prints nothing.
            if let Some(value) = tagfield::tui::run_event_loop(app)? {
                println!("{}", value);
            }
        }
        Commands::Join { labels } => {
            tagfield::cli::handle_join(&config.field_name, labels);
        }
        Commands::Split { value } => {
            tagfield::cli::handle_split(&value);
        }
    }

    Ok(())
}

//! Entry point: parse CLI, open the database and dispatch to command handlers.

use clap::Parser;
use netball_stats::{
    cli::{Commands, NetballCli},
    commands::{
        entities::{handle_division, handle_player, handle_team},
        handle_init,
        reports::{handle_leaderboard, handle_player_stats, handle_standings},
        resolve_db_path,
        schedule::{handle_fixtures, handle_match, handle_result},
        transfer::{handle_export, handle_import},
    },
    storage::TournamentDatabase,
    Result,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "netball_stats=debug".into()
        } else {
            "netball_stats=warn".into()
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(app: NetballCli) -> Result<()> {
    let path = resolve_db_path(app.db)?;
    debug!(path = %path.display(), "using database");
    let mut db = TournamentDatabase::open(&path)?;

    match app.command {
        Commands::Init { sample, reset } => handle_init(&mut db, sample, reset)?,
        Commands::Division { cmd } => handle_division(&mut db, cmd)?,
        Commands::Team { cmd } => handle_team(&mut db, cmd)?,
        Commands::Player { cmd } => handle_player(&mut db, cmd)?,
        Commands::Fixtures { cmd } => handle_fixtures(&mut db, cmd)?,
        Commands::Match { cmd } => handle_match(&mut db, cmd)?,
        Commands::Result { cmd } => handle_result(&mut db, cmd)?,
        Commands::Standings { division, json } => handle_standings(&db, division, json)?,
        Commands::PlayerStats { id, scope, json } => handle_player_stats(&db, id, &scope, json)?,
        Commands::Leaderboard {
            scope,
            sort,
            limit,
            json,
        } => handle_leaderboard(&db, &scope, sort, limit, json)?,
        Commands::Import { file } => handle_import(&mut db, &file)?,
        Commands::Export { dir } => handle_export(&db, &dir)?,
    }

    db.close()?;
    Ok(())
}

/// Run the CLI.
fn main() {
    let app = NetballCli::parse();
    init_logging(app.verbose);

    if let Err(err) = run(app) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

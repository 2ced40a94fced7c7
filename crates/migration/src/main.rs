use clap::{Parser, Subcommand};
use migration::{DEFAULT_DATABASE_URL, Migrator};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

#[derive(Debug, Parser)]
#[command(name = "migration", about = "Apply or inspect the expense ledger schema")]
struct Cli {
    /// Database connection string.
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Apply pending migrations (the default).
    Up {
        /// Apply at most this many.
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Revert the most recent migrations.
    Down {
        #[arg(short, long, default_value_t = 1)]
        steps: u32,
    },
    /// Drop every table and reapply all migrations.
    Fresh,
    /// Log applied and pending migrations.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    // Migrator reports progress through `tracing`.
    tracing_subscriber::fmt()
        .with_env_filter("sea_orm_migration=info,migration=info")
        .init();

    let db = Database::connect(&cli.database_url).await?;

    match cli.command.unwrap_or(Command::Up { steps: None }) {
        Command::Up { steps } => Migrator::up(&db, steps).await?,
        Command::Down { steps } => Migrator::down(&db, Some(steps)).await?,
        Command::Fresh => Migrator::fresh(&db).await?,
        Command::Status => Migrator::status(&db).await?,
    }

    db.close().await?;
    Ok(())
}

use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, MigrationManager},
    },
    libs::messages::Message,
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Current schema version and whether an update is pending
    Status,
    /// Applied migrations
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = Db::new_without_migrations()?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            msg_print!(Message::DatabaseVersion(get_db_version(&conn)?));
            manager.report(&conn)?;
        }
        MigrationsCommand::History => {
            let history = manager.get_migration_history(&conn)?;
            if history.is_empty() {
                msg_info!(Message::NoMigrationsApplied);
                return Ok(());
            }

            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                println!("  v{}: {} (applied: {})", version, name, applied_at);
            }
        }
    }

    Ok(())
}

pub mod export;
pub mod init;
pub mod migrations;
pub mod pass;
pub mod report;
pub mod settings;
pub mod status;
pub mod student;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show or change the duration thresholds")]
    Settings(settings::SettingsArgs),
    #[command(about = "Manage the cadet roster", arg_required_else_help = true)]
    Student(student::StudentArgs),
    #[command(about = "Send cadets out, bring them back and edit their space walks", arg_required_else_help = true)]
    Pass(pass::PassArgs),
    #[command(about = "Show the cadets currently on a space walk")]
    Status(status::StatusArgs),
    #[command(about = "Prepare a report", arg_required_else_help = true)]
    Report(report::ReportArgs),
    #[command(about = "Export a report to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Inspect the database schema version", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Student(args) => student::cmd(args),
            Commands::Pass(args) => pass::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

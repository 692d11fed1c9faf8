use crate::{
    db::{passes::Passes, students::Students},
    libs::{
        config::Config,
        duration::{parse_instant, CalendarDuration, Instant},
        error::HallPassError,
        formatter::{format_calendar_duration, kind_label},
        messages::Message,
        stats::PassStats,
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::{Args, Subcommand, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct PassArgs {
    #[command(subcommand)]
    command: PassCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PassKind {
    Personal,
    Official,
}

impl PassKind {
    pub fn is_personal(&self) -> bool {
        matches!(self, PassKind::Personal)
    }
}

#[derive(Debug, Subcommand)]
enum PassCommand {
    /// Send a cadet out on a space walk
    Out {
        student_id: i64,
        /// Official business instead of a recreational walk
        #[arg(short, long)]
        official: bool,
        #[arg(short, long, default_value = "")]
        reason: String,
    },
    /// Bring a cadet back from their space walk
    Return { student_id: i64 },
    /// Correct a recorded space walk
    Edit {
        pass_id: i64,
        /// New start, RFC 3339 or `YYYY-MM-DD HH:MM[:SS]` in UTC
        #[arg(short, long, value_parser = parse_instant)]
        start: Option<Instant>,
        /// New end, same formats as --start
        #[arg(short, long, value_parser = parse_instant)]
        end: Option<Instant>,
        /// Set the end relative to the start, e.g. `4m5s` or `04:05`
        #[arg(short, long)]
        duration: Option<CalendarDuration>,
        #[arg(short, long)]
        reason: Option<String>,
        #[arg(short, long, value_enum)]
        kind: Option<PassKind>,
    },
    /// Remove a space walk
    Delete {
        pass_id: i64,
        #[arg(short, long)]
        yes: bool,
    },
    /// Show a cadet's space walks
    Log {
        student_id: i64,
        /// List every walk instead of the summary
        #[arg(short, long)]
        expand: bool,
    },
}

pub fn cmd(args: PassArgs) -> Result<()> {
    let mut passes = Passes::new()?;
    let now = Utc::now();

    match args.command {
        PassCommand::Out {
            student_id,
            official,
            reason,
        } => {
            let student = Students::new()?
                .get_by_id(student_id)?
                .ok_or_else(|| msg_error_anyhow!(Message::StudentNotFound(student_id)))?;

            let pass = passes.open(student_id, !official, &reason, now)?;
            msg_success!(Message::PassStarted(student.full_name(), kind_label(pass.kind()).to_string()));
        }
        PassCommand::Return { student_id } => {
            let student = Students::new()?
                .get_by_id(student_id)?
                .ok_or_else(|| msg_error_anyhow!(Message::StudentNotFound(student_id)))?;

            let pass = passes.close(student_id, now)?;
            let duration = format_calendar_duration(&pass.elapsed(now));
            msg_success!(Message::PassEnded(student.full_name(), duration));
        }
        PassCommand::Edit {
            pass_id,
            start,
            end,
            duration,
            reason,
            kind,
        } => {
            if start.is_none() && end.is_none() && duration.is_none() && reason.is_none() && kind.is_none() {
                msg_bail_anyhow!(Message::PassEditNeedsChange);
            }
            if end.is_some() && duration.is_some() {
                msg_bail_anyhow!(Message::PassEndAndDurationConflict);
            }

            let mut pass = passes.get_by_id(pass_id)?.ok_or_else(|| msg_error_anyhow!(Message::PassNotFound(pass_id)))?;
            if let Some(start) = start {
                pass.start_at = start;
            }
            if let Some(end) = end {
                pass.end_at = Some(end);
            }
            if let Some(duration) = duration {
                let end_at = duration
                    .shift(pass.start_at)
                    .ok_or_else(|| HallPassError::InvalidInput(format!("duration {} is out of range", format_calendar_duration(&duration))))?;
                pass.end_at = Some(end_at);
            }
            if let Some(reason) = reason {
                pass.reason = reason.trim().to_string();
            }
            if let Some(kind) = kind {
                pass.is_personal = kind.is_personal();
            }

            passes.update(&pass)?;
            msg_success!(Message::PassUpdated(pass_id));
        }
        PassCommand::Delete { pass_id, yes } => {
            if passes.get_by_id(pass_id)?.is_none() {
                msg_bail_anyhow!(Message::PassNotFound(pass_id));
            }
            if !yes
                && !Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeletePass(pass_id).to_string())
                    .default(false)
                    .interact()?
            {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            passes.delete(pass_id)?;
            msg_success!(Message::PassDeleted(pass_id));
        }
        PassCommand::Log { student_id, expand } => {
            let student = Students::new()?
                .get_by_id(student_id)?
                .ok_or_else(|| msg_error_anyhow!(Message::StudentNotFound(student_id)))?;
            let history = passes.fetch_for_student(student_id)?;

            if history.is_empty() {
                msg_info!(Message::NoPasses(student.full_name()));
                return Ok(());
            }

            let expand = expand || Config::read()?.settings.expand_pass_log;
            let stats = PassStats::aggregate(&history, now);

            msg_print!(Message::PassLogHeader(student.full_name()), true);
            View::pass_log(&history, &stats, expand, now)?;
        }
    }

    Ok(())
}

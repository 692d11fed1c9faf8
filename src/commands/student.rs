use crate::{
    db::students::Students,
    libs::{config::Config, messages::Message, student::Student, view::View},
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct StudentArgs {
    #[command(subcommand)]
    command: StudentCommand,
}

#[derive(Debug, Subcommand)]
enum StudentCommand {
    /// Enroll a cadet
    Add {
        first_name: String,
        last_name: String,
        /// Class period, one of the configured periods
        #[arg(short, long)]
        period: String,
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// List the roster
    List,
    /// Change a cadet's details
    Edit {
        id: i64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(short, long)]
        period: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Remove a cadet together with their space walks
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove every cadet and space walk
    DeleteAll {
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: StudentArgs) -> Result<()> {
    let mut students = Students::new()?;

    match args.command {
        StudentCommand::Add {
            first_name,
            last_name,
            period,
            notes,
        } => {
            let student = Student::new(&first_name, &last_name, &period, &notes);
            Config::read()?.check_period(&student.period)?;

            let id = students.insert(&student)?;
            msg_success!(Message::StudentCreated(student.full_name(), id));
        }
        StudentCommand::List => {
            let roster = students.fetch()?;
            if roster.is_empty() {
                msg_info!(Message::NoStudents);
                return Ok(());
            }
            msg_print!(Message::StudentsHeader, true);
            View::students(&roster)?;
        }
        StudentCommand::Edit {
            id,
            first_name,
            last_name,
            period,
            notes,
        } => {
            if first_name.is_none() && last_name.is_none() && period.is_none() && notes.is_none() {
                msg_bail_anyhow!(Message::NoChangesProvided);
            }

            let mut student = students.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::StudentNotFound(id)))?;
            if let Some(first_name) = first_name {
                student.first_name = first_name.trim().to_string();
            }
            if let Some(last_name) = last_name {
                student.last_name = last_name.trim().to_string();
            }
            if let Some(period) = period {
                Config::read()?.check_period(period.trim())?;
                student.period = period.trim().to_string();
            }
            if let Some(notes) = notes {
                student.notes = notes;
            }

            students.update(&student)?;
            msg_success!(Message::StudentUpdated(student.full_name()));
        }
        StudentCommand::Delete { id, yes } => {
            let student = students.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::StudentNotFound(id)))?;
            if !yes && !confirm(Message::ConfirmDeleteStudent(student.full_name()))? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            students.delete(id)?;
            msg_success!(Message::StudentDeleted(student.full_name()));
        }
        StudentCommand::DeleteAll { yes } => {
            let count = students.fetch()?.len();
            if count == 0 {
                msg_info!(Message::NoStudents);
                return Ok(());
            }
            if !yes && !confirm(Message::ConfirmDeleteAllStudents(count))? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            let deleted = students.delete_all()?;
            msg_success!(Message::StudentsDeletedCount(deleted));
        }
    }

    Ok(())
}

fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

use crate::{
    db::{passes::Passes, students::Students},
    libs::{
        messages::Message,
        report::{cadet_rows, walk_rows},
        sort::{sort_cadets, sort_walks, SortDirection, SortField, WalkSortField},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Utc;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    command: ReportCommand,
}

#[derive(Debug, Subcommand)]
enum ReportCommand {
    /// Walk counts and durations per cadet
    Cadets {
        /// cadet, period, recCount, officialCount, totalCount, recDuration, officialDuration or totalDuration
        #[arg(short, long, default_value = "cadet")]
        sort: SortField,
        #[arg(short, long)]
        desc: bool,
    },
    /// Every space walk
    Walks {
        /// cadet, period or duration
        #[arg(short, long, default_value = "cadet")]
        sort: WalkSortField,
        #[arg(short, long)]
        desc: bool,
    },
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let now = Utc::now();
    let students = Students::new()?.fetch()?;
    let passes = Passes::new()?.fetch_all()?;

    match args.command {
        ReportCommand::Cadets { sort, desc } => {
            if students.is_empty() {
                msg_info!(Message::NoStudents);
                return Ok(());
            }

            let mut rows = cadet_rows(&students, &passes, now);
            sort_cadets(&mut rows, sort, SortDirection::from_desc(desc));

            msg_print!(Message::CadetReportHeader, true);
            View::cadets(&rows)?;
        }
        ReportCommand::Walks { sort, desc } => {
            let mut rows = walk_rows(&students, &passes, now);
            if rows.is_empty() {
                msg_info!(Message::NoReportData);
                return Ok(());
            }

            sort_walks(&mut rows, sort, SortDirection::from_desc(desc));

            msg_print!(Message::WalkReportHeader, true);
            View::walks(&rows, now)?;
        }
    }

    Ok(())
}

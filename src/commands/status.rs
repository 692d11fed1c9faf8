use crate::{
    db::{passes::Passes, students::Students},
    libs::{config::Config, formatter::format_time, messages::Message, report::open_walks, status::OxygenLevel, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{Local, Utc};
use clap::Args;
use std::{thread, time::Duration};

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Keep refreshing until every cadet is back
    #[arg(short, long)]
    watch: bool,

    /// Seconds between refreshes in watch mode
    #[arg(short, long, default_value_t = 1)]
    interval: u64,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let config = Config::read()?;
    let mut students = Students::new()?;
    let mut passes = Passes::new()?;

    loop {
        let now = Utc::now();
        let out = open_walks(&students.fetch()?, &passes.fetch_open()?);

        if args.watch {
            // Clear the terminal and move the cursor home.
            print!("\x1B[2J\x1B[H");
        }
        msg_print!(Message::DashboardHeader(format_time(Some(now.with_timezone(&Local)))), true);

        if out.is_empty() {
            msg_info!(Message::NoCadetsOut);
            return Ok(());
        }

        msg_print!(Message::CadetsOut(out.len()));
        View::dashboard(&out, &config, now)?;

        for (student, pass) in &out {
            if OxygenLevel::measure(pass.elapsed_delta(now).num_seconds(), &config.settings).is_depleted() {
                msg_warning!(Message::OxygenDepleted(student.full_name()));
            }
        }

        if !args.watch {
            return Ok(());
        }
        thread::sleep(Duration::from_secs(args.interval.max(1)));
    }
}

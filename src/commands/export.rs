use crate::{
    db::{passes::Passes, students::Students},
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        report::{cadet_rows, walk_rows},
        sort::{sort_cadets, sort_walks, SortDirection, SortField, WalkSortField},
    },
    msg_info,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "cadets")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sort key, as accepted by the matching `report` subcommand
    #[arg(short, long, default_value = "cadet")]
    sort: String,

    #[arg(short, long)]
    desc: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let now = Utc::now();
    let students = Students::new()?.fetch()?;
    let passes = Passes::new()?.fetch_all()?;
    let direction = SortDirection::from_desc(args.desc);
    let exporter = Exporter::new(args.format, args.output);

    match args.data {
        ExportData::Cadets => {
            let field: SortField = args.sort.parse()?;
            let mut rows = cadet_rows(&students, &passes, now);
            if rows.is_empty() {
                msg_info!(Message::ExportNoData);
                return Ok(());
            }
            sort_cadets(&mut rows, field, direction);
            exporter.export_cadets(&rows)?;
        }
        ExportData::Walks => {
            let field: WalkSortField = args.sort.parse()?;
            let mut rows = walk_rows(&students, &passes, now);
            if rows.is_empty() {
                msg_info!(Message::ExportNoData);
                return Ok(());
            }
            sort_walks(&mut rows, field, direction);
            exporter.export_walks(&rows)?;
        }
    }

    Ok(())
}

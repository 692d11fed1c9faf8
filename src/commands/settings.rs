use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_bail_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Minutes after which a walk is flagged as a warning
    #[arg(short, long)]
    warning: Option<u32>,

    /// Minutes after which a walk is critical
    #[arg(short, long)]
    critical: Option<u32>,

    /// Expand the space walk log by default
    #[arg(short, long)]
    expand: Option<bool>,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut config = Config::read()?;

    if args.warning.is_none() && args.critical.is_none() && args.expand.is_none() {
        msg_print!(Message::SettingsHeader, true);
        return View::settings(&config);
    }

    let mut settings = config.settings;
    if let Some(warning) = args.warning {
        settings.warning = warning;
    }
    if let Some(critical) = args.critical {
        settings.critical = critical;
    }
    if let Some(expand) = args.expand {
        settings.expand_pass_log = expand;
    }

    if let Err(e) = settings.validate() {
        msg_bail_anyhow!(Message::SettingsRejected(e.to_string()));
    }

    config.settings = settings;
    config.save()?;

    msg_success!(Message::ConfigSaved);
    View::settings(&config)
}

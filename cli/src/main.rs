mod args;
mod commands;
mod global_settings;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use anyhow::Result;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let settings = GlobalSettings::new(&matches);
    settings.init_logger();

    let output = commands::run(&matches, &settings)?;
    print!("{}", output);

    Ok(())
}

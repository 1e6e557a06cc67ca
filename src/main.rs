use std::io::{self, Write};

use anyhow::{bail, Result};

use entity_showcase::config::{DEFAULT_ENTITY_NAME, DEFAULT_LOG_FILTER};
use entity_showcase::{report, Showcase};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    // Name from the first positional argument, `--json` anywhere.
    let mut json = false;
    let mut name = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if name.is_none() {
            name = Some(arg);
        } else {
            bail!("Unexpected argument: {arg}");
        }
    }
    let name = name.unwrap_or_else(|| DEFAULT_ENTITY_NAME.to_string());

    let showcase = Showcase::new(&name)?;
    log::debug!("Rendering showcase (json: {json})");

    if json {
        let rendered = serde_json::to_string_pretty(&report::showcase_report(&showcase))?;
        writeln!(io::stdout().lock(), "{rendered}")?;
    } else {
        showcase.display()?;
    }

    Ok(())
}

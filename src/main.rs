//! Entry point: prints the translation notice and exits.

use ru_pl_glossary::app::{
    self,
    AppError,
};
use ru_pl_glossary::config::Settings;
use ru_pl_glossary::logging;

fn main() -> Result<(), AppError> {
    let settings = Settings::default();
    logging::init(&settings)?;

    let _glossary = app::run(&settings, &mut std::io::stdout().lock())
        .inspect_err(|error| tracing::error!("{error}"))?;
    Ok(())
}

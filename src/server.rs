use crate::config;
use crate::directory::Directory;
use crate::err::Error;
use crate::http::run_simple_server;
use crate::opt;
use crate::routes::{State, respond_to_request};
use crate::table::CommandTable;

pub async fn main(options: opt::Options) -> Result<(), Error> {
    let opt::Options {
        verbose: _,
        listen,
        config,
        base_url,
        icon,
    } = options;

    let config::Config {
        maintainers,
        commands,
    } = config::load(&config).await?;
    let table = CommandTable::build(commands)?.require_default()?;
    log::info!("Loaded {} terms", table.commands().len());

    let icon = match icon {
        Some(path) => match tokio::fs::read(&path).await {
            Ok(icon) => Some(icon),
            Err(e) => return Err(format!("Failed to read icon {}: {}", path.display(), e).into()),
        },
        None => None,
    };
    let directory = Directory::new(icon, maintainers, base_url)?;

    run_simple_server(&listen, State { table, directory }, respond_to_request).await?;

    Ok(())
}

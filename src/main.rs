mod body;
mod config;
mod directory;
mod err;
mod future;
mod http;
mod opt;
mod resolve;
mod routes;
mod server;
mod table;
mod target;
mod tcp;

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let options: opt::Options = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match options.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    server::main(options).await?;

    Ok(())
}

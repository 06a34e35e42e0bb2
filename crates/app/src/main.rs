//! Pokepedia - command-line front end over the list and detail view-models.

use anyhow::Context;
use pokepedia_app::config::AppConfig;
use pokepedia_app::runner::{self, Command, Services};
use pokepedia_domain::PokemonRef;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: pokepedia <command>

Commands:
  list [pages]              List Pokémon, one page per step
  detail <id|name>          Show one Pokémon
  search <query> [pages]    Filter the loaded list by name
  artwork <id>              Open the official artwork in a browser";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokepedia_app=info,pokepedia_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = parse_command(std::env::args().skip(1))?;
    let config = AppConfig::from_env().context("reading configuration")?;
    let services = Services::from_config(&config)
        .await
        .context("starting services")?;

    let mut stdout = std::io::stdout().lock();
    runner::run(&services, command, &mut stdout).await?;
    Ok(())
}

fn parse_command(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    match args.next().as_deref() {
        Some("list") => Ok(Command::List {
            pages: parse_pages(args.next())?,
        }),
        Some("detail") => match args.next() {
            Some(target) => Ok(Command::Detail(PokemonRef::parse(&target))),
            None => anyhow::bail!("detail needs an id or name\n\n{USAGE}"),
        },
        Some("search") => match args.next() {
            Some(query) => Ok(Command::Search {
                query,
                pages: parse_pages(args.next())?,
            }),
            None => anyhow::bail!("search needs a query\n\n{USAGE}"),
        },
        Some("artwork") => {
            let id = args
                .next()
                .context("artwork needs an id")?
                .parse()
                .context("artwork id must be a number")?;
            Ok(Command::Artwork(id))
        }
        Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!("{USAGE}"),
    }
}

fn parse_pages(arg: Option<String>) -> anyhow::Result<u32> {
    match arg {
        Some(pages) => pages.parse().context("pages must be a number"),
        None => Ok(1),
    }
}

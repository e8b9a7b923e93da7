mod config;
mod scrape;
mod table;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job-providers to collect statistics from, defaults to all of them
    #[clap(long, value_enum)]
    site: Vec<Target>,

    /// Programming languages to search for
    #[clap(long)]
    language: Vec<String>,

    /// Abort when a provider reports more pages than this for one language
    #[clap(long)]
    max_pages: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    /// hh.ru
    Hh,
    /// superjob.ru
    Superjob,
}

async fn run(args: Cli) -> Result<(), config::Error> {
    let targets = if args.site.is_empty() {
        vec![Target::Superjob, Target::Hh]
    } else {
        args.site
    };
    let languages = if args.language.is_empty() {
        config::DEFAULT_LANGUAGES.map(String::from).to_vec()
    } else {
        args.language
    };
    let configs = config::resolve(&targets, args.max_pages, |name| std::env::var(name).ok())?;
    for config in configs {
        let table = scrape::scrape(config, &languages).await?;
        println!("{}", table);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_repeated_args() {
        let args = Cli::parse_from([
            "salary-stats",
            "--site",
            "hh",
            "--language",
            "Rust",
            "--language",
            "C++",
            "--max-pages",
            "20",
        ]);
        assert_eq!(args.site, vec![Target::Hh]);
        assert_eq!(args.language, vec!["Rust", "C++"]);
        assert_eq!(args.max_pages, Some(20));
    }
}

use clap::Parser;
use indexmap::IndexSet;
use lib::{
    countries::CountryIndex,
    error, info,
    settings::get_settings,
    telemetry::{init_tracing, LogKey},
};
use std::process::ExitCode;

/// Search the country dataset the way the picker's filter box does.
#[derive(Parser, Debug)]
#[command(name = "country_search")]
struct Args {
    /// Name or code prefix to filter by. Empty lists every country.
    #[arg(default_value = "")]
    query: String,
    /// Translation used for display names, overrides settings.
    #[arg(short, long)]
    translation: Option<String>,
    /// Print the change event for this code instead of filtering.
    #[arg(short, long)]
    code: Option<String>,
    /// Print the translations the dataset offers and exit.
    #[arg(long)]
    list_translations: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = get_settings();
    init_tracing("country-search", &settings.log_level, std::io::stderr);

    let index = match CountryIndex::from_settings(&settings) {
        Ok(index) => index,
        Err(e) => {
            error!(LogKey::CountrySearch, error = %e, "Could not load country dataset");
            return ExitCode::FAILURE;
        }
    };
    let translation = args.translation.as_deref().unwrap_or(&settings.translation);

    if args.list_translations {
        let translations: IndexSet<&str> = index
            .records()
            .iter()
            .flat_map(|record| record.translations())
            .collect();
        for translation in translations {
            println!("{}", translation);
        }
        return ExitCode::SUCCESS;
    }

    if let Some(code) = args.code {
        return match index.select_code(&code, translation) {
            Ok(selection) => match serde_json::to_string(&selection) {
                Ok(line) => {
                    println!("{}", line);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(LogKey::CountrySearch, error = %e, "Could not serialize selection");
                    ExitCode::FAILURE
                }
            },
            Err(e) => {
                error!(
                    LogKey::CountrySearch,
                    code = code.as_str(),
                    error = %e,
                    "Could not resolve selection"
                );
                ExitCode::FAILURE
            }
        };
    }

    let matches = index.filter_by_prefix(&args.query, translation);
    info!(
        LogKey::CountrySearch,
        query = args.query.as_str(),
        matches = matches.len(),
        "Search finished"
    );
    for record in matches {
        // Every record here came out of the index, so neither lookup can miss.
        let (Ok(code), Ok(name)) = (index.code_of(record), record.display_name(translation))
        else {
            continue;
        };
        println!("{}\t{}\t{}", code, name, record.flag());
    }
    ExitCode::SUCCESS
}

//! Command-line front end for country name lookups.
//!
//! Usage:
//!   country-translator countries
//!   country-translator languages <country-name>
//!   country-translator translate <country-name> <language-code>
//!   country-translator code <country-code>
//!   country-translator name <country-name>
//!   country-translator language <language-code-or-name>
//!
//! Optional environment variables:
//! - TRANSLATOR_BACKEND (json or static, defaults to json)
//! - TRANSLATOR_DATA_FILE (defaults to the bundled dataset)

use anyhow::{bail, Result};
use country_translator::config::Config;
use country_translator::translator::{build_translator, Translator};
use tracing::info;

const USAGE: &str = "Usage: country-translator <countries | languages COUNTRY | translate COUNTRY LANGUAGE | code CODE | name COUNTRY | language LANGUAGE>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Countries,
    Languages { country: String },
    Translate { country: String, language: String },
    Code { code: String },
    Name { country: String },
    Language { language: String },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let command = match args.as_slice() {
            ["countries"] => Command::Countries,
            ["languages", country] => Command::Languages {
                country: country.to_string(),
            },
            ["translate", country, language] => Command::Translate {
                country: country.to_string(),
                language: language.to_string(),
            },
            ["code", code] => Command::Code {
                code: code.to_string(),
            },
            ["name", country] => Command::Name {
                country: country.to_string(),
            },
            ["language", language] => Command::Language {
                language: language.to_string(),
            },
            _ => bail!("{}", USAGE),
        };
        Ok(command)
    }
}

/// Render the answer to `command` as lines for stdout.
fn run(translator: &dyn Translator, command: &Command) -> Vec<String> {
    match command {
        Command::Countries => translator.countries().into_iter().map(String::from).collect(),
        Command::Languages { country } => {
            let languages = translator.country_languages(country);
            if languages.is_empty() {
                return vec![format!("No languages available for '{}'", country)];
            }
            languages
                .into_iter()
                .map(|code| match translator.from_language_code(code) {
                    Some(name) => format!("{} ({})", code, name),
                    None => code.to_string(),
                })
                .collect()
        }
        Command::Translate { country, language } => {
            vec![translator
                .translate(country, language)
                .map(String::from)
                .unwrap_or_else(|| "Translation not found".to_string())]
        }
        Command::Code { code } => vec![translator
            .from_country_code(code)
            .map(String::from)
            .unwrap_or_else(|| format!("Unknown country code '{}'", code))],
        Command::Name { country } => vec![translator
            .from_country(country)
            .map(String::from)
            .unwrap_or_else(|| format!("Unknown country '{}'", country))],
        Command::Language { language } => {
            let resolved = translator
                .from_language_code(language)
                .or_else(|| translator.from_language(language));
            vec![resolved
                .map(String::from)
                .unwrap_or_else(|| format!("Unknown language '{}'", language))]
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only query results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("country_translator=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = Config::from_env()?;
    let translator = build_translator(&config)?;
    info!("Answering {:?}", command);

    for line in run(translator.as_ref(), &command) {
        println!("{}", line);
    }

    Ok(())
}

mod app;
mod error;
mod interactive;
mod script;

use std::fs::{self, File};

use clap::ArgMatches;
use log::LevelFilter;
use markup::{to_html, Document};
use search_select::{SearchSelects, SelectSource, Theme};
use simplelog::{Config, WriteLogger};

use crate::error::DemoError;

fn main() {
    // Log to a file; stdout is the demo's output
    match File::create("search-select-demo.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file: {}", e),
    }

    let matches = app::build_cli().get_matches();
    if let Err(e) = run(&matches) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), DemoError> {
    let sources = matches
        .get_many::<String>("sources")
        .ok_or(DemoError::NoSources)?
        .map(|path| -> Result<SelectSource, DemoError> {
            log::info!("Loading source {}", path);
            let json = fs::read_to_string(path)?;
            Ok(SelectSource::from_json(&json)?)
        })
        .collect::<Result<Vec<_>, DemoError>>()?;

    let theme = match matches.get_one::<String>("theme") {
        Some(path) => Some(Theme::from_json(&fs::read_to_string(path)?)?),
        None => None,
    };

    let mut document = Document::new();
    let mut selects = SearchSelects::new(sources, theme);
    selects.initialize(&mut document)?;

    let first = selects.widgets().first().cloned().ok_or(DemoError::NoSources)?;
    if let Some(script) = matches.get_one::<String>("keys") {
        script::replay(&first, script)?;
    }
    if matches.get_flag("interactive") {
        interactive::run(&first)?;
    }

    for widget in selects.widgets() {
        println!("{}", to_html(&widget.render_label()));
        println!("{}", widget.render_html());
        println!("{}", to_html(&widget.source().to_element()));
        println!("selected: {:?}", widget.source().selected_values());
        println!();
    }

    selects.teardown(&mut document);
    Ok(())
}

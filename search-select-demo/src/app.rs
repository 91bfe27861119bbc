use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("search-select-demo")
        .about("Drive a search-and-select widget from the terminal")
        .arg(
            Arg::new("sources")
                .help("JSON files describing the selection sources")
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .short('t')
                .help("JSON file with theme variables shared by every widget"),
        )
        .arg(
            Arg::new("keys")
                .long("keys")
                .short('k')
                .help("Whitespace separated key script replayed into the first widget (e.g. \"b a Down Enter\")"),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .short('i')
                .help("Edit the first widget live in the terminal")
                .action(ArgAction::SetTrue),
        )
}

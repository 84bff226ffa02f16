use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use showroom::{
    console::Console,
    showroom::{DEFAULT_DATA_FILE, Showroom, ShowroomConfig},
};

#[derive(Debug, Parser)]
#[clap(about = "Vehicle showroom inventory manager")]
struct CommandLine {
    /// Showroom name; prompted for when omitted.
    #[clap(long)]
    name: Option<String>,
    /// JSON file holding the inventory.
    #[clap(long = "data-file", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CommandLine::parse();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let name = match args.name {
        Some(name) => name,
        None => match console.prompt("Enter the name of the car showroom: ")? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let config = ShowroomConfig {
        name,
        data_file: args.data_file,
    };
    let mut showroom = Showroom::from_config(&config);
    if let Some(err) = showroom.load_warning() {
        writeln!(io::stdout(), "Warning: {err}. Starting with an empty inventory.")?;
    }

    console.run(&mut showroom)
}

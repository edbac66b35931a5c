use clap::{arg, Arg, ArgAction, ArgMatches};
use log::LevelFilter;

pub struct GlobalSettings {
    // Number of -v switches
    pub verbose: u8,

    // Inserted between points when listing the elements of a set
    pub separator: String,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Show more logs (repeat for more details)")
                .global(true),
            arg!(--separator [SEP] "Separator used when listing points")
                .default_value("\n")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            verbose: args.get_count("verbose"),
            separator: args
                .get_one::<String>("separator")
                .cloned()
                .unwrap_or_else(|| "\n".to_string()),
        }
    }

    /// The log level selected by the -v switches.  RUST_LOG, when set,
    /// takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level())
            .parse_default_env()
            .init();
    }
}

use crate::global_settings::GlobalSettings;
use clap::{value_parser, Arg, Command};
use procset::ProcSet;

/// Validate a set given on the command line
fn parse_set(text: &str) -> Result<ProcSet, procset::Error> {
    text.parse()
}

/// A single set, as a positional argument
fn set_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .value_name("SET")
        .help("Points and ranges, for instance \"11-45 88-100\"")
        .required(true)
        .value_parser(parse_set)
}

/// One or more sets, as positional arguments
fn sets_arg(min: usize) -> Arg {
    Arg::new("sets")
        .value_name("SET")
        .help("Points and ranges, for instance \"11-45 88-100\"")
        .required(true)
        .num_args(min..)
        .value_parser(parse_set)
}

pub(crate) fn build_cli() -> Command {
    Command::new("procset")
        .version("0.1")
        .about("Manipulate sets of processors")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("show")
                .about("Show the union of the sets and its properties")
                .arg(sets_arg(1)),
        )
        .subcommand(
            Command::new("union")
                .about("Points in any of the sets")
                .arg(sets_arg(2)),
        )
        .subcommand(
            Command::new("intersection")
                .about("Points in all of the sets")
                .arg(sets_arg(2)),
        )
        .subcommand(
            Command::new("difference")
                .about("Points of the first set not in any of the others")
                .arg(sets_arg(2)),
        )
        .subcommand(
            Command::new("symmetric-difference")
                .about("Fold the symmetric difference over the sets")
                .arg(sets_arg(2)),
        )
        .subcommand(
            Command::new("compare")
                .about("Compare two sets (equality, inclusion, disjointness)")
                .arg(set_arg("left"))
                .arg(set_arg("right")),
        )
        .subcommand(
            Command::new("contains")
                .about("Check whether points belong to a set")
                .arg(set_arg("set"))
                .arg(
                    Arg::new("points")
                        .value_name("POINT")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("nth")
                .about("Show the point at the given index (starting at 0)")
                .arg(set_arg("set"))
                .arg(
                    Arg::new("index")
                        .value_name("INDEX")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64)),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List all points of the set")
                .arg(set_arg("set")),
        )
        .subcommand(
            Command::new("intervals")
                .about("List the intervals of the set, one per line")
                .arg(set_arg("set")),
        )
        .subcommand(
            Command::new("demo").about("Run the operations on example sets"),
        )
        .subcommand(
            // Use    eval "$(procset completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build_cli() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_parse_sets() {
        let matches = build_cli()
            .try_get_matches_from(["procset", "union", "1-5", "", "7 9-10"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "union");
        let sets: Vec<String> = sub
            .get_many::<ProcSet>("sets")
            .unwrap()
            .map(ProcSet::to_string)
            .collect();
        assert_eq!(sets, vec!["1-5", "", "7 9-10"]);
    }

    #[test]
    fn test_invalid_set() {
        assert!(build_cli()
            .try_get_matches_from(["procset", "show", "5-3"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(["procset", "show", "1-x"])
            .is_err());

        // Binary operations need at least two operands
        assert!(build_cli()
            .try_get_matches_from(["procset", "union", "1-5"])
            .is_err());
    }

    #[test]
    fn test_negative_index() {
        let matches = build_cli()
            .try_get_matches_from(["procset", "nth", "1-5", "-1"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<i64>("index"), Some(&-1));
    }
}

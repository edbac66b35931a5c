use crate::global_settings::GlobalSettings;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use itertools::Itertools;
use procset::{Point, ProcSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

impl Operation {
    fn from_command(name: &str) -> Option<Self> {
        match name {
            "union" => Some(Operation::Union),
            "intersection" => Some(Operation::Intersection),
            "difference" => Some(Operation::Difference),
            "symmetric-difference" => Some(Operation::SymmetricDifference),
            _ => None,
        }
    }

    fn apply(self, accumulated: &mut ProcSet, right: &ProcSet) {
        match self {
            Operation::Union => accumulated.union_update(right),
            Operation::Intersection => accumulated.intersection_update(right),
            Operation::Difference => accumulated.difference_update(right),
            Operation::SymmetricDifference => {
                accumulated.symmetric_difference_update(right)
            }
        }
    }
}

fn get_set<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a ProcSet> {
    args.get_one::<ProcSet>(name)
        .with_context(|| format!("missing argument {name}"))
}

/// Apply the operation left to right over all sets
fn fold(operation: Operation, args: &ArgMatches) -> ProcSet {
    let mut sets = args.get_many::<ProcSet>("sets").into_iter().flatten();
    let mut result = sets.next().cloned().unwrap_or_default();
    for set in sets {
        operation.apply(&mut result, set);
    }
    log::info!("{:?} -> {} points", operation, result.len());
    result
}

fn display_bound(bound: procset::Result<Point>) -> String {
    match bound {
        Ok(p) => p.to_string(),
        Err(_) => "-".to_string(),
    }
}

pub(crate) fn show(set: &ProcSet) -> String {
    format!(
        "\
set:       {}
count:     {}
intervals: {}
min:       {}
max:       {}
",
        set,
        set.len(),
        set.interval_count(),
        display_bound(set.min()),
        display_bound(set.max()),
    )
}

pub(crate) fn compare(left: &ProcSet, right: &ProcSet) -> String {
    format!(
        "\
equal:           {}
subset:          {}
proper subset:   {}
superset:        {}
proper superset: {}
disjoint:        {}
",
        left == right,
        left.is_subset(right),
        left.is_proper_subset(right),
        left.is_superset(right),
        left.is_proper_superset(right),
        left.is_disjoint(right),
    )
}

pub(crate) fn contains(set: &ProcSet, points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{}: {}\n", p, if set.contains(*p) { "yes" } else { "no" }))
        .collect()
}

pub(crate) fn list(set: &ProcSet, separator: &str) -> String {
    if set.is_empty() {
        String::new()
    } else {
        format!("{}\n", set.iter().join(separator))
    }
}

pub(crate) fn intervals(set: &ProcSet) -> String {
    set.intervals()
        .map(|intv| format!("{} {}\n", intv.low(), intv.high()))
        .collect()
}

/// The two sets used throughout the documentation
pub(crate) fn demo() -> Result<String> {
    let proc1: ProcSet = "11-45 88-100".parse()?;
    let proc2: ProcSet = "33-54 63-74 79-94".parse()?;
    let empty = ProcSet::new();
    Ok(format!(
        "\
proc1:                {:?}
proc2:                {:?}
union:                {:?}
intersection:         {:?}
difference:           {:?}
symmetric difference: {:?}
empty:                {:?}
",
        proc1,
        proc2,
        &proc1 | &proc2,
        &proc1 & &proc2,
        &proc1 - &proc2,
        &proc1 ^ &proc2,
        empty,
    ))
}

/// Execute the subcommand, and return the text to display
pub(crate) fn run(args: &ArgMatches, settings: &GlobalSettings) -> Result<String> {
    match args.subcommand() {
        Some(("show", sub)) => Ok(show(&fold(Operation::Union, sub))),
        Some(("compare", sub)) => {
            Ok(compare(get_set(sub, "left")?, get_set(sub, "right")?))
        }
        Some(("contains", sub)) => {
            let points: Vec<Point> = sub
                .get_many::<Point>("points")
                .into_iter()
                .flatten()
                .copied()
                .collect();
            Ok(contains(get_set(sub, "set")?, &points))
        }
        Some(("nth", sub)) => {
            let set = get_set(sub, "set")?;
            let index = *sub
                .get_one::<i64>("index")
                .context("missing argument index")?;
            let point = set
                .at(index)
                .with_context(|| format!("cannot get point {index} of {set:?}"))?;
            Ok(format!("{point}\n"))
        }
        Some(("list", sub)) => Ok(list(get_set(sub, "set")?, &settings.separator)),
        Some(("intervals", sub)) => Ok(intervals(get_set(sub, "set")?)),
        Some(("demo", _)) => demo(),
        Some(("completions", sub)) => {
            let shell = sub
                .get_one::<clap_complete_command::Shell>("shell")
                .cloned()
                .context("missing argument shell")?;
            shell.generate(&mut crate::args::build_cli(), &mut std::io::stdout());
            Ok(String::new())
        }
        Some((name, sub)) => match Operation::from_command(name) {
            Some(operation) => Ok(format!("{}\n", fold(operation, sub))),
            None => bail!("unknown command {name}"),
        },
        None => bail!("no command given"),
    }
}

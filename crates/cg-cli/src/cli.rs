//! Command-line definition.
//!
//! Query operations may be mixed freely and repeated; they run in the order
//! they were written.  clap collects each flag into its own `Vec`, so the
//! command-line order is recovered from the argument indices clap records.

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, Args, Parser, Subcommand, ValueEnum};

use cg_core::LoadConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query and validate POI/road datasets")]
pub struct Cli {
    /// Longest accepted POI or road name, in bytes.
    #[arg(long, global = true, default_value_t = LoadConfig::DEFAULT_MAX_NAME_LEN)]
    pub max_name_len: usize,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn load_config(&self) -> LoadConfig {
        LoadConfig::default().with_max_name_len(self.max_name_len)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a dataset and answer location and distance queries.
    Query(QueryArgs),
    /// Check a dataset; print the first offending line number if invalid.
    Validate {
        /// Dataset file.  Reads standard input when omitted.
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },
    /// Print every node and its outgoing roads.
    Dump {
        /// Dataset file.
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Dataset file.
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Print the coordinates of the named POI.
    #[arg(long, value_name = "NAME", action = ArgAction::Append)]
    pub location: Vec<String>,

    /// Print the two POIs furthest apart and their distance.  Repeatable.
    ///
    /// Each occurrence records one value (`true` when given bare), so clap
    /// keeps an index per occurrence.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        hide_possible_values = true,
        action = ArgAction::Append
    )]
    pub diameter: Vec<bool>,

    /// Great-circle distance between two named POIs.
    #[arg(long, num_args = 2, value_names = ["A", "B"], action = ArgAction::Append)]
    pub distance: Vec<String>,

    /// Shortest road distance from A to B.
    #[arg(long, num_args = 2, value_names = ["A", "B"], action = ArgAction::Append)]
    pub roaddist: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One query, in the form it will be executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Location(String),
    Diameter,
    Distance(String, String),
    RoadDistance(String, String),
}

impl QueryArgs {
    /// Operations in command-line order.
    ///
    /// `matches` must be the `query` subcommand's matches that produced
    /// `self`.
    pub fn operations(&self, matches: &ArgMatches) -> Vec<Operation> {
        let mut ops: Vec<(usize, Operation)> = Vec::new();

        let at = occurrences(matches, "location", 1);
        ops.extend(at.into_iter().zip(&self.location).map(|(i, name)| (i, Operation::Location(name.clone()))));

        let at = occurrences(matches, "diameter", 1);
        ops.extend(
            at.into_iter()
                .zip(&self.diameter)
                .filter(|(_, on)| **on)
                .map(|(i, _)| (i, Operation::Diameter)),
        );

        let at = occurrences(matches, "distance", 2);
        ops.extend(
            at.into_iter()
                .zip(self.distance.chunks_exact(2))
                .map(|(i, ab)| (i, Operation::Distance(ab[0].clone(), ab[1].clone()))),
        );

        let at = occurrences(matches, "roaddist", 2);
        ops.extend(
            at.into_iter()
                .zip(self.roaddist.chunks_exact(2))
                .map(|(i, ab)| (i, Operation::RoadDistance(ab[0].clone(), ab[1].clone()))),
        );

        ops.sort_by_key(|(i, _)| *i);
        ops.into_iter().map(|(_, op)| op).collect()
    }
}

/// Index of the first value of each occurrence of `id` typed on the command
/// line, taking `arity` values per occurrence.
fn occurrences(matches: &ArgMatches, id: &str, arity: usize) -> Vec<usize> {
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return Vec::new();
    }
    matches
        .indices_of(id)
        .map(|it| it.step_by(arity).collect())
        .unwrap_or_default()
}

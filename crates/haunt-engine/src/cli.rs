//! Command-line interface.
//!
//! The two optional positionals are the hunter and ghost rest intervals in
//! milliseconds. Everything else is a flag that overrides the matching key
//! of `haunt-config.yaml`.

use std::path::PathBuf;

use clap::Parser;
use haunt_core::SimulationConfig;
use haunt_types::GhostClass;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "haunt-engine")]
#[command(version)]
#[command(about = "Run a ghost hunt with one thread per hunter and one for the ghost")]
pub struct Cli {
    /// Milliseconds each hunter rests between ticks
    pub hunter_rest_ms: Option<u64>,

    /// Milliseconds the ghost rests between ticks
    pub ghost_rest_ms: Option<u64>,

    /// Configuration file; defaults apply when it does not exist
    #[arg(long, default_value = "haunt-config.yaml")]
    pub config: PathBuf,

    /// Hunter name (repeat for each hunter, up to four)
    #[arg(long = "hunter", value_name = "NAME")]
    pub hunters: Vec<String>,

    /// Ask for hunter names on standard input
    #[arg(long, conflicts_with = "hunters")]
    pub prompt: bool,

    /// Master random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ghost kind (POLTERGEIST, BANSHEE, BULLIES or PHANTOM)
    #[arg(long, value_parser = parse_ghost)]
    pub ghost: Option<GhostClass>,

    /// Stop every actor after this many ticks (0 = no limit)
    #[arg(long)]
    pub tick_limit: Option<u64>,

    /// Print the outcome as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Write command-line overrides into `config`.
    pub fn apply(&self, config: &mut SimulationConfig) {
        if let Some(ms) = self.hunter_rest_ms {
            config.hunters.rest_ms = ms;
        }
        if let Some(ms) = self.ghost_rest_ms {
            config.ghost.rest_ms = ms;
        }
        if !self.hunters.is_empty() {
            config.hunters.names.clone_from(&self.hunters);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.ghost.is_some() {
            config.ghost.class = self.ghost;
        }
        if let Some(limit) = self.tick_limit {
            config.limits.tick_limit = limit;
        }
        if self.json_logs {
            config.logging.json = true;
        }
    }
}

fn parse_ghost(raw: &str) -> Result<GhostClass, String> {
    GhostClass::ALL
        .into_iter()
        .find(|g| g.label().eq_ignore_ascii_case(raw))
        .ok_or_else(|| {
            format!("unknown ghost {raw:?}; expected POLTERGEIST, BANSHEE, BULLIES or PHANTOM")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Cli> {
        Cli::try_parse_from(std::iter::once("haunt-engine").chain(args.iter().copied())).ok()
    }

    #[test]
    fn no_arguments_keeps_config() {
        let Some(cli) = parse(&[]) else {
            panic!("empty command line should parse");
        };
        let mut config = SimulationConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(cli.config, PathBuf::from("haunt-config.yaml"));
    }

    #[test]
    fn positionals_set_rest_intervals() {
        let Some(cli) = parse(&["25", "40"]) else {
            panic!("should parse");
        };
        let mut config = SimulationConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.hunters.rest_ms, 25);
        assert_eq!(config.ghost.rest_ms, 40);
    }

    #[test]
    fn flags_override_config() {
        let Some(cli) = parse(&[
            "--hunter", "Ada", "--hunter", "Bo", "--seed", "9", "--ghost", "banshee",
            "--tick-limit", "500", "--json-logs",
        ]) else {
            panic!("should parse");
        };
        let mut config = SimulationConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.hunters.names, vec!["Ada".to_owned(), "Bo".to_owned()]);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.ghost.class, Some(GhostClass::Banshee));
        assert_eq!(config.limits.tick_limit, 500);
        assert!(config.logging.json);
    }

    #[test]
    fn unknown_ghost_is_rejected() {
        assert!(parse(&["--ghost", "wraith"]).is_none());
    }

    #[test]
    fn prompt_conflicts_with_named_hunters() {
        assert!(parse(&["--prompt", "--hunter", "Ada"]).is_none());
    }
}

use std::io::{self, BufReader, BufWriter, Write};

use anyhow::Context;
use apsp_core::{
    matrix::AdjacencyMatrix,
    params::{ApspParams, Termination, Workers},
    shortest_paths,
};
use clap::Args;
use tracing::{info, warn};

#[derive(Args)]
pub struct SolveArgs {
    /// Number of workers, at most the number of nodes (default: one per core)
    #[arg(short, long, env = "APSP_WORKERS")]
    workers: Option<usize>,

    /// Stop after this many rounds even if distances are still shrinking
    #[arg(long)]
    max_rounds: Option<usize>,

    /// Pretty-print the output matrix
    #[arg(short, long)]
    pretty: bool,
}

impl SolveArgs {
    fn params(&self) -> ApspParams {
        ApspParams {
            workers: self.workers.map_or(Workers::Auto, Workers::Multi),
            termination: self
                .max_rounds
                .map_or(Termination::Converged, Termination::MaxRounds),
        }
    }
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let reader = BufReader::new(io::stdin().lock());
    let adjacency: AdjacencyMatrix =
        serde_json::from_reader(reader).context("Failed to read adjacency matrix from stdin")?;

    info!("Read {0}x{0} adjacency matrix", adjacency.dimension());

    let result = shortest_paths(&adjacency, &args.params())?;

    if !result.converged {
        warn!(rounds = result.rounds, "Distances did not converge");
    }
    info!("Finished in {} rounds", result.rounds);

    let mut writer = BufWriter::new(io::stdout().lock());
    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &result.distances)?;
    } else {
        serde_json::to_writer(&mut writer, &result.distances)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_from_args() {
        let args = SolveArgs {
            workers: Some(3),
            max_rounds: None,
            pretty: false,
        };
        let params = args.params();
        assert_eq!(params.workers, Workers::Multi(3));
        assert_eq!(params.termination, Termination::Converged);

        let args = SolveArgs {
            workers: None,
            max_rounds: Some(2),
            pretty: true,
        };
        let params = args.params();
        assert_eq!(params.workers, Workers::Auto);
        assert_eq!(params.termination, Termination::MaxRounds(2));
    }
}

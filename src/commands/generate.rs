//! `graphkit generate` command - random graph files
//!
//! Draws `floor(n * phi)` random node pairs; repeated pairs collapse into
//! one edge and self-loops are kept, except in DAGs where every edge points
//! from the lower to the higher id. Weights are integers in
//! `[1, max(1, n / 2)]`, and a pair drawn twice keeps its last weight.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::GenerateArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::print_json;
use graphkit_core::error::Result;
use graphkit_core::graph::{EdgeWeights, Graph};
use graphkit_core::input::GraphFile;

const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Shape of the graph to generate
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub nodes: usize,
    pub directed: bool,
    pub dag: bool,
    pub weighted: bool,
}

impl From<&GenerateArgs> for GenerateOptions {
    fn from(args: &GenerateArgs) -> Self {
        GenerateOptions {
            nodes: args.nodes,
            directed: args.directed || args.dag,
            dag: args.dag,
            weighted: args.weighted,
        }
    }
}

/// Number of pairs drawn for a graph with `nodes` nodes
pub fn edge_draws(nodes: usize) -> usize {
    (nodes as f64 * GOLDEN_RATIO) as usize
}

/// Build a random graph and, when requested, its weights
pub fn random_graph<R: Rng>(opts: GenerateOptions, rng: &mut R) -> Result<(Graph, EdgeWeights)> {
    let n = opts.nodes;
    let max_weight = (n / 2).max(1) as u32;
    let mut graph = Graph::new(n, opts.directed);
    let mut weights = EdgeWeights::new();

    for _ in 0..edge_draws(n) {
        let (mut s, mut t) = (rng.random_range(0..n), rng.random_range(0..n));
        if opts.dag {
            if s == t {
                continue;
            }
            if s > t {
                std::mem::swap(&mut s, &mut t);
            }
        }

        graph.add_edge(s, t)?;
        if opts.weighted {
            let weight = rng.random_range(1..=max_weight);
            if opts.directed {
                weights.insert(s, t, weight);
            } else {
                weights.insert_symmetric(s, t, weight);
            }
        }
    }

    Ok((graph, weights))
}

/// Execute the generate command
///
/// Always writes a JSON graph file, whatever `--format` says, so the output
/// can be fed straight back into the other commands.
pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    let opts = GenerateOptions::from(args);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (graph, weights) = random_graph(opts, &mut rng)?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        seeded = args.seed.is_some(),
        "generated"
    );

    let weights = opts.weighted.then_some(&weights);
    let file = GraphFile::from_graph(&graph, weights);
    print_json(&serde_json::to_value(&file)?)?;

    crate::commands::dispatch::trace_command!(ctx, "generate");
    Ok(())
}

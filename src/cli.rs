//! Command line interface of the `wgraphs` binary
//!
//! Loads an edge-list file into the selected backend and runs one algorithm on it.

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::info;

use wgraphs::{algo::*, io::*, prelude::*};

/// Weighted graph algorithms on edge-list files
#[derive(Parser, Debug)]
#[command(name = "wgraphs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Edge-list file to load
    pub file: PathBuf,

    /// Storage backend: list, vector or matrix
    #[arg(long, short, default_value = "vector")]
    pub representation: Representation,

    /// Treat every line as a directed edge
    #[arg(long, short)]
    pub directed: bool,

    /// Character separating the values of a line (default: whitespace)
    #[arg(long, short)]
    pub separator: Option<char>,

    /// Prefix of comment lines
    #[arg(long, default_value = "#")]
    pub comment: String,

    /// Skip lines mentioning a larger vertex identifier
    #[arg(long, default_value_t = DEFAULT_MAX_VERTEX)]
    pub max_vertex: Node,

    /// Show debug events on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print vertex, edge and degree statistics
    Info,

    /// Breadth-first search from a vertex
    Bfs {
        /// Start vertex
        start: Node,
    },

    /// Depth-first search from a vertex
    Dfs {
        /// Start vertex
        start: Node,
    },

    /// Shortest paths from a vertex
    Dijkstra {
        /// Start vertex
        start: Node,

        /// Only report the path to this vertex
        #[arg(long, short)]
        target: Option<Node>,
    },

    /// Minimum spanning tree of the component of a vertex
    Prim {
        /// Start vertex (default: smallest vertex)
        start: Option<Node>,
    },

    /// All-pairs shortest paths and the average distance
    FloydWarshall,

    /// Connected components found by repeated BFS
    Clusters,

    /// Largest hop distance between two vertices
    Diameter,

    /// Greedy vertex coloring
    Color,

    /// Steiner tree connecting all vertices except the given Steiner vertices
    Steiner {
        /// Optional Steiner vertices
        steiner: Vec<Node>,

        /// Root of the heuristic tree (default: smallest terminal)
        #[arg(long, short)]
        initial: Option<Node>,

        /// Search all subsets of Steiner vertices instead of the greedy heuristic
        #[arg(long)]
        exhaustive: bool,
    },
}

impl Cli {
    fn reader(&self) -> EdgeListReader {
        let reader = EdgeListReader::new()
            .comment_identifier(self.comment.as_str())
            .directed(self.directed)
            .max_vertex(self.max_vertex);

        match self.separator {
            Some(sep) => reader.separator(sep),
            None => reader,
        }
    }

    /// Loads the graph and runs the selected command
    pub fn run(&self) -> Result<()> {
        let start = Instant::now();
        let mut graph = self
            .reader()
            .try_read_dyn_graph_file(self.representation, &self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        info!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            elapsed = ?start.elapsed(),
            "graph loaded"
        );

        let start = Instant::now();
        match &self.command {
            Command::Info => {
                let stats = graph.calculate_degree_statistics().clone();
                println!("representation: {}", graph.representation());
                println!("directed: {}", graph.is_directed());
                println!("vertices: {}", graph.number_of_vertices());
                println!("edges: {}", graph.number_of_edges());
                println!(
                    "degree: min {} max {} average {:.3}",
                    stats.min_degree, stats.max_degree, stats.average_degree
                );
            }
            Command::Bfs { start } => {
                let mut order = Vec::new();
                let tree = graph.bfs_with(*start, Callbacks::new().on_visited(|v, _, _| order.push(v)));
                report_traversal(&tree, &order);
            }
            Command::Dfs { start } => {
                let mut order = Vec::new();
                let tree = graph.dfs_with(*start, Callbacks::new().on_visited(|v, _, _| order.push(v)));
                report_traversal(&tree, &order);
            }
            Command::Dijkstra { start, target } => {
                let tree = graph.dijkstra(*start)?;
                match target {
                    Some(target) => match tree.path_to(*target) {
                        Some(path) => {
                            println!("path: {}", path.vertices.iter().join(" "));
                            println!("distance: {}", path.distance);
                            println!("hops: {}", path.hops);
                        }
                        None => println!("no path from {start} to {target}"),
                    },
                    None => {
                        for v in tree.vertices() {
                            if let Some(path) = tree.path_to(v) {
                                println!("{v} {}", path.distance);
                            }
                        }
                    }
                }
            }
            Command::Prim { start } => {
                let tree = graph.prim(*start)?;
                println!("root: {}", tree.root());
                println!("vertices: {}", tree.len());
                println!("weight: {}", tree.weight());
            }
            Command::FloydWarshall => {
                let apsp = graph.floyd_warshall();
                println!("average distance: {:.3}", apsp.average_distance());
            }
            Command::Clusters => {
                let stats = graph.find_clusters();
                println!("clusters: {}", stats.total);
                println!("biggest: {}", stats.biggest);
                println!("smallest: {}", stats.smallest);
            }
            Command::Diameter => {
                let diameter = graph.find_diameter();
                match (diameter.initial_vertex, diameter.last_vertex) {
                    (Some(u), Some(v)) => println!("diameter: {} ({u} to {v})", diameter.size),
                    _ => println!("diameter: {}", diameter.size),
                }
            }
            Command::Color => {
                let coloring = graph.find_coloring();
                println!("colors: {}", coloring.number_of_colors());
                println!("valid: {}", graph.check_coloring(&coloring));
            }
            Command::Steiner {
                steiner,
                initial,
                exhaustive,
            } => {
                let tree = if *exhaustive {
                    graph.steiner_tree_branch_and_bound(steiner)?
                } else {
                    graph.steiner_tree_heuristic(initial.unwrap_or(RESERVED_NODE), steiner)?
                };
                println!("vertices: {}", tree.vertices().join(" "));
                println!("weight: {}", tree.weight());
            }
        }

        println!("elapsed: {:.2?}", start.elapsed());
        Ok(())
    }
}

fn report_traversal<G>(tree: &SpanningTree<'_, G>, order: &[Node]) {
    let depth = tree.vertices().filter_map(|v| tree.depth_of(v)).max().unwrap_or(0);
    println!("order: {}", order.iter().join(" "));
    println!("reached: {}", tree.len());
    println!("max depth: {depth}");
}

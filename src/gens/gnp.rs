use rand::distr::Uniform;
use rand_distr::{Distribution, Geometric};

use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a vertex
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible edge between the vertices `1..=n` independently with
/// probability `p`. Self-loops are never generated and undirected graphs only draw each
/// unordered pair once. Weights are drawn uniformly from a closed range (default `[1, 1]`).
///
/// Instead of a coin flip per pair, the generator jumps to the next edge with a geometrically
/// distributed step, so the running time is linear in `n + m`.
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
    weights: (Weight, Weight),
    directed: bool,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            weights: (1.0, 1.0),
            directed: false,
        }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = GnpType::Prob(prob);
        self
    }

    /// Draws weights uniformly from `[low, high]`
    pub fn weights(mut self, low: Weight, high: Weight) -> Self {
        assert!(is_valid_weight(low) && is_valid_weight(high) && low <= high);
        self.weights = (low, high);
        self
    }

    /// Generates directed (or undirected) edges
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns *true* if directed edges are generated
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of candidate pairs per vertex
    fn pairs_per_vertex(&self) -> f64 {
        self.n.saturating_sub(1) as f64
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                // undirected edges add to the degree of both endpoints
                let p = if self.pairs_per_vertex() > 0.0 {
                    d / self.pairs_per_vertex()
                } else {
                    0.0
                };
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge> {
        let p = self.probability();
        let geometric = Geometric::new(p).ok().filter(|_| p > 0.0);
        let (low, high) = self.weights;
        let weights = Uniform::new_inclusive(low, high).ok();
        let mut pairs = PairJumper::new(self.n, self.directed);

        std::iter::from_fn(move || {
            let skip = geometric.as_ref()?.sample(rng);
            let (u, v) = pairs.advance(skip)?;
            let w = weights.as_ref().map_or(low, |distr| distr.sample(rng));
            Some(WeightedEdge(u, v, w))
        })
    }
}

/// Walks over all candidate pairs row by row: `(u, v)` with `u < v` for undirected and `u != v`
/// for directed graphs
#[derive(Debug, Clone)]
struct PairJumper {
    n: u64,
    directed: bool,
    row: u64,
    col: u64,
}

impl PairJumper {
    fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            n: n as u64,
            directed,
            row: 0,
            col: 0,
        }
    }

    fn row_len(&self) -> u64 {
        if self.directed {
            self.n - 1
        } else {
            self.n - 1 - self.row
        }
    }

    /// Skips `skip` pairs and returns the next one
    fn advance(&mut self, mut skip: u64) -> Option<(Node, Node)> {
        loop {
            if self.row >= self.n {
                return None;
            }

            let remaining = self.row_len() - self.col;
            if skip < remaining {
                self.col += skip;
                break;
            }
            skip -= remaining;
            self.row += 1;
            self.col = 0;
        }

        let (u, c) = (self.row, self.col);
        let v = match (self.directed, c < u) {
            (true, true) => c,
            (true, false) => c + 1,
            (false, _) => u + 1 + c,
        };
        self.col += 1;

        Some((u as Node + 1, v as Node + 1))
    }
}

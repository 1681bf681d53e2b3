//! # EdgeList
//!
//! The EdgeList-Format consists of a header line holding the number of vertices, followed by
//! non-comment-lines `u v [weight]` each describing one edge, or a single vertex if exactly one
//! of `u` and `v` is non-positive.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use smallvec::SmallVec;
use tracing::{debug, warn};

use super::*;

/// Largest vertex identifier an [`EdgeListReader`] accepts by default.
/// Identifiers double as storage indices, so larger ones are skipped like malformed lines.
pub const DEFAULT_MAX_VERTEX: Node = 1 << 24;

/// One parsed line of the edge list
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EdgeListEntry {
    /// `u v [weight]` with both vertices positive
    Edge(WeightedEdge),
    /// `v -1`, `-1 v` or similar
    Vertex(Node),
}

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Token separator, `None` splits at any whitespace
    separator: Option<char>,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Whether the graph is created directed
    directed: bool,
    /// Lines mentioning a larger vertex identifier are rejected
    max_vertex: Node,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            separator: None,
            comment_identifier: "#".to_string(),
            directed: false,
            max_vertex: DEFAULT_MAX_VERTEX,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits tokens at `separator` instead of whitespace
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Reads graphs as directed (or undirected)
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Rejects lines with a vertex identifier above `max_vertex`
    pub fn max_vertex(mut self, max_vertex: Node) -> Self {
        self.max_vertex = max_vertex;
        self
    }

    /// Parses the body of one line.
    ///
    /// # Errors
    /// Fails with `InvalidData` if a token cannot be parsed, no vertex is positive or a vertex
    /// exceeds the configured maximum.
    pub fn parse_line(&self, line: &str) -> Result<EdgeListEntry> {
        let tokens: SmallVec<[&str; 4]> = match self.separator {
            Some(sep) => line.split(sep).map(str::trim).filter(|t| !t.is_empty()).collect(),
            None => line.split_whitespace().collect(),
        };
        let mut parts = tokens.into_iter();

        let u: i64 = parse_next_value!(parts, "first vertex");
        let v: i64 = parse_next_value!(parts, "second vertex");
        let weight: Weight = match parts.next() {
            Some(token) => token.parse().map_err(|_| {
                io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {token:?} found. Cannot parse weight.")
                )
            })?,
            None => 1.0,
        };

        let to_node = |x: i64| match Node::try_from(x) {
            Ok(node) if node <= self.max_vertex => Ok(node),
            _ => Err(io_error!(
                ErrorKind::InvalidData,
                format!("Vertex {x} is out of range (maximum {}).", self.max_vertex)
            )),
        };

        raise_error_unless!(
            u > 0 || v > 0,
            ErrorKind::InvalidData,
            "Line does not contain a positive vertex."
        );

        Ok(match (u > 0, v > 0) {
            (true, true) => EdgeListEntry::Edge(WeightedEdge(to_node(u)?, to_node(v)?, weight)),
            (true, false) => EdgeListEntry::Vertex(to_node(u)?),
            _ => EdgeListEntry::Vertex(to_node(v)?),
        })
    }

    /// Reads all entries into `graph`, returning the vertex count announced by the header.
    ///
    /// Lines that cannot be parsed are skipped with a warning; edges the graph rejects
    /// (self-loops, duplicates, non-finite weights) are dropped silently.
    ///
    /// # Errors
    /// Fails if reading fails, with `NotFound` if there is no header and with `InvalidData` if
    /// the header is not a vertex count.
    pub fn try_read_into<G, R>(&self, graph: &mut G, reader: R) -> Result<usize>
    where
        G: GraphEdgeEditing,
        R: BufRead,
    {
        let mut lines = EdgeListLines::new(reader, &self.comment_identifier);

        let (_, header) = lines
            .next_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let mut header = header.split_whitespace();
        let announced: usize = parse_next_value!(header, "number of vertices");

        let mut skipped = 0usize;
        while let Some((line_number, line)) = lines.next_line()? {
            match self.parse_line(&line) {
                Ok(EdgeListEntry::Edge(WeightedEdge(u, v, w))) => {
                    graph.add_edge(u, v, w);
                }
                Ok(EdgeListEntry::Vertex(v)) => {
                    graph.add_vertex(v);
                }
                Err(err) => {
                    warn!(line = line_number, %err, "skipping malformed edge list line");
                    skipped += 1;
                }
            }
        }

        debug!(announced, skipped, "edge list read");
        Ok(announced)
    }

    /// Reads a graph with the backend chosen at runtime
    pub fn try_read_dyn_graph<R: BufRead>(
        &self,
        representation: Representation,
        reader: R,
    ) -> Result<DynGraph> {
        let mut graph = DynGraph::with_representation(representation, self.directed);
        self.try_read_into(&mut graph, reader)?;
        Ok(graph)
    }

    /// Reads a graph file with the backend chosen at runtime
    pub fn try_read_dyn_graph_file<P: AsRef<Path>>(
        &self,
        representation: Representation,
        path: P,
    ) -> Result<DynGraph> {
        self.try_read_dyn_graph(representation, BufReader::new(File::open(path)?))
    }
}

impl<G: GraphEdgeEditing> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut graph = G::new(self.directed);
        self.try_read_into(&mut graph, reader)?;
        Ok(graph)
    }
}

/// Trait for creating undirected graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G: GraphEdgeEditing> EdgeListRead for G {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Iterator-like access to the non-comment, non-blank lines of a reader
struct EdgeListLines<'a, R> {
    lines: Lines<R>,
    line_number: usize,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListLines<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            comment_identifier,
        }
    }

    /// Returns the next relevant line with its (1-based) number or propagates an error
    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!self.comment_identifier.is_empty()
                    && trimmed.starts_with(self.comment_identifier))
            {
                continue;
            }
            return Ok(Some((self.line_number, trimmed.to_string())));
        }
        Ok(None)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    separator: char,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Separates tokens by `separator` instead of a space
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl<G: AdjacencyList + GraphType> GraphWriter<G> for EdgeListWriter {
    /// Writes the header, one line per edge (undirected edges once) and a `v -1` line for every
    /// vertex not incident to any edge
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let sep = self.separator;
        writeln!(writer, "{}", graph.number_of_vertices())?;

        let mut covered = graph.vertex_bitset_unset();
        for WeightedEdge(u, v, w) in graph.edges(graph.is_undirected()) {
            covered.set(u as usize, true);
            covered.set(v as usize, true);
            writeln!(writer, "{u}{sep}{v}{sep}{w}")?;
        }

        for v in graph.vertices() {
            if !covered[v as usize] {
                writeln!(writer, "{v}{sep}-1")?;
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()
    }
}

impl<G: AdjacencyList + GraphType> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    const EXAMPLE: &str = "# example graph\n5\n1 2 3\n1 5 2\n2 3 1\n2 4 6\n3 4 2\n";

    fn sorted_edges<G: AdjacencyList + GraphType>(graph: &G) -> Vec<(Node, Node, Weight)> {
        graph
            .edges(graph.is_undirected())
            .map(|WeightedEdge(u, v, w)| (u, v, w))
            .sorted_by_key(|&(u, v, _)| (u, v))
            .collect_vec()
    }

    #[test]
    fn read_example() {
        let graph: AdjVector = EdgeListRead::try_read_edge_list(EXAMPLE.as_bytes()).unwrap();
        assert!(graph.is_undirected());
        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(graph.weight(4, 2), Some(6.0));
    }

    #[test]
    fn vertex_declarations_and_defaults() {
        let input = "% comment\n\n4\n1 2\n7 -1\n-3 9\n0 8\n2 3 0.5 trailing\n";
        let reader = EdgeListReader::new().comment_identifier("%").directed(true);
        let graph: AdjList = reader.try_read_graph(input.as_bytes()).unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.vertices().collect_vec(), vec![1, 2, 3, 7, 8, 9]);
        assert_eq!(graph.weight(1, 2), Some(1.0));
        assert_eq!(graph.weight(2, 1), None);
        assert_eq!(graph.weight(2, 3), Some(0.5));
    }

    #[test]
    fn custom_separator() {
        let input = "3\n1,2,4.5\n2 , 3\n";
        let graph: AdjMatrix = EdgeListReader::new()
            .separator(',')
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(sorted_edges(&graph), vec![(1, 2, 4.5), (2, 3, 1.0)]);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let input = "5\n1 2\nfoo bar\n3\n-1 -1\n2 3 heavy\n4 4 1\n5 6 NaN\n1 2 9\n3 4\n";
        let graph = AdjVector::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(sorted_edges(&graph), vec![(1, 2, 1.0), (3, 4, 1.0)]);
        // endpoints of the self-loop and the NaN edge were rejected together with the edge
        assert!(!graph.exists(5));
    }

    #[test]
    fn header_errors() {
        let err = AdjVector::try_read_edge_list("# only comments\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = AdjVector::try_read_edge_list("five\n1 2\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let err = AdjVector::try_read_edge_list("-3\n1 2\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn parse_line() {
        let reader = EdgeListReader::new();
        assert_eq!(
            reader.parse_line("3 4 -2.5").unwrap(),
            EdgeListEntry::Edge(WeightedEdge(3, 4, -2.5))
        );
        assert_eq!(reader.parse_line("-1 6").unwrap(), EdgeListEntry::Vertex(6));
        assert!(reader.parse_line("4").is_err());
        assert!(reader.parse_line("1 99999999999").is_err());
        assert!(reader.parse_line("1 4000000000").is_err());

        let small = EdgeListReader::new().max_vertex(10);
        assert_eq!(small.parse_line("10 -1").unwrap(), EdgeListEntry::Vertex(10));
        assert!(small.parse_line("3 11").is_err());
    }

    #[test]
    fn huge_vertices_are_skipped() {
        let input = "3\n1 2\n1 4000000000\n4000000000 -1\n2 3 2\n";
        let graph = AdjVector::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(sorted_edges(&graph), vec![(1, 2, 1.0), (2, 3, 2.0)]);
        assert_eq!(graph.vertex_bound(), 4);
    }

    #[test]
    fn dyn_graph() {
        for repr in [Representation::List, Representation::Vector, Representation::Matrix] {
            let graph = EdgeListReader::new()
                .try_read_dyn_graph(repr, EXAMPLE.as_bytes())
                .unwrap();
            assert_eq!(graph.representation(), repr);
            assert_eq!(graph.number_of_edges(), 5);
        }
    }

    #[test]
    fn write_and_read_back() {
        for directed in [false, true] {
            let mut graph = AdjVector::new(directed);
            graph.add_edges([(1, 2, 3.0), (2, 3, 0.25), (3, 1, 7.5)]);
            graph.add_vertices([6, 9]);

            let mut buffer = Vec::new();
            graph.try_write_edge_list(&mut buffer).unwrap();
            let text = String::from_utf8(buffer.clone()).unwrap();
            assert!(text.starts_with("5\n"));
            assert!(text.contains("6 -1\n"));
            assert!(text.contains("9 -1\n"));

            let back: AdjMatrix = EdgeListReader::new()
                .directed(directed)
                .try_read_graph(buffer.as_slice())
                .unwrap();
            assert_eq!(sorted_edges(&back), sorted_edges(&graph));
            assert_eq!(back.vertices().collect_vec(), graph.vertices().collect_vec());
        }
    }
}

/*!
# IO

Reading and writing graphs as plain-text adjacency matrices.

A matrix file consists of one line per vertex, each holding the entries of
that vertex's row separated by whitespace:

```text
0 1 0
1 0 1
0 1 0
```

Blank lines and lines starting with a configurable **comment identifier**
(default: `"%"`) are skipped. The parsed matrix must be square.

# Examples

## Reading a graph
```
use mgraphs::prelude::*;
use mgraphs::io::*;
use std::io::Cursor;

let data = b"% a triangle\n0 1 1\n1 0 1\n1 1 0\n";
let cursor = Cursor::new(&data[..]);

let g = MatrixReader::new().try_read_graph(cursor).unwrap();

assert_eq!(g.number_of_nodes(), 3);
assert_eq!(g.number_of_edges(), 3);
```

## Writing a graph
```
use mgraphs::prelude::*;
use mgraphs::io::*;
use std::io::Cursor;

let g = gens::path(3);

let mut buffer = Cursor::new(Vec::new());
g.try_write_matrix(&mut buffer).unwrap();

let output = String::from_utf8(buffer.into_inner()).unwrap();
assert_eq!(output, "0 1 0\n1 0 1\n0 1 0\n");
```
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use itertools::Itertools;

use crate::{edge::Weight, graph::AdjMatrix};

/// A configurable reader for whitespace-separated adjacency matrices.
///
/// Parses one matrix row per line, skipping blank lines and comment lines
/// starting with a given identifier (default: `"%"`).
#[derive(Debug, Clone)]
pub struct MatrixReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for MatrixReader {
    fn default() -> Self {
        Self {
            comment_identifier: "%".to_string(),
        }
    }
}

impl MatrixReader {
    /// Creates a new [`MatrixReader`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the identifier used for detecting comment lines.
    ///
    /// Default is `"%"`.
    pub fn set_comment_identifier<S>(&mut self, c: S)
    where
        S: Into<String>,
    {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier, consuming and returning `self` for chaining.
    ///
    /// # Example
    /// ```
    /// use mgraphs::io::*;
    ///
    /// let reader = MatrixReader::new()
    ///     .comment_identifier("#");
    /// ```
    pub fn comment_identifier<S>(mut self, c: S) -> Self
    where
        S: Into<String>,
    {
        self.set_comment_identifier(c);
        self
    }

    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error with kind [`ErrorKind::InvalidData`] if an entry is
    /// not a valid integer or if the parsed rows do not form a square matrix.
    pub fn try_read_graph<R>(&self, reader: R) -> Result<AdjMatrix>
    where
        R: BufRead,
    {
        let mut rows: Vec<Vec<Weight>> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with(&self.comment_identifier) {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|v| {
                    v.parse::<Weight>().map_err(|_| {
                        io_error!(
                            ErrorKind::InvalidData,
                            format!("Invalid value found. Cannot parse {v}.")
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            rows.push(row);
        }

        AdjMatrix::from_matrix(rows).map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))
    }

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents are
    /// not a valid square matrix.
    pub fn try_read_graph_file<P>(&self, path: P) -> Result<AdjMatrix>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// A writer for exporting graphs as whitespace-separated adjacency matrices.
#[derive(Debug, Clone, Default)]
pub struct MatrixWriter;

impl MatrixWriter {
    /// Creates a new [`MatrixWriter`].
    pub fn new() -> Self {
        Self
    }

    /// Writes the given graph to the provided writer, one row per line with
    /// entries separated by single spaces.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    pub fn try_write_graph<W>(&self, graph: &AdjMatrix, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for row in graph.matrix() {
            writeln!(writer, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }

    /// Writes the given graph to a file.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    pub fn try_write_graph_file<P>(&self, graph: &AdjMatrix, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for creating graphs from the matrix text format.
///
/// Provides shorthand methods for reading graphs using the default
/// [`MatrixReader`] settings.
pub trait MatrixRead: Sized {
    /// Tries to read a graph from a given buffered reader.
    ///
    /// # Errors
    /// Returns an error if the input cannot be parsed as a square matrix.
    ///
    /// # Example
    /// ```
    /// use mgraphs::prelude::*;
    /// use mgraphs::io::*;
    /// use std::io::Cursor;
    ///
    /// let data = b"0 1\n1 0\n";
    /// let g = AdjMatrix::try_read_matrix(Cursor::new(&data[..])).unwrap();
    ///
    /// assert_eq!(g.number_of_nodes(), 2);
    /// assert_eq!(g.number_of_edges(), 1);
    /// ```
    fn try_read_matrix<R>(reader: R) -> Result<Self>
    where
        R: BufRead;

    /// Tries to read a graph from a file on disk.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or does not hold a valid
    /// square matrix.
    fn try_read_matrix_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_matrix(BufReader::new(File::open(path)?))
    }
}

impl MatrixRead for AdjMatrix {
    fn try_read_matrix<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        MatrixReader::default().try_read_graph(reader)
    }
}

/// Trait for writing a graph to a writer in the matrix text format.
///
/// Provides shorthand methods using the default [`MatrixWriter`] settings.
pub trait MatrixWrite {
    /// Tries to write the graph to a given writer.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., due to I/O issues).
    ///
    /// # Example
    /// ```
    /// use mgraphs::prelude::*;
    /// use mgraphs::io::*;
    /// use std::io::Cursor;
    ///
    /// let g = gens::cycle(3);
    ///
    /// let mut buffer = Cursor::new(Vec::new());
    /// g.try_write_matrix(&mut buffer).unwrap();
    ///
    /// let output = String::from_utf8(buffer.into_inner()).unwrap();
    /// assert_eq!(output, "0 1 1\n1 0 1\n1 1 0\n");
    /// ```
    fn try_write_matrix<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written to.
    fn try_write_matrix_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_matrix(BufWriter::new(File::create(path)?))
    }
}

impl MatrixWrite for AdjMatrix {
    fn try_write_matrix<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        MatrixWriter::default().try_write_graph(self, writer)
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

use io_error;

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::*;
    use crate::gens;

    fn read(data: &str) -> Result<AdjMatrix> {
        MatrixReader::new().try_read_graph(Cursor::new(data.as_bytes()))
    }

    fn write(graph: &AdjMatrix) -> String {
        let mut buffer = Cursor::new(Vec::new());
        graph.try_write_matrix(&mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn reads_a_square_matrix() {
        let g = read("0 2 0\n0 0 3\n-1 0 0\n").unwrap();

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 3);
        assert!(g.is_directed());
        assert!(g.is_weighted());
        assert!(g.has_negative_weights());
        assert_eq!(g.weight(2, 0), -1);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let g = read("% two isolated vertices\n\n0 0\n% interleaved comment\n0 0\n\n").unwrap();

        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn comment_identifier_is_configurable() {
        let data = "# hash comments instead\n0 1\n1 0\n";
        let g = MatrixReader::new()
            .comment_identifier("#")
            .try_read_graph(Cursor::new(data.as_bytes()))
            .unwrap();

        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn rejects_non_square_input() {
        let err = read("0 1 0\n1 0 1\n").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read("0 1\n1 0 0\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_unparsable_entries() {
        let err = read("0 x\n1 0\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn empty_input_yields_the_empty_graph() {
        let g = read("").unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn writes_one_row_per_line() {
        assert_eq!(write(&gens::path(3)), "0 1 0\n1 0 1\n0 1 0\n");
    }

    #[test]
    fn round_trips_weighted_graphs() {
        let g = AdjMatrix::from_matrix(vec![
            vec![0, 4, 0, 0],
            vec![0, 0, -2, 0],
            vec![0, 0, 0, 7],
            vec![1, 0, 0, 0],
        ])
        .unwrap();

        let restored = read(&write(&g)).unwrap();
        assert_eq!(restored, g);
    }

    #[test]
    fn round_trips_generated_graphs() {
        let mut rng = Pcg64::seed_from_u64(0x1207);
        for _ in 0..10 {
            let n = rng.random_range(1..30);
            let g = gens::gnp(&mut rng, n, 0.2);

            let restored = read(&write(&g)).unwrap();
            assert_eq!(restored, g);
        }
    }
}

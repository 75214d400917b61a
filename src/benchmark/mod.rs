//! Wall-clock comparison of the search trees.
//!
//! For every configured input size and tree type a fresh tree is built, then every key is
//! inserted, searched for and deleted, each batch timed as a whole.

mod config;
mod error;

pub use self::config::{BenchmarkConfig, KeyOrder, TreeKind, USAGE};
pub use self::error::{Error, Result};

use crate::ordered_tree::OrderedTree;
use crate::{AvlTree, BinarySearchTree, RedBlackTree};
use log::{debug, info, warn};
use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

/// A batch of operations that is timed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Insert,
    Search,
    Delete,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Search => "search",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The time taken by one batch of operations on one tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub tree: TreeKind,
    pub size: usize,
    pub operation: Operation,
    pub elapsed: Duration,
    /// Height of the tree once every key was inserted.
    pub height: usize,
}

fn measure<O>(kind: TreeKind, keys: &[u64], measurements: &mut Vec<Measurement>)
where
    O: OrderedTree<u64>,
{
    let mut tree = O::new();

    let start = Instant::now();
    for key in keys {
        tree.insert(*key);
    }
    let insert_elapsed = start.elapsed();
    let height = tree.height();
    debug!("{}: {} keys inserted, height {}", O::name(), keys.len(), height);

    let start = Instant::now();
    let mut found = 0;
    for key in keys {
        if black_box(tree.search(key)).is_some() {
            found += 1;
        }
    }
    let search_elapsed = start.elapsed();
    if found != keys.len() {
        warn!("{}: found {} of {} inserted keys", O::name(), found, keys.len());
    }

    let start = Instant::now();
    for key in keys {
        black_box(tree.delete(key));
    }
    let delete_elapsed = start.elapsed();
    if !tree.is_empty() {
        warn!("{}: {} keys left after deleting every key", O::name(), tree.len());
    }

    let size = keys.len();
    for (operation, elapsed) in vec![
        (Operation::Insert, insert_elapsed),
        (Operation::Search, search_elapsed),
        (Operation::Delete, delete_elapsed),
    ] {
        measurements.push(Measurement {
            tree: kind,
            size,
            operation,
            elapsed,
            height,
        });
    }
}

/// Runs every configured tree type against every configured input size.
///
/// # Examples
///
/// ```
/// use search_trees::benchmark::{self, BenchmarkConfig, Operation, TreeKind};
///
/// let config = BenchmarkConfig {
///     sizes: vec![64],
///     ..BenchmarkConfig::default()
/// };
/// let measurements = benchmark::run(&config);
/// assert_eq!(measurements.len(), 9);
///
/// let bst_insert = &measurements[0];
/// assert_eq!((bst_insert.tree, bst_insert.operation), (TreeKind::Bst, Operation::Insert));
/// assert_eq!(bst_insert.height, 64);
/// ```
pub fn run(config: &BenchmarkConfig) -> Vec<Measurement> {
    let mut measurements = Vec::new();
    for &size in &config.sizes {
        let keys = config.order.keys(size, config.seed);
        info!("benchmarking {} {:?} keys", size, config.order);
        for &kind in &config.trees {
            match kind {
                TreeKind::Bst => measure::<BinarySearchTree<u64>>(kind, &keys, &mut measurements),
                TreeKind::Avl => measure::<AvlTree<u64>>(kind, &keys, &mut measurements),
                TreeKind::RedBlack => measure::<RedBlackTree<u64>>(kind, &keys, &mut measurements),
            }
        }
    }
    measurements
}

/// Writes measurements as CSV with the header `tree,size,operation,seconds,height`.
pub fn write_report<W>(mut writer: W, measurements: &[Measurement]) -> Result<()>
where
    W: Write,
{
    writeln!(writer, "tree,size,operation,seconds,height")?;
    for measurement in measurements {
        writeln!(
            writer,
            "{},{},{},{:.9},{}",
            measurement.tree,
            measurement.size,
            measurement.operation,
            measurement.elapsed.as_secs_f64(),
            measurement.height,
        )?;
    }
    writer.flush()?;
    Ok(())
}

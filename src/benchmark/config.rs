use crate::benchmark::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Usage string for the command line driver.
pub const USAGE: &str = "usage: search-trees [--sizes N,N,..] [--order sorted|reversed|shuffled] \
                         [--seed N] [--trees bst,avl,rbt] [--output PATH] [--verbose]";

/// The order in which keys are fed to each tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyOrder {
    /// `0, 1, .., n - 1`. Degenerates the unbalanced tree into a chain.
    Sorted,
    /// `n - 1, .., 1, 0`.
    Reversed,
    /// A seeded permutation of `0..n`.
    Shuffled,
}

impl KeyOrder {
    /// Returns the `size` keys of a batch in this order.
    pub fn keys(self, size: usize, seed: u64) -> Vec<u64> {
        let mut keys: Vec<u64> = (0..size as u64).collect();
        match self {
            KeyOrder::Sorted => {},
            KeyOrder::Reversed => keys.reverse(),
            KeyOrder::Shuffled => {
                let mut rng = StdRng::seed_from_u64(seed);
                keys.shuffle(&mut rng);
            },
        }
        keys
    }
}

impl FromStr for KeyOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sorted" => Ok(KeyOrder::Sorted),
            "reversed" => Ok(KeyOrder::Reversed),
            "shuffled" => Ok(KeyOrder::Shuffled),
            _ => Err(Error::ParseError(format!("unknown key order `{}`", s))),
        }
    }
}

/// The tree types the driver knows how to benchmark.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeKind {
    Bst,
    Avl,
    RedBlack,
}

impl TreeKind {
    /// Every tree type, in report order.
    pub const ALL: [TreeKind; 3] = [TreeKind::Bst, TreeKind::Avl, TreeKind::RedBlack];

    pub fn name(self) -> &'static str {
        match self {
            TreeKind::Bst => "bst",
            TreeKind::Avl => "avl",
            TreeKind::RedBlack => "rbt",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TreeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bst" => Ok(TreeKind::Bst),
            "avl" => Ok(TreeKind::Avl),
            "rbt" | "red_black" => Ok(TreeKind::RedBlack),
            _ => Err(Error::ParseError(format!("unknown tree type `{}`", s))),
        }
    }
}

/// Settings for a benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub order: KeyOrder,
    pub seed: u64,
    pub trees: Vec<TreeKind>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: vec![100, 1_000, 10_000, 100_000],
            order: KeyOrder::Sorted,
            seed: 0,
            trees: TreeKind::ALL.to_vec(),
            output: None,
            verbose: false,
        }
    }
}

fn parse_list<T>(value: &str) -> Result<Vec<T>>
where
    T: FromStr,
    Error: From<T::Err>,
{
    let items = value
        .split(',')
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<T>().map_err(Error::from))
        .collect::<Result<Vec<T>>>()?;
    if items.is_empty() {
        return Err(Error::ParseError(format!("empty list `{}`", value)));
    }
    Ok(items)
}

impl BenchmarkConfig {
    /// Builds a config from command line arguments, excluding the program name. Flags that are
    /// not given keep their default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::benchmark::{BenchmarkConfig, KeyOrder, TreeKind};
    ///
    /// let config = BenchmarkConfig::from_args(&["--sizes", "10,20", "--trees", "avl,rbt"]).unwrap();
    /// assert_eq!(config.sizes, vec![10, 20]);
    /// assert_eq!(config.trees, vec![TreeKind::Avl, TreeKind::RedBlack]);
    /// assert_eq!(config.order, KeyOrder::Sorted);
    ///
    /// assert!(BenchmarkConfig::from_args(&["--order", "sideways"]).is_err());
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = BenchmarkConfig::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let flag = arg.as_ref().to_string();
            if flag == "--verbose" {
                config.verbose = true;
                continue;
            }

            let value = match args.next() {
                Some(value) => value.as_ref().to_string(),
                None => return Err(Error::ParseError(format!("missing value for `{}`", flag))),
            };
            match flag.as_str() {
                "--sizes" => config.sizes = parse_list(&value)?,
                "--trees" => config.trees = parse_list(&value)?,
                "--order" => config.order = value.parse()?,
                "--seed" => config.seed = value.parse()?,
                "--output" => config.output = Some(PathBuf::from(value)),
                _ => return Err(Error::ParseError(format!("unknown flag `{}`", flag))),
            }
        }
        Ok(config)
    }
}

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use log::{debug, info};
use rb_tree::{KeyOrd, RbTree};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::sampler::Sampler;

/// Payload stored by the demo; looked up by its bare value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sample {
    pub value: i32,
}

impl KeyOrd<i32> for Sample {
    fn cmp_key(&self, key: &i32) -> Ordering {
        self.value.cmp(key)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Outcome of one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub seed: u64,
    pub inserted: usize,
    pub duplicates: usize,
    pub hits: usize,
    pub misses: usize,
    pub height: usize,
}

/// Fills a tree with random samples, queries it and writes the results to
/// `out`: one `<key>: <payload>` or `<key>: MISSING` line per query,
/// followed by the tree dump when enabled.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<RunReport, DemoError> {
    config.validate()?;
    let mut sampler = Sampler::new(config.seed);
    info!(
        "seeding {} samples in [{}, {}] with seed {}",
        config.count,
        config.min,
        config.max,
        sampler.seed()
    );

    let mut tree = RbTree::with_capacity(config.count);
    let mut duplicates = 0;
    for value in sampler.repeat(config.count, config.min, config.max) {
        if !tree.insert(Sample { value }) {
            debug!("sample {value} already present");
            duplicates += 1;
        }
    }

    let (mut hits, mut misses) = (0, 0);
    for key in sampler.repeat(config.queries, config.min, config.max) {
        match tree.search(&key) {
            Some(sample) => {
                hits += 1;
                writeln!(out, "{key}: {sample}")?;
            }
            None => {
                misses += 1;
                writeln!(out, "{key}: MISSING")?;
            }
        }
    }

    if config.dump {
        write!(out, "{tree}")?;
    }

    tree.validate()?;

    let report = RunReport {
        seed: sampler.seed(),
        inserted: tree.len(),
        duplicates,
        hits,
        misses,
        height: tree.height(),
    };
    info!("{report:?}");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: usize, queries: usize, min: i32, max: i32) -> DemoConfig {
        DemoConfig {
            count,
            queries,
            min,
            max,
            seed: Some(2024),
            dump: false,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn counts_add_up() {
        let mut out = Vec::new();
        let report = run(&config(64, 32, 1, 1024), &mut out).unwrap();

        assert_eq!(report.seed, 2024);
        assert_eq!(report.inserted + report.duplicates, 64);
        assert_eq!(report.hits + report.misses, 32);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 32);
    }

    #[test]
    fn same_seed_same_output() {
        let (mut a, mut b) = (Vec::new(), Vec::new());
        let ra = run(&config(100, 50, 1, 300), &mut a).unwrap();
        let rb = run(&config(100, 50, 1, 300), &mut b).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }

    #[test]
    fn narrow_range_produces_duplicates_and_only_hits() {
        let mut out = Vec::new();
        let report = run(&config(50, 10, 1, 5), &mut out).unwrap();

        assert!(report.inserted <= 5);
        assert!(report.duplicates >= 45);
        assert_eq!(report.misses, 10 - report.hits);
        for line in String::from_utf8(out).unwrap().lines() {
            let (key, found) = line.split_once(": ").unwrap();
            if found != "MISSING" {
                assert_eq!(key, found);
            }
        }
    }

    #[test]
    fn dump_follows_query_lines() {
        let mut cfg = config(3, 0, 7, 7);
        cfg.dump = true;
        let mut out = Vec::new();
        let report = run(&cfg, &mut out).unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.duplicates, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "B: 7\n");
    }

    #[test]
    fn empty_run_is_valid() {
        let mut out = Vec::new();
        let report = run(&config(0, 4, 1, 10), &mut out).unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.height, 0);
        assert_eq!(report.misses, 4);
    }
}

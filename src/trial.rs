use error::{PercolationError, Result};
use grid::{Grid, Snapshot};
use random::{RandomSource, SeededUniform};
use serde_json::Value;

pub struct TrialConfig {
    pub grid_size: usize,
    pub probability: f64,
    pub trials: usize,
    pub base_seed: u64,
}

impl Default for TrialConfig {
    fn default() -> TrialConfig {
        TrialConfig {
            grid_size: 10,
            probability: 0.63,
            trials: 10,
            base_seed: 0,
        }
    }
}

fn read_u64(constant_json: &Value, key: &str) -> Result<Option<u64>> {
    match constant_json.get(key) {
        None | Some(&Value::Null) => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or_else(|| {
            PercolationError::InvalidConfig(format!("{} must be a non-negative integer, got {}", key, v))
        }),
    }
}

impl TrialConfig {
    /// Reads `grid_size`, `probability`, `trials` and `base_seed`; absent
    /// keys keep their defaults.
    pub fn from_json(constant_json: &Value) -> Result<TrialConfig> {
        if !constant_json.is_object() {
            return Err(PercolationError::InvalidConfig(format!("expected an object, got {}", constant_json)));
        }
        let mut config = TrialConfig::default();
        if let Some(n) = read_u64(constant_json, "grid_size")? {
            config.grid_size = n as usize;
        }
        if let Some(t) = read_u64(constant_json, "trials")? {
            config.trials = t as usize;
        }
        if let Some(seed) = read_u64(constant_json, "base_seed")? {
            config.base_seed = seed;
        }
        match constant_json.get("probability") {
            None | Some(&Value::Null) => {}
            Some(v) => {
                config.probability = v.as_f64().ok_or_else(|| {
                    PercolationError::InvalidConfig(format!("probability must be a number, got {}", v))
                })?;
            }
        }
        Ok(config)
    }
}

/// Outcome of one seeded pass over a fresh grid.
#[derive(Debug, Clone)]
pub struct Trial {
    pub problem: usize,
    pub seed: u64,
    pub grid: Grid,
    pub percolates: bool,
}

impl Trial {
    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }
}

fn fill<R: RandomSource>(grid: &mut Grid, source: &mut R, probability: f64, seed: u64) -> Result<bool> {
    source.set_seed(seed);
    grid.open_fraction(probability, source)?;
    Ok(grid.percolates())
}

pub fn run_trial(n: usize, probability: f64, seed: u64) -> Result<Trial> {
    let mut grid = Grid::new(n)?;
    let mut source = SeededUniform::new(seed);
    let percolates = fill(&mut grid, &mut source, probability, seed)?;
    debug!("trial n={} p={} seed={}: {} open, percolates {}",
        n, probability, seed, grid.open_count(), percolates);
    Ok(Trial {
        problem: 1,
        seed,
        grid,
        percolates,
    })
}

/// Problems played one at a time on a single reused grid. Problem `i`
/// (from 1) is seeded with `base_seed + i`. Stops after the first error.
pub struct Trials {
    grid: Grid,
    source: SeededUniform,
    probability: f64,
    base_seed: u64,
    played: usize,
    count: usize,
}

impl Trials {
    fn play(&mut self, problem: usize) -> Result<Trial> {
        self.grid.reset()?;
        let seed = self.base_seed.wrapping_add(problem as u64);
        let percolates = fill(&mut self.grid, &mut self.source, self.probability, seed)?;
        info!("problem {}: seed {}, {}/{} open, percolates {}",
            problem, seed, self.grid.open_count(), self.grid.size() * self.grid.size(), percolates);
        Ok(Trial {
            problem,
            seed,
            grid: self.grid.clone(),
            percolates,
        })
    }
}

impl Iterator for Trials {
    type Item = Result<Trial>;

    fn next(&mut self) -> Option<Result<Trial>> {
        if self.played >= self.count {
            return None;
        }
        self.played += 1;
        let problem = self.played;
        let trial = self.play(problem);
        if trial.is_err() {
            self.played = self.count;
        }
        Some(trial)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.played;
        (0, Some(left))
    }
}

pub fn run_trials(config: &TrialConfig) -> Result<Trials> {
    Ok(Trials {
        grid: Grid::new(config.grid_size)?,
        source: SeededUniform::new(config.base_seed),
        probability: config.probability,
        base_seed: config.base_seed,
        played: 0,
        count: config.trials,
    })
}

pub fn percolation_rate(trials: &[Trial]) -> f64 {
    if trials.is_empty() {
        return 0.0;
    }
    let hits = trials.iter().filter(|t| t.percolates).count();
    hits as f64 / trials.len() as f64
}

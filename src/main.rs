#[macro_use] extern crate log;
extern crate simplelog;
extern crate serde_json;
extern crate percolation;

use serde_json::Value;
use simplelog::*;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write, stdin};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use percolation::{Renderer, TextRenderer, TrialConfig};

fn load_constants(path: Option<String>) -> Result<Value, String> {
    let path = match path {
        Some(p) => p,
        None => return Ok(json_object()),
    };
    let mut text = String::new();
    File::open(&path)
        .and_then(|mut f| f.read_to_string(&mut text))
        .map_err(|e| format!("cannot read {}: {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("cannot parse {}: {}", path, e))
}

fn json_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() * 1000 + d.subsec_millis() as u64)
        .unwrap_or(0)
}

fn run() -> Result<(), String> {
    let constants = load_constants(env::args().nth(1))?;
    let mut config = TrialConfig::from_json(&constants).map_err(|e| e.to_string())?;
    if constants.get("base_seed").is_none() {
        config.base_seed = clock_seed();
    }
    info!("grid_size: {}, probability: {}, trials: {}, base_seed: {}",
        config.grid_size, config.probability, config.trials, config.base_seed);

    let trials = percolation::run_trials(&config).map_err(|e| e.to_string())?;
    let renderer = TextRenderer::default();

    let stdin = stdin();
    let mut lines_iter = BufReader::new(stdin.lock()).lines();
    let stdout = io::stdout();
    let mut played = 0;
    let mut hits = 0;
    for trial in trials {
        let trial = trial.map_err(|e| e.to_string())?;
        let snapshot = trial.snapshot();
        warn!("{{\"problem\": {}, \"seed\": {}, \"frame\": {}}},",
            trial.problem, trial.seed, snapshot.to_json());
        played += 1;
        if trial.percolates {
            hits += 1;
        }

        let more = trial.problem < config.trials;
        show_frame(&mut stdout.lock(), &renderer.render(trial.problem, &snapshot), more)
            .map_err(|e| format!("cannot write to stdout: {}", e))?;
        if more {
            match lines_iter.next() {
                Some(Ok(_)) => {}
                _ => break,
            }
        }
    }
    if played > 0 {
        info!("percolation rate: {:.3} over {} problems", hits as f64 / played as f64, played);
    }
    Ok(())
}

fn show_frame<W: Write>(out: &mut W, frame: &str, prompt: bool) -> io::Result<()> {
    writeln!(out, "{}\n", frame)?;
    if prompt {
        write!(out, "press Enter for the next problem ")?;
    }
    out.flush()
}

fn main() {
    let _ = CombinedLogger::init(
        vec![
            WriteLogger::new(
                LevelFilter::Info,
                Config {time: None, level: None, target: None, location: None, time_format: None},
                File::create("percolation.log").unwrap()),
            WriteLogger::new(
                LevelFilter::Warn,
                Config {time: None, level: None, target: None, location: None, time_format: None},
                File::create("percolation-frames.log").unwrap())
        ]
    );

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

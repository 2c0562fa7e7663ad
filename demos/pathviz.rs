//! Run the search algorithms over a random maze, animated in the terminal or
//! printed as ASCII with `--headless`.
//!
//! Logging goes to stderr; set `RUST_LOG=debug` to see each run's details.

use std::error::Error;
use std::thread;

use clap::Parser;
use pathviz_crossterm::TerminalSink;
use pathviz_demos::{Cli, Config, build_context, init_logging, summary};
use pathviz_search::{PathResult, SearchContext};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let config = Config::try_from(Cli::parse())?;
    let mut ctx = build_context(&config)?;

    let results = if config.headless {
        run_headless(&mut ctx, &config)?
    } else {
        run_animated(&mut ctx, &config)?
    };

    for result in &results {
        println!("{}", summary(result));
    }
    Ok(())
}

fn run_headless(ctx: &mut SearchContext, config: &Config) -> Result<Vec<PathResult>, Box<dyn Error>> {
    let mut results = Vec::new();
    for alg in config.selection.algorithms() {
        ctx.clear_marks();
        let result = ctx.run(alg, &mut ())?;
        println!("{alg}\n{}", ctx.grid());
        results.push(result);
    }
    Ok(results)
}

fn run_animated(ctx: &mut SearchContext, config: &Config) -> Result<Vec<PathResult>, Box<dyn Error>> {
    let mut sink = TerminalSink::stdout(config.delay);
    sink.enter()?;
    let outcome = animate(ctx, config, &mut sink);
    // Restore the terminal even if a run failed.
    sink.leave()?;
    outcome
}

fn animate(
    ctx: &mut SearchContext,
    config: &Config,
    sink: &mut TerminalSink<std::io::Stdout>,
) -> Result<Vec<PathResult>, Box<dyn Error>> {
    let mut results = Vec::new();
    for alg in config.selection.algorithms() {
        ctx.clear_marks();
        sink.draw_grid(ctx.grid())?;
        sink.draw_status(config.size, &format!("{alg}: searching..."))?;
        let result = ctx.run(alg, sink)?;
        if let Some(err) = sink.take_error() {
            return Err(err.into());
        }
        sink.draw_status(config.size, &summary(&result))?;
        results.push(result);
        // Hold the finished frame before the next algorithm repaints it.
        thread::sleep(config.delay * 100);
    }
    Ok(results)
}

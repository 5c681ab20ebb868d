use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use log::{info, warn};
use serde_json::{json, Value};

use crate::{
    checker::{check_clique, CheckerResult},
    error::SearchError,
    graph::VertexId,
    loader::{load_graph_with_stack, InstanceFormat, DEFAULT_LOADER_STACK},
    search::{bron_kerbosch, Variant},
    search::stopping::{NeverStoppingCriterion, StoppingCriterion, TimeStoppingCriterion},
    sink::{CliqueCollector, CliqueSink, PrintSink},
};

/// exit code of a complete run
pub const EXIT_SUCCESS:i32 = 0;
/// exit code when the arguments or the instance are invalid
pub const EXIT_INVALID_INPUT:i32 = 1;
/// exit code when the time limit is reached
pub const EXIT_CANCELLED:i32 = 2;

/** parameters of the command line tool */
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// instance file
    pub inst_filename: PathBuf,
    /// instance format (None: guessed from the extension)
    pub format: Option<InstanceFormat>,
    /// variants to run, in this order
    pub variants: Vec<Variant>,
    /// time limit in seconds (None: complete enumeration)
    pub time_limit: Option<f32>,
    /// stack size of the loader thread
    pub loader_stack: usize,
    /// file in which cliques are written
    pub sol_file: Option<String>,
    /// file in which statistics are written
    pub perf_file: Option<String>,
    /// check every clique
    pub check: bool,
    /// do not print the cliques
    pub quiet: bool,
}

/** reads command line input */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let inst_filename = main_args.value_of("instance")
        .ok_or_else(|| anyhow!("missing instance file"))?;
    let format = match main_args.value_of("type").unwrap_or("auto") {
        "auto" => None,
        t => Some(t.parse::<InstanceFormat>().map_err(|e| anyhow!(e))?),
    };
    let variants = match main_args.value_of("algorithm").unwrap_or("pivot") {
        "both" => vec![Variant::Naive, Variant::Pivot],
        v => vec![v.parse::<Variant>().map_err(|e| anyhow!(e))?],
    };
    let time_limit = match main_args.value_of("time") {
        None => None,
        Some(t) => Some(t.parse::<f32>().with_context(|| format!("unable to parse the time given: {}", t))?),
    };
    let loader_stack = match main_args.value_of("stack") {
        None => DEFAULT_LOADER_STACK,
        Some(s) => s.parse::<usize>()
            .with_context(|| format!("unable to parse the stack size given: {}", s))?
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow!("stack size too large: {} MB", s))?,
    };
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    Ok(Params {
        inst_filename: PathBuf::from(inst_filename),
        format,
        variants,
        time_limit,
        loader_stack,
        sol_file,
        perf_file,
        check: main_args.is_present("check"),
        quiet: main_args.is_present("quiet"),
    })
}

/** writes a string encoding the cliques (one clique per line) */
pub fn cliques_to_string(cliques:&[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for clique in cliques {
        let line:Vec<String> = clique.iter().map(|v| v.to_string()).collect();
        res += line.join(" ").as_str();
        res += "\n";
    }
    res
}

/// exports search results to files
pub fn export_results(
    cliques:&[Vec<VertexId>],
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<()> {
    if let Some(filename) = perf_file {
        let content = serde_json::to_string_pretty(stats)?;
        fs::write(filename, content)
            .with_context(|| format!("couldn't write the statistics in {}", filename))?;
    }
    if let Some(filename) = sol_file {
        fs::write(filename, cliques_to_string(cliques))
            .with_context(|| format!("couldn't write the cliques in {}", filename))?;
    }
    Ok(())
}

/** reads an instance, enumerates its maximal cliques and prints them in out.
Returns the exit code (`EXIT_SUCCESS`, or `EXIT_CANCELLED` if a search reached the time limit).

# Errors
 - the instance cannot be loaded
 - the results cannot be written
*/
pub fn run<W:Write>(params:&Params, out:&mut W) -> Result<i32> {
    let t_parse = Instant::now();
    let graph = load_graph_with_stack(&params.inst_filename, params.format, params.loader_stack)
        .with_context(|| format!("unable to load {}", params.inst_filename.display()))?;
    let time_parsed = t_parse.elapsed();
    graph.display_statistics();

    let mut all_stats = Vec::new();
    let mut cliques:Vec<Vec<VertexId>> = Vec::new();
    let mut cancelled = false;
    for variant in &params.variants {
        writeln!(out, "--{}--", variant)?;
        let stopping:Box<dyn StoppingCriterion> = match params.time_limit {
            None => Box::new(NeverStoppingCriterion),
            Some(t) => Box::new(TimeStoppingCriterion::new(t)),
        };
        let mut printer = PrintSink::new(&mut *out, "Clique:");
        let mut collector = CliqueCollector::default();
        let mut nb_invalid = 0;
        let t_search = Instant::now();
        let res = {
            let mut sink = |clique:&[VertexId]| {
                if !params.quiet { printer.accept(clique); }
                if params.check {
                    match check_clique(&graph, clique) {
                        CheckerResult::Ok(_) => {},
                        reason => {
                            warn!("invalid clique {:?} (reason: {:?})", clique, reason);
                            nb_invalid += 1;
                        }
                    }
                }
                if params.sol_file.is_some() { collector.accept(clique); }
            };
            bron_kerbosch(&graph, *variant, &mut sink, stopping.as_ref())
        };
        let time_searched = t_search.elapsed();
        drop(printer);
        writeln!(
            out, "Elapsed time:\n\tParser:\t\t{:?}\n\tBronKerbosch ({}):\t{:?}",
            time_parsed, variant, time_searched
        )?;
        if nb_invalid > 0 {
            warn!("{} invalid cliques reported", nb_invalid);
        }
        cliques = collector.into_cliques();
        match res {
            Ok(stats) => {
                writeln!(out, "{} maximal cliques (largest: {})", stats.nb_cliques, stats.largest_clique)?;
                all_stats.push(json!(stats));
            },
            Err(e @ SearchError::Cancelled { .. }) => {
                writeln!(out, "{}", e)?;
                cancelled = true;
                break;
            },
        }
    }

    let stats = json!({
        "inst_name": params.inst_filename.display().to_string(),
        "nb_vertices": graph.nb_vertices(),
        "nb_edges": graph.nb_edges(),
        "time_parsed": time_parsed.as_secs_f32(),
        "searches": all_stats,
        "cancelled": cancelled,
    });
    export_results(&cliques, &stats, params.perf_file.as_deref(), params.sol_file.as_deref())?;
    Ok(if cancelled { EXIT_CANCELLED } else { EXIT_SUCCESS })
}

/** reads the parameters and runs the tool. Errors are printed on stderr.
Returns the exit code.
*/
pub fn execute<W:Write>(main_args:&ArgMatches, out:&mut W) -> i32 {
    match read_params(main_args).and_then(|params| run(&params, out)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            EXIT_INVALID_INPUT
        }
    }
}

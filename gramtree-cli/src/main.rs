//! Command-line interface for gramtree
//! This binary derives input strings against a context-free grammar file and
//! prints, per input: the token sequence, the full derivation trace, the
//! verdict, and (on success) the syntax tree.
//!
//! Usage:
//!   gramtree `<grammar-file>` "string" ["string" ...]    - Derive literal strings
//!   gramtree `<grammar-file>` `<strings-file>`           - Derive each line of a file

use clap::error::ErrorKind;
use clap::{Arg, Command};
use gramtree_config::{GramtreeConfig, Loader};
use gramtree_parser::gramtree::formats::{dot, treeviz};
use gramtree_parser::{load_grammar, DeriveOptions, Pipeline, Report};
use std::fs;
use std::path::{Path, PathBuf};

fn command() -> Command {
    Command::new("gramtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derives strings against a context-free grammar and draws their syntax trees")
        .arg(
            Arg::new("grammar")
                .help("Path to the grammar file (one `LHS -> alt | alt` rule per line)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("inputs")
                .help("Strings to derive, or a single path to a newline-separated strings file")
                .required(true)
                .num_args(1..)
                .index(2),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .short('s')
                .help("Start symbol (overrides the configured default)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: text or json")
                .default_value("text"),
        )
        .arg(
            Arg::new("emit-dot")
                .long("emit-dot")
                .value_name("DIR")
                .help("Write a Graphviz .dot file per accepted input into DIR"),
        )
}

fn main() {
    let matches = match command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Too few or malformed arguments: usage message, exit code 1
            let _ = err.print();
            std::process::exit(1);
        }
    };

    if let Err(message) = run(&matches) {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<(), String> {
    let config = load_config(matches)?;

    let grammar_path = matches.get_one::<String>("grammar").expect("required");
    let grammar = load_grammar(grammar_path).map_err(|err| err.to_string())?;

    let inputs = resolve_inputs(matches)?;

    let options = DeriveOptions {
        start_symbol: config.derive.start_symbol.clone(),
        max_depth: config.derive.max_depth,
    };
    let pipeline = Pipeline::new(grammar, options);

    let format = matches.get_one::<String>("format").expect("defaulted");
    match format.as_str() {
        "text" => handle_text_output(matches, &config, &pipeline, &inputs),
        "json" => handle_json_output(&pipeline, &inputs),
        other => Err(format!(
            "format '{}' is not supported (available: text, json)",
            other
        )),
    }
}

/// Layer configuration: embedded defaults, then an optional user file, then
/// the `--start` override.
fn load_config(matches: &clap::ArgMatches) -> Result<GramtreeConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(start) = matches.get_one::<String>("start") {
        loader = loader
            .set_override("derive.start_symbol", start.as_str())
            .map_err(|err| err.to_string())?;
    }
    loader.build().map_err(|err| err.to_string())
}

/// A single input naming an existing file is a strings file, one input per
/// non-blank line; anything else is taken as literal strings.
fn resolve_inputs(matches: &clap::ArgMatches) -> Result<Vec<String>, String> {
    let inputs = matches
        .get_many::<String>("inputs")
        .expect("required")
        .cloned()
        .collect::<Vec<_>>();

    if inputs.len() == 1 && Path::new(&inputs[0]).is_file() {
        let content = fs::read_to_string(&inputs[0])
            .map_err(|err| format!("cannot read strings file '{}': {}", inputs[0], err))?;
        return Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect());
    }

    Ok(inputs)
}

fn handle_text_output(
    matches: &clap::ArgMatches,
    config: &GramtreeConfig,
    pipeline: &Pipeline,
    inputs: &[String],
) -> Result<(), String> {
    println!("=== GRAMMAR ===");
    print!("{}", pipeline.grammar());

    for (index, input) in inputs.iter().enumerate() {
        let report = pipeline.run(input).map_err(|err| err.to_string())?;

        println!();
        println!("{}", "=".repeat(50));
        println!("ANALYSIS #{}: {}", index + 1, input);
        println!("{}", "=".repeat(50));
        println!("TOKENS: {:?}", report.tokens);

        println!();
        println!("=== DERIVATION ===");
        for entry in &report.analysis.trace {
            println!("{}", entry.render(&config.trace.indent));
        }

        println!();
        println!("Verdict: {}", report.analysis.verdict);

        if let Some(tree) = report.analysis.tree.as_ref().filter(|_| report.analysis.verdict.is_accepted()) {
            println!();
            print!("{}", treeviz::render(tree, config.render.max_label_chars));

            if let Some(dir) = matches.get_one::<String>("emit-dot") {
                let path = emit_dot_file(dir, index + 1, &report, config)?;
                println!();
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn emit_dot_file(
    dir: &str,
    index: usize,
    report: &Report,
    config: &GramtreeConfig,
) -> Result<PathBuf, String> {
    let tree = report.analysis.tree.as_ref().expect("caller checked");
    let dir = PathBuf::from(dir);
    fs::create_dir_all(&dir)
        .map_err(|err| format!("cannot create '{}': {}", dir.display(), err))?;

    let path = dir.join(format!("syntax_tree_{}.dot", index));
    let rendered = dot::render(tree, config.render.node_shape.as_str());
    fs::write(&path, rendered)
        .map_err(|err| format!("cannot write '{}': {}", path.display(), err))?;
    Ok(path)
}

fn handle_json_output(pipeline: &Pipeline, inputs: &[String]) -> Result<(), String> {
    let mut results = Vec::new();
    for input in inputs {
        let report = pipeline.run(input).map_err(|err| err.to_string())?;
        results.push(serde_json::json!({
            "input": input,
            "tokens": report.tokens,
            "analysis": report.analysis,
        }));
    }

    let output = serde_json::json!({
        "grammar": pipeline.grammar().to_string(),
        "results": results,
    });
    let formatted = serde_json::to_string_pretty(&output).map_err(|err| err.to_string())?;
    println!("{}", formatted);
    Ok(())
}

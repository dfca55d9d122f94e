//! Command-line driver: read `.idx` sources, write a collated `.ind` index.
//!
//! Option handling is deliberately minimal; the library does the work.

use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use index_oxide::{
    Collator, EntryStore, Error, OutputIndex, ProcessingOptions, Result, StyleSheet,
};

struct Args {
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    style: Option<PathBuf>,
    sort: String,
    options: ProcessingOptions,
    quiet: bool,
}

fn usage() {
    eprintln!(
        "usage: index_oxide [-c] [-q] [-r] [-m] [-strict] [-o <ind>] [-s <style.json>] \
         [-z <sort>] <input.idx>...

  -c        trim surrounding whitespace from entry keys
  -q        quiet: suppress warnings
  -r        disable automatic page ranges
  -m        merge adjacent pages across different encapsulators
  -strict   keep differently encapsulated pages strictly separated
  -o        output file (default: first input with .ind extension)
  -s        JSON style sheet
  -z        sort method: reading/pinyin, stroke/bihua, radical/bushou"
    );
}

fn parse_args() -> Option<Args> {
    let mut args = Args {
        inputs: Vec::new(),
        output: None,
        style: None,
        sort: "reading".to_string(),
        options: ProcessingOptions::default(),
        quiet: false,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" => args.options.compress = true,
            "-q" => args.quiet = true,
            "-r" => args.options.disable_range = true,
            "-m" => args.options.merge_mixed_encaps = true,
            "-strict" => args.options.strict = true,
            "-o" => args.output = Some(PathBuf::from(iter.next()?)),
            "-s" => args.style = Some(PathBuf::from(iter.next()?)),
            "-z" => args.sort = iter.next()?,
            "-h" | "--help" => return None,
            flag if flag.starts_with('-') => {
                eprintln!("unknown option: {}", flag);
                return None;
            }
            input => args.inputs.push(PathBuf::from(input)),
        }
    }
    if args.inputs.is_empty() {
        return None;
    }
    Some(args)
}

/// Missing inputs without an extension get the default `.idx` appended.
fn resolve_input(path: &Path) -> PathBuf {
    if !path.exists() && path.extension().is_none() {
        path.with_extension("idx")
    } else {
        path.to_path_buf()
    }
}

fn load_styles(path: Option<&Path>) -> Result<StyleSheet> {
    match path {
        Some(path) => {
            log::info!("reading style sheet {}", path.display());
            let text = fs::read_to_string(path)?;
            serde_json::from_str(&text)
                .map_err(|e| Error::Style(format!("{}: {}", path.display(), e)))
        }
        None => Ok(StyleSheet::default()),
    }
}

fn run(args: &Args) -> Result<()> {
    let collator = Collator::from_name(&args.sort)?;
    let styles = load_styles(args.style.as_deref())?;

    let mut store = EntryStore::new();
    let (mut accepted, mut rejected) = (0, 0);
    for input in &args.inputs {
        let path = resolve_input(input);
        log::info!("reading input file {}", path.display());
        let text = fs::read_to_string(&path)?;
        let (a, r) =
            store.read_source(&path.display().to_string(), &text, &styles.input, &args.options);
        accepted += a;
        rejected += r;
    }
    log::info!(
        "{} entries after merging ({} accepted, {} rejected)",
        store.len(),
        accepted,
        rejected
    );

    log::info!("sorting...");
    let index = OutputIndex::build(store.into_entries(), collator, &styles.output, &args.options);

    let output = match &args.output {
        Some(path) => path.clone(),
        None => resolve_input(&args.inputs[0]).with_extension("ind"),
    };
    let file = fs::File::create(&output)?;
    let mut writer = BufWriter::new(file);
    index.write(&mut writer, &styles.output)?;
    writer.flush()?;
    log::info!("output written to {}", output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = match parse_args() {
        Some(args) => args,
        None => {
            usage();
            process::exit(2);
        }
    };
    if args.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        process::exit(1);
    }
}

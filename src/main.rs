mod cli;
mod cycom;
mod folders;
mod fsio;
mod git;
mod loc;
mod model;
mod renames;
mod report;
mod stats;
mod walker;

#[cfg(test)]
mod testutil;

use std::error::Error;

use clap::Parser;

use cli::{Cli, OutputFormat};
use fsio::{FileAccess, SystemIo};
use report::ReportContext;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let io = SystemIo;

    println!("Analyzing commits...");
    let analysis = walker::run(&cli.root, &io, &cli.ignored_extensions)?;

    let ctx = ReportContext {
        title: cli.title.clone(),
        number_of_files: cli.number_of_files,
    };

    for format in &cli.formats {
        let path = cli
            .output
            .join(format!("{}.{}", cli.report_filename, format.extension()));
        write_report(*format, &io, &path, &ctx, &analysis)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn write_report(
    format: OutputFormat,
    io: &dyn FileAccess,
    path: &std::path::Path,
    ctx: &ReportContext,
    analysis: &model::Analysis,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => report::text::write(io, path, ctx, analysis),
        OutputFormat::Markdown => report::markdown::write(io, path, ctx, analysis),
        OutputFormat::Json => report::json::write(io, path, analysis),
        OutputFormat::Html => report::html::write(io, path, ctx, analysis),
    }
}

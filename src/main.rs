//! rollrs command-line interface
//!
//! Reads a table from an xlsx sheet or a cached JSON snapshot, rolls the
//! requested statistics over one column, clears the window-boundary rows,
//! and writes the result to the output workbook as `edited-{insheet}`.

use clap::Parser;

use rollrs::io::{read_excel, read_snapshot, write_excel, write_snapshot};
use rollrs::{Result, Roller, Statistic};

/// Rolling-window aggregation over spreadsheet tables
#[derive(Parser, Debug)]
#[command(name = "rollrs")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input .xlsx file or JSON snapshot
    #[arg(short, long)]
    infile: String,

    /// Output .xlsx file
    #[arg(short, long, default_value = "new.xlsx")]
    outfile: String,

    /// Comma-separated list of input columns to retain
    #[arg(short, long)]
    colnames: Option<String>,

    /// Column to aggregate
    #[arg(short = 'a', long = "column")]
    column: String,

    /// Comma-separated list of statistics to apply
    #[arg(short, long, default_value = "mean,std")]
    functions: String,

    /// Rolling interval to use for aggregation
    #[arg(short = 'r', long, default_value = "5")]
    interval: usize,

    /// Sheet name to read from the input file
    #[arg(short = 's', long)]
    insheet: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {}", err);
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let insheet = args.insheet.as_deref();
    let outsheet = match insheet {
        Some(name) => format!("edited-{}", name),
        None => "edited".to_string(),
    };

    // Anything that is not an xlsx file is treated as a snapshot
    let df = if args.infile.ends_with(".xlsx") {
        let colnames: Option<Vec<&str>> = args
            .colnames
            .as_deref()
            .map(|list| list.split(',').map(str::trim).collect());
        log::info!("reading {} (sheet: {:?})", args.infile, insheet);
        let df = read_excel(&args.infile, insheet, true, 0, colnames.as_deref())?;
        // Cache the loaded table so later runs can skip the workbook parse
        let cache = format!("{}.json", outsheet);
        write_snapshot(&df, &cache)?;
        log::info!("cached snapshot at {}", cache);
        df
    } else {
        log::info!("reading snapshot {}", args.infile);
        read_snapshot(&args.infile)?
    };

    let functions = args
        .functions
        .split(',')
        .map(|name| name.parse::<Statistic>())
        .collect::<Result<Vec<_>>>()?;

    let roller = Roller::new(functions, args.column.as_str(), args.interval)?;
    let result = roller.run(&df)?;

    write_excel(&result, &args.outfile, Some(&outsheet))?;
    log::info!("wrote sheet '{}' to {}", outsheet, args.outfile);

    Ok(())
}

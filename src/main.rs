use log::{error, info, LevelFilter};
use search_trees::benchmark::{self, BenchmarkConfig, USAGE};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::process;

fn init_logging(level: LevelFilter) {
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to initialize logging: {}", err);
    }
}

fn main() {
    let config = match BenchmarkConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            init_logging(LevelFilter::Info);
            error!("{}", err);
            eprintln!("{}", USAGE);
            process::exit(1);
        },
    };

    init_logging(if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let measurements = benchmark::run(&config);

    println!("{:<6} {:>8} {:<8} {:>14} {:>8}", "tree", "size", "op", "seconds", "height");
    for measurement in &measurements {
        println!(
            "{:<6} {:>8} {:<8} {:>14.6} {:>8}",
            measurement.tree.name(),
            measurement.size,
            measurement.operation.name(),
            measurement.elapsed.as_secs_f64(),
            measurement.height,
        );
    }

    if let Some(path) = &config.output {
        let result = File::create(path)
            .map_err(benchmark::Error::from)
            .and_then(|file| benchmark::write_report(BufWriter::new(file), &measurements));
        match result {
            Ok(()) => info!("report written to {}", path.display()),
            Err(err) => {
                error!("failed to write report to {}: {}", path.display(), err);
                process::exit(1);
            },
        }
    }
}

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, Command};
use tracing::{info, warn};

use bipartite::coloring::check_bipartite;
use bipartite::logging;
use bipartite::report::{Report, ReportFormat};
use bipartite::util::samples::{self, SAMPLE_NAMES};

fn main() -> Result<()> {
    let matches = Command::new("conflict_groups")
        .about("Splits a conflict graph into two groups with no conflict inside either group")
        .arg(
            Arg::new("sample")
                .long("sample")
                .short('s')
                .help("Built-in conflict graph to check")
                .value_parser(SAMPLE_NAMES)
                .default_value("employees"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(ReportFormat::NAMES)
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log traversal details to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init(matches.get_flag("verbose"));

    let sample_name = matches.get_one::<String>("sample").unwrap();
    let sample =
        samples::by_name(sample_name).ok_or_else(|| anyhow!("unknown sample {sample_name}"))?;
    let format = ReportFormat::from_name(matches.get_one::<String>("format").unwrap())
        .context("unknown output format")?;

    if !sample.graph().is_symmetric() {
        warn!(sample = %sample_name, "conflicts are not symmetric; each is only checked from one side");
    }
    info!(
        sample = %sample_name,
        nodes = sample.n(),
        edges = sample.graph().undirected_edges().len(),
        "checking"
    );

    let result = check_bipartite(&sample);
    let report = Report::new(&sample, &result)
        .with_context(|| format!("cannot check sample {sample_name}"))?;
    info!(summary = %report.summary(), "checked");

    print!("{}", report.render(format)?);
    if format == ReportFormat::Json {
        println!();
    }
    Ok(())
}

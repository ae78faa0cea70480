use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use pizza_slicer::cover::{submission, Cover};
use pizza_slicer::grid::{Grid, Limits};
use pizza_slicer::{GreedySlicer, SlicerConfig, SlicingAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let command = match Command::parse(env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("slicer: {err}");
            Command::print_help();
            std::process::exit(2);
        }
    };

    // Logs go to stderr so stdout stays a clean submission
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_slicer=info,slicer=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = command.run() {
        eprintln!("slicer: {err:#}");
        std::process::exit(1);
    }
}

enum Command {
    Solve {
        input: PathBuf,
        output: Option<PathBuf>,
        config: SlicerConfig,
    },
    Verify {
        input: PathBuf,
        submission: PathBuf,
    },
    Generate {
        rows: usize,
        columns: usize,
        limits: Limits,
        seed: Option<u64>,
        tomato_ratio: f64,
    },
}

impl Command {
    fn parse<I, T>(args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut args = args.map(Into::into);
        let name = args.next().ok_or_else(|| "missing command".to_string())?;
        if name == "--help" || name == "-h" {
            Command::print_help();
            std::process::exit(0);
        }

        let mut positional = Vec::new();
        let mut output = None;
        let mut config = SlicerConfig::default();
        let mut seed = None;
        let mut tomato_ratio = 0.5;

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                Command::print_help();
                std::process::exit(0);
            } else if arg == "--output" || arg == "-o" {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value after {arg}"))?;
                output = Some(PathBuf::from(value));
            } else if arg == "--no-expand" {
                config.expand = false;
            } else if arg == "--no-subdivide" {
                config.subdivide_remainder = false;
            } else if arg == "--max-depth" {
                config.max_depth = parse_value(args.next(), "--max-depth")?;
            } else if arg == "--seed" {
                seed = Some(parse_value(args.next(), "--seed")?);
            } else if arg == "--tomato-ratio" {
                tomato_ratio = parse_value(args.next(), "--tomato-ratio")?;
            } else if arg.starts_with('-') {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positional.push(arg);
            }
        }

        match (name.as_str(), positional.as_slice()) {
            ("solve", [input]) => Ok(Command::Solve {
                input: PathBuf::from(input),
                output,
                config,
            }),
            ("verify", [input, submission]) => Ok(Command::Verify {
                input: PathBuf::from(input),
                submission: PathBuf::from(submission),
            }),
            ("generate", [rows, columns, min_each, max_cells]) => {
                let limits = Limits::new(
                    parse_value(Some(min_each.clone()), "L")?,
                    parse_value(Some(max_cells.clone()), "H")?,
                )
                .map_err(|err| err.to_string())?;
                Ok(Command::Generate {
                    rows: parse_value(Some(rows.clone()), "rows")?,
                    columns: parse_value(Some(columns.clone()), "columns")?,
                    limits,
                    seed,
                    tomato_ratio,
                })
            }
            ("solve" | "verify" | "generate", _) => {
                Err(format!("wrong number of arguments for '{name}'"))
            }
            (other, _) => Err(format!("unknown command '{other}'")),
        }
    }

    fn print_help() {
        println!(
            "\
Usage: slicer <command> [options]

Commands:
  solve <input>                       Slice a grid and print the submission
  verify <input> <submission>         Check a submission and print its score
  generate <rows> <columns> <L> <H>   Print a random grid in input format

Options:
  -o, --output <FILE>                 Write the submission to FILE (solve)
  --no-expand                         Skip slice expansion (solve)
  --no-subdivide                      Skip the remainder pass (solve)
  --max-depth <N>                     Cap remainder recursion depth (solve)
  --seed <N>                          RNG seed (generate)
  --tomato-ratio <P>                  Tomato probability, default 0.5 (generate)
  -h, --help                          Print this help message

Logging is controlled by RUST_LOG (default: pizza_slicer=info).
"
        );
    }

    fn run(self) -> Result<()> {
        match self {
            Command::Solve {
                input,
                output,
                config,
            } => {
                let grid = read_grid(&input)?;
                let cover = GreedySlicer::new(config)
                    .cut(&grid)
                    .context("slicing failed")?;
                info!(stats = %cover.stats(), "solved {}", input.display());
                match output {
                    Some(path) => {
                        let file = fs::File::create(&path)
                            .with_context(|| format!("cannot create {}", path.display()))?;
                        cover
                            .write_submission(io::BufWriter::new(file))
                            .with_context(|| format!("cannot write {}", path.display()))?;
                    }
                    None => cover
                        .write_submission(io::stdout().lock())
                        .context("cannot write submission")?,
                }
                Ok(())
            }
            Command::Verify { input, submission } => {
                let grid = read_grid(&input)?;
                let text = fs::read_to_string(&submission)
                    .with_context(|| format!("cannot read {}", submission.display()))?;
                let bounds = submission::parse(&text)
                    .with_context(|| format!("cannot parse {}", submission.display()))?;
                let cover = Cover::from_bounds(&grid, bounds)
                    .with_context(|| format!("{} is not a valid cut", submission.display()))?;
                println!("{}", cover.claimed_cells());
                info!(stats = %cover.stats(), "submission accepted");
                Ok(())
            }
            Command::Generate {
                rows,
                columns,
                limits,
                seed,
                tomato_ratio,
            } => {
                if !(0.0..=1.0).contains(&tomato_ratio) {
                    bail!("tomato ratio must lie in [0, 1], got {tomato_ratio}");
                }
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                let grid = Grid::random(rows, columns, limits, tomato_ratio, &mut rng)
                    .context("cannot generate grid")?;
                let mut stdout = io::stdout().lock();
                write!(stdout, "{grid}").context("cannot write grid")?;
                stdout.flush().context("cannot write grid")?;
                Ok(())
            }
        }
    }
}

fn parse_value<T: std::str::FromStr>(value: Option<String>, name: &str) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("missing value for {name}"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value '{value}' for {name}"))
}

fn read_grid(path: &Path) -> Result<Grid> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    text.parse()
        .with_context(|| format!("cannot parse grid in {}", path.display()))
}

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::{fs, io::{self, Write}, path::PathBuf, process, sync::Arc};

use compressor::{
    Code,
    Compressor,
    lzw::LZW
};

use harness::{
    Harness,
    pack::{self, CodeWidth},
    report::compression_ratio,
    sample::{Mode, Sample},
    suite::builtin_samples,
};

enum Input {
    Text(String),
    File(PathBuf),
}

enum CodesInput {
    List(String),
    File(PathBuf),
}

enum Task {
    Encode { source: Input, output: Option<PathBuf> },
    Decode { source: CodesInput, output: Option<PathBuf> },
    Suite { threads: usize, dir: Option<PathBuf> },
}

struct Args {
    task: Task,
    mode: Mode,
    width: CodeWidth,
}


fn get_compressor() -> Arc<dyn Compressor> {
    let compressor: Arc<dyn Compressor> = Arc::new(LZW::new());
    compressor
}

fn width_arg() -> Arg {
    Arg::new("width")
        .short('w')
        .long("width")
        .value_parser(clap::value_parser!(usize))
        .default_value("2")
        .help("Bytes per packed code: 2 or 4")
}

fn bytes_arg() -> Arg {
    Arg::new("bytes")
        .short('b')
        .long("bytes")
        .action(ArgAction::SetTrue)
        .help("Treat the input as raw bytes instead of characters")
}

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .num_args(1)
        .value_parser(clap::value_parser!(PathBuf))
        .help("Write the result to this file instead of stdout")
}

fn source_arg(help: &'static str) -> Arg {
    Arg::new("source")
        .short('s')
        .long("source")
        .num_args(1)
        .value_parser(clap::value_parser!(PathBuf))
        .help(help)
}

fn command() -> Command {
    Command::new("lzw")
        .about("LZW compression of text into dictionary codes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("encode")
            .about("Compress text into a code sequence")
            .arg(Arg::new("text")
                .short('t')
                .long("text")
                .num_args(1)
                .conflicts_with("source")
                .required_unless_present("source")
                .help("Text to compress"))
            .arg(source_arg("File to compress"))
            .arg(output_arg())
            .arg(bytes_arg())
            .arg(width_arg()))
        .subcommand(Command::new("decode")
            .about("Reconstruct text from a code sequence")
            .arg(Arg::new("codes")
                .short('c')
                .long("codes")
                .num_args(1)
                .conflicts_with("source")
                .required_unless_present("source")
                .help("Comma or space separated codes"))
            .arg(source_arg("File of packed codes"))
            .arg(output_arg())
            .arg(bytes_arg())
            .arg(width_arg()))
        .subcommand(Command::new("suite")
            .about("Run the built-in round-trip cases and report compression ratios")
            .arg(Arg::new("threads")
                .short('T')
                .long("threads")
                .value_parser(clap::value_parser!(usize))
                .default_value("4")
                .help("Number of worker threads. Default: 4"))
            .arg(Arg::new("dir")
                .short('d')
                .long("dir")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Also round-trip every file under this directory"))
            .arg(width_arg()))
}

fn get_args() -> anyhow::Result<Args> {
    let matches = command().get_matches();

    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("no subcommand given"))?;

    let width_bytes = *sub.get_one::<usize>("width").unwrap_or(&2);
    let width = CodeWidth::from_bytes(width_bytes)
        .ok_or_else(|| anyhow!("unsupported code width {}, expected 2 or 4", width_bytes))?;

    let mode = if sub.try_get_one::<bool>("bytes").ok().flatten().copied().unwrap_or(false) {
        Mode::Bytes
    } else {
        Mode::Text
    };

    let task = match name {
        "encode" => Task::Encode {
            source: match sub.get_one::<String>("text") {
                Some(text) => Input::Text(text.clone()),
                None => Input::File(required_path(sub, "source")?),
            },
            output: sub.get_one::<PathBuf>("output").cloned(),
        },
        "decode" => Task::Decode {
            source: match sub.get_one::<String>("codes") {
                Some(codes) => CodesInput::List(codes.clone()),
                None => CodesInput::File(required_path(sub, "source")?),
            },
            output: sub.get_one::<PathBuf>("output").cloned(),
        },
        "suite" => Task::Suite {
            threads: *sub.get_one::<usize>("threads").unwrap_or(&4),
            dir: sub.get_one::<PathBuf>("dir").cloned(),
        },
        other => return Err(anyhow!("unknown subcommand {}", other)),
    };

    Ok(Args { task, mode, width })
}

fn required_path(matches: &ArgMatches, id: &str) -> anyhow::Result<PathBuf> {
    matches
        .get_one::<PathBuf>(id)
        .cloned()
        .ok_or_else(|| anyhow!("--{} is required", id))
}

fn parse_codes(list: &str) -> anyhow::Result<Vec<Code>> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<Code>().with_context(|| format!("invalid code {:?}", token)))
        .collect()
}

fn format_codes(codes: &[Code]) -> String {
    codes.iter().map(|code| code.to_string()).collect::<Vec<_>>().join(",")
}

fn encode(compressor: Arc<dyn Compressor>, source: Input, output: Option<PathBuf>, mode: Mode, width: CodeWidth) -> anyhow::Result<()> {
    let sample = match source {
        Input::Text(text) => Sample::from_text("text", &text, mode),
        Input::File(path) => Sample::from_file(&path, mode)?,
    };
    let length = sample.size();

    let codes = sample
        .compress(compressor)?
        .take_codes()
        .unwrap_or_default();

    let ratio = compression_ratio(length, codes.len(), width.bytes());
    info!("{} bytes -> {} codes, compression ratio: {}%", length, codes.len(), (ratio * 100.0) as i64);

    match output {
        Some(path) => pack::store_codes(&path, &codes, width)?,
        None => println!("{}", format_codes(&codes)),
    }

    Ok(())
}

fn decode(compressor: Arc<dyn Compressor>, source: CodesInput, output: Option<PathBuf>, mode: Mode, width: CodeWidth) -> anyhow::Result<()> {
    let codes = match source {
        CodesInput::List(list) => parse_codes(&list)?,
        CodesInput::File(path) => pack::load_codes(&path, width)?,
    };
    let n_codes = codes.len();

    let body = Sample::from_codes("codes", codes, mode).decompress(compressor)?;
    info!("{} codes -> {} bytes", n_codes, body.len());

    match output {
        Some(path) => {
            fs::write(&path, &body).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&body)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

fn suite(compressor: Arc<dyn Compressor>, threads: usize, dir: Option<PathBuf>, width: CodeWidth) -> anyhow::Result<bool> {
    let mut harness = Harness::new(threads, width, compressor);

    for sample in builtin_samples() {
        harness.add_sample(sample);
    }
    if let Some(dir) = dir {
        harness.add_dir(&dir)?;
    }

    let reports = harness.run();
    for report in &reports {
        println!("{}", report);
    }

    let failed = reports.iter().filter(|report| !report.passed()).count();
    if failed > 0 {
        error!("{} of {} round trips failed", failed, reports.len());
    }

    Ok(failed == 0)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lzw_text=info,harness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let args = get_args()?;
    let compressor = get_compressor();

    match args.task {
        Task::Encode { source, output } => encode(compressor, source, output, args.mode, args.width)?,
        Task::Decode { source, output } => decode(compressor, source, output, args.mode, args.width)?,
        Task::Suite { threads, dir } => {
            if !suite(compressor, threads, dir, args.width)? {
                process::exit(1);
            }
        }
    }

    Ok(())
}

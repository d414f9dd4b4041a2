use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use hash_encoder::{Algorithm, Error, Limits, Request, Source, DEFAULT_MAX_FILE_SIZE};

fn cli() -> Command {
    Command::new("hash-encoder")
        .about("Hash text or a file with MD5, SHA-1, SHA-2 or their HMAC variants")
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .value_name("NAME")
                .default_value("md5")
                .help("Algorithm identifier, see --list"),
        )
        .arg(
            Arg::new("key")
                .short('k')
                .long("key")
                .value_name("KEY")
                .help("Secret key for the hmac-* algorithms"),
        )
        .arg(
            Arg::new("text")
                .short('t')
                .long("text")
                .value_name("TEXT")
                .conflicts_with("file")
                .help("Text to hash; read from stdin when neither --text nor --file is given"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("File to hash as raw bytes"),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .value_name("BYTES")
                .value_parser(value_parser!(u64))
                .help("Largest file accepted, in bytes [default: 10 MiB]"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List supported algorithms and exit"),
        )
}

fn run(matches: &ArgMatches, mut stdin: impl Read, out: &mut impl Write) -> Result<(), Error> {
    if matches.get_flag("list") {
        for algorithm in Algorithm::ALL {
            writeln!(out, "{}\t{}", algorithm.id(), algorithm).map_err(Error::Write)?;
        }
        return Ok(());
    }

    let algorithm: Algorithm = matches
        .get_one::<String>("algorithm")
        .map(String::as_str)
        .unwrap_or("md5")
        .parse()?;

    let source = if let Some(path) = matches.get_one::<PathBuf>("file") {
        Source::File(path.clone())
    } else if let Some(text) = matches.get_one::<String>("text") {
        Source::Text(text.clone())
    } else {
        let mut bytes = Vec::new();
        stdin.read_to_end(&mut bytes).map_err(Error::Stdin)?;
        Source::Bytes(bytes)
    };

    let limits = Limits {
        max_file_size: matches
            .get_one::<u64>("max-size")
            .copied()
            .unwrap_or(DEFAULT_MAX_FILE_SIZE),
    };

    let mut request = Request::new(algorithm, source).with_limits(limits);
    if let Some(key) = matches.get_one::<String>("key") {
        request = request.with_key(key.clone());
    }

    writeln!(out, "{}", request.execute()?).map_err(Error::Write)
}

/// Runs the CLI and reports failures on `err`, returning the exit status.
fn exec(matches: &ArgMatches, stdin: impl Read, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match run(matches, stdin, out) {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("{:?}", e);
            let _ = writeln!(err, "error: {}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = cli().get_matches();
    let status = exec(
        &matches,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}

//! An example to resolve URL references against a base.
//!
//! With `--rebase`, the base need not be absolute and the result may be
//! relative. Set `RUST_LOG=url_reference=debug` to see why a reference fails.

use tracing_subscriber::EnvFilter;
use url_reference::resolve::FixedBaseResolver;
use url_reference::{normalize, print, print_with, Profile};

const USAGE: &str = "\
USAGE:
    resolve [FLAGS] [--] BASE REFERENCE...

FLAGS:
    -h, --help          Prints this help
    -r, --rebase        Rebase and normalize instead of resolving
    -a, --ascii         Percent-encode the output to ASCII

ARGS:
    <BASE>              Base URL
    <REFERENCE>...      URL references to resolve
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// Base URL.
    base: String,
    /// URL references.
    references: Vec<String>,
    /// Whether to rebase only.
    rebase: bool,
    /// Whether to produce ASCII output.
    ascii: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut opt = Self::default();
        let mut positional = Vec::new();

        for arg in args.by_ref() {
            match arg.as_str() {
                "--rebase" | "-r" => opt.rebase = true,
                "--ascii" | "-a" => opt.ascii = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                o if o.starts_with('-') => die(format_args!("Unknown option: {}", o)),
                _ => positional.push(arg),
            }
        }
        positional.extend(args);

        let mut positional = positional.into_iter();
        opt.base = positional
            .next()
            .unwrap_or_else(|| die("BASE should be specified"));
        opt.references = positional.collect();
        if opt.references.is_empty() {
            die("At least one REFERENCE should be specified");
        }
        opt
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = CliOpt::parse();
    let profile = if opt.ascii {
        Profile::WHATWG
    } else {
        Profile::URL
    };

    let resolver = match FixedBaseResolver::new(opt.base.as_str()) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse the base {:?}: {}", opt.base, e)),
    };
    println!("base: {}", print(resolver.base()));

    for reference in &opt.references {
        let result = if opt.rebase {
            resolver
                .rebase(reference.as_str())
                .and_then(|url| print_with(&normalize(&url), profile))
        } else {
            resolver
                .resolve_with(reference.as_str(), profile)
                .map(|url| print(&url))
        };
        match result {
            Ok(resolved) => println!("{reference:?} => {resolved}"),
            Err(e) => println!("{reference:?} => ERROR: {e}"),
        }
    }
}

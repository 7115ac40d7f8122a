//! An example to parse a URL reference from the CLI argument.
//!
//! Set `RUST_LOG=url_reference=trace` to see the tokens.

use tracing_subscriber::EnvFilter;
use url_reference::{normalize, parse, percent_encode, print, Mode, Profile, UrlComponents};

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URL

FLAGS:
    -h, --help          Prints this help
    -g, --generic       Parse schemeless references as generic URLs
    -w, --web           Parse schemeless references as web URLs
    -f, --file          Parse schemeless references as file URLs
    -n, --normalize     Normalize the parsed components
    -a, --ascii         Percent-encode the output to ASCII

ARGS:
    <URL>               URL reference
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
#[derive(Debug, Clone)]
struct CliOpt {
    /// URL reference.
    url: String,
    /// Mode for schemeless references.
    mode: Mode,
    /// Whether to normalize.
    normalize: bool,
    /// Whether to produce ASCII output.
    ascii: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut url = None;
        let mut mode = None;
        let mut normalize = false;
        let mut ascii = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--generic" | "-g" => mode = Some(Mode::GENERIC),
                "--web" | "-w" => mode = Some(Mode::WEB),
                "--file" | "-f" => mode = Some(Mode::FILE),
                "--normalize" | "-n" => normalize = true,
                "--ascii" | "-a" => ascii = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if url.replace(arg).is_some() {
                        die("URL can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if url.replace(arg).is_some() {
                die("URL can be specified at most once");
            }
        }

        let url = url.unwrap_or_else(|| die("URL should be specified"));
        let mode = mode.unwrap_or_default();
        Self {
            url,
            mode,
            normalize,
            ascii,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = CliOpt::parse();

    let raw = opt.url.as_str();
    let mut url = match parse(raw, opt.mode) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", raw, e)),
    };
    if opt.normalize {
        url = normalize(&url);
    }
    if opt.ascii {
        url = match percent_encode(&url, Profile::WHATWG) {
            Ok(v) => v,
            Err(e) => die(format_args!("Failed to encode {:?}: {}", raw, e)),
        };
    }

    dump(&url);
    println!("printed: {}", print(&url));
}

/// Prints the components, one per line.
fn dump(url: &UrlComponents) {
    println!("type:    {:?}", url.ord());
    println!("mode:    {:?}", url.mode(Mode::NOSCHEME));
    let fields = [
        ("scheme", url.scheme.clone()),
        ("user", url.user.clone()),
        ("pass", url.pass.clone()),
        ("host", url.host.as_ref().map(ToString::to_string)),
        ("port", url.port.as_ref().map(ToString::to_string)),
        ("drive", url.drive.clone()),
        ("file", url.file.clone()),
        ("query", url.query.clone()),
        ("hash", url.hash.clone()),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            println!("{name:<8} {value:?}");
        }
    }
    println!("root:    {}", url.root);
    println!("dirs:    {:?}", url.dirs);
}

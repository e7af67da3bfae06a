use nulltrace_route::config::parse_separator;
use nulltrace_route::{Route, RouteConfig, RouteError, RouteResolver, RouteResult};
use std::env;
use std::process;

struct Args {
    from: String,
    dest: String,
    offset: usize,
    separator: Option<char>,
    config_path: Option<String>,
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let raw: Vec<String> = env::args().skip(1).collect();
    if raw.is_empty() || raw.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        process::exit(1);
    }

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("[node-route] {}", e);
            print_usage();
            process::exit(1);
        }
    };

    match run(&args) {
        Ok((route, separator)) => print_route(&route, separator, args.json),
        Err(e) => {
            eprintln!("[node-route] {}", e);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: node-route <from> <dest> [--offset N] [--separator C] [--config FILE] [--json]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  node-route /a/b/c /a/b/d/e");
    eprintln!("  node-route --separator '\\' 'C:\\users\\haru\\Documents' 'C:\\users\\haru\\appdata'");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NODE_ROUTE_SEPARATOR      separator character (default '/')");
    eprintln!("  NODE_ROUTE_OFFSET_POLICY  clamp | strict (default clamp)");
}

fn parse_args(raw: &[String]) -> RouteResult<Args> {
    let mut positional = Vec::new();
    let mut offset = 0;
    let mut separator = None;
    let mut config_path = None;
    let mut json = false;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--offset" => {
                let value = next_value(&mut iter, "--offset")?;
                offset = value.parse().map_err(|_| {
                    RouteError::InvalidArgument(format!("--offset expects a number, got '{}'", value))
                })?;
            }
            "--separator" => separator = Some(parse_separator(next_value(&mut iter, "--separator")?)?),
            "--config" => config_path = Some(next_value(&mut iter, "--config")?.to_string()),
            "--json" => json = true,
            _ => positional.push(arg.clone()),
        }
    }

    let [from, dest]: [String; 2] = positional.try_into().map_err(|rest: Vec<String>| {
        RouteError::InvalidArgument(format!("expected <from> and <dest>, got {} path(s)", rest.len()))
    })?;

    Ok(Args {
        from,
        dest,
        offset,
        separator,
        config_path,
        json,
    })
}

fn next_value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> RouteResult<&'a str> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| RouteError::InvalidArgument(format!("{} requires a value", flag)))
}

fn run(args: &Args) -> RouteResult<(Route, char)> {
    let mut config = match &args.config_path {
        Some(path) => RouteConfig::load(path)?,
        None => RouteConfig::default(),
    }
    .with_env_overrides()?;
    if let Some(separator) = args.separator {
        config = config.with_separator(separator);
    }

    let resolver = RouteResolver::new(config)?;
    tracing::debug!(separator = %resolver.separator(), offset = args.offset, "resolving route");
    let route = resolver.compute_route(&args.from, &args.dest, args.offset)?;
    Ok((route, resolver.separator()))
}

fn print_route(route: &Route, separator: char, json: bool) {
    if json {
        match serde_json::to_string(route) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("[node-route] Failed to encode route: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("ascend: {}", route.ascend);
    println!("descend: {}", route.descend.join(&separator.to_string()));
    println!("relative: {}", route.to_relative_path(separator));
}

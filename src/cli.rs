//! Command-line surface
//!
//! Builds the argument parser and runs the subcommands. Each subcommand
//! wraps one exercise; validation subcommands report rejection through a
//! non-success outcome so the binary can exit 1.

use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::numeric;
use crate::phone;
use crate::prices;
use crate::validate;
use crate::CliError;

/// Builds and returns the CLI argument parser.
pub fn build_cli() -> Command {
    Command::new("labkit")
        .version("0.3")
        .about("Validation, formatting, and numeric routines from the web-programming labs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("phone")
                .about("Validate phone numbers and print the canonical 8-XXX-XXX-XX-XX form")
                .arg(
                    Arg::new("number")
                        .value_name("NUMBER")
                        .help("Phone numbers to validate")
                        .num_args(1..)
                        .required(true),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print outcomes as JSON records")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("fib")
                .about("Print the first N Fibonacci numbers")
                .arg(
                    Arg::new("n")
                        .value_name("N")
                        .help("How many numbers to print")
                        .required(true),
                )
                .arg(
                    Arg::new("cubes")
                        .long("cubes")
                        .help("Print cubes of the sequence instead")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("fact")
                .about("Print N!")
                .arg(
                    Arg::new("n")
                        .value_name("N")
                        .help("Value to take the factorial of")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("circle")
                .about("Estimate a circle's area by Monte Carlo sampling")
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .value_name("R")
                        .help("Circle radius")
                        .default_value("1.0"),
                )
                .arg(
                    Arg::new("trials")
                        .long("trials")
                        .value_name("N")
                        .help("Number of sample points")
                        .default_value("10000"),
                ),
        )
        .subcommand(
            Command::new("prices")
                .about("Sum the adult/pensioner/child columns of a price CSV")
                .arg(
                    Arg::new("file")
                        .value_name("FILE")
                        .help("Path to the CSV price table")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("email")
                .about("Check an email address")
                .arg(
                    Arg::new("address")
                        .value_name("ADDRESS")
                        .help("Email address to check")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("password")
                .about("Check a password against the complexity rules")
                .arg(
                    Arg::new("password")
                        .value_name("PASSWORD")
                        .help("Password to check")
                        .required(true),
                ),
        )
}

/// Dispatch a parsed command line. Returns whether all inputs were accepted.
pub fn run(matches: &ArgMatches) -> Result<bool, CliError> {
    match matches.subcommand() {
        Some(("phone", sub)) => run_phone(sub),
        Some(("fib", sub)) => run_fib(sub),
        Some(("fact", sub)) => run_fact(sub),
        Some(("circle", sub)) => run_circle(sub),
        Some(("prices", sub)) => run_prices(sub),
        Some(("email", sub)) => run_email(sub),
        Some(("password", sub)) => run_password(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn run_phone(matches: &ArgMatches) -> Result<bool, CliError> {
    let numbers: Vec<&String> = matches
        .get_many::<String>("number")
        .expect("number is required")
        .collect();

    let outcomes = phone::normalize_all(&numbers);
    let all_valid = outcomes.iter().all(|o| o.is_valid());

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(all_valid);
    }

    for outcome in &outcomes {
        match (&outcome.formatted, outcome.error) {
            (Some(formatted), _) => println!("{}", formatted),
            (None, Some(kind)) => {
                tracing::debug!(input = %outcome.input, tag = kind.tag(), "rejected");
                eprintln!("{}: {} ({})", outcome.input, kind, kind.tag());
            }
            (None, None) => {}
        }
    }
    Ok(all_valid)
}

fn run_fib(matches: &ArgMatches) -> Result<bool, CliError> {
    let n = parse_arg::<usize>(matches, "n")?;
    let cubes = matches.get_flag("cubes");

    // fib(93) is the last Fibonacci number that fits in 64 bits, so at
    // most 94 terms; the cubed sequence overflows at its 34th term
    let limit = if cubes { 33 } else { 94 };
    if n > limit {
        return Err(CliError::InvalidArgument(format!(
            "a sequence of {} terms does not fit in 64 bits (max {})",
            n, limit
        )));
    }

    let seq = if cubes {
        numeric::fibonacci_cubes(n)
    } else {
        numeric::fibonacci(n)
    };

    let rendered: Vec<String> = seq.iter().map(|x| x.to_string()).collect();
    println!("{}", rendered.join(" "));
    Ok(true)
}

fn run_fact(matches: &ArgMatches) -> Result<bool, CliError> {
    let n = parse_arg::<u32>(matches, "n")?;
    if n > 20 {
        // 21! overflows u64
        return Err(CliError::InvalidArgument(format!(
            "factorial of {} does not fit in 64 bits",
            n
        )));
    }
    println!("{}", numeric::factorial_iterative(n));
    Ok(true)
}

fn run_circle(matches: &ArgMatches) -> Result<bool, CliError> {
    let radius = parse_arg::<f64>(matches, "radius")?;
    let trials = parse_arg::<u32>(matches, "trials")?;

    let mut rng = rand::thread_rng();
    let area = numeric::circle_area_monte_carlo(radius, trials, &mut rng);
    println!("{:.4}", area);
    Ok(true)
}

fn run_prices(matches: &ArgMatches) -> Result<bool, CliError> {
    let file = matches.get_one::<String>("file").expect("file is required");
    let totals = prices::sum_prices_file(Path::new(file))?;
    println!(
        "adult: {:.2}  pensioner: {:.2}  child: {:.2}",
        totals.adult, totals.pensioner, totals.child
    );
    Ok(true)
}

fn run_email(matches: &ArgMatches) -> Result<bool, CliError> {
    let address = matches
        .get_one::<String>("address")
        .expect("address is required");

    if validate::is_valid_email(address) {
        println!("{}: ok", address);
        Ok(true)
    } else {
        eprintln!("{}: not a valid email address", address);
        Ok(false)
    }
}

fn run_password(matches: &ArgMatches) -> Result<bool, CliError> {
    let password = matches
        .get_one::<String>("password")
        .expect("password is required");

    match validate::validate_password(password) {
        Ok(()) => {
            println!("ok");
            Ok(true)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(false)
        }
    }
}

fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<T, CliError> {
    let raw = matches
        .get_one::<String>(name)
        .expect("argument has a default or is required");
    raw.parse::<T>()
        .map_err(|_| CliError::InvalidArgument(format!("{}: {:?}", name, raw)))
}

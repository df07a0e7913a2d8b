use date_shift::logging::init_cli_logger;
use date_shift::{
    AddDaysOptions, SkipCalendar, ToDate, add_days, load_excluded_dates_from_csv,
    load_excluded_dates_from_text, load_options_from_json, save_options_to_json, sub_days,
};
use std::io::{self, Write};
use tracing::{info, warn};

const OPTIONS_ENV: &str = "DATE_SHIFT_OPTIONS";

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show current options\n  add <date> <amount>                Add days (dates like 2023-01-06)\n  sub <date> <amount>                Subtract days\n  weekends <on|off>                  Skip Saturdays and Sundays\n  exclude <date> [date...]           Skip specific days\n  clear                              Forget excluded days\n  count <start> <end>                Qualifying days in an inclusive range\n  load json <path>                   Replace options from a JSON file\n  save json <path>                   Write options to a JSON file\n  load csv <path>                    Add excluded days from a CSV `date` column\n  load text <path>                   Add excluded days, one per line\n  quit|exit                          Exit"
    );
}

fn render_options(options: &AddDaysOptions) -> String {
    let excluded = if options.excluded_dates.is_empty() {
        "-".to_string()
    } else {
        options
            .excluded_dates
            .iter()
            .map(|day| day.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        "exclude_weekends={}, excluded_dates={}",
        options.exclude_weekends, excluded
    )
}

fn initial_options() -> AddDaysOptions {
    let Ok(path) = std::env::var(OPTIONS_ENV) else {
        return AddDaysOptions::default();
    };
    match load_options_from_json(&path) {
        Ok(options) => {
            info!(%path, "loaded options");
            options
        }
        Err(e) => {
            warn!(%path, error = %e, "could not load options, using defaults");
            println!("Could not load options from {}: {}", path, e);
            AddDaysOptions::default()
        }
    }
}

fn main() {
    let verbose = std::env::args()
        .skip(1)
        .any(|arg| arg == "-v" || arg == "--verbose");
    init_cli_logger(verbose);

    let mut options = initial_options();

    println!("Date Shift (CLI) - type 'help' for commands\n");
    println!("{}", render_options(&options));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => println!("{}", render_options(&options)),
            "add" | "sub" => match (parts.next(), parts.next()) {
                (Some(date), Some(amount)) => {
                    let result = if cmd == "add" {
                        add_days(date, amount, Some(&options))
                    } else {
                        sub_days(date, amount, Some(&options))
                    };
                    println!("Result: {}", result);
                }
                _ => println!("Usage: {} <date> <amount>", cmd),
            },
            "weekends" => match parts.next().map(str::to_ascii_lowercase).as_deref() {
                Some("on") => {
                    options.exclude_weekends = true;
                    println!("Weekends excluded.");
                }
                Some("off") => {
                    options.exclude_weekends = false;
                    println!("Weekends counted.");
                }
                _ => println!("Usage: weekends <on|off>"),
            },
            "exclude" => {
                let mut added = 0;
                let mut any = false;
                for value in parts {
                    any = true;
                    if !value.to_date().is_valid() {
                        println!("Ignored invalid date '{}'", value);
                        continue;
                    }
                    if options.excluded_dates.insert(value) {
                        added += 1;
                    }
                }
                if any {
                    println!("Excluded {} date(s).", added);
                } else {
                    println!("Usage: exclude <date> [date...]");
                }
            }
            "clear" => {
                options.excluded_dates.clear();
                println!("Excluded dates cleared.");
            }
            "count" => {
                let start = parts.next().and_then(|s| s.to_date().date());
                let end = parts.next().and_then(|s| s.to_date().date());
                match (start, end) {
                    (Some(start), Some(end)) => {
                        let calendar = SkipCalendar::from_options(&options);
                        println!(
                            "Qualifying days: {}",
                            calendar.count_qualifying_days(start, end)
                        );
                    }
                    _ => println!("Usage: count <start> <end>"),
                }
            }
            "load" => match (parts.next(), parts.next()) {
                (Some("json"), Some(path)) => match load_options_from_json(path) {
                    Ok(loaded) => {
                        options = loaded;
                        println!("Options loaded from {}", path);
                        println!("{}", render_options(&options));
                    }
                    Err(e) => println!("Error: {}", e),
                },
                (Some(kind @ ("csv" | "text")), Some(path)) => {
                    let loaded = if kind == "csv" {
                        load_excluded_dates_from_csv(path)
                    } else {
                        load_excluded_dates_from_text(path)
                    };
                    match loaded {
                        Ok(excluded) => {
                            let count = excluded.len();
                            options.excluded_dates.extend(excluded.iter());
                            println!("Loaded {} excluded date(s) from {}", count, path);
                        }
                        Err(e) => println!("Error: {}", e),
                    }
                }
                _ => println!("Usage: load <json|csv|text> <path>"),
            },
            "save" => match (parts.next(), parts.next()) {
                (Some("json"), Some(path)) => match save_options_to_json(&options, path) {
                    Ok(()) => println!("Options saved to {}", path),
                    Err(e) => println!("Error: {}", e),
                },
                _ => println!("Usage: save json <path>"),
            },
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}

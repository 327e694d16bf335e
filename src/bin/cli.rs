use chrono::{Local, NaiveDate};
use clap::Parser;
use nurse_sleep_schedule::{
    AddWorkDayOutcome, Schedule, ShiftType, classify, export_file_name, export_schedule_to_csv,
    parse_date, project,
};
use polars::prelude::{AnyValue, DataFrame};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Plan sleep around day and night shifts")]
struct Cli {
    /// Directory for `export` when no path is given
    #[arg(long, env = "NURSE_SLEEP_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Date(days) => NaiveDate::from_ymd_opt(1970, 1, 1)
            .and_then(|epoch| epoch.checked_add_signed(chrono::Duration::days(*days as i64)))
            .map(|d| d.to_string())
            .unwrap_or_default(),
        AnyValue::Boolean(true) => "*".to_string(),
        AnyValue::Boolean(false) => String::new(),
        AnyValue::String(s) => s.to_string(),
        other => other.to_string(),
    }
}

fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let cells: Vec<Vec<String>> = (0..df.height())
        .map(|row_idx| {
            columns
                .iter()
                .map(|col| col.get(row_idx).map(|av| cell_text(&av)).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &cells {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(w + 2));
        sep.push('+');
    }

    let push_row = |out: &mut String, values: &[String]| {
        out.push('|');
        for (ci, value) in values.iter().enumerate() {
            out.push(' ');
            out.push_str(value);
            out.push_str(&" ".repeat(widths[ci].saturating_sub(value.len())));
            out.push_str(" |");
        }
        out.push('\n');
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &col_names);
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        push_row(&mut out, row);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  add <date> <day|night>             Add a work day (YYYY-MM-DD or MM/DD/YYYY)\n  reset                              Clear all days\n  show                               Show the planned days\n  classify <date>                    Show the recommendation for any date\n  summary                            Count days per category\n  export [path]                      Write the schedule as CSV\n  quit|exit                          Exit"
    );
}

fn print_shift_types() {
    println!("Shift types:");
    for (shift, description) in ShiftType::variants() {
        println!("  {:<8} {}", shift.as_str().to_ascii_lowercase(), description);
    }
}

fn show(schedule: &Schedule) {
    let projection = project(schedule);
    if projection.is_empty() {
        println!("No days planned yet. Use 'add <date> <day|night>'.");
        return;
    }
    match projection.to_dataframe() {
        Ok(df) => println!("{}", render_df_as_text_table(&df)),
        Err(e) => println!("Error rendering schedule: {}", e),
    }
}

fn print_classification(schedule: &Schedule, date: NaiveDate) {
    let classification = classify(schedule, date);
    let category = classification.category;
    println!("{} : {}", date, category);
    match classification.kind {
        Some(kind) => println!("Listed as          : {}", kind.as_str()),
        None => println!("Listed as          : not listed"),
    }
    if category.is_chore_day() {
        println!(
            "Chore day          : yes ({} free hours between 9 AM and 5 PM)",
            category.available_daytime_hours()
        );
    } else {
        println!("Chore day          : no");
    }
    for line in classification.recommendation {
        println!("  - {}", line);
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut schedule = Schedule::new();

    println!("Nurse Sleep Schedule (CLI) - type 'help' for commands\n");

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
            "help" => {
                print_help();
                print_shift_types();
            }
            "quit" | "exit" => break,
            "show" => show(&schedule),
            "add" => {
                let date_s = parts.next();
                let shift_s = parts.next();
                match (date_s, shift_s) {
                    (Some(date_s), Some(shift_s)) => {
                        let date = match parse_date(date_s) {
                            Ok(d) => d,
                            Err(e) => {
                                println!("{}", e);
                                continue;
                            }
                        };
                        let shift: ShiftType = match shift_s.parse() {
                            Ok(s) => s,
                            Err(e) => {
                                println!("{}", e);
                                continue;
                            }
                        };
                        match schedule.add_work_day(date, shift) {
                            AddWorkDayOutcome::Added => {
                                println!("Added {} shift on {}.", shift, date);
                                show(&schedule);
                            }
                            AddWorkDayOutcome::Duplicate => {
                                println!("{} is already scheduled as a work day.", date);
                            }
                        }
                    }
                    _ => println!("Usage: add <date> <day|night>"),
                }
            }
            "reset" => {
                if schedule.can_reset() {
                    schedule.reset();
                    println!("Schedule cleared.");
                } else {
                    println!("Nothing to reset.");
                }
            }
            "classify" => match parts.next().map(parse_date) {
                Some(Ok(date)) => print_classification(&schedule, date),
                Some(Err(e)) => println!("{}", e),
                None => println!("Usage: classify <date>"),
            },
            "summary" => println!("{}", schedule.summary().to_cli_summary()),
            "export" => {
                let path = match parts.next() {
                    Some(p) => PathBuf::from(p),
                    None => cli
                        .export_dir
                        .join(export_file_name(Local::now().date_naive())),
                };
                match export_schedule_to_csv(&schedule, &path) {
                    Ok(rows) => println!("Exported {} days to {}", rows, path.display()),
                    Err(e) => println!("Export error: {}", e),
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}

// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::progress::Progress;
use crate::runner::{self, Params};

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;

    println!(
        "Table: {} episodes x {} years",
        summary.rows, summary.cols
    );
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut show_id: Option<String> = None;
    let mut params = Params::new("");

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--show" => {
                show_id = Some(args.next().ok_or("Missing value for --show")?);
            }
            "--from" => {
                params.from_year = args.next().ok_or("Missing value for --from")?.parse()?;
            }
            "--to" => {
                params.to_year = Some(args.next().ok_or("Missing value for --to")?.parse()?);
            }
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--font" => {
                params.font = Some(PathBuf::from(args.next().ok_or("Missing font path")?));
            }
            "--backdrop" => {
                params.backdrop = Some(PathBuf::from(args.next().ok_or("Missing backdrop path")?));
            }
            "--no-panel" => params.panel = false,
            "--csv" => {
                params.csv = Some(PathBuf::from(args.next().ok_or("Missing CSV path")?));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let show_id = show_id.ok_or("Missing required --show <id> (e.g. --show tt0303461)")?;
    if !looks_like_show_id(&show_id) {
        return Err(format!("Not a show id: {show_id} (expected e.g. tt0303461)").into());
    }
    params.show_id = show_id;

    if let Some(to) = params.to_year {
        if to < params.from_year {
            return Err(format!("--to {} is before --from {}", to, params.from_year).into());
        }
    }

    Ok(params)
}

fn looks_like_show_id(s: &str) -> bool {
    s.len() > 2 && s.starts_with("tt") && s[2..].chars().all(|c| c.is_ascii_digit())
}

/* ---------- console progress ---------- */

#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Fetching {} year(s)…", total);
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn year_done(&mut self, year: i32, episodes: usize) {
        self.done += 1;
        println!("  [{}/{}] {}: {} episode(s)", self.done, self.total, year, episodes);
    }
}

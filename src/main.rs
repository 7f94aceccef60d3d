use std::env;
use std::process;

use fretboard::{load_instrument, render, NoteSequence, Scale, TabEntry};

const USAGE: &str = "Usage: fretboard <instrument.yaml> [--raag NOTES | --tab FRETS] [--yaml]\n\
       NOTES: comma-separated, e.g. C,E,G or 0,4,7\n\
       FRETS: one per string, x for muted, e.g. x,3,2,0,1,0";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let input_path = &args[1];
    let mut scale: Option<String> = None;
    let mut is_tab = false;
    let mut as_yaml = false;

    // Parse flags
    let mut rest = args[2..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--raag" | "--tab" => {
                if scale.is_some() {
                    eprintln!("Only one of --raag or --tab may be given");
                    process::exit(1);
                }
                let Some(list) = rest.next() else {
                    eprintln!("{} needs a value\n{}", flag, USAGE);
                    process::exit(1);
                };
                is_tab = flag == "--tab";
                scale = Some(list.clone());
            }
            "--yaml" => as_yaml = true,
            other => {
                eprintln!("Unknown argument '{}'\n{}", other, USAGE);
                process::exit(1);
            }
        }
    }

    let instrument = match load_instrument(input_path) {
        Ok(instrument) => instrument,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let scale = match scale {
        None => Ok(Scale::Chromatic),
        Some(list) if is_tab => TabEntry::parse_list(&list).map(Scale::Tab),
        Some(list) => NoteSequence::parse_list(&list).map(Scale::Notes),
    };

    let grid = match scale.and_then(|scale| instrument.filter(&scale)) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if as_yaml {
        match render::to_yaml(&grid) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", render::to_text(&grid, instrument.notation()));
    }
}

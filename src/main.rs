use std::env;
use std::fs;
use std::process;

use chordsheet::render::{MAX_OFFSET, MIN_OFFSET};
use chordsheet::SheetError;

fn usage() -> ! {
    eprintln!("Usage: chordsheet <song.txt> [output.html]");
    eprintln!("       chordsheet --transpose <n> <song.txt> [output.html]");
    eprintln!("       chordsheet --dump <song.txt>");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
    }

    let mut dump = false;
    let mut offset = 0;
    let mut index = 1;

    // Parse flags
    if args[1] == "--dump" {
        dump = true;
        index = 2;
    } else if args[1] == "--transpose" {
        if args.len() < 4 {
            usage();
        }
        offset = match args[2].parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Invalid transposition offset '{}'", args[2]);
                process::exit(1);
            }
        };
        if !(MIN_OFFSET..=MAX_OFFSET).contains(&offset) {
            eprintln!("Error: {}", SheetError::OffsetOutOfRange(offset));
            process::exit(1);
        }
        index = 3;
    }

    let Some(input_path) = args.get(index) else {
        usage();
    };
    let output_path = args.get(index + 1);

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    if dump {
        let song = match chordsheet::parse_song(&source) {
            Ok(song) => song,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        match serde_yaml::to_string(&song) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Error serializing song: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let html = match chordsheet::render_html(&source, offset) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote HTML to {}", path);
        }
        None => {
            print!("{}", html);
        }
    }
}

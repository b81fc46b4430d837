use clap::Parser; // clap crate for CLI argument parsing
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run lexer only and dump the token stream
    #[arg(short, long)]
    lex: bool,
}

const RULE: &str =
    "___________________________________________________________________________";

fn main() {
    let args = Args::parse();

    // Accumulate raw input lines until the first blank line (or EOF)
    let source = read_source_block();

    let output = lexer::lex(&source);
    for fault in &output.faults {
        eprintln!("{fault}");
    }

    // --lex: stop after tokenization
    if args.lex {
        for token in &output.tokens {
            println!("line {:>3}: {:?}", token.line, token.kind);
        }
        return;
    }

    println!("{RULE}\n");
    println!("{source}");

    match parser::parse_tokens(&output.tokens) {
        Ok(program) => {
            println!("{program:#?}");
            println!("\nAccepted!");
        }
        Err(fault) => {
            eprintln!("{fault}");
            println!("None");
            println!("\nRejected!");
        }
    }

    println!("{RULE}\n");
}

fn read_source_block() -> String {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    lines.join("\n")
}

// glint: lexer + parser front end for a small imperative language

use std::fs;
use std::path::Path;

use glint::parser::lexer::Lexer;
use glint::parser::parse::Parser;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("glint");

    if args.len() < 2 {
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.gl> [--tokens]", program_name);
        eprintln!();
        eprintln!("  --tokens   also dump the token stream");
        std::process::exit(1);
    }

    let input_file = &args[1];
    let dump_tokens = args.iter().any(|a| a == "--tokens");

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        std::process::exit(1);
    }

    let source = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {}", input_file, e);
            std::process::exit(1);
        }
    };

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if dump_tokens {
        println!(" -- Tokens -- ");
        for token in &tokens {
            println!("({}): '{}'", token.category, token.text);
        }
        println!();
    }

    let program = match Parser::new(&tokens).parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Parsed successfully. Found {} top-level declarations.",
        program.len()
    );

    println!(" -- Parse result -- ");
    for node in &program {
        println!("{:#?}", node);
    }
}

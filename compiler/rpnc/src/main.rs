//! rpn CLI
//!
//! Converts and evaluates expressions with the built-in operators.

use rpnc::{init_tracing, Engine, Error};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let engine = Engine::new();

    match command.as_str() {
        "generate" | "gen" => {
            let expression = expression_arg(&args, "generate", "<infix>");
            report(engine.generate(&expression));
        }
        "calc" | "calculate" => {
            let expression = expression_arg(&args, "calc", "<postfix>");
            report(engine.calculate(&expression));
        }
        "eval" => {
            let expression = expression_arg(&args, "eval", "<infix>");
            report(engine.eval(&expression));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("rpn {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Join everything after the command, so unquoted `rpn eval 1 + 2` works.
fn expression_arg(args: &[String], command: &str, placeholder: &str) -> String {
    if args.len() < 3 {
        eprintln!("Usage: rpn {command} {placeholder}");
        std::process::exit(1);
    }
    args[2..].join(" ")
}

fn report<T: std::fmt::Display>(result: Result<T, Error>) {
    match result {
        Ok(value) => println!("{value}"),
        Err(error) => {
            eprintln!("error[{:?}]: {error}", error.kind());
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("rpn - infix/postfix expression engine");
    println!();
    println!("Usage: rpn <command> <expression>");
    println!();
    println!("Commands:");
    println!("  generate <infix>    Print the postfix form of an infix expression");
    println!("  calc <postfix>      Evaluate a postfix expression");
    println!("  eval <infix>        Evaluate an infix expression");
    println!("  help                Show this message");
    println!("  version             Show version");
    println!();
    println!("Examples:");
    println!("  rpn generate '2*(5+7)'      # 2 5 7 + *");
    println!("  rpn calc '4 3 2 ** **'      # 262144");
    println!("  rpn eval '~-5*4**(0x0f-12)**2'");
    println!();
    println!("Set RUST_LOG=debug to trace conversion and evaluation.");
}

#![allow(non_snake_case)]
//! Interactive driver over two coordinate-list matrix files.
//!
//! ```text
//! cargo run --example menu -- demos/data/matrix_a.txt demos/data/matrix_b.txt
//! ```

use coomat::algebra::SparseMatrix;
use std::io::Write;

fn load_or_exit(path: &str) -> SparseMatrix {
    match SparseMatrix::load_from_file(path) {
        Ok(A) => A,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let (path_a, path_b) = match (args.next(), args.next()) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            eprintln!("usage: menu <matrix-a-file> <matrix-b-file>");
            std::process::exit(2);
        }
    };

    println!("coomat {} sparse matrix demo", coomat::VERSION);

    let A = load_or_exit(&path_a);
    let B = load_or_exit(&path_b);

    let stdin = std::io::stdin();
    loop {
        println!();
        println!("Choose an operation:");
        println!("  1. Addition");
        println!("  2. Subtraction");
        println!("  3. Multiplication");
        println!("  4. Exit");
        print!("> ");
        std::io::stdout().flush().unwrap();

        let mut choice = String::new();
        if stdin.read_line(&mut choice).unwrap() == 0 {
            break;
        }

        let result = match choice.trim() {
            "1" => A.add(&B),
            "2" => A.subtract(&B),
            "3" => A.multiply(&B),
            "4" => break,
            other => {
                println!("invalid choice `{}`", other);
                continue;
            }
        };

        match result {
            Ok(C) => print!("{}", C.render()),
            Err(e) => println!("error: {}", e),
        }
    }
}

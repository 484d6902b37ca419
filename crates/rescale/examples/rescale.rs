//! Read two real numbers, print them, rescale them and print them again.
//!
//! Usage: echo "2 3" | cargo run -p rescale --example rescale

use std::io::{self, Read};

use rescale::{format_real, parse_pair, update_scale_default};

fn main() {
    env_logger::init();
    println!(" Please input two real numbers");

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error reading input: {e}");
        std::process::exit(1);
    }
    let (mut a, mut b) = match parse_pair(&input) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", format_real(a, 7, 3));
    println!("{}", format_real(b, 7, 3));

    update_scale_default(&mut a, &mut b);

    println!("{}", format_real(a, 7, 3));
    println!("{}", format_real(b, 7, 3));
}

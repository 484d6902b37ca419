//! Copy the valid floats of a text file into another file.
//!
//! Usage: cargo run -p float-filter --example filter -- [data.txt] [dataOut.txt]

use std::env;

use float_filter::{filter_file, FilterError};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let input = args.get(1).map_or("data.txt", String::as_str);
    let output = args.get(2).map_or("dataOut.txt", String::as_str);

    let invalid = match filter_file(input, output) {
        Ok(report) => report.invalid_count(),
        Err(e @ FilterError::ReadError { .. }) => {
            println!("Hardware failure during file processing: {e}");
            e.invalid_count()
        }
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    println!("Total invalid values found: {invalid}");
}

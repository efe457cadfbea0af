use keyspace_core::{extract_instance_name, extract_instance_name_strict};

use super::super::args::ExtractArgs;
use crate::exit_codes;

pub fn run(args: ExtractArgs) -> i32 {
    let name = if args.strict {
        extract_instance_name_strict(&args.path)
    } else {
        extract_instance_name(&args.path)
    };

    match name {
        Some(name) => {
            println!("{name}");
            exit_codes::SUCCESS
        }
        None => {
            eprintln!("no instance name in path: {}", args.path);
            exit_codes::NOT_FOUND
        }
    }
}

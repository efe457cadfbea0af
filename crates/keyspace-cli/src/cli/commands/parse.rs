use keyspace_core::parse_property_path;
use serde_json::json;

use super::super::args::ParseArgs;
use crate::exit_codes;

pub fn run(args: ParseArgs) -> anyhow::Result<i32> {
    let (cluster, key) = parse_property_path(&args.path)?;
    let out = json!({
        "cluster": cluster,
        "category": key.root_category(),
        "instance": key.instance(),
        "key": key,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(exit_codes::SUCCESS)
}

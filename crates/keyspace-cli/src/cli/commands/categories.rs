use keyspace_core::{PropertyScope, PropertyType};
use serde::Serialize;

use super::super::args::CategoriesArgs;
use crate::exit_codes;

#[derive(Debug, Serialize)]
struct CategoryRow {
    token: PropertyType,
    scope: PropertyScope,
    resource_selector: bool,
}

pub fn run(args: CategoriesArgs) -> anyhow::Result<i32> {
    let rows: Vec<CategoryRow> = PropertyType::ALL
        .into_iter()
        .map(|category| CategoryRow {
            token: category,
            scope: category.scope(),
            resource_selector: category.accepts_resource_selector(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(exit_codes::SUCCESS);
    }

    for row in &rows {
        let scope = match row.scope {
            PropertyScope::Cluster => "cluster",
            PropertyScope::Instance => "instance",
        };
        println!("{:<16} {}", row.token.token(), scope);
    }
    Ok(exit_codes::SUCCESS)
}

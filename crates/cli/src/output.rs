use crate::error::CliError;
use model::condition::QueryOperator;
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub async fn write_json<T: Serialize>(
    value: &T,
    pretty: bool,
    path: Option<String>,
) -> Result<(), CliError> {
    let json = to_json(value, pretty)?;
    match path {
        Some(path) => tokio::fs::write(path, json).await?,
        None => println!("{json}"),
    }
    Ok(())
}

#[derive(Serialize)]
pub struct OperatorRow {
    pub code: u8,
    pub name: &'static str,
}

pub fn operator_rows() -> Vec<OperatorRow> {
    QueryOperator::ALL
        .iter()
        .map(|op| OperatorRow {
            code: op.code(),
            name: op.name(),
        })
        .collect()
}

pub fn print_operator_table() {
    println!("{:<6} {}", "Code", "Operator");
    println!("-----------------------------");
    for row in operator_rows() {
        println!("{:<6} {}", row.code, row.name);
    }
}

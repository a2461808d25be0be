use crate::domain::models::JsonOut;
use serde::Serialize;

/// Emit one payload in the `{ok, data}` envelope or as a human line.
/// `ok` mirrors the run outcome so CI can branch on it without parsing
/// `data`.
pub fn print_outcome<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    print_outcome(json, true, data, row)
}

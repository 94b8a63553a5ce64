use serde::Serialize;
use showcase_core::command::ResponsePayload;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a command reply and report whether it succeeded.
///
/// Successful replies go to stdout; rejections go to stderr unless `json` is
/// set, in which case the tagged payload is always printed to stdout.
pub fn print_payload(payload: &ResponsePayload, json: bool) -> anyhow::Result<bool> {
    if json {
        print_json(payload)?;
    } else if payload.is_success() {
        print!("{}", payload.render_text());
    } else {
        eprintln!("{}", payload.render_text());
    }
    Ok(payload.is_success())
}

pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Resolve a command's input: `--input` file first, then piped stdin, then flags.
pub fn resolve<T, F>(path: Option<&str>, from_flags: F) -> Result<T, Box<dyn std::error::Error>>
where
    T: DeserializeOwned,
    F: FnOnce() -> Result<T, Box<dyn std::error::Error>>,
{
    if let Some(path) = path {
        log::debug!("reading input from {}", path);
        return file::read_json(path);
    }
    if let Some(data) = stdin::read_stdin()? {
        log::debug!("reading input from stdin");
        return Ok(finplan_core::parse_input_value(data)?);
    }
    from_flags()
}

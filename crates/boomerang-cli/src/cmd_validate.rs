use anyhow::{Context, Result};
use boomerang::v1::{Flight, query};
use std::path::PathBuf;

pub fn run(input: PathBuf) -> Result<()> {
    let content =
        std::fs::read_to_string(&input).with_context(|| format!("Failed to read {:?}", input))?;
    validate_content(&content)
}

fn validate_content(content: &str) -> Result<()> {
    let flight = Flight::from_json(content).map_err(|e| anyhow::anyhow!("Invalid: {}", e))?;
    query::replay(flight.offset, &flight.steps).map_err(|e| anyhow::anyhow!("Invalid: {}", e))?;

    let (adds, inverts) = query::op_counts(&flight.steps);
    println!(
        "Valid: flight of {} moves for r = {} ({} +r, {} inv)",
        flight.steps.len(),
        flight.offset,
        adds,
        inverts
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boomerang::v1::{Bounds, Offset, plan_flight};
    use std::io::Write;

    fn half_flight_json() -> String {
        plan_flight(Offset::new(1, 2).unwrap(), &Bounds::default())
            .unwrap()
            .to_json()
            .unwrap()
    }

    #[test]
    fn test_validate_found_flight() {
        assert!(validate_content(&half_flight_json()).is_ok());
    }

    #[test]
    fn test_validate_handwritten_flight() {
        let json = r#"{
          "offset": "-1/2",
          "steps": [
            { "value": "1/2", "op": "add_offset" },
            { "value": "2",   "op": "invert" },
            { "value": "3/2", "op": "add_offset" },
            { "value": "1",   "op": "add_offset" }
          ]
        }"#;
        assert!(validate_content(json).is_ok());
    }

    #[test]
    fn test_validate_tampered_value() {
        let json = half_flight_json().replace("\"2\"", "\"5/2\"");
        assert!(validate_content(&json).is_err());
    }

    #[test]
    fn test_validate_open_flight() {
        let json = r#"{"offset":"1/2","steps":[{"value":"3/2","op":"add_offset"}]}"#;
        assert!(validate_content(json).is_err());
    }

    #[test]
    fn test_validate_invalid_json() {
        assert!(validate_content("not json").is_err());
    }

    #[test]
    fn test_run_with_temp_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{}", half_flight_json()).unwrap();
        f.flush().unwrap();
        assert!(run(f.path().to_path_buf()).is_ok());
    }

    #[test]
    fn test_run_nonexistent_file() {
        assert!(run(PathBuf::from("/nonexistent/flight.json")).is_err());
    }
}

//! Payload input for commands that read JSON

use std::io::Read;

use usagewire::error::Result;

/// Read a payload from `file`, or from stdin when it is absent or `-`.
pub fn read_payload(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path != "-" => {
            log::debug!("Reading payload from {}", path);
            Ok(std::fs::read(path)?)
        }
        _ => {
            log::debug!("Reading payload from stdin");
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_payload_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("payload.json");
        std::fs::write(&path, br#"{"id":1}"#).unwrap();

        let bytes = read_payload(path.to_str()).unwrap();
        assert_eq!(bytes, br#"{"id":1}"#);
    }

    #[test]
    fn test_read_payload_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.json");
        assert!(read_payload(path.to_str()).is_err());
    }
}

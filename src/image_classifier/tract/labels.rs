use std::path::Path;

pub fn load_labels(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Unable to read labels from {}: {}", path.display(), e))?;
    Ok(parse_labels(&contents))
}

/// One label per line. Blank lines are skipped.
pub fn parse_labels(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        let labels = parse_labels("tench\r\ngoldfish\n\n  great white shark \n");
        assert_eq!(labels, vec!["tench", "goldfish", "great white shark"]);
    }

    #[test]
    fn test_load_labels_missing_file() {
        let result = load_labels(Path::new("./does/not/exist.txt"));
        assert!(result.is_err());
    }
}

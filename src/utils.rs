/// Utility functions used by the binary

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("friendstui-debug.log");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_path_in_temp_dir() {
        let path = get_debug_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("friendstui-debug.log")
        );
    }
}

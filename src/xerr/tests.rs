use super::*;

use std::path::PathBuf;

#[test]
fn test_hl() {
    assert_eq!("firefox".hl().to_string(), "\u{1b}[33mfirefox\u{1b}[0m");
    assert_eq!(42.hl().to_string(), "\u{1b}[33m42\u{1b}[0m");
}

#[test]
fn test_hlq() {
    assert_eq!("fire fox".hlq().to_string(), "\u{1b}[33m\"fire fox\"\u{1b}[0m");
    assert_eq!("a\"b".hlq().to_string(), "\u{1b}[33m\"a\\\"b\"\u{1b}[0m");

    let path = PathBuf::from("sample/patterns.txt");
    assert_eq!(
        path.as_path().hlq().to_string(),
        "\u{1b}[33m\"sample/patterns.txt\"\u{1b}[0m"
    );
}

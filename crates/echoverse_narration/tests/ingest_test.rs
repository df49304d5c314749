use echoverse_error::{EchoverseErrorKind, NarrationErrorKind};
use echoverse_narration::{INVALID_FILE_MESSAGE, read_text_file};
use std::fs;
use tempfile::TempDir;

fn is_invalid_file(err: &echoverse_error::EchoverseError) -> bool {
    matches!(
        err.as_narration().map(|e| e.kind()),
        Some(NarrationErrorKind::Validation(message)) if message == INVALID_FILE_MESSAGE
    )
}

#[tokio::test]
async fn test_reads_utf8_text_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("chapter.txt");
    fs::write(&path, "Once upon a time, in a land of ümlauts.\n").expect("write");

    let text = read_text_file(&path).await.expect("reads");
    assert_eq!(text, "Once upon a time, in a land of ümlauts.\n");
}

#[tokio::test]
async fn test_extension_is_case_insensitive() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("CHAPTER.TXT");
    fs::write(&path, "Loud file name.").expect("write");

    assert_eq!(read_text_file(&path).await.expect("reads"), "Loud file name.");
}

#[tokio::test]
async fn test_rejects_other_extensions() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("chapter.md");
    fs::write(&path, "# Heading").expect("write");

    let err = read_text_file(&path).await.expect_err("markdown rejected");
    assert!(is_invalid_file(&err));
}

#[tokio::test]
async fn test_rejects_non_utf8_content() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("binary.txt");
    fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).expect("write");

    let err = read_text_file(&path).await.expect_err("binary rejected");
    assert!(is_invalid_file(&err));
}

#[tokio::test]
async fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.txt");

    let err = read_text_file(&path).await.expect_err("missing file");
    assert!(matches!(err.kind(), EchoverseErrorKind::Storage(_)));
}

#[tokio::test]
async fn test_directory_named_txt_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("folder.txt");
    fs::create_dir(&path).expect("mkdir");

    let err = read_text_file(&path).await.expect_err("directory rejected");
    assert!(is_invalid_file(&err));
}

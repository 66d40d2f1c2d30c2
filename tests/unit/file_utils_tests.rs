/*!
 * Tests for file utility functions
 */

use anyhow::Result;

use acto::file_utils::{FileManager, FileType};

use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "transcript.txt",
        "test content",
    )?;

    assert!(FileManager::file_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that a .txt file with text content is detected as plain text
#[test]
fn test_detect_file_type_withTxtFile_shouldReturnPlainText() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_transcript(&temp_dir.path().to_path_buf(), "meeting.txt")?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::PlainText);
    Ok(())
}

/// Test that a non-txt extension is rejected regardless of content
#[test]
fn test_detect_file_type_withPdfExtension_shouldReturnOther() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "report.pdf",
        "plain text inside",
    )?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::Other);
    Ok(())
}

/// Test that a .txt file with binary content is rejected
#[test]
fn test_detect_file_type_withBinaryContent_shouldReturnOther() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("fake.txt");
    std::fs::write(&path, [0x00u8, 0x01, 0xFF, 0x00])?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::Other);
    Ok(())
}

/// Test that an extension-less text file is sniffed as plain text
#[test]
fn test_detect_file_type_withNoExtension_shouldSniffContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "notes",
        "free-form meeting notes",
    )?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::PlainText);
    Ok(())
}

/// Test that write_bytes creates missing parent directories
#[test]
fn test_write_bytes_withMissingParents_shouldCreateThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested/out/artifact.html");

    FileManager::write_bytes(&path, b"<html></html>")?;

    assert!(FileManager::file_exists(&path));
    assert_eq!(std::fs::read(&path)?, b"<html></html>");
    Ok(())
}

/// Test that read_to_string returns the file content
#[test]
fn test_read_to_string_withExistingFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "meeting.txt",
        "Alice: hello",
    )?;

    assert_eq!(FileManager::read_to_string(&path)?, "Alice: hello");
    Ok(())
}

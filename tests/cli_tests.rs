use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const NAMES: &str = "Alice\nBob\nCharles\nDaisy\n";
const EXCLUSIONS: &str = "2\nAlice\n1\nCharles\nCharles\n2\nAlice\nDaisy\n";
const LAST_YEAR: &str = "Alice buys for Charles\nCharles buys for Daisy\nDaisy buys for Alice\n";

fn secret_santa(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_secret-santa"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// 完整三個檔案時，stdout 只有唯一合法的結果
#[test]
fn test_prints_assignment_to_stdout() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("names.txt"), NAMES)?;
    std::fs::write(temp_dir.path().join("exclusions.txt"), EXCLUSIONS)?;
    std::fs::write(temp_dir.path().join("lastyear.txt"), LAST_YEAR)?;

    let output = secret_santa(temp_dir.path(), &["names.txt", "exclusions.txt", "lastyear.txt"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Alice buys for Daisy\nBob buys for Alice\nCharles buys for Bob\nDaisy buys for Charles\n"
    );
    assert!(stderr(&output).is_empty());
    Ok(())
}

#[test]
fn test_four_arguments_is_usage_error() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = secret_santa(temp_dir.path(), &["a.txt", "b.txt", "c.txt", "d.txt"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("unexpected argument"));
    assert!(err.contains("Usage: secret-santa <names.txt> [exclusions.txt] [lastyear.txt]"));
    Ok(())
}

#[test]
fn test_too_few_names_prints_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("names.txt"), "Alice\nBob\nAlice\n")?;

    let output = secret_santa(temp_dir.path(), &["names.txt"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output).trim_end(), "Need at least 3 names in names.txt (found 2)");
    Ok(())
}

/// 寫檔失敗時不能先把結果印出來
#[test]
fn test_failed_save_prints_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("names.txt"), NAMES)?;
    // 用一般檔案擋住目錄路徑
    std::fs::write(temp_dir.path().join("blocker"), "")?;

    let output = secret_santa(
        temp_dir.path(),
        &["names.txt", "--save-to", "blocker/results.txt"],
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output).trim_end(), "Could not write blocker/results.txt");
    Ok(())
}

#[test]
fn test_too_many_exclusions_exit_code() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("names.txt"), "A\nB\nC\n")?;
    std::fs::write(
        temp_dir.path().join("exclusions.txt"),
        "3\nA\n2\nB\nC\nB\n2\nA\nC\nC\n2\nA\nB\n",
    )?;

    let output = secret_santa(
        temp_dir.path(),
        &["names.txt", "exclusions.txt", "--max-attempts", "10"],
    )?;

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output).trim_end(),
        "Could not find a valid arrangement (too many exclusions)"
    );
    Ok(())
}

/// 空的去年結果只留下一行沒有色碼的警告
#[test]
fn test_empty_last_year_warning_is_plain_text() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("names.txt"), NAMES)?;
    std::fs::write(temp_dir.path().join("exclusions.txt"), "0\n")?;
    std::fs::write(temp_dir.path().join("lastyear.txt"), "")?;

    let output = secret_santa(temp_dir.path(), &["names.txt", "exclusions.txt", "lastyear.txt"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).lines().count(), 4);

    let err = stderr(&output);
    assert_eq!(err.lines().count(), 1);
    assert!(err.contains("WARN"));
    assert!(err.contains("lastyear.txt was empty"));
    assert!(!err.contains('\u{1b}'));
    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CATALOG, CliTest, stderr, stdout};

const APP_SOURCE: &str = r#"package app

const (
	MISSING_CHANNEL_ERROR = "app.channel.not_found.app_error"
	pageSize              = 60
)

func (a *App) GetChannel(id string) {
	a.Srv().Log().Warn(a.T("app.channel.get.warn"))
	userLocale("app.channel.locale")
}
"#;

#[test]
fn test_check_up_to_date() -> Result<()> {
    let test = CliTest::with_catalog(&[
        ("app.channel.get.warn", json!("Could not get channel")),
        ("app.channel.locale", json!("Locale")),
        ("app.channel.not_found.app_error", json!("Not found")),
    ])?;
    test.write_file("server/app/channel.go", APP_SOURCE)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    insta::assert_snapshot!(stdout(&output), @"✓ Checked 1 source file - server/i18n/en.json is up to date");

    Ok(())
}

#[test]
fn test_check_reports_drift() -> Result<()> {
    let test = CliTest::with_catalog(&[
        ("app.channel.get.warn", json!("Could not get channel")),
        ("app.channel.removed", json!("Gone")),
        ("app.post.removed", json!("Gone too")),
    ])?;
    test.write_file("server/app/channel.go", APP_SOURCE)?;
    let before = test.read_file(CATALOG)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    insta::assert_snapshot!(stdout(&output), @r"
Added: app.channel.locale
Added: app.channel.not_found.app_error
Removed: app.channel.removed
Removed: app.post.removed
");
    assert!(stderr(&output).contains("translations file out of date: 2 added, 2 removed"));

    assert_eq!(test.read_file(CATALOG)?, before);

    Ok(())
}

#[test]
fn test_check_includes_runtime_identifiers() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(CATALOG, "[]")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("Added: January\n"));
    assert!(out.contains("Added: model.user.is_valid.pwd_lowercase_uppercase_number_symbol.app_error\n"));
    assert!(!out.contains("Removed:"));

    Ok(())
}

#[test]
fn test_check_ignores_computed_arguments() -> Result<()> {
    let test = CliTest::with_catalog(&[("app.static", json!("Static"))])?;
    test.write_file(
        "server/app/dynamic.go",
        r#"package app

func f(key string) {
	T(key)
	T("app." + key)
	T("app.static")
	Println("not.a.translation")
}
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_check_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gotransrc.json",
        r#"{
    "sourceDir": "server",
    "enterpriseDir": "enterprise",
    "ignores": ["**/mocks/**"]
}"#,
    )?;
    test.write_catalog(&[("app.channel.get.warn", json!("Warn"))])?;
    test.write_file(
        "server/app/channel.go",
        "package app\n\nfunc f() { T(\"app.channel.get.warn\") }\n",
    )?;
    test.write_file(
        "server/app/mocks/store.go",
        "package mocks\n\nfunc f() { T(\"mocks.only\") }\n",
    )?;

    let output = test.command().arg("check").output()?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_check_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".gotransrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.command().arg("check").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let out = stdout(&output);
    for command in ["extract", "check", "init"] {
        assert!(out.contains(command), "{out}");
    }

    Ok(())
}

//! End-to-end tests for the non-interactive subcommands.

use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use ducklett_testing::{TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn test_book_then_status() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["book", "2030-10-18", "14:30"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Tu cita con Ducklett es el viernes"));
    assert!(result.stdout().contains("14:30"));

    assertions::assert_stored_appointment(&world.read_storage()?, "2030-10-18", "14:30")?;

    let status = world.run(&["status"])?;
    assert!(status.success());
    assert!(status.stdout().contains("18 de octubre de 2030"));
    assert!(status.stdout().contains("Tema: light"));
    assert!(!status.stdout().contains("(ya pasó)"));

    Ok(())
}

#[test]
fn test_status_json() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["book", "2030-10-18", "09:05"])?;

    let json = world.run(&["status", "--format", "json"])?.json()?;
    assertions::assert_status_appointment(&json, "2030-10-18", "09:05")?;
    assert_eq!(json["appointment"]["upcoming"], true);
    assert_eq!(json["theme"], "light");

    Ok(())
}

#[test]
fn test_status_without_appointment() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["status"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Todavía no tienes una cita"));

    let json = world.run(&["status", "--format", "json"])?.json()?;
    assert!(json["appointment"].is_null());

    Ok(())
}

#[test]
fn test_book_rejects_past_instant() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["book", "2020-01-01", "10:00"])?;
    assert_eq!(result.code(), Some(2));
    assert!(result.stderr().contains("Elige un momento futuro"));
    assertions::assert_no_stored_appointment(&world.read_storage()?)?;

    Ok(())
}

#[test]
fn test_book_rejects_malformed_input() -> Result<()> {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("ducklett");
    world
        .configure_command(&mut cmd)
        .args(["book", "2030-13-45", "10:00"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no es válida"));

    let mut cmd = cargo_bin_cmd!("ducklett");
    world.configure_command(&mut cmd).args(["book", "", "10:00"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("selecciona una fecha y hora"));

    Ok(())
}

#[test]
fn test_book_overwrites_previous() -> Result<()> {
    let world = TestWorld::new();

    world.run(&["book", "2030-10-18", "14:30"])?;
    world.run(&["book", "2031-01-02", "08:00"])?;

    assertions::assert_stored_appointment(&world.read_storage()?, "2031-01-02", "08:00")?;
    Ok(())
}

#[test]
fn test_reset_clears_appointment() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["book", "2030-10-18", "14:30"])?;

    let result = world.run(&["reset"])?;
    assert!(result.success());
    assert!(result.stdout().contains("se ha borrado"));
    assertions::assert_no_stored_appointment(&world.read_storage()?)?;

    let again = world.run(&["reset"])?;
    assert!(again.success());
    assert!(again.stdout().contains("Todavía no tienes una cita"));

    Ok(())
}

#[test]
fn test_theme_persists() -> Result<()> {
    let world = TestWorld::new();

    assert_eq!(world.run(&["theme"])?.stdout().trim(), "light");
    assert_eq!(world.run(&["theme", "dark"])?.stdout().trim(), "dark");
    assert_eq!(world.run(&["theme"])?.stdout().trim(), "dark");
    assert_eq!(world.run(&["theme", "toggle"])?.stdout().trim(), "light");

    assert_eq!(world.read_storage()?["ducklettTheme"], "light");
    Ok(())
}

#[test]
fn test_theme_survives_reset() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["theme", "dark"])?;
    world.run(&["book", "2030-10-18", "14:30"])?;
    world.run(&["reset"])?;

    assert_eq!(world.run(&["theme"])?.stdout().trim(), "dark");
    Ok(())
}

#[test]
fn test_corrupt_record_is_discarded() -> Result<()> {
    let world = TestWorld::new();
    world.seed_appointment("{not json")?;

    let json = world.run(&["status", "--format", "json"])?.json()?;
    assert!(json["appointment"].is_null());
    assertions::assert_no_stored_appointment(&world.read_storage()?)?;

    Ok(())
}

#[test]
fn test_unreadable_storage_file_counts_as_empty() -> Result<()> {
    let world = TestWorld::new();
    world.seed_storage("this is not a storage file")?;

    let result = world.run(&["status"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Todavía no tienes una cita"));

    world.run(&["book", "2030-10-18", "14:30"])?;
    assertions::assert_stored_appointment(&world.read_storage()?, "2030-10-18", "14:30")?;
    Ok(())
}

#[test]
fn test_configured_locale() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("locale = \"en_US\"\n")?;

    let result = world.run(&["book", "2030-10-18", "14:30"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Friday, October 18, 2030"));
    assert!(result.stdout().contains("2:30 PM"));

    Ok(())
}

#[test]
fn test_log_env_enables_stderr_logging() -> Result<()> {
    let world = TestWorld::new().with_env("DUCKLETT_LOG", "info");

    let result = world.run(&["book", "2030-10-18", "14:30"])?;
    assert!(result.success());
    assert!(result.stderr().contains("appointment booked"));
    assert!(!result.stdout().contains("appointment booked"));

    let quiet = TestWorld::new().run(&["book", "2030-10-18", "14:30"])?;
    assert!(!quiet.stderr().contains("appointment booked"));

    Ok(())
}

#[test]
fn test_run_needs_a_terminal() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["run"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("interactive terminal"));

    Ok(())
}

#[test]
fn test_help_lists_subcommands() -> Result<()> {
    let world = TestWorld::new();

    let help = world.run(&["--help"])?;
    assert!(help.success());
    for name in ["run", "status", "book", "reset", "theme"] {
        assert!(help.stdout().contains(name), "missing {} in help", name);
    }

    Ok(())
}

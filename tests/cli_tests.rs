//! CLI integration tests against the built binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const LEDGER: &str = r#"[
  {
    "id": "b1",
    "bookmaker": "Bet365",
    "stake": "100",
    "potential_payout": "190.91",
    "placed_at": "2024-03-01T18:00:00Z",
    "legs": [{
      "sport": "Hockey", "league": "NHL",
      "event_name": "Boston Bruins @ Toronto Maple Leafs", "selection": "Boston Bruins",
      "odds": -110, "odds_type": "american", "status": "Won",
      "event_start": "2024-03-01T23:00:00Z"
    }]
  },
  {
    "id": "b2",
    "bookmaker": "Bet365",
    "status": "Lost",
    "stake": "50",
    "placed_at": "2024-03-02T17:00:00Z",
    "legs": [{
      "sport": "Basketball", "league": "NBA",
      "event_name": "Miami Heat @ Boston Celtics", "selection": "Miami Heat",
      "odds": "+150", "odds_type": "american",
      "event_start": "2024-03-02T23:30:00Z"
    }]
  },
  {
    "id": "b3",
    "bookmaker": "DraftKings",
    "bet_type": "parlay",
    "stake": "20",
    "placed_at": "2024-03-02T12:00:00Z",
    "legs": [
      {
        "sport": "Hockey", "league": "NHL",
        "event_name": "Dallas Stars @ Vegas Golden Knights", "selection": "Dallas Stars",
        "odds": "1.91", "odds_type": "decimal", "status": "Won",
        "event_start": "2024-03-02T22:00:00Z"
      },
      {
        "sport": "Hockey", "league": "NHL",
        "event_name": "Ottawa Senators @ Seattle Kraken", "selection": "Seattle Kraken",
        "odds": "2.0", "odds_type": "decimal", "status": "Won",
        "event_start": "2024-03-03T03:00:00Z"
      }
    ]
  },
  { "id": "broken", "stake": "10", "placed_at": "2024-03-02T12:00:00Z" }
]"#;

/// Temporary home with a config that keeps every file inside it.
struct Sandbox {
    dir: TempDir,
    config: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        Self::with_display("utc_offset_minutes = 0\n")
    }

    fn with_display(display: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let config = dir.path().join("config.toml");
        let contents = format!(
            "[display]\n{display}\n[storage]\nledger_path = \"{}\"\npreferences_path = \"{}\"\n",
            dir.path().join("ledger.json").display(),
            dir.path().join("preferences.json").display(),
        );
        fs::write(&config, contents).expect("write temp config");
        fs::write(dir.path().join("ledger.json"), LEDGER).expect("write temp ledger");
        Self { dir, config }
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("betledger");
        cmd.env("HOME", self.dir.path())
            .env_remove("TZ")
            .env_remove("LC_ALL")
            .env_remove("LC_MESSAGES")
            .env_remove("LANG")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never")
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().arg("--json").args(args).output().expect("run betledger");
        assert!(
            output.status.success(),
            "betledger {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document")
    }
}

fn betledger() -> Command {
    cargo_bin_cmd!("betledger")
}

#[test]
fn help_lists_commands() {
    betledger()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("betledger"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("payout"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("preference"));
}

#[test]
fn version_names_binary() {
    betledger()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("betledger"));
}

#[test]
fn convert_american_to_fractional() {
    Sandbox::new()
        .cmd()
        .args(["convert", "-110", "--from", "american", "--to", "fractional"])
        .assert()
        .success()
        .stdout("10/11\n");
}

#[test]
fn convert_fractional_to_american() {
    Sandbox::new()
        .cmd()
        .args(["convert", "3/2", "-f", "fractional", "-t", "american"])
        .assert()
        .success()
        .stdout("+150\n");
}

#[test]
fn convert_rejects_malformed_odds() {
    Sandbox::new()
        .cmd()
        .args(["convert", "abc", "--from", "american", "--to", "decimal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn convert_json_document() {
    let json = Sandbox::new().json(&["convert", "+150", "--from", "american", "--to", "decimal"]);
    assert_eq!(json["command"], "convert");
    assert_eq!(json["odds"], "2.50");
    assert_eq!(json["to"], "decimal");
}

#[test]
fn convert_defaults_to_stored_preference() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["preference", "set", "fractional"])
        .assert()
        .success();

    sandbox
        .cmd()
        .args(["convert", "-110", "--from", "american"])
        .assert()
        .success()
        .stdout("10/11\n");
}

#[test]
fn payout_prices_parlay() {
    let json = Sandbox::new().json(&["payout", "--stake", "20", "1.91", "2.0"]);
    assert_eq!(json["potential_payout"], "76.40");
    assert_eq!(json["potential_profit"], "56.40");
    assert_eq!(json["combined_odds"], "3.82");
}

#[test]
fn payout_quiet_prints_amount() {
    Sandbox::new()
        .cmd()
        .args(["-q", "payout", "-s", "100", "-n", "american", "-110"])
        .assert()
        .success()
        .stdout("190.91\n");
}

#[test]
fn payout_rejects_zero_stake() {
    Sandbox::new()
        .cmd()
        .args(["payout", "--stake", "0", "2.0"])
        .assert()
        .failure();
}

#[test]
fn payout_out_of_range_fails_cleanly() {
    Sandbox::new()
        .cmd()
        .args(["payout", "-s", "10", "-n", "decimal", "10000000000", "10000000000", "10000000000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("amount out of range"));
}

#[test]
fn team_abbreviation() {
    Sandbox::new()
        .cmd()
        .args(["team", "Toronto", "Maple", "Leafs"])
        .assert()
        .success()
        .stdout("TOR\n");
}

#[test]
fn region_from_timezone() {
    Sandbox::new()
        .cmd()
        .args(["-q", "region", "--timezone", "Europe/London"])
        .assert()
        .success()
        .stdout("UK\n");

    let json = Sandbox::new().json(&["region", "--timezone", "America/New_York"]);
    assert_eq!(json["region"], "US");
    assert_eq!(json["default_notation"], "american");
}

#[test]
fn preference_detects_then_sticks() {
    let sandbox = Sandbox::new();

    let first = sandbox
        .cmd()
        .env("TZ", "America/New_York")
        .args(["--json", "preference", "show"])
        .output()
        .expect("run betledger");
    assert!(first.status.success());
    let first: Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(first["preference"]["notation"], "american");
    assert_eq!(first["preference"]["source"], "detected");
    assert_eq!(first["preference"]["region"], "US");

    let stored = fs::read_to_string(sandbox.dir.path().join("preferences.json")).unwrap();
    assert!(stored.contains("american"));

    // Moving timezone does not change a stored choice.
    sandbox
        .cmd()
        .env("TZ", "Europe/London")
        .args(["-q", "preference", "show"])
        .assert()
        .success()
        .stdout("american\n");
}

#[test]
fn preference_reset_detects_again() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["preference", "set", "decimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decimal"));

    sandbox.cmd().args(["preference", "reset"]).assert().success();

    sandbox
        .cmd()
        .env("TZ", "Europe/London")
        .args(["-q", "preference", "show"])
        .assert()
        .success()
        .stdout("fractional\n");
}

#[test]
fn configured_notation_applies_without_storing() {
    let sandbox = Sandbox::with_display("odds_format = \"decimal\"\n");
    let json = sandbox.json(&["preference", "show"]);
    assert_eq!(json["preference"]["notation"], "decimal");
    assert_eq!(json["preference"]["source"], "configured");
    assert!(!sandbox.dir.path().join("preferences.json").exists());
}

#[test]
fn stats_summarizes_ledger() {
    let json = Sandbox::new().json(&["stats"]);
    let summary = &json["summary"];

    assert_eq!(summary["total_bets"], 3);
    assert_eq!(summary["settled_bets"], 3);
    assert_eq!(summary["won_bets"], 2);
    assert_eq!(summary["lost_bets"], 1);
    assert_eq!(summary["total_staked"], "170");
    assert_eq!(summary["total_profit"], "97.31");

    let daily = json["daily"].as_array().unwrap();
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0]["date"], "2024-03-01");
    assert_eq!(daily[0]["net_profit"], "90.91");
    assert_eq!(daily[1]["date"], "2024-03-02");
    assert_eq!(daily[1]["net_profit"], "6.40");

    let skipped = json["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["bet_id"], "broken");
}

#[test]
fn stats_skips_out_of_range_parlay() {
    let sandbox = Sandbox::new();
    let leg = r#"{"sport": "Hockey", "league": "NHL", "event_name": "BOS @ TOR",
        "selection": "BOS", "odds": "10000000000", "odds_type": "decimal", "status": "Won",
        "event_start": "2024-03-01T23:00:00Z"}"#;
    let ledger = format!(
        r#"[
  {{"id": "b1", "stake": "100", "potential_payout": "250", "status": "Won",
    "placed_at": "2024-03-01T18:00:00Z",
    "legs": [{{"sport": "Hockey", "league": "NHL", "event_name": "BOS @ TOR",
      "selection": "BOS", "odds": "2.50", "odds_type": "decimal",
      "event_start": "2024-03-01T23:00:00Z"}}]}},
  {{"id": "huge", "stake": "10", "potential_payout": "10",
    "placed_at": "2024-03-01T18:00:00Z", "legs": [{leg}, {leg}, {leg}]}}
]"#
    );
    fs::write(sandbox.dir.path().join("ledger.json"), ledger).expect("write ledger");

    let json = sandbox.json(&["stats"]);

    assert_eq!(json["summary"]["settled_bets"], 1);
    assert_eq!(json["summary"]["total_profit"], "150.00");
    let skipped = json["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["bet_id"], "huge");
    assert_eq!(skipped[0]["reason"], "amount out of range");
}

#[test]
fn stats_filters_by_league() {
    Sandbox::new()
        .cmd()
        .args(["-q", "stats", "--league", "NBA"])
        .assert()
        .success()
        .stdout("-50.00\n");
}

#[test]
fn stats_facets() {
    let json = Sandbox::new().json(&["stats", "--facets"]);
    assert_eq!(json["facets"]["sports"], serde_json::json!(["Basketball", "Hockey"]));
    assert_eq!(json["facets"]["leagues"], serde_json::json!(["NBA", "NHL"]));
}

#[test]
fn stats_table_output() {
    Sandbox::new()
        .cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-02"))
        .stdout(predicate::str::contains("+97.31"))
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn stats_missing_ledger_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["stats", "--ledger"])
        .arg(sandbox.dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let sandbox = Sandbox::with_display("odds_format = \"hongkong\"\n");
    sandbox
        .cmd()
        .args(["team", "Boston Bruins"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("display.odds_format"));
}

#[test]
fn cli_renders_toml_parse_errors() {
    let sandbox = Sandbox::new();
    fs::write(&sandbox.config, "[display\nodds_format = 1\n").unwrap();
    sandbox
        .cmd()
        .args(["team", "Boston Bruins"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config.toml")
                .or(predicate::str::contains("failed to parse config")),
        );
}

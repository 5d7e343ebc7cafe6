//! Integration tests for the `guideon` CLI binary.
//!
//! Every invocation runs against the seeded demo dataset, so these tests
//! validate argument parsing, list rendering, pagination, mutations, and
//! exit codes without any backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `guideon` binary with env isolation.
///
/// Clears all `GUIDEON_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn guideon_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("guideon");
    cmd.env("HOME", "/tmp/guideon-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/guideon-cli-test-nonexistent")
        .env_remove("GUIDEON_PROFILE")
        .env_remove("GUIDEON_OUTPUT")
        .env_remove("GUIDEON_PAGE_SIZE")
        .env_remove("GUIDEON_OPERATOR")
        .env_remove("GUIDEON_API_KEY");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = guideon_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    guideon_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("GUIDEON tourism sites")
            .and(predicate::str::contains("sites"))
            .and(predicate::str::contains("audit"))
            .and(predicate::str::contains("documents")),
    );
}

#[test]
fn test_completions_generate() {
    guideon_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("guideon"));
}

// ── Sites: list / filter / paginate ─────────────────────────────────

#[test]
fn test_sites_list_renders_seeded_page() {
    guideon_cmd().args(["sites", "list"]).assert().success().stdout(
        predicate::str::contains("Namsan Tower")
            .and(predicate::str::contains("Busan Haeundae Tourist Zone"))
            .and(predicate::str::contains("Page 1/2 · 8 total")),
    );
}

#[test]
fn test_sites_list_second_page_shows_oldest() {
    guideon_cmd()
        .args(["sites", "list", "--page", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Everland")
                .and(predicate::str::contains("Page 2/2 · 8 total"))
                .and(predicate::str::contains("Namsan Tower").not()),
        );
}

#[test]
fn test_sites_list_search_is_case_insensitive() {
    guideon_cmd()
        .args(["sites", "list", "--search", "EVERLAND"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Everland")
                .and(predicate::str::contains("Page 1/1 · 1 total")),
        );
}

#[test]
fn test_sites_list_status_filter() {
    guideon_cmd()
        .args(["sites", "list", "--status", "inactive"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Seoul Land")
                .and(predicate::str::contains("Korean Folk Village"))
                .and(predicate::str::contains("2 total")),
        );
}

#[test]
fn test_sites_list_rejects_out_of_range_page() {
    let output = guideon_cmd()
        .args(["sites", "list", "--page", "9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("out of range"));
}

#[test]
fn test_sites_list_json_carries_page_facts() {
    let output = guideon_cmd()
        .args(["sites", "list", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["total_count"], 8);
    assert_eq!(view["total_pages"], 2);
    assert_eq!(view["page"], 0);
    assert_eq!(view["rows"].as_array().unwrap().len(), 5);
    // Newest-first: site 8 leads the page.
    assert_eq!(view["rows"][0]["id"], 8);
    assert_eq!(view["rows"][0]["name"], "Namsan Tower");
}

#[test]
fn test_sites_list_plain_emits_ids() {
    guideon_cmd()
        .args(["sites", "list", "--output", "plain", "--page", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n2\n1\n"));
}

// ── Sites: get ──────────────────────────────────────────────────────

#[test]
fn test_sites_get_shows_invites() {
    guideon_cmd().args(["sites", "get", "1"]).assert().success().stdout(
        predicate::str::contains("Everland")
            .and(predicate::str::contains("operator@example.com"))
            .and(predicate::str::contains("pending")),
    );
}

#[test]
fn test_sites_get_unknown_id_exits_not_found() {
    let output = guideon_cmd().args(["sites", "get", "99"]).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("not found"));
}

// ── Sites: mutations ────────────────────────────────────────────────

#[test]
fn test_sites_create_allocates_next_id_and_leads_page() {
    let output = guideon_cmd()
        .args(["sites", "create", "--name", "Gwanghwamun Square"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = combined_output(&output);
    assert!(text.contains("Site created (id 9)"), "got:\n{text}");
    assert!(text.contains("Gwanghwamun Square"));
    assert!(text.contains("9 total"));
}

#[test]
fn test_sites_create_rejects_blank_name() {
    let output = guideon_cmd()
        .args(["sites", "create", "--name", "   "])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("name"));
}

#[test]
fn test_sites_update_renames() {
    let output = guideon_cmd()
        .args(["sites", "update", "8", "--name", "N Seoul Tower"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = combined_output(&output);
    assert!(text.contains("Site 8 renamed"));
    assert!(text.contains("N Seoul Tower"));
}

#[test]
fn test_sites_toggle_with_yes_flips_state() {
    let output = guideon_cmd()
        .args(["sites", "toggle", "8", "--yes"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(combined_output(&output).contains("Site 8 is now inactive"));
}

#[test]
fn test_sites_delete_with_yes() {
    let output = guideon_cmd()
        .args(["sites", "delete", "3", "--yes"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = combined_output(&output);
    assert!(text.contains("Site 3 deleted"));
    assert!(text.contains("7 total"));
}

#[test]
fn test_sites_delete_unknown_id_exits_not_found() {
    let output = guideon_cmd()
        .args(["sites", "delete", "42", "--yes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_sites_invite_appends_pending_invite() {
    let output = guideon_cmd()
        .args(["sites", "invite", "2", "--email", "guide@palace.example"])
        .output()
        .unwrap();
    assert!(output.status.success());
    // One invite is already seeded, so the new one gets id 2.
    assert!(combined_output(&output).contains("Invite #2 sent to guide@palace.example"));
}

#[test]
fn test_sites_invite_rejects_malformed_email() {
    let output = guideon_cmd()
        .args(["sites", "invite", "2", "--email", "not-an-email"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("email"));
}

// ── Operator scoping ────────────────────────────────────────────────

#[test]
fn test_site_admin_sees_only_assigned_sites() {
    guideon_cmd()
        .args(["--as-operator", "operator@example.com", "sites", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Everland")
                .and(predicate::str::contains("1 total"))
                .and(predicate::str::contains("Namsan Tower").not()),
        );
}

#[test]
fn test_unknown_operator_exits_not_found() {
    let output = guideon_cmd()
        .args(["--as-operator", "nobody@example.com", "sites", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

// ── Audit log ───────────────────────────────────────────────────────

#[test]
fn test_audit_list_pages_the_trail() {
    guideon_cmd().args(["audit", "list"]).assert().success().stdout(
        predicate::str::contains("just now")
            .and(predicate::str::contains("Page 1/2 · 10 total")),
    );
}

#[test]
fn test_audit_list_type_filter() {
    let output = guideon_cmd()
        .args(["audit", "list", "--type", "system", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["total_count"], 3);
    for row in view["rows"].as_array().unwrap() {
        assert_eq!(row["kind"], "SYSTEM");
    }
}

#[test]
fn test_audit_get_shows_message() {
    guideon_cmd().args(["audit", "get", "1"]).assert().success().stdout(
        predicate::str::contains("site created")
            .and(predicate::str::contains("Gyeongbokgung Palace")),
    );
}

// ── Documents ───────────────────────────────────────────────────────

#[test]
fn test_documents_list_status_filter() {
    let output = guideon_cmd()
        .args(["documents", "list", "--status", "completed", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["total_count"], 3);
    for row in view["rows"].as_array().unwrap() {
        assert_eq!(row["status"], "COMPLETED");
    }
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_renders_defaults() {
    guideon_cmd().args(["config", "show"]).assert().success().stdout(
        predicate::str::contains("default_profile")
            .and(predicate::str::contains("page_size")),
    );
}

#[test]
fn test_unknown_profile_flag_fails() {
    let output = guideon_cmd()
        .args(["--profile", "nope", "sites", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("nope"));
}

#[test]
fn test_config_use_unknown_profile_fails() {
    let output = guideon_cmd()
        .args(["config", "use", "nope"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

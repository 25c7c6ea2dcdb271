use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tempfile::{NamedTempFile, TempDir};
use tokio::time::sleep;

use triage_core::{TicketStatus, TicketStore};

/// Create a config pointing everything at a scratch directory.
fn daemon_config(dir: &Path) -> String {
    format!(
        r#"
[database]
path = "{db}"

[watcher]
enrich_interval_secs = 1
digest_interval_secs = 1

[notifications]
output_dir = "{digests}"

[seed]
enabled = true
tickets = 100
"#,
        db = dir.join("triage.db").display(),
        digests = dir.join("digests").display(),
    )
}

/// Spawn the daemon and return a handle
async fn spawn_daemon(config_path: &Path) -> tokio::process::Child {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_triaged"))
        .env("TRIAGE_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn daemon")
}

/// Wait until the digest directory holds at least `count` files.
async fn wait_for_digests(dir: &Path, count: usize, max_attempts: u32) -> bool {
    for _ in 0..max_attempts {
        let files = std::fs::read_dir(dir)
            .map(|entries| entries.count())
            .unwrap_or(0);
        if files >= count {
            return true;
        }
        sleep(Duration::from_millis(250)).await;
    }
    false
}

#[tokio::test]
async fn test_daemon_seeds_enriches_and_publishes() {
    let scratch = TempDir::new().unwrap();
    let config_content = daemon_config(scratch.path());

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let mut daemon = spawn_daemon(temp_file.path()).await;

    // The seeded roster has 9 handlers, each gets a digest file.
    let digests_dir = scratch.path().join("digests");
    assert!(
        wait_for_digests(&digests_dir, 9, 40).await,
        "Daemon did not publish digests in time"
    );

    // Give the enrichment loop a tick to work through the open tickets,
    // then stop the daemon so the database is quiescent.
    sleep(Duration::from_secs(2)).await;
    daemon.kill().await.expect("Failed to kill daemon");

    let store =
        triage_core::SqliteTicketStore::new(&scratch.path().join("triage.db")).unwrap();
    let tickets = store.list_tickets().unwrap();
    assert_eq!(tickets.len(), 100);

    let open: Vec<_> = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Open)
        .collect();
    assert!(!open.is_empty());
    for ticket in open {
        assert!(ticket.category.is_some(), "{} untagged", ticket.id);
        assert!(ticket.priority.is_some(), "{} unprioritized", ticket.id);
        assert!(ticket.assignee.is_some(), "{} unassigned", ticket.id);
    }

    // Digest files carry the handler id in their name and valid HTML inside.
    let sample = digests_dir.join("USR-0001.html");
    let html = std::fs::read_to_string(&sample).expect("Missing digest for first handler");
    assert!(html.contains("<html>"));
}

#[tokio::test]
async fn test_daemon_fails_on_missing_config() {
    let mut daemon = tokio::process::Command::new(env!("CARGO_BIN_EXE_triaged"))
        .env("TRIAGE_CONFIG", "/nonexistent/config.toml")
        .env("RUST_LOG", "error")
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn daemon");

    let status = daemon.wait().await.expect("Failed to wait on daemon");
    assert!(!status.success());
}

/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;
use tempfile::TempDir;
use zip::ZipArchive;

const SAMPLE_SESSION: &str = "tests/fixtures/sample-session.json";
const EMPTY_SESSION: &str = "tests/fixtures/empty-session.json";
const INVALID_SESSION: &str = "tests/fixtures/invalid-session.json";

/// The only `.docx` file written into `dir`
fn single_report(dir: &Path) -> PathBuf {
    let reports: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "docx"))
        .collect();
    assert_eq!(reports.len(), 1, "expected exactly one report in {:?}", dir);
    reports.into_iter().next().unwrap()
}

fn zip_entry(path: &Path, name: &str) -> String {
    let bytes = fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

/// Serves one webhook request with `status_line` and returns the raw request text
fn serve_once(status_line: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/hooks/audit", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
            if n == 0 {
                break;
            }
        }
        let response = format!(
            "{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status_line
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (url, handle)
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("site-inspector")
            .args(["-s", SAMPLE_SESSION, "--output-dir"])
            .arg(dir.path())
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("site-inspector")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--session"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("site-inspector")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("site-inspector")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing --session
    #[test]
    fn test_exit_code_missing_session() {
        cargo_bin_cmd!("site-inspector").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("site-inspector")
            .args(["-s", SAMPLE_SESSION, "-f", "pdf"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - session file does not exist
    #[test]
    fn test_exit_code_application_error_missing_session() {
        cargo_bin_cmd!("site-inspector")
            .args(["-s", "/nonexistent/audit.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Session file not found"));
    }

    /// Exit code 3: Application error - session fails validation
    #[test]
    fn test_exit_code_application_error_invalid_session() {
        cargo_bin_cmd!("site-inspector")
            .args(["-s", INVALID_SESSION, "--summary"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Validation error"))
            .stderr(predicate::str::contains("has no asset name"));
    }

    /// Exit code 3: Application error - session is not JSON
    #[test]
    fn test_exit_code_application_error_unparsable_session() {
        cargo_bin_cmd!("site-inspector")
            .args(["-s", "Cargo.toml", "--summary"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse session file"));
    }

    /// Exit code 1: alert raised with --fail-on-alert
    #[test]
    fn test_exit_code_alert_threshold_breached() {
        cargo_bin_cmd!("site-inspector")
            .args([
                "-s",
                SAMPLE_SESSION,
                "--summary",
                "--compliance-threshold",
                "95",
                "--fail-on-alert",
            ])
            .assert()
            .code(1);
    }

    /// Exit code 0: alert raised but --fail-on-alert not given
    #[test]
    fn test_exit_code_alert_without_fail_flag() {
        cargo_bin_cmd!("site-inspector")
            .args(["-s", SAMPLE_SESSION, "--summary", "--compliance-threshold", "95"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --fail-on-alert with no alert raised
    #[test]
    fn test_exit_code_fail_on_alert_without_breach() {
        cargo_bin_cmd!("site-inspector")
            .args(["-s", SAMPLE_SESSION, "--summary", "--fail-on-alert"])
            .assert()
            .code(0);
    }
}

#[test]
fn test_e2e_docx_report_written_with_suggested_name() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("site-inspector")
        .args(["-s", SAMPLE_SESSION, "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Output complete"))
        .stderr(predicate::str::contains("1 photo(s) could not be decoded"));

    let report = single_report(dir.path());
    let name = report.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("North_Field_"), "unexpected name {}", name);
    assert!(name.ends_with("_Report.docx"), "unexpected name {}", name);

    let bytes = fs::read(&report).unwrap();
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let media: Vec<&str> = archive
        .file_names()
        .filter(|name| name.starts_with("word/media/"))
        .collect();
    assert_eq!(media, vec!["word/media/image1.png"]);

    let document = zip_entry(&report, "word/document.xml");
    assert!(document.contains("North Field (WTW)"));
    assert!(document.contains("Duty pump | inlet"));
    assert!(document.contains("Observation #1: Pumps"));
    assert!(document.contains("Observation #2: Non-Maintenance"));
}

#[test]
fn test_e2e_docx_report_explicit_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("audit.docx");

    cargo_bin_cmd!("site-inspector")
        .args(["-s", SAMPLE_SESSION, "-o"])
        .arg(&output)
        .assert()
        .success();

    let core = zip_entry(&output, "docProps/core.xml");
    assert!(core.contains("<dc:title>North Field</dc:title>"));
    assert!(core.contains("<dc:creator>Site Inspector</dc:creator>"));
}

#[test]
fn test_e2e_markdown_to_stdout() {
    cargo_bin_cmd!("site-inspector")
        .args(["-s", SAMPLE_SESSION, "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# North Field (WTW)"))
        .stdout(predicate::str::contains("## 2. Compliance Breakdown by Category"))
        .stdout(predicate::str::contains("| Pumps | 9 | 1 | 10 |"))
        .stdout(predicate::str::contains("| Valves | 0 | 0 | 0 |"))
        .stdout(predicate::str::contains("Duty pump \\| inlet"))
        .stdout(predicate::str::contains("![Photo](data:image/png;base64,"));
}

#[test]
fn test_e2e_summary_prints_snapshot_json() {
    let output = cargo_bin_cmd!("site-inspector")
        .args(["-s", SAMPLE_SESSION, "--summary"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["totalAssetsChecked"], 10);
    assert_eq!(snapshot["compliancePercentage"], 90);
    assert_eq!(snapshot["siteIssueScore"], "0.100");
    assert_eq!(snapshot["maintenanceDefectTotal"], 1);
}

#[test]
fn test_e2e_empty_session() {
    cargo_bin_cmd!("site-inspector")
        .args(["-s", EMPTY_SESSION, "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# (STW)\n"))
        .stdout(predicate::str::contains("| **Total Assets Checked** | 0 |"))
        .stdout(predicate::str::contains("| **Compliance (Breadth)** | 100% |"))
        .stdout(predicate::str::contains("No maintenance defects recorded."));
}

#[test]
fn test_e2e_publish_metrics() {
    let dir = TempDir::new().unwrap();
    let (url, server) = serve_once("HTTP/1.1 200 OK");

    cargo_bin_cmd!("site-inspector")
        .args(["-s", SAMPLE_SESSION, "--publish-url", &url, "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Metrics published successfully"));

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /hooks/audit"));
    assert!(request.contains("\"siteName\":\"North Field\""));
    assert!(request.contains("\"siteType\":\"WTW\""));
    assert!(request.contains("\"siteIssueScore\":\"0.100\""));
    assert!(request.contains("\"compliancePercentage\":90"));
}

#[test]
fn test_e2e_publish_failure_keeps_report() {
    let dir = TempDir::new().unwrap();
    let (url, server) = serve_once("HTTP/1.1 404 Not Found");

    cargo_bin_cmd!("site-inspector")
        .args(["-s", SAMPLE_SESSION, "--publish-url", &url, "--output-dir"])
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to publish metrics"));

    server.join().unwrap();
    single_report(dir.path());
}

#[cfg(unix)]
#[test]
fn test_e2e_symlinked_session_rejected() {
    let dir = TempDir::new().unwrap();
    let link = dir.path().join("audit.json");
    let target = fs::canonicalize(SAMPLE_SESSION).unwrap();
    std::os::unix::fs::symlink(target, &link).unwrap();

    cargo_bin_cmd!("site-inspector")
        .arg("-s")
        .arg(&link)
        .arg("--summary")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Security violation"));
}

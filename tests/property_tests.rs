//! Property-based tests for urlsweep using proptest
//!
//! These tests generate random inputs for URL normalization, input
//! parsing and report building.

use proptest::prelude::*;
use urlsweep::core::{ProbeErrorKind, ProbeOutcome, RetryState, UrlResult};
use urlsweep::discovery::parse_entries;
use urlsweep::probe::normalize_url;
use urlsweep::reporting::Report;

/// Lines as they show up in hand-written URL lists
fn raw_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Bare hosts
        prop::collection::vec("[a-z]{3,10}", 1..4).prop_map(|parts| parts.join(".")),
        // Hosts with ports and paths
        (r"[a-z]{3,8}", 1024..65535u16, r"[a-z/]{0,12}")
            .prop_map(|(domain, port, path)| format!("{domain}.com:{port}/{path}")),
        // Surrounding whitespace
        (r"[ \t]{0,3}", r"[a-z]{3,8}", r"[ \t]{0,3}")
            .prop_map(|(lead, domain, trail)| format!("{lead}{domain}.org{trail}")),
        // Edge cases
        prop_oneof![
            Just(String::new()),
            Just("   ".to_string()),
            Just("bad url with spaces".to_string()),
            Just("127.0.0.1".to_string()),
        ]
    ]
}

/// Lines that already carry a scheme
fn schemed_url_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("http"), Just("https"), Just("ftp"), Just("svn+ssh")],
        r"[a-z]{3,10}",
        r"[a-z/]{0,12}",
    )
        .prop_map(|(scheme, domain, path)| format!("{scheme}://{domain}.com/{path}"))
}

fn result_strategy() -> impl Strategy<Value = UrlResult> {
    (
        r"[a-z]{3,10}",
        prop::option::of(100..600u16),
        1..5u32,
        prop::option::of(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}"),
    )
        .prop_map(|(domain, status, attempts, ip)| {
            let url = format!("http://{domain}.test");
            let result = match status {
                Some(status) => UrlResult::new(
                    url,
                    ProbeOutcome::responded(status, "Unknown".to_string()),
                    attempts,
                    RetryState::Succeeded,
                ),
                None => UrlResult::new(
                    url,
                    ProbeOutcome::failed(ProbeErrorKind::Timeout),
                    attempts,
                    RetryState::Exhausted,
                ),
            };
            match ip {
                Some(ip) => result.with_ip(ip),
                None => result,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalized_lines_always_carry_a_scheme(line in raw_line_strategy()) {
        let normalized = normalize_url(&line);
        prop_assert!(normalized.contains("://"), "{normalized:?}");
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn schemed_urls_are_left_alone(url in schemed_url_strategy()) {
        prop_assert_eq!(normalize_url(&url), url);
    }

    #[test]
    fn normalization_is_idempotent(line in raw_line_strategy()) {
        let once = normalize_url(&line);
        prop_assert_eq!(normalize_url(&once), once);
    }

    #[test]
    fn parsing_keeps_one_entry_per_line(lines in prop::collection::vec(raw_line_strategy(), 0..20)) {
        let content = lines.join("\n");
        let entries = parse_entries(&content);

        prop_assert_eq!(entries.len(), content.lines().count());
        for (entry, line) in entries.iter().zip(content.lines()) {
            prop_assert_eq!(entry.raw(), line);
        }
    }

    #[test]
    fn report_blocks_stay_index_aligned(results in prop::collection::vec(result_strategy(), 0..30)) {
        let report = Report::from_results(&results);

        prop_assert_eq!(report.len(), results.len());
        prop_assert_eq!(report.status_lines().len(), report.ip_lines().len());
        for (line, result) in report.status_lines().iter().zip(&results) {
            let prefix = format!("{}:", result.url);
            prop_assert!(line.starts_with(&prefix), "{} vs {}", line, prefix);
            match result.status_code() {
                Some(status) => {
                    let suffix = format!(": {}", status);
                    prop_assert!(line.ends_with(&suffix), "{} vs {}", line, suffix);
                }
                None => prop_assert!(line.ends_with(':'), "{} has a status", line),
            }
        }
        for (ip, result) in report.ip_lines().iter().zip(&results) {
            prop_assert_eq!(ip.as_str(), result.ip());
        }
    }
}

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::checks::CheckResult;
use crate::util::millis;

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[CheckResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Smoke Check Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    writeln!(out, "Total checks: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", failed.to_string().red())?;
    #[allow(clippy::cast_precision_loss)]
    let success_rate = if total == 0 {
        0.0
    } else {
        (passed as f64 / total as f64) * 100.0
    };
    writeln!(out, "Success rate: {success_rate:.1}%")?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{} {} ({:?})",
            status,
            result.check_name.bold(),
            result.duration
        )?;
        for page in &result.pages {
            writeln!(out, "   {page}")?;
        }
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    let slowest = results.iter().max_by_key(|r| r.duration);
    if let Some(slowest) = slowest {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.check_name.yellow(),
            slowest.duration
        )?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[CheckResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[CheckResult]) -> Result<()> {
    writeln!(out, "# Zodiac Admin Smoke Check Results\n")?;
    writeln!(out, "| Check | Status | Pages | Time (ms) |")?;
    writeln!(out, "|-------|--------|-------|-----------|")?;
    for result in results {
        let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            result.check_name,
            status,
            result.pages.len(),
            millis(result.duration)
        )?;
    }

    let failing: Vec<&CheckResult> = results.iter().filter(|r| !r.passed).collect();
    if !failing.is_empty() {
        writeln!(out, "\n## Failures\n")?;
        for result in failing {
            writeln!(out, "### {}\n", result.check_name)?;
            for failure in &result.failures {
                writeln!(out, "- {failure}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<CheckResult> {
        vec![
            CheckResult {
                check_name: "quizzes".into(),
                passed: true,
                pages: vec!["🧩 Quizzes: 2 quizzes".into()],
                failures: vec![],
                duration: Duration::from_millis(12),
            },
            CheckResult {
                check_name: "errors".into(),
                passed: false,
                pages: vec![],
                failures: vec!["🚨 Errors: database unavailable".into()],
                duration: Duration::from_millis(30),
            },
        ]
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn markdown_lists_failures_under_their_check() {
        let text = render(|out| generate_markdown_report(out, &results()));
        assert!(text.contains("| quizzes | ✅ PASS | 1 | 12 |"));
        assert!(text.contains("### errors"));
        assert!(text.contains("- 🚨 Errors: database unavailable"));
    }

    #[test]
    fn console_report_counts_outcomes() {
        colored::control::set_override(false);
        let text = render(|out| generate_console_report(out, &results(), Duration::from_secs(1)));
        assert!(text.contains("Total checks: 2"));
        assert!(text.contains("Success rate: 50.0%"));
        assert!(text.contains("Slowest: errors"));
    }

    #[test]
    fn json_report_is_an_array() {
        let text = render(|out| generate_json_report(out, &results()));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["passed"], false);
    }
}

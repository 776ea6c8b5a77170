//! 测试报告生成

use crate::models::{Report, ReportSummary, ScenarioOutcome};
use chrono::Utc;

pub fn build_report(outcomes: Vec<ScenarioOutcome>) -> Report {
    Report {
        summary: ReportSummary::from_outcomes(&outcomes),
        details: outcomes,
        generated_at: Utc::now(),
    }
}

/// 渲染汇总表
pub fn render_summary(summary: &ReportSummary) -> String {
    let pass_rate = if summary.total > 0 {
        format!("{:.1}%", summary.pass_rate)
    } else {
        "0%".to_string()
    };
    let rows = [
        ("总测试数", summary.total.to_string()),
        ("通过数", summary.passed.to_string()),
        ("失败数", summary.failed.to_string()),
        ("通过率", pass_rate),
        ("平均响应时间", format!("{:.2}s", summary.avg_response_time)),
    ];

    let mut out = String::from("测试结果汇总");
    for (metric, value) in rows {
        out.push_str(&format!("\n  {metric}: {value}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResponseKind, Scenario, ScenarioResult, Validation};
    use proptest::prelude::*;
    use serde_json::Value;

    fn outcome(success: bool, passed: Option<bool>, response_time: f64) -> ScenarioOutcome {
        let mut result = if success {
            ScenarioResult::succeeded(
                ResponseKind::Normal,
                "content".to_string(),
                response_time,
                Value::Null,
            )
        } else {
            ScenarioResult::failed("HTTP 500: boom", Some(500), response_time)
        };
        result.validation = passed.map(|passed| Validation {
            passed,
            reason: String::new(),
            found_keywords: Vec::new(),
            missing_keywords: Vec::new(),
        });
        ScenarioOutcome {
            scenario: Scenario::new("s", "p"),
            result,
        }
    }

    #[test]
    fn test_empty_report() {
        let report = build_report(Vec::new());
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.pass_rate, 0.0);
        assert_eq!(report.summary.avg_response_time, 0.0);
        assert!(render_summary(&report.summary).contains("通过率: 0%"));
    }

    #[test]
    fn test_report_counts() {
        let report = build_report(vec![
            outcome(true, Some(true), 1.0),
            outcome(true, Some(false), 2.0),
            outcome(false, None, 3.0),
            outcome(true, Some(true), 2.0),
        ]);

        assert_eq!(report.summary.total, 4);
        assert_eq!(report.summary.passed, 2);
        assert_eq!(report.summary.failed, 2);
        assert!((report.summary.pass_rate - 50.0).abs() < f64::EPSILON);
        assert!((report.summary.avg_response_time - 2.0).abs() < f64::EPSILON);
        assert_eq!(report.details.len(), 4);
    }

    #[test]
    fn test_success_without_validation_is_not_passed() {
        let report = build_report(vec![outcome(true, None, 1.0)]);
        assert_eq!(report.summary.passed, 0);
        assert_eq!(report.summary.failed, 1);
    }

    #[test]
    fn test_render_summary() {
        let report = build_report(vec![
            outcome(true, Some(true), 1.234),
            outcome(true, Some(true), 1.0),
            outcome(false, None, 0.5),
        ]);
        let text = render_summary(&report.summary);
        assert!(text.contains("总测试数: 3"));
        assert!(text.contains("通过率: 66.7%"));
        assert!(text.contains("平均响应时间: 0.91s"));
    }

    proptest! {
        #[test]
        fn prop_summary_consistent(
            items in prop::collection::vec((any::<bool>(), any::<bool>(), 0.0f64..60.0), 0..20)
        ) {
            let outcomes: Vec<ScenarioOutcome> = items
                .iter()
                .map(|(success, passed, t)| outcome(*success, success.then_some(*passed), *t))
                .collect();
            let summary = build_report(outcomes).summary;

            prop_assert_eq!(summary.total, items.len());
            prop_assert_eq!(summary.passed + summary.failed, summary.total);
            prop_assert!(summary.pass_rate >= 0.0 && summary.pass_rate <= 100.0);
            prop_assert!(summary.avg_response_time >= 0.0 && summary.avg_response_time <= 60.0);
        }
    }
}

use crate::model::VerificationReport;

/// Render a deterministic markdown summary of a verification run.
pub fn render_report(report: &VerificationReport) -> String {
    let mut lines = Vec::new();

    lines.push("# Dataset Verification Report".to_string());
    lines.push(String::new());

    lines.push("## Files".to_string());
    lines.push("| entity | path | rows |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for count in &report.entities {
        let rows = if count.present {
            count.rows.to_string()
        } else {
            "missing".to_string()
        };
        lines.push(format!(
            "| {} | {} | {} |",
            count.entity, count.relative_path, rows
        ));
    }
    lines.push(String::new());

    lines.push("## Checks".to_string());
    lines.push(format!("- checks_run: {}", report.checks_run));
    lines.push(format!("- violations: {}", report.violations_total));
    lines.push(String::new());

    if !report.violations_by_code.is_empty() {
        lines.push("## Violations by code".to_string());
        lines.push("| code | count |".to_string());
        lines.push("| --- | --- |".to_string());
        for (code, count) in &report.violations_by_code {
            lines.push(format!("| {code} | {count} |"));
        }
        lines.push(String::new());
    }

    if !report.examples.is_empty() {
        lines.push("## Examples".to_string());
        for violation in &report.examples {
            let row = violation
                .row_index
                .map(|row| format!(" row {row}"))
                .unwrap_or_default();
            let id = violation
                .record_id
                .as_ref()
                .map(|id| format!(" [{id}]"))
                .unwrap_or_default();
            lines.push(format!(
                "- {}{}{} ({}): {}",
                violation.entity, row, id, violation.code, violation.message
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{EntityCount, Violation};

    #[test]
    fn report_lists_missing_files_and_examples() {
        let mut by_code = BTreeMap::new();
        by_code.insert("unknown_customer".to_string(), 1);
        let report = VerificationReport {
            entities: vec![EntityCount {
                entity: "customers".to_string(),
                relative_path: "customers/customers.csv".to_string(),
                present: false,
                rows: 0,
            }],
            checks_run: 4,
            violations_total: 1,
            violations_by_code: by_code,
            examples: vec![Violation {
                code: "unknown_customer".to_string(),
                entity: "orders".to_string(),
                message: "customer_id 'CUST000009' not found".to_string(),
                row_index: Some(0),
                record_id: Some("ORD00000001".to_string()),
            }],
        };

        let rendered = render_report(&report);
        assert!(rendered.contains("| customers | customers/customers.csv | missing |"));
        assert!(rendered.contains("| unknown_customer | 1 |"));
        assert!(rendered.contains("- orders row 0 [ORD00000001] (unknown_customer)"));
    }
}

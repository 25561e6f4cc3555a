use crate::lookup::LookupMiss;
use crate::model::record::Record;
use crate::report::{SummaryData, format_f64_4, format_f64_6};

pub fn render_report_text(summary: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Commercial District Risk Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Inputs\n");
    out.push_str(&format!(
        "Reference records: {}\nTarget records: {}\nDistricts covered: {}\n\n",
        summary.n_reference, summary.n_target, summary.n_districts
    ));

    out.push_str("2. Indicators (weight, reference min..max)\n");
    for m in &summary.metrics {
        let note = if m.bounds.is_degenerate() {
            " (constant in reference, scored as 0)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{}: {} [{}..{}]{}\n",
            m.name,
            format_f64_4(m.weight),
            format_f64_6(m.bounds.min),
            format_f64_6(m.bounds.max),
            note
        ));
    }
    out.push('\n');

    out.push_str("3. Tier cut points (reference quartiles)\n");
    out.push_str(&format!(
        "q1={} q2={} q3={}\n\n",
        format_f64_4(summary.cutpoints.q1),
        format_f64_4(summary.cutpoints.q2),
        format_f64_4(summary.cutpoints.q3)
    ));

    out.push_str("4. Target risk distribution\n");
    for tier in &summary.tiers.tiers {
        out.push_str(&format!(
            "{} {}: {} ({})\n",
            tier.level.marker(),
            tier.level,
            tier.count,
            format_f64_4(tier.fraction)
        ));
    }

    out
}

pub fn render_result_card(record: &Record) -> String {
    let mut out = String::new();
    match (record.risk_score, record.risk_level) {
        (Some(score), Some(level)) => {
            out.push_str(&format!("{} Risk analysis\n", level.marker()));
            out.push_str(&format!("- District: {}\n", record.district));
            out.push_str(&format!("- Market: {}\n", record.market));
            out.push_str(&format!("- Risk Score: {}\n", format_f64_4(score)));
            out.push_str(&format!("- Risk Level: {}\n", level));
            out.push_str(level.advice());
            out.push('\n');
        }
        _ => {
            out.push_str(&format!(
                "[UNSCORED] {} / {}: risk information is unavailable.\n",
                record.district, record.market
            ));
        }
    }
    out
}

pub fn render_lookup_miss(miss: &LookupMiss) -> String {
    format!("[NO DATA] {miss}\n")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;

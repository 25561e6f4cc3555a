use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::lookup::{MarketIndex, lookup};
use crate::model::levels::RiskLevel;
use crate::pipeline::PipelineOutput;
use crate::report::json::render_summary_json;
use crate::report::text::{render_lookup_miss, render_report_text, render_result_card};
use crate::report::{MetricSummary, SummaryData, TierSummary, format_f64_4, format_f64_6};

#[derive(Debug, Clone)]
pub struct Selection {
    pub district: String,
    pub market: String,
}

pub fn write_reports(
    output: &PipelineOutput,
    index: &MarketIndex,
    selection: Option<&Selection>,
    out_dir: &Path,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_scores_tsv(output, &out_dir.join("scores.tsv"))?;

    let summary = build_summary(output, index);
    tracing::info!(
        low = summary.tiers.count(RiskLevel::LowRisk),
        medium = summary.tiers.count(RiskLevel::MediumRisk),
        high = summary.tiers.count(RiskLevel::HighRisk),
        critical = summary.tiers.count(RiskLevel::CriticalRisk),
        "target risk distribution"
    );
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let mut report = render_report_text(&summary);
    if let Some(sel) = selection {
        report.push_str("\n5. Selected market\n");
        report.push_str(&render_selection(output, sel));
    }
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!(out_dir = %out_dir.display(), "wrote reports");
    Ok(())
}

pub fn render_selection(output: &PipelineOutput, sel: &Selection) -> String {
    match lookup(&output.target, &sel.district, &sel.market) {
        Ok(record) => render_result_card(record),
        Err(miss) => render_lookup_miss(&miss),
    }
}

pub fn build_summary(output: &PipelineOutput, index: &MarketIndex) -> SummaryData {
    let metrics = output
        .metrics
        .metrics
        .iter()
        .zip(&output.weights)
        .zip(&output.bounds.metrics)
        .map(|((def, &weight), &bounds)| MetricSummary {
            id: def.id,
            name: def.name,
            weight,
            bounds,
        })
        .collect();

    SummaryData {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        n_reference: output.reference.len(),
        n_target: output.target.len(),
        n_districts: index.n_districts(),
        metrics,
        cutpoints: output.cutpoints,
        tiers: TierSummary::from_dataset(&output.target),
    }
}

fn write_scores_tsv(output: &PipelineOutput, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    let mut header = vec!["district".to_string(), "market".to_string()];
    for id in output.metrics.ids() {
        header.push(id.to_string());
    }
    for id in output.metrics.ids() {
        header.push(format!("norm_{id}"));
    }
    header.push("risk_score".to_string());
    header.push("risk_level".to_string());
    writeln!(w, "{}", header.join("\t"))?;

    for (record, normalized) in output.target.records.iter().zip(&output.target_normalized) {
        let mut row = Vec::with_capacity(header.len());
        row.push(record.district.clone());
        row.push(record.market.clone());
        for &v in &record.values {
            row.push(format_f64_6(v));
        }
        for &v in normalized {
            row.push(format_f64_6(v));
        }
        row.push(record.risk_score.map(format_f64_4).unwrap_or_default());
        row.push(
            record
                .risk_level
                .map(|l| l.label().to_string())
                .unwrap_or_default(),
        );
        writeln!(w, "{}", row.join("\t"))?;
    }

    w.flush()
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;

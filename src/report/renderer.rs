use chrono::NaiveDateTime;

use crate::stats::{Bucket, StatsSummary};
use crate::telemetry::Record;

use super::template::ReportTemplate;

const WIDTH: usize = 80;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Derived data for one report
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub records: &'a [Record],
    /// `None` when there are no records; the statistics block is then omitted
    pub stats: Option<&'a StatsSummary>,
    /// Ascending by key
    pub buckets: &'a [Bucket],
    pub generated_at: NaiveDateTime,
}

/// Render the full report.
///
/// Pure: the same template and input always give the same text.
pub fn render(template: &ReportTemplate, input: &ReportInput<'_>) -> String {
    let mut out = Vec::new();

    banner(&mut out);
    out.push(template.title.clone());
    banner(&mut out);
    out.push(format!(
        "Generated: {}",
        input.generated_at.format(TIMESTAMP_FORMAT)
    ));
    out.push(format!("Project: {}", template.project));
    out.push(String::new());

    section(&mut out, "SYSTEM SPECIFICATIONS:");
    static_block(&mut out, &template.system_spec);
    out.push(String::new());

    if let Some(stats) = input.stats {
        section(&mut out, "SIMULATION STATISTICS:");
        statistics_block(&mut out, stats, template);
        out.push(String::new());
    }

    section(&mut out, "DETAILED MEASUREMENTS:");
    out.push(render_measurements(input.buckets, template.limits.actuator_max));
    out.push(String::new());

    banner(&mut out);
    section(&mut out, "CONTROL ALGORITHM ANALYSIS:");
    out.extend(template.interpretation.iter().cloned());
    out.push(String::new());

    banner(&mut out);
    out.push("END OF REPORT".to_string());
    banner(&mut out);

    out.join("\n")
}

/// Render the per-temperature table: header, rule, one row per bucket.
///
/// Averages are rounded to whole counts and fan speed to one decimal here
/// and nowhere else.
pub fn render_measurements(buckets: &[Bucket], full_scale: u32) -> String {
    let mut table = vec![
        format!(
            "{:<20} {:<15} {:<15} {}",
            "Temperature (°C)", "ADC Value", "PWM Duty", "Fan Speed %"
        ),
        "-".repeat(WIDTH),
    ];

    table.extend(buckets.iter().map(|bucket| {
        format!(
            "{:<20} {:<15.0} {:<15.0} {:.1}",
            bucket.key,
            bucket.avg_converter(),
            bucket.avg_actuator(),
            bucket.percentage(full_scale)
        )
    }));
    table.join("\n")
}

fn statistics_block(out: &mut Vec<String>, stats: &StatsSummary, template: &ReportTemplate) {
    let limits = &template.limits;
    out.push(format!("  Total Samples:      {}", stats.count));
    out.push(format!(
        "  Temperature Range:  {}°C - {}°C",
        stats.sensed.min, stats.sensed.max
    ));
    out.push(format!("  Average Temp:       {:.1}°C", stats.sensed.mean));
    out.push(String::new());
    out.push(format!(
        "  ADC Range:          {} - {} (0-{})",
        stats.converter.min, stats.converter.max, limits.converter_max
    ));
    out.push(format!("  Average ADC:        {:.0}", stats.converter.mean));
    out.push(String::new());
    out.push(format!(
        "  PWM Duty Range:     {} - {} (0-{})",
        stats.actuator.min, stats.actuator.max, limits.actuator_max
    ));
    out.push(format!("  Average PWM:        {:.0}", stats.actuator.mean));
    out.push(format!(
        "  PWM Utilization:    {:.1}%",
        stats.utilization(limits.actuator_max)
    ));
}

fn static_block(out: &mut Vec<String>, lines: &[String]) {
    for line in lines {
        if line.is_empty() {
            out.push(String::new());
        } else {
            out.push(format!("  {}", line));
        }
    }
}

fn section(out: &mut Vec<String>, heading: &str) {
    out.push(heading.to_string());
    out.push("-".repeat(WIDTH));
}

fn banner(out: &mut Vec<String>) {
    out.push("=".repeat(WIDTH));
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod renderer_tests;

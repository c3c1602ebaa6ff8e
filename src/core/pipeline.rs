use crate::core::fibonacci;
use crate::core::{ConfigProvider, OutputFormat, Person, Pipeline, ReportSink, RosterSummary};
use crate::domain::services;
use crate::utils::error::Result;

pub struct RosterPipeline<S: ReportSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: ReportSink, C: ConfigProvider> RosterPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

impl<S: ReportSink, C: ConfigProvider> Pipeline for RosterPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Person>> {
        // 固定名單：程式的唯一輸入
        tracing::debug!("Building the sample roster");
        let roster = vec![
            Person::new("Alice Johnson", 25, "alice@example.com")?,
            Person::new("Bob Smith", 17, "bob@example.com")?,
            Person::new("Charlie Brown", 30, "charlie@example.com")?,
            Person::new("Diana Prince", 70, "diana@example.com")?,
        ];
        Ok(roster)
    }

    fn transform(&self, roster: Vec<Person>) -> Result<RosterSummary> {
        let adults = services::filter_adults(&roster);
        let age_groups = services::group_by_age(&roster);
        let oldest = services::oldest(&roster).cloned();

        // 費氏數列與名單無關，但屬於同一份報告
        let fib_count = self.config.fib_count();
        tracing::debug!("Generating {} Fibonacci terms", fib_count);
        let fibonacci = fibonacci::generate(fib_count);

        Ok(RosterSummary {
            total: roster.len(),
            adults,
            age_groups,
            oldest,
            fibonacci,
        })
    }

    fn load(&self, summary: RosterSummary) -> Result<String> {
        let report = match self.config.output_format() {
            OutputFormat::Text => render_text(&summary),
            OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
        };

        self.sink.write_report(&report)?;
        Ok(report)
    }
}

fn render_text(summary: &RosterSummary) -> String {
    let mut lines = Vec::new();

    lines.push("People Report".to_string());
    lines.push("=".repeat(40));

    lines.push(format!("Total people: {}", summary.total));
    lines.push(format!("Adults: {}", summary.adults.len()));

    for (bucket, members) in &summary.age_groups {
        lines.push(format!("{}: {}", bucket, members.len()));
    }

    lines.push(String::new());
    lines.push("Adults:".to_string());
    for person in &summary.adults {
        lines.push(person.to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "Fibonacci sequence (first {} numbers):",
        summary.fibonacci.len()
    ));
    let terms: Vec<String> = summary.fibonacci.iter().map(|n| n.to_string()).collect();
    lines.push(format!("[{}]", terms.join(", ")));

    if let Some(oldest) = &summary.oldest {
        lines.push(String::new());
        lines.push(format!("Oldest person: {}", oldest));
    }

    lines.join("\n")
}

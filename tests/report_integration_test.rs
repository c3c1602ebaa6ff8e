use people_report::utils::validation::Validate;
use people_report::{
    CliConfig, OutputFormat, ReportEngine, ReportError, ReportSink, Result, RosterPipeline,
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct MemorySink {
    reports: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    fn new() -> Self {
        Self::default()
    }

    fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl ReportSink for MemorySink {
    fn write_report(&self, report: &str) -> Result<()> {
        self.reports.lock().unwrap().push(report.to_string());
        Ok(())
    }
}

fn test_config(fib_count: usize, format: OutputFormat) -> CliConfig {
    CliConfig {
        fib_count,
        format,
        verbose: false,
    }
}

#[test]
fn test_end_to_end_text_report() {
    let sink = MemorySink::new();
    let pipeline = RosterPipeline::new(sink.clone(), test_config(15, OutputFormat::Text));
    let engine = ReportEngine::new(pipeline);

    let report = engine.run().unwrap();

    let expected = "People Report\n\
        ========================================\n\
        Total people: 4\n\
        Adults: 3\n\
        minors: 1\n\
        adults: 2\n\
        seniors: 1\n\
        \n\
        Adults:\n\
        Person{name='Alice Johnson', age=25, email='alice@example.com'}\n\
        Person{name='Charlie Brown', age=30, email='charlie@example.com'}\n\
        Person{name='Diana Prince', age=70, email='diana@example.com'}\n\
        \n\
        Fibonacci sequence (first 15 numbers):\n\
        [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377]\n\
        \n\
        Oldest person: Person{name='Diana Prince', age=70, email='diana@example.com'}";
    assert_eq!(report, expected);

    // The sink received exactly what the engine returned
    let written = sink.reports();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0], report);
}

#[test]
fn test_end_to_end_json_report() {
    let sink = MemorySink::new();
    let pipeline = RosterPipeline::new(sink.clone(), test_config(15, OutputFormat::Json));
    let engine = ReportEngine::new(pipeline);

    let report = engine.run().unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(value["total"], 4);

    let adults: Vec<&str> = value["adults"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(adults, vec!["Alice Johnson", "Charlie Brown", "Diana Prince"]);

    assert_eq!(value["age_groups"]["minors"].as_array().unwrap().len(), 1);
    assert_eq!(value["age_groups"]["adults"].as_array().unwrap().len(), 2);
    assert_eq!(value["age_groups"]["seniors"].as_array().unwrap().len(), 1);

    assert_eq!(value["oldest"]["name"], "Diana Prince");
    assert_eq!(value["oldest"]["age"], 70);

    let fibonacci = value["fibonacci"].as_array().unwrap();
    assert_eq!(fibonacci.len(), 15);
    assert_eq!(fibonacci[14], 377);
}

#[test]
fn test_end_to_end_zero_fib_count() {
    let sink = MemorySink::new();
    let pipeline = RosterPipeline::new(sink, test_config(0, OutputFormat::Text));
    let engine = ReportEngine::new(pipeline);

    let report = engine.run().unwrap();

    assert!(report.contains("Fibonacci sequence (first 0 numbers):\n[]"));
    assert!(report.contains("Total people: 4"));
}

#[test]
fn test_config_rejects_out_of_range_fib_count() {
    let config = test_config(94, OutputFormat::Text);

    let err = config.validate().unwrap_err();
    match err {
        ReportError::InvalidArgument { field, .. } => assert_eq!(field, "fib-count"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_config_accepts_defaults() {
    assert!(test_config(15, OutputFormat::Text).validate().is_ok());
}

//! Tests for `src/pipeline.rs` — utterance to outcome.

use chrono::NaiveDate;
use wayfarer::catalog::{parse_catalog, FlightRecord};
use wayfarer::config::Config;
use wayfarer::pipeline::{IntentPipeline, PipelineOutcome};

fn sample_catalog() -> Vec<FlightRecord> {
    parse_catalog(include_str!("../../data/flights.json")).expect("sample catalog parses")
}

fn jan_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
}

fn pipeline() -> IntentPipeline {
    IntentPipeline::with_defaults().expect("patterns compile")
}

#[test]
fn full_request_returns_ranked_results() {
    let outcome = pipeline().handle(
        "I want to fly to Goa on 5th December",
        jan_first(),
        &sample_catalog(),
    );

    let (destination, date, flights, spoken_summary) = match outcome {
        PipelineOutcome::Results {
            destination,
            date,
            flights,
            spoken_summary,
        } => (destination, date, flights, spoken_summary),
        other => panic!("expected results, got {other:?}"),
    };

    assert_eq!(destination, "Goa");
    assert_eq!(date, "2025-12-05");
    assert_eq!(flights.len(), 3);
    assert!(flights.windows(2).all(|w| w[0].price_inr <= w[1].price_inr));

    assert!(spoken_summary.starts_with("Searching flights from Bengaluru to Goa on Fri, 5 Dec 2025."));
    assert!(spoken_summary.contains("I found 3 options."));
    assert!(spoken_summary.contains(
        "IndiGo 6E-512 at 06:10, price ₹4890; Akasa Air QP-1334 at 17:05, price ₹4890"
    ));
    assert!(!spoken_summary.contains("AI-1821"), "only two options are read out");
}

#[test]
fn missing_date_asks_for_clarification() {
    let outcome = pipeline().handle("take me to Goa", jan_first(), &sample_catalog());
    assert_eq!(
        outcome,
        PipelineOutcome::NeedsDateClarification {
            destination: "Goa".to_owned()
        }
    );
    assert!(outcome.flights().is_none());
    assert!(outcome
        .speech()
        .starts_with("I heard you want to go to Goa. What day should I check?"));
}

#[test]
fn missing_destination_defaults_to_delhi() {
    let outcome = pipeline().handle("hello there", jan_first(), &sample_catalog());
    assert_eq!(
        outcome,
        PipelineOutcome::NeedsDateClarification {
            destination: "Delhi".to_owned()
        }
    );

    let outcome = pipeline().handle("on 5th December", jan_first(), &sample_catalog());
    match outcome {
        PipelineOutcome::Results { destination, flights, .. } => {
            assert_eq!(destination, "Delhi");
            assert_eq!(flights.len(), 2);
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn unknown_route_gets_fallback_flight() {
    let outcome = pipeline().handle("Pune on 2025-12-05", jan_first(), &sample_catalog());
    let flights = outcome.flights().expect("results");
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].destination, "Pune");
    assert_eq!(flights[0].price_inr, 6120);
    assert!(outcome.speech().contains("I found 1 option."));
    assert!(outcome.speech().contains("IndiGo 6E-999 at 09:20, price ₹6120"));
}

#[test]
fn relative_date_uses_reference() {
    let outcome = pipeline().handle("fly to Goa next Friday", jan_first(), &[]);
    match outcome {
        PipelineOutcome::Results { date, .. } => assert_eq!(date, "2025-01-03"),
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn configured_pipeline_uses_origin_and_option_count() {
    let config: Config = toml::from_str(
        r#"
[catalog]
origin = "Mumbai"

[nlu]
default_destination = "Goa"

[speech]
spoken_options = 1
"#,
    )
    .expect("config parses");

    let pipeline = IntentPipeline::from_config(&config).expect("patterns compile");
    assert_eq!(pipeline.origin(), "Mumbai");

    let outcome = pipeline.handle("2025-12-05", jan_first(), &sample_catalog());
    match outcome {
        PipelineOutcome::Results {
            destination,
            flights,
            spoken_summary,
            ..
        } => {
            assert_eq!(destination, "Goa");
            assert_eq!(flights.len(), 1);
            assert_eq!(flights[0].flight_number, "6E-5391");
            assert!(spoken_summary.starts_with("Searching flights from Mumbai to Goa"));
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn outcome_serializes_with_tag() {
    let outcome = pipeline().handle("take me to Goa", jan_first(), &[]);
    let json = serde_json::to_value(&outcome).expect("should serialize");
    assert_eq!(json["outcome"], "needs_date_clarification");
    assert_eq!(json["destination"], "Goa");
}

//! Playground scenarios.
//!
//! Each scenario exercises one behavior of the library on concrete values and
//! records what happened as a list of [`Observation`]s. An observation carries
//! the expected outcome next to the actual one, so a run is judged by
//! comparing the two rather than by panicking.

use std::collections::HashSet;
use std::fmt;

use semantic_type_catalog::{
    CaselessString, EmailAddress, EmailAddressExt, FixedLengthWords, NonEmptyVec, NonEmptyVecExt,
    Seconds,
};
use semantic_type_core::{SemanticSpec, SemanticType};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A named scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    Caseless,
    NonEmpty,
    Email,
    Seconds,
    Words,
    Mutation,
    RoundTrip,
}

impl Scenario {
    /// Every concrete scenario, in run order.
    pub const ALL: [Scenario; 7] = [
        Scenario::Caseless,
        Scenario::NonEmpty,
        Scenario::Email,
        Scenario::Seconds,
        Scenario::Words,
        Scenario::Mutation,
        Scenario::RoundTrip,
    ];

    /// Accepted command-line names, including `all`.
    pub const NAMES: [&'static str; 8] = [
        "caseless",
        "non-empty",
        "email",
        "seconds",
        "words",
        "mutation",
        "round-trip",
        "all",
    ];

    /// Command-line name of the scenario.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Caseless => "caseless",
            Scenario::NonEmpty => "non-empty",
            Scenario::Email => "email",
            Scenario::Seconds => "seconds",
            Scenario::Words => "words",
            Scenario::Mutation => "mutation",
            Scenario::RoundTrip => "round-trip",
        }
    }

    /// Resolve a command-line name; `all` expands to every scenario.
    pub fn select(name: &str) -> Option<Vec<Scenario>> {
        if name == "all" {
            return Some(Scenario::ALL.to_vec());
        }
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == name)
            .map(|scenario| vec![scenario])
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a scenario and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub scenario: Scenario,
    pub step: String,
    pub outcome: String,
    pub expected: String,
}

impl Observation {
    /// Whether the step behaved as documented.
    pub fn as_expected(&self) -> bool {
        self.outcome == self.expected
    }
}

/// Collects observations for one scenario and logs each of them.
struct Recorder {
    scenario: Scenario,
    observations: Vec<Observation>,
}

impl Recorder {
    fn new(scenario: Scenario) -> Self {
        Recorder {
            scenario,
            observations: Vec::new(),
        }
    }

    fn record(&mut self, step: impl Into<String>, outcome: impl Into<String>, expected: &str) {
        let observation = Observation {
            scenario: self.scenario,
            step: step.into(),
            outcome: outcome.into(),
            expected: expected.to_string(),
        };
        if observation.as_expected() {
            debug!(
                scenario = %self.scenario,
                step = %observation.step,
                outcome = %observation.outcome,
                "Step behaved as expected"
            );
        } else {
            warn!(
                scenario = %self.scenario,
                step = %observation.step,
                outcome = %observation.outcome,
                expected = %observation.expected,
                "Step diverged"
            );
        }
        self.observations.push(observation);
    }

    fn finish(self) -> Vec<Observation> {
        self.observations
    }
}

/// Render a `Result` the same way for every step.
fn describe<T: fmt::Debug, E: fmt::Display>(result: Result<T, E>) -> String {
    match result {
        Ok(value) => format!("ok {:?}", value),
        Err(e) => format!("rejected: {}", e),
    }
}

/// Run one scenario.
pub fn run(scenario: Scenario) -> Vec<Observation> {
    let mut recorder = Recorder::new(scenario);
    match scenario {
        Scenario::Caseless => caseless(&mut recorder),
        Scenario::NonEmpty => non_empty(&mut recorder),
        Scenario::Email => email(&mut recorder),
        Scenario::Seconds => seconds(&mut recorder),
        Scenario::Words => words(&mut recorder),
        Scenario::Mutation => mutation(&mut recorder),
        Scenario::RoundTrip => round_trip(&mut recorder),
    }
    let observations = recorder.finish();
    let failed = observations.iter().filter(|o| !o.as_expected()).count();
    info!(
        scenario = %scenario,
        steps = observations.len(),
        failed,
        "Scenario finished"
    );
    observations
}

/// Run several scenarios in order.
pub fn run_all(scenarios: &[Scenario]) -> Vec<Observation> {
    scenarios.iter().flat_map(|&scenario| run(scenario)).collect()
}

// =========================================================================
// Scenarios
// =========================================================================

fn caseless(recorder: &mut Recorder) {
    let hello = CaselessString::new("HeLLo".to_string());
    recorder.record("new(\"HeLLo\")", format!("{:?}", hello), "(CaselessStringSpec): \"hello\"");

    let distinct: HashSet<CaselessString> = ["Rust", "RUST", "rust"]
        .into_iter()
        .map(|s| CaselessString::new(s.to_string()))
        .collect();
    recorder.record(
        "hash set of \"Rust\", \"RUST\", \"rust\"",
        format!("{} element(s)", distinct.len()),
        "1 element(s)",
    );
}

fn non_empty(recorder: &mut Recorder) {
    recorder.record(
        "create([])",
        describe(NonEmptyVec::<i64>::create(Vec::new())),
        "rejected: array is empty",
    );

    let outcome = NonEmptyVec::<i64>::create(vec![1, 2, 3])
        .map(|list| format!("first {}, last {}", list.first(), list.last()));
    recorder.record("create([1, 2, 3])", describe(outcome), "ok \"first 1, last 3\"");
}

fn email(recorder: &mut Recorder) {
    let outcome = EmailAddress::create("joe@gmail.com".to_string())
        .map(|email| format!("user {}, host {}", email.user(), email.host()));
    recorder.record(
        "create(\"joe@gmail.com\")",
        describe(outcome),
        "ok \"user joe, host gmail.com\"",
    );

    let payload = EmailAddress::create("@gmail.com".to_string()).map_err(|e| e.candidate);
    recorder.record(
        "create(\"@gmail.com\")",
        describe(payload.map(|email| email.into_raw_value())),
        "rejected: @gmail.com",
    );
}

fn seconds(recorder: &mut Recorder) {
    let sum = Seconds::new(5) + Seconds::new(10);
    recorder.record("Seconds(5) + Seconds(10)", sum.to_string(), "15");

    let scalar = Seconds::new(5) + 7;
    recorder.record("Seconds(5) + 7", scalar.to_string(), "12");

    let mut total = Seconds::new(60);
    total -= Seconds::new(15);
    total *= 2;
    recorder.record("(60 - 15) * 2 in place", total.to_string(), "90");
}

fn words(recorder: &mut Recorder) {
    let candidate: Vec<String> = ["water", "melon", "ab"].iter().map(|w| w.to_string()).collect();
    let outcome =
        FixedLengthWords::<5>::create(candidate).map_err(|e| format!("{:?}", e.excluded_words));
    recorder.record(
        "create([\"water\", \"melon\", \"ab\"])",
        describe(outcome),
        "rejected: [\"ab\"]",
    );
}

/// Error for [`ShortNameSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("name is too long: {name}")]
pub struct NameTooLong {
    pub name: String,
}

/// Names shorter than five characters.
pub enum ShortNameSpec {}

impl SemanticSpec for ShortNameSpec {
    type RawValue = String;
    type Error = NameTooLong;

    fn validate(candidate: String) -> Result<String, NameTooLong> {
        if candidate.chars().count() < 5 {
            Ok(candidate)
        } else {
            Err(NameTooLong { name: candidate })
        }
    }
}

fn mutation(recorder: &mut Recorder) {
    let mut name = match SemanticType::<ShortNameSpec>::create("Joe".to_string()) {
        Ok(name) => name,
        Err(e) => {
            recorder.record("create(\"Joe\")", format!("rejected: {}", e), "ok");
            return;
        }
    };

    let result = name.mutating_try_map(|raw| {
        raw.pop();
        raw.push_str("seph");
    });
    recorder.record("rename Joe to Joseph", describe(result), "rejected: name is too long: Joseph");
    recorder.record("value after failed rename", name.raw_value().clone(), "Joe");

    let result = name.mutating_try_map(|raw| raw.push('y'));
    recorder.record("rename Joe to Joey", describe(result), "ok ()");
    recorder.record("value after rename", name.raw_value().clone(), "Joey");
}

fn round_trip(recorder: &mut Recorder) {
    let outcome = EmailAddress::create("Ada@Example.com".to_string())
        .map_err(|e| e.to_string())
        .and_then(|email| serde_json::to_string(&email).map_err(|e| e.to_string()));
    recorder.record("encode email", describe(outcome), "ok \"\\\"ada@example.com\\\"\"");

    let decoded = serde_json::from_str::<EmailAddress>("\"Ada@Example.com\"")
        .map(|email| email.host().to_string());
    recorder.record("decode email", describe(decoded), "ok \"example.com\"");

    let rejected = serde_json::from_str::<NonEmptyVec<i64>>("[]").map_err(|e| {
        if e.to_string().contains("array is empty") {
            "gateway refused".to_string()
        } else {
            e.to_string()
        }
    });
    recorder.record("decode [] as NonEmptyVec", describe(rejected), "rejected: gateway refused");
}

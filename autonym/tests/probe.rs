use autonym_core::code::{CODE_COUNT, Code};
use autonym_core::Error;
use autonym_core::lookup::{IsoLookup, LanguageInfo, Lookup};
use autonym_core::probe::Probe;
use autonym_core::report::EntryBag;
use std::cell::RefCell;

struct Name(String);

impl LanguageInfo for Name {
    fn autonym(&self) -> String {
        self.0.clone()
    }
}

/// Records every code asked for and fails on `fail_on`.
#[derive(Default)]
struct Recording {
    seen: RefCell<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl Lookup for &Recording {
    type Info = Name;

    fn lookup(&self, code: &str) -> Result<Name, Error> {
        self.seen.borrow_mut().push(code.to_string());

        if self.fail_on == Some(code) {
            return Err(Error::InvalidCode(code.to_string()));
        }

        let name = match code {
            "en" => "English",
            "ab" => "аҧсуа бызшәа",
            other => other,
        };
        Ok(Name(name.to_string()))
    }
}

fn run_to_string(lookup: impl Lookup) -> (String, anyhow::Result<()>) {
    let mut out = Vec::new();
    let result = Probe::new(lookup).write_to(&mut out).map(|_| ());
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn every_code_is_attempted_in_order() {
    let recording = Recording::default();
    let (out, result) = run_to_string(&recording);
    result.unwrap();

    let seen = recording.seen.borrow();
    assert_eq!(seen.len(), CODE_COUNT);
    assert_eq!(seen.first().map(String::as_str), Some("aa"));
    assert_eq!(seen.last().map(String::as_str), Some("zz"));

    assert_eq!(out, "ab аҧсуа бызшәа\nen English\n");
}

#[test]
fn failing_lookup_aborts_the_run() {
    let recording = Recording { fail_on: Some("fa"), ..Recording::default() };
    let (out, result) = run_to_string(&recording);

    let err = result.unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidCode(code)) if code == "fa"));

    assert_eq!(recording.seen.borrow().last().map(String::as_str), Some("fa"));
    // Lines before the failure were already written.
    assert_eq!(out, "ab аҧсуа бызшәа\nen English\n");
}

#[test]
fn iso_lookup_reports_real_languages_only() {
    let mut bag = EntryBag::new();
    let summary = Probe::new(IsoLookup::new()).run(&mut bag).unwrap();

    assert_eq!(summary.visited, CODE_COUNT);
    assert_eq!(summary.emitted, bag.entries().len());

    let find = |code: &str| bag.entries().iter().find(|e| e.code.as_str() == code);
    assert!(find("de").is_some());
    assert!(find("xx").is_none());
    assert!(find("qq").is_none());

    for entry in bag.entries() {
        assert_ne!(entry.autonym, entry.code.as_str());
    }

    let codes: Vec<Code> = bag.entries().iter().map(|e| e.code).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
}

#[test]
fn iso_lookup_runs_are_identical() {
    let (first, result) = run_to_string(IsoLookup::new());
    result.unwrap();
    let (second, result) = run_to_string(IsoLookup::new());
    result.unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert!(first.lines().all(|line| line.split_once(' ').is_some_and(|(code, _)| code.len() == 2)));
}

//! Integration tests for console info and warning output.

use std::cell::RefCell;
use std::rc::Rc;

use logging::{Console, Verbosity, VerbosityGate, WARNING_PREFIX};

fn console_at(level: Verbosity) -> Console<Vec<u8>> {
    Console::new(Vec::new(), Rc::new(RefCell::new(VerbosityGate::new(level))))
}

fn output(console: Console<Vec<u8>>) -> String {
    String::from_utf8(console.into_inner()).expect("utf-8")
}

#[test]
fn shown_info_contains_exactly_the_text() {
    let mut console = console_at(Verbosity::Low);
    console.info("x", true).expect("write succeeds");
    assert_eq!(output(console), "x\n");
}

#[test]
fn hidden_info_emits_nothing() {
    let mut console = console_at(Verbosity::Low);
    console.info("x", false).expect("no-op succeeds");
    assert!(output(console).is_empty());
}

#[test]
fn warning_contains_marker_and_text() {
    let mut console = console_at(Verbosity::Medium);
    console.warning("y", true).expect("write succeeds");
    let out = output(console);
    assert!(out.contains(WARNING_PREFIX));
    assert!(out.contains('y'));
    assert_eq!(out, format!("{WARNING_PREFIX}y\n"));
}

#[test]
fn trace_gate_adds_stack_before_the_marker_line() {
    let mut console = console_at(Verbosity::Trace);
    console.warning("y", true).expect("write succeeds");
    let out = output(console);
    let marker_line = out.lines().last().expect("non-empty output");
    assert_eq!(marker_line, format!("{WARNING_PREFIX}y"));
    assert!(out.lines().count() > 1, "expected stack frames before marker");
}

#[test]
fn interleaved_messages_keep_their_order() {
    let mut console = console_at(Verbosity::Low);
    console.info("starting run", true).expect("write succeeds");
    console.warning("slow step", true).expect("write succeeds");
    console.info("run complete", true).expect("write succeeds");

    let out = output(console);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        ["starting run", " !W! slow step", "run complete"]
    );
}

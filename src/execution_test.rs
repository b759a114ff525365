//! # Scheduler Test Suite
//!
//! Tick semantics of [`Pipeline::step`] and [`Pipeline::run`]: per-tick
//! memoization, `Empty`/`Closed` inheritance, termination, and revival of
//! closed branches through graph repair.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::components::{FilterComponent, JoinComponent, MapComponent};
use crate::graph::pipeline::Pipeline;
use crate::poll::Poll;
use crate::sinks::FmtSink;
use crate::source::Source;
use crate::sources::{CounterSource, PulseSource};
use crate::{ComponentNode, SinkNode, SourceNode};

// ============================================================================
// Instrumented test nodes
// ============================================================================

/// A counter that records how often it is polled.
struct CountingSource {
  inner: CounterSource<i32>,
  polls: Rc<Cell<usize>>,
}

impl CountingSource {
  fn new(bound: i32, polls: Rc<Cell<usize>>) -> Self {
    Self {
      inner: CounterSource::new(bound),
      polls,
    }
  }
}

impl Source for CountingSource {
  type Output = i32;

  fn name(&self) -> &str {
    "CountingSource"
  }

  fn poll_next(&mut self) -> Poll {
    self.polls.set(self.polls.get() + 1);
    self.inner.poll_next()
  }

  fn value(&self) -> Option<&i32> {
    self.inner.value()
  }
}

/// A map that counts its invocations through the closure.
fn counting_map(calls: &Rc<Cell<usize>>) -> MapComponent<i32, i32, impl FnMut(&i32) -> i32> {
  let calls = Rc::clone(calls);
  MapComponent::new(move |v: &i32| {
    calls.set(calls.get() + 1);
    v * 2
  })
}

// ============================================================================
// Basic stepping
// ============================================================================

#[test]
fn step_on_an_empty_pipeline_reports_termination() {
  let mut p = Pipeline::new();
  assert!(p.step());
}

#[test]
fn run_terminates_when_every_sink_closes() {
  let mut p = Pipeline::new();
  let out = Rc::new(RefCell::new(String::new()));
  let source = p.create_node(SourceNode::new(CounterSource::new(4)));
  let sink = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out))));
  p.connect(source, sink, 0).unwrap();

  p.run();
  assert_eq!(out.borrow().as_str(), "1 2 3 4 ");
  // Further stepping keeps reporting termination.
  assert!(p.step());
  assert_eq!(out.borrow().as_str(), "1 2 3 4 ");
}

#[test]
fn sinks_are_served_in_ascending_id_order() {
  let mut p = Pipeline::new();
  let out = Rc::new(RefCell::new(String::new()));
  let source = p.create_node(SourceNode::new(CounterSource::new(2)));
  let first = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out))));
  let second = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out))));
  p.connect(source, first, 0).unwrap();
  p.connect(source, second, 0).unwrap();

  p.run();
  // Both sinks observe the same value each tick, lower id first.
  assert_eq!(out.borrow().as_str(), "1 1 2 2 ");
}

// ============================================================================
// Per-tick memoization
// ============================================================================

#[test]
fn shared_upstream_is_polled_once_per_tick() {
  let polls = Rc::new(Cell::new(0));
  let mut p = Pipeline::new();
  let out1 = Rc::new(RefCell::new(String::new()));
  let out2 = Rc::new(RefCell::new(String::new()));
  let source = p.create_node(SourceNode::new(CountingSource::new(3, Rc::clone(&polls))));
  let sink1 = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out1))));
  let sink2 = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out2))));
  p.connect(source, sink1, 0).unwrap();
  p.connect(source, sink2, 0).unwrap();

  assert!(!p.step());
  assert_eq!(polls.get(), 1);
  p.run();
  // Three ready ticks plus the closing tick.
  assert_eq!(polls.get(), 4);
  assert_eq!(out1.borrow().as_str(), "1 2 3 ");
  assert_eq!(out2.borrow().as_str(), "1 2 3 ");
}

#[test]
fn diamond_dependencies_resolve_to_a_single_poll() {
  let polls = Rc::new(Cell::new(0));
  let mut p = Pipeline::new();
  let out = Rc::new(RefCell::new(String::new()));
  let source = p.create_node(SourceNode::new(CountingSource::new(2, Rc::clone(&polls))));
  let left = p.create_node(ComponentNode::new(MapComponent::new(|v: &i32| v * 10)));
  let right = p.create_node(ComponentNode::new(MapComponent::new(|v: &i32| v + 1)));
  let join = p.create_node(ComponentNode::new(JoinComponent::new(|a: &i32, b: &i32| {
    a + b
  })));
  let sink = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out))));
  p.connect(source, left, 0).unwrap();
  p.connect(source, right, 0).unwrap();
  p.connect(left, join, 0).unwrap();
  p.connect(right, join, 1).unwrap();
  p.connect(join, sink, 0).unwrap();

  assert!(!p.step());
  assert_eq!(polls.get(), 1);
  p.run();
  assert_eq!(polls.get(), 3);
  // 10v + (v + 1) for v = 1, 2.
  assert_eq!(out.borrow().as_str(), "12 23 ");
}

// ============================================================================
// Empty and Closed inheritance
// ============================================================================

#[test]
fn empty_upstream_suppresses_the_chain_without_polling_it() {
  let calls = Rc::new(Cell::new(0));
  let mut p = Pipeline::new();
  let out = Rc::new(RefCell::new(String::new()));
  let source = p.create_node(SourceNode::new(PulseSource::new(4, 2)));
  let map = p.create_node(ComponentNode::new(counting_map(&calls)));
  let sink = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out))));
  p.connect(source, map, 0).unwrap();
  p.connect(map, sink, 0).unwrap();

  assert!(!p.step()); // count 1: empty, nothing downstream runs
  assert_eq!(calls.get(), 0);
  assert!(!p.step()); // count 2: ready
  assert_eq!(calls.get(), 1);
  p.run();
  assert_eq!(calls.get(), 2);
  assert_eq!(out.borrow().as_str(), "4 8 ");
}

#[test]
fn a_rejecting_filter_reports_empty_not_closed() {
  let mut p = Pipeline::new();
  let out = Rc::new(RefCell::new(String::new()));
  let source = p.create_node(SourceNode::new(CounterSource::new(6)));
  let filter = p.create_node(ComponentNode::new(FilterComponent::new(|v: &i32| {
    v % 2 == 0
  })));
  let sink = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out))));
  p.connect(source, filter, 0).unwrap();
  p.connect(filter, sink, 0).unwrap();

  p.run();
  // Odd values are dropped for the tick; the stream only ends when the
  // counter itself closes.
  assert_eq!(out.borrow().as_str(), "2 4 6 ");
}

#[test]
fn closed_upstream_closes_the_chain_without_polling_it() {
  let calls = Rc::new(Cell::new(0));
  let mut p = Pipeline::new();
  let out = Rc::new(RefCell::new(String::new()));
  let source = p.create_node(SourceNode::new(CounterSource::new(1)));
  let map = p.create_node(ComponentNode::new(counting_map(&calls)));
  let sink = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out))));
  p.connect(source, map, 0).unwrap();
  p.connect(map, sink, 0).unwrap();

  assert!(!p.step());
  assert_eq!(calls.get(), 1);
  // The source closes; map and sink inherit closure unpolled.
  assert!(p.step());
  assert_eq!(calls.get(), 1);
  assert_eq!(out.borrow().as_str(), "2 ");
}

#[test]
fn closure_of_one_branch_does_not_close_independent_sinks() {
  let mut p = Pipeline::new();
  let out1 = Rc::new(RefCell::new(String::new()));
  let out2 = Rc::new(RefCell::new(String::new()));
  let source1 = p.create_node(SourceNode::new(CounterSource::new(5)));
  let source2 = p.create_node(SourceNode::new(CounterSource::new(10)));
  let join = p.create_node(ComponentNode::new(JoinComponent::new(|a: &i32, b: &i32| {
    a + b
  })));
  let sink1 = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out1))));
  let sink2 = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out2))));
  p.connect(source1, join, 0).unwrap();
  p.connect(source2, join, 1).unwrap();
  p.connect(join, sink1, 0).unwrap();
  p.connect(source2, sink2, 0).unwrap();
  assert!(p.is_valid());

  // Five productive ticks for both branches.
  for _ in 0..5 {
    assert!(!p.step());
  }
  // Source 1 closes at tick six; the independent branch keeps flowing
  // until source 2 is exhausted at tick eleven.
  for _ in 0..5 {
    assert!(!p.step());
  }
  assert!(p.step());

  assert_eq!(out1.borrow().as_str(), "2 4 6 8 10 ");
  assert_eq!(out2.borrow().as_str(), "1 2 3 4 5 6 7 8 9 10 ");
}

// ============================================================================
// Reversible closure
// ============================================================================

#[test]
fn replacing_a_closed_source_revives_the_branch() {
  let mut p = Pipeline::new();
  let out = Rc::new(RefCell::new(String::new()));
  let source = p.create_node(SourceNode::new(CounterSource::new(2)));
  let sink = p.create_node(SinkNode::new(FmtSink::<i32>::new(Rc::clone(&out))));
  p.connect(source, sink, 0).unwrap();

  p.run();
  assert_eq!(out.borrow().as_str(), "1 2 ");

  p.erase_node(source).unwrap();
  let fresh = p.create_node(SourceNode::new(CounterSource::new(3)));
  p.connect(fresh, sink, 0).unwrap();
  assert!(p.is_valid());

  p.run();
  assert_eq!(out.borrow().as_str(), "1 2 1 2 3 ");
}

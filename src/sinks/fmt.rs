//! A sink that streams values into a shared string.

use std::cell::RefCell;
use std::fmt::{Display, Write as _};
use std::rc::Rc;

use crate::node::SharedNode;
use crate::poll::Poll;
use crate::sink::Sink;
use crate::slot::InputSlot;

/// A sink that appends each consumed value to a shared string, followed by
/// a single space.
pub struct FmtSink<T: Display + 'static> {
  input: InputSlot<T>,
  out: Rc<RefCell<String>>,
  name: String,
}

impl<T: Display + 'static> FmtSink<T> {
  /// Creates a sink writing into `out`.
  pub fn new(out: Rc<RefCell<String>>) -> Self {
    Self {
      input: InputSlot::new(),
      out,
      name: "FmtSink".to_string(),
    }
  }

  /// Overrides the display name of this sink.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl<T: Display + 'static> Sink for FmtSink<T> {
  type Input = T;

  fn name(&self) -> &str {
    &self.name
  }

  fn poll_next(&mut self) -> Poll {
    let Some(value) = self.input.value() else {
      return Poll::Empty;
    };
    // Writing to a String cannot fail.
    let _ = write!(self.out.borrow_mut(), "{} ", *value);
    Poll::Ready
  }

  fn connect(&mut self, source: Option<&SharedNode>, slot: usize) {
    if slot == 0 {
      self.input.bind(source);
    }
  }
}

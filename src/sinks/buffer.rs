//! A sink that collects values into a shared vector.

use std::cell::RefCell;
use std::rc::Rc;

use crate::node::SharedNode;
use crate::poll::Poll;
use crate::sink::Sink;
use crate::slot::InputSlot;

/// A sink that pushes each consumed value into a shared buffer.
///
/// The buffer is handed in at construction and stays owned by the caller,
/// so the collected values remain reachable while the sink itself lives
/// inside the pipeline.
pub struct BufferSink<T: Clone + 'static> {
  input: InputSlot<T>,
  buffer: Rc<RefCell<Vec<T>>>,
  name: String,
}

impl<T: Clone + 'static> BufferSink<T> {
  /// Creates a sink writing into `buffer`.
  pub fn new(buffer: Rc<RefCell<Vec<T>>>) -> Self {
    Self {
      input: InputSlot::new(),
      buffer,
      name: "BufferSink".to_string(),
    }
  }

  /// Overrides the display name of this sink.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl<T: Clone + 'static> Sink for BufferSink<T> {
  type Input = T;

  fn name(&self) -> &str {
    &self.name
  }

  fn poll_next(&mut self) -> Poll {
    let Some(value) = self.input.value() else {
      return Poll::Empty;
    };
    self.buffer.borrow_mut().push(value.clone());
    Poll::Ready
  }

  fn connect(&mut self, source: Option<&SharedNode>, slot: usize) {
    if slot == 0 {
      self.input.bind(source);
    }
  }
}

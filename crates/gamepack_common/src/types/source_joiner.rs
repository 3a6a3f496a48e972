use super::source::Source;

/// Pieces of a rendered chunk, emitted one per line.
#[derive(Default)]
pub struct SourceJoiner<'source> {
  sources: Vec<Box<dyn Source + Send + 'source>>,
}

impl<'source> SourceJoiner<'source> {
  pub fn append_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.sources.push(Box::new(source));
  }

  pub fn join(&self) -> String {
    let len = self.sources.iter().map(|source| source.content().len() + 1).sum::<usize>();
    let mut joined = String::with_capacity(len);
    for (index, source) in self.sources.iter().enumerate() {
      if index > 0 {
        joined.push('\n');
      }
      joined.push_str(source.content());
    }
    joined
  }
}

#[test]
fn test_source_joiner() {
  let mut joiner = SourceJoiner::default();
  joiner.append_source("'use strict';");
  joiner.append_source(String::from("module.exports = 1;\n"));
  assert_eq!(joiner.join(), "'use strict';\nmodule.exports = 1;\n");
  assert_eq!(SourceJoiner::default().join(), "");
}

/// Source of identifiers for parsed entries.
///
/// Parsing takes the generator by reference so callers decide whether ids are
/// deterministic (tests, repeatable reports) or globally unique.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Monotonic `"<prefix>-<n>"` ids starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Explicit page state. Every fetch and form submission is driven by one of
/// these enums; the view branches on the variant instead of toggling element
/// visibility by hand.

#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submit {
    Idle,
    Submitting,
    Done,
    Failed(String),
}

impl Submit {
    pub fn in_flight(&self) -> bool {
        matches!(self, Submit::Submitting)
    }
}

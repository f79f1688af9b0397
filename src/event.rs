use crate::contrib::types::Contribution;
use crossterm::event::KeyEvent;

/// Payload of a completed fetch, already classified on the worker task.
#[derive(Debug)]
pub struct FetchedBatch {
    pub contributions: Vec<Contribution>,
    pub rate_limit: Option<u32>,
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    FetchDone(Result<FetchedBatch, String>),
}

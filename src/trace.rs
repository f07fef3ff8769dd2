//! # Trace Protocol
//!
//! Every special operation on a traced value emits exactly one [`Event`], in
//! the order the operations run. This ordered stream is the only thing the
//! value types expose about their lifecycle, and it is what the tests and the
//! CLI observe.
//!
//! ## Sinks
//!
//! An emitted event goes to two places:
//!
//! - the `log` facade, at `trace` level under the [`TARGET`] target, so a
//!   binary running with `--log-level trace` sees events live;
//! - every [`record`]ing that is open on the current thread.
//!
//! Recordings nest: an event emitted inside an inner recording also lands in
//! each enclosing one. Titles ([`title`]) are interleaved into recordings for
//! human readers but are not events; [`Transcript::events`] skips them.
//!
//! ```
//! use compound_objects::leaf::LeafValue;
//! use compound_objects::trace;
//!
//! let ((), transcript) = trace::record(|| {
//!     let _leaf = LeafValue::default();
//! });
//! assert_eq!(
//!     transcript.lines(),
//!     vec!["C default construction", "C destruction"]
//! );
//! ```

use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::mem;

/// Log target used for every trace event and title.
pub const TARGET: &str = "compound_objects::trace";

thread_local! {
    static RECORDINGS: RefCell<Vec<Vec<Record>>> = const { RefCell::new(Vec::new()) };
}

/// One of the six special operations a traced type provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialOp {
    DefaultConstruction,
    CopyConstruction,
    MoveConstruction,
    CopyAssignment,
    MoveAssignment,
    Destruction,
}

impl SpecialOp {
    /// All operations, in declaration order.
    pub const ALL: [SpecialOp; 6] = [
        SpecialOp::DefaultConstruction,
        SpecialOp::CopyConstruction,
        SpecialOp::MoveConstruction,
        SpecialOp::CopyAssignment,
        SpecialOp::MoveAssignment,
        SpecialOp::Destruction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpecialOp::DefaultConstruction => "default construction",
            SpecialOp::CopyConstruction => "copy construction",
            SpecialOp::MoveConstruction => "move construction",
            SpecialOp::CopyAssignment => "copy assignment",
            SpecialOp::MoveAssignment => "move assignment",
            SpecialOp::Destruction => "destruction",
        }
    }

    /// True for the three ways a value comes into existence.
    pub fn is_construction(self) -> bool {
        matches!(
            self,
            SpecialOp::DefaultConstruction
                | SpecialOp::CopyConstruction
                | SpecialOp::MoveConstruction
        )
    }

    /// True for operations that duplicate a payload.
    pub fn is_copy(self) -> bool {
        matches!(self, SpecialOp::CopyConstruction | SpecialOp::CopyAssignment)
    }

    /// True for operations that transfer a payload out of their source.
    pub fn is_move(self) -> bool {
        matches!(self, SpecialOp::MoveConstruction | SpecialOp::MoveAssignment)
    }
}

impl fmt::Display for SpecialOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single trace event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// A special operation fired on the type labelled `label`.
    Special { label: &'static str, op: SpecialOp },
    /// An ordinary method call, such as an overridable behavior.
    Call {
        label: &'static str,
        text: &'static str,
    },
}

impl Event {
    /// Label of the type that emitted this event.
    pub fn label(&self) -> &'static str {
        match self {
            Event::Special { label, .. } | Event::Call { label, .. } => label,
        }
    }

    /// The special operation, if this event is one.
    pub fn op(&self) -> Option<SpecialOp> {
        match self {
            Event::Special { op, .. } => Some(*op),
            Event::Call { .. } => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Special { label, op } => write!(f, "{} {}", label, op),
            Event::Call { text, .. } => f.write_str(text),
        }
    }
}

/// An entry in a [`Transcript`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Record {
    /// A section title, rendered as a banner.
    Title { text: String, underline: char },
    Event(Event),
}

/// Everything captured by one [`record`] call, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    records: Vec<Record>,
}

impl Transcript {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over the events, skipping titles.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.records.iter().filter_map(|record| match record {
            Record::Event(event) => Some(event),
            Record::Title { .. } => None,
        })
    }

    /// The rendered event lines, skipping titles.
    pub fn lines(&self) -> Vec<String> {
        self.events().map(ToString::to_string).collect()
    }

    /// Number of events for which `predicate` holds.
    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events().filter(|event| predicate(event)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Emit `event` to the log and to every open recording.
pub fn emit(event: Event) {
    log::trace!(target: TARGET, "{}", event);
    push(Record::Event(event));
}

/// Emit a [`Event::Special`] for the type labelled `label`.
pub fn special(label: &'static str, op: SpecialOp) {
    emit(Event::Special { label, op });
}

/// Emit a [`Event::Call`] for the type labelled `label`.
pub fn call(label: &'static str, text: &'static str) {
    emit(Event::Call { label, text });
}

/// Add a section title to every open recording.
pub fn title(text: impl Into<String>, underline: char) {
    let text = text.into();
    log::debug!(target: TARGET, "{}", text);
    push(Record::Title { text, underline });
}

/// Run `f` and capture everything emitted on this thread while it runs.
///
/// Values created inside `f` and returned from it are not destroyed inside
/// the recording, so their destruction events are not captured.
pub fn record<R>(f: impl FnOnce() -> R) -> (R, Transcript) {
    let recording = Recording::open();
    let value = f();
    let transcript = recording.finish();
    (value, transcript)
}

fn push(record: Record) {
    // Values can be dropped while thread-locals are being torn down.
    let _ = RECORDINGS.try_with(|recordings| {
        let mut recordings = recordings.borrow_mut();
        if let Some((innermost, outer)) = recordings.split_last_mut() {
            for recording in outer {
                recording.push(record.clone());
            }
            innermost.push(record);
        }
    });
}

/// Open recording on the current thread. Closed on drop, including on unwind.
struct Recording {
    depth: usize,
}

impl Recording {
    fn open() -> Self {
        let depth = RECORDINGS.with(|recordings| {
            let mut recordings = recordings.borrow_mut();
            recordings.push(Vec::new());
            recordings.len()
        });
        Self { depth }
    }

    fn finish(self) -> Transcript {
        let records = RECORDINGS.with(|recordings| {
            recordings
                .borrow_mut()
                .get_mut(self.depth - 1)
                .map(mem::take)
                .unwrap_or_default()
        });
        Transcript { records }
    }
}

impl Drop for Recording {
    fn drop(&mut self) {
        let _ = RECORDINGS.try_with(|recordings| {
            recordings.borrow_mut().truncate(self.depth - 1);
        });
    }
}

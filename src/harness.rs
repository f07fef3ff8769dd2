//! # Scenarios
//!
//! Each [`Scenario`] exercises a group of special operations and destroys
//! everything it creates before returning, so scenarios can run in any
//! combination. [`run`] records the chosen scenarios into one [`Transcript`].
//!
//! The `compound` scenario walks the whole compound-object lifecycle in a
//! single scope: default construction, borrowing a utility, moving a value out
//! of a function return, copy and move construction, dispatch through base
//! handles, and teardown at scope exit.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::base::{BaseComposite, Composite};
use crate::derived::DerivedComposite;
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::leaf::LeafValue;
use crate::lifecycle::Lifecycle;
use crate::trace::{self, Transcript};
use crate::utility::UtilityValue;

/// A self-contained demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    Compound,
    Leaf,
    SelfAssignment,
    VirtualDestruction,
}

impl Scenario {
    /// All scenarios, in the order a full run executes them.
    pub const ALL: [Scenario; 4] = [
        Scenario::Compound,
        Scenario::Leaf,
        Scenario::SelfAssignment,
        Scenario::VirtualDestruction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Compound => "compound",
            Scenario::Leaf => "leaf",
            Scenario::SelfAssignment => "self-assignment",
            Scenario::VirtualDestruction => "virtual-destruction",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Compound => {
                "Construct, move out of a return, copy, move and dispatch a compound object"
            }
            Scenario::Leaf => "Copy and move a leaf value's owned payload",
            Scenario::SelfAssignment => "Copy- and move-assign a composite to itself",
            Scenario::VirtualDestruction => "Destroy a derived composite through a base handle",
        }
    }

    /// Run this scenario, emitting its titles and events.
    pub fn run(self) {
        log::debug!("running scenario {}", self);
        match self {
            Scenario::Compound => compound(),
            Scenario::Leaf => leaf(),
            Scenario::SelfAssignment => self_assignment(),
            Scenario::VirtualDestruction => virtual_destruction(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| Error::UnknownScenario {
                name: s.to_string(),
                hint: Some(format!(
                    "valid scenarios: {}",
                    Scenario::ALL.map(Scenario::name).join(", ")
                )),
            })
    }
}

/// Run `scenarios` in order and return everything they emitted.
pub fn run(scenarios: &[Scenario]) -> Transcript {
    let ((), transcript) = trace::record(|| {
        for scenario in scenarios {
            scenario.run();
        }
    });
    transcript
}

/// Build a derived composite in a named local and return it by value.
///
/// The return moves the local out through move construction; the emptied
/// local is destroyed when this function returns.
pub fn produce_derived() -> DerivedComposite {
    trace::title("Running produce_derived", '-');
    let mut local = DerivedComposite::default();
    DerivedComposite::move_construct(&mut local)
}

fn compound() {
    trace::title("Demonstrating Operation of Compound Object", '=');
    let utility = UtilityValue::default();
    let mut d = DerivedComposite::default();
    d.use_utility(&utility);

    let mut returned = produce_derived();
    d.move_assign(&mut returned);
    drop(returned);

    trace::title("starting copy construction", '-');
    let _copied = d.clone();

    trace::title("starting move construction", '-');
    let _moved = DerivedComposite::move_construct(&mut d);
    // d is now empty but still destructible

    trace::title("Demonstrating polymorphism", '-');
    let owned: Box<dyn Composite> = Box::new(BaseComposite::default());
    owned.behavior_g();
    let borrowed: &dyn Composite = &d;
    borrowed.behavior_g();

    trace::title("leaving main's scope", '-');
}

fn leaf() {
    trace::title("Demonstrating leaf copy and move", '=');
    let mut original = LeafValue::default();
    original.set_name("payload");

    let mut copy = original.clone();
    copy.set_name("edited copy");
    log::debug!(
        "after copy: original={:?} copy={:?}",
        original.name(),
        copy.name()
    );

    let moved = LeafValue::move_construct(&mut original);
    log::debug!(
        "after move: source={:?} destination={:?}",
        original.name(),
        moved.name()
    );

    let mut target = LeafValue::default();
    target.move_assign(&mut copy);
    log::debug!(
        "after move assignment: source={:?} destination={:?}",
        copy.name(),
        target.name()
    );
}

fn self_assignment() {
    trace::title("Demonstrating self-assignment", '=');
    let mut frame = Frame::new();
    let d = frame.declare(DerivedComposite::default());
    frame.copy_assign(d, d);
    frame.move_assign(d, d);
}

fn virtual_destruction() {
    trace::title("Destroying through a base handle", '=');
    let handle: Box<dyn Composite> = Box::new(DerivedComposite::default());
    handle.behavior_g();
    drop(handle);
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resolving a freshly loaded page into an observation.
//!
//! After a decision is submitted, the resulting page either offers another
//! choice (`whichchoice value=N`) or announces one of the six rewards. This
//! module recognises which, so the navigator can record where the decision led.

use crate::state::Observed;
use crate::topology::names::GOAL_MARKERS;
use crate::topology::{Destination, GoalId, NodeId};
use regex::Regex;
use std::sync::OnceLock;

/// Choice marker, compiled once.
static CHOICE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn choice_pattern() -> &'static Regex {
    CHOICE_PATTERN
        .get_or_init(|| Regex::new(r"whichchoice value=(\d+)").expect("choice regex must compile"))
}

/// What a page says about where the last decision led.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageArrival {
    /// The page offers another choice inside the graph, or announces a goal.
    Arrived(Destination),
    /// The page offers a choice outside the graph.
    LeftGraph(i32),
    /// Neither a choice nor a goal could be found.
    Unrecognised,
}

/// What recording a page did to the learned map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRecord {
    /// The previous page was not a node of the graph.
    NotInGraph,
    /// The decision taken was not 1..=3.
    BogusDecision,
    /// The decision was already mapped; the page was not examined.
    AlreadyMapped,
    /// The outcome was recorded.
    Recorded(Observed),
    /// The decision led to a choice outside the graph.
    LeftGraph(i32),
    /// The page could not be resolved.
    Unrecognised,
}

impl PageRecord {
    /// Whether the page belonged to the graph and needs no further handling.
    pub fn handled(self) -> bool {
        matches!(
            self,
            PageRecord::BogusDecision | PageRecord::AlreadyMapped | PageRecord::Recorded(_)
        )
    }
}

/// Find where a page says the last decision led.
///
/// A choice marker takes precedence over goal text. Goal markers are tried
/// in goal order and the first one present wins.
pub fn resolve_page(text: &str) -> PageArrival {
    if let Some(captures) = choice_pattern().captures(text) {
        let choice = captures[1].parse::<i32>().unwrap_or(-1);
        return match NodeId::try_new(choice) {
            Some(node) => PageArrival::Arrived(Destination::Node(node)),
            None => PageArrival::LeftGraph(choice),
        };
    }

    GoalId::all()
        .find(|goal| text.contains(GOAL_MARKERS[goal.index()]))
        .map_or(PageArrival::Unrecognised, |goal| {
            PageArrival::Arrived(Destination::Goal(goal))
        })
}

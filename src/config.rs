use std::time::Duration;


/// What to do when a coordinate that is already queued is reached again
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueuePolicy {
    /// Keep the cost the coordinate was first queued with
    KeepFirst,
    /// Lower the queued cost and parent in place when a cheaper path shows up (decrease-key)
    #[default]
    Relax,
}

/// When the bidirectional search is allowed to stop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeetingRule {
    /// Stop in the first round where both frontiers hold the same coordinate
    FirstContact,
    /// Keep the cheapest stitch seen so far and stop once neither frontier
    /// can still beat it
    #[default]
    Exact,
}


/// Search settings
/// Defaults give optimal paths with no budget
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub max_expansions: Option<usize>, // total pops, both directions counted together
    pub time_limit: Option<Duration>,
    pub queue_policy: QueuePolicy,
    pub meeting_rule: MeetingRule,
}

impl SearchConfig {

    pub fn new() -> Self {
        Self::default()
    }

    /// First-seen queue costs and first-contact meeting, no budget
    pub fn reference() -> Self {
        Self {
            queue_policy: QueuePolicy::KeepFirst,
            meeting_rule: MeetingRule::FirstContact,
            ..Self::default()
        }
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_queue_policy(mut self, queue_policy: QueuePolicy) -> Self {
        self.queue_policy = queue_policy;
        self
    }

    pub fn with_meeting_rule(mut self, meeting_rule: MeetingRule) -> Self {
        self.meeting_rule = meeting_rule;
        self
    }
}

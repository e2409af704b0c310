//! Rewrites quantified non-functional requirements into TLA+ monitors.
//!
//! Every template approximates a continuous-time bound with a discrete step
//! count, keeps all comparisons in integer arithmetic, and lists the
//! predicates or actions the caller still has to define in the enclosing
//! specification. Templates are tried in a fixed order and the first match wins.

use log::debug;
use once_cell::sync::Lazy;
use regex::{ Captures, Regex };

use crate::models::requirement::Formalization;

/// Assumed wall-clock duration of one `Next` step, in milliseconds
pub const STEP_MS: u64 = 50;

/// Denominator used for availability ratios (per-mille)
pub const AVAILABILITY_DENOMINATOR: u64 = 1000;

static LATENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:latency|respond|response|recover|recovery|mode\s*change).*?(?:under|<=|less than|within)\s*(\d+)\s*(ms|millisecond|milliseconds|s|sec|second|seconds)",
    )
    .unwrap()
});

static AVAILABILITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(availability|uptime).*?(?:>=|at\s*least|not\s*less\s*than)\s*(\d+(?:\.\d+)?)\s*%",
    )
    .unwrap()
});

static THROUGHPUT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(throughput|rate|requests).*?(?:>=|at\s*least|not\s*less\s*than)\s*(\d+)\s*(?:per|/)\s*(\d+)\s*(s|sec|second|seconds)",
    )
    .unwrap()
});

static MTBF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(mtbf|mean\s*time\s*between\s*failures).*?(?:>=|at\s*least|not\s*less\s*than)\s*(\d+)\s*(s|sec|second|seconds)",
    )
    .unwrap()
});

/// The quantitative shapes a non-functional sentence can be rewritten into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalTemplate {
    Latency,
    Availability,
    Throughput,
    Mtbf,
}

impl TemporalTemplate {
    /// Match order
    pub const ORDER: [TemporalTemplate; 4] = [
        TemporalTemplate::Latency,
        TemporalTemplate::Availability,
        TemporalTemplate::Throughput,
        TemporalTemplate::Mtbf,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            TemporalTemplate::Latency => &LATENCY_RE,
            TemporalTemplate::Availability => &AVAILABILITY_RE,
            TemporalTemplate::Throughput => &THROUGHPUT_RE,
            TemporalTemplate::Mtbf => &MTBF_RE,
        }
    }

    fn render(&self, caps: &Captures<'_>, step_ms: u64) -> Option<Formalization> {
        match self {
            TemporalTemplate::Latency => latency(caps, step_ms),
            TemporalTemplate::Availability => availability(caps),
            TemporalTemplate::Throughput => throughput(caps, step_ms),
            TemporalTemplate::Mtbf => mtbf(caps, step_ms),
        }
    }
}

/// Rewrite with the default step duration
pub fn rewrite_nfr_to_temporal(sentence: &str) -> Formalization {
    rewrite_with_step(sentence, STEP_MS)
}

/// Rewrite a non-functional sentence into a monitor, property and theorem.
/// Returns a placeholder with usage hints when no template matches.
pub fn rewrite_with_step(sentence: &str, step_ms: u64) -> Formalization {
    let step_ms = step_ms.max(1);
    for template in TemporalTemplate::ORDER {
        if let Some(caps) = template.pattern().captures(sentence) {
            // a bound too large to represent falls through to the next template
            if let Some(formal) = template.render(&caps, step_ms) {
                debug!("Rewrote sentence with {:?} template", template);
                return formal;
            }
        }
    }
    no_rewrite()
}

pub fn no_rewrite() -> Formalization {
    Formalization {
        title: "No rewrite available".to_string(),
        tla: "\\* Try wording like: 'within 100 ms', 'availability >= 99.9%', 'throughput >= 50 per 10 s', or 'MTBF >= 300 s'."
            .to_string(),
        assumptions: Vec::new(),
    }
}

/// Seconds window or bound converted to steps, rounded, at least one.
/// `None` when the bound does not fit in milliseconds.
pub fn seconds_to_steps(seconds: u64, step_ms: u64) -> Option<u64> {
    let ms = seconds.checked_mul(1000)?;
    // round half up in integer arithmetic
    let steps = ms / step_ms + u64::from(ms % step_ms >= step_ms - step_ms / 2);
    Some(steps.max(1))
}

/// Milliseconds converted to steps, rounded up, at least one
pub fn millis_to_steps(ms: u64, step_ms: u64) -> u64 {
    ms.div_ceil(step_ms).max(1)
}

fn latency(caps: &Captures<'_>, step_ms: u64) -> Option<Formalization> {
    let value: u64 = caps[1].parse().ok()?;
    let unit = caps[2].to_lowercase();
    let ms = if unit.starts_with('s') { value.checked_mul(1000)? } else { value };
    let k = millis_to_steps(ms, step_ms);

    let tla = format!(
        r"VARIABLE lat_req, lat_t
InitLB == /\ lat_req = FALSE /\ lat_t = 0
NextLB ==
  \/ /\ event /\ lat_req' = TRUE /\ lat_t' = 0
  \/ /\ lat_req /\ ~goal /\ lat_t' = lat_t + 1 /\ UNCHANGED lat_req
  \/ /\ lat_req /\ goal  /\ lat_req' = FALSE /\ lat_t' = 0
  \/ /\ ~lat_req /\ ~event /\ UNCHANGED <<lat_req, lat_t>>
LatencyBound == [] (lat_req => lat_t <= {k})
THEOREM Spec => LatencyBound"
    );

    Some(Formalization {
        title: format!("Bounded response within {} ms (~{} steps)", ms, k),
        tla,
        assumptions: vec![format!("Assume ~{} ms per step; set event/goal predicates.", step_ms)],
    })
}

fn availability(caps: &Captures<'_>) -> Option<Formalization> {
    let percent: f64 = caps[2].parse().ok()?;
    let numerator = (percent * 10.0).round();
    if !numerator.is_finite() || numerator > u64::MAX as f64 {
        return None;
    }
    let numerator = numerator as u64;
    let denominator = AVAILABILITY_DENOMINATOR;

    let tla = format!(
        r"VARIABLE upTicks, ticks
InitAvail == /\ upTicks = 0 /\ ticks = 0
NextAvail == /\ ticks' = ticks + 1 /\ upTicks' = upTicks + IF Up THEN 1 ELSE 0
AvailBound == [] ({denominator} * upTicks >= {numerator} * ticks)
THEOREM Spec => AvailBound"
    );

    Some(Formalization {
        title: format!("Availability \u{2265} {}% (long-run)", percent),
        tla,
        assumptions: vec!["Define Up predicate; long-run average.".to_string()],
    })
}

fn throughput(caps: &Captures<'_>, step_ms: u64) -> Option<Formalization> {
    let rate: u64 = caps[2].parse().ok()?;
    let window_secs: u64 = caps[3].parse().ok()?;
    let w = seconds_to_steps(window_secs, step_ms)?;

    let tla = format!(
        r"VARIABLE win, count
InitTP == /\ win = 0 /\ count = 0
NextTP ==
  \/ /\ win < {w} - 1 /\ win' = win + 1 /\ count' = count + IF Event THEN 1 ELSE 0
  \/ /\ win = {w} - 1 /\ win' = 0 /\ count' = 0
TPCheck == [] (win = {w} - 1 => count >= {rate})
THEOREM Spec => TPCheck"
    );

    Some(Formalization {
        title: format!("Throughput \u{2265} {} per {}s (~{} steps)", rate, window_secs, w),
        tla,
        assumptions: vec!["Define Event action once per occurrence; tumbling window.".to_string()],
    })
}

fn mtbf(caps: &Captures<'_>, step_ms: u64) -> Option<Formalization> {
    let seconds: u64 = caps[2].parse().ok()?;
    let k = seconds_to_steps(seconds, step_ms)?;

    let tla = format!(
        r"VARIABLE sinceFail
InitMTBF == sinceFail = {k}
NextMTBF ==
  \/ /\ Failure /\ sinceFail' = 0
  \/ /\ ~Failure /\ sinceFail' = sinceFail + 1
MTBFBound == [] (sinceFail >= {k})
THEOREM Spec => MTBFBound"
    );

    Some(Formalization {
        title: format!("MTBF \u{2265} {}s (~{} steps between failures)", seconds, k),
        tla,
        assumptions: vec!["Define Failure boundary action.".to_string()],
    })
}

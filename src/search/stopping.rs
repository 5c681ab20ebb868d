use std::time::Instant;

/** decides when an enumeration must be interrupted.
Checked once per recursive call.
*/
pub trait StoppingCriterion {
    /// true if the search must stop now
    fn is_finished(&self) -> bool;
}


/** never stops: the enumeration always completes */
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverStoppingCriterion;

impl StoppingCriterion for NeverStoppingCriterion {
    fn is_finished(&self) -> bool { false }
}


/** stops after a given amount of time (in seconds) since its creation */
#[derive(Debug, Clone, Copy)]
pub struct TimeStoppingCriterion {
    t_start: Instant,
    time_limit: f32,
}

impl TimeStoppingCriterion {
    /// starts the clock now
    pub fn new(time_limit:f32) -> Self {
        Self { t_start: Instant::now(), time_limit }
    }

    /// seconds since the creation of the criterion
    pub fn elapsed(&self) -> f32 { self.t_start.elapsed().as_secs_f32() }
}

impl StoppingCriterion for TimeStoppingCriterion {
    fn is_finished(&self) -> bool { self.elapsed() >= self.time_limit }
}

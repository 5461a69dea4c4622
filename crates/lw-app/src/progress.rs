#[derive(Debug, Clone, PartialEq)]
pub enum RunStage {
    Building,
    Running,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub tick: usize,
    pub total_ticks: usize,
    pub sim_time_s: f64,
    pub step_index: usize,
    pub fraction_complete: f64,
    pub message: Option<String>,
}

impl RunProgressEvent {
    pub fn stage(stage: RunStage, total_ticks: usize, message: Option<String>) -> Self {
        Self {
            stage,
            tick: 0,
            total_ticks,
            sim_time_s: 0.0,
            step_index: 0,
            fraction_complete: 0.0,
            message,
        }
    }
}

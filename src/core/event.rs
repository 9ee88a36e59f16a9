use crate::core::JobId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    JobAdmitted {
        job: JobId,
    },
    JobCompleted {
        job: JobId,
    },
    // No runnable job received the tick's work unit
    CpuIdle,
}

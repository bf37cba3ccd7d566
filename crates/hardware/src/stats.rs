//! Simulation statistics collection and reporting.
//!
//! Tracks the handful of counters a five-stage in-order pipeline can
//! actually produce: elapsed cycles, retired instructions, and the two
//! stall categories (data hazard, control hazard).

/// Simulation statistics accumulated over a run.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that completed Writeback.
    pub instructions_retired: u64,
    /// Cycles where decode was held for a load-use hazard.
    pub stalls_data: u64,
    /// Cycles where a taken branch/jump flushed the younger latches.
    pub stalls_control: u64,
}

impl Stats {
    /// Instructions retired per cycle, or `0.0` before any cycle has elapsed.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Prints a summary banner to stdout.
    pub fn print(&self) {
        println!("==========================================================");
        println!("SIMULATION STATISTICS");
        println!("==========================================================");
        println!("cycles              : {}", self.cycles);
        println!("instructions retired: {}", self.instructions_retired);
        println!("IPC                 : {:.3}", self.ipc());
        println!("data hazard stalls  : {}", self.stalls_data);
        println!("control hazard stalls: {}", self.stalls_control);
        println!("==========================================================");
    }
}

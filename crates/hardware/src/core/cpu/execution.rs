//! Per-cycle stage dispatch.
//!
//! `tick` advances every stage exactly once, in reverse pipeline order (WB,
//! MEM, EX, ID, IF) so each stage reads the latch its upstream stage wrote
//! during the *previous* cycle. Running WB first lets a stage's register
//! writeback and a younger stage's register read (Decode) observe a
//! consistent state within the same tick, matching a same-cycle
//! write-then-read register file.
//!
//! The load-use hazard check runs on the latches as they stood before this
//! cycle's EX/ID/IF: if the instruction sitting in ID/EX is a load and the
//! instruction sitting in IF/ID needs its result, decode is held for one
//! cycle (a bubble is pushed into ID/EX instead) and fetch does not advance.
//!
//! A taken branch or jump is resolved inside `execute_stage`, which flushes
//! by setting `if_id = None` and redirecting `pc` directly. Because decode
//! and fetch run after execute within the same tick, that single mutation is
//! sufficient: decode reads the already-nulled `if_id`, and fetch reads the
//! already-redirected `pc`. No separate flush flag is needed.

use super::Cpu;
use crate::common::SimError;
use crate::core::pipeline::hazards;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};

impl Cpu {
    /// Advances the pipeline by one clock cycle.
    ///
    /// Returns `Ok(())` for a normal cycle (including one that leaves the CPU
    /// halted), or an error if decode failed or the cycle budget was
    /// exhausted. Once `halted` is set, further calls are a no-op.
    pub fn tick(&mut self, max_cycles: Option<u64>) -> Result<(), SimError> {
        if self.halted {
            return Ok(());
        }

        self.stats.cycles += 1;
        if let Some(budget) = max_cycles {
            if self.stats.cycles > budget {
                return Err(SimError::Nontermination { cycles: budget });
            }
        }

        wb_stage(self);
        if self.halted {
            return Ok(());
        }
        mem_stage(self);

        let stall = hazards::need_stall_load_use(&self.id_ex, &self.if_id);
        execute_stage(self);

        if stall {
            self.stats.stalls_data += 1;
        } else {
            decode_stage(self)?;
            fetch_stage(self);
        }

        if self.imem.fetch(self.pc).is_none() && self.pipeline_drained() {
            self.halted = true;
        }

        Ok(())
    }

    /// True if the simulation has reached a terminal state (EBREAK retired,
    /// or the pipeline drained past end-of-program).
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

//! Simulation statistics collection and reporting.
//!
//! Tracks cycles, retired instructions, the instruction mix and the traps
//! and interrupts taken during a run.

use std::time::Instant;

use serde::Serialize;

/// Run statistics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    pub cycles: u64,
    pub instructions_retired: u64,

    pub inst_alu: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub inst_jump: u64,
    pub inst_csr: u64,
    pub inst_system: u64,

    /// Synchronous exceptions taken.
    pub traps_taken: u64,
    pub interrupts_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_csr: 0,
            inst_system: 0,
            traps_taken: 0,
            interrupts_taken: 0,
        }
    }
}

impl SimStats {
    /// Prints a formatted summary of all simulation statistics.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);
        let ipc = self.instructions_retired as f64 / cyc as f64;
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        let pct = |n: u64| (n as f64 / instr as f64) * 100.0;

        println!("\n==========================================================");
        println!("RV32 CONTROL UNIT SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {:.2} kHz", khz);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", ipc);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
        println!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        println!("  op.csr                 {} ({:.2}%)", self.inst_csr, pct(self.inst_csr));
        println!("  op.system              {} ({:.2}%)", self.inst_system, pct(self.inst_system));
        println!("----------------------------------------------------------");
        println!("TRAPS");
        println!("  trap.exceptions        {}", self.traps_taken);
        println!("  trap.interrupts        {}", self.interrupts_taken);
        println!("==========================================================");
    }

    /// Serializes the counters as a JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

//! Shared fixtures for runtime tests.

use ticketsage_core::ModelParams;
use ticketsage_ingest::{RawRecord, TrainingCorpus};

use crate::context::PipelineContext;

const ROWS: &[(&str, &str)] = &[
    ("Printer is jammed and prints blank pages", "Hardware"),
    ("My laptop screen flickers and the keyboard stopped responding", "Hardware"),
    ("Monitor shows no signal after docking the laptop", "Hardware"),
    ("The printer in room 4 is jammed with paper", "Hardware"),
    ("Please reset my password, my account is locked", "Access"),
    ("Need access to the shared finance folder", "Access"),
    ("Account locked after too many password attempts", "Access"),
    ("Grant me access rights to the project repository", "Access"),
    ("Request to purchase a new software license", "Purchase"),
    ("Approval needed to purchase two extra monitors", "Purchase"),
    ("Order a replacement license for the design tool", "Purchase"),
    ("Question about my payslip and leave balance", "HR Support"),
    ("How many vacation days are left in my leave balance", "HR Support"),
    ("Payslip shows the wrong salary this month", "HR Support"),
];

pub(crate) fn sample_corpus() -> TrainingCorpus {
    TrainingCorpus::prepare(ROWS.iter().map(|(text, label)| RawRecord::new(*text, *label)))
        .unwrap()
}

pub(crate) fn sample_context() -> PipelineContext {
    PipelineContext::build(&sample_corpus(), ModelParams::default()).unwrap()
}

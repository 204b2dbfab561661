//! Whole-model fixes run once every line is mapped.
//!
//! Some constructs are only known after later lines are read: a `...` line
//! inside documentation, a `\ ...` line continuing a loop body step, a
//! `FOR` closed by `END` further down. The fixers revisit the model for them.

mod documentation;
mod units;

use red_model::RobotFileOutput;

pub(crate) fn fix(output: &mut RobotFileOutput) {
    documentation::fill_empty_continuations(output);
    units::merge_continued_loop_steps(output);
    units::mark_loops(output);
}

//! Per-parse mutable state shared by the mappers.

use red_ir::{RobotVersion, TokenTable};
use red_model::ElementPath;
use tracing::trace;

use crate::{ParsingState, ParsingStateStack};

/// What a `...` line continues.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LineSnapshot {
    stack: ParsingStateStack,
    current: Option<ElementPath>,
}

/// Where the parser is: the state stack, the element receiving cells and
/// what is known about the line being read.
#[derive(Clone, Debug)]
pub struct ParsingContext {
    version: RobotVersion,
    stack: ParsingStateStack,
    current: Option<ElementPath>,
    previous_line: Option<LineSnapshot>,
    line_number: u32,
    mapped_cells: usize,
    indented: bool,
    data_seen: bool,
    attached: bool,
    claimed: bool,
}

impl ParsingContext {
    pub fn new(version: RobotVersion) -> Self {
        ParsingContext {
            version,
            stack: ParsingStateStack::new(),
            current: None,
            previous_line: None,
            line_number: 0,
            mapped_cells: 0,
            indented: false,
            data_seen: false,
            attached: false,
            claimed: false,
        }
    }

    #[inline]
    pub fn version(&self) -> RobotVersion {
        self.version
    }

    pub fn stack(&self) -> &ParsingStateStack {
        &self.stack
    }

    #[inline]
    pub fn top(&self) -> ParsingState {
        self.stack.top()
    }

    pub fn table(&self) -> Option<TokenTable> {
        self.stack.table()
    }

    pub fn push(&mut self, state: ParsingState) {
        trace!(line = self.line_number, ?state, "push state");
        self.stack.push(state);
    }

    /// Element that values and trailing comments of this line go to.
    pub fn current(&self) -> Option<ElementPath> {
        self.current
    }

    /// Makes `path` the current element and marks the line as attached.
    pub fn attach(&mut self, path: ElementPath) {
        self.current = Some(path);
        self.mark_attached();
    }

    /// Marks the line as holding a cell of the current element.
    pub fn mark_attached(&mut self) {
        self.attached = true;
        self.claimed = true;
    }

    /// Forgets the current element: the rest of the line belongs to nothing.
    pub fn detach(&mut self) {
        self.current = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[inline]
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Whether no cell of this line was mapped yet; leading empty cells do
    /// not count.
    #[inline]
    pub fn is_first_cell(&self) -> bool {
        self.mapped_cells == 0
    }

    /// Whether the line starts with a separator or an empty cell.
    #[inline]
    pub fn is_indented(&self) -> bool {
        self.indented
    }

    /// Whether the cells being read follow a table header.
    pub fn is_header_line(&self) -> bool {
        let top = self.top();
        top.is_table_header() || top == ParsingState::TableHeaderColumn
    }

    /// Starts a new table at `header`, forgetting the previous element.
    pub fn enter_table(&mut self, header: ParsingState) {
        self.stack.enter_table(header);
        self.current = None;
        self.previous_line = None;
    }

    /// Restores the stack and element of the last line holding data.
    ///
    /// Returns `false`, leaving everything untouched, when there is nothing
    /// to continue.
    pub fn continue_previous_line(&mut self) -> bool {
        match &self.previous_line {
            Some(snapshot) => {
                self.stack = snapshot.stack.clone();
                self.current = snapshot.current;
                trace!(line = self.line_number, top = ?self.top(), "continue previous line");
                true
            }
            None => false,
        }
    }

    pub(crate) fn start_line(&mut self, line_number: u32) {
        self.line_number = line_number;
        self.stack.start_line();
        self.mapped_cells = 0;
        self.indented = false;
        self.data_seen = false;
        self.attached = false;
        self.claimed = false;
    }

    pub(crate) fn mark_indented(&mut self) {
        self.indented = true;
    }

    /// Counts a mapped cell; `data` is false for comments and `...`.
    pub(crate) fn cell_mapped(&mut self, data: bool) {
        self.mapped_cells += 1;
        self.data_seen |= data;
    }

    /// Whether the cell just mapped went to a model element; resets the
    /// answer for the next cell.
    pub(crate) fn take_claim(&mut self) -> bool {
        std::mem::take(&mut self.claimed)
    }

    /// Remembers this line for a following `...` if it held data.
    pub(crate) fn end_line(&mut self) {
        if self.data_seen {
            let mut stack = self.stack.clone();
            stack.pop_while(ParsingState::Comment);
            self.previous_line = Some(LineSnapshot {
                stack,
                current: self.current,
            });
        }
    }
}

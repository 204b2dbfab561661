//! Where every model cell goes in the output.
//!
//! Cells with a position stay on their source line. Elements without any
//! position get a line of their own, written right after the element before
//! them in model order, or after the table header for the first element.
//! Tables whose header has no position become new sections at the end of
//! the file.

use std::borrow::Cow;

use red_ir::{RobotToken, RobotTokenType, RobotVersion};
use red_model::{ModelElement, RobotFile, RoleToken, TableHeader, UnitKind, UnitTable};
use rustc_hash::FxHashMap;

use crate::sorter::arrange;

/// A model cell on a source line.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Cell<'a> {
    pub token: &'a RobotToken,
    /// First cell of its element.
    pub opens: bool,
}

/// A line the dumper writes from scratch, as cell texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewLine<'a> {
    pub cells: Vec<Cow<'a, str>>,
}

/// Where the next new line of a table goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Sink {
    After(u32),
    Section(usize),
}

#[derive(Debug, Default)]
pub(crate) struct Placement<'a> {
    on_line: FxHashMap<u32, Vec<Cell<'a>>>,
    after_line: FxHashMap<u32, Vec<NewLine<'a>>>,
    sections: Vec<Vec<NewLine<'a>>>,
}

impl<'a> Placement<'a> {
    pub fn of(file: &'a RobotFile) -> Self {
        let mut placement = Placement::default();
        let version = file.version();

        let settings = file.setting_table();
        let elements = settings.elements();
        let present = elements.iter().any(|element| element.is_present());
        if let Some(sink) = placement.open_table(
            settings.headers(),
            Some(RobotTokenType::SettingsTableHeader),
            version,
            present,
        ) {
            placement.elements(elements, sink);
        }

        let variables = file.variable_table();
        let elements: Vec<&dyn ModelElement> = variables
            .variables()
            .iter()
            .map(|variable| variable as &dyn ModelElement)
            .collect();
        let present = elements.iter().any(|element| element.is_present());
        if let Some(sink) = placement.open_table(
            variables.headers(),
            Some(RobotTokenType::VariablesTableHeader),
            version,
            present,
        ) {
            placement.elements(elements, sink);
        }

        for kind in [UnitKind::TestCase, UnitKind::Task, UnitKind::Keyword] {
            placement.units(file.unit_table(kind), version);
        }

        for header in file.other_headers() {
            placement.open_table(std::slice::from_ref(header), None, version, false);
        }
        placement
    }

    /// Model cells on source line `line_number`, in writing order.
    pub fn cells_on(&self, line_number: u32) -> Option<&[Cell<'a>]> {
        self.on_line.get(&line_number).map(Vec::as_slice)
    }

    /// New lines to write right after source line `line_number`.
    pub fn lines_after(&self, line_number: u32) -> &[NewLine<'a>] {
        self.after_line
            .get(&line_number)
            .map_or(&[], Vec::as_slice)
    }

    /// Tables written from scratch, in model order.
    pub fn sections(&self) -> &[Vec<NewLine<'a>>] {
        &self.sections
    }

    pub fn new_line_count(&self) -> usize {
        self.after_line.values().map(Vec::len).sum::<usize>()
            + self.sections.iter().map(Vec::len).sum::<usize>()
    }

    /// Places the headers of one table and returns where its first element
    /// goes, or `None` when there is nothing to write.
    fn open_table(
        &mut self,
        headers: &'a [TableHeader],
        header_type: Option<RobotTokenType>,
        version: RobotVersion,
        has_content: bool,
    ) -> Option<Sink> {
        let present: Vec<&TableHeader> = headers.iter().filter(|h| h.is_present()).collect();
        if present.is_empty() && !has_content {
            return None;
        }

        let mut sink = None;
        for header in &present {
            if let Some(line) = header.declaration().line_number() {
                let placed = self.place(header.role_tokens(), false, Sink::After(line));
                sink = sink.or(Some(placed));
            }
        }
        if sink.is_some() {
            return sink;
        }

        let section = Sink::Section(self.sections.len());
        self.sections.push(Vec::new());
        match present.first() {
            Some(header) => {
                self.place(header.role_tokens(), false, section);
            }
            None => {
                let name = header_type
                    .and_then(|ty| ty.most_correct_representation(version))
                    .map_or("", |repr| repr.text());
                self.push(section, vec![Cow::Owned(format!("*** {name} ***"))]);
            }
        }
        Some(section)
    }

    fn elements(&mut self, elements: Vec<&'a dyn ModelElement>, mut sink: Sink) {
        for element in elements {
            if element.is_present() {
                sink = self.place(element.role_tokens(), false, sink);
            }
        }
    }

    fn units(&mut self, table: &'a UnitTable, version: RobotVersion) {
        let present = table.units().iter().any(|unit| unit.is_present());
        let Some(mut sink) = self.open_table(
            table.headers(),
            Some(table.kind().header_type()),
            version,
            present,
        ) else {
            return;
        };
        for unit in table.units() {
            if !unit.is_present() {
                continue;
            }
            sink = self.place(unit.role_tokens(), false, sink);
            for element in unit.elements() {
                let element = element.as_element();
                if element.is_present() {
                    sink = self.place(element.role_tokens(), true, sink);
                }
            }
        }
    }

    /// Places one element; returns where the element after it goes.
    ///
    /// `body` elements belong to a test, task or keyword and get an empty
    /// first cell when written on a line of their own.
    fn place(&mut self, tokens: Vec<RoleToken<'a>>, body: bool, sink: Sink) -> Sink {
        let mut fresh = Vec::new();
        let mut last = None;
        for (index, (line, token)) in arrange(tokens).into_iter().enumerate() {
            match line {
                Some(line) => {
                    self.on_line.entry(line).or_default().push(Cell {
                        token,
                        opens: index == 0,
                    });
                    last = last.max(Some(line));
                }
                None => fresh.push(Cow::Borrowed(token.text())),
            }
        }
        if !fresh.is_empty() {
            if body {
                fresh.insert(0, Cow::Borrowed(""));
            }
            self.push(sink, fresh);
        }
        last.map_or(sink, Sink::After)
    }

    fn push(&mut self, sink: Sink, cells: Vec<Cow<'a, str>>) {
        let line = NewLine { cells };
        match sink {
            Sink::After(line_number) => self.after_line.entry(line_number).or_default().push(line),
            Sink::Section(index) => {
                if let Some(section) = self.sections.get_mut(index) {
                    section.push(line);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;

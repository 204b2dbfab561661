//! Mapper self-check.
//!
//! Parses a sample corpus covering every construct of the grammar and asks
//! every mapper applicable to the version about every cell. A cell accepted
//! by two mappers means the registry order decides the outcome; a cell
//! accepted by none means the parser would stop on it.

use std::fmt;

use red_ir::{FileFormat, RobotToken, RobotVersion};
use red_model::RobotFileOutput;
use tracing::{debug, warn};

use crate::{MapperRegistry, ParserConfig, ParsingContext, ParsingState, RobotParser};

/// Text touching every mapper of the latest grammar.
pub(crate) const SAMPLE_CORPUS: &str = "\
garbage before any table
# comment before any table
*** Settings ***    column    # header comment
Library    Collections    # trailing comment
Library    OperatingSystem    arg1    arg2    WITH NAME    os
Library    Process    WITH NAME    proc    extra
Resource    common.robot    unwanted
Variables    vars.py    first    second
Documentation    first line
...    second line
...
...    fourth line
Metadata    Version    1.0    more
Suite Setup    Prepare    suite
Suite Teardown    Clean    suite
Test Setup    Open    browser
...    chrome
Test Teardown    Close
Task Setup    Start
Task Teardown    Stop
Force Tags    smoke    fast
Default Tags    slow
Test Template    Template Keyword    unwanted
Task Template    Task Template Keyword
Test Timeout    1 min    message
Task Timeout    2 min
Document    typo
Frobnicate    unknown    values
    indented setting
...
# comment line

*** Variables ***
${SCALAR}    value
@{LIST}    one    two
...    three
&{DICT}    key=value    other=thing
invalid    declaration
${EMPTY_VALUE}

*** Test Cases ***
    indented before any test
First Test    Log    on the name line
    [Documentation]    doc
    ...
    ...    more doc
    [Tags]    tag    # comment
    [Setup]    Open
    [Unknown]    value
    ${var}=    Set Variable    1
    :FOR    ${item}    IN    @{LIST}
    \\    Log    ${item}
    \\    ...    continued
    # commented step
    Log    done
    ...    continued argument
Second Test
    FOR    ${i}    IN RANGE    3
        Log    ${i}
    END
    \\    stray

*** Tasks ***
    indented before any task
First Task
    [Documentation]    task doc
    [Tags]    chore
    Run    it

*** Keywords ***
    indented before any keyword
My Keyword
    [Arguments]    ${a}    ${b}
    [Return]    ${a}
    Log    ${a}
    END

*** Comments ***
anything    goes    here
...    even    this

*** Custom Table ***
some    content
";

/// Cell that more than one mapper, or none, accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapperConflict {
    pub line: u32,
    pub text: String,
    pub state: ParsingState,
    /// Names of the accepting mappers.
    pub mappers: Vec<&'static str>,
}

impl fmt::Display for MapperConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: `{}` in {:?}", self.line, self.text, self.state)?;
        if self.mappers.is_empty() {
            write!(f, " accepted by no mapper")
        } else {
            write!(f, " accepted by {}", self.mappers.join(", "))
        }
    }
}

/// Outcome of a self-check run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfCheckReport {
    pub version: RobotVersion,
    /// Cells asked about.
    pub checked: usize,
    pub overlaps: Vec<MapperConflict>,
    pub unclaimed: Vec<MapperConflict>,
}

impl SelfCheckReport {
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty() && self.unclaimed.is_empty()
    }
}

/// Checks the mappers of `version` on the built-in sample corpus.
pub fn self_check(version: RobotVersion) -> SelfCheckReport {
    self_check_text(version, SAMPLE_CORPUS)
}

/// Checks the mappers of `version` on `text`.
#[tracing::instrument(level = "debug", skip(text))]
pub fn self_check_text(version: RobotVersion, text: &str) -> SelfCheckReport {
    let mappers = MapperRegistry::global().mappers_for(version);
    let mut report = SelfCheckReport {
        version,
        checked: 0,
        overlaps: Vec::new(),
        unclaimed: Vec::new(),
    };

    let mut observer = |output: &RobotFileOutput, context: &ParsingContext, token: &RobotToken| {
        report.checked += 1;
        let accepting: Vec<&'static str> = mappers
            .iter()
            .filter(|mapper| mapper.can_map(output, context, token))
            .map(|mapper| mapper.name())
            .collect();
        if accepting.len() == 1 {
            return;
        }
        let conflict = MapperConflict {
            line: context.line_number(),
            text: token.text().to_string(),
            state: context.top(),
            mappers: accepting,
        };
        if conflict.mappers.is_empty() {
            report.unclaimed.push(conflict);
        } else {
            report.overlaps.push(conflict);
        }
    };

    let parser = RobotParser::new(ParserConfig::new(version, FileFormat::TxtOrRobot));
    if let Err(error) = parser.parse_observed(text, Some(&mut observer)) {
        // The observer saw the offending cell before the parser gave up.
        debug!(%error, "observed parse stopped");
    }

    for conflict in report.overlaps.iter().chain(&report.unclaimed) {
        warn!(%version, "{conflict}");
    }
    report
}

#[cfg(test)]
mod tests;

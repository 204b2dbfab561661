//! The built-in mappers, in the order the registry asks them.

mod settings;
mod table;
mod units;
mod variables;

use crate::ElementMapper;

/// Every built-in mapper regardless of version, table-level mappers first.
pub(crate) fn builtin_mappers() -> Vec<&'static dyn ElementMapper> {
    let table: [&'static dyn ElementMapper; 7] = [
        &table::TableHeaderMapper,
        &table::GarbageBeforeFirstTableMapper,
        &table::TableHeaderColumnMapper,
        &table::CommentTableContentMapper,
        &table::CommentMapper,
        &table::PreviousLineContinueMapper,
        &table::TrashMapper,
    ];
    table
        .into_iter()
        .chain(settings::mappers())
        .chain(variables::mappers())
        .chain(units::mappers())
        .collect()
}

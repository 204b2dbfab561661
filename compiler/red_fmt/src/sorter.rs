//! Cell order of one element.
//!
//! Every role has a fixed priority: declaration and name first, then
//! arguments, the `WITH NAME` marker, the alias, and comments last. Cells
//! read from the file keep the order they had there, so an element that was
//! only partly edited keeps its layout; cells without a position slot in
//! after the last cell whose (priority, storage index) sorts before theirs.

use red_ir::RobotToken;
use red_model::{RoleToken, TokenRole};

/// Dump priority of `role`; lower goes first.
pub fn priority(role: TokenRole) -> u8 {
    match role {
        TokenRole::Declaration | TokenRole::Name => 1,
        TokenRole::Argument => 2,
        TokenRole::Alias => 3,
        TokenRole::AliasValue => 4,
        TokenRole::Comment => u8::MAX,
    }
}

/// Orders the cells of one element for writing.
pub fn sort_tokens<'a>(tokens: Vec<RoleToken<'a>>) -> Vec<RoleToken<'a>> {
    let (mut placed, mut fresh): (Vec<_>, Vec<_>) = tokens
        .into_iter()
        .enumerate()
        .map(|(index, role_token)| ((priority(role_token.role), index), role_token))
        .partition(|(_, role_token)| role_token.token.is_positioned());

    placed.sort_by_key(|(_, role_token)| role_token.token.position());
    fresh.sort_by_key(|(key, _)| *key);
    for (key, role_token) in fresh {
        let at = placed
            .iter()
            .rposition(|(other, _)| *other < key)
            .map_or(0, |index| index + 1);
        placed.insert(at, (key, role_token));
    }
    placed.into_iter().map(|(_, role_token)| role_token).collect()
}

/// Sorted cells of one element with the source line each one goes to.
///
/// A cell without a position shares the line of the cell before it; cells
/// ahead of the first positioned one go to its line. `None` means the
/// element has no position at all and needs a line of its own.
pub fn arrange<'a>(tokens: Vec<RoleToken<'a>>) -> Vec<(Option<u32>, &'a RobotToken)> {
    let sorted = sort_tokens(tokens);
    let mut line = sorted.iter().find_map(|rt| rt.token.line_number());
    sorted
        .into_iter()
        .map(|rt| {
            if let Some(own) = rt.token.line_number() {
                line = Some(own);
            }
            (line, rt.token)
        })
        .collect()
}

#[cfg(test)]
mod tests;

use twenty48_core::engine::Move;

/// Map a single-character token to a move.
///
/// Tokens are case-sensitive; surrounding whitespace is ignored. Anything
/// else is not a move and the caller re-prompts.
pub fn parse_move(token: &str) -> Option<Move> {
    match token.trim() {
        "l" => Some(Move::Left),
        "r" => Some(Move::Right),
        "u" => Some(Move::Up),
        "d" => Some(Move::Down),
        _ => None,
    }
}

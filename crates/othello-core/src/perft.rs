use crate::board::Board;
use crate::disc::Color;
use crate::error::BoardError;
use crate::flip;
use crate::move_list::MoveList;

/// Executes a perft run starting from the standard opening position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the opening position. A depth
///   of `0` counts the opening itself and `1` counts the immediate legal
///   moves.
///
/// # Returns
///
/// The number of leaf nodes reached.
pub fn perft_root(depth: u32) -> Result<u64, BoardError> {
    perft(&Board::new(), Color::Black, depth)
}

/// Counts the leaf nodes `depth` plies below `board` with `color` to move.
///
/// Depth 0 counts `board` itself as the only leaf. A side without moves
/// passes without consuming depth. A position where neither side can move
/// counts as a single leaf.
///
/// # Errors
///
/// Propagates a `BoardError` if a generated move cannot be applied, which
/// means the move generator and the board disagree.
pub fn perft(board: &Board, color: Color, depth: u32) -> Result<u64, BoardError> {
    if depth == 0 {
        return Ok(1);
    }
    let mut nodes = 0;
    let move_list = MoveList::new(board, color);

    if !move_list.is_empty() {
        for &m in move_list.iter() {
            if depth == 1 {
                nodes += 1;
                continue;
            }
            let mut next = *board;
            flip::play(&mut next, m, color)?;
            nodes += perft(&next, color.opposite(), depth - 1)?;
        }
    } else if !MoveList::new(board, color.opposite()).is_empty() {
        nodes += perft(board, color.opposite(), depth)?;
    } else {
        nodes += 1;
    }
    Ok(nodes)
}

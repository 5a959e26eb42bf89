/// Builds a `Board` from a grid of `X`, `O` and `.` followed by the side to move.
///
/// ```ignore
/// let board = tictactoe_board! {
///     X O X
///     O X O
///     . . .
///     x
/// };
/// ```
#[macro_export]
macro_rules! tictactoe_board {
    ($($symbol:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let symbols: String = stringify!($($symbol)*)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        // Nine squares plus the side to move
        assert_eq!(symbols.len(), 10, "Invalid board. Expected 9 squares and a side to move, got {:?}", symbols);
        let notation = format!(
            "{}/{}/{} {}",
            &symbols[0..3],
            &symbols[3..6],
            &symbols[6..9],
            &symbols[9..]
        );
        notation
            .parse::<$crate::board::Board>()
            .expect("tictactoe_board! should describe a valid board")
    }};
}

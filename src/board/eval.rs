use super::Position;

impl Position {
    /// Material balance in centipawns; positive favors white.
    ///
    /// Pawn=100, Knight=320, Bishop=330, Rook=500, Queen=900, King=20000.
    /// There are no positional terms.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.pieces().map(|(_, piece)| piece.signed_value()).sum()
    }
}

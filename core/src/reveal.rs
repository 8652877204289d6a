use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
    Removed,
    GameOver,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
            Removed => true,
            GameOver => true,
        }
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Board {
    /// Advances the clue at `index` by one click.
    ///
    /// | showing  | click effect                                   |
    /// |----------|------------------------------------------------|
    /// | Hidden   | question shown in the answer slot              |
    /// | Question | answer replaces the question                   |
    /// | Answer   | slot hidden, cell removed, next cell shown     |
    ///
    /// Cells that are not visible, already removed, or on a finished board ignore the click.
    pub fn reveal(&mut self, index: usize) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let index = self.validate_index(index)?;
        if !self.can_interact_at(index) {
            return Ok(NoChange);
        }

        Ok(match self.clue_mut(index).advance() {
            Some(Showing::Question) => {
                self.set_answer_slot(AnswerSlot::Question(index));
                ShowedQuestion
            }
            Some(Showing::Answer) => {
                self.set_answer_slot(AnswerSlot::Answer(index));
                ShowedAnswer
            }
            Some(Showing::Removed) => {
                self.set_answer_slot(AnswerSlot::Hidden);
                self.set_cell_visible(index, false);
                self.advance_visibility(index)
            }
            Some(Showing::Hidden) | None => NoChange,
        })
    }

    fn advance_visibility(&mut self, index: usize) -> RevealOutcome {
        let position = category_position(index);

        if is_last_in_category(index) {
            self.set_header_visible(position, false);
            if is_last_clue(index) {
                log::debug!("last clue removed, game over");
                self.finish();
                return RevealOutcome::GameOver;
            }
            self.set_header_visible(position + 1, true);
        }
        self.set_cell_visible(index + 1, true);

        RevealOutcome::Removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::board;
    use alloc::vec::Vec;

    fn click_through(board: &mut Board, index: usize) -> RevealOutcome {
        assert_eq!(board.reveal(index).unwrap(), RevealOutcome::ShowedQuestion);
        assert_eq!(board.reveal(index).unwrap(), RevealOutcome::ShowedAnswer);
        board.reveal(index).unwrap()
    }

    #[test]
    fn clicks_cycle_question_answer_removed() {
        let mut board = board();

        assert_eq!(board.reveal(0).unwrap(), RevealOutcome::ShowedQuestion);
        assert_eq!(board[0].showing(), Showing::Question);
        assert_eq!(board.answer_slot(), AnswerSlot::Question(0));
        assert_eq!(board.answer_text(), Some("q0-0"));

        assert_eq!(board.reveal(0).unwrap(), RevealOutcome::ShowedAnswer);
        assert_eq!(board[0].showing(), Showing::Answer);
        assert_eq!(board.answer_text(), Some("a0-0"));

        assert_eq!(board.reveal(0).unwrap(), RevealOutcome::Removed);
        assert_eq!(board[0].showing(), Showing::Removed);
        assert!(!board.answer_slot().is_visible());
        assert!(!board.is_cell_visible(0));
        assert!(board.is_cell_visible(1));
        assert!(board.is_header_visible(0));
        assert!(!board.is_header_visible(1));
    }

    #[test]
    fn removed_clue_ignores_further_clicks() {
        let mut board = board();
        click_through(&mut board, 0);
        let before = board.clone();

        assert_eq!(board.reveal(0).unwrap(), RevealOutcome::NoChange);
        assert_eq!(board.reveal(0).unwrap(), RevealOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn hidden_cells_ignore_clicks() {
        let mut board = board();

        assert_eq!(board.reveal(5).unwrap(), RevealOutcome::NoChange);
        assert_eq!(board[5].showing(), Showing::Hidden);
    }

    #[test]
    fn invalid_index_is_an_error() {
        let mut board = board();

        assert_eq!(
            board.reveal(12).unwrap_err(),
            TriviaError::InvalidClueIndex(12)
        );
    }

    #[test]
    fn closing_a_category_moves_the_header() {
        let mut board = board();
        click_through(&mut board, 0);

        assert_eq!(click_through(&mut board, 1), RevealOutcome::Removed);

        assert!(!board.is_header_visible(0));
        assert!(board.is_header_visible(1));
        assert!(board.is_cell_visible(2));
        assert!(!board.is_cell_visible(3));
    }

    #[test]
    fn removing_last_clue_ends_the_game() {
        let mut board = board();
        for index in 0..CLUE_COUNT - 1 {
            assert_eq!(click_through(&mut board, index), RevealOutcome::Removed);
            if index % 2 == 1 {
                let k = index / 2;
                assert!(!board.is_header_visible(k));
                assert!(board.is_header_visible(k + 1));
            }
        }

        assert_eq!(click_through(&mut board, 11), RevealOutcome::GameOver);
        assert!(board.is_finished());
        assert!((0..CATEGORY_COUNT).all(|k| !board.is_header_visible(k)));
        assert!((0..CLUE_COUNT).all(|index| !board.is_cell_visible(index)));
        assert!(board.clues().all(|clue| clue.showing() == Showing::Removed));
        assert_eq!(board.reveal(11).unwrap(), RevealOutcome::NoChange);
    }

    #[test]
    fn showing_never_skips_or_regresses() {
        let mut board = board();

        // every index gets clicked, visible or not, until the board is done
        for step in 0..40 * CLUE_COUNT {
            let index = (step * 5) % CLUE_COUNT;
            let before: Vec<Showing> = board.clues().map(Clue::showing).collect();

            board.reveal(index).unwrap();

            for (n, (prev, now)) in before.iter().zip(board.clues().map(Clue::showing)).enumerate() {
                if n == index {
                    assert!(now == *prev || prev.next() == Some(now));
                } else {
                    assert_eq!(now, *prev);
                }
            }
        }

        assert!(board.is_finished());
    }
}

//! Line-oriented input reader.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::core::{
    Action, Board, CellId, CellRecord, Forest, ForestError, PlayerTotals, Tree, TreeSize,
    TurnSnapshot,
};

use super::ProtocolError;

/// Reads the initialization block and per-turn blocks from the referee.
pub struct ProtocolReader<R> {
    input: R,
    line_number: usize,
    buffer: String,
}

impl<R: BufRead> ProtocolReader<R> {
    /// Wrap an input stream.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Lines consumed so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next line with its terminator stripped, `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&str>, ProtocolError> {
        self.buffer.clear();
        if self.input.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.buffer.trim_end_matches(['\r', '\n'])))
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<&str, ProtocolError> {
        self.next_line()?
            .ok_or(ProtocolError::UnexpectedEof { expected })
    }

    fn parse_fields<const N: usize>(
        line: &str,
        line_number: usize,
        names: [&'static str; N],
    ) -> Result<[i64; N], ProtocolError> {
        let mut tokens = line.split_whitespace();
        let mut values = [0i64; N];
        for (value, field) in values.iter_mut().zip(names) {
            let token = tokens
                .next()
                .ok_or(ProtocolError::MissingField { line: line_number, field })?;
            *value = token.parse().map_err(|_| ProtocolError::InvalidNumber {
                line: line_number,
                field,
                value: token.to_string(),
            })?;
        }
        Ok(values)
    }

    /// Read one line of integer fields.
    fn fields<const N: usize>(
        &mut self,
        names: [&'static str; N],
    ) -> Result<[i64; N], ProtocolError> {
        let line = self.expect_line(names[0])?.to_string();
        Self::parse_fields(&line, self.line_number, names)
    }

    fn count(&mut self, name: &'static str) -> Result<usize, ProtocolError> {
        let [n] = self.fields([name])?;
        usize::try_from(n).map_err(|_| ProtocolError::InvalidNumber {
            line: self.line_number,
            field: name,
            value: n.to_string(),
        })
    }

    /// Read the initialization block: cell count, then one record per cell.
    pub fn read_board(&mut self) -> Result<Board, ProtocolError> {
        let cell_count = self.count("cell count")?;
        let mut records = Vec::with_capacity(cell_count);
        for _ in 0..cell_count {
            let [index, richness, n0, n1, n2, n3, n4, n5] = self.fields([
                "cell index",
                "richness",
                "neighbor 0",
                "neighbor 1",
                "neighbor 2",
                "neighbor 3",
                "neighbor 4",
                "neighbor 5",
            ])?;
            records.push(CellRecord {
                index,
                richness,
                neighbors: [n0, n1, n2, n3, n4, n5],
            });
        }
        let board = Board::from_records(&records)?;
        debug!(cells = cell_count, "board loaded");
        Ok(board)
    }

    /// Read one turn block. Returns `None` if the input ends before it starts.
    ///
    /// Malformed legal-action lines are logged and left out of the snapshot.
    pub fn read_turn(&mut self) -> Result<Option<TurnSnapshot>, ProtocolError> {
        let Some(line) = self.next_line()? else {
            return Ok(None);
        };
        let line = line.to_string();
        let [day] = Self::parse_fields(&line, self.line_number, ["day"])?;
        let day = u32::try_from(day).map_err(|_| ProtocolError::InvalidNumber {
            line: self.line_number,
            field: "day",
            value: day.to_string(),
        })?;

        let [nutrient] = self.fields(["nutrient"])?;
        let [sun, score] = self.fields(["sun", "score"])?;
        let [opp_sun, opp_score, opp_waiting] =
            self.fields(["opponent sun", "opponent score", "opponent waiting"])?;

        let tree_count = self.count("tree count")?;
        let mut forest = Forest::new();
        for _ in 0..tree_count {
            let [cell, size, is_mine, is_dormant] =
                self.fields(["tree cell", "tree size", "is mine", "is dormant"])?;
            let cell = CellId::from_wire(cell).ok_or(ForestError::UnknownCell(cell))?;
            let mut tree = Tree::new(cell, TreeSize::from_wire(size)?, is_mine != 0);
            tree.is_dormant = is_dormant != 0;
            forest.plant(tree)?;
        }

        let action_count = self.count("action count")?;
        let mut legal_actions = Vec::with_capacity(action_count);
        for _ in 0..action_count {
            let line = self.expect_line("legal action")?;
            match line.parse::<Action>() {
                Ok(action) => legal_actions.push(action),
                Err(err) => {
                    let text = line.to_string();
                    warn!(line = self.line_number, %text, %err, "skipping malformed legal action");
                }
            }
        }

        Ok(Some(TurnSnapshot {
            day,
            nutrient,
            me: PlayerTotals::new(sun, score),
            opponent: PlayerTotals::new(opp_sun, opp_score),
            opponent_waiting: opp_waiting != 0,
            forest,
            legal_actions,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_text() -> String {
        let mut text = String::from("37\n");
        for r in Board::standard().to_records() {
            let n: Vec<String> = r.neighbors.iter().map(|n| n.to_string()).collect();
            text.push_str(&format!("{} {} {}\n", r.index, r.richness, n.join(" ")));
        }
        text
    }

    #[test]
    fn test_read_standard_board() {
        let text = board_text();
        let mut reader = ProtocolReader::new(text.as_bytes());
        let board = reader.read_board().unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(reader.line_number(), 38);
    }

    #[test]
    fn test_read_turn() {
        let text = "4\n20\n7 12\n3 9 1\n2\n5 3 1 0\n20 0 0 1\n3\nWAIT\nCOMPLETE 5\nSEED 5 12\n";
        let mut reader = ProtocolReader::new(text.as_bytes());
        let snapshot = reader.read_turn().unwrap().unwrap();

        assert_eq!(snapshot.day, 4);
        assert_eq!(snapshot.nutrient, 20);
        assert_eq!(snapshot.me, PlayerTotals::new(7, 12));
        assert_eq!(snapshot.opponent, PlayerTotals::new(3, 9));
        assert!(snapshot.opponent_waiting);
        assert_eq!(snapshot.forest.len(), 2);
        assert!(snapshot.tree(CellId::new(20)).unwrap().is_dormant);
        assert!(!snapshot.tree(CellId::new(20)).unwrap().is_mine);
        assert_eq!(snapshot.legal_actions.len(), 3);

        assert!(reader.read_turn().unwrap().is_none());
    }

    #[test]
    fn test_malformed_action_is_skipped() {
        let text = "0\n20\n2 0\n2 0 0\n0\n3\nWAIT\nDANCE 4\nGROW 4\n";
        let mut reader = ProtocolReader::new(text.as_bytes());
        let snapshot = reader.read_turn().unwrap().unwrap();
        assert_eq!(
            snapshot.legal_actions,
            vec![Action::Wait, Action::Grow { cell: CellId::new(4) }]
        );
    }

    #[test]
    fn test_truncated_turn_is_error() {
        let text = "0\n20\n2 0\n";
        let mut reader = ProtocolReader::new(text.as_bytes());
        assert!(matches!(
            reader.read_turn(),
            Err(ProtocolError::UnexpectedEof { expected: "opponent sun" })
        ));
    }

    #[test]
    fn test_bad_number_reports_field() {
        let text = "0\n20\nmany 0\n";
        let mut reader = ProtocolReader::new(text.as_bytes());
        match reader.read_turn() {
            Err(ProtocolError::InvalidNumber { line, field, value }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "sun");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_tree_is_error() {
        let text = "0\n20\n2 0\n2 0 0\n2\n5 1 1 0\n5 2 0 0\n1\nWAIT\n";
        let mut reader = ProtocolReader::new(text.as_bytes());
        assert!(matches!(
            reader.read_turn(),
            Err(ProtocolError::Forest(ForestError::Occupied(_)))
        ));
    }
}

use std::fmt;

/// An (x, y) coordinate on the board. `x` is the column, `y` the row;
/// (0, 0) is the top-left corner.
pub type Position = (usize, usize);

/// Contents of one board square.
///
/// Every symbol belongs to one of two parallel families: the plain squares
/// `{Player, Box, Empty}` and their goal-square counterparts
/// `{GoalPlayer, GoalBox, GoalEmpty}`. A square never changes family, only
/// occupant; `Wall` belongs to neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Player,
    Wall,
    Empty,
    Box,
    GoalEmpty,
    GoalBox,
    GoalPlayer,
}

impl Cell {
    /// Parse one level-text character.
    ///
    /// Characters:
    /// - `#` = Wall
    /// - ` ` = Empty (floor)
    /// - `.` = GoalEmpty (target square for boxes)
    /// - `$` = Box
    /// - `@` = Player
    /// - `*` = GoalBox (box already on a goal)
    /// - `+` = GoalPlayer (player standing on a goal)
    ///
    /// Any other character is treated as empty floor.
    pub fn from_char(ch: char) -> Cell {
        match ch {
            '@' => Cell::Player,
            '#' => Cell::Wall,
            '$' => Cell::Box,
            '.' => Cell::GoalEmpty,
            '*' => Cell::GoalBox,
            '+' => Cell::GoalPlayer,
            _ => Cell::Empty,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Player => '@',
            Cell::Wall => '#',
            Cell::Empty => ' ',
            Cell::Box => '$',
            Cell::GoalEmpty => '.',
            Cell::GoalBox => '*',
            Cell::GoalPlayer => '+',
        }
    }

    /// Check if the square is a goal.
    pub fn is_goal(self) -> bool {
        matches!(self, Cell::GoalEmpty | Cell::GoalPlayer | Cell::GoalBox)
    }

    /// Check if the square is free for the player or a box to enter.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty | Cell::GoalEmpty)
    }

    /// Check if the square holds a box the player can push.
    pub fn is_pushable(self) -> bool {
        matches!(self, Cell::Box | Cell::GoalBox)
    }

    /// Map a symbol to its counterpart across the goal/non-goal divide.
    /// `Wall` has no counterpart and falls back to `Empty`.
    pub fn switch_goal(self) -> Cell {
        match self {
            Cell::Player => Cell::GoalPlayer,
            Cell::Box => Cell::GoalBox,
            Cell::Empty => Cell::GoalEmpty,
            Cell::GoalPlayer => Cell::Player,
            Cell::GoalBox => Cell::Box,
            Cell::GoalEmpty | Cell::Wall => Cell::Empty,
        }
    }
}

/// One of the four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Result of a single movement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto a free square.
    Moved,
    /// The player pushed a box one square ahead.
    Pushed,
    /// A wall, a blocked box, or the grid edge kept the player in place.
    Blocked,
}

impl MoveOutcome {
    pub fn is_push(self) -> bool {
        self == MoveOutcome::Pushed
    }
}

/// A recorded player action: where the player stood before the move, and
/// whether the move pushed a box. Enough to reverse the action exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MoveRecord {
    from: Position,
    push: bool,
}

/// Game state for one level: the grid, the player position, and the
/// history of moves made so far.
///
/// A board is built once per level from level text, mutated in place by
/// `move_player` and `undo_move`, and discarded when the level restarts or
/// changes. A fresh board always starts with an empty history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Row-major, sized exactly to the parsed extents
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    player: Position,
    history: Vec<MoveRecord>,
}

impl Board {
    /// Build a board from level text: rows of cell characters separated by
    /// line breaks (see `Cell::from_char` for the character table).
    ///
    /// Construction is best-effort and never fails. The grid is sized to
    /// the longest row and the row count; short rows are padded with empty
    /// floor, and unrecognized characters parse as empty floor. The player
    /// position is taken from the `@` or `+` square; callers are expected
    /// to supply levels with exactly one (with more than one, the last
    /// occurrence wins). No well-formedness checks (walled border, matching
    /// box/goal counts, solvability) are performed here.
    pub fn from_text(text: &str) -> Board {
        let lines: Vec<&str> = text.lines().collect();
        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut cells = vec![Cell::Empty; width * height];
        let mut player = (0, 0);

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch);
                if matches!(cell, Cell::Player | Cell::GoalPlayer) {
                    player = (x, y);
                }
                cells[y * width + x] = cell;
            }
        }

        Board {
            cells,
            width,
            height,
            player,
            history: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player_pos(&self) -> Position {
        self.player
    }

    /// Read the cell at (x, y). Panics if the coordinate is outside the
    /// grid; passing one is a caller bug, not a recoverable condition.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.width && y < self.height, "position out of bounds");
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(x < self.width && y < self.height, "position out of bounds");
        self.cells[y * self.width + x] = cell;
    }

    /// Step one square from (x, y) in the direction given by (dx, dy).
    /// Returns None if the step would leave the grid.
    fn step(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<Position> {
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;

        if nx >= 0 && ny >= 0 && nx < self.width as i32 && ny < self.height as i32 {
            Some((nx as usize, ny as usize))
        } else {
            None
        }
    }

    /// Relocate whatever occupies `from` onto `to`, overwriting the
    /// destination and vacating the source, while preserving each square's
    /// goal-ness: the moving symbol is re-tagged to match the destination's
    /// family, and the source becomes the empty square of its own family.
    ///
    /// This has no notion of player vs. box; movement, pushing, and undo
    /// all go through it.
    fn transfer(&mut self, from: Position, to: Position) {
        let src = self.get(from.0, from.1);
        let dst = self.get(to.0, to.1);

        if dst.is_goal() == src.is_goal() {
            self.set(to.0, to.1, src);
        } else {
            self.set(to.0, to.1, src.switch_goal());
        }

        let vacated = if src.is_goal() {
            Cell::GoalEmpty
        } else {
            Cell::Empty
        };
        self.set(from.0, from.1, vacated);
    }

    /// Attempt to move the player one square in the given direction.
    ///
    /// A free target square is a plain move. A pushable target square with
    /// a free square beyond it is a push: the box relocates first, then the
    /// player takes its place. Anything else leaves the board untouched.
    /// Every successful action is appended to the move history.
    pub fn move_player(&mut self, dir: Direction) -> MoveOutcome {
        let (dx, dy) = dir.delta();
        let (px, py) = self.player;

        let Some(target) = self.step(px, py, dx, dy) else {
            return MoveOutcome::Blocked;
        };

        if self.get(target.0, target.1).is_empty() {
            self.transfer(self.player, target);
            self.history.push(MoveRecord {
                from: self.player,
                push: false,
            });
            self.player = target;
            return MoveOutcome::Moved;
        }

        if self.get(target.0, target.1).is_pushable() {
            if let Some(beyond) = self.step(target.0, target.1, dx, dy) {
                if self.get(beyond.0, beyond.1).is_empty() {
                    // Box first, so the player's square is still intact as
                    // a transfer source.
                    self.transfer(target, beyond);
                    self.transfer(self.player, target);
                    self.history.push(MoveRecord {
                        from: self.player,
                        push: true,
                    });
                    self.player = target;
                    return MoveOutcome::Pushed;
                }
            }
        }

        MoveOutcome::Blocked
    }

    /// Reverse the most recent recorded action; no-op if nothing has been
    /// played yet. Calling this repeatedly unwinds the history one action
    /// at a time, all the way back to the initial board.
    pub fn undo_move(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };
        let (fx, fy) = record.from;
        let (px, py) = self.player;

        // Walk the player back to where it stood before the move.
        self.transfer((px, py), (fx, fy));

        if record.push {
            // The pushed box sits one square past the player, diametrically
            // opposite the square the player came from.
            let bx = px as i32 + (px as i32 - fx as i32);
            let by = py as i32 + (py as i32 - fy as i32);
            assert!(
                bx >= 0 && by >= 0 && (bx as usize) < self.width && (by as usize) < self.height,
                "push record points outside the grid"
            );
            self.transfer((bx as usize, by as usize), (px, py));
        }

        self.player = (fx, fy);
    }

    /// Check if all boxes are on goals (win condition).
    pub fn has_won(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Box)
    }

    /// Number of successful player actions since the board was built,
    /// counting undos as taking one action back.
    pub fn move_number(&self) -> usize {
        self.history.len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let mut line = String::new();
            for x in 0..self.width {
                line.push(self.get(x, y).to_char());
            }
            // Trim trailing padding to match original input format
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

use std::io::{self, Write};

use connect_agents::{Agent, MinimaxAgent};
use connect_core::{Column, GameState, Player, HEIGHT};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent},
    style::{Color as TermColor, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};

pub struct InteractiveGame {
    state: GameState,
    cursor_col: u8,
    message: String,
    move_history: Vec<Column>,
    engine: MinimaxAgent,
}

impl InteractiveGame {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            cursor_col: 3,
            message: String::from("Use h/l or arrows to move, Enter to drop, q to quit"),
            move_history: Vec::new(),
            engine: MinimaxAgent::new(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(Hide)?;
        stdout.execute(Clear(ClearType::All))?;

        let result = self.game_loop();

        // Cleanup
        stdout.execute(Show)?;
        terminal::disable_raw_mode()?;
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;

        result
    }

    fn game_loop(&mut self) -> io::Result<()> {
        loop {
            if self.state.is_over() {
                self.message = match self.state.winner() {
                    Some(player) => format!("{player} wins! Press n for a new game, q to quit"),
                    None => String::from("Draw! Press n for a new game, q to quit"),
                };
            }
            self.draw_board()?;

            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1),
                    KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if self.drop_at_cursor() {
                            self.engine_move()?;
                        }
                    }
                    KeyCode::Char('u') => self.undo_move(),
                    KeyCode::Char('n') => self.new_game(),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn move_cursor(&mut self, dx: i8) {
        let new_col = self.cursor_col as i8 + dx;
        if (0..7).contains(&new_col) {
            self.cursor_col = new_col as u8;
        }
    }

    fn cursor_column(&self) -> Column {
        // cursor_col stays in 0..7 by construction
        Column::new(self.cursor_col).unwrap()
    }

    fn drop_at_cursor(&mut self) -> bool {
        let col = self.cursor_column();

        if !self.state.is_legal(col) {
            self.message = format!("Column {col} is not playable");
            return false;
        }

        self.state = self.state.apply_move(col);
        self.move_history.push(col);
        self.message = format!("You played column {col}");
        !self.state.is_over()
    }

    fn engine_move(&mut self) -> io::Result<()> {
        self.message = String::from("Engine thinking...");
        self.draw_board()?;

        if let Some(col) = self.engine.best_move(&self.state) {
            self.state = self.state.apply_move(col);
            self.move_history.push(col);
            self.message = format!("Engine played column {col}");
        }

        Ok(())
    }

    fn undo_move(&mut self) {
        if self.move_history.len() >= 2 {
            // Undo both player and engine moves
            self.move_history.pop();
            self.move_history.pop();

            // Rebuild position
            let history = self.move_history.clone();
            self.state = GameState::new();
            for &col in &history {
                self.state = self.state.apply_move(col);
            }

            self.message = String::from("Undid last move");
        } else {
            self.message = String::from("Nothing to undo");
        }
    }

    fn new_game(&mut self) {
        self.state = GameState::new();
        self.move_history.clear();
        self.cursor_col = 3;
        self.message = String::from("New game started!");
    }

    fn draw_board(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(MoveTo(0, 0))?;
        stdout.execute(Clear(ClearType::All))?;

        println!("Connect Four (vim keys: h/l, Enter to drop)\r");
        println!("Commands: u=undo, n=new, q=quit\r");
        println!("\r");

        // Cursor marker above the board
        print!("  ");
        for col in Column::all() {
            if col.index() == self.cursor_col as usize {
                print!(" v");
            } else {
                print!("  ");
            }
        }
        println!("\r");

        for row in (0..HEIGHT).rev() {
            print!(" |");
            for col in Column::all() {
                match self.state.board.cell(col, row) {
                    Some(Player::Red) => {
                        stdout.execute(SetForegroundColor(TermColor::Red))?;
                        print!(" o");
                        stdout.execute(ResetColor)?;
                    }
                    Some(Player::Yellow) => {
                        stdout.execute(SetForegroundColor(TermColor::Yellow))?;
                        print!(" o");
                        stdout.execute(ResetColor)?;
                    }
                    None => print!(" ."),
                }
            }
            println!(" |\r");
        }

        print!("  ");
        for col in Column::all() {
            print!(" {col}");
        }
        println!("\r");
        println!("\r");

        println!(
            "{} to move | {} moves played\r",
            self.state.turn,
            self.move_history.len()
        );
        println!("\r");
        println!("{}\r", self.message);

        stdout.flush()?;
        Ok(())
    }
}

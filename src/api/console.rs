//! Console - Line-based prompt for the human player
//!
//! One integer per line: `0` passes (draws from the stock), `-k` plays the
//! k-th tile of the hand at the head, `k` plays it at the tail.

use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

use crate::domain::input::{InputError, MoveInput};
use crate::domain::value_objects::{Chain, ChainError, End, Hand, Move};

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";
pub const ILLEGAL_MOVE: &str = "Illegal move. Please try again.";

/// Console bound to the process's stdin and stdout
pub type StdConsole = Console<BufReader<Stdin>, Stdout>;

pub fn stdio() -> StdConsole {
    Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn read_line(&mut self) -> Result<&str, InputError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line).await? == 0 {
            return Err(InputError::Closed);
        }
        Ok(self.line.trim())
    }

    async fn say(&mut self, message: &str) -> Result<(), InputError> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

/// Turn one line of input into a move on `hand`
pub fn parse_move(line: &str, hand: &Hand) -> Result<Move, InputError> {
    let line = line.trim();
    let index: i64 = line
        .parse()
        .map_err(|_| InputError::NotANumber(line.to_string()))?;

    if index == 0 {
        return Ok(Move::Pass);
    }

    // 1-based, the sign only picks the end
    let tile = usize::try_from(index.unsigned_abs())
        .ok()
        .and_then(|position| hand.get(position - 1))
        .ok_or(InputError::OutOfRange {
            index,
            hand_size: hand.len(),
        })?;

    let end = if index < 0 { End::Head } else { End::Tail };
    Ok(Move::Place { end, tile })
}

#[async_trait]
impl<R, W> MoveInput for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn choose_move(&mut self, hand: &Hand, _chain: &Chain) -> Result<Move, InputError> {
        loop {
            let parsed = {
                let line = self.read_line().await?;
                parse_move(line, hand)
            };

            match parsed {
                Ok(mv) => return Ok(mv),
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Rejected input: {}", e);
                    self.say(INVALID_INPUT).await?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn acknowledge(&mut self) -> Result<(), InputError> {
        self.read_line().await.map(|_| ())
    }

    async fn reject_move(&mut self, _error: &ChainError) -> Result<(), InputError> {
        self.say(ILLEGAL_MOVE).await
    }
}

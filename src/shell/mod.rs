//! Interactive command shell.
//!
//! Reads one command per line, dispatches it through the [`CommandHandler`]
//! and writes the reply. Command output goes to the writer (stdout in the
//! binary); logs go to stderr.

pub mod command;
pub mod handlers;

pub use command::{is_exit, split_line, Command, EXIT_COMMANDS};
pub use handlers::{CommandHandler, HELP_TEXT, NOTHING_FOUND, NO_CONTACTS, UNKNOWN_COMMAND};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

/// Greeting printed when the session starts.
pub const GREETING: &str = "You can use 'help' command to see all commands";

/// Farewell printed when the session ends.
pub const FAREWELL: &str = "Good bye!";

const PROMPT: &str = ">>> ";

/// Run the shell on stdin and stdout until an exit word or end of input.
pub async fn run_shell(handler: &mut CommandHandler) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_session(handler, stdin, stdout).await
}

/// Run a session over arbitrary streams.
///
/// Ends on an exit word or end of input. A storage failure ends the session
/// with an error.
pub async fn run_session<R, W>(handler: &mut CommandHandler, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", GREETING).as_bytes()).await?;

    let mut lines = reader.lines();
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("End of input, closing session");
            break;
        };

        if is_exit(&line) {
            writer.write_all(format!("{}\n", FAREWELL).as_bytes()).await?;
            break;
        }

        let Some((name, args)) = split_line(&line) else {
            continue;
        };

        let reply = handler.dispatch(&name, args.as_slice())?;
        writer.write_all(format!("{}\n", reply).as_bytes()).await?;
    }

    writer.flush().await?;
    Ok(())
}

//! Stdin reader feeding the manual trigger and shutdown channels.
use std::io::BufRead;

use crossbeam_channel::Sender;
use log::{info, warn};
use price_common::{BoardError, Result};

use crate::command::BoardCommand;

/// Blocking loop that reads commands line by line until `Quit` or end of input.
///
/// `Refresh` sends on `manual`, `Quit` sends on `shutdown`. Unknown input is
/// logged and ignored. Returns an error if reading fails or the scheduler is gone.
pub fn read_commands<R: BufRead>(reader: R, manual: Sender<()>, shutdown: Sender<()>) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        match BoardCommand::parse_line(&line) {
            Ok(BoardCommand::Refresh) => {
                info!("Manual refresh requested");
                manual
                    .send(())
                    .map_err(|e| BoardError::ChannelSend(format!("manual trigger: {}", e)))?;
            }
            Ok(BoardCommand::Quit) => {
                info!("Quit requested");
                shutdown
                    .send(())
                    .map_err(|e| BoardError::ChannelSend(format!("shutdown: {}", e)))?;
                return Ok(());
            }
            Err(_) => warn!("Unknown command '{}'. Press Enter to refresh, q to quit.", line.trim()),
        }
    }
    info!("Input closed; manual refresh disabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::io::Cursor;

    #[test]
    fn forwards_refresh_and_quit() {
        let (manual_tx, manual_rx) = unbounded();
        let (shutdown_tx, shutdown_rx) = unbounded();
        let input = Cursor::new("\nr\nnonsense\nq\nr\n");

        read_commands(input, manual_tx, shutdown_tx).unwrap();

        assert_eq!(manual_rx.try_iter().count(), 2);
        assert_eq!(shutdown_rx.try_iter().count(), 1);
    }

    #[test]
    fn end_of_input_is_not_shutdown() {
        let (manual_tx, manual_rx) = unbounded();
        let (shutdown_tx, shutdown_rx) = unbounded();

        read_commands(Cursor::new("r\n"), manual_tx, shutdown_tx).unwrap();

        assert_eq!(manual_rx.try_iter().count(), 1);
        assert_eq!(shutdown_rx.try_iter().count(), 0);
    }

    #[test]
    fn stopped_scheduler_is_an_error() {
        let (manual_tx, manual_rx) = unbounded();
        let (shutdown_tx, _shutdown_rx) = unbounded();
        drop(manual_rx);

        let result = read_commands(Cursor::new("\n"), manual_tx, shutdown_tx);
        assert!(matches!(result, Err(BoardError::ChannelSend(_))));
    }
}

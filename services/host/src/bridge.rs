//! Host page bridge
//!
//! Reads host events as JSON lines, feeds them to the page controller and
//! writes one JSON frame per batch of display instructions. Flip reveals are
//! scheduled as timer tasks that hand their ticket back over a channel, so
//! the page itself is only ever touched from this loop.

use anyhow::{Context, Result};
use serde::Serialize;
use shared::errors::ServiceError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, error, info, warn, Level};
use widgets::{DisplayInstruction, HostEvent, Page, PendingFlip};

/// One line written back to the host
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame<'a> {
    Render(&'a [DisplayInstruction]),
    Error(&'a ServiceError),
}

pub struct Bridge<W> {
    page: Page,
    writer: W,
    completions_tx: mpsc::UnboundedSender<PendingFlip>,
    completions_rx: mpsc::UnboundedReceiver<PendingFlip>,
    in_flight: usize,
}

impl<W: AsyncWrite + Unpin> Bridge<W> {
    pub fn new(page: Page, writer: W) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            page,
            writer,
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    /// Run until the input closes and every scheduled flip has been revealed
    pub async fn run<R: AsyncBufRead + Unpin>(mut self, reader: R) -> Result<W> {
        let initial = self.page.initial_render();
        self.write_frame(&Frame::Render(&initial)).await?;

        let mut lines = reader.lines();
        let mut input_open = true;

        info!("Bridge ready for host events");

        loop {
            if !input_open && self.in_flight == 0 {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line.context("Failed to read host event")? {
                        Some(line) => self.handle_line(&line).await?,
                        None => {
                            debug!(in_flight = self.in_flight, "Host input closed");
                            input_open = false;
                        }
                    }
                }
                Some(flip) = self.completions_rx.recv() => {
                    self.in_flight -= 1;
                    let instructions = self.page.complete_flip(&flip);
                    if !instructions.is_empty() {
                        self.write_frame(&Frame::Render(&instructions)).await?;
                    }
                }
            }
        }

        info!("Bridge stopped");
        Ok(self.writer)
    }

    async fn handle_line(&mut self, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        let output = match HostEvent::parse(line).and_then(|event| self.page.handle(event)) {
            Ok(output) => output,
            Err(service_error) => {
                log_service_error(&service_error);
                return self.write_frame(&Frame::Error(&service_error)).await;
            }
        };

        if let Some(flip) = output.scheduled_flip {
            self.schedule(flip);
        }
        if !output.instructions.is_empty() {
            self.write_frame(&Frame::Render(&output.instructions)).await?;
        }
        Ok(())
    }

    fn schedule(&mut self, flip: PendingFlip) {
        self.in_flight += 1;
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            sleep(flip.delay()).await;
            // Receiver lives as long as the bridge; a closed channel means shutdown
            let _ = tx.send(flip);
        });
    }

    async fn write_frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        let mut line = serde_json::to_vec(frame).map_err(ServiceError::serialization_error)?;
        line.push(b'\n');
        self.writer
            .write_all(&line)
            .await
            .context("Failed to write frame to host")?;
        self.writer.flush().await.context("Failed to flush host output")?;
        Ok(())
    }
}

fn severity(service_error: &ServiceError) -> Level {
    service_error.category.log_level().parse().unwrap_or(Level::ERROR)
}

fn log_service_error(service_error: &ServiceError) {
    let level = severity(service_error);
    if level >= Level::DEBUG {
        debug!(error = %service_error, "Event ignored");
    } else if level >= Level::WARN {
        warn!(error = %service_error, "Event rejected");
    } else {
        error!(error = %service_error, "Event failed");
    }
}

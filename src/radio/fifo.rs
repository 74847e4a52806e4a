use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use crate::types::FifoStatus;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Get the FIFO_STATUS register.
    pub fn get_fifo_status(&mut self) -> Result<FifoStatus, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::FIFO_STATUS)?;
        Ok(FifoStatus::from_bits(self._buf[1]))
    }

    /// Discard all payloads in the TX FIFO.
    pub fn flush_tx(&mut self) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(0, commands::FLUSH_TX)
    }

    /// Discard all payloads in the RX FIFO.
    pub fn flush_rx(&mut self) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(0, commands::FLUSH_RX)
    }

    /// Retransmit the last payload until the TX FIFO is flushed.
    ///
    /// The reuse flag drops on a payload write or flush.
    pub fn reuse_tx_payload(&mut self) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(0, commands::REUSE_TX_PL)
    }

    /// Get the width of the payload at the top of the RX FIFO (the
    /// R_RX_PL_WID command).
    ///
    /// A value above 32 means the FIFO is corrupt and ought to be flushed.
    pub fn get_rx_payload_width(&mut self) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, commands::R_RX_PL_WID)?;
        Ok(self._buf[1])
    }

    /// Pop `buf.len()` bytes of the payload at the top of the RX FIFO
    /// (the R_RX_PAYLOAD command) into `buf`, MSB first.
    ///
    /// `buf` may span at most 32 bytes.
    pub fn read_rx_payload(
        &mut self,
        buf: &mut [u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        let len = buf.len();
        if len > 32 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(len as u8, commands::R_RX_PAYLOAD)?;
        self._buf[1..(len + 1)].reverse();
        buf.copy_from_slice(&self._buf[1..(len + 1)]);
        Ok(())
    }

    /// Push `buf` into the TX FIFO (the W_TX_PAYLOAD command) without
    /// starting a transmission; see [`Nrf24l01::send()`] for the full engine.
    ///
    /// `buf` is given MSB first and may span at most 32 bytes.
    pub fn write_tx_payload(
        &mut self,
        buf: &[u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        let len = buf.len();
        if len > 32 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        let mut staging = [0u8; 32];
        staging[..len].copy_from_slice(buf);
        staging[..len].reverse();
        self.spi_write_buf(commands::W_TX_PAYLOAD, &staging[..len])
    }

    /// Push `buf` into the TX FIFO flagged to suppress the receiver's ACK
    /// (the W_TX_PAYLOAD_NO_ACK command).
    ///
    /// Requires the FEATURE register's EN_DYN_ACK bit; see
    /// [`Nrf24l01::set_tx_payload_with_no_ack()`].
    pub fn write_payload_with_no_ack(
        &mut self,
        buf: &[u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        let len = buf.len();
        if len > 32 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        let mut staging = [0u8; 32];
        staging[..len].copy_from_slice(buf);
        staging[..len].reverse();
        self.spi_write_buf(commands::W_TX_PAYLOAD_NO_ACK, &staging[..len])
    }
}

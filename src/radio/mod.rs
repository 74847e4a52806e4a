use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

mod auto_ack;
mod channel;
mod config;
mod constants;
mod fifo;
mod init;
mod irq;
mod payload_length;
mod pipe;
mod rf_setup;
mod send;
mod status;
pub use auto_ack::{auto_retransmit_delay_from_us, auto_retransmit_delay_to_us};
pub use constants::{commands, mnemonics, registers};

use crate::types::{DriverInfo, StatusFlags, TxState};

/// An collection of error types to describe driver malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24l01Error<SPI, DO> {
    /// The radio was used before [`Nrf24l01::init()`] marked the handle ready.
    NotInitialized,
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// An argument was out of the chip's range (payload or address too long,
    /// channel, pipe, or retransmit delay out of range).
    InvalidArgument,
    /// [`Nrf24l01::send()`] exhausted its polling budget without observing a
    /// completion interrupt.
    SendTimeout,
    /// The chip exhausted its retransmit budget
    /// ([`Nrf24l01::irq_handler()`] observed MAX_RT).
    SendFailed,
}

/// This struct implements a register-level driver for the nRF24L01 transceiver.
///
/// Getters and setters exist for every field of the chip's register map, along
/// with a blocking [`send()`](fn@Nrf24l01::send) engine and an
/// [`irq_handler()`](fn@Nrf24l01::irq_handler) that services the chip's IRQ
/// pin. All multi-byte values cross the public API in MSB-first order; the
/// driver performs the byte reversal the chip's LSB-first wire order requires.
pub struct Nrf24l01<'a, SPI, DO, DELAY> {
    /// The CE pin for the radio.
    ///
    /// This is only exposed for advanced manipulation of active TX/RX mode.
    /// [`Nrf24l01::send()`] and [`Nrf24l01::irq_handler()`] drive it
    /// themselves; prefer [`Nrf24l01::set_active()`] for manual control.
    pub ce_pin: DO,
    _spi: SPI,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _status: StatusFlags,
    _inited: bool,
    _tx_state: &'a TxState,
    _poll_count: u16,
    _poll_delay_ms: u32,
}

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`Nrf24l01`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    ///
    /// `tx_state` is the send-completion cell shared with the context that
    /// services the radio's IRQ pin. When one handle does both jobs, a
    /// `static` cell is the easiest way to satisfy the lifetime.
    pub fn new(
        ce_pin: DO,
        spi: SPI,
        delay_impl: DELAY,
        tx_state: &'a TxState,
    ) -> Nrf24l01<'a, SPI, DO, DELAY> {
        Nrf24l01 {
            ce_pin,
            _spi: spi,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            _inited: false,
            _tx_state: tx_state,
            _poll_count: 5000,
            _poll_delay_ms: 1,
        }
    }

    pub(crate) fn require_init(&self) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        if self._inited {
            Ok(())
        } else {
            Err(Nrf24l01Error::NotInitialized)
        }
    }

    pub(crate) fn spi_transfer(
        &mut self,
        len: u8,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len as usize])
            .map_err(Nrf24l01Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    pub(crate) fn spi_read(
        &mut self,
        len: u8,
        command: u8,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self.spi_transfer(len + 1)
    }

    pub(crate) fn spi_write_byte(
        &mut self,
        command: u8,
        byte: u8,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self._buf[0] = command | commands::W_REGISTER;
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    pub(crate) fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self._buf[0] = command | commands::W_REGISTER;
        let buf_len = buf.len();
        self._buf[1..(buf_len + 1)].copy_from_slice(&buf[..buf_len]);
        self.spi_transfer(buf_len as u8 + 1)
    }

    /// Write `buf` to the register at `reg` verbatim.
    ///
    /// This is an escape hatch for fields without a dedicated setter; it
    /// performs no read-modify-write. `buf` may span at most 32 bytes.
    pub fn set_reg(
        &mut self,
        reg: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if buf.len() > 32 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_write_buf(reg, buf)
    }

    /// Read the register at `reg` verbatim into `buf`.
    ///
    /// `buf` may span at most 32 bytes.
    pub fn get_reg(
        &mut self,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        let buf_len = buf.len();
        if buf_len > 32 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(buf_len as u8, reg)?;
        buf.copy_from_slice(&self._buf[1..(buf_len + 1)]);
        Ok(())
    }

    /// The STATUS register copy captured by the most recent SPI transfer.
    ///
    /// The chip shifts STATUS out on every transfer, so this is refreshed by
    /// any operation that touches the bus. No bus traffic is performed here;
    /// use [`Nrf24l01::get_interrupt()`] for a fresh read.
    pub fn status(&self) -> StatusFlags {
        self._status
    }
}

/// Static information about this driver and the chip it supports.
pub fn info() -> DriverInfo {
    DriverInfo {
        chip_name: "Nordic nRF24L01",
        manufacturer_name: "Nordic",
        interface: "SPI",
        supply_voltage_min_v: 1.9,
        supply_voltage_max_v: 3.6,
        max_current_ma: 13.5,
        temperature_min: -40.0,
        temperature_max: 85.0,
        driver_version: 1000,
    }
}

use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set the static payload length for the given RX `pipe` (0-5) in its
    /// RX_PW_Pn register.
    ///
    /// `len` spans 6 bits (0-32 is meaningful on the chip). Ignored for a pipe
    /// with dynamic payloads enabled. The write replaces the register, since
    /// the length field is all it holds.
    pub fn set_pipe_payload_number(
        &mut self,
        pipe: u8,
        len: u8,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 || len > 0x3F {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_write_byte(registers::RX_PW_P0 + pipe, len)
    }

    /// Get the static payload length for the given RX `pipe` (0-5).
    pub fn get_pipe_payload_number(
        &mut self,
        pipe: u8,
    ) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::RX_PW_P0 + pipe)?;
        Ok(self._buf[1] & 0x3F)
    }

    /// Enable or disable dynamic payload lengths on the given `pipe` (0-5) in
    /// the DYNPD register.
    ///
    /// Takes effect only while the FEATURE register's EN_DPL bit is set; see
    /// [`Nrf24l01::set_dynamic_payload()`].
    pub fn set_pipe_dynamic_payload(
        &mut self,
        pipe: u8,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::DYNPD)?;
        let out = self._buf[1] & !(1 << pipe) | ((enable as u8) << pipe);
        self.spi_write_byte(registers::DYNPD, out)
    }

    /// Are dynamic payload lengths enabled on the given `pipe` (0-5)?
    pub fn get_pipe_dynamic_payload(
        &mut self,
        pipe: u8,
    ) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::DYNPD)?;
        Ok(self._buf[1] >> pipe & 1 == 1)
    }

    /// Enable or disable the dynamic payload length feature (the FEATURE
    /// register's EN_DPL bit).
    pub fn set_dynamic_payload(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::FEATURE)?;
        let out = self._buf[1] & !4 | ((enable as u8) << 2);
        self.spi_write_byte(registers::FEATURE, out)
    }

    /// Is the dynamic payload length feature enabled?
    pub fn get_dynamic_payload(&mut self) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::FEATURE)?;
        Ok(self._buf[1] >> 2 & 1 == 1)
    }
}

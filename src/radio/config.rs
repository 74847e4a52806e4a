use super::{registers, Nrf24l01, Nrf24l01Error};
use crate::types::{Config, Mode};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set a single CONFIG register field, leaving the others untouched.
    pub fn set_config(
        &mut self,
        config: Config,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::CONFIG)?;
        let out = self._buf[1] & !(1 << config.into_bits()) | ((enable as u8) << config.into_bits());
        self.spi_write_byte(registers::CONFIG, out)
    }

    /// Is the given CONFIG register field set?
    pub fn get_config(
        &mut self,
        config: Config,
    ) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::CONFIG)?;
        Ok(self._buf[1] >> config.into_bits() & 1 == 1)
    }

    /// Set the operating mode (the CONFIG register's PRIM_RX bit).
    ///
    /// The mode takes effect when the CE pin goes high.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::CONFIG)?;
        let out = self._buf[1] & !1 | mode.into_bits();
        self.spi_write_byte(registers::CONFIG, out)
    }

    /// Get the operating mode (the CONFIG register's PRIM_RX bit).
    pub fn get_mode(&mut self) -> Result<Mode, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::CONFIG)?;
        Ok(Mode::from_bits(self._buf[1]))
    }
}

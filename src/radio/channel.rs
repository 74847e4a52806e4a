use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set the RF channel (the RF_CH register's 7-bit frequency field).
    ///
    /// The carrier lands at 2400 + `freq` MHz; `freq` spans 0-127. The
    /// register's reserved bit is left untouched.
    pub fn set_channel_frequency(
        &mut self,
        freq: u8,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if freq > 0x7F {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::RF_CH)?;
        let out = self._buf[1] & !0x7F | freq;
        self.spi_write_byte(registers::RF_CH, out)
    }

    /// Get the RF channel.
    pub fn get_channel_frequency(&mut self) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_CH)?;
        Ok(self._buf[1] & 0x7F)
    }
}

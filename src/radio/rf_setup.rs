use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use crate::types::{DataRate, OutputPower};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Set the over-the-air data rate (the RF_SETUP register's RF_DR bits).
    ///
    /// Both ends of a link must agree on the data rate. The two bits of the
    /// field are not adjacent in the register; [`DataRate`] hides that.
    pub fn set_data_rate(
        &mut self,
        data_rate: DataRate,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_SETUP)?;
        let out = self._buf[1] & !DataRate::MASK | data_rate.into_bits();
        self.spi_write_byte(registers::RF_SETUP, out)
    }

    /// Get the over-the-air data rate.
    pub fn get_data_rate(&mut self) -> Result<DataRate, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_SETUP)?;
        Ok(DataRate::from_bits(self._buf[1]))
    }

    /// Set the TX output power (the RF_SETUP register's RF_PWR bits).
    pub fn set_output_power(
        &mut self,
        power: OutputPower,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_SETUP)?;
        let out = self._buf[1] & !OutputPower::MASK | power.into_bits();
        self.spi_write_byte(registers::RF_SETUP, out)
    }

    /// Get the TX output power.
    pub fn get_output_power(&mut self) -> Result<OutputPower, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_SETUP)?;
        Ok(OutputPower::from_bits(self._buf[1]))
    }

    /// Emit an unmodulated carrier (the RF_SETUP register's CONT_WAVE bit).
    ///
    /// This is a test-equipment feature; pair it with
    /// [`Nrf24l01::set_force_pll_lock_signal()`] per the datasheet.
    pub fn set_continuous_carrier_transmit(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_SETUP)?;
        let out = self._buf[1] & !0x80 | ((enable as u8) << 7);
        self.spi_write_byte(registers::RF_SETUP, out)
    }

    /// Is the unmodulated carrier enabled?
    pub fn get_continuous_carrier_transmit(
        &mut self,
    ) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_SETUP)?;
        Ok(self._buf[1] >> 7 & 1 == 1)
    }

    /// Force the PLL to stay locked (the RF_SETUP register's PLL_LOCK bit).
    pub fn set_force_pll_lock_signal(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_SETUP)?;
        let out = self._buf[1] & !0x10 | ((enable as u8) << 4);
        self.spi_write_byte(registers::RF_SETUP, out)
    }

    /// Is the PLL forced to stay locked?
    pub fn get_force_pll_lock_signal(&mut self) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RF_SETUP)?;
        Ok(self._buf[1] >> 4 & 1 == 1)
    }
}
